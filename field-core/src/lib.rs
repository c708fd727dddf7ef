//! Core library for the interactive particle background.
//!
//! Main components:
//! - [`particle`] — particles and the fixed particle pool.
//! - [`phases`] — per-particle motion rules and link fading.
//! - [`simulator`] — the particle field: pointer, bounds and frame drawing.
//! - [`frame_loop`] — self-rescheduling driver that stops on surface loss.
//! - [`surface`] — drawable surface trait and a recording implementation.
//! - [`typing`] — typewriter headline state machine.
//! - [`counter`] — count-up statistics animation.
//! - [`config`] — scene configuration, loadable from YAML.
//! - [`error`] — error type shared by the above.
//! - [`types`] — shared ids and colours.

pub mod config;
pub mod counter;
pub mod error;
pub mod frame_loop;
pub mod particle;
pub mod phases;
pub mod simulator;
pub mod surface;
pub mod typing;
pub mod types;

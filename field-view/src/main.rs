//! Application entry point for the particle background viewer.
//!
//! This binary parses the command line, loads the scene file, and then
//! either opens an eframe window driven by [`Viewer`] or runs the field
//! headless against a recording surface.

mod headless;
mod scene;
mod surface;
mod viewer;

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use viewer::Viewer;

#[derive(Parser, Debug)]
#[command(about = "Interactive particle background")]
struct Args {
    /// YAML scene file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run this many frames without a window and log a summary.
    #[arg(long)]
    headless: Option<u64>,

    /// Surface width for headless runs.
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Surface height for headless runs.
    #[arg(long, default_value_t = 720.0)]
    height: f32,

    /// Seed for particle placement.
    #[arg(long)]
    seed: Option<u64>,
}

/// Starts the viewer or the headless runner.
///
/// ### Returns
/// - `Ok(())` once the window is closed or the headless run finishes.
/// - `Err` if the scene file cannot be read or parsed, the surface is
///   invalid, or eframe fails to create the window.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scene = scene::load(args.config.as_deref())?;

    if let Some(frames) = args.headless {
        return headless::run(&scene, frames, args.width, args.height, args.seed);
    }

    info!("opening viewer window");
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Particle Field",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(scene, args.seed)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

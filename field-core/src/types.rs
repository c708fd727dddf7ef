use serde::Deserialize;

/// Identifier for a particle in a [`crate::particle::ParticleSet`].
///
/// This is an index into `ParticleSet::particles`. The pool never grows or
/// shrinks, so an id stays valid for the lifetime of its simulator.
pub type ParticleId = usize;

/// An opaque 8-bit RGB colour.
///
/// Deserializes from a three-element sequence, e.g. `[147, 51, 234]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pairs this colour with an alpha in `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

/// An RGB colour with a floating point alpha, as passed to a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

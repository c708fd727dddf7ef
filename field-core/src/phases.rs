//! Per-particle update rules, applied in this order every frame:
//! 1. [`drift`] — advance the position by the velocity.
//! 2. [`pointer_pull`] — nudge particles that are close to the pointer.
//! 3. [`wrap`] — send particles that left the surface to the opposite edge.
//!
//! Connection strength between two particles is given by [`link_alpha`].

use crate::particle::Particle;
use glam::Vec2;

/// Advances a particle by one frame of its velocity.
#[inline]
pub fn drift(p: &mut Particle) {
    p.pos += p.vel;
}

/// Applies the pointer interaction to one particle.
///
/// With `d = pointer - pos`, a particle strictly closer than `radius` has
/// `strength * d` subtracted from its position. There is no clamping, so a
/// fast particle can overshoot and jitter around the pointer.
///
/// ### Returns
/// `true` if the particle was inside the radius and moved.
pub fn pointer_pull(p: &mut Particle, pointer: Option<Vec2>, radius: f32, strength: f32) -> bool {
    let Some(pointer) = pointer else {
        return false;
    };
    let d = pointer - p.pos;
    if d.length() < radius {
        p.pos -= d * strength;
        true
    } else {
        false
    }
}

/// Wraps a position independently per axis.
///
/// A coordinate below 0 jumps to the far edge, one beyond the far edge
/// jumps to 0. The edge itself is a valid position.
pub fn wrap(p: &mut Particle, bounds: Vec2) {
    if p.pos.x < 0.0 {
        p.pos.x = bounds.x;
    }
    if p.pos.x > bounds.x {
        p.pos.x = 0.0;
    }
    if p.pos.y < 0.0 {
        p.pos.y = bounds.y;
    }
    if p.pos.y > bounds.y {
        p.pos.y = 0.0;
    }
}

/// Stroke alpha of a link between particles `distance` apart.
///
/// Fades linearly from `max_alpha` at distance 0 to 0 at `radius`;
/// `None` when the particles are too far apart to be linked.
#[inline]
pub fn link_alpha(distance: f32, radius: f32, max_alpha: f32) -> Option<f32> {
    (distance < radius).then(|| max_alpha * (radius - distance) / radius)
}

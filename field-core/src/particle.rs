use crate::config::FieldConfig;
use glam::Vec2;
use rand::Rng;

/// A single drifting dot.
///
/// `size` and `opacity` are fixed at creation; only position and velocity
/// are visible mutably inside the crate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub(crate) pos: Vec2,
    pub(crate) vel: Vec2,
    size: f32,
    opacity: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, opacity: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            opacity,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// The fixed pool of particles owned by a simulator.
#[derive(Debug)]
pub struct ParticleSet {
    pub(crate) particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Scatters `cfg.count` particles uniformly over `[0, bounds]`.
    ///
    /// Samples are taken as `min + unit * (max - min)` rather than through a
    /// range so that degenerate ranges (a zero-sized surface, equal min and
    /// max in the config) never panic.
    pub fn random_in_bounds(bounds: Vec2, cfg: &FieldConfig, rng: &mut impl Rng) -> Self {
        let mut lerp = |min: f32, max: f32| min + rng.random::<f32>() * (max - min);

        let particles = (0..cfg.count)
            .map(|_| {
                let pos = Vec2::new(lerp(0.0, bounds.x), lerp(0.0, bounds.y));
                let vel = Vec2::new(
                    lerp(-cfg.max_speed, cfg.max_speed),
                    lerp(-cfg.max_speed, cfg.max_speed),
                );
                let size = lerp(cfg.min_size, cfg.max_size);
                let opacity = lerp(cfg.min_opacity, cfg.max_opacity);
                Particle::new(pos, vel, size, opacity)
            })
            .collect();

        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

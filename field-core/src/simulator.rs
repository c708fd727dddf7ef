//! The particle field simulator.
//!
//! [`ParticleSimulator`] owns the particle pool, the last pointer position
//! and the surface bounds. The host feeds it pointer and resize signals and
//! calls [`ParticleSimulator::frame`] once per display refresh.

use crate::{
    config::{FieldConfig, LinkMode},
    error::FieldError,
    particle::{Particle, ParticleSet},
    phases,
    surface::{Surface, checked_size},
    types::ParticleId,
};
use glam::Vec2;
use log::{debug, info};
use rand::Rng;

/// Counters gathered while drawing a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particles the pointer moved this frame.
    pub pulled: usize,
    /// Particles that crossed an edge and were wrapped.
    pub wrapped: usize,
    /// Connection lines drawn.
    pub links: usize,
}

#[derive(Debug)]
pub struct ParticleSimulator {
    particles: ParticleSet,
    cfg: FieldConfig,
    bounds: Vec2,
    pointer: Option<Vec2>,
}

impl ParticleSimulator {
    /// Creates a simulator with `cfg.count` random particles spread over
    /// the surface.
    ///
    /// ### Errors
    /// [`FieldError::InvalidSurface`] if the surface is detached or has an
    /// invalid size.
    pub fn new(
        surface: &impl Surface,
        cfg: FieldConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, FieldError> {
        let bounds = checked_size(surface)?;
        let particles = ParticleSet::random_in_bounds(bounds, &cfg, rng);
        info!(
            "particle field: {} particles on {}x{} surface",
            particles.len(),
            bounds.x,
            bounds.y
        );
        Ok(Self {
            particles,
            cfg,
            bounds,
            pointer: None,
        })
    }

    /// Creates a simulator over explicit particles; `cfg.count` is ignored.
    pub fn from_particles(
        surface: &impl Surface,
        cfg: FieldConfig,
        particles: Vec<Particle>,
    ) -> Result<Self, FieldError> {
        let bounds = checked_size(surface)?;
        Ok(Self {
            particles: ParticleSet::from_particles(particles),
            cfg,
            bounds,
            pointer: None,
        })
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Re-reads the surface size after a viewport change.
    ///
    /// Particles are not moved; any now outside the surface are wrapped on
    /// the next frame. On error the previous bounds are kept.
    pub fn on_resize(&mut self, surface: &impl Surface) -> Result<(), FieldError> {
        let bounds = checked_size(surface)?;
        if bounds != self.bounds {
            debug!("particle field resized to {}x{}", bounds.x, bounds.y);
            self.bounds = bounds;
        }
        Ok(())
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    /// Replaces the tunables that do not affect the pool itself.
    ///
    /// The particle count is fixed for the simulator's lifetime, so
    /// `cfg.count` and the spawn ranges only matter for a new simulator.
    pub fn set_config(&mut self, cfg: FieldConfig) {
        self.cfg = cfg;
    }

    /// Advances and draws one frame.
    ///
    /// The surface is cleared, then every particle in pool order drifts,
    /// reacts to the pointer, wraps, is drawn, and draws its links. Links
    /// see the already-moved positions of earlier particles and the
    /// previous-frame positions of later ones.
    ///
    /// ### Errors
    /// [`FieldError::SurfaceDetached`] if the surface is gone. Nothing is
    /// moved or drawn in that case.
    pub fn frame(&mut self, surface: &mut impl Surface) -> Result<FrameStats, FieldError> {
        if surface.size().is_none() {
            return Err(FieldError::SurfaceDetached);
        }
        surface.clear();

        let mut stats = FrameStats::default();
        let cfg = &self.cfg;
        let r = cfg.proximity_radius;

        for i in 0..self.particles.len() {
            let p = &mut self.particles.particles[i];
            phases::drift(p);
            if phases::pointer_pull(p, self.pointer, r, cfg.pointer_strength) {
                stats.pulled += 1;
            }
            let before = p.pos;
            phases::wrap(p, self.bounds);
            if p.pos != before {
                stats.wrapped += 1;
            }

            let p = *p;
            surface.fill_circle(p.pos, p.size(), cfg.particle_color.with_alpha(p.opacity()));

            for j in link_partners(cfg.link_mode, i, self.particles.len()) {
                let other = self.particles.particles[j].pos;
                let distance = p.pos.distance(other);
                if let Some(alpha) = phases::link_alpha(distance, r, cfg.link_alpha) {
                    surface.stroke_line(
                        p.pos,
                        other,
                        cfg.link_width,
                        cfg.link_color.with_alpha(alpha),
                    );
                    stats.links += 1;
                }
            }
        }

        Ok(stats)
    }
}

/// Particles that particle `i` is tested against when drawing links.
fn link_partners(mode: LinkMode, i: ParticleId, len: usize) -> std::ops::Range<ParticleId> {
    match mode {
        LinkMode::UniquePairs => 0..i,
        LinkMode::AllPairs => 0..len,
    }
}

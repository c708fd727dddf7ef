//! Windowless runs against a [`CommandBuffer`].

use anyhow::Result;
use field_core::{
    config::SceneConfig, frame_loop::FrameLoop, simulator::ParticleSimulator,
    surface::CommandBuffer,
};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

/// Totals over a headless run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub links: usize,
    pub wrapped: usize,
    pub pulled: usize,
}

/// Runs `frames` frames with the pointer parked at the surface centre.
pub fn run(
    scene: &SceneConfig,
    frames: u64,
    width: f32,
    height: f32,
    seed: Option<u64>,
) -> Result<()> {
    let summary = simulate(scene, frames, width, height, seed)?;
    info!(
        "headless run: {} frames, {} links, {} wraps, {} pointer pulls",
        summary.frames, summary.links, summary.wrapped, summary.pulled
    );
    Ok(())
}

pub fn simulate(
    scene: &SceneConfig,
    frames: u64,
    width: f32,
    height: f32,
    seed: Option<u64>,
) -> Result<RunSummary> {
    let mut surface = CommandBuffer::new(width, height);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut sim = ParticleSimulator::new(&surface, scene.field, &mut rng)?;
    sim.set_pointer(width / 2.0, height / 2.0);

    let mut frame_loop = FrameLoop::new();
    let mut summary = RunSummary::default();
    while summary.frames < frames && frame_loop.tick(&mut sim, &mut surface) {
        let stats = frame_loop.last_stats();
        summary.frames += 1;
        summary.links += stats.links;
        summary.wrapped += stats.wrapped;
        summary.pulled += stats.pulled;
        debug!("frame {}: {:?}", summary.frames, stats);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_requested_number_of_frames() {
        let summary = simulate(&SceneConfig::default(), 30, 640.0, 480.0, Some(1)).unwrap();
        assert_eq!(summary.frames, 30);
    }

    #[test]
    fn same_seed_same_summary() {
        let a = simulate(&SceneConfig::default(), 20, 640.0, 480.0, Some(8)).unwrap();
        let b = simulate(&SceneConfig::default(), 20, 640.0, 480.0, Some(8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_surface_is_an_error() {
        assert!(simulate(&SceneConfig::default(), 1, -5.0, 480.0, Some(1)).is_err());
    }
}

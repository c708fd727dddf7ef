use crate::{
    simulator::{FrameStats, ParticleSimulator},
    surface::Surface,
};
use log::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Drives a [`ParticleSimulator`] once per display refresh.
///
/// The host calls [`FrameLoop::tick`] from its frame callback and schedules
/// another callback only while `tick` returns `true`. A failing frame stops
/// the loop for good; it is never restarted.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    frames: u64,
    last_stats: FrameStats,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            frames: 0,
            last_stats: FrameStats::default(),
        }
    }

    pub fn tick(&mut self, sim: &mut ParticleSimulator, surface: &mut impl Surface) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        match sim.frame(surface) {
            Ok(stats) => {
                self.frames += 1;
                self.last_stats = stats;
                true
            }
            Err(err) => {
                warn!("stopping particle animation after {} frames: {}", self.frames, err);
                self.state = LoopState::Stopped;
                false
            }
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames completed successfully.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::FieldConfig, surface::CommandBuffer};
    use rand::{SeedableRng, rngs::StdRng};

    fn sim_on(buf: &CommandBuffer) -> ParticleSimulator {
        ParticleSimulator::new(buf, FieldConfig::default(), &mut StdRng::seed_from_u64(5)).unwrap()
    }

    #[test]
    fn keeps_scheduling_while_surface_is_attached() {
        let mut buf = CommandBuffer::new(320.0, 240.0);
        let mut sim = sim_on(&buf);
        let mut frames = FrameLoop::new();

        for _ in 0..10 {
            assert!(frames.tick(&mut sim, &mut buf));
        }
        assert_eq!(frames.frames(), 10);
        assert!(frames.is_running());
    }

    #[test]
    fn stops_for_good_once_surface_detaches() {
        let mut buf = CommandBuffer::new(320.0, 240.0);
        let mut sim = sim_on(&buf);
        let mut frames = FrameLoop::new();

        assert!(frames.tick(&mut sim, &mut buf));
        buf.detach();
        assert!(!frames.tick(&mut sim, &mut buf));
        assert_eq!(frames.state(), LoopState::Stopped);

        // A re-attached surface does not revive the loop.
        let mut fresh = CommandBuffer::new(320.0, 240.0);
        assert!(!frames.tick(&mut sim, &mut fresh));
        assert_eq!(frames.frames(), 1);
        assert!(fresh.commands.is_empty());
    }
}

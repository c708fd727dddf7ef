use crate::config::CounterConfig;

/// A number that climbs linearly from 0 to a target.
///
/// Every `tick_ms` the value grows by `target / (duration_ms / tick_ms)`.
/// The animation only runs after [`CounterAnimation::start`], and can be
/// started once.
#[derive(Debug)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    tick: f64,
    current: f64,
    /// Seconds accumulated towards the next tick.
    pending: f64,
    started: bool,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: u32, tick_ms: u32) -> Self {
        let tick_ms = tick_ms.max(1);
        let ticks = (f64::from(duration_ms) / f64::from(tick_ms)).max(1.0);
        Self {
            target,
            increment: f64::from(target) / ticks,
            tick: f64::from(tick_ms) / 1000.0,
            current: 0.0,
            pending: 0.0,
            started: false,
            finished: false,
        }
    }

    pub fn from_config(cfg: &CounterConfig) -> Self {
        Self::new(cfg.target, cfg.duration_ms, cfg.tick_ms)
    }

    /// Starts the animation; later calls are ignored.
    ///
    /// ### Returns
    /// `true` if this call started it.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    pub fn update(&mut self, dt: f64) {
        if !self.started || self.finished {
            return;
        }
        self.pending += dt;
        while self.pending >= self.tick && !self.finished {
            self.pending -= self.tick;
            self.current += self.increment;
            if self.current >= f64::from(self.target) {
                self.finished = true;
            }
        }
    }

    /// The value to show.
    pub fn value(&self) -> u32 {
        if self.finished {
            self.target
        } else {
            self.current.floor() as u32
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

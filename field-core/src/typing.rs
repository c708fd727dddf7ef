//! Typewriter headline effect.
//!
//! [`TypingEffect`] cycles through phrases as an explicit state machine:
//!
//! ```text
//! Typing --full--> PausingAtEnd --pause--> Deleting --empty--> PausingAtStart
//!   ^                                                              |
//!   +------------------------- next phrase ------------------------+
//! ```
//!
//! It is driven by elapsed time through [`TypingEffect::update`], so the
//! host can call it from any frame callback.

use crate::{config::TypingConfig, error::FieldError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PausingAtEnd,
    Deleting,
    PausingAtStart,
}

#[derive(Debug)]
pub struct TypingEffect {
    cfg: TypingConfig,
    phrase: usize,
    /// Number of characters (not bytes) of the current phrase on screen.
    shown: usize,
    phase: TypingPhase,
    /// Seconds until the next transition.
    wait: f64,
    done: bool,
}

/// Transitions allowed per update; a config of all-zero timings would
/// otherwise never leave the loop.
const MAX_STEPS_PER_UPDATE: usize = 4096;

impl TypingEffect {
    pub fn new(cfg: TypingConfig) -> Result<Self, FieldError> {
        if cfg.phrases.is_empty() {
            return Err(FieldError::EmptyPhrases);
        }
        let wait = ms(cfg.start_delay_ms);
        Ok(Self {
            cfg,
            phrase: 0,
            shown: 0,
            phase: TypingPhase::Typing,
            wait,
            done: false,
        })
    }

    /// Consumes `dt` seconds, performing every transition that falls due.
    pub fn update(&mut self, dt: f64) {
        if self.done {
            return;
        }
        self.wait -= dt;
        for _ in 0..MAX_STEPS_PER_UPDATE {
            if self.wait > 0.0 || self.done {
                return;
            }
            self.wait += self.step();
        }
        self.wait = self.wait.max(0.0);
    }

    /// Performs one transition and returns the delay before the next one.
    fn step(&mut self) -> f64 {
        let len = self.current_phrase().chars().count();
        match self.phase {
            TypingPhase::Typing if self.shown < len => {
                self.shown += 1;
                ms(self.cfg.type_ms)
            }
            TypingPhase::Typing => {
                if !self.cfg.repeat {
                    self.done = true;
                    return 0.0;
                }
                self.phase = TypingPhase::PausingAtEnd;
                ms(self.cfg.pause_end_ms)
            }
            TypingPhase::PausingAtEnd => {
                self.phase = TypingPhase::Deleting;
                0.0
            }
            TypingPhase::Deleting if self.shown > 0 => {
                self.shown -= 1;
                ms(self.cfg.delete_ms)
            }
            TypingPhase::Deleting => {
                self.phase = TypingPhase::PausingAtStart;
                ms(self.cfg.pause_start_ms)
            }
            TypingPhase::PausingAtStart => {
                self.phrase = (self.phrase + 1) % self.cfg.phrases.len();
                self.phase = TypingPhase::Typing;
                0.0
            }
        }
    }

    fn current_phrase(&self) -> &str {
        &self.cfg.phrases[self.phrase]
    }

    /// The part of the current phrase that is on screen.
    pub fn visible_text(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// `true` once a non-repeating effect has typed its phrase.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

fn ms(v: u32) -> f64 {
    f64::from(v) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(phrases: &[&str]) -> TypingConfig {
        TypingConfig {
            phrases: phrases.iter().map(|s| s.to_string()).collect(),
            ..TypingConfig::default()
        }
    }

    #[test]
    fn rejects_empty_phrase_list() {
        assert_eq!(
            TypingEffect::new(cfg(&[])).unwrap_err(),
            FieldError::EmptyPhrases
        );
    }

    #[test]
    fn waits_for_start_delay_then_types_one_char_per_interval() {
        let mut t = TypingEffect::new(cfg(&["abc"])).unwrap();

        t.update(0.45);
        assert_eq!(t.visible_text(), "");

        t.update(0.1);
        assert_eq!(t.visible_text(), "a");

        t.update(0.1);
        assert_eq!(t.visible_text(), "ab");

        t.update(0.1);
        assert_eq!(t.visible_text(), "abc");
        assert_eq!(t.phase(), TypingPhase::Typing);

        t.update(0.1);
        assert_eq!(t.phase(), TypingPhase::PausingAtEnd);
        assert_eq!(t.visible_text(), "abc");
    }

    #[test]
    fn full_cycle_moves_to_next_phrase() {
        let mut t = TypingEffect::new(cfg(&["ab", "xyz"])).unwrap();

        // start delay, two characters, then the end check
        t.update(0.75);
        assert_eq!(t.phase(), TypingPhase::PausingAtEnd);
        assert_eq!(t.visible_text(), "ab");

        // end pause; the first deletion follows without delay
        t.update(1.975);
        assert_eq!(t.phase(), TypingPhase::Deleting);
        assert_eq!(t.visible_text(), "a");

        t.update(0.05);
        assert_eq!(t.visible_text(), "");

        t.update(0.05);
        assert_eq!(t.phase(), TypingPhase::PausingAtStart);

        t.update(0.5);
        assert_eq!(t.phrase_index(), 1);
        assert_eq!(t.phase(), TypingPhase::Typing);
        assert_eq!(t.visible_text(), "x");
    }

    #[test]
    fn phrase_index_wraps_around() {
        let mut t = TypingEffect::new(cfg(&["a", "b"])).unwrap();
        let mut seen_second = false;
        let mut back_to_first = false;

        for _ in 0..2_000 {
            t.update(0.01);
            match t.phrase_index() {
                1 => seen_second = true,
                0 if seen_second => back_to_first = true,
                _ => {}
            }
        }

        assert!(seen_second && back_to_first);
    }

    #[test]
    fn slices_on_character_boundaries() {
        let mut t = TypingEffect::new(cfg(&["a • b"])).unwrap();
        t.update(0.75);
        assert_eq!(t.visible_text(), "a •");
    }

    #[test]
    fn single_shot_stops_on_full_phrase() {
        let mut c = cfg(&["hi", "unused"]);
        c.repeat = false;
        let mut t = TypingEffect::new(c).unwrap();

        t.update(60.0);

        assert!(t.is_done());
        assert_eq!(t.visible_text(), "hi");
        assert_eq!(t.phrase_index(), 0);
    }

    #[test]
    fn zero_timings_do_not_hang() {
        let c = TypingConfig {
            phrases: vec!["abc".into()],
            type_ms: 0,
            delete_ms: 0,
            pause_end_ms: 0,
            pause_start_ms: 0,
            start_delay_ms: 0,
            repeat: true,
        };
        let mut t = TypingEffect::new(c).unwrap();
        t.update(0.5);
        assert!(t.visible_text().len() <= 3);
    }
}

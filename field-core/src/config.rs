//! Scene configuration, loadable from YAML.
//!
//! Every struct here is `#[serde(default)]`, so a scene file only needs to
//! name the values it changes:
//!
//! ```yaml
//! field:
//!   count: 80
//!   link_mode: all_pairs
//! typing:
//!   phrases: ["Gamer • Developer • Content Creator"]
//! counters:
//!   - label: "Projects"
//!     target: 42
//! ```

use crate::types::Rgb;
use serde::Deserialize;

/// Which particle pairs are tested for a connection line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMode {
    /// Each unordered pair at most once, never a particle with itself.
    #[default]
    UniquePairs,
    /// Every particle against the whole pool, itself included. Draws each
    /// pair twice and a zero-length self line, as the original page does.
    AllPairs,
}

/// Parameters of the particle field.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub count: usize,
    /// Velocity components are drawn from `[-max_speed, max_speed]`.
    pub max_speed: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub min_opacity: f32,
    pub max_opacity: f32,
    /// Distance under which the pointer and other particles interact.
    pub proximity_radius: f32,
    /// Fraction of the pointer displacement applied per frame.
    pub pointer_strength: f32,
    /// Link alpha at distance zero; fades linearly to 0 at the radius.
    pub link_alpha: f32,
    pub link_width: f32,
    pub particle_color: Rgb,
    pub link_color: Rgb,
    pub link_mode: LinkMode,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 50,
            max_speed: 0.25,
            min_size: 1.0,
            max_size: 3.0,
            min_opacity: 0.2,
            max_opacity: 0.7,
            proximity_radius: 100.0,
            pointer_strength: 0.01,
            link_alpha: 0.1,
            link_width: 0.5,
            particle_color: Rgb(147, 51, 234),
            link_color: Rgb(6, 182, 212),
            link_mode: LinkMode::UniquePairs,
        }
    }
}

/// Timings and phrases for [`crate::typing::TypingEffect`], in milliseconds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_end_ms: u32,
    pub pause_start_ms: u32,
    pub start_delay_ms: u32,
    /// When `false` the first phrase is typed once and left on screen.
    pub repeat: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: vec!["Gamer • Developer • Content Creator".to_owned()],
            type_ms: 100,
            delete_ms: 50,
            pause_end_ms: 2000,
            pause_start_ms: 500,
            start_delay_ms: 500,
            repeat: true,
        }
    }
}

/// One animated statistic shown under the headline.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub label: String,
    pub target: u32,
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            target: 0,
            duration_ms: 2000,
            tick_ms: 16,
        }
    }
}

/// Top-level scene file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub field: FieldConfig,
    pub typing: TypingConfig,
    pub counters: Vec<CounterConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let counter = |label: &str, target| CounterConfig {
            label: label.to_owned(),
            target,
            ..CounterConfig::default()
        };
        Self {
            field: FieldConfig::default(),
            typing: TypingConfig::default(),
            counters: vec![
                counter("Projects", 25),
                counter("Videos", 120),
                counter("Hours streamed", 1500),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "field:\n  count: 80\n  link_mode: all_pairs\n";
        let cfg: SceneConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(cfg.field.count, 80);
        assert_eq!(cfg.field.link_mode, LinkMode::AllPairs);
        assert_eq!(cfg.field.proximity_radius, 100.0);
        assert_eq!(cfg.field.pointer_strength, 0.01);
        assert_eq!(cfg.typing, TypingConfig::default());
        assert_eq!(cfg.counters.len(), 3);
    }

    #[test]
    fn colours_and_counters_parse_from_sequences() {
        let yaml = "\
field:
  particle_color: [255, 0, 0]
counters:
  - label: Wins
    target: 7
";
        let cfg: SceneConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(cfg.field.particle_color, Rgb(255, 0, 0));
        assert_eq!(cfg.counters.len(), 1);
        assert_eq!(cfg.counters[0].label, "Wins");
        assert_eq!(cfg.counters[0].target, 7);
        assert_eq!(cfg.counters[0].duration_ms, 2000);
    }

    #[test]
    fn empty_document_is_the_default_scene() {
        let cfg: SceneConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, SceneConfig::default());
    }
}

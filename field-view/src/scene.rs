use anyhow::{Context, Result};
use field_core::config::SceneConfig;
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads a scene file, or the default scene when no path is given.
pub fn load(path: Option<&Path>) -> Result<SceneConfig> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };
    let file =
        File::open(path).with_context(|| format!("opening scene file {}", path.display()))?;
    let scene: SceneConfig = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing scene file {}", path.display()))?;
    info!("loaded scene from {}", path.display());
    Ok(scene)
}

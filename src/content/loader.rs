//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use crate::controller::ControllerConfig;

pub const CONTROLLER_FILE: &str = "controller.ron";
pub const PATROLLERS_FILE: &str = "patrollers.ron";

/// Error type for content loading failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

fn parse<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Parse controller tuning from RON text. Missing fields keep their defaults.
pub fn parse_controller_config(contents: &str) -> Result<ControllerConfig, ContentLoadError> {
    parse(CONTROLLER_FILE, contents)
}

/// Parse a DataFile<PatrolDef> from RON text.
pub fn parse_patrollers(contents: &str) -> Result<Vec<PatrolDef>, ContentLoadError> {
    parse::<DataFile<PatrolDef>>(PATROLLERS_FILE, contents).map(|data| data.items)
}

/// Load a single ControllerConfig struct (not wrapped in DataFile).
pub fn load_controller_config(path: &Path) -> Result<ControllerConfig, ContentLoadError> {
    let contents = read_file(path)?;
    parse(&path.display().to_string(), &contents)
}

/// Load a RON file containing a DataFile<PatrolDef> wrapper.
pub fn load_patrollers(path: &Path) -> Result<Vec<PatrolDef>, ContentLoadError> {
    let contents = read_file(path)?;
    parse::<DataFile<PatrolDef>>(&path.display().to_string(), &contents).map(|data| data.items)
}

/// Load all content from assets/data/*.ron.
/// Returns errors for any files that fail to load.
pub fn load_all_content(base_path: &Path) -> Result<PlatformerContent, Vec<ContentLoadError>> {
    let mut content = PlatformerContent::default();
    let mut errors = Vec::new();

    match load_controller_config(&base_path.join(CONTROLLER_FILE)) {
        Ok(config) => content.controller = config,
        Err(e) => errors.push(e),
    }

    match load_patrollers(&base_path.join(PATROLLERS_FILE)) {
        Ok(items) => content.patrollers = items,
        Err(e) => errors.push(e),
    }

    if errors.is_empty() {
        Ok(content)
    } else {
        Err(errors)
    }
}

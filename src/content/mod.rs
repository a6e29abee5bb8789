//! Content domain: data-driven controller tuning and patrol layouts.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::{DataFile, PatrolDef, PlatformerContent};
pub use loader::{
    CONTROLLER_FILE, ContentLoadError, PATROLLERS_FILE, load_all_content, load_controller_config,
    load_patrollers, parse_controller_config, parse_patrollers,
};

use bevy::prelude::*;
use std::path::PathBuf;

/// Default location of the RON files, relative to the working directory.
pub const DEFAULT_CONTENT_PATH: &str = "assets/data";

/// Loads [`PlatformerContent`] when the app is built. Files that fail to
/// load are reported and replaced by defaults.
pub struct ContentPlugin {
    pub base_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_CONTENT_PATH),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(load_or_default(&self.base_path));
    }
}

/// Loads everything it can from `base_path`, falling back per file.
pub fn load_or_default(base_path: &std::path::Path) -> PlatformerContent {
    match load_all_content(base_path) {
        Ok(content) => {
            info!("{}", content.summary());
            content
        }
        Err(errors) => {
            for error in &errors {
                warn!("{}", error);
            }
            let controller =
                load_controller_config(&base_path.join(CONTROLLER_FILE)).unwrap_or_default();
            let patrollers = load_patrollers(&base_path.join(PATROLLERS_FILE)).unwrap_or_default();
            warn!(
                "Content incomplete ({} error(s)), using defaults where needed",
                errors.len()
            );
            PlatformerContent {
                controller,
                patrollers,
            }
        }
    }
}

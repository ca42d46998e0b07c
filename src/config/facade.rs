//! Config loading facade: assembles the layered sources into an `AppStateConfig`.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file, workspace_file};
use super::AppStateConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, global file, workspace files and environment, in that order.
    pub fn load(workspace_root: &Path) -> Result<AppStateConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder)?;
        let config: AppStateConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load a single explicit config file; environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<AppStateConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path));
        let builder = environment::add_to_builder(builder)?;
        Ok(builder.build()?.try_deserialize()?)
    }
}

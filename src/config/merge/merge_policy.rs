//! Merge rules: defaults and override order.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Region used when neither the flag, the environment nor a config file names one.
pub const DEFAULT_REGION: &str = "amer";

/// Create a Config builder with merge policy defaults applied.
/// Later sources override earlier ones: defaults, global file, workspace files, environment.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder().set_default("state.region", DEFAULT_REGION)
}

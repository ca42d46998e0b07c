//! Environment source: the runtime identity and state settings of the calling app.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;

pub const ENV_RUNTIME_NAMESPACE: &str = "APPSTATE_RUNTIME_NAMESPACE";
pub const ENV_RUNTIME_AUTH: &str = "APPSTATE_RUNTIME_AUTH";
pub const ENV_STATE_REGION: &str = "APPSTATE_STATE_REGION";
pub const ENV_STATE_ENDPOINT: &str = "APPSTATE_STATE_ENDPOINT";

const OVERRIDES: [(&str, &str); 4] = [
    ("runtime.namespace", ENV_RUNTIME_NAMESPACE),
    ("runtime.auth", ENV_RUNTIME_AUTH),
    ("state.region", ENV_STATE_REGION),
    ("state.endpoint", ENV_STATE_ENDPOINT),
];

/// Apply environment overrides. Empty variables count as unset.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (key, var) in OVERRIDES {
        let value = std::env::var(var).ok().filter(|v| !v.trim().is_empty());
        builder = builder.set_override_option(key, value)?;
    }
    Ok(builder)
}

//! Configuration System
//!
//! Layered configuration for the state CLI: merge-policy defaults, the user-level file,
//! the project file and environment overrides. The result is validated once at startup and
//! handed to every command through the run context; nothing reads configuration lazily.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use merge::DEFAULT_REGION;
pub use sources::environment::{
    ENV_RUNTIME_AUTH, ENV_RUNTIME_NAMESPACE, ENV_STATE_ENDPOINT, ENV_STATE_REGION,
};
pub use sources::workspace_file::workspace_config_dir;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppStateConfig {
    /// Runtime identity of the app the state belongs to
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// State store settings
    #[serde(default)]
    pub state: StateConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Runtime identity: the namespace scoping all keys and its credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub namespace: Option<String>,
    pub auth: Option<String>,
}

impl fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("namespace", &self.namespace)
            .field("auth", &self.auth.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// State store region.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Amer,
    Emea,
    Apac,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Amer => "amer",
            Region::Emea => "emea",
            Region::Apac => "apac",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default)]
    pub region: Region,

    /// Custom endpoint replacing the regional default
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Validated runtime identity handed to the state client.
#[derive(Clone)]
pub struct RuntimeIdentity {
    pub namespace: String,
    pub auth: String,
}

impl fmt::Debug for RuntimeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeIdentity")
            .field("namespace", &self.namespace)
            .field("auth", &"<redacted>")
            .finish()
    }
}

impl RuntimeConfig {
    /// Both namespace and auth are required to talk to the store.
    pub fn identity(&self) -> Result<RuntimeIdentity, ApiError> {
        let present = |v: &Option<String>| {
            v.as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        };
        match (present(&self.namespace), present(&self.auth)) {
            (Some(namespace), Some(auth)) => Ok(RuntimeIdentity { namespace, auth }),
            _ => Err(ApiError::ConfigError(missing_runtime_message())),
        }
    }
}

fn missing_runtime_message() -> String {
    format!(
        "This command is expected to be run in the root of an application project.\n  Please make sure the '{}' and '{}' environment variables are configured.",
        ENV_RUNTIME_NAMESPACE, ENV_RUNTIME_AUTH
    )
}

impl AppStateConfig {
    /// Region for this invocation: the flag wins over configuration.
    pub fn effective_region(&self, flag: Option<Region>) -> Region {
        flag.unwrap_or(self.state.region)
    }

    /// Validate the configuration needed by state commands.
    pub fn validate(&self) -> Result<RuntimeIdentity, ApiError> {
        if let Some(endpoint) = &self.state.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ApiError::ConfigError(format!(
                    "Invalid state endpoint '{}': must start with http:// or https://",
                    endpoint
                )));
            }
        }
        self.runtime.identity()
    }
}

//! Export configuration.
//!
//! Values come from the process environment after the local settings file
//! has been loaded into it. Variables already set in the environment win
//! over the file.

use crate::error::ExportError;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings file loaded before reading the environment
pub const DEFAULT_ENV_FILE: &str = "var/.env";

/// Directory exports are written to unless overridden
pub const DEFAULT_OUTPUT_DIR: &str = "output";

const API_URL_VAR: &str = "NETBOX_API_URL";
const API_TOKEN_VAR: &str = "NETBOX_API_TOKEN";
const OUTPUT_DIR_VAR: &str = "NETBOX_EXPORT_OUTPUT_DIR";

/// Configuration for a single export run
#[derive(Clone)]
pub struct ExportConfig {
    /// NetBox base URL, e.g. `https://netbox.example.com`
    pub api_url: String,
    /// NetBox API token
    pub api_token: String,
    /// Directory the CSV file is written to
    pub output_dir: PathBuf,
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl ExportConfig {
    /// Load `env_file` into the environment (if it exists) and read the configuration
    pub fn load(env_file: &Path) -> Result<Self, ExportError> {
        match dotenvy::from_path(env_file) {
            Ok(()) => debug!("Loaded settings from {}", env_file.display()),
            Err(e) if e.not_found() => {
                debug!("No settings file at {}, using process environment", env_file.display());
            }
            Err(e) => {
                return Err(ExportError::InvalidConfig(format!(
                    "failed to read {}: {}",
                    env_file.display(),
                    e
                )));
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| {
                    ExportError::InvalidConfig(format!("{} environment variable is required", key))
                })
        };

        let api_url = required(API_URL_VAR)?;
        let api_token = required(API_TOKEN_VAR)?;
        let output_dir = lookup(OUTPUT_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

        Ok(Self {
            api_url,
            api_token,
            output_dir,
        })
    }
}

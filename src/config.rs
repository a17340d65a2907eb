//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::collections::HashMap;
use std::env;
use std::path::Path;

use crate::constants::{defaults, env as keys};
use crate::error::{Error, Result};
use crate::render::OutputFormat;

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Output format used when none is given on the command line
    pub format: OutputFormat,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            format: OutputFormat::default(),
            log_filter: defaults::LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a `.env` style file without touching the
    /// process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // Iterating keeps the file's values out of the process environment.
        #[allow(deprecated)]
        let iter = dotenv::from_path_iter(path).map_err(|e| {
            Error::config(
                format!("cannot read {}: {e}", path.display()),
                "Check that the file exists and is readable",
            )
        })?;

        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| {
                Error::config(
                    format!("invalid line in {}: {e}", path.display()),
                    "Lines must look like KEY=value",
                )
            })?;
            vars.insert(key, value);
        }

        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(format) = lookup(keys::FORMAT) {
            config.format = format.parse()?;
        }

        if let Some(filter) = lookup(keys::LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

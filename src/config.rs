//! Configuration management
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Environment variables: `NOTION_*` prefix
//!
//! `NOTION_KEY` supplies the bearer token; `NOTION_BASE_URL` and
//! `NOTION_VERSION` override the API endpoint and protocol version.

use config::{Config, Environment};
use serde::Deserialize;

use crate::application::{ApplicationError, ApplicationResult};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_VERSION: &str = "2025-09-03";

/// Runtime settings for the exporter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bearer token (`NOTION_KEY`)
    pub key: Option<String>,
    /// API endpoint (`NOTION_BASE_URL`)
    pub base_url: String,
    /// Protocol version header value (`NOTION_VERSION`)
    pub version: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from defaults overlaid with `NOTION_*` env vars.
    pub fn load() -> ApplicationResult<Self> {
        let config = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)
            .map_err(config_err)?
            .set_default("version", DEFAULT_VERSION)
            .map_err(config_err)?
            .add_source(Environment::with_prefix("NOTION"))
            .build()
            .map_err(config_err)?;

        config.try_deserialize().map_err(config_err)
    }

    /// The bearer token. Absence is a fatal configuration error, checked
    /// once at startup before any input is read or any request is made.
    pub fn require_key(&self) -> ApplicationResult<&str> {
        match self.key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ApplicationError::Config {
                message: "NOTION_KEY is not set".to_string(),
            }),
        }
    }
}

fn config_err(e: config::ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

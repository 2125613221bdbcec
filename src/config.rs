//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! tide-config.toml file. It provides a centralized way to configure the
//! backend base URL, request timeout, and the session identity used by the
//! CLI driver.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from tide-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,
    /// Session identity and host capability settings for the CLI
    pub zalo: ZaloConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the backend API, including the trailing `/api/` segment
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Session identity the CLI threads through every call.
///
/// In production the mini-app runtime supplies these per user; the flow
/// itself always takes them as an explicit parameter and never reads them
/// from ambient state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZaloConfig {
    /// Platform user id
    pub user_id: String,
    /// Platform access token for the session
    pub access_token: String,
    /// Optional pre-issued geolocation token for exercising the flow
    /// without a host runtime; absent means the denial path is exercised
    pub geo_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig {
                base_url: "http://localhost:8000/api/".to_string(),
                timeout_secs: 30,
            },
            zalo: ZaloConfig {
                user_id: String::new(),
                access_token: String::new(),
                geo_token: None,
            },
        }
    }
}

impl Config {
    /// Load configuration from tide-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("tide-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    tracing::info!(base_url = %config.api.base_url, "loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(error = %e, "invalid config file format, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("no config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Save current configuration to tide-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("tide-config.toml", contents)?;
        Ok(())
    }
}

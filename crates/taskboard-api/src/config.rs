use std::time::Duration;

use anyhow::{Context, Result};

/// Server configuration loaded from environment variables.
///
/// | Env Var                          | Default   |
/// |----------------------------------|-----------|
/// | `TASKBOARD_HOST`                 | `0.0.0.0` |
/// | `TASKBOARD_PORT`                 | `3000`    |
/// | `TASKBOARD_CORS_ORIGINS`         | (any)     |
/// | `TASKBOARD_REQUEST_TIMEOUT_SECS` | `30`      |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in the environment. Empty allows any origin.
    pub cors_origins: Vec<String>,
    /// Set in whole seconds through the environment.
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("TASKBOARD_HOST").unwrap_or(defaults.host);

        let port = match lookup("TASKBOARD_PORT") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("TASKBOARD_PORT must be a valid port, got {v:?}"))?,
            None => defaults.port,
        };

        let cors_origins = lookup("TASKBOARD_CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        let request_timeout = match lookup("TASKBOARD_REQUEST_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(v.trim().parse().with_context(|| {
                format!("TASKBOARD_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got {v:?}")
            })?),
            None => defaults.request_timeout,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout,
        })
    }
}

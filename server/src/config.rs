//! Host server configuration read from the environment.
//!
//! Leptos itself reads `LEPTOS_*` variables (site root, reload port) through
//! `get_configuration`; this module covers the host's own settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected an integer between 1 and 65535")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self { port: env_port("PORT")? })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Parse a listen port from `key`, defaulting when unset or blank.
pub(crate) fn env_port(key: &str) -> Result<u16, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(DEFAULT_PORT);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    match trimmed.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw)),
    }
}

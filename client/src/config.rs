//! Build-time client configuration.
//!
//! The WASM bundle cannot read the process environment at runtime, so the API
//! base URL is baked in from `PROJECTPULSE_API_BASE_URL` when the crate is
//! compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend location used when no override is compiled in.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Base URL every REST path is appended to.
pub fn api_base_url() -> &'static str {
    resolve_api_base_url(option_env!("PROJECTPULSE_API_BASE_URL"))
}

fn resolve_api_base_url(raw: Option<&'static str>) -> &'static str {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
}

//! Configuration resolution
//!
//! Layers, lowest precedence first: built-in defaults, the YAML file given
//! with `--config`, environment variables, command-line flags. Environment
//! lookups accept a deprecated fallback name and log a warning when it is
//! the one that matched.

use crate::error::ProbeResult;
use careergpt_probe_common::config::ProbeConfig;
use std::path::{Path, PathBuf};

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use careergpt_probe::config::get_env_with_fallback;
///
/// let url = get_env_with_fallback("CAREERGPT_BASE_URL", "BACKEND_URL");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Like [`get_env_with_fallback`], returning `default` when neither is set
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Like [`get_env_with_fallback`], parsed into `T`
///
/// Returns `default` when neither variable is set or the value does not parse.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    match get_env_with_fallback(new_name, old_name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    variable = new_name,
                    value = %raw,
                    "Ignoring unparsable environment value"
                );
                default
            }
        },
        None => default,
    }
}

/// Log level from `CAREERGPT_LOG_LEVEL` (old: `LOG_LEVEL`), default `info`
pub fn log_level_from_env() -> String {
    get_env_with_fallback_or("CAREERGPT_LOG_LEVEL", "LOG_LEVEL", "info")
}

/// Values given on the command line; `None` leaves the lower layer alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--base-url`
    pub base_url: Option<String>,
    /// `--timeout`
    pub timeout_secs: Option<u64>,
    /// `--pause-ms`
    pub pause_ms: Option<u64>,
    /// `--admin-token`
    pub admin_token: Option<String>,
    /// `--resume-file`
    pub resume_file: Option<PathBuf>,
}

/// Apply environment variables on top of `config`
pub fn apply_env(config: &mut ProbeConfig) {
    if let Some(url) = get_env_with_fallback("CAREERGPT_BASE_URL", "BACKEND_URL") {
        config.base_url = url;
    }
    config.timeout_secs = get_env_with_fallback_parse(
        "CAREERGPT_TIMEOUT_SECS",
        "PROBE_TIMEOUT_SECS",
        config.timeout_secs,
    );
    config.pause_ms =
        get_env_with_fallback_parse("CAREERGPT_PAUSE_MS", "PROBE_PAUSE_MS", config.pause_ms);
    if let Some(token) = get_env_with_fallback("CAREERGPT_ADMIN_TOKEN", "ADMIN_TOKEN") {
        config.admin_token = Some(token);
    }
    if let Ok(email) = std::env::var("CAREERGPT_ACCOUNT_EMAIL") {
        config.account.email = Some(email);
    }
    if let Ok(password) = std::env::var("CAREERGPT_ACCOUNT_PASSWORD") {
        config.account.password = password;
    }
}

/// Apply command-line overrides on top of `config`
pub fn apply_overrides(config: &mut ProbeConfig, overrides: &Overrides) {
    if let Some(url) = &overrides.base_url {
        config.base_url = url.clone();
    }
    if let Some(secs) = overrides.timeout_secs {
        config.timeout_secs = secs;
    }
    if let Some(ms) = overrides.pause_ms {
        config.pause_ms = ms;
    }
    if let Some(token) = &overrides.admin_token {
        config.admin_token = Some(token.clone());
    }
    if let Some(path) = &overrides.resume_file {
        config.resume_file = Some(path.clone());
    }
}

/// Build the effective configuration and validate it
pub fn resolve(config_file: Option<&Path>, overrides: &Overrides) -> ProbeResult<ProbeConfig> {
    let mut config = match config_file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading configuration file");
            ProbeConfig::from_yaml_file(path)?
        }
        None => ProbeConfig::default(),
    };
    apply_env(&mut config);
    apply_overrides(&mut config, overrides);
    config.base_url = config.base_url.trim().trim_end_matches('/').to_string();
    config.validate()?;
    Ok(config)
}

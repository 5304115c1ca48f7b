// crates/course-gate-config/src/config.rs
// ============================================================================
// Module: Course Gate Configuration
// Description: Configuration loading and validation for course gate hosts.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: course-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section defaults, so an absent file or an empty one yields a gate
//! with stock routes, conservative flags, and English dates. Anything else
//! wrong with the file fails closed: unknown keys, oversized input, and
//! invalid routes are all errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use course_gate_core::AccessFlags;
use course_gate_core::Locale;
use course_gate_core::RouteTable;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "course-gate.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "COURSE_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Course gate deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Host routes referenced by access decisions.
    pub routes: RouteTable,
    /// Platform-wide access flag defaults.
    pub flags: AccessFlags,
    /// Display locale configuration.
    pub locale: LocaleConfig,
}

impl GateConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: the explicit `path`, then the `COURSE_GATE_CONFIG`
    /// environment variable, then `course-gate.toml` in the working
    /// directory. A missing explicit or environment path is an I/O error; a
    /// missing default file yields [`GateConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(resolved) = resolve_path(path)? else {
            return Ok(Self::default());
        };
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.routes
            .validate()
            .map_err(|err| ConfigError::Invalid(format!("routes: {err}")))?;
        Ok(())
    }
}

/// Display locale section of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocaleConfig {
    /// Language tag used to localize gated start dates.
    pub language: Locale,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
///
/// Returns `Ok(None)` when no path was given, the environment variable is
/// unset, and the default file does not exist.
fn resolve_path(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = path {
        return Ok(Some(path.to_path_buf()));
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(Some(PathBuf::from(env_path)));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_NAME);
    if default.exists() {
        return Ok(Some(default));
    }
    Ok(None)
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn validate_path_accepts_plain_name() {
        assert!(validate_path(Path::new(DEFAULT_CONFIG_NAME)).is_ok());
    }

    #[test]
    fn validate_path_rejects_oversized_component() {
        let component = "a".repeat(MAX_PATH_COMPONENT_LENGTH + 1);
        let path = PathBuf::from(component);
        let result = validate_path(&path);
        assert!(result.is_err(), "oversized component should fail");
        assert!(result.unwrap_err().to_string().contains("component too long"));
    }

    #[test]
    fn validate_path_rejects_oversized_total() {
        let component = "a".repeat(MAX_PATH_COMPONENT_LENGTH);
        let segments = vec![component; MAX_TOTAL_PATH_LENGTH / MAX_PATH_COMPONENT_LENGTH + 1];
        let path = PathBuf::from(segments.join("/"));
        let result = validate_path(&path);
        assert!(result.is_err(), "oversized total path should fail");
        assert!(result.unwrap_err().to_string().contains("max length"));
    }

    #[test]
    fn resolve_path_prefers_explicit_argument() {
        let explicit = Path::new("configs/gate.toml");
        let resolved = resolve_path(Some(explicit)).unwrap();
        assert_eq!(resolved, Some(explicit.to_path_buf()));
    }

    #[test]
    fn validate_reports_route_section() {
        let config = GateConfig {
            routes: RouteTable {
                dashboard_path: "dashboard".to_string(),
                ..RouteTable::default()
            },
            ..GateConfig::default()
        };
        let result = config.validate();
        assert!(result.is_err(), "relative route should fail validation");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("routes:"), "message should name the section: {message}");
    }
}

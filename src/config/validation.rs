//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (chain id, log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Accepted log levels, lowercase.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Normalize a log level name, rejecting anything outside [`LOG_LEVELS`].
///
/// Also used as the clap value parser for `--log-level`.
pub fn parse_log_level(raw: &str) -> Result<String, String> {
    let level = raw.to_ascii_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(format!("'{}' is not one of {}", raw, LOG_LEVELS.join(", ")))
    }
}

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("plugin.chain_id must be non-zero")]
    ZeroChainId,

    #[error("plugin.data_dir_path must not be empty")]
    EmptyDataDir,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.plugin.chain_id == 0 {
        errors.push(ValidationError::ZeroChainId);
    }

    if config.plugin.data_dir_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyDataDir);
    }

    if parse_log_level(&config.observability.log_level).is_err() {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn collects_every_error() {
        let mut config = AppConfig::default();
        config.plugin.chain_id = 0;
        config.plugin.data_dir_path = PathBuf::new();
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroChainId,
                ValidationError::EmptyDataDir,
                ValidationError::UnknownLogLevel("loud".into()),
            ]
        );
    }

    #[test]
    fn parse_log_level_normalizes_case() {
        assert_eq!(parse_log_level("WARN"), Ok("warn".to_string()));
        assert_eq!(parse_log_level("trace"), Ok("trace".to_string()));
    }

    #[test]
    fn parse_log_level_rejects_unknown() {
        let err = parse_log_level("chatty").unwrap_err();
        assert_eq!(err, "'chatty' is not one of trace, debug, info, warn, error");
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = AppConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}

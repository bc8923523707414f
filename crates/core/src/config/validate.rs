use super::{types::Config, ConfigError};

/// Smallest limit that still fits one tag (`cp` plus a single digit).
const MIN_CHAR_LIMIT: usize = 3;

/// Validate configuration
/// Currently validates:
/// - Search character limit fits at least one tag
/// - Input paths are not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.search.char_limit < MIN_CHAR_LIMIT {
        return Err(ConfigError::ValidationError(format!(
            "search.char_limit must be at least {}",
            MIN_CHAR_LIMIT
        )));
    }

    if config.data.captures_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "data.captures_path cannot be empty".to_string(),
        ));
    }

    if config.data.evolutions_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "data.evolutions_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DataConfig, SearchConfig};
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_char_limit_too_small_fails() {
        let config = Config {
            search: SearchConfig { char_limit: 2 },
            ..Config::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_empty_path_fails() {
        let config = Config {
            data: DataConfig {
                captures_path: PathBuf::new(),
                ..DataConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }
}

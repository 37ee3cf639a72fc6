use std::env;
use std::path::PathBuf;

/// Environment variable naming the fenjing executable.
const FENJING_PATH_VAR: &str = "FENJING_PATH";

/// Configuration error types
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    MissingExecutablePath(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingExecutablePath(var) => {
                write!(f, "{} environment variable not set", var)
            }
        }
    }
}

/// Immutable server configuration, resolved once at startup.
/// The executable path is never re-read from the environment per call.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub fenjing_path: PathBuf,
}

impl ScannerConfig {
    /// Resolve the configuration from the process environment.
    /// An unset or empty FENJING_PATH is a startup-time fatal condition.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(FENJING_PATH_VAR)
    }

    fn from_env_var(var: &'static str) -> Result<Self, ConfigError> {
        match env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(Self {
                fenjing_path: PathBuf::from(value),
            }),
            _ => Err(ConfigError::MissingExecutablePath(var)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_var_unset() {
        let err = ScannerConfig::from_env_var("FENJING_TEST_UNSET").unwrap_err();
        assert_eq!(err, ConfigError::MissingExecutablePath("FENJING_TEST_UNSET"));
        assert!(err.to_string().contains("environment variable not set"));
    }

    #[test]
    fn test_from_env_var_empty() {
        env::set_var("FENJING_TEST_EMPTY", "");
        assert!(ScannerConfig::from_env_var("FENJING_TEST_EMPTY").is_err());
    }

    #[test]
    fn test_from_env_var_set() {
        env::set_var("FENJING_TEST_SET", "/usr/local/bin/fenjing");
        let config = ScannerConfig::from_env_var("FENJING_TEST_SET").unwrap();
        assert_eq!(config.fenjing_path, PathBuf::from("/usr/local/bin/fenjing"));
    }
}

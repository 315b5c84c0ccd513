//! Driver configuration.
//!
//! Every setting comes from the command line, with an environment variable
//! fallback handled by clap:
//!
//! | Flag          | Environment     |
//! |---------------|-----------------|
//! | `--verbose`   | `LOXC_VERBOSE`  |
//! | `--no-color`  | `LOXC_NO_COLOR` |
//! | `--log`       | `LOXC_LOG`      |

/// Log filter used when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "debug";

/// Settings for one driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Raise logging to debug level.
    pub verbose: bool,

    /// Use ANSI colors in log output.
    pub color: bool,

    /// Explicit `tracing` filter directives; overrides `verbose`.
    pub log_filter: Option<String>,
}

impl Config {
    /// Returns the filter directives logging should start with.
    pub fn log_directives(&self) -> &str {
        match &self.log_filter {
            Some(directives) => directives,
            None if self.verbose => VERBOSE_LOG_FILTER,
            None => DEFAULT_LOG_FILTER,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            log_filter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(Config::default().log_directives(), "warn");
    }

    #[test]
    fn test_verbose_directives() {
        let config = Config {
            verbose: true,
            ..Config::default()
        };
        assert_eq!(config.log_directives(), "debug");
    }

    #[test]
    fn test_explicit_filter_wins() {
        let config = Config {
            verbose: true,
            log_filter: Some("loxc_lex=trace".to_string()),
            ..Config::default()
        };
        assert_eq!(config.log_directives(), "loxc_lex=trace");
    }
}

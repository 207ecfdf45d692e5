use crate::error::{SqlError, SqlResult};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDir {
    type Err = SqlError;

    fn from_str(s: &str) -> SqlResult<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDir::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDir::Desc)
        } else {
            Err(SqlError::InvalidDirection(s.to_string()))
        }
    }
}

/// Configuration for a [`StatementBuilder`](crate::StatementBuilder).
///
/// Defaults reproduce the plain builder: descending ORDER BY when no direction
/// is given, and finished statements logged (truncated to 200 bytes) when the
/// `tracing` feature is on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Direction used by `order_by(name, None)`.
    pub default_direction: SortDir,
    /// Emit each statement returned by `end()` at DEBUG.
    pub log_statements: bool,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_log_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_direction: SortDir::Desc,
            log_statements: true,
            max_log_length: Some(200),
        }
    }
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from TOML. Missing keys keep their defaults.
    ///
    /// ```toml
    /// default_direction = "asc"
    /// log_statements = false
    /// max_log_length = 80
    /// ```
    pub fn from_toml_str(raw: &str) -> SqlResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Set the direction used when `order_by` gets no explicit one.
    pub fn with_default_direction(mut self, dir: SortDir) -> Self {
        self.default_direction = dir;
        self
    }

    /// Enable or disable statement logging.
    pub fn with_log_statements(mut self, enabled: bool) -> Self {
        self.log_statements = enabled;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_log_length(mut self, len: usize) -> Self {
        self.max_log_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_log_length = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = BuilderConfig::new();
        assert_eq!(cfg.default_direction, SortDir::Desc);
        assert!(cfg.log_statements);
        assert_eq!(cfg.max_log_length, Some(200));
    }

    #[test]
    fn setters_chain() {
        let cfg = BuilderConfig::new()
            .with_default_direction(SortDir::Asc)
            .with_log_statements(false)
            .no_truncate();
        assert_eq!(cfg.default_direction, SortDir::Asc);
        assert!(!cfg.log_statements);
        assert_eq!(cfg.max_log_length, None);
    }

    #[test]
    fn loads_partial_toml() {
        let cfg = BuilderConfig::from_toml_str("default_direction = \"asc\"\n").unwrap();
        assert_eq!(cfg.default_direction, SortDir::Asc);
        assert!(cfg.log_statements);

        let cfg = BuilderConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, BuilderConfig::default());
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = BuilderConfig::from_toml_str("default_direction = \"sideways\"").unwrap_err();
        assert!(matches!(err, SqlError::Config(_)));
    }

    #[test]
    fn parses_direction() {
        assert_eq!("ASC".parse::<SortDir>().unwrap(), SortDir::Asc);
        assert_eq!("desc".parse::<SortDir>().unwrap(), SortDir::Desc);
        assert_eq!(
            "up".parse::<SortDir>().unwrap_err(),
            SqlError::InvalidDirection("up".into())
        );
    }
}

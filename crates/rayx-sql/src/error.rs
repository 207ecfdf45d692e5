//! Error types for rayx-sql

use thiserror::Error;

/// Result type alias for rayx-sql operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for statement building.
///
/// The default builder methods never return these; they are produced by the
/// strict `try_*` variants and at the dynamic (JSON/TOML) input boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SqlError {
    /// A predicate carried an operator other than `equals`/`like`
    #[error("Unsupported operator '{operator}' for key '{key}'")]
    UnsupportedOperator { key: String, operator: String },

    /// A literal that is neither a number nor a string
    #[error("Unsupported literal type: {kind}")]
    UnsupportedLiteral { kind: String },

    /// Sort direction other than `asc`/`desc`
    #[error("Invalid sort direction: {0}")]
    InvalidDirection(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl SqlError {
    /// Create an unsupported operator error
    pub fn unsupported_operator(key: impl Into<String>, operator: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            key: key.into(),
            operator: operator.into(),
        }
    }

    /// Create an unsupported literal error
    pub fn unsupported_literal(kind: impl Into<String>) -> Self {
        Self::UnsupportedLiteral { kind: kind.into() }
    }

    /// Check if this is an unsupported operator error
    pub fn is_unsupported_operator(&self) -> bool {
        matches!(self, Self::UnsupportedOperator { .. })
    }

    /// Check if this is an unsupported literal error
    pub fn is_unsupported_literal(&self) -> bool {
        matches!(self, Self::UnsupportedLiteral { .. })
    }
}

impl From<toml::de::Error> for SqlError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

//! Error types for clausekit

use thiserror::Error;

/// Result type alias for clausekit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Dialect misconfiguration, detected by `Dialect::validate` or when loading a config.
///
/// Never auto-corrected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Dialect name is empty or whitespace
    #[error("dialect name is not set")]
    MissingName,

    /// No placeholder style configured
    #[error("dialect placeholder style is not set")]
    MissingPlaceholder,

    /// Placeholder style string not recognized
    #[error("unknown placeholder style: {0:?}")]
    UnknownPlaceholder(String),

    /// Quoting style string not recognized
    #[error("unknown quoting style: {0:?}")]
    UnknownQuoting(String),

    /// Config file could not be parsed
    #[error("failed to parse dialect config: {0}")]
    Parse(String),

    /// Config file could not be read
    #[error("failed to read dialect config: {0}")]
    Io(String),
}

/// Condition-level validation error, recorded on the condition itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Column name is blank
    #[error("column definition is required")]
    MissingColumn,

    /// Operator token not recognized
    #[error("invalid or unsupported operator: {0:?}")]
    UnsupportedOperator(String),

    /// Positional arguments were not one value or an operator/value pair
    #[error("too many arguments: expected 1 or 2, got {0}")]
    TooManyArguments(usize),
}

/// Builder-level error returned from `build()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No FROM target, or an empty one
    #[error("FROM clause is required")]
    MissingFrom,

    /// A stored token carries a join type that cannot be rendered
    #[error("invalid condition type: {0}")]
    InvalidConditionType(String),

    /// Strict mode rejected a condition while it was added
    #[error("invalid condition: {0}")]
    InvalidCondition(#[from] ValidationError),
}

/// Umbrella error for all clausekit operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl Error {
    /// Check if this is a dialect configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a condition validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a missing FROM error
    pub fn is_missing_from(&self) -> bool {
        matches!(self, Self::Build(BuildError::MissingFrom))
    }
}

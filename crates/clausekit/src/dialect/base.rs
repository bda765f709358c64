//! The configurable base dialect and the built-in presets.

use super::config::{DialectConfig, PlaceholderStyle, Quoting};
use super::Dialect;
use crate::error::ConfigError;
use crate::value::Value;

/// A dialect driven entirely by its [`DialectConfig`].
///
/// Custom dialects wrap a `BaseDialect` and override individual [`Dialect`] methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDialect {
    config: DialectConfig,
}

impl BaseDialect {
    /// Wrap a config without validating it.
    pub fn new(config: DialectConfig) -> Self {
        Self { config }
    }

    /// Wrap a config after validating it.
    pub fn from_config(config: DialectConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// No quoting, bare `?` placeholders, no optional features.
    pub fn generic() -> Self {
        Self::new(DialectConfig::new("generic").placeholder(PlaceholderStyle::Question))
    }

    pub fn postgres() -> Self {
        Self::new(
            DialectConfig::new("postgres")
                .quoting(Quoting::Double)
                .placeholder(PlaceholderStyle::Dollar)
                .aliasing(true)
                .returning(true)
                .upsert(true),
        )
    }

    pub fn mysql() -> Self {
        Self::new(
            DialectConfig::new("mysql")
                .quoting(Quoting::Backtick)
                .placeholder(PlaceholderStyle::Question)
                .aliasing(true)
                .upsert(true),
        )
    }

    pub fn sqlite() -> Self {
        Self::new(
            DialectConfig::new("sqlite")
                .quoting(Quoting::Double)
                .placeholder(PlaceholderStyle::Question)
                .aliasing(true)
                .returning(true)
                .upsert(true),
        )
    }

    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        if self.config.name.is_empty() {
            return "base";
        }
        &self.config.name
    }

    pub fn quoting(&self) -> Quoting {
        self.config.quoting
    }

    pub fn quote_identifier(&self, identifier: &str) -> String {
        match self.config.quoting {
            Quoting::Double => format!("\"{identifier}\""),
            Quoting::Backtick => format!("`{identifier}`"),
            Quoting::Bracket => format!("[{identifier}]"),
            Quoting::None => identifier.to_string(),
        }
    }

    pub fn quote_literal(&self, value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(x) => x.to_string(),
            Value::Text(s) => format!("'{s}'"),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(|v| self.quote_literal(v)).collect();
                format!("({})", parts.join(", "))
            }
        }
    }

    pub fn placeholder(&self, index: usize) -> String {
        match self.config.placeholder {
            Some(style) if style.is_numbered() => format!("{}{index}", style.symbol()),
            _ => "?".to_string(),
        }
    }

    pub fn build_limit_offset(&self, limit: i64, offset: i64) -> String {
        match (limit >= 0, offset >= 0) {
            (true, true) => format!("LIMIT {limit} OFFSET {offset}"),
            (true, false) => format!("LIMIT {limit}"),
            (false, true) => format!("OFFSET {offset}"),
            (false, false) => String::new(),
        }
    }

    /// Quoted table, plus the alias verbatim when aliasing is enabled.
    pub fn render_from(&self, table: &str, alias: &str) -> String {
        let quoted = self.quote_identifier(table);
        if !alias.is_empty() && self.config.enable_aliasing {
            return format!("{quoted} {alias}");
        }
        quoted
    }

    pub fn supports_returning(&self) -> bool {
        self.config.enable_returning
    }

    pub fn supports_upsert(&self) -> bool {
        self.config.enable_upsert
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()
    }
}

impl Default for BaseDialect {
    fn default() -> Self {
        Self::generic()
    }
}

impl Dialect for BaseDialect {
    fn base(&self) -> &BaseDialect {
        self
    }
}

//! Dialect configuration and its TOML loader.
//!
//! ```toml
//! name = "postgres"
//! quoting = "double"
//! placeholder = "dollar"
//! enable_aliasing = true
//! enable_returning = true
//! enable_upsert = true
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Identifier quoting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Quoting {
    /// Identifiers are emitted as written.
    #[default]
    None,
    /// `"name"` (ANSI, PostgreSQL, SQLite)
    Double,
    /// `` `name` `` (MySQL)
    Backtick,
    /// `[name]` (SQL Server)
    Bracket,
}

impl Quoting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quoting::None => "none",
            Quoting::Double => "double",
            Quoting::Backtick => "backtick",
            Quoting::Bracket => "bracket",
        }
    }
}

impl FromStr for Quoting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Quoting::None),
            "double" | "\"" => Ok(Quoting::Double),
            "backtick" | "`" => Ok(Quoting::Backtick),
            "bracket" | "[" | "[]" => Ok(Quoting::Bracket),
            _ => Err(ConfigError::UnknownQuoting(s.to_string())),
        }
    }
}

impl TryFrom<String> for Quoting {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Quoting> for String {
    fn from(q: Quoting) -> Self {
        q.as_str().to_string()
    }
}

impl fmt::Display for Quoting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positional placeholder style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlaceholderStyle {
    /// Bare `?`, never numbered.
    Question,
    /// `$1`, `$2`, ...
    Dollar,
    /// `:1`, `:2`, ...
    Colon,
    /// `@p1`, `@p2`, ...
    Named,
}

impl PlaceholderStyle {
    /// The marker itself, or the prefix that precedes the index.
    pub fn symbol(&self) -> &'static str {
        match self {
            PlaceholderStyle::Question => "?",
            PlaceholderStyle::Dollar => "$",
            PlaceholderStyle::Colon => ":",
            PlaceholderStyle::Named => "@p",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceholderStyle::Question => "question",
            PlaceholderStyle::Dollar => "dollar",
            PlaceholderStyle::Colon => "colon",
            PlaceholderStyle::Named => "named",
        }
    }

    /// Whether the marker carries a positional index.
    pub fn is_numbered(&self) -> bool {
        !matches!(self, PlaceholderStyle::Question)
    }
}

impl FromStr for PlaceholderStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "question" | "?" => Ok(PlaceholderStyle::Question),
            "dollar" | "$" => Ok(PlaceholderStyle::Dollar),
            "colon" | ":" => Ok(PlaceholderStyle::Colon),
            "named" | "@" | "@p" => Ok(PlaceholderStyle::Named),
            "" => Err(ConfigError::MissingPlaceholder),
            _ => Err(ConfigError::UnknownPlaceholder(s.to_string())),
        }
    }
}

impl TryFrom<String> for PlaceholderStyle {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PlaceholderStyle> for String {
    fn from(p: PlaceholderStyle) -> Self {
        p.as_str().to_string()
    }
}

impl fmt::Display for PlaceholderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that distinguishes one SQL engine's conventions from another.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialectConfig {
    pub name: String,
    #[serde(default)]
    pub quoting: Quoting,
    #[serde(default)]
    pub placeholder: Option<PlaceholderStyle>,
    /// Whether `render_from` appends table aliases.
    #[serde(default)]
    pub enable_aliasing: bool,
    /// Whether `RETURNING` clauses are supported.
    #[serde(default)]
    pub enable_returning: bool,
    /// Whether native upsert syntax is supported.
    #[serde(default)]
    pub enable_upsert: bool,
}

impl DialectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder = Some(style);
        self
    }

    pub fn aliasing(mut self, enabled: bool) -> Self {
        self.enable_aliasing = enabled;
        self
    }

    pub fn returning(mut self, enabled: bool) -> Self {
        self.enable_returning = enabled;
        self
    }

    pub fn upsert(mut self, enabled: bool) -> Self {
        self.enable_upsert = enabled;
        self
    }

    /// Check that the name is non-blank and a placeholder style is set.
    ///
    /// `Quoting::None` is always acceptable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::MissingName);
        }
        if self.placeholder.is_none() {
            return Err(ConfigError::MissingPlaceholder);
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: DialectConfig =
            toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&raw)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "clausekit.config",
            path = %path.display(),
            dialect = %config.name,
            "loaded dialect config"
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let cfg = DialectConfig::from_toml_str(
            r#"
            name = "postgres"
            quoting = "double"
            placeholder = "dollar"
            enable_aliasing = true
            enable_returning = true
            "#,
        )
        .unwrap();

        assert_eq!(cfg.name, "postgres");
        assert_eq!(cfg.quoting, Quoting::Double);
        assert_eq!(cfg.placeholder, Some(PlaceholderStyle::Dollar));
        assert!(cfg.enable_aliasing);
        assert!(cfg.enable_returning);
        assert!(!cfg.enable_upsert);
    }

    #[test]
    fn quoting_defaults_to_none() {
        let cfg = DialectConfig::from_toml_str(
            r#"
            name = "plain"
            placeholder = "?"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.quoting, Quoting::None);
        assert_eq!(cfg.placeholder, Some(PlaceholderStyle::Question));
    }

    #[test]
    fn missing_placeholder_is_rejected() {
        let err = DialectConfig::from_toml_str(r#"name = "x""#).unwrap_err();
        assert_eq!(err, ConfigError::MissingPlaceholder);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = DialectConfig::from_toml_str(
            r#"
            name = "   "
            placeholder = "dollar"
            "#,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingName);
    }

    #[test]
    fn unknown_style_is_a_parse_error() {
        let err = DialectConfig::from_toml_str(
            r#"
            name = "x"
            placeholder = "percent"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("percent")));
    }

    #[test]
    fn style_tokens() {
        assert_eq!("$".parse::<PlaceholderStyle>(), Ok(PlaceholderStyle::Dollar));
        assert_eq!("Named".parse::<PlaceholderStyle>(), Ok(PlaceholderStyle::Named));
        assert_eq!("".parse::<PlaceholderStyle>(), Err(ConfigError::MissingPlaceholder));
        assert_eq!("`".parse::<Quoting>(), Ok(Quoting::Backtick));
        assert!("single".parse::<Quoting>().is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = DialectConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

//! SQL dialects.
//!
//! A [`Dialect`] decides how identifiers are quoted, what positional placeholders look
//! like, how LIMIT/OFFSET is spelled and which optional features an engine supports.
//! Everything else in the crate is dialect-agnostic and asks the dialect when it needs
//! to emit engine-specific text.
//!
//! Dialects are immutable. Placeholder numbering is tracked by a [`Placeholders`]
//! context owned by whoever is rendering, so one dialect can be shared freely.
//!
//! # Example
//! ```ignore
//! use clausekit::dialect::{BaseDialect, Dialect, Placeholders};
//!
//! let pg = BaseDialect::postgres();
//! let mut ph = Placeholders::new();
//! assert_eq!(ph.next(&pg), "$1");
//! assert_eq!(ph.next(&pg), "$2");
//! assert_eq!(pg.quote_identifier("users"), r#""users""#);
//! ```

mod base;
mod config;
mod sqlserver;

pub use base::BaseDialect;
pub use config::{DialectConfig, PlaceholderStyle, Quoting};
pub use sqlserver::SqlServerDialect;

use crate::error::ConfigError;
use crate::value::Value;
use std::fmt;

/// Engine-specific text generation.
///
/// Implementors only provide [`Dialect::base`]; every other method has a default that
/// delegates to the [`BaseDialect`] configuration and may be overridden where an engine
/// computes its behaviour instead of reading a flag.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// The underlying configuration.
    fn base(&self) -> &BaseDialect;

    /// Dialect name, `"base"` when unset.
    fn name(&self) -> &str {
        self.base().name()
    }

    /// Wrap an identifier in the configured quotes.
    ///
    /// Embedded quote characters are not escaped.
    fn quote_identifier(&self, identifier: &str) -> String {
        self.base().quote_identifier(identifier)
    }

    /// Printable literal for logs and debugging.
    ///
    /// Never use the output to build an executable statement: nothing is escaped.
    fn quote_literal(&self, value: &Value) -> String {
        self.base().quote_literal(value)
    }

    /// Placeholder for the 1-based `index`.
    fn placeholder(&self, index: usize) -> String {
        self.base().placeholder(index)
    }

    /// LIMIT/OFFSET clause; negative values mean "unset".
    fn build_limit_offset(&self, limit: i64, offset: i64) -> String {
        self.base().build_limit_offset(limit, offset)
    }

    /// FROM target with an optional alias.
    fn render_from(&self, table: &str, alias: &str) -> String {
        self.base().render_from(table, alias)
    }

    fn supports_returning(&self) -> bool {
        self.base().supports_returning()
    }

    fn supports_upsert(&self) -> bool {
        self.base().supports_upsert()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.base().validate()
    }
}

/// Placeholder numbering for one render pass.
///
/// Hands out 1-based indices through the dialect. Resetting starts the numbering over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    issued: usize,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start numbering after `issued` already-emitted placeholders.
    pub fn starting_after(issued: usize) -> Self {
        Self { issued }
    }

    /// Allocate the next placeholder.
    pub fn next(&mut self, dialect: &dyn Dialect) -> String {
        self.issued += 1;
        dialect.placeholder(self.issued)
    }

    pub fn reset(&mut self) {
        self.issued = 0;
    }

    /// Number of placeholders issued since the last reset.
    pub fn count(&self) -> usize {
        self.issued
    }
}

#[cfg(test)]
mod tests;

//! Column references.
//!
//! A [`Column`] is a name with an optional qualifier (`u.id`) and an optional alias
//! (`u.id AS user_id`). Construction never fails; [`Column::is_valid`] reports whether
//! the current name is usable.
//!
//! # Example
//! ```ignore
//! use clausekit::Column;
//!
//! let c = Column::new("u.id AS user_id");
//! assert_eq!(c.qualifier(), Some("u"));
//! assert_eq!(c.name(), "id");
//! assert_eq!(c.alias(), Some("user_id"));
//! ```

use crate::dialect::Dialect;
use std::fmt;

/// A possibly qualified, possibly aliased column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Column {
    name: String,
    qualifier: Option<String>,
    alias: Option<String>,
    quoted: bool,
}

impl Column {
    /// Parse `name`, `qualifier.name` or either followed by `AS alias`.
    ///
    /// Rendered verbatim; see [`Column::quoted`] for dialect quoting.
    pub fn new(expr: impl AsRef<str>) -> Self {
        let expr = expr.as_ref().trim();
        let (target, alias) = split_alias(expr);
        let (qualifier, name) = match target.rsplit_once('.') {
            Some((q, n)) if !q.trim().is_empty() => (Some(q.trim().to_string()), n.trim()),
            _ => (None, target),
        };

        Self {
            name: name.to_string(),
            qualifier,
            alias: alias.map(str::to_string),
            quoted: false,
        }
    }

    /// Like [`Column::new`], but every identifier part is quoted by the dialect.
    pub fn quoted(expr: impl AsRef<str>) -> Self {
        Self {
            quoted: true,
            ..Self::new(expr)
        }
    }

    /// Set or replace the qualifier.
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        let qualifier = qualifier.into();
        self.qualifier = (!qualifier.trim().is_empty()).then_some(qualifier);
        self
    }

    /// Set or replace the alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = (!alias.trim().is_empty()).then_some(alias);
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// A column is valid when its name is not blank. Recomputed on every call.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Whether the column carries a table or alias prefix.
    pub fn is_qualified(&self) -> bool {
        self.qualifier.is_some()
    }

    /// `qualifier.name` as written, without quoting.
    pub fn qualified_name(&self) -> String {
        match &self.qualifier {
            Some(q) => format!("{q}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Render for use inside an expression. The alias is not included.
    pub fn render(&self, dialect: &dyn Dialect) -> String {
        if !self.quoted {
            return self.qualified_name();
        }
        match &self.qualifier {
            Some(q) => format!(
                "{}.{}",
                dialect.quote_identifier(q),
                dialect.quote_identifier(&self.name)
            ),
            None => dialect.quote_identifier(&self.name),
        }
    }

    /// Render for a SELECT list, including `AS alias` when one is set.
    pub fn render_select(&self, dialect: &dyn Dialect) -> String {
        let col = self.render(dialect);
        match &self.alias {
            Some(alias) => format!("{col} AS {alias}"),
            None => col,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

impl From<&str> for Column {
    fn from(expr: &str) -> Self {
        Column::new(expr)
    }
}

impl From<String> for Column {
    fn from(expr: String) -> Self {
        Column::new(expr)
    }
}

impl From<&Column> for Column {
    fn from(col: &Column) -> Self {
        col.clone()
    }
}

/// Split `target AS alias` (case-insensitive keyword).
fn split_alias(expr: &str) -> (&str, Option<&str>) {
    let upper = expr.to_ascii_uppercase();
    match upper.rfind(" AS ") {
        Some(idx) => {
            let alias = expr[idx + 4..].trim();
            let target = expr[..idx].trim();
            if alias.is_empty() {
                (target, None)
            } else {
                (target, Some(alias))
            }
        }
        None => (expr, None),
    }
}

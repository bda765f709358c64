//! Query builder for SELECT statements.
//!
//! WHERE conditions are stored as [`ConditionToken`]s: one token per `where_`,
//! `and_where` or `or_where` call, tagged with how it joins the groups before it.
//! Raw fragments pass through unchanged; structured [`Condition`](crate::Condition)s
//! are rendered against the builder's dialect and contribute bound arguments.
//!
//! # Usage
//!
//! ```ignore
//! use clausekit::{qb, BaseDialect, Condition};
//!
//! let sql = qb::select(["id", "name"])
//!     .from("users")
//!     .where_(["status = ?"])
//!     .build()?;
//! assert_eq!(sql, "SELECT id, name FROM users WHERE status = ?");
//!
//! let query = qb::select_from("orders")
//!     .where_([Condition::eq("user_id", 7)])
//!     .or_where([Condition::is_null("deleted_at")])
//!     .take(20)
//!     .build_query()?;
//! ```

mod select;
mod token;

pub use select::SelectQueryBuilder;
pub use token::{ConditionToken, Predicate};

use crate::value::Value;

/// Create a SELECT builder with the given columns and the generic dialect.
///
/// # Example
/// ```ignore
/// let sql = clausekit::qb::select(["id"]).from("users").build()?;
/// ```
pub fn select<I, S>(columns: I) -> SelectQueryBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SelectQueryBuilder::new().select(columns)
}

/// Create a `SELECT *` builder for the given table.
pub fn select_from(table: impl Into<String>) -> SelectQueryBuilder {
    SelectQueryBuilder::new().from(table)
}

/// A built SQL statement with the arguments its placeholders bind, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: Vec<Value>,
}

impl BuiltQuery {
    pub fn new(sql: String, args: Vec<Value>) -> Self {
        Self { sql, args }
    }
}

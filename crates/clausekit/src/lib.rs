//! # clausekit
//!
//! A dialect-agnostic SQL clause assembler.
//!
//! ## Features
//!
//! - **Dialects**: identifier quoting, placeholder style, paging syntax and feature flags
//!   per engine, with presets and TOML-loadable configurations
//! - **Conditions**: structured `column <op> value` predicates rendered to SQL fragments
//!   plus the arguments they bind
//! - **SELECT builder**: grouped WHERE clauses joined with AND/OR, ORDER BY and paging
//! - **Lenient by default**: invalid conditions render as nothing; strict rendering is opt-in
//!
//! ## Query Builder (qb)
//!
//! ```ignore
//! use clausekit::{qb, BaseDialect, Condition, SelectQueryBuilder};
//!
//! // Raw fragments
//! let sql = qb::select(["id", "name"])
//!     .from("users")
//!     .where_(["status = ?"])
//!     .and_where(["a = 1", "b = 2"])
//!     .build()?;
//!
//! // Structured conditions with bound arguments
//! let query = SelectQueryBuilder::with_dialect(BaseDialect::postgres())
//!     .from("users")
//!     .where_([Condition::eq("status", "active")])
//!     .or_where([Condition::in_list("role", vec!["admin", "owner"])])
//!     .take(10)
//!     .build_query()?;
//! // SELECT * FROM users WHERE status = $1 OR role IN ($2, $3) LIMIT 10
//! ```

// Declared first so `condition!` is in textual scope for the rest of the crate.
#[macro_use]
pub mod condition;

pub mod column;
pub mod dialect;
pub mod error;
pub mod qb;
pub mod value;

pub use column::Column;
pub use condition::{Condition, ConditionDisplay, JoinType, Operator};
pub use dialect::{
    BaseDialect, Dialect, DialectConfig, PlaceholderStyle, Placeholders, Quoting,
    SqlServerDialect,
};
pub use error::{BuildError, ConfigError, Error, Result, ValidationError};
pub use value::Value;

pub use qb::{BuiltQuery, ConditionToken, Predicate, SelectQueryBuilder};

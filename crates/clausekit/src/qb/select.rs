//! SELECT query builder.

use crate::column::Column;
use crate::condition::{Condition, JoinType};
use crate::dialect::{BaseDialect, Dialect, Placeholders};
use crate::error::{BuildError, ValidationError};
use crate::qb::token::{ConditionToken, Predicate};
use crate::qb::BuiltQuery;
use crate::value::Value;
use std::sync::Arc;

/// SELECT query builder with grouped WHERE conditions.
///
/// Raw fragments are kept verbatim. Structured [`Condition`]s are rendered against the
/// builder's dialect as they are added, with placeholder numbering running across the
/// whole WHERE clause; set the dialect before adding conditions.
///
/// A builder is exclusively owned by whoever is constructing the statement. `build`
/// never mutates it and can be called any number of times.
#[derive(Clone, Debug)]
pub struct SelectQueryBuilder {
    /// Dialect used for conditions, FROM aliases and paging
    dialect: Arc<dyn Dialect>,
    /// SELECT columns (empty means `*`)
    columns: Vec<String>,
    /// FROM target
    from: String,
    /// WHERE groups
    tokens: Vec<ConditionToken>,
    /// ORDER BY clauses
    order_by: Vec<String>,
    /// LIMIT
    limit: Option<u64>,
    /// OFFSET
    offset: Option<u64>,
    /// Numbering shared by every condition in the WHERE clause
    placeholders: Placeholders,
    /// Reject invalid conditions instead of dropping them
    strict: bool,
    /// First invalid condition dropped since the last `where_`
    rejected: Option<ValidationError>,
}

impl Default for SelectQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectQueryBuilder {
    /// Create an empty builder using the generic dialect (`?` placeholders, no quoting).
    pub fn new() -> Self {
        Self::with_shared_dialect(Arc::new(BaseDialect::generic()))
    }

    /// Create an empty builder for a dialect.
    pub fn with_dialect(dialect: impl Dialect + 'static) -> Self {
        Self::with_shared_dialect(Arc::new(dialect))
    }

    /// Create an empty builder sharing a dialect with other builders.
    pub fn with_shared_dialect(dialect: Arc<dyn Dialect>) -> Self {
        Self {
            dialect,
            columns: Vec::new(),
            from: String::new(),
            tokens: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
            placeholders: Placeholders::new(),
            strict: false,
            rejected: None,
        }
    }

    pub fn dialect(&self) -> &dyn Dialect {
        &*self.dialect
    }

    /// In strict mode an invalid [`Condition`] makes `build` fail with
    /// [`BuildError::InvalidCondition`] instead of being silently dropped.
    ///
    /// Can be toggled at any point; conditions added before the call are covered too.
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    // ==================== SELECT / FROM ====================

    /// Set SELECT columns, replacing any previous list.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set SELECT columns from [`Column`]s, rendered through the dialect with aliases.
    pub fn select_columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.columns = columns
            .into_iter()
            .map(|c| {
                let col: Column = c.into();
                col.render_select(&*self.dialect)
            })
            .collect();
        self
    }

    /// Set the FROM target verbatim.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.from = table.into();
        self
    }

    /// Set the FROM target through the dialect: quoted table plus alias when supported.
    pub fn from_aliased(mut self, table: &str, alias: &str) -> Self {
        self.from = self.dialect.render_from(table, alias);
        self
    }

    // ==================== WHERE ====================

    /// Replace every WHERE condition with a new group.
    ///
    /// This is a reset, not an append: conditions from earlier `where_`, `and_where`
    /// or `or_where` calls are discarded and placeholder numbering restarts.
    ///
    /// Several predicates in one call are joined with `AND` and parenthesized:
    /// `where_(["a = 1", "b = 2"])` renders `WHERE (a = 1 AND b = 2)`.
    pub fn where_<I, P>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Predicate>,
    {
        self.tokens.clear();
        self.placeholders.reset();
        self.rejected = None;
        self.add_group(JoinType::Simple, predicates);
        self
    }

    /// Append a group joined with AND.
    pub fn and_where<I, P>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Predicate>,
    {
        self.add_group(JoinType::And, predicates);
        self
    }

    /// Append a group joined with OR.
    pub fn or_where<I, P>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Predicate>,
    {
        self.add_group(JoinType::Or, predicates);
        self
    }

    /// Skip the next `n` placeholder numbers.
    ///
    /// Raw fragments are never numbered by the builder. Call this after adding a raw
    /// fragment that already uses numbered placeholders so structured conditions
    /// continue after them.
    pub fn reserve_placeholders(mut self, n: usize) -> Self {
        self.placeholders = Placeholders::starting_after(self.placeholders.count() + n);
        self
    }

    /// Append a single condition using its own join type.
    pub fn filter(mut self, condition: Condition) -> Self {
        let join = condition.join_type();
        self.add_group(join, [condition]);
        self
    }

    // ==================== Ordering & Pagination ====================

    /// Add an ORDER BY clause. Call once per column.
    pub fn order_by(mut self, clause: impl Into<String>) -> Self {
        self.order_by.push(clause.into());
        self
    }

    /// Add ORDER BY column ASC.
    pub fn order_by_asc(mut self, column: &str) -> Self {
        self.order_by.push(format!("{column} ASC"));
        self
    }

    /// Add ORDER BY column DESC.
    pub fn order_by_desc(mut self, column: &str) -> Self {
        self.order_by.push(format!("{column} DESC"));
        self
    }

    /// Set LIMIT.
    pub fn take(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set OFFSET.
    pub fn skip(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based (clamped to >= 1).
    /// `per_page` is clamped to >= 1.
    pub fn paginate(mut self, page: u64, per_page: u64) -> Self {
        let p = page.max(1);
        let size = per_page.max(1);
        self.limit = Some(size);
        self.offset = Some((p - 1).saturating_mul(size));
        self
    }

    // ==================== Inspection ====================

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn table(&self) -> &str {
        &self.from
    }

    pub fn tokens(&self) -> &[ConditionToken] {
        &self.tokens
    }

    pub fn ordering(&self) -> &[String] {
        &self.order_by
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    // ==================== Build ====================

    /// Build the SQL string.
    pub fn build(&self) -> Result<String, BuildError> {
        self.build_query().map(|q| q.sql)
    }

    /// Build the SQL string and the arguments bound by structured conditions.
    pub fn build_query(&self) -> Result<BuiltQuery, BuildError> {
        if self.from.is_empty() {
            return Err(BuildError::MissingFrom);
        }
        if let (true, Some(err)) = (self.strict, &self.rejected) {
            return Err(BuildError::InvalidCondition(err.clone()));
        }

        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };

        let mut parts = vec![format!("SELECT {columns}"), format!("FROM {}", self.from)];
        let mut args: Vec<Value> = Vec::new();

        if !self.tokens.is_empty() {
            let rendered: Vec<String> = self.tokens.iter().map(ConditionToken::render).collect();
            parts.push(format!("WHERE {}", rendered.join(" ")));
            for token in &self.tokens {
                args.extend_from_slice(token.args());
            }
        }

        if !self.order_by.is_empty() {
            parts.push(format!("ORDER BY {}", self.order_by.join(", ")));
        }

        let paging = self
            .dialect
            .build_limit_offset(as_clause_arg(self.limit), as_clause_arg(self.offset));
        if !paging.is_empty() {
            parts.push(paging);
        }

        let sql = parts.join(" ");

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "clausekit.sql",
            dialect = self.dialect.name(),
            param_count = args.len(),
            sql = %sql,
            "built select"
        );

        Ok(BuiltQuery::new(sql, args))
    }

    fn add_group<I, P>(&mut self, join: JoinType, predicates: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Predicate>,
    {
        let mut fragments = Vec::new();
        let mut args = Vec::new();

        for predicate in predicates {
            let predicate: Predicate = predicate.into();
            match predicate {
                Predicate::Raw(sql) => {
                    if !sql.trim().is_empty() {
                        fragments.push(sql);
                    }
                }
                Predicate::Condition(condition) => {
                    if let Err(err) = condition.check() {
                        self.reject(&condition, err);
                        continue;
                    }
                    let (sql, bound) = condition.render_with(&*self.dialect, &mut self.placeholders);
                    fragments.push(sql);
                    args.extend(bound);
                }
            }
        }

        if let Some(token) = ConditionToken::group(join, fragments, args) {
            self.tokens.push(token);
        }
    }

    fn reject(&mut self, condition: &Condition, err: ValidationError) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "clausekit.sql",
            strict = self.strict,
            error = %err,
            condition = %condition,
            "invalid condition"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = condition;

        if self.rejected.is_none() {
            self.rejected = Some(err);
        }
    }
}

/// Optional non-negative count to the dialect's "negative means unset" convention.
fn as_clause_arg(n: Option<u64>) -> i64 {
    match n {
        Some(n) => i64::try_from(n).unwrap_or(i64::MAX),
        None => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_select() {
        let qb = SelectQueryBuilder::new().from("users");
        assert_eq!(qb.build().unwrap(), "SELECT * FROM users");
    }

    #[test]
    fn test_select_with_columns() {
        let qb = SelectQueryBuilder::new().select(["id", "name", "email"]).from("users");
        assert_eq!(qb.build().unwrap(), "SELECT id, name, email FROM users");
    }

    #[test]
    fn test_select_replaces_columns() {
        let qb = SelectQueryBuilder::new()
            .select(["id"])
            .select(["name"])
            .from("users");
        assert_eq!(qb.build().unwrap(), "SELECT name FROM users");
    }

    #[test]
    fn test_from_replaces_target() {
        let qb = SelectQueryBuilder::new().from("a").from("b");
        assert_eq!(qb.build().unwrap(), "SELECT * FROM b");
    }

    #[test]
    fn test_order_and_paging() {
        let qb = SelectQueryBuilder::new()
            .from("users")
            .order_by("created_at DESC")
            .order_by_asc("id")
            .take(10)
            .skip(20);
        assert_eq!(
            qb.build().unwrap(),
            "SELECT * FROM users ORDER BY created_at DESC, id ASC LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn test_take_and_skip_overwrite() {
        let qb = SelectQueryBuilder::new().from("t").take(1).take(5).skip(2).skip(3);
        assert_eq!(qb.build().unwrap(), "SELECT * FROM t LIMIT 5 OFFSET 3");
    }

    #[test]
    fn test_skip_only() {
        let qb = SelectQueryBuilder::new().from("t").skip(7);
        assert_eq!(qb.build().unwrap(), "SELECT * FROM t OFFSET 7");
    }

    #[test]
    fn test_paginate() {
        let qb = SelectQueryBuilder::new().from("users").paginate(2, 10);
        assert_eq!(qb.build().unwrap(), "SELECT * FROM users LIMIT 10 OFFSET 10");

        let qb = SelectQueryBuilder::new().from("users").paginate(0, 0);
        assert_eq!(qb.build().unwrap(), "SELECT * FROM users LIMIT 1 OFFSET 0");
    }

    #[test]
    fn test_clause_arg_conversion() {
        assert_eq!(as_clause_arg(None), -1);
        assert_eq!(as_clause_arg(Some(0)), 0);
        assert_eq!(as_clause_arg(Some(u64::MAX)), i64::MAX);
    }
}

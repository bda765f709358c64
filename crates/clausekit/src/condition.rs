//! Query condition types.
//!
//! A [`Condition`] is a single predicate over one column: `column <op> value`. It stores
//! structural intent only; placeholders and quoting are resolved when it is rendered
//! against a [`Dialect`].
//!
//! # Example
//! ```ignore
//! use clausekit::{condition, BaseDialect, Condition};
//!
//! let c = condition!("status", "IN", vec!["active", "banned"]);
//! let (sql, args) = c.render(&BaseDialect::postgres());
//! assert_eq!(sql, "status IN ($1, $2)");
//! assert_eq!(args.len(), 2);
//!
//! let c = Condition::gt("age", 18);
//! assert_eq!(c.render(&BaseDialect::generic()).0, "age > ?");
//! ```

use crate::column::Column;
use crate::dialect::{Dialect, Placeholders};
use crate::error::ValidationError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// How a predicate joins the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinType {
    /// No keyword; used by `where_` and for a leading predicate.
    #[default]
    Simple,
    And,
    Or,
}

impl JoinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::Simple => "SIMPLE",
            JoinType::And => "AND",
            JoinType::Or => "OR",
        }
    }

    /// The SQL keyword, if this join type has one.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            JoinType::Simple => None,
            JoinType::And => Some("AND"),
            JoinType::Or => Some("OR"),
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    #[default]
    Eq,
    Neq,
    Gt,
    Lt,
    Gte,
    Lte,
    In,
    NotIn,
    Between,
    IsNull,
    IsNotNull,
}

impl Operator {
    pub const ALL: [Operator; 11] = [
        Operator::Eq,
        Operator::Neq,
        Operator::Gt,
        Operator::Lt,
        Operator::Gte,
        Operator::Lte,
        Operator::In,
        Operator::NotIn,
        Operator::Between,
        Operator::IsNull,
        Operator::IsNotNull,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Between => "BETWEEN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }
}

impl FromStr for Operator {
    type Err = ValidationError;

    /// Case-insensitive; runs of whitespace inside keywords are collapsed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        match normalized.as_str() {
            "=" => Ok(Operator::Eq),
            "!=" | "<>" => Ok(Operator::Neq),
            ">" => Ok(Operator::Gt),
            "<" => Ok(Operator::Lt),
            ">=" => Ok(Operator::Gte),
            "<=" => Ok(Operator::Lte),
            "IN" => Ok(Operator::In),
            "NOT IN" => Ok(Operator::NotIn),
            "BETWEEN" => Ok(Operator::Between),
            "IS NULL" => Ok(Operator::IsNull),
            "IS NOT NULL" => Ok(Operator::IsNotNull),
            _ => Err(ValidationError::UnsupportedOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single predicate: column, operator and value(s).
///
/// Validation errors are recorded on the condition rather than returned from the
/// constructors. An errored condition renders as an empty fragment; use
/// [`Condition::is_valid`] or [`Condition::try_render`] to surface the error.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    join: JoinType,
    column: Column,
    operator: Operator,
    value: Value,
    error: Option<ValidationError>,
}

impl Condition {
    /// Equality condition: `column = value`.
    pub fn new(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::with(JoinType::Simple, column, Operator::Eq, [value.into()])
    }

    /// Condition with an operator token such as `">="` or `"NOT IN"`.
    ///
    /// An unrecognized token yields an errored condition.
    pub fn with_op(column: impl Into<Column>, operator: &str, value: impl Into<Value>) -> Self {
        Self::from_args(
            JoinType::Simple,
            column,
            vec![Value::Text(operator.to_string()), value.into()],
        )
    }

    /// Positional form: `[value]` means equality, `[operator, value]` parses the
    /// operator token. Any other argument count is an error.
    pub fn from_args(join: JoinType, column: impl Into<Column>, args: Vec<Value>) -> Self {
        let column = column.into();
        let count = args.len();
        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(value), None) => Self::with(join, column, Operator::Eq, [value]),
            (Some(op), Some(value)) if count == 2 => {
                let parsed = match &op {
                    Value::Text(token) => token.parse::<Operator>(),
                    other => Err(ValidationError::UnsupportedOperator(other.to_string())),
                };
                match parsed {
                    Ok(operator) => Self::with(join, column, operator, [value]),
                    Err(err) => Self::invalid(join, column, err),
                }
            }
            _ => Self::invalid(join, column, ValidationError::TooManyArguments(count)),
        }
    }

    /// Positional form joined with AND.
    pub fn new_and(column: impl Into<Column>, args: Vec<Value>) -> Self {
        Self::from_args(JoinType::And, column, args)
    }

    /// Positional form joined with OR.
    pub fn new_or(column: impl Into<Column>, args: Vec<Value>) -> Self {
        Self::from_args(JoinType::Or, column, args)
    }

    /// Fully explicit constructor.
    ///
    /// A single value is stored as is; zero or several values are stored as a list.
    pub fn with<I>(join: JoinType, column: impl Into<Column>, operator: Operator, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            Value::List(values)
        };

        Self {
            join,
            column: column.into(),
            operator,
            value,
            error: None,
        }
    }

    fn invalid(join: JoinType, column: Column, err: ValidationError) -> Self {
        Self {
            join,
            column,
            operator: Operator::Eq,
            value: Value::Null,
            error: Some(err),
        }
    }

    // ==================== Convenience constructors ====================

    /// column != value
    pub fn ne(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::with(JoinType::Simple, column, Operator::Neq, [value.into()])
    }

    /// column = value
    pub fn eq(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::new(column, value)
    }

    /// column > value
    pub fn gt(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::with(JoinType::Simple, column, Operator::Gt, [value.into()])
    }

    /// column >= value
    pub fn gte(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::with(JoinType::Simple, column, Operator::Gte, [value.into()])
    }

    /// column < value
    pub fn lt(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::with(JoinType::Simple, column, Operator::Lt, [value.into()])
    }

    /// column <= value
    pub fn lte(column: impl Into<Column>, value: impl Into<Value>) -> Self {
        Self::with(JoinType::Simple, column, Operator::Lte, [value.into()])
    }

    /// column IN (values...)
    pub fn in_list<T: Into<Value>>(column: impl Into<Column>, values: Vec<T>) -> Self {
        Self::with(JoinType::Simple, column, Operator::In, [Value::from(values)])
    }

    /// column NOT IN (values...)
    pub fn not_in<T: Into<Value>>(column: impl Into<Column>, values: Vec<T>) -> Self {
        Self::with(JoinType::Simple, column, Operator::NotIn, [Value::from(values)])
    }

    /// column BETWEEN from AND to
    pub fn between(
        column: impl Into<Column>,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Self {
        Self::with(
            JoinType::Simple,
            column,
            Operator::Between,
            [from.into(), to.into()],
        )
    }

    /// column IS NULL
    pub fn is_null(column: impl Into<Column>) -> Self {
        Self::with(JoinType::Simple, column, Operator::IsNull, [Value::Null])
    }

    /// column IS NOT NULL
    pub fn is_not_null(column: impl Into<Column>) -> Self {
        Self::with(JoinType::Simple, column, Operator::IsNotNull, [Value::Null])
    }

    /// Change the join type.
    pub fn join(mut self, join: JoinType) -> Self {
        self.join = join;
        self
    }

    // ==================== Accessors ====================

    pub fn join_type(&self) -> JoinType {
        self.join
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    // ==================== Validation ====================

    /// Attach an error. The first error wins; later ones are ignored.
    pub fn set_error(&mut self, err: ValidationError) -> &mut Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }

    /// Validate and record the first failure on the condition.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if let Err(err) = self.check() {
            self.set_error(err.clone());
            return Err(err);
        }
        Ok(())
    }

    /// `true` when no error is recorded and the column is usable.
    pub fn is_valid(&mut self) -> bool {
        self.validate().is_ok()
    }

    /// Same checks as [`Condition::validate`] without recording anything.
    pub fn check(&self) -> Result<(), ValidationError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if !self.column.is_valid() {
            return Err(ValidationError::MissingColumn);
        }
        // The operator is a closed enum, so it is always one of the supported set.
        Ok(())
    }

    // ==================== Rendering ====================

    /// Render with fresh placeholder numbering.
    ///
    /// Returns `("", [])` for an errored condition or an invalid column.
    pub fn render(&self, dialect: &dyn Dialect) -> (String, Vec<Value>) {
        let mut placeholders = Placeholders::new();
        self.render_with(dialect, &mut placeholders)
    }

    /// Render, continuing the numbering of `placeholders`.
    pub fn render_with(
        &self,
        dialect: &dyn Dialect,
        placeholders: &mut Placeholders,
    ) -> (String, Vec<Value>) {
        if self.error.is_some() || !self.column.is_valid() {
            return (String::new(), Vec::new());
        }

        let col = self.column.render(dialect);
        let op = self.operator;

        match op {
            Operator::IsNull | Operator::IsNotNull => (format!("{col} {op}"), Vec::new()),

            Operator::In | Operator::NotIn => match self.value.as_list() {
                Some(values) if !values.is_empty() => {
                    let marks: Vec<String> =
                        values.iter().map(|_| placeholders.next(dialect)).collect();
                    (format!("{col} {op} ({})", marks.join(", ")), values.to_vec())
                }
                _ => (format!("{col} {op} ()"), Vec::new()),
            },

            Operator::Between => match self.value.as_list() {
                Some([from, to]) => {
                    let p1 = placeholders.next(dialect);
                    let p2 = placeholders.next(dialect);
                    (
                        format!("{col} BETWEEN {p1} AND {p2}"),
                        vec![from.clone(), to.clone()],
                    )
                }
                _ => (format!("{col} BETWEEN ? AND ?"), Vec::new()),
            },

            Operator::Eq
            | Operator::Neq
            | Operator::Gt
            | Operator::Lt
            | Operator::Gte
            | Operator::Lte => {
                let p = placeholders.next(dialect);
                (format!("{col} {op} {p}"), vec![self.value.clone()])
            }
        }
    }

    /// Strict rendering: fails instead of returning an empty fragment.
    pub fn try_render(&self, dialect: &dyn Dialect) -> Result<(String, Vec<Value>), ValidationError> {
        self.check()?;
        Ok(self.render(dialect))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Condition({:?}) [qualified: {}, column: {}, value: {}, errored: {}]",
            self.column.qualified_name(),
            self.column.is_qualified(),
            self.column.is_valid(),
            self.value,
            self.error.is_some(),
        )
    }
}

/// Display adapter for a condition that may be absent.
///
/// ```ignore
/// assert_eq!(ConditionDisplay(None).to_string(), "Condition(nil)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConditionDisplay<'a>(pub Option<&'a Condition>);

impl fmt::Display for ConditionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => fmt::Display::fmt(c, f),
            None => f.write_str("Condition(nil)"),
        }
    }
}

/// Build a [`Condition`] from positional arguments.
///
/// `condition!(col, value)` is an equality; `condition!(col, "op", value)` parses the
/// operator. Any other arity produces an errored condition.
#[macro_export]
macro_rules! condition {
    ($column:expr $(, $arg:expr)* $(,)?) => {
        $crate::Condition::from_args(
            $crate::JoinType::Simple,
            $column,
            vec![$($crate::Value::from($arg)),*],
        )
    };
}

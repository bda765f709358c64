//! Condition tokens: the grouped, already-rendered form the builder stores.

use crate::condition::{Condition, JoinType};
use crate::value::Value;

/// Something that can go into a WHERE group: a raw SQL fragment or a structured
/// [`Condition`].
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Raw SQL, used verbatim.
    ///
    /// Placeholders inside it are not renumbered and do not advance the builder's
    /// numbering; see `SelectQueryBuilder::reserve_placeholders`.
    ///
    /// # Safety
    /// Be careful with SQL injection when using raw fragments.
    Raw(String),
    /// Rendered against the builder's dialect when added.
    Condition(Condition),
}

impl From<&str> for Predicate {
    fn from(sql: &str) -> Self {
        Predicate::Raw(sql.to_string())
    }
}

impl From<String> for Predicate {
    fn from(sql: String) -> Self {
        Predicate::Raw(sql)
    }
}

impl From<Condition> for Predicate {
    fn from(c: Condition) -> Self {
        Predicate::Condition(c)
    }
}

/// One WHERE group tagged with how it joins the groups before it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionToken {
    join: JoinType,
    fragment: String,
    args: Vec<Value>,
}

impl ConditionToken {
    pub fn new(join: JoinType, fragment: impl Into<String>) -> Self {
        Self {
            join,
            fragment: fragment.into(),
            args: Vec::new(),
        }
    }

    /// Fold the fragments of one call into a token.
    ///
    /// No fragments yields `None`. A single fragment is kept bare; several are joined
    /// with the group's keyword and parenthesized. A `Simple` group joins with `AND`.
    pub fn group(join: JoinType, mut fragments: Vec<String>, args: Vec<Value>) -> Option<Self> {
        let fragment = match fragments.len() {
            0 => return None,
            1 => fragments.remove(0),
            _ => {
                let keyword = join.keyword().unwrap_or("AND");
                format!("({})", fragments.join(&format!(" {keyword} ")))
            }
        };
        Some(Self {
            join,
            fragment,
            args,
        })
    }

    pub fn join_type(&self) -> JoinType {
        self.join
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Arguments bound by the structured conditions in this group, in order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// `fragment` for `Simple`, `"<KEYWORD> fragment"` otherwise.
    ///
    /// A `Simple` token never gets a prefix, even when it is not the first one.
    pub fn render(&self) -> String {
        match self.join.keyword() {
            Some(keyword) => format!("{keyword} {}", self.fragment),
            None => self.fragment.clone(),
        }
    }
}

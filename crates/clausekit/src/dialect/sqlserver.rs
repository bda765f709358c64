use super::config::{DialectConfig, PlaceholderStyle, Quoting};
use super::{BaseDialect, Dialect};

/// SQL Server: bracket quoting, `@pN` placeholders and `OFFSET .. FETCH` paging.
///
/// T-SQL has no `LIMIT`, so paging is computed rather than read from config.
/// `OFFSET .. FETCH` is only valid after an `ORDER BY`; callers paginating against
/// SQL Server must order the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlServerDialect {
    base: BaseDialect,
}

impl SqlServerDialect {
    pub fn new() -> Self {
        Self {
            base: BaseDialect::new(
                DialectConfig::new("sqlserver")
                    .quoting(Quoting::Bracket)
                    .placeholder(PlaceholderStyle::Named)
                    .aliasing(true)
                    .upsert(false),
            ),
        }
    }
}

impl Default for SqlServerDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for SqlServerDialect {
    fn base(&self) -> &BaseDialect {
        &self.base
    }

    fn build_limit_offset(&self, limit: i64, offset: i64) -> String {
        match (limit >= 0, offset >= 0) {
            (true, _) => format!(
                "OFFSET {} ROWS FETCH NEXT {limit} ROWS ONLY",
                offset.max(0)
            ),
            (false, true) => format!("OFFSET {offset} ROWS"),
            (false, false) => String::new(),
        }
    }

    // OUTPUT INSERTED.* plays the role of RETURNING.
    fn supports_returning(&self) -> bool {
        true
    }
}

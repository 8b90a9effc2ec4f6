/// Category recognizers
///
/// Each recognizer is a pure pattern matcher over a single token. On success
/// it returns its captured fields together with the fixed label sequence
/// describing the sub-components it consumed; the labels are diagnostic
/// output only and never drive behavior. Failure is simply `None`, which
/// moves the classification cascade on to the next category.
pub mod cardinal;
pub mod currency;
pub mod date;
pub mod named_entity;
pub mod ordinal;
pub mod time;
pub mod unit;

use serde::{Deserialize, Serialize};

/// Diagnostic trace: the ordered labels a recognizer reports on success
pub type Trace = Vec<&'static str>;

pub mod labels {
    pub const START: &str = "START";
    pub const END: &str = "END";

    pub const DAY: &str = "DAY";
    pub const SEPARATOR: &str = "SEPARATOR";
    pub const MONTH: &str = "MONTH";
    pub const YEAR: &str = "YEAR";

    pub const HOUR: &str = "HOUR";
    pub const COLON: &str = "COLON";
    pub const MINUTE: &str = "MINUTE";
    pub const SECOND: &str = "SECOND";
    pub const PERIOD: &str = "PERIOD";

    pub const CURRENCY_SYMBOL: &str = "CURRENCY_SYMBOL";
    pub const INTEGER_PART: &str = "INTEGER_PART";
    pub const DECIMAL_POINT: &str = "DECIMAL_POINT";
    pub const DECIMAL_PART: &str = "DECIMAL_PART";

    pub const NUMBER: &str = "NUMBER";
    pub const UNIT_SYMBOL: &str = "UNIT_SYMBOL";

    pub const DIGIT: &str = "DIGIT";
    pub const ORDINAL_SUFFIX: &str = "ORDINAL_SUFFIX";

    pub const ENTITY_MATCH: &str = "ENTITY_MATCH";
}

/// The closed set of token categories.
///
/// The seven recognizable categories plus `Text` for tokens nothing claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Currency,
    Cardinal,
    Unit,
    Date,
    Time,
    Ordinal,
    NamedEntity,
    Text,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Currency => "currency",
            Category::Cardinal => "cardinal",
            Category::Unit => "unit",
            Category::Date => "date",
            Category::Time => "time",
            Category::Ordinal => "ordinal",
            Category::NamedEntity => "named_entity",
            Category::Text => "text",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

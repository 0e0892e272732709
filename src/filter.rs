//! JSONPath filtering of item records.

use serde_json::Value;
use serde_json_path::{JsonPath, ParseError};
use std::fmt;
use thiserror::Error;

/// Root selector; matches the whole record.
pub const ROOT_EXPR: &str = "$";

/// A malformed filter expression, rejected at parse time.
#[derive(Debug, Error)]
#[error("invalid filter expression: {0}")]
pub struct FilterError(#[from] ParseError);

/// Selects sub-values of an item record with a JSONPath expression
/// (RFC 9535: field access, wildcards, recursive descent, predicates).
///
/// Parsing happens once, at construction, so a bad expression is caught
/// before any request is made. Used as a predicate: a record is retained
/// when at least one value inside it matches.
#[derive(Debug, Clone)]
pub struct PathFilter {
    expr: String,
    path: JsonPath,
}

impl PathFilter {
    /// Parses a JSONPath expression.
    pub fn parse(expr: &str) -> Result<Self, FilterError> {
        let path = JsonPath::parse(expr)?;
        Ok(Self { expr: expr.to_string(), path })
    }

    /// The original expression string.
    pub fn expression(&self) -> &str {
        &self.expr
    }

    /// All values within `record` matched by the expression, in document
    /// order. Deterministic and side-effect free; may be empty.
    pub fn apply<'a>(&self, record: &'a Value) -> Vec<&'a Value> {
        self.path.query(record).all()
    }

    /// True when the expression matches at least one value in `record`.
    pub fn matches(&self, record: &Value) -> bool {
        !self.apply(record).is_empty()
    }
}

impl Default for PathFilter {
    /// The root selector, which retains every record.
    fn default() -> Self {
        Self::parse(ROOT_EXPR).expect("root selector is a valid expression")
    }
}

impl fmt::Display for PathFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}

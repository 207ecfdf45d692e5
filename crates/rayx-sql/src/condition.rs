//! Predicate records and the conjunctive condition string shared by
//! `where_` and `or`.
//!
//! A [`Predicate`] is one `key`/`value`/`operator` entry. [`conditions`] turns a
//! list of them into `a=1 and b like 'x'`, keeping input order and silently
//! dropping entries whose operator is not recognized. [`try_conditions`] is the
//! strict twin that reports those entries instead.

use crate::error::{SqlError, SqlResult};
use crate::trace;
use crate::value::Value;
use serde::Deserialize;
use std::fmt;

/// Comparison operator of a [`Predicate`].
///
/// Deserializes from `"equals"` or `"="` and from `"like"`. Any other token is
/// kept verbatim in [`Operator::Unsupported`]; a missing operator defaults to
/// `Unsupported("")`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Operator {
    /// `key=value`
    Equals,
    /// `key like value`
    Like,
    /// Anything else. Produces no fragment.
    Unsupported(String),
}

impl Operator {
    /// The token this operator was parsed from (canonical for known operators).
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Equals => "equals",
            Operator::Like => "like",
            Operator::Unsupported(raw) => raw,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Operator::Unsupported(_))
    }
}

impl Default for Operator {
    fn default() -> Self {
        Operator::Unsupported(String::new())
    }
}

impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        match s {
            "equals" | "=" => Operator::Equals,
            "like" => Operator::Like,
            other => Operator::Unsupported(other.to_string()),
        }
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        match s.as_str() {
            "equals" | "=" => Operator::Equals,
            "like" => Operator::Like,
            _ => Operator::Unsupported(s),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a WHERE/OR predicate list.
///
/// # Example
/// ```
/// use rayx_sql::Predicate;
///
/// let preds = [Predicate::eq("id", 123), Predicate::like("name", "Json")];
/// assert_eq!(rayx_sql::conditions(&preds), "id=123 and name like 'Json'");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Predicate {
    pub key: String,
    pub value: Value,
    #[serde(alias = "type", default)]
    pub operator: Operator,
}

impl Predicate {
    pub fn new(key: impl Into<String>, value: impl Into<Value>, operator: impl Into<Operator>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            operator: operator.into(),
        }
    }

    /// `key=value`
    pub fn eq(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(key, value, Operator::Equals)
    }

    /// `key like value`
    pub fn like(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(key, value, Operator::Like)
    }

    /// Render this predicate, or `None` if its operator is unsupported.
    pub fn fragment(&self) -> Option<String> {
        let op = match &self.operator {
            Operator::Equals => "=",
            Operator::Like => " like ",
            Operator::Unsupported(_) => return None,
        };
        let mut out = String::with_capacity(self.key.len() + op.len() + 8);
        out.push_str(&self.key);
        out.push_str(op);
        self.value.write_literal(&mut out);
        Some(out)
    }
}

/// Join the fragments of `predicates` with `" and "`.
///
/// Entries with an unsupported operator are skipped (and logged at WARN with
/// the `tracing` feature). An empty result means nothing matched.
pub fn conditions(predicates: &[Predicate]) -> String {
    predicates
        .iter()
        .filter_map(|p| {
            let fragment = p.fragment();
            if fragment.is_none() {
                trace::predicate_skipped(&p.key, p.operator.as_str());
            }
            fragment
        })
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Like [`conditions`], but fails on the first unsupported operator.
pub fn try_conditions(predicates: &[Predicate]) -> SqlResult<String> {
    let fragments = predicates
        .iter()
        .map(|p| {
            p.fragment()
                .ok_or_else(|| SqlError::unsupported_operator(&p.key, p.operator.as_str()))
        })
        .collect::<SqlResult<Vec<_>>>()?;
    Ok(fragments.join(" and "))
}

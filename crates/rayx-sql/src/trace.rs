//! `tracing` emission for the builder.
//!
//! Every function here compiles to a no-op without the `tracing` feature.

use crate::config::BuilderConfig;
use std::borrow::Cow;

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

/// The text to log for a finished statement, or `None` when logging is off.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn logged_sql<'a>(sql: &'a str, config: &BuilderConfig) -> Option<Cow<'a, str>> {
    if !config.log_statements {
        return None;
    }
    match config.max_log_length {
        Some(max) if sql.len() > max => {
            Some(Cow::Owned(format!("{}...", truncate_sql_bytes(sql, max))))
        }
        _ => Some(Cow::Borrowed(sql)),
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn statement_built(sql: &str, config: &BuilderConfig) {
    let Some(shown) = logged_sql(sql, config) else {
        return;
    };
    tracing::debug!(target: "rayx_sql.sql", len = sql.len(), sql = %shown, "statement built");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn statement_built(_sql: &str, _config: &BuilderConfig) {}

#[cfg(feature = "tracing")]
pub(crate) fn predicate_skipped(key: &str, operator: &str) {
    tracing::warn!(target: "rayx_sql.sql", key, operator, "skipping predicate with unsupported operator");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn predicate_skipped(_key: &str, _operator: &str) {}

#[cfg(feature = "tracing")]
pub(crate) fn or_ignored() {
    tracing::trace!(target: "rayx_sql.sql", "or() without a preceding where(); ignored");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn or_ignored() {}

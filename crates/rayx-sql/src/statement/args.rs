//! Argument shapes accepted by `select`, `columns` and `values`.

use crate::value::Value;

/// A column list: everything, one caller-written fragment, or a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Columns {
    /// No columns given. `select` renders `*`; `columns` appends nothing.
    #[default]
    All,
    /// A single fragment used verbatim, e.g. `"id, name"`.
    One(String),
    /// Individual column names.
    Many(Vec<String>),
}

impl From<&str> for Columns {
    fn from(s: &str) -> Self {
        Columns::One(s.to_string())
    }
}

impl From<String> for Columns {
    fn from(s: String) -> Self {
        Columns::One(s)
    }
}

impl From<Vec<String>> for Columns {
    fn from(v: Vec<String>) -> Self {
        Columns::Many(v)
    }
}

impl From<Vec<&str>> for Columns {
    fn from(v: Vec<&str>) -> Self {
        Columns::Many(v.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Columns {
    fn from(v: &[&str]) -> Self {
        Columns::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Columns {
    fn from(v: [&str; N]) -> Self {
        Columns::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<T: Into<Columns>> From<Option<T>> for Columns {
    fn from(v: Option<T>) -> Self {
        v.map_or(Columns::All, Into::into)
    }
}

/// A VALUES list: a caller-written fragment or literals to be formatted.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    /// Used verbatim, e.g. `"1, 'Ann'"`.
    Raw(String),
    /// Each element is rendered with [`format_literal`](crate::format_literal).
    List(Vec<Value>),
}

impl From<&str> for Values {
    fn from(s: &str) -> Self {
        Values::Raw(s.to_string())
    }
}

impl From<String> for Values {
    fn from(s: String) -> Self {
        Values::Raw(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Values {
    fn from(v: Vec<T>) -> Self {
        Values::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Values {
    fn from(v: &[T]) -> Self {
        Values::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Values {
    fn from(v: [T; N]) -> Self {
        Values::List(v.into_iter().map(Into::into).collect())
    }
}

use super::args::{Columns, Values};
use crate::condition::{Predicate, conditions, try_conditions};
use crate::config::{BuilderConfig, SortDir};
use crate::error::SqlResult;
use crate::trace;
use crate::value::{Value, format_literal};

/// An owned, reusable accumulator for one SQL statement at a time.
///
/// Every clause method appends to the in-progress text and returns `&mut Self`
/// for chaining. Initiators (`select`, `insert`, `update`, `delete_from`)
/// replace the text instead. [`end`](StatementBuilder::end) hands back the
/// finished statement with a trailing `;` and resets the builder.
///
/// No clause ordering is enforced; calling methods out of SQL order simply
/// yields malformed text.
///
/// # Example
/// ```
/// use rayx_sql::{Predicate, SortDir, StatementBuilder};
///
/// let mut b = StatementBuilder::new();
/// let sql = b
///     .select(["age", "name"])
///     .from("student")
///     .where_(&[Predicate::eq("id", 123)])
///     .order_by("age", SortDir::Asc)
///     .end();
/// assert_eq!(sql, "select age,name from student where id=123 order by age asc;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatementBuilder {
    text: String,
    has_predicate: bool,
    config: BuilderConfig,
}

impl StatementBuilder {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with a custom configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            text: String::new(),
            has_predicate: false,
            config,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The text accumulated so far, without the terminating `;`.
    pub fn to_sql(&self) -> &str {
        &self.text
    }

    /// Whether a `where_` call has happened since the last reset.
    pub fn has_predicate(&self) -> bool {
        self.has_predicate
    }

    // ==================== Initiators ====================

    /// Start a `delete from <table>` statement.
    pub fn delete_from(&mut self, table: &str) -> &mut Self {
        self.text.clear();
        self.text.push_str("delete ");
        self.from(table)
    }

    /// Start a `select` statement.
    ///
    /// A single string is used verbatim, a list is joined with `,`, and an
    /// empty list or [`Columns::All`] renders `*`.
    pub fn select(&mut self, columns: impl Into<Columns>) -> &mut Self {
        self.text.clear();
        self.text.push_str("select ");
        match columns.into() {
            Columns::One(column) => self.text.push_str(&column),
            Columns::Many(names) if !names.is_empty() => self.text.push_str(&names.join(",")),
            Columns::Many(_) | Columns::All => self.text.push('*'),
        }
        self.text.push(' ');
        self
    }

    /// Start an `update <table> ` statement.
    pub fn update(&mut self, table: &str) -> &mut Self {
        self.text.clear();
        self.text.push_str("update ");
        self.text.push_str(table);
        self.text.push(' ');
        self
    }

    /// Start an `insert into <table> ` statement.
    pub fn insert(&mut self, table: &str) -> &mut Self {
        self.text.clear();
        self.text.push_str("insert into ");
        self.text.push_str(table);
        self.text.push(' ');
        self
    }

    // ==================== Clauses ====================

    /// Append `from <table>`.
    pub fn from(&mut self, table: &str) -> &mut Self {
        self.text.push_str("from ");
        self.text.push_str(table);
        self
    }

    /// Append ` where <conditions>` and mark that a predicate was issued.
    ///
    /// The mark is set even when no predicate rendered (all operators
    /// unsupported, or an empty list), which lets a later [`or`](Self::or)
    /// take effect.
    pub fn where_(&mut self, predicates: &[Predicate]) -> &mut Self {
        let clause = conditions(predicates);
        self.push_where(&clause)
    }

    /// Strict [`where_`](Self::where_): an unsupported operator is an error and
    /// leaves the builder untouched.
    pub fn try_where(&mut self, predicates: &[Predicate]) -> SqlResult<&mut Self> {
        let clause = try_conditions(predicates)?;
        Ok(self.push_where(&clause))
    }

    /// Append ` or <conditions>`, but only after a [`where_`](Self::where_).
    ///
    /// Before any `where_` (or after [`end`](Self::end)) this is a no-op.
    pub fn or(&mut self, predicates: &[Predicate]) -> &mut Self {
        if !self.has_predicate {
            trace::or_ignored();
            return self;
        }
        let clause = conditions(predicates);
        self.push_or(&clause)
    }

    /// Strict [`or`](Self::or). Still a no-op before any `where_`.
    pub fn try_or(&mut self, predicates: &[Predicate]) -> SqlResult<&mut Self> {
        if !self.has_predicate {
            trace::or_ignored();
            return Ok(self);
        }
        let clause = try_conditions(predicates)?;
        Ok(self.push_or(&clause))
    }

    /// Append ` order by <name> <dir>`. An empty `name` is a no-op.
    ///
    /// `None` falls back to [`BuilderConfig::default_direction`] (`desc`).
    pub fn order_by(&mut self, name: &str, dir: impl Into<Option<SortDir>>) -> &mut Self {
        if name.is_empty() {
            return self;
        }
        let dir = dir.into().unwrap_or(self.config.default_direction);
        self.text.push_str(" order by ");
        self.text.push_str(name);
        self.text.push(' ');
        self.text.push_str(dir.as_str());
        self
    }

    /// Append `set k1=v1, k2=v2` in iteration order.
    ///
    /// No leading space is written; [`update`](Self::update) leaves one.
    pub fn set<K, V>(&mut self, data: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        self.text.push_str("set ");
        for (i, (k, v)) in data.into_iter().enumerate() {
            if i > 0 {
                self.text.push_str(", ");
            }
            let v: Value = v.into();
            self.text.push_str(k.as_ref());
            self.text.push('=');
            v.write_literal(&mut self.text);
        }
        self
    }

    /// Append `(<columns>) `. A single string is used verbatim; a list is
    /// joined with `, `. [`Columns::All`] appends nothing.
    pub fn columns(&mut self, columns: impl Into<Columns>) -> &mut Self {
        let list = match columns.into() {
            Columns::One(column) => column,
            Columns::Many(names) => names.join(", "),
            Columns::All => return self,
        };
        self.text.push('(');
        self.text.push_str(&list);
        self.text.push_str(") ");
        self
    }

    /// Append `values (<values>) `. A raw string is used verbatim; a list has
    /// each element formatted as a literal and joined with `, `.
    pub fn values(&mut self, values: impl Into<Values>) -> &mut Self {
        let list = match values.into() {
            Values::Raw(raw) => raw,
            Values::List(items) => items.iter().map(format_literal).collect::<Vec<_>>().join(", "),
        };
        self.text.push_str("values (");
        self.text.push_str(&list);
        self.text.push_str(") ");
        self
    }

    /// Append `(k1, k2) values (v1, v2) ` from key/value pairs in iteration
    /// order.
    pub fn columns_with_values<K, V>(&mut self, data: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let (names, literals): (Vec<String>, Vec<String>) = data
            .into_iter()
            .map(|(k, v)| {
                let v: Value = v.into();
                (k.into(), format_literal(&v))
            })
            .unzip();
        self.text.push('(');
        self.text.push_str(&names.join(", "));
        self.text.push_str(") values (");
        self.text.push_str(&literals.join(", "));
        self.text.push_str(") ");
        self
    }

    // ==================== Terminal ====================

    /// Return the finished statement terminated by `;` and reset the builder.
    ///
    /// Trailing spaces left by `select`, `columns` or `values` are dropped
    /// before the terminator.
    pub fn end(&mut self) -> String {
        let mut sql = std::mem::take(&mut self.text);
        sql.truncate(sql.trim_end_matches(' ').len());
        sql.push(';');
        self.has_predicate = false;
        trace::statement_built(&sql, &self.config);
        sql
    }

    fn push_where(&mut self, clause: &str) -> &mut Self {
        if !clause.is_empty() {
            self.text.push_str(" where ");
            self.text.push_str(clause);
        }
        self.has_predicate = true;
        self
    }

    fn push_or(&mut self, clause: &str) -> &mut Self {
        if !clause.is_empty() {
            self.text.push_str(" or ");
            self.text.push_str(clause);
        }
        self
    }
}

//! # rayx-sql
//!
//! A fluent builder that assembles plain SQL statement text from method calls.
//! It never connects to a database, parses SQL, or executes anything.
//!
//! ## Features
//!
//! - **One reusable builder**: chain clauses, call `end()`, reuse the instance
//! - **Inline literals**: numbers unquoted, strings in single quotes (no escaping)
//! - **Predicate lists**: `where_`/`or` take `key`/`value`/`operator` records,
//!   also deserializable from JSON
//! - **Lenient by default**: unsupported operators are skipped; `try_*` methods
//!   report them as errors instead
//!
//! ```
//! use rayx_sql::{Predicate, SortDir, StatementBuilder};
//!
//! let mut b = StatementBuilder::new();
//! let sql = b
//!     .select(["age", "name"])
//!     .from("student")
//!     .where_(&[Predicate::eq("id", 123)])
//!     .order_by("age", SortDir::Asc)
//!     .end();
//! assert_eq!(sql, "select age,name from student where id=123 order by age asc;");
//! ```
//!
//! **Warning**: string literals are not escaped. Never pass untrusted input.

pub mod condition;
pub mod config;
pub mod error;
pub mod statement;
pub mod value;

mod trace;

pub use condition::{Operator, Predicate, conditions, try_conditions};
pub use config::{BuilderConfig, SortDir};
pub use error::{SqlError, SqlResult};
pub use statement::{Columns, StatementBuilder, Values};
pub use value::{Value, format_literal};

//! Fluent SQL statement text builder.
//!
//! [`StatementBuilder`] accumulates one statement from chained calls and
//! returns it from [`StatementBuilder::end`]. Values are inlined as literals;
//! nothing is parameterized or executed.
//!
//! # Example
//!
//! ```
//! use rayx_sql::{StatementBuilder, Value};
//!
//! let mut b = StatementBuilder::new();
//! let sql = b
//!     .update("student")
//!     .set([("age", Value::from(20)), ("name", Value::from("Tom"))])
//!     .end();
//! assert_eq!(sql, "update student set age=20, name='Tom';");
//! ```

mod args;
mod builder;


pub use args::{Columns, Values};
pub use builder::StatementBuilder;

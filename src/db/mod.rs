//! Databases for holding information relevant to a check.
//!
//!   - [The term database](crate::db::term)
//!     + Every term, stored once and accessed through a [key](crate::structures::term::TermKey).
//!       Terms, and so the database, outlive any check, and the checker only ever borrows the database.

pub mod term;

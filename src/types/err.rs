//! Error types used in the library.
//!
//! - Errors are only returned when building terms or configuring a checker.
//! - Checking a justification never returns an error --- a clause which cannot be checked is reported as unverified.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::sort::Sort;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Term(TermError),
}

/// Errors when setting a configuration option.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The value is outside the bounds of the option.
    OutOfBounds,
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors when building a term in the [term database](crate::db::term).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TermError {
    /// A key which does not belong to the term database.
    UnknownTerm,

    /// A boolean connective applied to some argument which is not of boolean sort.
    NotBoolean,

    /// The arguments of an equality, or the branches of an if-then-else, differ in sort.
    SortMismatch(Sort, Sort),

    /// A conjunction, disjunction, or exclusive-or without arguments.
    EmptyArguments,

    /// An atom was declared a second time, with a different sort.
    Redeclared(String),
}

impl From<TermError> for ErrorKind {
    fn from(e: TermError) -> Self {
        ErrorKind::Term(e)
    }
}

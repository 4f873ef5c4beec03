//! Display of terms and clauses, as s-expressions.
//!
//! Subterms below the given depth are written as `…`, and keys which do not belong to the database as `?`.

use std::fmt::{Display, Formatter, Result};

use crate::{
    config::DisplayDepth,
    structures::term::{TermData, TermKey},
};

use super::TermDB;

/// A term of some term database, displayed to some depth.
pub struct TermDisplay<'a> {
    db: &'a TermDB,
    key: TermKey,
    depth: DisplayDepth,
}

impl<'a> TermDisplay<'a> {
    pub fn new(db: &'a TermDB, key: TermKey, depth: DisplayDepth) -> Self {
        TermDisplay { db, key, depth }
    }
}

impl Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_term(f, self.db, self.key, self.depth)
    }
}

fn write_term(f: &mut Formatter<'_>, db: &TermDB, key: TermKey, depth: DisplayDepth) -> Result {
    let Some(data) = db.data(key) else {
        return write!(f, "?");
    };

    match data {
        TermData::Atom(name) => write!(f, "{name}"),

        _ if depth == 0 => write!(f, "…"),

        _ => {
            write!(f, "({}", data.connective())?;
            for arg in data.args() {
                write!(f, " ")?;
                write_term(f, db, *arg, depth - 1)?;
            }
            write!(f, ")")
        }
    }
}

/// A clause of terms from some term database, displayed with each literal to some depth.
pub struct ClauseDisplay<'a> {
    db: &'a TermDB,
    clause: &'a [TermKey],
    depth: DisplayDepth,
}

impl<'a> ClauseDisplay<'a> {
    pub fn new(db: &'a TermDB, clause: &'a [TermKey], depth: DisplayDepth) -> Self {
        ClauseDisplay { db, clause, depth }
    }
}

impl Display for ClauseDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut literals = self.clause.iter();
        if let Some(first) = literals.next() {
            write_term(f, self.db, *first, self.depth)?;
        }
        for literal in literals {
            write!(f, " ")?;
            write_term(f, self.db, *literal, self.depth)?;
        }
        Ok(())
    }
}

//! Equivalence of terms, as used when checking a clause.
//!
//! Two terms are equivalent if they are identical, or if both are equalities with the arguments of one being the arguments of the other, swapped.
//!
//! Equivalence is not closed under commutativity of any other connective, and so `(and a b)` and `(and b a)` are not equivalent.
//! Nor is the swap applied below the top of a term, so `(not (= x y))` and `(not (= y x))` are not equivalent.

use crate::{
    db::term::TermDB,
    structures::term::{TermData, TermKey},
};

/// Whether `a` and `b` are equivalent.
pub fn equiv(db: &TermDB, a: TermKey, b: TermKey) -> bool {
    if a == b {
        return true;
    }
    match (db.data(a), db.data(b)) {
        (Some(TermData::Eq([x, y])), Some(TermData::Eq([z, u]))) => x == u && y == z,
        _ => false,
    }
}

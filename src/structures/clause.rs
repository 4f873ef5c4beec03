//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! Here, a literal is any term of boolean sort, and so a clause is a sequence of [keys](TermKey) to terms.
//! No attempt is made to deduplicate or order the literals of a clause, as the order of literals matters when selecting a [representative](crate::checker::representative).
//!
//! - The empty clause is always false (never true), and is never verified by the checker.

use crate::structures::{justification::Justification, term::TermKey};

/// The canonical implementation of a clause.
pub type Clause = Vec<TermKey>;

/// The clause of a justification, with literals in the order given by the justification.
pub fn literals(justification: &Justification) -> Clause {
    justification.literals().to_vec()
}

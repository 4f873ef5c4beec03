//! Key structures, such as terms, clauses, and justifications.
//!
//! ## Terms and literals
//!
//! A [term] is an atom or some connective applied to terms.
//! Terms of boolean [sort] serve as literals, and a literal is negated by wrapping it in a `not` (or stripping a `not`, if present).
//!
//! ## Clauses
//!
//! A [clause] is a sequence of literals, read as their disjunction.
//! Clauses arrive with a [justification], which names the rule the clause is claimed to follow from.

pub mod clause;
pub mod justification;
pub mod sort;
pub mod term;

//! Justifications, aka. a record asserting some clause follows from a named derivation rule.
//!
//! A justification is produced by whatever clausified a formula, and is opaque to the checker beyond the list of literals it carries.
//! In particular, the name of the rule is kept only for the benefit of whoever reads a justification --- the checker does not consult it.
//!
//! ```rust
//! # use tseitin_checker::db::term::TermDB;
//! # use tseitin_checker::structures::justification::{Justification, TSEITIN_RULE};
//! let mut terms = TermDB::default();
//! let p = terms.mk_bool("p").unwrap();
//! let q = terms.mk_bool("q").unwrap();
//! let p_or_q = terms.mk_or(vec![p, q]).unwrap();
//! let not_p = terms.mk_not(p).unwrap();
//!
//! let justification = Justification::tseitin(vec![p_or_q, not_p]);
//! assert_eq!(justification.rule(), TSEITIN_RULE);
//! assert_eq!(justification.literals(), &[p_or_q, not_p]);
//! ```

use crate::structures::term::TermKey;

/// The name of the rule used by [Justification::tseitin].
pub const TSEITIN_RULE: &str = "tseitin";

/// A rule name paired with the literals of some clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Justification {
    rule: String,
    literals: Vec<TermKey>,
}

impl Justification {
    pub fn new(rule: impl Into<String>, literals: impl IntoIterator<Item = TermKey>) -> Self {
        Justification {
            rule: rule.into(),
            literals: literals.into_iter().collect(),
        }
    }

    /// A justification of the clause of `literals` by Tseitin transformation.
    pub fn tseitin(literals: impl IntoIterator<Item = TermKey>) -> Self {
        Self::new(TSEITIN_RULE, literals)
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// The literals of the justified clause, in the order given.
    pub fn literals(&self) -> &[TermKey] {
        &self.literals
    }
}

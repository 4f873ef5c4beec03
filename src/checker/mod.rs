/*!
The checker --- which decides whether a clause justified by Tseitin transformation follows from the connective it derives from.

A check proceeds as follows:
1. The literals of the clause are read from the justification.
2. A [representative] literal is selected by depth.
3. The shape of the representative selects the applicable [rules].
4. A scope is opened on the [mark store](crate::marks), each literal of the clause is marked, and the rules are read off the marks.
   The scope is closed once the rule has been read, on every path.

Nothing produced by whatever clausified the formula is trusted, beyond the literals of the clause.

# Example
```rust
# use tseitin_checker::checker::Checker;
# use tseitin_checker::config::Config;
# use tseitin_checker::db::term::TermDB;
# use tseitin_checker::reports::{Report, Rule};
# use tseitin_checker::structures::justification::Justification;
let mut terms = TermDB::default();
let a = terms.mk_bool("a").unwrap();
let b = terms.mk_bool("b").unwrap();
let a_and_b = terms.mk_and(vec![a, b]).unwrap();
let not_a = terms.mk_not(a).unwrap();
let not_b = terms.mk_not(b).unwrap();

let mut checker = Checker::new(Config::default());

let and_intro = Justification::tseitin(vec![a_and_b, not_a, not_b]);
assert_eq!(checker.check_report(&terms, &and_intro), Report::Verified(Rule::And));

let partial = Justification::tseitin(vec![a_and_b, not_a]);
assert!(!checker.check(&terms, &partial));
```

# Concurrency
A checker owns its mark store, and so checks made with one checker are made one at a time.
To check in parallel, use one checker for each thread --- the term database may be shared.
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
pub mod equiv;
pub mod representative;
pub mod rules;

pub use crate::structures::clause::literals;

use callbacks::CallbackOnMiss;
use equiv::equiv;
use representative::representative;

use crate::{
    config::Config,
    db::term::TermDB,
    marks::{MarkScope, MarkStore},
    misc::log::targets::{self},
    reports::{Report, Rule},
    structures::{
        justification::Justification,
        term::{TermData, TermKey},
    },
};

/// A checker, with a configuration, a mark store, and counts of checks made.
pub struct Checker {
    /// The configuration of the checker.
    pub config: Config,

    /// Counts of checks made, by outcome.
    counters: Counters,

    /// The store of marks, with some scope open only during a check.
    marks: MarkStore,

    /// The callback made on a miss.
    callback_miss: Option<Box<CallbackOnMiss>>,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Checker {
    /// A checker with configuration `config`, an empty mark store, and no checks made.
    pub fn new(config: Config) -> Self {
        Checker {
            config,
            counters: Counters::default(),
            marks: MarkStore::default(),
            callback_miss: None,
        }
    }

    /// Whether the clause of `justification` is verified as an instance of a Tseitin rule.
    pub fn check(&mut self, db: &TermDB, justification: &Justification) -> bool {
        self.check_report(db, justification).is_verified()
    }

    /// A report on the check of the clause of `justification`.
    pub fn check_report(&mut self, db: &TermDB, justification: &Justification) -> Report {
        self.counters.checks += 1;
        let clause = justification.literals();

        let Some(main) = representative(db, clause) else {
            log::trace!(target: targets::CHECK, "Empty clause");
            self.counters.empty += 1;
            return Report::NoRepresentative;
        };

        let report = self.dispatch(db, clause, main);

        match report {
            Report::Verified(rule) => {
                log::trace!(target: targets::CHECK, "Verified by {rule}");
                self.counters.verified += 1;
            }

            Report::Miss => {
                self.counters.misses += 1;
                if self.config.miss_diagnostics.value {
                    let depth = self.config.display_depth.value;
                    log::trace!(target: targets::CHECK, "Miss {} in {}", db.display(main, depth), db.display_clause(clause, depth));
                    self.make_callback_miss(db, main);
                }
            }

            Report::Unrecognized => {
                log::trace!(target: targets::CHECK, "Unrecognized {}", db.display(main, self.config.display_depth.value));
                self.counters.unrecognized += 1;
            }

            Report::NoRepresentative => {}
        }

        report
    }

    /// Counts of checks made, by outcome.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Clears the counts of checks made.
    pub fn reset_counters(&mut self) {
        self.counters = Counters::default();
    }
}

impl Checker {
    /// Applies the rule(s) for the shape of `main` to `clause`.
    fn dispatch(&mut self, db: &TermDB, clause: &[TermKey], main: TermKey) -> Report {
        let Some(data) = db.data(main) else {
            return Report::Unrecognized;
        };

        match data {
            TermData::Atom(_) => Report::Unrecognized,

            TermData::And(args) => {
                let ok = self.with_complement_marks(db, clause, |scope| rules::and(scope, args));
                verdict(Rule::And, ok)
            }

            TermData::Or(args) => {
                let ok = self.with_complement_marks(db, clause, |scope| rules::or(scope, args));
                verdict(Rule::Or, ok)
            }

            TermData::Eq([x, y]) => {
                let mut recognized = false;

                if db.is_bool(*x) {
                    recognized = true;
                    if self.with_complement_marks(db, clause, |scope| rules::eq_bool(scope, *x, *y)) {
                        return Report::Verified(Rule::EqBool);
                    }
                }

                if let Some(TermData::Ite(ite)) = db.data(*x) {
                    recognized = true;
                    if self.with_complement_marks(db, clause, |scope| rules::eq_ite(scope, db, *ite, *y)) {
                        return Report::Verified(Rule::EqIte);
                    }
                }

                match recognized {
                    true => Report::Miss,
                    false => Report::Unrecognized,
                }
            }

            TermData::Ite(args @ [_, _, z]) if db.is_bool(*z) => {
                let ok = self.with_complement_marks(db, clause, |scope| rules::ite(scope, *args));
                verdict(Rule::Ite, ok)
            }

            TermData::Ite(_) => Report::Unrecognized,

            TermData::Implies(args) => {
                let ok = self.with_complement_marks(db, clause, |scope| rules::implies(scope, *args));
                verdict(Rule::Implies, ok)
            }

            TermData::Xor(args) => {
                let ok = self.with_complement_marks(db, clause, |scope| rules::xor(scope, args));
                verdict(Rule::Xor, ok)
            }

            TermData::Not(a) => self.dispatch_negation(db, clause, *a),
        }
    }

    /// Applies the rule(s) for the shape of `(not a)` to `clause`.
    fn dispatch_negation(&mut self, db: &TermDB, clause: &[TermKey], a: TermKey) -> Report {
        if clause.iter().any(|literal| equiv(db, a, *literal)) {
            return Report::Verified(Rule::NotEquiv);
        }

        let Some(data) = db.data(a) else {
            return Report::Miss;
        };

        match data {
            TermData::And(args) => {
                let ok = self.with_marks(db, clause, |scope| rules::not_and(scope, args));
                verdict(Rule::NotAnd, ok)
            }

            TermData::Or(args) => {
                let ok = self.with_marks(db, clause, |scope| rules::not_or(scope, args));
                verdict(Rule::NotOr, ok)
            }

            TermData::Eq(args @ [x, _]) if db.is_bool(*x) => {
                let ok = self.with_complement_marks(db, clause, |scope| rules::not_eq(scope, *args));
                verdict(Rule::NotEq, ok)
            }

            TermData::Ite(args @ [_, _, z]) if db.is_bool(*z) => {
                let ok = self.with_complement_marks(db, clause, |scope| rules::not_ite(scope, *args));
                verdict(Rule::NotIte, ok)
            }

            TermData::Implies(args) => {
                let ok = self.with_complement_marks(db, clause, |scope| rules::not_implies(scope, *args));
                verdict(Rule::NotImplies, ok)
            }

            TermData::Xor(args) => {
                let ok = self.with_complement_marks(db, clause, |scope| rules::not_xor(scope, args));
                verdict(Rule::NotXor, ok)
            }

            // Only equivalence applies.
            TermData::Atom(_) | TermData::Not(_) | TermData::Eq(_) | TermData::Ite(_) => Report::Miss,
        }
    }

    /// Reads `rule` in a scope with a plain mark on each literal of `clause`.
    fn with_marks(&mut self, db: &TermDB, clause: &[TermKey], rule: impl FnOnce(&MarkScope) -> bool) -> bool {
        let mut scope = self.marks.open(db);
        for literal in clause {
            scope.mark(*literal);
        }
        rule(&scope)
    }

    /// Reads `rule` in a scope with a complement mark on each literal of `clause`.
    fn with_complement_marks(
        &mut self,
        db: &TermDB,
        clause: &[TermKey],
        rule: impl FnOnce(&MarkScope) -> bool,
    ) -> bool {
        let mut scope = self.marks.open(db);
        for literal in clause {
            scope.mark_complement(*literal);
        }
        rule(&scope)
    }
}

fn verdict(rule: Rule, ok: bool) -> Report {
    match ok {
        true => Report::Verified(rule),
        false => Report::Miss,
    }
}

//! A library for checking clauses produced by structural clausification (Tseitin transformation) of boolean connectives.
//!
//! When a formula containing conjunctions, disjunctions, equalities, if-then-else, implications, exclusive-or, or negations of these is converted to clausal form, each compound subformula is given a literal and clauses are produced which define the literal in terms of the arguments of the subformula.
//! For example, the literal of `(and a b)` is defined by the clauses `(and a b) ∨ ¬a ∨ ¬b`, `¬(and a b) ∨ a`, and `¬(and a b) ∨ b`.
//!
//! tseitin_checker independently re-derives whether such a clause follows from the semantics of the connective it derives from.
//! The clause is read from a [justification](structures::justification), and nothing else is taken on trust from whatever produced the clause.
//! One clause is checked at a time, and the result of a check is a verdict --- a clause which fails to check is not an error.
//!
//! # Orientation
//!
//! - Terms are built in a [term database](db::term), which stores each term once and hands out [keys](structures::term::TermKey) to terms.
//! - A [checker] selects a [representative](checker::representative) literal from a clause, and applies the [rule](checker::rules) for the shape of the representative.
//! - Rules are read off a [mark store](marks), populated from the clause for the duration of a single check.
//! - The outcome of a check is a [report](reports::Report), or simply a boolean.
//!
//! # Examples
//!
//! + Check the clauses defining an implication.
//!
//! ```rust
//! # use tseitin_checker::checker::Checker;
//! # use tseitin_checker::db::term::TermDB;
//! # use tseitin_checker::structures::justification::Justification;
//! let mut terms = TermDB::default();
//! let a = terms.mk_bool("a").unwrap();
//! let b = terms.mk_bool("b").unwrap();
//! let a_implies_b = terms.mk_implies(a, b).unwrap();
//! let not_b = terms.negate(b).unwrap();
//!
//! let mut checker = Checker::default();
//!
//! assert!(checker.check(&terms, &Justification::tseitin(vec![a_implies_b, a])));
//! assert!(checker.check(&terms, &Justification::tseitin(vec![a_implies_b, not_b])));
//! assert!(!checker.check(&terms, &Justification::tseitin(vec![a_implies_b, b])));
//! ```
//!
//! + Observe a miss.
//!
//! ```rust
//! # use std::{cell::RefCell, rc::Rc};
//! # use tseitin_checker::checker::Checker;
//! # use tseitin_checker::db::term::TermDB;
//! # use tseitin_checker::reports::Report;
//! # use tseitin_checker::structures::{justification::Justification, term::TermKey};
//! let mut terms = TermDB::default();
//! let a = terms.mk_bool("a").unwrap();
//! let b = terms.mk_bool("b").unwrap();
//! let a_or_b = terms.mk_or(vec![a, b]).unwrap();
//!
//! let missed = Rc::new(RefCell::new(Vec::new()));
//! let missed_cb = missed.clone();
//!
//! let mut checker = Checker::default();
//! checker.set_callback_miss(Box::new(move |terms: &TermDB, key: TermKey| {
//!     missed_cb.borrow_mut().push(terms.display(key, 4).to_string())
//! }));
//!
//! let report = checker.check_report(&terms, &Justification::tseitin(vec![a_or_b, a]));
//! assert_eq!(report, Report::Miss);
//! assert_eq!(missed.borrow().as_slice(), &["(or a b)".to_string()]);
//! ```
//!
//! # Limitations
//!
//! Equivalence of terms is limited to identity and swapping the arguments of an equality.
//! So, for example, a clause may fail to check if the arguments of some conjunction were reordered after the clause was produced.
//!
//! # Logs
//!
//! Calls to [log!](log) are made with targets listed in [misc::log].
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), misses can be found with `RUST_LOG=check=trace …`.

#![allow(clippy::single_match)]

pub mod checker;
pub mod config;
pub mod db;
pub mod marks;
pub mod misc;
pub mod reports;
pub mod structures;
pub mod types;

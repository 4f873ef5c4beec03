/*!
A database of terms, accessed via methods on a [TermDB] struct.

Terms are hash-consed: before a term is stored the database checks whether a structurally identical term has been stored, and if so returns the key to that term.
As arguments are themselves keys, this check is shallow, and two keys are equal exactly when the terms they point to are structurally identical.

Terms are built with the `mk_` methods, each of which checks the sorts of the arguments given.

```rust
# use tseitin_checker::db::term::TermDB;
# use tseitin_checker::structures::sort::Sort;
# use tseitin_checker::types::err::TermError;
let mut terms = TermDB::default();
let p = terms.mk_bool("p").unwrap();
let q = terms.mk_bool("q").unwrap();

let p_and_q = terms.mk_and(vec![p, q]).unwrap();
assert_eq!(terms.mk_and(vec![p, q]), Ok(p_and_q));
assert_eq!(terms.depth(p_and_q), Some(2));

let not_p = terms.negate(p).unwrap();
assert_eq!(terms.is_not(not_p), Some(p));
assert_eq!(terms.negate(not_p), Ok(p));

let x = terms.mk_atom("x", Sort::Uninterpreted("U".to_string())).unwrap();
assert_eq!(terms.mk_not(x), Err(TermError::NotBoolean));
```

Each database has a distinct identifier, which is recorded in every key the database issues.
Lookups on keys issued by some other database return `None`, or an empty slice in the case of [args](TermDB::args), and constructors given such a key return [UnknownTerm](err::TermError::UnknownTerm).

```rust
# use tseitin_checker::db::term::TermDB;
let mut terms = TermDB::default();
let mut other_terms = TermDB::default();
let p = terms.mk_bool("p").unwrap();
let x = other_terms.mk_bool("x").unwrap();

assert!(terms.owns(p));
assert!(!terms.owns(x));
assert!(terms.get(x).is_none());
```
*/

mod display;
pub use display::{ClauseDisplay, TermDisplay};

use std::{
    collections::HashMap,
    sync::atomic::{AtomicU64, Ordering},
};

use slotmap::SlotMap;

use crate::{
    config::DisplayDepth,
    misc::log::targets::{self},
    structures::{
        sort::Sort,
        term::{Connective, DbId, Depth, Term, TermData, TermKey, TermSlot},
    },
    types::err::{self},
};

/// The identifier of the next database made.
static NEXT_DB_ID: AtomicU64 = AtomicU64::new(0);

/// The term database.
pub struct TermDB {
    /// The identifier of the database, recorded in each key issued.
    id: DbId,

    /// Every term, indexed by slot.
    terms: SlotMap<TermSlot, Term>,

    /// The key of each stored term, indexed by the shape of the term.
    index: HashMap<TermData, TermKey>,
}

impl Default for TermDB {
    fn default() -> Self {
        TermDB {
            id: NEXT_DB_ID.fetch_add(1, Ordering::Relaxed),
            terms: SlotMap::default(),
            index: HashMap::default(),
        }
    }
}

impl TermDB {
    /// The identifier of the database.
    pub fn id(&self) -> DbId {
        self.id
    }

    /// Whether `key` was issued by the database and points to a stored term.
    pub fn owns(&self, key: TermKey) -> bool {
        self.get(key).is_some()
    }

    /// A count of terms in the database.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, key: TermKey) -> Option<&Term> {
        match key.db() == self.id {
            true => self.terms.get(key.slot()),
            false => None,
        }
    }

    pub fn data(&self, key: TermKey) -> Option<&TermData> {
        self.get(key).map(|term| &term.data)
    }

    pub fn connective(&self, key: TermKey) -> Option<Connective> {
        self.get(key).map(|term| term.connective())
    }

    /// The arguments of the term, in order.
    pub fn args(&self, key: TermKey) -> &[TermKey] {
        match self.get(key) {
            Some(term) => term.data.args(),
            None => &[],
        }
    }

    /// The cached depth of the term.
    pub fn depth(&self, key: TermKey) -> Option<Depth> {
        self.get(key).map(|term| term.depth)
    }

    pub fn sort(&self, key: TermKey) -> Option<&Sort> {
        self.get(key).map(|term| &term.sort)
    }

    pub fn is_bool(&self, key: TermKey) -> bool {
        self.get(key).is_some_and(|term| term.is_bool())
    }

    /// The argument of the term, if the term is a negation.
    pub fn is_not(&self, key: TermKey) -> Option<TermKey> {
        match self.data(key) {
            Some(TermData::Not(a)) => Some(*a),
            _ => None,
        }
    }

    /// The term, displayed to depth `depth`.
    pub fn display(&self, key: TermKey, depth: DisplayDepth) -> TermDisplay<'_> {
        TermDisplay::new(self, key, depth)
    }

    /// The clause, with each literal displayed to depth `depth`.
    pub fn display_clause<'a>(&'a self, clause: &'a [TermKey], depth: DisplayDepth) -> ClauseDisplay<'a> {
        ClauseDisplay::new(self, clause, depth)
    }
}

/// Methods to build terms.
impl TermDB {
    /// The atom named `name` of sort `sort`.
    ///
    /// An atom may be declared any number of times, so long as each declaration is of the same sort.
    pub fn mk_atom(&mut self, name: &str, sort: Sort) -> Result<TermKey, err::TermError> {
        let data = TermData::Atom(name.to_string());
        if let Some(key) = self.index.get(&data) {
            return match self.get(*key) {
                Some(term) if term.sort == sort => Ok(*key),
                _ => {
                    log::info!(target: targets::TERM_DB, "Redeclaration of {name} as {sort}");
                    Err(err::TermError::Redeclared(name.to_string()))
                }
            };
        }
        Ok(self.intern(data, sort))
    }

    /// The boolean atom named `name`.
    pub fn mk_bool(&mut self, name: &str) -> Result<TermKey, err::TermError> {
        self.mk_atom(name, Sort::Bool)
    }

    pub fn mk_not(&mut self, a: TermKey) -> Result<TermKey, err::TermError> {
        self.check_bool(a)?;
        Ok(self.intern(TermData::Not(a), Sort::Bool))
    }

    pub fn mk_and(&mut self, args: impl IntoIterator<Item = TermKey>) -> Result<TermKey, err::TermError> {
        let args = self.bool_args(args)?;
        Ok(self.intern(TermData::And(args), Sort::Bool))
    }

    pub fn mk_or(&mut self, args: impl IntoIterator<Item = TermKey>) -> Result<TermKey, err::TermError> {
        let args = self.bool_args(args)?;
        Ok(self.intern(TermData::Or(args), Sort::Bool))
    }

    pub fn mk_xor(&mut self, args: impl IntoIterator<Item = TermKey>) -> Result<TermKey, err::TermError> {
        let args = self.bool_args(args)?;
        Ok(self.intern(TermData::Xor(args), Sort::Bool))
    }

    /// The equality of `x` and `y`, which may be of any (common) sort.
    pub fn mk_eq(&mut self, x: TermKey, y: TermKey) -> Result<TermKey, err::TermError> {
        self.check_same_sort(x, y)?;
        Ok(self.intern(TermData::Eq([x, y]), Sort::Bool))
    }

    /// If `c` then `t` else `e`, with the sort of the branches.
    pub fn mk_ite(&mut self, c: TermKey, t: TermKey, e: TermKey) -> Result<TermKey, err::TermError> {
        self.check_bool(c)?;
        let sort = self.check_same_sort(t, e)?;
        Ok(self.intern(TermData::Ite([c, t, e]), sort))
    }

    pub fn mk_implies(&mut self, x: TermKey, y: TermKey) -> Result<TermKey, err::TermError> {
        self.check_bool(x)?;
        self.check_bool(y)?;
        Ok(self.intern(TermData::Implies([x, y]), Sort::Bool))
    }

    /// The complement of `a`, built by stripping a negation from `a` if present, and otherwise by negating `a`.
    pub fn negate(&mut self, a: TermKey) -> Result<TermKey, err::TermError> {
        match self.is_not(a) {
            Some(b) => Ok(b),
            None => self.mk_not(a),
        }
    }
}

impl TermDB {
    /// The key to the term of shape `data`, stored if no such term exists.
    ///
    /// The arguments of `data` are assumed to be keys to the database.
    fn intern(&mut self, data: TermData, sort: Sort) -> TermKey {
        if let Some(key) = self.index.get(&data) {
            return *key;
        }

        let depth = 1 + data
            .args()
            .iter()
            .filter_map(|arg| self.depth(*arg))
            .max()
            .unwrap_or(0);

        let slot = self.terms.insert(Term {
            data: data.clone(),
            sort,
            depth,
        });
        let key = TermKey::new(self.id, slot);
        log::trace!(target: targets::TERM_DB, "Stored {} of depth {depth}", data.connective());
        self.index.insert(data, key);
        key
    }

    fn check_bool(&self, key: TermKey) -> Result<(), err::TermError> {
        match self.get(key) {
            None => Err(err::TermError::UnknownTerm),
            Some(term) if !term.is_bool() => Err(err::TermError::NotBoolean),
            Some(_) => Ok(()),
        }
    }

    fn bool_args(&self, args: impl IntoIterator<Item = TermKey>) -> Result<Vec<TermKey>, err::TermError> {
        let args = args.into_iter().collect::<Vec<_>>();
        if args.is_empty() {
            return Err(err::TermError::EmptyArguments);
        }
        for arg in &args {
            self.check_bool(*arg)?;
        }
        Ok(args)
    }

    /// The (common) sort of `x` and `y`.
    fn check_same_sort(&self, x: TermKey, y: TermKey) -> Result<Sort, err::TermError> {
        let x_sort = self.sort(x).ok_or(err::TermError::UnknownTerm)?;
        let y_sort = self.sort(y).ok_or(err::TermError::UnknownTerm)?;
        if x_sort != y_sort {
            return Err(err::TermError::SortMismatch(x_sort.clone(), y_sort.clone()));
        }
        Ok(x_sort.clone())
    }
}

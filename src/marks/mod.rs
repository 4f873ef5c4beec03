/*!
A one-time store of marks on terms.

During a check each literal of a clause is recorded in a mark store, and the admissibility rules are then read off the marks.
Each term has a [MarkEntry] with two channels:
- The positive channel records the term is present in the clause.
- The negative channel records the complement of the term is present in the clause.

Marks are only made and read through a [MarkScope], opened on a [MarkStore].
A scope borrows the store mutably and clears every mark when dropped, so no mark survives the scope in which it was made, whichever way the scope is left.

```rust
# use tseitin_checker::db::term::TermDB;
# use tseitin_checker::marks::MarkStore;
let mut terms = TermDB::default();
let p = terms.mk_bool("p").unwrap();
let not_p = terms.mk_not(p).unwrap();

let mut store = MarkStore::default();
{
    let mut scope = store.open(&terms);
    scope.mark_complement(not_p);
    assert!(scope.is_marked(not_p));
    assert!(scope.is_complement(p));
    assert!(!scope.is_marked(p));
}
assert!(store.is_empty());
```
*/

mod entry;
pub use entry::MarkEntry;

use slotmap::SparseSecondaryMap;

use crate::{
    db::term::TermDB,
    misc::log::targets::{self},
    structures::term::{TermKey, TermSlot},
};

/// A store of marks, reused across scopes.
#[derive(Default)]
pub struct MarkStore {
    /// The mark of each term marked in the open scope.
    entries: SparseSecondaryMap<TermSlot, MarkEntry>,

    /// Whether some scope is open.
    open: bool,
}

impl MarkStore {
    /// Opens a scope on the store, within which terms of `db` may be marked.
    ///
    /// # Panics
    /// If some scope remains open.
    /// As a scope borrows the store mutably this happens only if a scope was leaked (e.g. through [std::mem::forget]) without being dropped.
    pub fn open<'m>(&'m mut self, db: &'m TermDB) -> MarkScope<'m> {
        if self.open {
            log::error!(target: targets::MARKS, "Mark scope opened while another scope is open");
            panic!("! A mark scope was opened while another scope is open");
        }
        self.open = true;
        log::trace!(target: targets::MARKS, "Opened scope");
        MarkScope { store: self, db }
    }

    /// Whether some scope is open on the store.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the store holds no marks.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An open scope of a [MarkStore].
pub struct MarkScope<'m> {
    store: &'m mut MarkStore,
    db: &'m TermDB,
}

impl MarkScope<'_> {
    /// The entry of `term`, unset if `term` has not been marked.
    ///
    /// A term of some other database is never marked.
    pub fn entry(&self, term: TermKey) -> MarkEntry {
        match self.db.owns(term) {
            true => self.store.entries.get(term.slot()).copied().unwrap_or_default(),
            false => MarkEntry::Unset,
        }
    }

    fn update(&mut self, term: TermKey, f: impl FnOnce(MarkEntry) -> MarkEntry) {
        if !self.db.owns(term) {
            log::trace!(target: targets::MARKS, "Passed over a foreign key");
            return;
        }
        let entry = f(self.entry(term));
        self.store.entries.insert(term.slot(), entry);
    }

    /// Records `term` is present.
    pub fn mark(&mut self, term: TermKey) {
        self.update(term, MarkEntry::with_positive);
    }

    /// Records `term` is present, and so the complement of `term` is attested.
    ///
    /// The complement of `not(a)` is recorded as a negative mark on `a`.
    /// The complement of any other term `b` is `not(b)`, which needs no record as a complement query on `not(b)` reads the positive mark on `b`.
    pub fn mark_complement(&mut self, term: TermKey) {
        self.mark(term);
        if let Some(a) = self.db.is_not(term) {
            self.update(a, MarkEntry::with_negative);
        }
    }

    /// Whether `term` has been marked as present.
    pub fn is_marked(&self, term: TermKey) -> bool {
        self.entry(term).is_positive()
    }

    /// Whether the complement of `term` has been marked as present.
    pub fn is_complement(&self, term: TermKey) -> bool {
        match self.db.is_not(term) {
            Some(a) => self.is_marked(a),
            None => self.entry(term).is_negative(),
        }
    }
}

impl Drop for MarkScope<'_> {
    fn drop(&mut self) {
        log::trace!(target: targets::MARKS, "Closed scope with {} marks", self.store.entries.len());
        self.store.entries.clear();
        self.store.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_terms_are_unmarked() {
        let mut terms = TermDB::default();
        let p = terms.mk_bool("p").unwrap();
        let q = terms.mk_bool("q").unwrap();

        let mut store = MarkStore::default();
        let mut scope = store.open(&terms);
        scope.mark(p);

        assert_eq!(scope.entry(q), MarkEntry::Unset);
        assert!(!scope.is_marked(q));
        assert!(!scope.is_complement(q));
    }

    #[test]
    fn plain_marks_are_sign_blind() {
        let mut terms = TermDB::default();
        let p = terms.mk_bool("p").unwrap();
        let not_p = terms.mk_not(p).unwrap();

        let mut store = MarkStore::default();
        let mut scope = store.open(&terms);
        scope.mark(not_p);

        assert!(scope.is_marked(not_p));
        assert!(!scope.is_complement(p));
        assert!(!scope.is_marked(p));
    }

    #[test]
    fn complement_of_positive_literal() {
        let mut terms = TermDB::default();
        let p = terms.mk_bool("p").unwrap();
        let not_p = terms.mk_not(p).unwrap();

        let mut store = MarkStore::default();
        let mut scope = store.open(&terms);
        scope.mark_complement(p);

        assert!(scope.is_marked(p));
        assert!(scope.is_complement(not_p));
        assert!(!scope.is_complement(p));
        assert_eq!(scope.entry(p), MarkEntry::Positive);
    }

    #[test]
    fn both_channels() {
        let mut terms = TermDB::default();
        let p = terms.mk_bool("p").unwrap();
        let not_p = terms.mk_not(p).unwrap();

        let mut store = MarkStore::default();
        let mut scope = store.open(&terms);
        scope.mark_complement(p);
        scope.mark_complement(not_p);

        assert_eq!(scope.entry(p), MarkEntry::Both);
        assert!(scope.is_complement(p));
        assert!(scope.is_complement(not_p));
    }

    #[test]
    fn marks_do_not_survive_a_scope() {
        let mut terms = TermDB::default();
        let p = terms.mk_bool("p").unwrap();

        let mut store = MarkStore::default();
        {
            let mut scope = store.open(&terms);
            scope.mark_complement(p);
        }
        assert!(!store.is_open());
        assert!(store.is_empty());

        let scope = store.open(&terms);
        assert!(!scope.is_marked(p));
    }

    #[test]
    #[should_panic]
    fn leaked_scope() {
        let terms = TermDB::default();
        let mut store = MarkStore::default();
        std::mem::forget(store.open(&terms));
        let _ = store.open(&terms);
    }

    #[test]
    fn foreign_terms_are_not_marked() {
        let mut terms = TermDB::default();
        let p = terms.mk_bool("p").unwrap();

        let mut other_terms = TermDB::default();
        let x = other_terms.mk_bool("x").unwrap();
        let not_x = other_terms.mk_not(x).unwrap();

        let mut store = MarkStore::default();
        let mut scope = store.open(&terms);
        scope.mark_complement(x);
        scope.mark_complement(not_x);

        assert!(!scope.is_marked(x));
        assert!(!scope.is_marked(p));
        assert_eq!(scope.entry(p), MarkEntry::Unset);
        drop(scope);
        assert!(store.is_empty());
    }
}

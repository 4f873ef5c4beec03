/*!
Selection of the representative literal of a clause.

The representative is a literal of greatest depth, as the literal introduced for a compound subformula is deeper than any literal introduced for its arguments.

Literals are scanned in order.
A literal replaces the current representative if it is strictly deeper, or if it is of the same depth and the current representative is a negation.
So, among literals of greatest depth, a negation gives way to whichever literal of the same depth follows it, while a literal which is not a negation is never displaced by a literal of the same depth.

```rust
# use tseitin_checker::db::term::TermDB;
# use tseitin_checker::checker::representative::representative;
let mut terms = TermDB::default();
let p = terms.mk_bool("p").unwrap();
let q = terms.mk_bool("q").unwrap();
let not_p = terms.mk_not(p).unwrap();
let p_and_q = terms.mk_and(vec![p, q]).unwrap();

assert_eq!(representative(&terms, &[not_p, p_and_q]), Some(p_and_q));
assert_eq!(representative(&terms, &[p_and_q, not_p]), Some(p_and_q));
assert_eq!(representative(&terms, &[]), None);
```
*/

use crate::{
    db::term::TermDB,
    misc::log::targets::{self},
    structures::term::{Depth, TermKey},
};

/// The representative literal of `clause`, if the clause is nonempty.
///
/// Keys which do not belong to `db` are passed over.
pub fn representative(db: &TermDB, clause: &[TermKey]) -> Option<TermKey> {
    let mut best: Option<TermKey> = None;
    let mut best_depth: Depth = 0;

    for literal in clause {
        let Some(depth) = db.depth(*literal) else {
            log::trace!(target: targets::REPRESENTATIVE, "Passed over a foreign key");
            continue;
        };

        if depth > best_depth {
            best = Some(*literal);
            best_depth = depth;
        } else if depth == best_depth && best.is_some_and(|b| db.is_not(b).is_some()) {
            best = Some(*literal);
        }
    }

    best
}

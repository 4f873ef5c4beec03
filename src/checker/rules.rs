/*!
Admissibility rules, read off the marks of a scope.

Each rule corresponds to some shape of the representative literal of a clause, and is a disjunction of patterns of marks.
In the table, 'present' is [is_marked](MarkScope::is_marked) and 'complement' is [is_complement](MarkScope::is_complement).

| Representative         | Admissible patterns                                             |
|------------------------|-----------------------------------------------------------------|
| `(and a1 … an)`        | each `ai` complement                                            |
| `(or a1 … an)`         | some `ai` complement                                            |
| `(= x y)`              | `x` and `y` present, or `x` and `y` complement                  |
| `(= (ite z u v) y)`    | `z` present and `y ≡ v`, or `z` complement and `y ≡ u`          |
| `(ite x y z)`          | `x` present and `z` complement, or `x` and `y` complement, or `y` and `z` complement |
| `(=> x y)`             | `x` present, or `y` complement                                  |
| `(xor a1 … an)`        | even parity                                                     |
| `(not (and b1 … bn))`  | some `bi` present                                               |
| `(not (or b1 … bn))`   | each `bi` present                                               |
| `(not (= x y))`        | `x` present and `y` complement, or `y` present and `x` complement |
| `(not (ite x y z))`    | `x` complement and `y` present, or `x` and `z` present, or `y` and `z` present |
| `(not (=> x y))`       | `x` complement and `y` present                                  |
| `(not (xor b1 … bn))`  | odd parity                                                      |

Parity is the count of present arguments less the count of complemented arguments, where an argument both present and complemented counts only as present.

The rules for a negated conjunction or disjunction are read from plain [marks](MarkScope::mark), all others from [complement marks](MarkScope::mark_complement).
*/

use crate::{
    checker::equiv::equiv, db::term::TermDB, marks::MarkScope, structures::term::TermKey,
};

pub fn and(scope: &MarkScope, args: &[TermKey]) -> bool {
    args.iter().all(|arg| scope.is_complement(*arg))
}

pub fn or(scope: &MarkScope, args: &[TermKey]) -> bool {
    args.iter().any(|arg| scope.is_complement(*arg))
}

pub fn eq_bool(scope: &MarkScope, x: TermKey, y: TermKey) -> bool {
    (scope.is_marked(x) && scope.is_marked(y)) || (scope.is_complement(x) && scope.is_complement(y))
}

/// The rule for `(= (ite z u v) y)`.
pub fn eq_ite(scope: &MarkScope, db: &TermDB, [z, u, v]: [TermKey; 3], y: TermKey) -> bool {
    (scope.is_marked(z) && equiv(db, y, v)) || (scope.is_complement(z) && equiv(db, y, u))
}

pub fn ite(scope: &MarkScope, [x, y, z]: [TermKey; 3]) -> bool {
    (scope.is_marked(x) && scope.is_complement(z))
        || (scope.is_complement(x) && scope.is_complement(y))
        || (scope.is_complement(y) && scope.is_complement(z))
}

pub fn implies(scope: &MarkScope, [x, y]: [TermKey; 2]) -> bool {
    scope.is_marked(x) || scope.is_complement(y)
}

pub fn xor(scope: &MarkScope, args: &[TermKey]) -> bool {
    even_parity(scope, args, 0)
}

pub fn not_and(scope: &MarkScope, args: &[TermKey]) -> bool {
    args.iter().any(|arg| scope.is_marked(*arg))
}

pub fn not_or(scope: &MarkScope, args: &[TermKey]) -> bool {
    args.iter().all(|arg| scope.is_marked(*arg))
}

pub fn not_eq(scope: &MarkScope, [x, y]: [TermKey; 2]) -> bool {
    (scope.is_marked(x) && scope.is_complement(y)) || (scope.is_marked(y) && scope.is_complement(x))
}

pub fn not_ite(scope: &MarkScope, [x, y, z]: [TermKey; 3]) -> bool {
    (scope.is_complement(x) && scope.is_marked(y))
        || (scope.is_marked(x) && scope.is_marked(z))
        || (scope.is_marked(y) && scope.is_marked(z))
}

pub fn not_implies(scope: &MarkScope, [x, y]: [TermKey; 2]) -> bool {
    scope.is_complement(x) && scope.is_marked(y)
}

pub fn not_xor(scope: &MarkScope, args: &[TermKey]) -> bool {
    even_parity(scope, args, 1)
}

fn even_parity(scope: &MarkScope, args: &[TermKey], initial: i64) -> bool {
    let mut parity = initial;
    for arg in args {
        if scope.is_marked(*arg) {
            parity += 1;
        } else if scope.is_complement(*arg) {
            parity -= 1;
        }
    }
    parity % 2 == 0
}

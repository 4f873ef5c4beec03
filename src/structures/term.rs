/*!
Terms, aka. nodes of a directed acyclic graph of connectives over atoms.

Terms are immutable and structurally shared.
Each term is stored once in the [term database](crate::db::term), and is accessed through a [TermKey].
A key is a slot of the database together with the identifier of the database, and is only resolved by the database which issued it.
As a structurally identical term is never stored twice, two keys are equal exactly when the terms they point to are structurally identical.

The shape of a term is given by [TermData], a closed variant over the connectives of interest:

| Connective | Arguments |
|------------|-----------|
| Atom       | A name    |
| Not        | 1         |
| And        | 1 or more |
| Or         | 1 or more |
| Eq         | 2         |
| Ite        | 3         |
| Implies    | 2         |
| Xor        | 1 or more |

Alongside the data, each term caches its [sort](Sort) and depth.
The depth of an atom is 1, and the depth of any other term is one more than the greatest depth of its arguments.
*/

use crate::structures::sort::Sort;

slotmap::new_key_type! {
    /// The slot of a term within the term database which stores the term.
    pub struct TermSlot;
}

/// An identifier of a term database, distinct for each database made.
pub type DbId = u64;

/// A key to access a term stored in the term database.
///
/// A key records the database which issued it, so a key issued by one database is never read as a key to some term of another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermKey {
    db: DbId,
    slot: TermSlot,
}

impl TermKey {
    pub(crate) fn new(db: DbId, slot: TermSlot) -> Self {
        TermKey { db, slot }
    }

    /// The database which issued the key.
    pub fn db(&self) -> DbId {
        self.db
    }

    pub(crate) fn slot(&self) -> TermSlot {
        self.slot
    }
}

/// The depth of a term.
pub type Depth = u32;

/// The shape of a term.
///
/// Arguments of connectives with a fixed arity are stored as arrays, so a pattern such as `TermData::Ite([c, t, e])` binds each argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TermData {
    Atom(String),
    Not(TermKey),
    And(Vec<TermKey>),
    Or(Vec<TermKey>),
    Eq([TermKey; 2]),
    Ite([TermKey; 3]),
    Implies([TermKey; 2]),
    Xor(Vec<TermKey>),
}

/// The connective of a term, without arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    Atom,
    Not,
    And,
    Or,
    Eq,
    Ite,
    Implies,
    Xor,
}

impl TermData {
    pub fn connective(&self) -> Connective {
        match self {
            Self::Atom(_) => Connective::Atom,
            Self::Not(_) => Connective::Not,
            Self::And(_) => Connective::And,
            Self::Or(_) => Connective::Or,
            Self::Eq(_) => Connective::Eq,
            Self::Ite(_) => Connective::Ite,
            Self::Implies(_) => Connective::Implies,
            Self::Xor(_) => Connective::Xor,
        }
    }

    /// The arguments of the term, in order.
    pub fn args(&self) -> &[TermKey] {
        match self {
            Self::Atom(_) => &[],
            Self::Not(a) => std::slice::from_ref(a),
            Self::And(args) | Self::Or(args) | Self::Xor(args) => args,
            Self::Eq(args) | Self::Implies(args) => args,
            Self::Ite(args) => args,
        }
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom => write!(f, "atom"),
            Self::Not => write!(f, "not"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Eq => write!(f, "="),
            Self::Ite => write!(f, "ite"),
            Self::Implies => write!(f, "=>"),
            Self::Xor => write!(f, "xor"),
        }
    }
}

/// A term, as stored in the term database.
#[derive(Clone, Debug)]
pub struct Term {
    /// The shape of the term.
    pub(crate) data: TermData,

    /// The sort of the term.
    pub(crate) sort: Sort,

    /// The (cached) depth of the term.
    pub(crate) depth: Depth,
}

impl Term {
    pub fn data(&self) -> &TermData {
        &self.data
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn connective(&self) -> Connective {
        self.data.connective()
    }

    pub fn is_bool(&self) -> bool {
        self.sort.is_bool()
    }
}

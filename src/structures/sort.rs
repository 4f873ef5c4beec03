//! Sorts (types) of terms.
//!
//! Clause literals are always of [boolean](Sort::Bool) sort, though the arguments of an equality, or the branches of an if-then-else, may be of any sort.

/// A sort.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Boolean sort.
    Bool,

    /// Some uninterpreted sort, identified by name.
    Uninterpreted(String),
}

impl Sort {
    pub fn is_bool(&self) -> bool {
        matches!(self, Sort::Bool)
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sort::Bool => write!(f, "Bool"),
            Sort::Uninterpreted(name) => write!(f, "{name}"),
        }
    }
}

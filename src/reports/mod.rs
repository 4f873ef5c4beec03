/*!
Reports from a check.

A [Report] records whether a clause was verified and, if not, which of the three ways a clause may fail to verify was met:
- The clause has no literals, and so no [representative](crate::checker::representative).
- The representative has a recognised shape, though no admissible pattern of the shape was found in the clause (a 'miss').
- The representative has no recognised shape.

None of these is an error.
*/

/// The admissibility rules, named after the shape of the representative literal to which the rule applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `(and a1 … an)`, with the complement of every `ai` present.
    And,

    /// `(or a1 … an)`, with the complement of some `ai` present.
    Or,

    /// `(= x y)` over booleans, with `x` and `y` present, or both complements present.
    EqBool,

    /// `(= (ite z u v) y)`, with `z` present and `y` equivalent to `v`, or the complement of `z` present and `y` equivalent to `u`.
    EqIte,

    /// `(ite x y z)` over booleans.
    Ite,

    /// `(=> x y)`, with `x` present or the complement of `y` present.
    Implies,

    /// `(xor a1 … an)`, with an even count of present less complemented arguments.
    Xor,

    /// `(not a)`, with some literal equivalent to `a`.
    NotEquiv,

    /// `(not (and b1 … bn))`, with some `bi` present.
    NotAnd,

    /// `(not (or b1 … bn))`, with every `bi` present.
    NotOr,

    /// `(not (= x y))` over booleans.
    NotEq,

    /// `(not (ite x y z))` over booleans.
    NotIte,

    /// `(not (=> x y))`, with the complement of `x` and `y` present.
    NotImplies,

    /// `(not (xor b1 … bn))`, with an odd count of present less complemented arguments.
    NotXor,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::EqBool => write!(f, "eq"),
            Self::EqIte => write!(f, "eq_ite"),
            Self::Ite => write!(f, "ite"),
            Self::Implies => write!(f, "implies"),
            Self::Xor => write!(f, "xor"),
            Self::NotEquiv => write!(f, "not_equiv"),
            Self::NotAnd => write!(f, "not_and"),
            Self::NotOr => write!(f, "not_or"),
            Self::NotEq => write!(f, "not_eq"),
            Self::NotIte => write!(f, "not_ite"),
            Self::NotImplies => write!(f, "not_implies"),
            Self::NotXor => write!(f, "not_xor"),
        }
    }
}

/// High-level reports regarding a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// The clause is an instance of the rule.
    Verified(Rule),

    /// The clause is empty.
    NoRepresentative,

    /// The representative is of a recognised shape, though no admissible pattern was found.
    Miss,

    /// The representative is not of a recognised shape.
    Unrecognized,
}

impl Report {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified(_))
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verified(rule) => write!(f, "Verified ({rule})"),
            Self::NoRepresentative => write!(f, "No representative"),
            Self::Miss => write!(f, "Miss"),
            Self::Unrecognized => write!(f, "Unrecognized"),
        }
    }
}

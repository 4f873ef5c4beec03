/// The mark of a term within a scope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkEntry {
    /// Neither the term nor its complement has been marked.
    #[default]
    Unset,

    /// The term has been marked.
    Positive,

    /// The complement of the term has been marked.
    Negative,

    /// Both the term and its complement have been marked.
    Both,
}

impl MarkEntry {
    pub fn with_positive(self) -> Self {
        match self {
            Self::Unset | Self::Positive => Self::Positive,
            Self::Negative | Self::Both => Self::Both,
        }
    }

    pub fn with_negative(self) -> Self {
        match self {
            Self::Unset | Self::Negative => Self::Negative,
            Self::Positive | Self::Both => Self::Both,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positive | Self::Both)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Self::Negative | Self::Both)
    }
}

/// Counts of checks made, by outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every check made.
    pub checks: usize,

    /// A count of checks which verified a clause.
    pub verified: usize,

    /// A count of checks on an empty clause.
    pub empty: usize,

    /// A count of checks which missed.
    pub misses: usize,

    /// A count of checks with an unrecognised representative.
    pub unrecognized: usize,
}

/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly at the `trace` and `debug` levels.
These are intended to help diagnose why some clause failed to check.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [checking](crate::checker) a justification.
    pub const CHECK: &str = "check";

    /// Logs related to [selection of a representative literal](crate::checker::representative).
    pub const REPRESENTATIVE: &str = "representative";

    /// Logs related to the [mark store](crate::marks).
    pub const MARKS: &str = "marks";

    /// Logs related to the [term database](crate::db::term).
    pub const TERM_DB: &str = "term_db";

    /// Logs related to [configuration](crate::config).
    pub const CONFIG: &str = "config";
}

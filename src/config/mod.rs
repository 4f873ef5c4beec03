/*!
Configuration of a checker.

All configuration for a [checker](crate::checker::Checker) is contained within a [Config].
Nothing here changes which clauses are verified, only what is reported along the way.
*/

mod config_option;
pub use config_option::ConfigOption;

/// The depth to which terms are displayed.
pub type DisplayDepth = u32;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Report clauses whose connective was recognised, but which matched no admissible pattern.
    ///
    /// Reports are made through the log and the [miss callback](crate::checker::callbacks::CallbackOnMiss), if set.
    pub miss_diagnostics: ConfigOption<bool>,

    /// The depth to which terms are rendered in diagnostics, with deeper subterms elided.
    pub display_depth: ConfigOption<DisplayDepth>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            miss_diagnostics: ConfigOption {
                name: "miss_diagnostics",
                min: false,
                max: true,
                value: true,
            },

            display_depth: ConfigOption {
                name: "display_depth",
                min: 1,
                max: 64,
                value: 8,
            },
        }
    }
}

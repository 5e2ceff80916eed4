/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made throughout the library, keyed by target.
Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log] macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder)
    pub const PARSER: &str = "parser";

    /// Logs related to the [rule database](crate::db::rule)
    pub const RULE_DB: &str = "rule_db";

    /// Logs related to [truth-table enumeration](crate::procedures::truth_table)
    pub const TRUTH_TABLE: &str = "truth_table";

    /// Logs related to [forward chaining](crate::procedures::forward)
    pub const FORWARD: &str = "forward";

    /// Logs related to [backward chaining](crate::procedures::backward)
    pub const BACKWARD: &str = "backward";

    /// Logs related to the [DPLL procedure](crate::procedures::dpll)
    pub const DPLL: &str = "dpll";
}

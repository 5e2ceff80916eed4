/*!
Configuration of a context.

All configuration for a context is contained within [Config]; the procedures read the parts
they care about. Defaults are collected in [defaults].
*/

use serde::Serialize;

pub mod defaults;

/// Which convention the truth-table procedure uses to decide entailment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EntailmentMode {
    /// The query must be true in the final generated row (all symbols seeded false), whose
    /// closure under the rules is exactly the consequence of the declared facts.
    ///
    /// This is the legacy convention, kept as the default for fixture compatibility. It is not
    /// standard logical entailment.
    LastRow,

    /// The query must be true in every row which models the knowledge base --- standard
    /// truth-table entailment.
    AllRows,
}

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize)]
pub struct Config {
    /// Truth-table entailment convention.
    pub entailment: EntailmentMode,

    /// Choose DPLL branch literals at random rather than first-in-order.
    pub random_branching: bool,

    /// Seed for the context's source of randomness.
    pub seed: u64,

    /// Surface a cyclic backward-chaining rule graph as an error rather than treating the
    /// cycle as unprovable.
    pub fail_on_cycle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            entailment: defaults::ENTAILMENT,
            random_branching: defaults::RANDOM_BRANCHING,
            seed: defaults::SEED,
            fail_on_cycle: defaults::FAIL_ON_CYCLE,
        }
    }
}

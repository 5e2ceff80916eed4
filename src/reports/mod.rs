/*!
Reports from a query: the decision, and the choice of engine it came from.
*/

use serde::Serialize;

use crate::structures::symbol::Symbol;

/// The decision for a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Decision {
    /// The knowledge base entails the query.
    ///
    /// For the truth-table and chaining engines the payload is the derivation trace, ordered
    /// shortest symbol first; the DPLL engine decides by refutation and carries no trace.
    Yes(Vec<Symbol>),

    /// The knowledge base does not entail the query.
    No,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes(derived) if derived.is_empty() => write!(f, "> YES"),
            Self::Yes(derived) => write!(f, "> YES: {}", derived.join(", ")),
            Self::No => write!(f, "NO"),
        }
    }
}

/// The four inference engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Engine {
    /// Truth-table enumeration.
    TruthTable,

    /// Forward chaining to a fixed point.
    Forward,

    /// Backward, goal-directed chaining.
    Backward,

    /// DPLL satisfiability search, entailment by refutation.
    Dpll,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TruthTable => write!(f, "TT"),
            Self::Forward => write!(f, "FC"),
            Self::Backward => write!(f, "BC"),
            Self::Dpll => write!(f, "DPLL"),
        }
    }
}

/// An engine name which is not one of `TT`, `FC`, `BC`, `DPLL`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownEngine(pub String);

impl std::fmt::Display for UnknownEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid method '{}', choose among: TT, FC, BC, DPLL",
            self.0
        )
    }
}

impl std::str::FromStr for Engine {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TT" => Ok(Self::TruthTable),
            "FC" => Ok(Self::Forward),
            "BC" => Ok(Self::Backward),
            "DPLL" => Ok(Self::Dpll),
            _ => Err(UnknownEngine(s.to_string())),
        }
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn decision_display() {
        let yes = Decision::Yes(vec!["a".to_string(), "ab".to_string()]);
        assert_eq!(yes.to_string(), "> YES: a, ab");
        assert_eq!(Decision::Yes(vec![]).to_string(), "> YES");
        assert_eq!(Decision::No.to_string(), "NO");
    }

    #[test]
    fn engine_names_round_trip() {
        for engine in [Engine::TruthTable, Engine::Forward, Engine::Backward, Engine::Dpll] {
            assert_eq!(engine.to_string().parse::<Engine>(), Ok(engine));
        }
        assert!("A*".parse::<Engine>().is_err());
    }
}

//! The abstract elements of a knowledge base: symbols, operators, rules, and clauses.

pub mod clause;
pub mod operator;
pub mod rule;
pub mod symbol;

use symbol::Symbol;

/// A (partial) assignment of truth values to symbols.
///
/// A symbol missing from the assignment is unvalued; every consumer that needs a total reading
/// defaults missing symbols to false.
pub type Assignment = std::collections::HashMap<Symbol, bool>;

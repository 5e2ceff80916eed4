/*!
(The representation of) a propositional atom.

A symbol is an opaque string identifier, e.g. `p1` or `raining`.
Equality is case-sensitive exact match, and symbols are never structurally inspected --- all
composition happens through rules and clauses.

Placeholder symbols are the one internal exception: each parenthesized group in an assertion is
replaced by a fresh `@`-prefixed symbol (`@0`, `@1`, …) which binds the group's truth value at
its bracket level. Placeholders never appear in user input, as `@` is not produced by the
normalizer, and are filtered from any reported derivation trace.
*/

/// A propositional atom.
pub type Symbol = String;

/// The placeholder symbol for the `index`th parenthesized group of an input.
pub(crate) fn placeholder(index: usize) -> Symbol {
    format!("@{index}")
}

/// Whether a symbol is an internal bracket-group placeholder.
pub fn is_placeholder(symbol: &str) -> bool {
    symbol.starts_with('@')
}

/*!
The fact database.

Declared facts are bare symbols asserted unconditionally true; negative facts are symbols
asserted false (recorded when a negated condition is found on the antecedent side of an
implication). Both sets are fixed once parsing completes --- the chaining and truth-table
procedures work on their own growing copies, so repeated queries never interfere.
*/

use std::collections::BTreeSet;

use crate::structures::symbol::Symbol;

/// The declared facts of a context.
#[derive(Default)]
pub struct FactDb {
    positive: BTreeSet<Symbol>,
    negative: BTreeSet<Symbol>,
}

impl FactDb {
    /// Asserts a symbol true. Empty text is a parsing artifact and is discarded.
    pub fn assert(&mut self, symbol: impl Into<Symbol>) {
        let symbol = symbol.into();
        let trimmed = symbol.trim();
        if !trimmed.is_empty() {
            self.positive.insert(trimmed.to_string());
        }
    }

    /// Asserts a symbol false.
    pub fn assert_negative(&mut self, symbol: impl Into<Symbol>) {
        let symbol = symbol.into();
        let trimmed = symbol.trim();
        if !trimmed.is_empty() {
            self.negative.insert(trimmed.to_string());
        }
    }

    pub fn holds(&self, symbol: &str) -> bool {
        self.positive.contains(symbol)
    }

    pub fn positive(&self) -> &BTreeSet<Symbol> {
        &self.positive
    }

    pub fn negative(&self) -> &BTreeSet<Symbol> {
        &self.negative
    }
}

/// Derivation traces are reported shortest symbol first, ties broken lexicographically.
pub fn length_ordered(facts: impl IntoIterator<Item = Symbol>) -> Vec<Symbol> {
    let mut ordered: Vec<Symbol> = facts.into_iter().collect();
    ordered.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    ordered
}

#[cfg(test)]
mod fact_db_tests {
    use super::*;

    #[test]
    fn empty_text_is_discarded() {
        let mut db = FactDb::default();
        db.assert("");
        db.assert("   ");
        db.assert(" rain ");
        assert_eq!(db.positive().len(), 1);
        assert!(db.holds("rain"));
    }

    #[test]
    fn length_then_lexicographic() {
        let ordered = length_ordered(["beta".to_string(), "a".to_string(), "ab".to_string(), "aa".to_string()]);
        assert_eq!(ordered, vec!["a", "aa", "ab", "beta"]);
    }
}

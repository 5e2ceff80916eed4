/*!
Truth-table enumeration.

# Overview

Every boolean combination of the symbol universe is a row. Rows are generated in descending
binary order --- the first row values every symbol true, the last row every symbol false ---
and within a row the declared facts are forced before rules fire, deepest bracket level first,
so a placeholder is always resolved before the rule consuming it.

Two entailment conventions are supported, chosen by
[Config::entailment](crate::config::Config::entailment):

- [LastRow](crate::config::EntailmentMode::LastRow): the query must be true in the final
  generated row. As that row seeds every symbol false, its closure under facts and rules is
  exactly what the declared facts make true --- the legacy convention, kept as the default.
- [AllRows](crate::config::EntailmentMode::AllRows): the query must be true in every row which
  models the knowledge base. This is standard truth-table entailment.

The derivation trace reported on YES is the closure of the declared facts, with internal
placeholder symbols filtered out.
*/

use std::collections::BTreeSet;

use crate::{
    config::EntailmentMode,
    context::GenericContext,
    db::fact,
    misc::log::targets,
    reports::Decision,
    structures::{
        symbol::{self, Symbol},
        Assignment,
    },
};

impl<R: rand::Rng> GenericContext<R> {
    /// Decides the query by truth-table enumeration.
    pub fn truth_table(&self, query: &str) -> Decision {
        let symbols = self.symbol_universe();
        let count = row_count(symbols.len());
        log::debug!(
            target: targets::TRUTH_TABLE,
            "{} symbols, {count} rows",
            symbols.len()
        );

        let entailed = match self.config.entailment {
            EntailmentMode::LastRow => {
                let mut last = assignment_for(&symbols, 0);
                self.close_row(&mut last);
                last.get(query).copied().unwrap_or(false)
            }
            EntailmentMode::AllRows => (0..count).rev().all(|index| {
                let row = assignment_for(&symbols, index);
                !self.models_knowledge(&row) || row.get(query).copied().unwrap_or(false)
            }),
        };

        match entailed {
            true => {
                let mut closure = assignment_for(&symbols, 0);
                self.close_row(&mut closure);
                let derived = closure
                    .into_iter()
                    .filter(|(s, value)| *value && !symbol::is_placeholder(s))
                    .map(|(s, _)| s);
                Decision::Yes(fact::length_ordered(derived))
            }
            false => Decision::No,
        }
    }

    /// Every atom in any rule condition or conclusion, or either fact set, deduplicated and in
    /// fixed (lexicographic) order.
    fn symbol_universe(&self) -> Vec<Symbol> {
        let mut universe: BTreeSet<Symbol> = BTreeSet::new();
        for rule in self.rule_db.rules() {
            universe.extend(rule.atoms().map(str::to_string));
        }
        universe.extend(self.fact_db.positive().iter().cloned());
        universe.extend(self.fact_db.negative().iter().cloned());
        universe.into_iter().collect()
    }

    /// Forces the declared facts, then fires each rule once, deepest level first.
    fn close_row(&self, row: &mut Assignment) {
        for fact in self.fact_db.positive() {
            row.insert(fact.clone(), true);
        }
        for fact in self.fact_db.negative() {
            row.insert(fact.clone(), false);
        }
        for rule in self.rule_db.by_descending_level() {
            if rule.satisfied_on(row) {
                row.insert(rule.conclusion.clone(), true);
            }
        }
    }

    /// Whether the row models the knowledge base: every declared fact holds and every rule's
    /// implication is respected.
    fn models_knowledge(&self, row: &Assignment) -> bool {
        let value = |s: &str| row.get(s).copied().unwrap_or(false);
        self.fact_db.positive().iter().all(|f| value(f))
            && self.fact_db.negative().iter().all(|f| !value(f))
            && self
                .rule_db
                .rules()
                .all(|rule| !rule.satisfied_on(row) || value(&rule.conclusion))
    }
}

/// The number of rows for a universe of `n` symbols.
///
/// Inputs are small, human-authored rule files; a universe beyond 63 symbols is outside the
/// supported range.
pub fn row_count(n: usize) -> u64 {
    assert!(n < 64, "symbol universe too large to enumerate");
    1_u64 << n
}

/// The `index`th row: bit *j* of `index` is the value of the *j*th symbol, so descending
/// indices run from the all-true row down to the all-false row.
pub fn assignment_for(symbols: &[Symbol], index: u64) -> Assignment {
    symbols
        .iter()
        .enumerate()
        .map(|(position, symbol)| {
            let bit = (index >> (symbols.len() - 1 - position)) & 1;
            (symbol.clone(), bit == 1)
        })
        .collect()
}

/// All rows, first all-true, last all-false.
pub fn all_rows(symbols: &[Symbol]) -> Vec<Assignment> {
    (0..row_count(symbols.len()))
        .rev()
        .map(|index| assignment_for(symbols, index))
        .collect()
}

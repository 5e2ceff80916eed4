/*!
Forward chaining.

# Overview

Repeated full passes over the Horn rules: any conclusion whose condition tuple is already
contained in the fact set is added, and the procedure stops when a pass adds nothing new.
Termination is guaranteed as the fact set is monotonically non-decreasing and bounded by the
finite symbol universe --- the fixed point is reached after at most one pass per symbol.

Horn-form is a hard precondition, enforced by the [forward export](crate::db::horn): a
knowledge base with disjunction, negation, or brackets is rejected before any chaining.
*/

use std::collections::BTreeSet;

use crate::{
    context::GenericContext,
    db::{fact, horn},
    misc::log::targets,
    reports::Decision,
    structures::symbol::Symbol,
    types::err::ErrorKind,
};

impl<R: rand::Rng> GenericContext<R> {
    /// Decides the query by forward chaining to a fixed point.
    pub fn forward_chain(&self, query: &str) -> Result<Decision, ErrorKind> {
        let rules = horn::forward_export(&self.rule_db, &self.fact_db)?;
        let mut facts: BTreeSet<Symbol> = self.fact_db.positive().clone();

        let mut changed = true;
        while changed {
            changed = false;
            for entry in rules.entries() {
                if facts.contains(&entry.conclusion) {
                    continue;
                }
                if entry.condition.iter().all(|c| facts.contains(c)) {
                    log::trace!(target: targets::FORWARD, "derived {}", entry.conclusion);
                    facts.insert(entry.conclusion.clone());
                    changed = true;
                }
            }
        }

        match facts.contains(query) {
            true => Ok(Decision::Yes(fact::length_ordered(facts))),
            false => Ok(Decision::No),
        }
    }
}

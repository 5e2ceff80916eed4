/*!
Backward chaining.

# Overview

Goal-directed proof search: a goal holds immediately if it is a declared fact, fails if no
rule concludes it, and otherwise its condition tuples are tried in insertion order --- a tuple
succeeds when every atom in it proves, left to right, short-circuiting --- with the first
successful tuple proving the goal and ending the scan.

State is threaded explicitly through the search rather than shared: the derived-fact
accumulator collects every goal actually proved, and the active-goal stack guards against
cyclic rule graphs by failing any goal which recurs as its own sub-goal. With
[Config::fail_on_cycle](crate::config::Config::fail_on_cycle) a cyclic rule graph is instead
surfaced as an error, detected up front on the dependency graph of the
[backward export](crate::db::horn).
*/

use std::collections::BTreeSet;

use crate::{
    context::GenericContext,
    db::{
        fact,
        horn::{self, BackwardRules},
    },
    misc::log::targets,
    reports::Decision,
    structures::symbol::Symbol,
    types::err::{ChainError, ErrorKind},
};

impl<R: rand::Rng> GenericContext<R> {
    /// Decides the query by goal-directed backward chaining.
    pub fn backward_chain(&self, query: &str) -> Result<Decision, ErrorKind> {
        let rules = horn::backward_export(&self.rule_db, &self.fact_db)?;
        if self.config.fail_on_cycle && rules.is_cyclic() {
            return Err(ErrorKind::from(ChainError::CyclicRules));
        }

        let mut derived: BTreeSet<Symbol> = BTreeSet::new();
        let mut active: Vec<Symbol> = Vec::new();
        let proved = prove(&rules, self.fact_db.positive(), query, &mut derived, &mut active);

        match proved {
            true => Ok(Decision::Yes(fact::length_ordered(derived))),
            false => Ok(Decision::No),
        }
    }
}

/// Whether `goal` is provable, accumulating proved goals into `derived`.
///
/// `active` is the stack of goals on the current proof branch; a goal already on the stack is
/// a cycle and fails rather than recursing without bound.
fn prove(
    rules: &BackwardRules,
    facts: &BTreeSet<Symbol>,
    goal: &str,
    derived: &mut BTreeSet<Symbol>,
    active: &mut Vec<Symbol>,
) -> bool {
    if facts.contains(goal) {
        derived.insert(goal.to_string());
        return true;
    }
    if active.iter().any(|g| g == goal) {
        log::warn!(target: targets::BACKWARD, "cyclic goal {goal}");
        return false;
    }
    let Some(alternatives) = rules.alternatives(goal) else {
        return false;
    };

    active.push(goal.to_string());
    let mut proved = false;
    for conditions in alternatives {
        if conditions
            .iter()
            .all(|condition| prove(rules, facts, condition, derived, active))
        {
            proved = true;
            break;
        }
    }
    active.pop();

    if proved {
        log::trace!(target: targets::BACKWARD, "proved {goal}");
        derived.insert(goal.to_string());
    }
    proved
}

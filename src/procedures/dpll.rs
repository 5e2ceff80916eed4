/*!
DPLL satisfiability search, and entailment by refutation.

# Overview

The classic procedure: propagate unit clauses to a fixed point, then branch. Propagation
forces the literal of any clause with exactly one unvalued literal and removes the clauses it
satisfies; success is every clause satisfied, failure a clause with all literals falsified.
Otherwise an unvalued symbol is chosen --- first in fixed order by default, or at random when
[Config::random_branching](crate::config::Config::random_branching) is set; any choice is
logically sound --- and the search recurses on the symbol true, then false.

Each branch receives its own copy of the clause and assignment state, so backtracking never
observes a sibling branch's tentative values and there is nothing to restore on return.

Entailment of a query *q* is `NOT(SAT(KB ∪ {~q}))`, via
[assume_negated](crate::db::cnf::ClauseSet::assume_negated).
*/

use std::collections::BTreeSet;

use rand::Rng;

use crate::{
    context::GenericContext,
    db::cnf::ClauseSet,
    misc::log::targets,
    reports::Decision,
    structures::{
        clause::{Clause, ClauseStatus, Disjunction, Literal},
        symbol::Symbol,
        Assignment,
    },
};

impl<R: Rng> GenericContext<R> {
    /// Decides the query by refutation: YES exactly when the clausal translation of the
    /// knowledge base together with the negated query is unsatisfiable.
    pub fn dpll_entails(&mut self, query: &str) -> Decision {
        let mut clause_set = ClauseSet::from_knowledge(&self.rule_db, &self.fact_db);
        clause_set.assume_negated(query);
        log::debug!(target: targets::DPLL, "{} clauses", clause_set.clauses.len());

        match self.dpll(clause_set.clauses, Assignment::default()) {
            true => Decision::No,
            false => Decision::Yes(Vec::new()),
        }
    }

    /// Whether the clauses are satisfiable, extending the given assignment.
    fn dpll(&mut self, mut clauses: Vec<Clause>, mut assignment: Assignment) -> bool {
        // unit propagation to a fixed point
        loop {
            let mut unit: Option<Literal> = None;
            let mut undecided = false;
            for clause in &clauses {
                match clause.status(&assignment) {
                    ClauseStatus::Satisfied => {}
                    ClauseStatus::Falsified => return false,
                    ClauseStatus::Unit(literal) => {
                        undecided = true;
                        unit.get_or_insert(literal);
                    }
                    ClauseStatus::Open => undecided = true,
                }
            }
            if !undecided {
                return true;
            }
            match unit {
                Some(literal) => {
                    log::trace!(target: targets::DPLL, "propagate {literal}");
                    assignment.insert(literal.symbol, literal.polarity);
                    clauses.retain(|clause| clause.status(&assignment) != ClauseStatus::Satisfied);
                }
                None => break,
            }
        }

        // branch on an unvalued symbol, each branch on private copies of the state
        let open: BTreeSet<&Symbol> = clauses
            .iter()
            .flatten()
            .map(|literal| &literal.symbol)
            .filter(|symbol| !assignment.contains_key(*symbol))
            .collect();
        let open: Vec<&Symbol> = open.into_iter().collect();
        if open.is_empty() {
            return false;
        }
        let choice: Symbol = match self.config.random_branching {
            true => open[self.rng.gen_range(0..open.len())].clone(),
            false => open[0].clone(),
        };
        log::trace!(target: targets::DPLL, "branch on {choice}");

        for value in [true, false] {
            let mut branch = assignment.clone();
            branch.insert(choice.clone(), value);
            if self.dpll(clauses.clone(), branch) {
                return true;
            }
        }
        false
    }
}

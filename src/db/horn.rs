/*!
Horn-form exports of the knowledge base, for the chaining procedures.

Forward and backward chaining require strict Horn-form: every condition a conjunction of
positive atoms, no disjunction, no negation, no brackets. Building an export checks the whole
knowledge base first and rejects a generic one with a [HornError] --- a silent mis-read would
let a disjunctive rule chain as though it were conjunctive.

Two shapes are produced from the same rules:

- [ForwardRules]: condition tuple → conclusion, in insertion order. (An earlier revision keyed
  a map on the condition tuple, which silently dropped rules sharing a condition; the ordered
  list keeps every rule.)
- [BackwardRules]: conclusion → the list of condition tuples which prove it, in insertion
  order, together with a goal-dependency graph for cycle analysis.
*/

use std::collections::HashMap;

use petgraph::{algo, graph::DiGraph, graph::NodeIndex};

use crate::{
    db::{FactDb, RuleDb},
    structures::{operator::Operator, symbol::Symbol},
    types::err::HornError,
};

/// A Horn rule: a conjunctive condition tuple and its conclusion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HornRule {
    pub condition: Vec<Symbol>,
    pub conclusion: Symbol,
}

/// The forward-chaining shape of the knowledge base.
#[derive(Debug)]
pub struct ForwardRules {
    entries: Vec<HornRule>,
}

impl ForwardRules {
    /// An iterator over the rules in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &HornRule> {
        self.entries.iter()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// The backward-chaining shape of the knowledge base.
#[derive(Debug)]
pub struct BackwardRules {
    alternatives: HashMap<Symbol, Vec<Vec<Symbol>>>,
}

impl BackwardRules {
    /// The condition tuples which prove a goal, in insertion order --- multiple tuples are
    /// multiple independent ways to prove it.
    pub fn alternatives(&self, goal: &str) -> Option<&[Vec<Symbol>]> {
        self.alternatives.get(goal).map(Vec::as_slice)
    }

    /// Whether the goal-dependency graph contains a cycle.
    ///
    /// An edge runs from each conclusion to each atom of each of its condition tuples; a cycle
    /// means some goal can recur as its own sub-goal.
    pub fn is_cyclic(&self) -> bool {
        let mut graph: DiGraph<(), ()> = DiGraph::new();
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

        for (conclusion, tuples) in &self.alternatives {
            let head = *indices
                .entry(conclusion.as_str())
                .or_insert_with(|| graph.add_node(()));
            for tuple in tuples {
                for atom in tuple {
                    let body = *indices
                        .entry(atom.as_str())
                        .or_insert_with(|| graph.add_node(()));
                    graph.add_edge(head, body, ());
                }
            }
        }

        algo::is_cyclic_directed(&graph)
    }
}

/// Checks the knowledge base is in strict Horn-form.
fn check_horn(rules: &RuleDb, facts: &FactDb) -> Result<(), HornError> {
    let or = Operator::Or.canonical();
    let not = Operator::Not.canonical();

    for rule in rules.rules() {
        if rule.is_bracketed() {
            return Err(HornError::Brackets);
        }
        if rule.is_disjunctive() {
            return Err(HornError::Disjunction);
        }
        for atom in rule.atoms() {
            if atom.contains(or) {
                return Err(HornError::Disjunction);
            }
            if atom.contains(not) {
                return Err(HornError::Negation);
            }
        }
    }

    if !facts.negative().is_empty() {
        return Err(HornError::Negation);
    }
    for fact in facts.positive() {
        if fact.contains(or) {
            return Err(HornError::Disjunction);
        }
        if fact.contains(not) {
            return Err(HornError::Negation);
        }
    }

    Ok(())
}

/// Builds the forward-chaining export, rejecting a generic knowledge base.
pub fn forward_export(rules: &RuleDb, facts: &FactDb) -> Result<ForwardRules, HornError> {
    check_horn(rules, facts)?;
    let entries = rules
        .rules()
        .map(|rule| HornRule {
            condition: rule.condition.iter().map(|c| c.symbol.clone()).collect(),
            conclusion: rule.conclusion.clone(),
        })
        .collect();
    Ok(ForwardRules { entries })
}

/// Builds the backward-chaining export, rejecting a generic knowledge base.
pub fn backward_export(rules: &RuleDb, facts: &FactDb) -> Result<BackwardRules, HornError> {
    check_horn(rules, facts)?;
    let mut alternatives: HashMap<Symbol, Vec<Vec<Symbol>>> = HashMap::new();
    for rule in rules.rules() {
        let condition = rule.condition.iter().map(|c| c.symbol.clone()).collect();
        alternatives
            .entry(rule.conclusion.clone())
            .or_default()
            .push(condition);
    }
    Ok(BackwardRules { alternatives })
}

#[cfg(test)]
mod horn_tests {
    use super::*;
    use crate::structures::rule::{Condition, Rule};

    fn horn_rule(condition: &[&str], conclusion: &str) -> Rule {
        Rule {
            condition: condition.iter().map(|c| Condition::conjunct(*c)).collect(),
            conclusion: conclusion.to_string(),
            level: 0,
        }
    }

    #[test]
    fn cycle_detection() {
        let mut rules = RuleDb::default();
        rules.insert(horn_rule(&["a"], "b"));
        rules.insert(horn_rule(&["b"], "a"));
        let export = backward_export(&rules, &FactDb::default()).unwrap();
        assert!(export.is_cyclic());

        let mut acyclic = RuleDb::default();
        acyclic.insert(horn_rule(&["a"], "b"));
        acyclic.insert(horn_rule(&["b"], "c"));
        let export = backward_export(&acyclic, &FactDb::default()).unwrap();
        assert!(!export.is_cyclic());
    }

    #[test]
    fn disjunctive_rule_rejected() {
        let mut rules = RuleDb::default();
        rules.insert(Rule {
            condition: vec![Condition::disjunct("a"), Condition::disjunct("b")],
            conclusion: "c".to_string(),
            level: 0,
        });
        assert_eq!(
            forward_export(&rules, &FactDb::default()).unwrap_err(),
            HornError::Disjunction
        );
    }

    #[test]
    fn negative_fact_rejected() {
        let mut facts = FactDb::default();
        facts.assert_negative("a");
        assert_eq!(
            backward_export(&RuleDb::default(), &facts).unwrap_err(),
            HornError::Negation
        );
    }
}

/*!
The clausal export of the knowledge base, for the DPLL procedure.

Every part of the knowledge base is translated into disjunctive clauses:

- A conjunctive rule (a₁ ∧ … ∧ aₙ) → c becomes the clause ~a₁ ∨ … ∨ ~aₙ ∨ c.
- A disjunctive rule (a₁ ∨ … ∨ aₙ) → c becomes one clause ~aᵢ ∨ c per element.
- A fact becomes a unit clause; a negative fact a negative unit clause.
- Fact text already in clausal form passes through: `&` separates clauses and `||` separates
  literals, so a declared `a || ~b` is read as the clause it spells.

Conclusion text may itself be compound; `&`-parts become separate clauses and `||`-parts extra
literals of one clause. Biconditionals need no handling here as the parser already emitted
both directions as rules.

Entailment of a query *q* is then refutation: the knowledge base entails *q* exactly when the
clause set extended with ~q is unsatisfiable.
*/

use crate::{
    db::{FactDb, RuleDb},
    misc::log::targets,
    structures::{
        clause::{Clause, Disjunction, Literal},
        operator::Operator,
    },
};

/// A conjunction of disjunctive clauses.
#[derive(Clone, Default)]
pub struct ClauseSet {
    pub clauses: Vec<Clause>,
}

impl ClauseSet {
    /// The clausal translation of the knowledge base.
    pub fn from_knowledge(rules: &RuleDb, facts: &FactDb) -> Self {
        let mut set = ClauseSet::default();

        for rule in rules.rules() {
            let heads = clauses_of_text(&rule.conclusion);
            match rule.is_disjunctive() {
                true => {
                    for condition in &rule.condition {
                        let negated = Literal::new(condition.symbol.clone(), false);
                        for head in &heads {
                            let mut clause = vec![negated.clone()];
                            clause.extend(head.iter().cloned());
                            set.push(clause);
                        }
                    }
                }
                false => {
                    let negated: Clause = rule
                        .condition
                        .iter()
                        .map(|c| Literal::new(c.symbol.clone(), false))
                        .collect();
                    for head in &heads {
                        let mut clause = negated.clone();
                        clause.extend(head.iter().cloned());
                        set.push(clause);
                    }
                }
            }
        }

        for fact in facts.positive() {
            for clause in clauses_of_text(fact) {
                set.push(clause);
            }
        }
        for fact in facts.negative() {
            set.push(vec![Literal::new(fact.clone(), false)]);
        }

        set
    }

    /// Extends the set with the negation of the query, for entailment by refutation.
    pub fn assume_negated(&mut self, query: &str) {
        if let Some(literal) = Literal::from_text(query) {
            self.push(vec![literal.negate()]);
        }
    }

    fn push(&mut self, clause: Clause) {
        if !clause.is_empty() {
            log::trace!(target: targets::DPLL, "clause: {}", clause.as_text());
            self.clauses.push(clause);
        }
    }
}

/// Reads text as clauses: `&` separates clauses, `||` separates literals within one.
fn clauses_of_text(text: &str) -> Vec<Clause> {
    text.split(Operator::And.canonical())
        .map(|part| {
            part.split(Operator::Or.canonical())
                .filter_map(Literal::from_text)
                .collect::<Clause>()
        })
        .filter(|clause: &Clause| !clause.is_empty())
        .collect()
}

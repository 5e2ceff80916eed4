/*!
Rules, aka. leveled condition → conclusion implications.

The parse of an assertion is a flat list of rules rather than a nested expression tree:
parenthesized groups are replaced by [placeholder](crate::structures::symbol) symbols and their
interiors become rules one level deeper. A rule's `level` records the bracket-nesting depth it
was derived at --- level 0 is a top-level rule, and every placeholder consumed at level *n* is
concluded by some rule at level *n + 1*. Evaluating levels deepest-first therefore resolves
every placeholder before it is read.
*/

use crate::structures::{symbol::Symbol, Assignment};

/// One element of a rule's condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    /// The atom to read.
    pub symbol: Symbol,

    /// Whether the element was split from a disjunctive (`||`) condition.
    pub disjunctive: bool,
}

impl Condition {
    /// A conjunctive condition element.
    pub fn conjunct(symbol: impl Into<Symbol>) -> Self {
        Condition {
            symbol: symbol.into(),
            disjunctive: false,
        }
    }

    /// A disjunctive condition element.
    pub fn disjunct(symbol: impl Into<Symbol>) -> Self {
        Condition {
            symbol: symbol.into(),
            disjunctive: true,
        }
    }
}

/// A condition → conclusion implication at some bracket level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// The ordered condition elements.
    pub condition: Vec<Condition>,

    /// The symbol concluded when the condition is satisfied.
    pub conclusion: Symbol,

    /// Bracket-nesting depth the rule was derived at.
    pub level: usize,
}

impl Rule {
    /// Whether any condition element carries the disjunctive flag.
    ///
    /// A disjunctive condition is satisfied by any one element, a conjunctive condition only by
    /// all of them.
    pub fn is_disjunctive(&self) -> bool {
        self.condition.iter().any(|c| c.disjunctive)
    }

    /// Whether the rule was derived from bracketed input, either by level or through a
    /// placeholder atom.
    pub fn is_bracketed(&self) -> bool {
        self.level > 0
            || super::symbol::is_placeholder(&self.conclusion)
            || self
                .condition
                .iter()
                .any(|c| super::symbol::is_placeholder(&c.symbol))
    }

    /// Whether the condition is satisfied on the given assignment, with unvalued symbols read
    /// as false.
    pub fn satisfied_on(&self, assignment: &Assignment) -> bool {
        let value = |c: &Condition| assignment.get(&c.symbol).copied().unwrap_or(false);
        match self.is_disjunctive() {
            true => self.condition.iter().any(value),
            false => self.condition.iter().all(value),
        }
    }

    /// An iterator over every atom mentioned by the rule, condition elements first.
    pub fn atoms(&self) -> impl Iterator<Item = &str> {
        self.condition
            .iter()
            .map(|c| c.symbol.as_str())
            .chain(std::iter::once(self.conclusion.as_str()))
    }
}

/*!
The rule database.

Rules are stored once, at parse time, and never mutated. Storage is a [SlotMap] behind
[RuleKey]s, with two orderings kept alongside:

- insertion order, for the exports which must preserve it, and
- a per-level index, for the truth-table procedure which evaluates deepest levels first so
  placeholder atoms are resolved before the rules consuming them.
*/

use std::collections::BTreeMap;

use slotmap::{DefaultKey, SlotMap};

use crate::{misc::log::targets, structures::rule::Rule};

/// A key to a stored rule.
pub type RuleKey = DefaultKey;

/// The rule store of a context.
#[derive(Default)]
pub struct RuleDb {
    rules: SlotMap<DefaultKey, Rule>,
    insertion: Vec<RuleKey>,
    levels: BTreeMap<usize, Vec<RuleKey>>,
}

impl RuleDb {
    /// Stores a rule, indexing it by level, and returns its key.
    pub fn insert(&mut self, rule: Rule) -> RuleKey {
        log::trace!(target: targets::RULE_DB, "insert: {rule:?}");
        let level = rule.level;
        let key = self.rules.insert(rule);
        self.insertion.push(key);
        self.levels.entry(level).or_default().push(key);
        key
    }

    pub fn get(&self, key: RuleKey) -> Option<&Rule> {
        self.rules.get(key)
    }

    /// An iterator over all rules in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.insertion.iter().filter_map(|key| self.rules.get(*key))
    }

    /// An iterator over all rules, deepest level first, insertion order within a level.
    pub fn by_descending_level(&self) -> impl Iterator<Item = &Rule> {
        self.levels
            .iter()
            .rev()
            .flat_map(|(_, keys)| keys.iter().filter_map(|key| self.rules.get(*key)))
    }

    pub fn count(&self) -> usize {
        self.insertion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion.is_empty()
    }
}

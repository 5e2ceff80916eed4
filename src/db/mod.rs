//! Databases for rules and facts, with engine-specific exports.

pub mod cnf;
pub mod fact;
pub mod horn;
pub mod rule;

pub use fact::FactDb;
pub use rule::{RuleDb, RuleKey};

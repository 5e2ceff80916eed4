//! A library for answering propositional entailment queries against a small TELL/ASK knowledge base.
//!
//! tellask parses a logical-assertion language (conjunction, disjunction, negation, implication,
//! converse implication, biconditional, and parenthesized sub-expressions) into a flat, leveled
//! rule set, and decides whether the knowledge base entails a query symbol using one of four
//! independent strategies:
//!
//! - Truth-table enumeration over the full symbol universe.
//! - Forward chaining to a fixed point (Horn-form input only).
//! - Backward, goal-directed chaining (Horn-form input only).
//! - DPLL satisfiability search over a clausal translation, testing entailment by refutation.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! A context is built from a [configuration](crate::config) and filled either from the TELL/ASK
//! text format ([read_tell_ask](crate::context::GenericContext::read_tell_ask)) or
//! programmatically ([add_assertion](crate::context::GenericContext::add_assertion),
//! [add_fact](crate::context::GenericContext::add_fact)). Internally:
//!
//! - Rules are kept in a [rule database](crate::db::rule) indexed by bracket level.
//! - Declared and derived facts are kept in a [fact database](crate::db::fact).
//! - Engine-specific shapes of the knowledge base are produced on demand: ordered Horn rules for
//!   chaining ([db::horn](crate::db::horn)) and a clause set for DPLL ([db::cnf](crate::db::cnf)).
//!
//! The four procedures are methods on the context, collected in [procedures](crate::procedures),
//! and every query resolves to a [Decision](crate::reports::Decision).
//!
//! # Example
//!
//! ```rust
//! use tellask::config::Config;
//! use tellask::context::Context;
//! use tellask::reports::{Decision, Engine};
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! let input = "\
//! TELL
//! a; a & b => c; a => b;
//! ASK
//! c
//! ";
//!
//! assert!(the_context.read_tell_ask(input.as_bytes()).is_ok());
//!
//! match the_context.infer(Engine::Forward) {
//!     Ok(Decision::Yes(derived)) => assert!(derived.contains(&"c".to_string())),
//!     other => panic!("expected entailment, got {other:?}"),
//! }
//! ```
//!
//! # Logging
//!
//! Calls to the [log] macros are made throughout the library, keyed by the targets of
//! [misc::log::targets](crate::misc::log::targets). No log implementation is provided.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

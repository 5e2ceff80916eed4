/*!
Building a knowledge base, from TELL/ASK text or programmatically.

The TELL/ASK format is a plain-text file with a `TELL` line followed by semicolon-separated
assertions (one logical block per line) and an `ASK` line followed by the query symbol.
Anything before `TELL` is ignored, and a later `ASK` line replaces an earlier query.

# Example

```rust
# use tellask::config::Config;
# use tellask::context::Context;
let mut the_context = Context::from_config(Config::default());

let input = "\
TELL
p ∧ q → r; p; q;
ASK
r
";

assert!(the_context.read_tell_ask(input.as_bytes()).is_ok());
assert_eq!(the_context.query(), Some("r"));
```
*/

use std::io::BufRead;

use crate::{
    context::GenericContext,
    db::RuleKey,
    misc::log::targets,
    structures::rule::Rule,
    types::err::{ErrorKind, ParseError},
};

mod fragment;
pub mod normalize;

enum Section {
    Preamble,
    Tell,
    Ask,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Reads a TELL/ASK file into the context.
    pub fn read_tell_ask(&mut self, reader: impl BufRead) -> Result<(), ErrorKind> {
        let mut section = Section::Preamble;

        for (number, line) in reader.lines().enumerate() {
            let Ok(line) = line else {
                return Err(ErrorKind::from(ParseError::Line(number + 1)));
            };
            match line.trim() {
                "TELL" => section = Section::Tell,
                "ASK" => section = Section::Ask,
                line => match section {
                    Section::Preamble => {}
                    Section::Tell => {
                        for part in line.split(';') {
                            self.add_assertion(part)?;
                        }
                    }
                    Section::Ask => {
                        if !line.is_empty() {
                            self.set_query(line);
                        }
                    }
                },
            }
        }

        log::info!(
            target: targets::PARSER,
            "read {} rules and {} facts",
            self.rule_db.count(),
            self.fact_db.positive().len()
        );
        Ok(())
    }

    /// Parses one assertion into rules and/or facts.
    ///
    /// The text is normalized first, and an empty fragment (e.g. the residue of a trailing
    /// semicolon) is discarded without effect.
    pub fn add_assertion(&mut self, text: &str) -> Result<(), ErrorKind> {
        let normalized = normalize::normalize(text);
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        log::trace!(target: targets::PARSER, "assertion: {trimmed}");

        let mut outcomes = Vec::new();
        fragment::parse_fragment(trimmed, 0, &mut self.placeholder_count, &mut outcomes)?;
        for outcome in outcomes {
            match outcome {
                fragment::Outcome::Rule(rule) => {
                    self.rule_db.insert(rule);
                }
                fragment::Outcome::Fact(symbol) => self.fact_db.assert(symbol),
                fragment::Outcome::NegativeFact(symbol) => self.fact_db.assert_negative(symbol),
            }
        }
        Ok(())
    }

    /// Asserts a bare fact.
    pub fn add_fact(&mut self, symbol: &str) {
        self.fact_db.assert(symbol)
    }

    /// Stores an already-built rule.
    pub fn add_rule(&mut self, rule: Rule) -> RuleKey {
        self.rule_db.insert(rule)
    }
}

#[cfg(test)]
mod builder_tests {
    use crate::{config::Config, context::Context, types::err::{ErrorKind, ParseError}};

    #[test]
    fn trailing_empty_fragments_are_discarded() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_tell_ask("TELL\na=>b;;\nASK\nb\n".as_bytes()).unwrap();
        assert_eq!(ctx.rule_db.count(), 1);
        assert!(ctx.fact_db.positive().is_empty());
    }

    #[test]
    fn preamble_is_ignored_and_last_ask_wins() {
        let mut ctx = Context::from_config(Config::default());
        let input = "noise\nTELL\na;\nASK\na\nASK\nb\n";
        ctx.read_tell_ask(input.as_bytes()).unwrap();
        assert_eq!(ctx.query(), Some("b"));
        assert_eq!(ctx.fact_db.positive().len(), 1);
    }

    #[test]
    fn unbalanced_brackets_surface() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.add_assertion("(a => b"),
            Err(ErrorKind::Parse(ParseError::UnbalancedParentheses))
        );
    }

    #[test]
    fn unicode_assertions_normalize() {
        let mut ctx = Context::from_config(Config::default());
        ctx.add_assertion("p ∧ q → r").unwrap();
        assert_eq!(ctx.rule_db.count(), 1);
        let rule = ctx.rule_db.rules().next().unwrap();
        assert_eq!(rule.conclusion, "r");
        assert_eq!(rule.condition.len(), 2);
    }
}

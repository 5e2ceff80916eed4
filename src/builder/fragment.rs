/*!
Classification of one assertion fragment into rules and facts.

A fragment is the normalized text between semicolons. Parenthesized groups are decomposed
first: each outermost group is replaced by a fresh placeholder symbol and its interior is
parsed one level deeper, recursively, so the parse result is a flat rule list in which every
placeholder read at level *n* is concluded at level *n + 1*. Distinct groups receive distinct
placeholders, so sibling groups can never be conflated.

The parenthesis-free text is then classified by scanning for connectives in priority order:
implication, converse implication, biconditional, else a bare fact. Malformed fragments are
recovered locally --- an empty condition leaves its residue as a bare fact, an empty conclusion
discards the rule --- and only bracket imbalance is a hard error.
*/

use crate::{
    misc::log::targets,
    structures::{
        rule::{Condition, Rule},
        symbol::{self, Symbol},
    },
    types::err::ParseError,
};

/// One outcome of parsing a fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Rule(Rule),
    Fact(Symbol),
    NegativeFact(Symbol),
}

/// Parses a fragment at the given bracket level, appending outcomes in discovery order.
///
/// `placeholders` is the running count of bracket groups seen by the context, used to mint
/// fresh placeholder symbols.
pub(crate) fn parse_fragment(
    text: &str,
    level: usize,
    placeholders: &mut usize,
    out: &mut Vec<Outcome>,
) -> Result<(), ParseError> {
    let flat = decompose_brackets(text, level, placeholders, out)?;
    classify(&flat, level, out);
    Ok(())
}

/// Replaces every parenthesized group with a fresh placeholder, emitting the group's rules one
/// level deeper, and returns the parenthesis-free remainder.
fn decompose_brackets(
    text: &str,
    level: usize,
    placeholders: &mut usize,
    out: &mut Vec<Outcome>,
) -> Result<String, ParseError> {
    let mut text = text.to_string();
    while let Some((start, end)) = outermost_group(&text)? {
        let interior = text[start + 1..end].to_string();
        let name = symbol::placeholder(*placeholders);
        *placeholders += 1;
        parse_group(&interior, level + 1, placeholders, &name, out)?;
        text.replace_range(start..end + 1, &name);
    }
    if text.contains(')') {
        return Err(ParseError::UnbalancedParentheses);
    }
    Ok(text)
}

/// Byte offsets of the first outermost `(` … `)` pair, if any.
fn outermost_group(text: &str) -> Result<Option<(usize, usize)>, ParseError> {
    let Some(start) = text.find('(') else {
        return Ok(None);
    };
    let mut depth = 0_usize;
    for (offset, c) in text[start..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Some((start, start + offset)));
                }
            }
            _ => {}
        }
    }
    Err(ParseError::UnbalancedParentheses)
}

/// Parses a bracket group's interior, binding the placeholder `target` to its value.
///
/// A condition-only interior becomes a single rule concluding the placeholder. An interior
/// with its own implication emits its rules and a bridge from each conclusion to the
/// placeholder, so the placeholder holds once the interior's conclusion has been derived.
fn parse_group(
    interior: &str,
    level: usize,
    placeholders: &mut usize,
    target: &str,
    out: &mut Vec<Outcome>,
) -> Result<(), ParseError> {
    let flat = decompose_brackets(interior, level, placeholders, out)?;
    let has_implication = ["=>", "<=", "<->"].iter().any(|op| flat.contains(op));

    match has_implication {
        true => {
            let before = out.len();
            classify(&flat, level, out);
            let conclusions: Vec<Symbol> = out[before..]
                .iter()
                .filter_map(|outcome| match outcome {
                    Outcome::Rule(rule) => Some(rule.conclusion.clone()),
                    _ => None,
                })
                .collect();
            for conclusion in conclusions {
                out.push(Outcome::Rule(Rule {
                    condition: vec![Condition::conjunct(conclusion)],
                    conclusion: target.to_string(),
                    level,
                }));
            }
        }
        false => match condition_terms(&flat) {
            ConditionRead::Terms(condition) => out.push(Outcome::Rule(Rule {
                condition,
                conclusion: target.to_string(),
                level,
            })),
            ConditionRead::NegativeFact(stripped) => out.push(Outcome::NegativeFact(stripped)),
            ConditionRead::Empty => {
                log::warn!(target: targets::PARSER, "discarded empty bracket group");
            }
        },
    }
    Ok(())
}

/// Classifies parenthesis-free text, connective priority: `=>`, `<=`, `<->`, else bare fact.
fn classify(text: &str, level: usize, out: &mut Vec<Outcome>) {
    if let Some((left, right)) = text.split_once("=>") {
        emit_implication(left, right, level, out);
    } else if let Some((left, right)) = text.split_once("<=") {
        emit_implication(right, left, level, out);
    } else if let Some((left, right)) = text.split_once("<->") {
        // both directions, so biconditional entailment is symmetric
        emit_implication(left, right, level, out);
        emit_implication(right, left, level, out);
    } else {
        let fact = text.trim();
        if !fact.is_empty() {
            out.push(Outcome::Fact(fact.to_string()));
        }
    }
}

fn emit_implication(condition_text: &str, conclusion_text: &str, level: usize, out: &mut Vec<Outcome>) {
    let conclusion = conclusion_text.trim();
    match condition_terms(condition_text) {
        ConditionRead::Terms(condition) => match conclusion.is_empty() {
            true => {
                log::warn!(target: targets::PARSER, "discarded rule with empty conclusion: {condition_text:?}");
            }
            false => out.push(Outcome::Rule(Rule {
                condition,
                conclusion: conclusion.to_string(),
                level,
            })),
        },
        // a negated antecedent records a unit negative fact, the conclusion side is dropped
        ConditionRead::NegativeFact(stripped) => out.push(Outcome::NegativeFact(stripped)),
        ConditionRead::Empty => {
            if !conclusion.is_empty() {
                out.push(Outcome::Fact(conclusion.to_string()));
            }
        }
    }
}

enum ConditionRead {
    Terms(Vec<Condition>),
    NegativeFact(Symbol),
    Empty,
}

/// Reads condition text: `&` splits a conjunctive tuple, `||` a disjunctive one, `~` records a
/// negative fact, else a single atom.
fn condition_terms(text: &str) -> ConditionRead {
    let read = |terms: Vec<Condition>| match terms.is_empty() {
        true => ConditionRead::Empty,
        false => ConditionRead::Terms(terms),
    };

    if text.contains('&') {
        read(
            text.split('&')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(Condition::conjunct)
                .collect(),
        )
    } else if text.contains("||") {
        read(
            text.split("||")
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(Condition::disjunct)
                .collect(),
        )
    } else if text.contains('~') {
        let stripped = text.replace('~', "");
        let stripped = stripped.trim();
        match stripped.is_empty() {
            true => ConditionRead::Empty,
            false => ConditionRead::NegativeFact(stripped.to_string()),
        }
    } else {
        let single = text.trim();
        match single.is_empty() {
            true => ConditionRead::Empty,
            false => ConditionRead::Terms(vec![Condition::conjunct(single)]),
        }
    }
}

#[cfg(test)]
mod fragment_tests {
    use super::*;

    fn parse(text: &str) -> Vec<Outcome> {
        let mut out = Vec::new();
        let mut placeholders = 0;
        parse_fragment(text, 0, &mut placeholders, &mut out).unwrap();
        out
    }

    fn rules(outcomes: &[Outcome]) -> Vec<&Rule> {
        outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Rule(rule) => Some(rule),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn biconditional_yields_both_directions() {
        let outcomes = parse("a<->b");
        let rules = rules(&outcomes);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].condition, vec![Condition::conjunct("a")]);
        assert_eq!(rules[0].conclusion, "b");
        assert_eq!(rules[1].condition, vec![Condition::conjunct("b")]);
        assert_eq!(rules[1].conclusion, "a");
    }

    #[test]
    fn converse_swaps_sides() {
        let outcomes = parse("a <= b & c");
        let rules = rules(&outcomes);
        assert_eq!(rules.len(), 1);
        assert_eq!(
            rules[0].condition,
            vec![Condition::conjunct("b"), Condition::conjunct("c")]
        );
        assert_eq!(rules[0].conclusion, "a");
    }

    #[test]
    fn bracket_group_levels() {
        let outcomes = parse("(a & b) => c");
        let rules = rules(&outcomes);
        assert_eq!(rules.len(), 2);
        // the group concludes its placeholder one level deep
        assert_eq!(rules[0].conclusion, "@0");
        assert_eq!(rules[0].level, 1);
        // the outer rule consumes the placeholder at the top level
        assert_eq!(rules[1].condition, vec![Condition::conjunct("@0")]);
        assert_eq!(rules[1].conclusion, "c");
        assert_eq!(rules[1].level, 0);
    }

    #[test]
    fn nested_groups_deepen() {
        let outcomes = parse("((a & b) => c) => d");
        let rules = rules(&outcomes);
        let levels: Vec<usize> = rules.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![2, 1, 1, 0]);
        // innermost conjunction concludes its own placeholder
        assert_eq!(rules[0].conclusion, "@1");
        // the bridge binds the group placeholder to the interior conclusion
        assert_eq!(rules[2].condition, vec![Condition::conjunct("c")]);
        assert_eq!(rules[2].conclusion, "@0");
        assert_eq!(rules[3].conclusion, "d");
    }

    #[test]
    fn sibling_groups_stay_distinct() {
        let outcomes = parse("(a || b) & (c || d) => e");
        let rules = rules(&outcomes);
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].conclusion, "@0");
        assert_eq!(rules[1].conclusion, "@1");
        assert_eq!(
            rules[2].condition,
            vec![Condition::conjunct("@0"), Condition::conjunct("@1")]
        );
    }

    #[test]
    fn unbalanced_parentheses_error() {
        let mut out = Vec::new();
        let mut placeholders = 0;
        assert_eq!(
            parse_fragment("(a => b", 0, &mut placeholders, &mut out),
            Err(ParseError::UnbalancedParentheses)
        );
        assert_eq!(
            parse_fragment("a) => b", 0, &mut placeholders, &mut out),
            Err(ParseError::UnbalancedParentheses)
        );
    }

    #[test]
    fn negated_antecedent_records_negative_fact() {
        let outcomes = parse("~a => b");
        assert_eq!(outcomes, vec![Outcome::NegativeFact("a".to_string())]);
    }

    #[test]
    fn malformed_residue_degrades_to_fact() {
        assert_eq!(parse("=>b"), vec![Outcome::Fact("b".to_string())]);
        assert_eq!(parse("a=>"), vec![]);
    }
}

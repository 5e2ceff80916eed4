/*!
Normalization of operator glyphs.

Assertion text may spell each connective several ways --- ASCII shorthands, Unicode logic
glyphs, or the canonical form itself. A single left-to-right, non-overlapping scan rewrites
every recognised spelling to the canonical ASCII operator before a fragment is classified.

Two properties the scan maintains:

- Idempotence: canonical operators are matched and copied atomically, so `||` is never
  re-expanded from `|`, and `<->` is never re-split. Normalizing already-normalized text is a
  no-op.
- Atom text is never altered: unrecognised characters pass through unchanged, and the bare
  disjunction glyph `v` is only rewritten at word boundaries (`a v b` becomes `a || b`,
  `seven` stays `seven`).
*/

/// Spellings, most specific first. Canonical operators map to themselves so the scan consumes
/// them whole.
const SPELLINGS: &[(&str, &str)] = &[
    ("<=>", "<->"),
    ("<->", "<->"),
    ("<=", "<="),
    ("<-", "<="),
    ("=>", "=>"),
    ("->", "=>"),
    ("||", "||"),
    ("|", "||"),
    ("∧", "&"),
    ("^", "&"),
    ("&", "&"),
    ("∨", "||"),
    ("¬", "~"),
    ("!", "~"),
    ("~", "~"),
    ("→", "=>"),
    ("←", "<="),
    ("↔", "<->"),
];

/// Rewrites every recognised operator spelling to its canonical ASCII form.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while !rest.is_empty() {
        for (spelling, canonical) in SPELLINGS {
            if let Some(after) = rest.strip_prefix(spelling) {
                out.push_str(canonical);
                rest = after;
                continue 'scan;
            }
        }

        let mut chars = rest.chars();
        let Some(c) = chars.next() else { break };
        let boundary_before = out.chars().last().map_or(true, |last| !is_atom_char(last));
        let boundary_after = chars.clone().next().map_or(true, |next| !is_atom_char(next));
        match c == 'v' && boundary_before && boundary_after {
            true => out.push_str("||"),
            false => out.push(c),
        }
        rest = chars.as_str();
    }

    out
}

fn is_atom_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn ascii_spellings() {
        assert_eq!(normalize("a^b -> c"), "a&b => c");
        assert_eq!(normalize("a|b"), "a||b");
        assert_eq!(normalize("!a <- b"), "~a <= b");
        assert_eq!(normalize("a<=>b"), "a<->b");
    }

    #[test]
    fn unicode_spellings() {
        assert_eq!(normalize("a ∧ b → c"), "a & b => c");
        assert_eq!(normalize("¬a ∨ b"), "~a || b");
        assert_eq!(normalize("a ↔ b"), "a <-> b");
        assert_eq!(normalize("a ← b"), "a <= b");
    }

    #[test]
    fn bare_v_respects_word_boundaries() {
        assert_eq!(normalize("a v b"), "a || b");
        assert_eq!(normalize("seven => eleven"), "seven => eleven");
        assert_eq!(normalize("vat v visit"), "vat || visit");
    }

    #[test]
    fn idempotence() {
        let variants = [
            "a & b => c",
            "a ^ b -> c",
            "¬p ∨ q",
            "x <-> y",
            "x <=> y",
            "l <- r",
            "a v b",
            "a | b",
            "!a",
        ];
        for variant in variants {
            let once = normalize(variant);
            assert_eq!(normalize(&once), once, "fixed point after one pass: {variant}");
        }
    }

    #[test]
    fn unrecognised_glyphs_pass_through() {
        assert_eq!(normalize("p? => q#"), "p? => q#");
    }
}

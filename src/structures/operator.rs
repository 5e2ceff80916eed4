/*!
The connectives of the assertion language.

Surface text may spell a connective with ASCII or Unicode glyphs; the
[normalizer](crate::builder::normalize) maps every recognised spelling to the canonical ASCII
form before any fragment is classified.
*/

/// A canonical connective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
    Not,
    Implies,
    ConverseImplies,
    Biconditional,
}

impl Operator {
    /// The canonical ASCII spelling of the connective.
    pub const fn canonical(self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "||",
            Self::Not => "~",
            Self::Implies => "=>",
            Self::ConverseImplies => "<=",
            Self::Biconditional => "<->",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

//! Error types used in the library.
//!
//! - Parse anomalies are mostly recovered locally (a malformed fragment degrades to a bare fact
//!   or is discarded) and only bracket imbalance surfaces as an error.
//! - Horn errors are external by design: forward and backward chaining require Horn-form input,
//!   and a generic knowledge base must be rejected rather than silently mis-read.
//!
//! Names of the error enums overlap with the areas they concern, and each converts into the
//! top-level [ErrorKind].

/// The union of library errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Parse(ParseError),
    Horn(HornError),
    Query(QueryError),
    Chain(ChainError),
}

/// Noted errors while parsing assertion text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A fragment whose parentheses do not balance.
    UnbalancedParentheses,

    /// An empty string, where some non-empty string was required.
    Empty,

    /// Some unspecific problem at a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// A construct incompatible with Horn-form, found while building a chaining export.
///
/// Forward and backward chaining require every rule condition to be a conjunction of positive
/// atoms, so these are hard rejections rather than recoverable anomalies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HornError {
    /// A disjunction connective in a rule condition or fact.
    Disjunction,

    /// A negation operator in a rule condition or fact.
    Negation,

    /// A rule derived from bracketed input.
    Brackets,
}

impl From<HornError> for ErrorKind {
    fn from(e: HornError) -> Self {
        ErrorKind::Horn(e)
    }
}

/// Noted errors with the query of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// No query was given --- the ASK section is missing or empty.
    Missing,
}

impl From<QueryError> for ErrorKind {
    fn from(e: QueryError) -> Self {
        ErrorKind::Query(e)
    }
}

/// Noted errors during a chaining procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainError {
    /// The goal-dependency graph of the knowledge base is cyclic.
    CyclicRules,
}

impl From<ChainError> for ErrorKind {
    fn from(e: ChainError) -> Self {
        ErrorKind::Chain(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(ParseError::UnbalancedParentheses) => {
                write!(f, "unbalanced parentheses in an assertion")
            }
            Self::Parse(ParseError::Empty) => write!(f, "empty input"),
            Self::Parse(ParseError::Line(line)) => write!(f, "could not read line {line}"),
            Self::Horn(HornError::Disjunction) => write!(
                f,
                "a generic knowledge base is not applicable to chaining: disjunction connective"
            ),
            Self::Horn(HornError::Negation) => write!(
                f,
                "a generic knowledge base is not applicable to chaining: negation operator"
            ),
            Self::Horn(HornError::Brackets) => write!(
                f,
                "a generic knowledge base is not applicable to chaining: brackets"
            ),
            Self::Query(QueryError::Missing) => {
                write!(f, "no query: the ASK section is missing or empty")
            }
            Self::Chain(ChainError::CyclicRules) => {
                write!(f, "the rule graph of the knowledge base is cyclic")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

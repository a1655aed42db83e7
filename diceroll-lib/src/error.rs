use crate::parser;

/// Bound that a term went over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Amount,
    Sides,
    Modifier,
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount => write!(f, "amount of dices"),
            Self::Sides => write!(f, "number of dice sides"),
            Self::Modifier => write!(f, "modifier"),
        }
    }
}

/// Crate Error type
#[derive(Debug)]
pub enum Error {
    Pest(Box<pest::error::Error<parser::Rule>>),
    /// The expression holds no dice group nor modifier
    Empty,
    /// A term exceeded one of the configured limits
    Range {
        limit: Limit,
        value: String,
        max: u64,
    },
    /// Unrecognized text in strict mode
    Malformed {
        offset: usize,
        fragment: String,
    },
    Overflow,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pest(e) => write!(f, "{e}"),
            Self::Empty => write!(f, "no dice or modifier found in expression"),
            Self::Range { limit, value, max } => {
                write!(f, "{limit} `{value}` exceeds max allowed `{max}`")
            }
            Self::Malformed { offset, fragment } => {
                write!(f, "unrecognized `{fragment}` at position {offset}")
            }
            Self::Overflow => write!(f, "total is too large"),
        }
    }
}

impl std::error::Error for Error {}

impl From<pest::error::Error<parser::Rule>> for Error {
    fn from(value: pest::error::Error<parser::Rule>) -> Self {
        Self::Pest(Box::new(value))
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;

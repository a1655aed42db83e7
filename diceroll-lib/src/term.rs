use itertools::Itertools;

/// One unit of a dice expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// `<amount>d<sides>`, sides is never zero
    Dice { amount: u64, sides: u64 },
    /// Standalone `+N` or `-N`
    Modifier(i64),
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Term::Dice { amount, sides } => write!(f, "{amount}d{sides}"),
            Term::Modifier(n) => write!(f, "{n:+}"),
        }
    }
}

/// Text skipped by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Byte offset in the query string
    pub offset: usize,
    pub text: String,
}

/// Terms found in a query, in order of appearance, with the fragments that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    terms: Vec<Term>,
    ignored: Vec<Fragment>,
}

impl Parsed {
    pub(crate) fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// Record skipped text, merging it with the previous fragment when they touch
    pub(crate) fn ignore(&mut self, offset: usize, text: &str) {
        match self.ignored.last_mut() {
            Some(last) if last.offset + last.text.len() == offset => last.text.push_str(text),
            _ => self.ignored.push(Fragment {
                offset,
                text: text.to_owned(),
            }),
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn ignored(&self) -> &[Fragment] {
        &self.ignored
    }

    /// No term was found
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn has_ignored(&self) -> bool {
        !self.ignored.is_empty()
    }
}

impl std::fmt::Display for Parsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.terms.iter().format(""))
    }
}

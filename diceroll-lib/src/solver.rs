use crate::error::Error;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::options::Options;
use crate::parser;
use crate::roll;
use crate::term::Parsed;
use crate::term::Term;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Represent a solver and holds the query string
#[derive(Clone, Debug)]
pub struct Solver {
    query: String,
    options: Options,
}

impl Solver {
    pub fn new(input: &str) -> Result<Self> {
        Ok(Self::with_options(input, Options::default()))
    }

    pub fn with_options(input: &str, options: Options) -> Self {
        Solver {
            query: input.to_owned(),
            options,
        }
    }

    /// Extract the terms of the query, an empty result is not an error here
    pub fn parse(&self) -> Result<Parsed> {
        parser::parse(&self.query, &self.options)
    }

    /// Roll the given terms using the provided source
    pub fn evaluate<S: roll::Source>(terms: &[Term], source: &mut S) -> Result<roll::Result> {
        Evaluator::eval(terms, source)
    }

    /// Solve the roll expression using the default Rng source
    pub fn solve(&self) -> Result<roll::Result> {
        self.solve_with(&mut rand::thread_rng())
    }

    /// Solve the roll expression using the provided Rng source
    pub fn solve_with<S: Rng>(&self, generator: &mut S) -> Result<roll::Result> {
        self.solve_with_source(&mut RandomSource { generator })
    }

    /// Solve the roll expression using the provided source
    pub fn solve_with_source<S: roll::Source>(&self, source: &mut S) -> Result<roll::Result> {
        let parsed = self.parse()?;
        if parsed.is_empty() {
            return Err(Error::Empty);
        }
        tracing::debug!("rolling `{}` as `{}`", self.query, parsed);
        Self::evaluate(parsed.terms(), source)
    }
}

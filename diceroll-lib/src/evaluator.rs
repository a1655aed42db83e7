use crate::dice;
use crate::error::Error;
use crate::error::Result;
use crate::roll;
use crate::term::Term;

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    // compute a whole term sequence, left to right
    pub(crate) fn eval<S: roll::Source>(terms: &[Term], source: &mut S) -> Result<roll::Result> {
        terms
            .iter()
            .try_fold(roll::Result::default(), |mut acc, term| -> Result<_> {
                match *term {
                    Term::Dice { amount, sides } => {
                        let results = Self::roll(amount, sides, source);
                        let sum = results
                            .iter()
                            .try_fold(0i64, |sum, r| {
                                i64::try_from(r.value).ok().and_then(|v| sum.checked_add(v))
                            })
                            .ok_or(Error::Overflow)?;
                        acc.total = acc.total.checked_add(sum).ok_or(Error::Overflow)?;
                        acc.rolls.extend(results);
                    }
                    Term::Modifier(value) => {
                        acc.total = acc.total.checked_add(value).ok_or(Error::Overflow)?;
                        acc.modifier = acc.modifier.checked_add(value).ok_or(Error::Overflow)?;
                    }
                }
                Ok(acc)
            })
    }

    pub(crate) fn roll<S: roll::Source>(
        amount: u64,
        sides: u64,
        source: &mut S,
    ) -> Vec<dice::Result> {
        // a zero sided dice has nothing to show
        if sides == 0 {
            return Vec::new();
        }
        (0..amount)
            .map(|_| dice::Result::new(source.throw(sides), sides))
            .collect()
    }
}

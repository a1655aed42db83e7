use crate::error::Error;
use crate::error::Limit;
use crate::error::Result;
use crate::options::Limits;
use crate::options::Mode;
use crate::options::Options;
use crate::term::Parsed;
use crate::term::Term;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "diceroll.pest"]
pub struct Parser;

impl Parser {
    /// Build a dice term, `None` when the group has zero sides
    fn extract_dice(dice: Pair<Rule>, limits: &Limits) -> Result<Option<Term>> {
        let mut amount = 1;
        let mut sides = 0;
        for inner in dice.into_inner() {
            match inner.as_rule() {
                Rule::amount => {
                    amount = Self::extract_bounded(inner, Limit::Amount, limits.max_amount)?
                }
                Rule::sides => {
                    sides = Self::extract_bounded(inner, Limit::Sides, limits.max_sides)?
                }
                _ => unreachable!("{:?}", inner),
            }
        }
        if sides == 0 {
            return Ok(None);
        }
        Ok(Some(Term::Dice { amount, sides }))
    }

    fn extract_bounded(pair: Pair<Rule>, limit: Limit, max: u64) -> Result<u64> {
        let value = pair.as_str();
        match value.parse::<u64>() {
            Ok(n) if n <= max => Ok(n),
            _ => Err(Error::Range {
                limit,
                value: value.to_owned(),
                max,
            }),
        }
    }

    fn extract_modifier(modifier: Pair<Rule>) -> Result<i64> {
        let value = modifier.as_str();
        value.parse::<i64>().map_err(|_| Error::Range {
            limit: Limit::Modifier,
            value: value.to_owned(),
            max: i64::MAX as u64,
        })
    }
}

/// Extract every recognizable term from `input`
pub(crate) fn parse(input: &str, options: &Options) -> Result<Parsed> {
    let mut parsed = Parsed::default();
    for pair in Parser::parse(Rule::command, input)? {
        match pair.as_rule() {
            Rule::dice => {
                let span = pair.as_span();
                match Parser::extract_dice(pair, &options.limits)? {
                    Some(term) => parsed.push(term),
                    None => parsed.ignore(span.start(), span.as_str()),
                }
            }
            Rule::modifier => parsed.push(Term::Modifier(Parser::extract_modifier(pair)?)),
            Rule::junk => parsed.ignore(pair.as_span().start(), pair.as_str()),
            Rule::EOI => (),
            _ => unreachable!("{:?}", pair),
        }
    }
    if parsed.has_ignored() {
        if options.mode == Mode::Strict {
            let fragment = &parsed.ignored()[0];
            return Err(Error::Malformed {
                offset: fragment.offset,
                fragment: fragment.text.clone(),
            });
        }
        tracing::debug!("ignored {} fragment(s) in `{}`", parsed.ignored().len(), input);
    }
    Ok(parsed)
}

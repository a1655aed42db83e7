use crate::dice;

/// Keep a roll expression result
///
/// `total` is always the sum of every die value plus `modifier`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Result {
    pub(crate) total: i64,
    pub(crate) rolls: Vec<dice::Result>,
    pub(crate) modifier: i64,
}

impl Result {
    pub fn get_total(&self) -> i64 {
        self.total
    }

    /// Every die rolled, in draw order
    pub fn get_rolls(&self) -> &[dice::Result] {
        &self.rolls
    }

    /// Die values, in draw order
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.rolls.iter().map(|r| r.value)
    }

    /// Net flat modifier
    pub fn get_modifier(&self) -> i64 {
        self.modifier
    }
}

/// Interface for rolling dices
pub trait Source {
    /// Return a value in `1..=sides`
    fn throw(&mut self, sides: u64) -> u64;
}

/// How the parser treats text it does not recognize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Skip unrecognized text and keep whatever terms were found
    #[default]
    Lenient,
    /// Fail on the first unrecognized fragment
    Strict,
}

/// Upper bounds applied to each dice group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_amount: u64,
    pub max_sides: u64,
}

impl Limits {
    pub const MAX_DICE_AMOUNT: u64 = 100;
    pub const MAX_DICE_SIDES: u64 = 10_000;
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_amount: Self::MAX_DICE_AMOUNT,
            max_sides: Self::MAX_DICE_SIDES,
        }
    }
}

/// Parsing options carried by a solver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub limits: Limits,
}

impl Options {
    pub fn strict() -> Self {
        Options {
            mode: Mode::Strict,
            ..Default::default()
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

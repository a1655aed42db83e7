/// Mark if a dice result is a critic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Critic {
    Max,
    Min,
    Not,
}

/// Keep one dice result with critic marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Result {
    pub value: u64,
    pub critic: Critic,
}

impl Result {
    pub fn new(value: u64, sides: u64) -> Self {
        Result {
            value,
            critic: match value {
                v if v == sides => Critic::Max,
                1 => Critic::Min,
                _ => Critic::Not,
            },
        }
    }
}

use super::turn::Turn;
use crate::Probability;

/// Probability that each player's own choices lead to a node.
///
/// Chance contributes nothing because chance outcomes are sampled
/// rather than weighted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reach {
    p1: Probability,
    p2: Probability,
}

impl Default for Reach {
    fn default() -> Self {
        Self { p1: 1., p2: 1. }
    }
}

impl Reach {
    /// reach contributed by `turn`'s own actions
    pub fn own(&self, turn: Turn) -> Probability {
        match turn {
            Turn::P1 => self.p1,
            Turn::P2 => self.p2,
            Turn::Chance => 1.,
        }
    }
    /// reach contributed by everyone except `turn`
    pub fn counterfactual(&self, turn: Turn) -> Probability {
        match turn {
            Turn::P1 => self.p2,
            Turn::P2 => self.p1,
            Turn::Chance => self.p1 * self.p2,
        }
    }
    /// reach after `turn` plays an action with probability `p`
    pub fn after(self, turn: Turn, p: Probability) -> Self {
        match turn {
            Turn::P1 => Self { p1: self.p1 * p, ..self },
            Turn::P2 => Self { p2: self.p2 * p, ..self },
            Turn::Chance => self,
        }
    }
}

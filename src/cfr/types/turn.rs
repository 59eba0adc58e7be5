use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// Who acts at a node.
///
/// Chance has identity 0 and the two players are +1 and -1, so a payoff
/// for player one is turned into a payoff for either player by its sign.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Turn {
    Chance,
    P1,
    P2,
}

impl Turn {
    pub fn players() -> [Self; 2] {
        [Self::P1, Self::P2]
    }
    pub fn is_chance(&self) -> bool {
        *self == Self::Chance
    }
    /// zero-sum attribution of a player-one payoff
    pub fn sign(&self) -> Utility {
        Utility::from(i8::from(*self))
    }
    pub fn opponent(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
            Self::Chance => panic!("chance has no opponent"),
        }
    }
    /// seat position for per-player arrays
    pub fn seat(&self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
            Self::Chance => panic!("chance has no seat"),
        }
    }
}

/// i8 isomorphism
impl From<Turn> for i8 {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::Chance => 0,
            Turn::P1 => 1,
            Turn::P2 => -1,
        }
    }
}
impl TryFrom<i8> for Turn {
    type Error = anyhow::Error;
    fn try_from(id: i8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Turn::Chance),
            1 => Ok(Turn::P1),
            -1 => Ok(Turn::P2),
            _ => Err(anyhow::anyhow!("no actor with identity {}", id)),
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Chance => write!(f, "chance"),
            Turn::P1 => write!(f, "P1"),
            Turn::P2 => write!(f, "P2"),
        }
    }
}

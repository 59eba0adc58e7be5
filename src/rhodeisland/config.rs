use super::RHODE_ISLAND_RAISE_LIMIT;
use crate::Chips;
use crate::cards::Deck;
use crate::cards::Rank;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RhodeIslandConfig {
    pub ante: Chips,
    /// bet size before the flop
    pub preflop_bet: Chips,
    /// bet size on the flop and the turn
    pub postflop_bet: Chips,
    /// consecutive raises allowed within one round
    pub max_raises: usize,
    /// starting stacks for player one and player two
    pub stacks: [Chips; 2],
    /// lowest rank left in the deck
    pub lowest: Rank,
}

impl Default for RhodeIslandConfig {
    fn default() -> Self {
        Self {
            ante: crate::RHODE_ISLAND_ANTE,
            preflop_bet: crate::RHODE_ISLAND_PREFLOP_BET,
            postflop_bet: crate::RHODE_ISLAND_POSTFLOP_BET,
            max_raises: crate::RHODE_ISLAND_MAX_RAISES,
            stacks: [crate::RHODE_ISLAND_STACK; 2],
            lowest: Rank::MIN,
        }
    }
}

impl RhodeIslandConfig {
    pub fn deck(&self) -> Deck {
        Deck::limited(self.lowest)
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.ante >= 0, "negative ante {}", self.ante);
        anyhow::ensure!(
            self.preflop_bet > 0 && self.postflop_bet > 0,
            "bets must be positive, got {} and {}",
            self.preflop_bet,
            self.postflop_bet
        );
        anyhow::ensure!(
            self.stacks.iter().all(|s| *s >= self.ante),
            "stacks {:?} cannot cover the ante {}",
            self.stacks,
            self.ante
        );
        anyhow::ensure!(
            self.max_raises <= RHODE_ISLAND_RAISE_LIMIT,
            "at most {} raises per round fit an information set, got {}",
            RHODE_ISLAND_RAISE_LIMIT,
            self.max_raises
        );
        Ok(())
    }
}

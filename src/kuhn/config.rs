use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KuhnConfig {
    pub ante: Chips,
    pub bet: Chips,
    /// starting stacks for player one and player two
    pub stacks: [Chips; 2],
}

impl Default for KuhnConfig {
    fn default() -> Self {
        Self {
            ante: crate::KUHN_ANTE,
            bet: crate::KUHN_BET,
            stacks: [crate::KUHN_STACK; 2],
        }
    }
}

impl KuhnConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.ante >= 0, "negative ante {}", self.ante);
        anyhow::ensure!(self.bet > 0, "bet must be positive, got {}", self.bet);
        anyhow::ensure!(
            self.stacks.iter().all(|s| *s >= self.ante),
            "stacks {:?} cannot cover the ante {}",
            self.stacks,
            self.ante
        );
        Ok(())
    }
}

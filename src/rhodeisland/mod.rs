//! Rhode Island hold'em.
//!
//! Each player antes and receives one private card. Three betting rounds
//! follow, separated by two community cards. Bets are fixed per round and
//! the number of consecutive raises is capped. At showdown each player's
//! three cards are ranked by [`Strength`].
pub mod config;
pub use config::*;

pub mod edge;
pub use edge::*;

pub mod game;
pub use game::*;

pub mod strength;
pub use strength::*;

#[cfg(test)]
mod solver;

//! Three-card Kuhn poker.
//!
//! Each player antes, receives one of Jack, Queen or King, and a single
//! round of betting with one bet size follows. Player one's value at
//! equilibrium is -1/18.
pub mod config;
pub use config::*;

pub mod edge;
pub use edge::*;

pub mod game;
pub use game::*;

#[cfg(test)]
mod solver;

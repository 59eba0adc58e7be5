pub mod config;
pub use config::*;

pub mod evaluate;
pub use evaluate::*;

pub mod routine;
pub use routine::*;

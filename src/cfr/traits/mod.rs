pub mod edge;
pub use edge::*;

pub mod game;
pub use game::*;

pub mod info;
pub use info::*;

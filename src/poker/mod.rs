//! Betting bookkeeping shared by the poker variants.
pub mod observe;
pub use observe::*;

pub mod round;
pub use round::*;

pub mod seat;
pub use seat::*;

pub mod table;
pub use table::*;

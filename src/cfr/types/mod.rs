pub mod key;
pub use key::*;

pub mod packer;
pub use packer::*;

pub mod policy;
pub use policy::*;

pub mod reach;
pub use reach::*;

pub mod tag;
pub use tag::*;

pub mod turn;
pub use turn::*;

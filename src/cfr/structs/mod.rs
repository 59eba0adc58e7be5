pub mod accumulator;
pub use accumulator::*;

pub mod lineage;
pub use lineage::*;

pub mod strategy;
pub use strategy::*;

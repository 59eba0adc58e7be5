//! Counterfactual regret minimization over an abstract game tree.
//!
//! A concrete game implements [`TreeGame`] over its own [`TreeEdge`] actions
//! and a fixed-size [`Key`] information set. [`Routine`] walks the tree with
//! chance sampling, accumulating regret and strategy mass in shared
//! [`Accumulator`]s, and [`evaluate`] scores a finished [`Strategy`].
pub mod solver;
pub mod structs;
pub mod traits;
pub mod types;

pub use solver::*;
pub use structs::*;
pub use traits::*;
pub use types::*;

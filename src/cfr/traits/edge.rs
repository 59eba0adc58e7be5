use crate::cfr::Tag;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// An action leading from a node to one of its children.
///
/// Concrete actions may carry payload, such as the cards a deal
/// reveals, but the solver only ever keys on the [`Tag`]. Within a
/// single player node no two legal actions may share a tag.
pub trait TreeEdge: Clone + Eq + Hash + Debug + Display + Send + Sync {
    fn tag(&self) -> Tag;
}

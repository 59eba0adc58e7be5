use crate::cfr::Key;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// Lookup key for everything a player cannot tell apart.
pub trait TreeInfo:
    Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + Serialize + DeserializeOwned
{
}

impl<const N: usize> TreeInfo for Key<N> {}

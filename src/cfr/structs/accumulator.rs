use crate::cfr::*;
use crate::Utility;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Mutex;

/// Thread-safe table of per-action values keyed by information set.
///
/// One instance holds cumulative regret, another the current
/// regret-matched strategy, a third the reach-weighted strategy mass.
/// Every method takes the lock for exactly one operation, so workers
/// interleave freely between calls. Entries are created lazily on first
/// write and never removed.
#[derive(Debug)]
pub struct Accumulator<I: TreeInfo> {
    table: Mutex<HashMap<I, BTreeMap<Tag, Utility>>>,
}

impl<I: TreeInfo> Default for Accumulator<I> {
    fn default() -> Self {
        Self {
            table: Mutex::new(HashMap::new()),
        }
    }
}

impl<I: TreeInfo> Accumulator<I> {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<I, BTreeMap<Tag, Utility>>> {
        self.table.lock().expect("accumulator lock poisoned")
    }

    /// stored value, if any
    pub fn get(&self, info: &I, tag: &Tag) -> Option<Utility> {
        self.lock().get(info).and_then(|row| row.get(tag)).copied()
    }

    /// stored value, zero if absent
    pub fn value(&self, info: &I, tag: &Tag) -> Utility {
        self.get(info, tag).unwrap_or(0.)
    }

    /// add `delta`, creating the entry at zero first if needed
    pub fn add(&self, info: &I, tag: Tag, delta: Utility) {
        *self
            .lock()
            .entry(*info)
            .or_default()
            .entry(tag)
            .or_insert(0.) += delta;
    }

    /// replace the whole row for `info`
    pub fn set(&self, info: &I, row: BTreeMap<Tag, Utility>) {
        self.lock().insert(*info, row);
    }

    /// copy of the row for `info`
    pub fn row(&self, info: &I) -> Option<BTreeMap<Tag, Utility>> {
        self.lock().get(info).cloned()
    }

    /// tags recorded for `info`
    pub fn actions(&self, info: &I) -> Vec<Tag> {
        self.lock()
            .get(info)
            .map(|row| row.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, info: &I) -> bool {
        self.lock().contains_key(info)
    }

    /// number of information sets recorded
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// copy of every row
    pub fn snapshot(&self) -> HashMap<I, BTreeMap<Tag, Utility>> {
        self.lock().clone()
    }
}

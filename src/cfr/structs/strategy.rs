use crate::Probability;
use crate::cfr::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Approximate equilibrium: one [`Policy`] per information set.
///
/// Persisted as a JSON object whose keys are the hexadecimal form
/// of each information set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Strategy<I: TreeInfo> {
    policies: BTreeMap<I, Policy>,
}

impl<I: TreeInfo> Strategy<I> {
    pub fn policy(&self, info: &I) -> Option<&Policy> {
        self.policies.get(info)
    }
    /// probability of `tag` at `info`, zero if either is unknown
    pub fn probability(&self, info: &I, tag: &Tag) -> Probability {
        self.policy(info).map(|p| p.weight(tag)).unwrap_or(0.)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&I, &Policy)> {
        self.policies.iter()
    }
    pub fn len(&self) -> usize {
        self.policies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("create strategy file {}", path.display()))?;
        serde_json::to_writer(std::io::BufWriter::new(file), self)
            .with_context(|| format!("write strategy to {}", path.display()))?;
        log::info!("saved {} information sets to {}", self.len(), path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("open strategy file {}", path.display()))?;
        let strategy = serde_json::from_reader::<_, Self>(std::io::BufReader::new(file))
            .with_context(|| format!("parse strategy from {}", path.display()))?;
        log::info!("loaded {} information sets from {}", strategy.len(), path.display());
        Ok(strategy)
    }
}

impl<I: TreeInfo> FromIterator<(I, Policy)> for Strategy<I> {
    fn from_iter<T: IntoIterator<Item = (I, Policy)>>(iter: T) -> Self {
        Self {
            policies: iter.into_iter().collect(),
        }
    }
}

impl<I: TreeInfo> std::fmt::Display for Strategy<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (info, policy) in self.policies.iter() {
            writeln!(f, "{:<24} {}", info.to_string(), policy)?;
        }
        Ok(())
    }
}

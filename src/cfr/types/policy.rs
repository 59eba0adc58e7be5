use super::tag::Tag;
use crate::Probability;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// A distribution over the actions available at one information set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Policy(BTreeMap<Tag, Probability>);

impl Policy {
    pub fn uniform(tags: impl IntoIterator<Item = Tag>) -> Self {
        let tags = tags.into_iter().collect::<Vec<_>>();
        let n = tags.len() as Probability;
        Self(tags.into_iter().map(|t| (t, 1. / n)).collect())
    }

    /// regret matching: positive regrets normalized, uniform when
    /// no action has positive regret
    pub fn matching(regrets: &BTreeMap<Tag, Utility>) -> Self {
        let denom = regrets.values().map(|r| r.max(0.)).sum::<Utility>();
        if denom > 0. {
            Self(
                regrets
                    .iter()
                    .map(|(&tag, &r)| (tag, r.max(0.) / denom))
                    .collect(),
            )
        } else {
            Self::uniform(regrets.keys().copied())
        }
    }

    /// normalized accumulated strategy mass
    pub fn averaged(mass: &BTreeMap<Tag, Probability>) -> Self {
        let denom = mass.values().sum::<Probability>();
        if denom > 0. {
            Self(mass.iter().map(|(&tag, &m)| (tag, m / denom)).collect())
        } else {
            Self::uniform(mass.keys().copied())
        }
    }

    /// probability of `tag`, zero if unsupported
    pub fn weight(&self, tag: &Tag) -> Probability {
        self.0.get(tag).copied().unwrap_or(0.)
    }
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.keys().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &Probability)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn total(&self) -> Probability {
        self.0.values().sum()
    }
}

impl FromIterator<(Tag, Probability)> for Policy {
    fn from_iter<T: IntoIterator<Item = (Tag, Probability)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Policy> for BTreeMap<Tag, Probability> {
    fn from(policy: Policy) -> Self {
        policy.0
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (tag, p) in self.0.iter() {
            write!(f, "{:>3}:{:>6.3} ", tag, p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(data: &[(Tag, Utility)]) -> BTreeMap<Tag, Utility> {
        data.iter().copied().collect()
    }
    fn close(a: Probability, b: Probability) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unitarity() {
        let p = Policy::matching(&build(&[(Tag::Fold, 10.), (Tag::Call, 20.), (Tag::Raise, 30.)]));
        assert!(close(p.total(), 1.));
    }

    #[test]
    fn clamping() {
        let p = Policy::matching(&build(&[(Tag::Fold, -5.), (Tag::Call, 15.)]));
        assert!(close(p.weight(&Tag::Fold), 0.));
        assert!(close(p.weight(&Tag::Call), 1.));
    }

    #[test]
    fn proportionality() {
        let p = Policy::matching(&build(&[(Tag::Check, 25.), (Tag::Bet, 75.)]));
        assert!(close(p.weight(&Tag::Check), 0.25));
        assert!(close(p.weight(&Tag::Bet), 0.75));
    }

    #[test]
    fn fallback_on_zero() {
        let p = Policy::matching(&build(&[(Tag::Check, 0.), (Tag::Bet, 0.)]));
        assert!(close(p.weight(&Tag::Check), 0.5));
        assert!(close(p.weight(&Tag::Bet), 0.5));
    }

    #[test]
    fn fallback_on_negative() {
        let p = Policy::matching(&build(&[(Tag::Fold, -1.), (Tag::Call, -2.), (Tag::Raise, -3.)]));
        assert!(close(p.total(), 1.));
        assert!(p.iter().all(|(_, &w)| close(w, 1. / 3.)));
    }

    #[test]
    fn singularity() {
        let p = Policy::averaged(&build(&[(Tag::Fold, 42.)]));
        assert!(close(p.weight(&Tag::Fold), 1.));
    }

    #[test]
    fn averaged_proportionality() {
        let p = Policy::averaged(&build(&[(Tag::Check, 1.), (Tag::Bet, 3.)]));
        assert!(close(p.weight(&Tag::Check), 0.25));
        assert!(close(p.weight(&Tag::Bet), 0.75));
    }

    #[test]
    fn unsupported() {
        let p = Policy::uniform([Tag::Check, Tag::Bet]);
        assert!(p.weight(&Tag::Raise) == 0.);
        assert!(p.len() == 2);
    }
}

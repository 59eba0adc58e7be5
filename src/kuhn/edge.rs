use crate::cards::Card;
use crate::cfr::Tag;
use crate::cfr::TreeEdge;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum KuhnEdge {
    /// private cards for player one and player two
    Deal(Card, Card),
    Check,
    Bet,
    Call,
    Fold,
}

impl TreeEdge for KuhnEdge {
    fn tag(&self) -> Tag {
        match self {
            KuhnEdge::Deal(..) => Tag::DealPrivate,
            KuhnEdge::Check => Tag::Check,
            KuhnEdge::Bet => Tag::Bet,
            KuhnEdge::Call => Tag::Call,
            KuhnEdge::Fold => Tag::Fold,
        }
    }
}

impl std::fmt::Display for KuhnEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KuhnEdge::Deal(a, b) => write!(f, "deal {} {}", a, b),
            KuhnEdge::Check => write!(f, "check"),
            KuhnEdge::Bet => write!(f, "bet"),
            KuhnEdge::Call => write!(f, "call"),
            KuhnEdge::Fold => write!(f, "fold"),
        }
    }
}

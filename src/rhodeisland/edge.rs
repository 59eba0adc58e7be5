use crate::cards::Card;
use crate::cfr::Tag;
use crate::cfr::TreeEdge;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum RhodeIslandEdge {
    /// private cards for player one and player two
    Deal(Card, Card),
    /// next community card
    Reveal(Card),
    Check,
    Bet,
    Call,
    Fold,
    Raise,
}

impl TreeEdge for RhodeIslandEdge {
    fn tag(&self) -> Tag {
        match self {
            RhodeIslandEdge::Deal(..) => Tag::DealPrivate,
            RhodeIslandEdge::Reveal(..) => Tag::DealPublic,
            RhodeIslandEdge::Check => Tag::Check,
            RhodeIslandEdge::Bet => Tag::Bet,
            RhodeIslandEdge::Call => Tag::Call,
            RhodeIslandEdge::Fold => Tag::Fold,
            RhodeIslandEdge::Raise => Tag::Raise,
        }
    }
}

impl std::fmt::Display for RhodeIslandEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RhodeIslandEdge::Deal(a, b) => write!(f, "deal {} {}", a, b),
            RhodeIslandEdge::Reveal(c) => write!(f, "reveal {}", c),
            RhodeIslandEdge::Check => write!(f, "check"),
            RhodeIslandEdge::Bet => write!(f, "bet"),
            RhodeIslandEdge::Call => write!(f, "call"),
            RhodeIslandEdge::Fold => write!(f, "fold"),
            RhodeIslandEdge::Raise => write!(f, "raise"),
        }
    }
}

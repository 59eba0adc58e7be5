use crate::cards::Card;
use crate::cards::Rank;

/// Showdown value of a private card against two community cards.
///
/// Field order is significance order, so the derived ordering compares
/// hands lexicographically: straight flush, three of a kind, straight,
/// flush, pair, then the private card's rank. A straight is three
/// consecutive ranks without wrapping around the ace.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Strength {
    straight_flush: bool,
    three: bool,
    straight: bool,
    flush: bool,
    pair: bool,
    high: Rank,
}

impl From<(Card, [Card; 2])> for Strength {
    fn from((hole, board): (Card, [Card; 2])) -> Self {
        let cards = [hole, board[0], board[1]];
        let flush = cards.iter().all(|c| c.suit() == hole.suit());
        let three = cards.iter().all(|c| c.rank() == hole.rank());
        let pair = hole.rank() == board[0].rank()
            || hole.rank() == board[1].rank()
            || board[0].rank() == board[1].rank();
        let max = cards.iter().map(|c| u8::from(c.rank())).max().unwrap_or(0);
        let min = cards.iter().map(|c| u8::from(c.rank())).min().unwrap_or(0);
        let straight = !pair && max - min == 2;
        Self {
            straight_flush: straight && flush,
            three,
            straight,
            flush,
            pair,
            high: hole.rank(),
        }
    }
}

use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Suit;
use crate::cfr::Key;
use crate::cfr::Packer;

/// Bits one card occupies inside an information set.
pub const CARD_BITS: usize = RANK_BITS + SUIT_BITS;
const RANK_BITS: usize = 4;
const SUIT_BITS: usize = 3;

/// Packing of cards into information sets. Rank and suit are both
/// stored one above their ordinal so that an all-zero field means
/// no card has been dealt there yet.
pub trait Observe: Sized {
    fn card(self, card: Option<Card>) -> Self;
}

impl<const N: usize> Observe for Packer<N> {
    fn card(self, card: Option<Card>) -> Self {
        match card {
            Some(card) => self
                .push(u8::from(card.rank()) + 1, RANK_BITS)
                .push(u8::from(card.suit()) + 1, SUIT_BITS),
            None => self.push(0, RANK_BITS).push(0, SUIT_BITS),
        }
    }
}

/// card stored at bit `start` of `key`, if one was dealt
pub fn observed<const N: usize>(key: &Key<N>, start: usize) -> Option<Card> {
    match (key.bits(start, RANK_BITS), key.bits(start + RANK_BITS, SUIT_BITS)) {
        (0, 0) => None,
        (r, s) => Some(Card::from((Rank::from(r - 1), Suit::from(s - 1)))),
    }
}

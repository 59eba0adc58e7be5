use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// A set of cards still held by chance, stored as one bit per card.
///
/// Nodes never mutate a deck in place: dealing a card produces a new
/// deck without it. Iteration order is ascending by card index, so
/// enumerating chance outcomes is deterministic.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Deck(u64);

impl Deck {
    /// all 52 cards
    pub fn full() -> Self {
        Self((1 << 52) - 1)
    }

    /// every card whose rank is at least `lowest`
    pub fn limited(lowest: Rank) -> Self {
        Self::full()
            .cards()
            .filter(|c| c.rank() >= lowest)
            .collect()
    }

    /// the three hearts Jack, Queen and King used by Kuhn poker
    pub fn kuhn() -> Self {
        [Rank::Jack, Rank::Queen, Rank::King]
            .into_iter()
            .map(|r| Card::from((r, Suit::Heart)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }

    /// copy of this deck with one card taken out
    pub fn without(&self, card: Card) -> Self {
        assert!(self.contains(&card), "{} is not in the deck", card);
        Self(self.0 & !u64::from(card))
    }

    /// cards in ascending index order
    pub fn cards(self) -> impl Iterator<Item = Card> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                None
            } else {
                let card = Card::from(bits.trailing_zeros() as u8);
                bits &= bits - 1;
                Some(card)
            }
        })
    }

    /// every ordered pair of distinct cards
    pub fn pairs(self) -> impl Iterator<Item = (Card, Card)> {
        self.cards()
            .flat_map(move |a| self.cards().filter(move |b| *b != a).map(move |b| (a, b)))
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0, |a, b| a | b))
    }
}

impl From<Deck> for u64 {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_has_52() {
        assert!(Deck::full().len() == 52);
    }

    #[test]
    fn limited_from_ten_has_20() {
        let deck = Deck::limited(Rank::Ten);
        assert!(deck.len() == 20);
        assert!(deck.cards().all(|c| c.rank() >= Rank::Ten));
    }

    #[test]
    fn kuhn_deck() {
        let deck = Deck::kuhn();
        assert!(deck.len() == 3);
        assert!(deck.contains(&Card::try_from("Jh").unwrap()));
        assert!(deck.contains(&Card::try_from("Qh").unwrap()));
        assert!(deck.contains(&Card::try_from("Kh").unwrap()));
    }

    #[test]
    fn without_leaves_original_untouched() {
        let deck = Deck::kuhn();
        let jack = Card::try_from("Jh").unwrap();
        let rest = deck.without(jack);
        assert!(deck.contains(&jack));
        assert!(!rest.contains(&jack));
        assert!(rest.len() == 2);
    }

    #[test]
    #[should_panic]
    fn without_missing_card() {
        let jack = Card::try_from("Jh").unwrap();
        Deck::kuhn().without(jack).without(jack);
    }

    #[test]
    fn ordered_pairs() {
        let pairs = Deck::kuhn().pairs().collect::<Vec<_>>();
        assert!(pairs.len() == 6);
        assert!(pairs.iter().all(|(a, b)| a != b));
        assert!(Deck::limited(Rank::Ten).pairs().count() == 20 * 19);
    }

    #[test]
    fn cards_ascending() {
        let cards = Deck::full().cards().collect::<Vec<_>>();
        assert!(cards.windows(2).all(|w| u8::from(w[0]) < u8::from(w[1])));
    }
}

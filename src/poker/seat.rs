use crate::Chips;
use crate::cards::Card;

/// What one player holds: chips behind and an optional private card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Seat {
    stack: Chips,
    card: Option<Card>,
}

impl From<Chips> for Seat {
    fn from(stack: Chips) -> Self {
        Self { stack, card: None }
    }
}

impl Seat {
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn card(&self) -> Option<Card> {
        self.card
    }
    /// the private card, which must have been dealt
    pub fn hole(&self) -> Card {
        self.card.expect("private card dealt before showdown")
    }
    /// can put `chips` more into the pot
    pub fn covers(&self, chips: Chips) -> bool {
        self.stack >= chips
    }
    /// move `chips` from the stack into the pot, negative for a refund
    pub fn bet(self, chips: Chips) -> Self {
        Self {
            stack: self.stack - chips,
            ..self
        }
    }
    pub fn deal(self, card: Card) -> Self {
        assert!(self.card.is_none(), "private card dealt twice");
        Self {
            card: Some(card),
            ..self
        }
    }
}

use crate::Chips;
use crate::cards::Card;

/// Public state: the pot and up to two community cards.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Table {
    pot: Chips,
    board: [Option<Card>; 2],
}

impl Table {
    pub fn pot(&self) -> Chips {
        self.pot
    }
    /// community card revealed in the `i`th public deal
    pub fn board(&self, i: usize) -> Option<Card> {
        self.board[i]
    }
    pub fn add(self, chips: Chips) -> Self {
        Self {
            pot: self.pot + chips,
            ..self
        }
    }
    pub fn reveal(self, card: Card) -> Self {
        let mut board = self.board;
        let slot = board
            .iter_mut()
            .find(|slot| slot.is_none())
            .expect("room on the board");
        *slot = Some(card);
        Self { board, ..self }
    }
}

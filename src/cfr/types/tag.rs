use serde::Deserialize;
use serde::Serialize;

/// Discriminant of an action, independent of any payload it carries.
///
/// Every tag fits in [`Tag::BITS`] bits, which is the width each history
/// entry occupies inside an information-set key. The zero code doubles as
/// the end-of-history marker.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tag {
    None = 0,
    DealPublic = 1,
    DealPrivate = 2,
    Fold = 3,
    Check = 4,
    Bet = 5,
    Call = 6,
    Raise = 7,
}

impl Tag {
    pub const BITS: usize = 3;

    /// dealt by chance rather than chosen by a player
    pub fn is_deal(&self) -> bool {
        matches!(self, Tag::DealPublic | Tag::DealPrivate)
    }
    /// puts chips into the pot
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Tag::Bet | Tag::Raise)
    }
}

/// u8 isomorphism over the low three bits
impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}
impl From<u8> for Tag {
    fn from(n: u8) -> Self {
        match n {
            0 => Tag::None,
            1 => Tag::DealPublic,
            2 => Tag::DealPrivate,
            3 => Tag::Fold,
            4 => Tag::Check,
            5 => Tag::Bet,
            6 => Tag::Call,
            7 => Tag::Raise,
            _ => panic!("tag code {} exceeds {} bits", n, Tag::BITS),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Tag::None => "-",
            Tag::DealPublic => "Pub",
            Tag::DealPrivate => "Prv",
            Tag::Fold => "F",
            Tag::Check => "X",
            Tag::Bet => "B",
            Tag::Call => "C",
            Tag::Raise => "R",
        })
    }
}

use super::*;
use crate::Chips;
use crate::Utility;
use crate::cards::Deck;
use crate::cfr::*;
use crate::poker::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Three cards plus up to twenty-five tags. The longest history is two
/// deals and three capped betting rounds.
pub const RHODE_ISLAND_INFO_BYTES: usize = 12;
pub type RhodeIslandInfo = Key<RHODE_ISLAND_INFO_BYTES>;

/// Largest raise cap whose longest history still fits an information set.
/// Three capped rounds take `3 * max_raises + 11` tags.
pub const RHODE_ISLAND_RAISE_LIMIT: usize =
    (RHODE_ISLAND_INFO_BYTES * 8 - 3 * CARD_BITS - 11 * Tag::BITS) / (3 * Tag::BITS);

/// A node of the Rhode Island tree.
#[derive(Debug)]
pub struct RhodeIsland {
    parent: Option<Arc<RhodeIsland>>,
    incoming: Option<RhodeIslandEdge>,
    config: RhodeIslandConfig,
    round: Round,
    table: Table,
    seats: [Seat; 2],
    deck: Deck,
    turn: Turn,
}

impl RhodeIsland {
    /// chance is about to deal the private cards
    pub fn root(config: RhodeIslandConfig) -> Arc<Self> {
        Arc::new(Self {
            parent: None,
            incoming: None,
            config,
            round: Round::Start,
            table: Table::default(),
            seats: config.stacks.map(Seat::from),
            deck: config.deck(),
            turn: Turn::Chance,
        })
    }

    pub fn config(&self) -> &RhodeIslandConfig {
        &self.config
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn seat(&self, turn: Turn) -> &Seat {
        &self.seats[turn.seat()]
    }

    /// fixed bet size of the current round
    pub fn bet_size(&self) -> Chips {
        match self.round {
            Round::Start | Round::PreFlop => self.config.preflop_bet,
            Round::Flop | Round::Turn => self.config.postflop_bet,
            Round::End => unreachable!("no betting once the hand is over"),
        }
    }

    /// raises made back to back leading into this node
    pub fn raises(&self) -> usize {
        self.lineage()
            .map_while(|n| n.incoming_tag())
            .take_while(|t| *t == Tag::Raise)
            .count()
    }

    /// showdown value of `turn`'s cards
    pub fn strength(&self, turn: Turn) -> Strength {
        let board = [
            self.table.board(0).expect("flop dealt before showdown"),
            self.table.board(1).expect("turn dealt before showdown"),
        ];
        Strength::from((self.seat(turn).hole(), board))
    }

    /// readable form of an information set, e.g. `Ah Qc -- | Prv X X Pub B`
    pub fn describe(info: &RhodeIslandInfo) -> String {
        let cards = (0..3)
            .map(|i| observed(info, i * CARD_BITS))
            .map(|c| c.map(|c| c.to_string()).unwrap_or_else(|| "--".to_string()))
            .collect::<Vec<_>>();
        let mut tags = info
            .tags(3 * CARD_BITS)
            .map(|t| t.to_string())
            .collect::<Vec<_>>();
        tags.reverse();
        format!("{} | {}", cards.join(" "), tags.join(" "))
    }

    fn incoming_tag(&self) -> Option<Tag> {
        self.incoming.as_ref().map(TreeEdge::tag)
    }
    /// a check that follows another check closes the betting
    fn closes_with_check(&self) -> bool {
        self.incoming_tag() == Some(Tag::Check)
    }

    fn chance_choices(&self) -> Vec<RhodeIslandEdge> {
        match self.round {
            Round::Start => self
                .deck
                .pairs()
                .map(|(a, b)| RhodeIslandEdge::Deal(a, b))
                .collect(),
            _ => self.deck.cards().map(RhodeIslandEdge::Reveal).collect(),
        }
    }

    fn player_choices(&self) -> Vec<RhodeIslandEdge> {
        let bet = self.bet_size();
        let me = self.seat(self.turn);
        let them = self.seat(self.turn.opponent());
        let can_bet = me.covers(bet) && them.covers(bet);
        let can_raise = me.covers(2 * bet) && them.covers(2 * bet);
        match self.incoming_tag() {
            Some(Tag::DealPrivate) | Some(Tag::DealPublic) | Some(Tag::Check) => {
                let mut choices = vec![RhodeIslandEdge::Check];
                if can_bet {
                    choices.push(RhodeIslandEdge::Bet);
                }
                choices
            }
            Some(Tag::Bet) | Some(Tag::Raise) => {
                let mut choices = vec![RhodeIslandEdge::Call, RhodeIslandEdge::Fold];
                if can_raise && self.raises() < self.config.max_raises {
                    choices.push(RhodeIslandEdge::Raise);
                }
                choices
            }
            other => unreachable!("player to act after {:?}", other),
        }
    }

    fn with(&self, parent: &Arc<Self>, edge: RhodeIslandEdge) -> Self {
        Self {
            parent: Some(parent.clone()),
            incoming: Some(edge),
            config: self.config,
            round: self.round,
            table: self.table,
            seats: self.seats,
            deck: self.deck,
            turn: self.turn,
        }
    }

    /// `turn` moves `chips` into the pot, negative for a refund
    fn bet(self, turn: Turn, chips: Chips) -> Self {
        let mut seats = self.seats;
        seats[turn.seat()] = seats[turn.seat()].bet(chips);
        Self {
            seats,
            table: self.table.add(chips),
            ..self
        }
    }

    /// betting closed: the hand ends on the turn, otherwise chance deals
    fn close(self) -> Self {
        if self.round == Round::Turn {
            Self {
                round: Round::End,
                ..self
            }
        } else {
            Self {
                turn: Turn::Chance,
                ..self
            }
        }
    }
}

impl TreeGame for RhodeIsland {
    type E = RhodeIslandEdge;
    type I = RhodeIslandInfo;

    fn turn(&self) -> Turn {
        self.turn
    }

    fn choices(&self) -> Vec<Self::E> {
        match (self.round, self.turn) {
            (Round::End, _) => vec![],
            (_, Turn::Chance) => self.chance_choices(),
            (_, _) => self.player_choices(),
        }
    }

    fn is_terminal(&self) -> bool {
        self.round == Round::End
    }

    fn info(&self) -> Self::I {
        assert!(!self.turn.is_chance(), "chance has no information set");
        Key::from(
            Packer::default()
                .card(self.seat(self.turn).card())
                .card(self.table.board(0))
                .card(self.table.board(1))
                .tags(self.lineage().filter_map(|n| n.incoming_tag())),
        )
    }

    fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    fn incoming(&self) -> Option<&Self::E> {
        self.incoming.as_ref()
    }

    fn transition(self: &Arc<Self>, edge: &Self::E) -> Self {
        let mover = self.turn;
        let next = self.with(self, *edge);
        let bet = self.bet_size();
        match *edge {
            RhodeIslandEdge::Deal(a, b) => {
                let ante = self.config.ante;
                let mut seats = next.seats;
                seats[Turn::P1.seat()] = seats[Turn::P1.seat()].deal(a);
                seats[Turn::P2.seat()] = seats[Turn::P2.seat()].deal(b);
                Self {
                    seats,
                    deck: next.deck.without(a).without(b),
                    round: Round::PreFlop,
                    turn: Turn::P1,
                    ..next
                }
                .bet(Turn::P1, ante)
                .bet(Turn::P2, ante)
            }
            RhodeIslandEdge::Reveal(card) => Self {
                table: next.table.reveal(card),
                deck: next.deck.without(card),
                round: next.round.next(),
                turn: Turn::P1,
                ..next
            },
            RhodeIslandEdge::Check if self.closes_with_check() => Self {
                turn: mover.opponent(),
                ..next
            }
            .close(),
            RhodeIslandEdge::Check => Self {
                turn: mover.opponent(),
                ..next
            },
            RhodeIslandEdge::Bet => Self {
                turn: mover.opponent(),
                ..next
            }
            .bet(mover, bet),
            RhodeIslandEdge::Raise => Self {
                turn: mover.opponent(),
                ..next
            }
            .bet(mover, 2 * bet),
            RhodeIslandEdge::Call => Self {
                turn: mover.opponent(),
                ..next
            }
            .bet(mover, bet)
            .close(),
            RhodeIslandEdge::Fold => Self {
                turn: mover.opponent(),
                round: Round::End,
                ..next
            }
            .bet(mover.opponent(), -bet),
        }
    }

    fn settlement(&self) -> Utility {
        let half = Utility::from(self.table.pot()) / 2.;
        if self.incoming_tag() == Some(Tag::Fold) {
            return self.turn.sign() * half;
        }
        match self.strength(Turn::P1).cmp(&self.strength(Turn::P2)) {
            Ordering::Greater => half,
            Ordering::Less => -half,
            Ordering::Equal => 0.,
        }
    }
}

use super::*;
use crate::Utility;
use crate::cards::Deck;
use crate::cfr::*;
use crate::poker::*;
use std::sync::Arc;

/// Private card plus at most four tags: deal, check, bet, call.
pub const KUHN_INFO_BYTES: usize = 3;
pub type KuhnInfo = Key<KUHN_INFO_BYTES>;

/// A node of the Kuhn poker tree.
#[derive(Debug)]
pub struct Kuhn {
    parent: Option<Arc<Kuhn>>,
    incoming: Option<KuhnEdge>,
    config: KuhnConfig,
    round: Round,
    table: Table,
    seats: [Seat; 2],
    deck: Deck,
    turn: Turn,
}

impl Kuhn {
    /// chance is about to deal from the three-card deck
    pub fn root(config: KuhnConfig) -> Arc<Self> {
        Arc::new(Self {
            parent: None,
            incoming: None,
            config,
            round: Round::Start,
            table: Table::default(),
            seats: config.stacks.map(Seat::from),
            deck: Deck::kuhn(),
            turn: Turn::Chance,
        })
    }

    pub fn config(&self) -> &KuhnConfig {
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

    /// readable form of a Kuhn information set, e.g. `Qh | Prv X B`
    pub fn describe(info: &KuhnInfo) -> String {
        let card = observed(info, 0)
            .map(|c| c.to_string())
            .unwrap_or_else(|| "??".to_string());
        let mut tags = info.tags(CARD_BITS).map(|t| t.to_string()).collect::<Vec<_>>();
        tags.reverse();
        format!("{} | {}", card, tags.join(" "))
    }

    fn incoming_tag(&self) -> Option<Tag> {
        self.incoming.as_ref().map(TreeEdge::tag)
    }
    /// a check that follows another check closes the betting
    fn closes_with_check(&self) -> bool {
        self.incoming_tag() == Some(Tag::Check)
    }

    fn chance_choices(&self) -> Vec<KuhnEdge> {
        self.deck
            .pairs()
            .map(|(a, b)| KuhnEdge::Deal(a, b))
            .collect()
    }

    fn player_choices(&self) -> Vec<KuhnEdge> {
        let bet = self.config.bet;
        let affordable = self.seat(self.turn).covers(bet) && self.seat(self.turn.opponent()).covers(bet);
        match self.incoming_tag() {
            Some(Tag::DealPrivate) | Some(Tag::Check) if affordable => {
                vec![KuhnEdge::Check, KuhnEdge::Bet]
            }
            Some(Tag::DealPrivate) | Some(Tag::Check) => vec![KuhnEdge::Check],
            Some(Tag::Bet) => vec![KuhnEdge::Call, KuhnEdge::Fold],
            other => unreachable!("player to act after {:?}", other),
        }
    }

    fn with(&self, parent: &Arc<Self>, edge: KuhnEdge) -> Self {
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
    fn bet(self, turn: Turn, chips: crate::Chips) -> Self {
        let mut seats = self.seats;
        seats[turn.seat()] = seats[turn.seat()].bet(chips);
        Self {
            seats,
            table: self.table.add(chips),
            ..self
        }
    }
}

impl TreeGame for Kuhn {
    type E = KuhnEdge;
    type I = KuhnInfo;

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
        let ante = self.config.ante;
        let bet = self.config.bet;
        match *edge {
            KuhnEdge::Deal(a, b) => {
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
            KuhnEdge::Check => Self {
                turn: mover.opponent(),
                round: match self.closes_with_check() {
                    true => Round::End,
                    false => next.round,
                },
                ..next
            },
            KuhnEdge::Bet => Self {
                turn: mover.opponent(),
                ..next
            }
            .bet(mover, bet),
            KuhnEdge::Call => Self {
                turn: mover.opponent(),
                round: Round::End,
                ..next
            }
            .bet(mover, bet),
            KuhnEdge::Fold => Self {
                turn: mover.opponent(),
                round: Round::End,
                ..next
            }
            .bet(mover.opponent(), -bet),
        }
    }

    fn settlement(&self) -> Utility {
        let half = Utility::from(self.table.pot()) / 2.;
        let winner = match self.incoming_tag() {
            Some(Tag::Fold) => self.turn,
            _ => {
                let p1 = self.seat(Turn::P1).hole().rank();
                let p2 = self.seat(Turn::P2).hole().rank();
                if p1 > p2 { Turn::P1 } else { Turn::P2 }
            }
        };
        winner.sign() * half
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }
    fn play(node: &Arc<Kuhn>, edges: &[KuhnEdge]) -> Arc<Kuhn> {
        edges.iter().fold(node.clone(), |n, e| n.apply(e))
    }
    fn deal(a: &str, b: &str) -> Arc<Kuhn> {
        Kuhn::root(KuhnConfig::default()).apply(&KuhnEdge::Deal(card(a), card(b)))
    }

    #[test]
    fn root_is_chance_with_six_deals() {
        let root = Kuhn::root(KuhnConfig::default());
        assert!(root.turn() == Turn::Chance);
        assert!(!root.is_terminal());
        assert!(root.choices().len() == 6);
        assert!(root.parent().is_none());
        assert!(root.incoming().is_none());
    }

    #[test]
    fn deal_posts_antes() {
        let node = deal("Jh", "Kh");
        assert!(node.turn() == Turn::P1);
        assert!(node.round() == Round::PreFlop);
        assert!(node.table().pot() == 2);
        assert!(node.seat(Turn::P1).stack() == crate::KUHN_STACK - 1);
        assert!(node.deck().len() == 1);
        assert!(node.choices() == vec![KuhnEdge::Check, KuhnEdge::Bet]);
    }

    #[test]
    fn betting_sequences() {
        let node = deal("Jh", "Kh");
        assert!(play(&node, &[KuhnEdge::Check]).choices() == vec![KuhnEdge::Check, KuhnEdge::Bet]);
        assert!(play(&node, &[KuhnEdge::Check]).round() == Round::PreFlop);
        assert!(play(&node, &[KuhnEdge::Bet]).choices() == vec![KuhnEdge::Call, KuhnEdge::Fold]);
        assert!(play(&node, &[KuhnEdge::Check, KuhnEdge::Bet]).choices() == vec![KuhnEdge::Call, KuhnEdge::Fold]);
        for ending in [
            vec![KuhnEdge::Check, KuhnEdge::Check],
            vec![KuhnEdge::Bet, KuhnEdge::Call],
            vec![KuhnEdge::Bet, KuhnEdge::Fold],
            vec![KuhnEdge::Check, KuhnEdge::Bet, KuhnEdge::Call],
            vec![KuhnEdge::Check, KuhnEdge::Bet, KuhnEdge::Fold],
        ] {
            let leaf = play(&node, &ending);
            assert!(leaf.is_terminal());
            assert!(leaf.round() == Round::End);
            assert!(leaf.choices().is_empty());
        }
    }

    #[test]
    fn showdown_payoffs() {
        let node = deal("Jh", "Kh");
        let leaf = play(&node, &[KuhnEdge::Check, KuhnEdge::Check]);
        assert!(leaf.payoff(Turn::P1) == -1.);
        let leaf = play(&node, &[KuhnEdge::Bet, KuhnEdge::Call]);
        assert!(leaf.payoff(Turn::P1) == -2.);
        assert!(leaf.payoff(Turn::P2) == 2.);
    }

    #[test]
    fn folding_player_loses_contribution() {
        let node = deal("Kh", "Jh");
        let leaf = play(&node, &[KuhnEdge::Check, KuhnEdge::Bet, KuhnEdge::Fold]);
        assert!(leaf.payoff(Turn::P1) == -1.);
        assert!(leaf.payoff(Turn::P2) == 1.);
        let leaf = play(&node, &[KuhnEdge::Bet, KuhnEdge::Fold]);
        assert!(leaf.payoff(Turn::P2) == -1.);
        assert!(leaf.payoff(Turn::P1) == 1.);
    }

    #[test]
    fn zero_sum_everywhere() {
        fn visit(node: &Arc<Kuhn>) {
            if node.is_terminal() {
                assert!(node.payoff(Turn::P1) == -node.payoff(Turn::P2));
            }
            for edge in node.choices() {
                visit(&node.apply(&edge));
            }
        }
        visit(&Kuhn::root(KuhnConfig::default()));
    }

    #[test]
    fn short_stacks_cannot_bet() {
        let config = KuhnConfig {
            stacks: [1, 5],
            ..KuhnConfig::default()
        };
        let node = Kuhn::root(config).apply(&KuhnEdge::Deal(card("Jh"), card("Qh")));
        assert!(node.choices() == vec![KuhnEdge::Check]);
    }

    #[test]
    #[should_panic]
    fn payoff_before_terminal() {
        deal("Jh", "Qh").payoff(Turn::P1);
    }

    #[test]
    #[should_panic]
    fn illegal_action() {
        deal("Jh", "Qh").apply(&KuhnEdge::Call);
    }

    #[test]
    #[should_panic]
    fn chance_has_no_info() {
        Kuhn::root(KuhnConfig::default()).info();
    }

    #[test]
    fn history_replays_edges() {
        let node = play(&deal("Jh", "Qh"), &[KuhnEdge::Check, KuhnEdge::Bet]);
        assert!(
            node.history()
                == vec![
                    KuhnEdge::Deal(card("Jh"), card("Qh")),
                    KuhnEdge::Check,
                    KuhnEdge::Bet
                ]
        );
        assert!(node.lineage().count() == 4);
    }

    #[test]
    fn info_ignores_opponent_card() {
        let a = play(&deal("Qh", "Jh"), &[KuhnEdge::Check]);
        let b = play(&deal("Kh", "Jh"), &[KuhnEdge::Check]);
        // player two holds the Jack in both
        assert!(a.info() == b.info());
    }

    #[test]
    fn info_depends_on_history() {
        let a = play(&deal("Qh", "Jh"), &[KuhnEdge::Check, KuhnEdge::Bet]);
        let b = play(&deal("Qh", "Jh"), &[KuhnEdge::Bet]);
        assert!(a.turn() == Turn::P1);
        assert!(b.turn() == Turn::P2);
        assert!(a.info() != play(&deal("Kh", "Jh"), &[KuhnEdge::Check, KuhnEdge::Bet]).info());
        assert!(a.info() != play(&deal("Qh", "Jh"), &[KuhnEdge::Check]).info());
    }

    #[test]
    fn info_layout() {
        let node = play(&deal("Qh", "Jh"), &[KuhnEdge::Check, KuhnEdge::Bet]);
        let ref info = node.info();
        assert!(observed(info, 0) == Some(card("Qh")));
        assert!(info.tags(CARD_BITS).collect::<Vec<_>>() == vec![Tag::Bet, Tag::Check, Tag::DealPrivate]);
        assert!(Kuhn::describe(info) == "Qh | Prv X B");
    }
}

use super::*;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Rank;
use crate::cfr::*;

fn config() -> RhodeIslandConfig {
    RhodeIslandConfig {
        max_raises: 0,
        lowest: Rank::Ten,
        ..RhodeIslandConfig::default()
    }
}
fn card(s: &str) -> Card {
    Card::try_from(s).unwrap()
}

#[test]
fn solves_limited_deck() {
    let root = RhodeIsland::root(config());
    let strategy = solve(root, 2_000, 2).unwrap();
    assert!(!strategy.is_empty());
    for (info, policy) in strategy.iter() {
        assert!(
            (policy.total() - 1.).abs() < 1e-9,
            "{} sums to {}",
            RhodeIsland::describe(info),
            policy.total()
        );
        assert!(policy.tags().all(|t| t != Tag::Raise));
        assert!(policy.tags().all(|t| !t.is_deal()));
    }
}

#[test]
fn evaluation_is_bounded_from_the_flop() {
    let root = RhodeIsland::root(config());
    let strategy = solve(root.clone(), 500, 2).unwrap();
    let flop = [
        RhodeIslandEdge::Deal(card("Ah"), card("Kc")),
        RhodeIslandEdge::Check,
        RhodeIslandEdge::Check,
        RhodeIslandEdge::Reveal(card("Qc")),
    ]
    .iter()
    .fold(root, |node, edge| node.apply(edge));
    let stake = Utility::from(config().ante + 2 * config().postflop_bet);
    let value = evaluate(&flop, &strategy);
    assert!(value.abs() <= stake, "{} exceeds {}", value, stake);
    assert!(value == evaluate(&flop, &strategy));
}

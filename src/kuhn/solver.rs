use super::*;
use crate::Utility;
use crate::cards::Card;
use crate::cfr::*;
use std::sync::Arc;

const TOLERANCE: Utility = 0.01;
const GAME_VALUE: Utility = -1. / 18.;

fn card(s: &str) -> Card {
    Card::try_from(s).unwrap()
}
fn info(p1: &str, p2: &str, edges: &[KuhnEdge]) -> KuhnInfo {
    edges
        .iter()
        .fold(
            Kuhn::root(KuhnConfig::default()).apply(&KuhnEdge::Deal(card(p1), card(p2))),
            |node, edge| node.apply(edge),
        )
        .info()
}
fn solved() -> (Arc<Kuhn>, Strategy<KuhnInfo>) {
    let root = Kuhn::root(KuhnConfig::default());
    let strategy = solve(root.clone(), 50_000, 4).unwrap();
    for (info, policy) in strategy.iter() {
        println!("{:<16} {}", Kuhn::describe(info), policy);
    }
    (root, strategy)
}

#[test]
fn converge() {
    let (root, strategy) = solved();
    let value = evaluate(&root, &strategy);
    assert!(
        (value - GAME_VALUE).abs() < TOLERANCE,
        "value {} not near {}",
        value,
        GAME_VALUE
    );
}

#[test]
fn converge_under_fixed_seeds() {
    let root = Kuhn::root(KuhnConfig::default());
    for seed in [1, 0xbeef, 0x5eed_5eed] {
        let config = SolverConfig::new(50_000, 1).with_seed(seed);
        let strategy = Routine::new(root.clone(), config).solve().unwrap();
        let value = evaluate(&root, &strategy);
        assert!(
            (value - GAME_VALUE).abs() < TOLERANCE,
            "seed {:#x}: value {} not near {}",
            seed,
            value,
            GAME_VALUE
        );
    }
}

#[test]
fn dominated_actions_vanish() {
    let (_, strategy) = solved();
    // second player holding the King always calls a bet
    let king = info("Jh", "Kh", &[KuhnEdge::Bet]);
    assert!(strategy.probability(&king, &Tag::Call) > 1. - 0.05);
    // second player holding the Jack never calls a bet
    let jack = info("Qh", "Jh", &[KuhnEdge::Bet]);
    assert!(strategy.probability(&jack, &Tag::Fold) > 1. - 0.05);
    // first player holding the King calls after check-bet
    let king = info("Kh", "Qh", &[KuhnEdge::Check, KuhnEdge::Bet]);
    assert!(strategy.probability(&king, &Tag::Call) > 1. - 0.05);
}

#[test]
fn persisted_strategy_evaluates_identically() {
    let root = Kuhn::root(KuhnConfig::default());
    let strategy = solve(root.clone(), 5_000, 2).unwrap();
    let path = std::env::temp_dir().join(format!("kuhn-{}.json", std::process::id()));
    strategy.save(&path).unwrap();
    let loaded = Strategy::<KuhnInfo>::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(loaded.len() == strategy.len());
    assert!((evaluate(&root, &loaded) - evaluate(&root, &strategy)).abs() < 1e-9);
}

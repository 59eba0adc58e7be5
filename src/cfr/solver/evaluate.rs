use crate::Probability;
use crate::Utility;
use crate::cfr::*;
use std::sync::Arc;

/// Player one's expected payoff from `node` when both players follow
/// `strategy`.
///
/// Chance outcomes are weighted uniformly rather than sampled, so the
/// result is deterministic. Information sets the strategy never reached
/// are played uniformly. Nothing is written anywhere.
pub fn evaluate<G: TreeGame>(node: &Arc<G>, strategy: &Strategy<G::I>) -> Utility {
    if node.is_terminal() {
        return node.payoff(Turn::P1);
    }
    let choices = node.choices();
    match node.turn() {
        Turn::Chance => {
            assert!(!choices.is_empty(), "chance node without outcomes");
            let n = choices.len() as Probability;
            choices
                .iter()
                .map(|edge| evaluate(&node.apply(edge), strategy))
                .sum::<Utility>()
                / n
        }
        _ => {
            let ref info = node.info();
            let policy = strategy
                .policy(info)
                .cloned()
                .unwrap_or_else(|| Policy::uniform(choices.iter().map(TreeEdge::tag)));
            choices
                .iter()
                .map(|edge| (edge, policy.weight(&edge.tag())))
                .filter(|(_, p)| *p > 0.)
                .map(|(edge, p)| p * evaluate(&node.apply(edge), strategy))
                .sum::<Utility>()
        }
    }
}

use crate::Utility;
use crate::cfr::*;
use std::sync::Arc;

/// the tree-local game state. it must be implemented by each concrete game.
///
/// nodes are immutable and shared behind [`Arc`]. a child holds its parent
/// and the edge that produced it, so walking [`TreeGame::lineage`] back to
/// the root replays the history exactly. domain rules (bet caps, raise caps,
/// stack limits) live entirely inside [`TreeGame::choices`].
///
/// implementors provide the unchecked [`TreeGame::transition`] and
/// [`TreeGame::settlement`]; callers go through [`TreeGame::apply`] and
/// [`TreeGame::payoff`], which reject misuse.
pub trait TreeGame: Sized + Send + Sync {
    type E: TreeEdge;
    type I: TreeInfo;

    /// whose move it is
    fn turn(&self) -> Turn;
    /// legal edges, empty exactly when terminal
    fn choices(&self) -> Vec<Self::E>;
    fn is_terminal(&self) -> bool;
    /// information set of the player to move
    fn info(&self) -> Self::I;
    fn parent(&self) -> Option<&Arc<Self>>;
    /// edge that produced this node
    fn incoming(&self) -> Option<&Self::E>;
    /// child reached by a legal edge
    fn transition(self: &Arc<Self>, edge: &Self::E) -> Self;
    /// player one's payoff at a terminal node
    fn settlement(&self) -> Utility;

    /// child reached by `edge`, which must be legal here
    fn apply(self: &Arc<Self>, edge: &Self::E) -> Arc<Self> {
        assert!(
            self.choices().contains(edge),
            "{} is not a legal action for {}",
            edge,
            self.turn()
        );
        Arc::new(self.transition(edge))
    }

    /// zero-sum payoff for `turn`, defined only at terminal nodes
    fn payoff(&self, turn: Turn) -> Utility {
        assert!(self.is_terminal(), "payoff requested at non-terminal node");
        assert!(!turn.is_chance(), "chance receives no payoff");
        turn.sign() * self.settlement()
    }

    /// this node followed by each ancestor up to the root
    fn lineage(&self) -> Lineage<'_, Self> {
        Lineage::from(self)
    }

    /// edges from the root down to this node
    fn history(&self) -> Vec<Self::E> {
        let mut edges = self
            .lineage()
            .filter_map(|node| node.incoming())
            .cloned()
            .collect::<Vec<_>>();
        edges.reverse();
        edges
    }
}

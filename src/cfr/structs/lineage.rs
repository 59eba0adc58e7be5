use crate::cfr::TreeGame;

/// Walks from a node up through its parents to the root.
pub struct Lineage<'a, G: TreeGame> {
    next: Option<&'a G>,
}

impl<'a, G: TreeGame> From<&'a G> for Lineage<'a, G> {
    fn from(node: &'a G) -> Self {
        Self { next: Some(node) }
    }
}

impl<'a, G: TreeGame> Iterator for Lineage<'a, G> {
    type Item = &'a G;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent().map(|p| &**p);
        Some(node)
    }
}

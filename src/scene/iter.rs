use std::iter::FusedIterator;

use meshbake_common::ArrayIndex;

use super::{Error, Node};

/// Explicit-stack pre-order walk over the nodes below the root.
///
/// Each node is visited before its first child, and a node's subtree is finished before its next
/// sibling. `pending` holds at most one resumable sibling per level, so it never grows past the
/// depth of the graph.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<Idx: ArrayIndex> {
    next: Option<(Idx, usize)>,
    pending: Vec<(Idx, usize)>,
    max_depth: usize,
}

impl<Idx: ArrayIndex> Cursor<Idx> {
    /// Start at the root's first child, which sits at depth 1.
    pub(crate) fn new(nodes: &[Node<Idx>], max_depth: usize) -> Self {
        Self {
            next: nodes.first().and_then(|root| root.first_child).map(|c| (c, 1)),
            pending: Vec::new(),
            max_depth,
        }
    }

    /// Step to the next node in pre-order.
    ///
    /// After an error the cursor is exhausted.
    pub(crate) fn advance(&mut self, nodes: &[Node<Idx>]) -> Option<Result<Idx, Error<Idx>>> {
        let (idx, depth) = match self.next.take() {
            Some(n) => n,
            None => self.pending.pop()?,
        };
        if depth > self.max_depth {
            self.pending.clear();
            return Some(Err(Error::TraversalDepthExceeded(self.max_depth)));
        }
        let Some(node) = nodes.get(idx.position()) else {
            self.pending.clear();
            return Some(Err(Error::InvalidIndex(idx)));
        };
        if let Some(sibling) = node.next_sibling {
            self.pending.push((sibling, depth));
        }
        self.next = node.first_child.map(|c| (c, depth + 1));
        Some(Ok(idx))
    }
}

/// Iterator over the nodes of a [Scene](super::Scene) in bake order.
///
/// Yields [Error::TraversalDepthExceeded] once, then stops, if the graph is deeper than the
/// configured limit.
#[derive(Debug, Clone)]
pub struct Traverse<'scene, Idx: ArrayIndex> {
    pub(crate) nodes: &'scene [Node<Idx>],
    pub(crate) cursor: Cursor<Idx>,
}

impl<'scene, Idx: ArrayIndex> Iterator for Traverse<'scene, Idx> {
    type Item = Result<Idx, Error<Idx>>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance(self.nodes)
    }
}

impl<'scene, Idx: ArrayIndex> FusedIterator for Traverse<'scene, Idx> {}

/// Iterator over the direct children of a node, most recently attached first.
#[derive(Debug, Clone)]
pub struct Children<'scene, Idx: ArrayIndex> {
    pub(crate) nodes: &'scene [Node<Idx>],
    pub(crate) next: Option<Idx>,
}

impl<'scene, Idx: ArrayIndex> Iterator for Children<'scene, Idx> {
    type Item = Idx;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self
            .nodes
            .get(current.position())
            .and_then(|n| n.next_sibling);
        Some(current)
    }
}

impl<'scene, Idx: ArrayIndex> FusedIterator for Children<'scene, Idx> {}

use meshbake_common::ArrayIndex;

/// Errors related to [Scenes](crate::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error<Idx: ArrayIndex> {
    #[error("Attempted to access node at index {0}, which doesn't exist.")]
    InvalidIndex(Idx),
    #[error("Attempted to attach node {child} to node {parent}, but it already has a parent.")]
    AlreadyAttached { child: Idx, parent: Idx },
    #[error("Attaching node {child} to node {parent} would make {child} its own ancestor.")]
    WouldCycle { parent: Idx, child: Idx },
    #[error("Attempted to modify or reattach the scene root.")]
    RootIsImmutable,
    #[error("Scene graph is deeper than the traversal limit of {0}.")]
    TraversalDepthExceeded(usize),
    #[error("Scene already holds {0} nodes; no more are addressable by its index type.")]
    IndexOverflow(usize),
}

//! A hierarchy of meshes, each placed relative to its parent.
//!
//! Nodes live in an arena owned by the [Scene] and are addressed by index. Index `0` is the root:
//! it has no mesh, no parent, and an identity transform that can't be changed. The graph only
//! grows; there's no way to detach, reparent, or remove a node.

mod bake;
mod error;
mod iter;

pub use bake::*;
pub use error::*;
pub use iter::*;

use meshbake_common::ArrayIndex;

use crate::{math::Transform, mesh::Mesh};

/// One entry in a [Scene]'s arena.
#[derive(Debug, Clone)]
pub(crate) struct Node<Idx: ArrayIndex> {
    pub(crate) mesh: Mesh,
    /// World transform computed by the last bake; `None` if this node wasn't reached.
    pub(crate) world: Option<Transform>,
    pub(crate) parent: Option<Idx>,
    pub(crate) first_child: Option<Idx>,
    pub(crate) next_sibling: Option<Idx>,
}

impl<Idx: ArrayIndex> Node<Idx> {
    fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            world: None,
            parent: None,
            first_child: None,
            next_sibling: None,
        }
    }
}

/// An arena of [Meshes](Mesh) linked into a tree below an implicit root.
///
/// `Idx` bounds how many nodes the scene can hold; inserting past `Idx::max_value() + 1` nodes
/// fails with [Error::IndexOverflow].
#[derive(Debug, Clone)]
pub struct Scene<Idx: ArrayIndex = u32> {
    nodes: Vec<Node<Idx>>,
    /// Whether the cached world transforms still match the graph.
    fresh: bool,
}

impl<Idx: ArrayIndex> Default for Scene<Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Idx: ArrayIndex> Scene<Idx> {
    /// Construct a scene containing only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                world: Some(Transform::identity()),
                ..Node::new(Mesh::empty())
            }],
            fresh: true,
        }
    }

    /// Index of the root node.
    #[inline]
    pub fn root(&self) -> Idx {
        Idx::zero()
    }

    /// Number of nodes in the arena, including the root and any unattached nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn contains(&self, node: Idx) -> bool {
        node.position() < self.nodes.len()
    }

    #[inline]
    fn node(&self, node: Idx) -> Result<&Node<Idx>, Error<Idx>> {
        self.nodes
            .get(node.position())
            .ok_or(Error::InvalidIndex(node))
    }

    /// Borrow a non-root node mutably; invalidates cached world transforms.
    fn node_mut(&mut self, node: Idx) -> Result<&mut Node<Idx>, Error<Idx>> {
        if node == self.root() {
            return Err(Error::RootIsImmutable);
        }
        let n = self
            .nodes
            .get_mut(node.position())
            .ok_or(Error::InvalidIndex(node))?;
        self.fresh = false;
        Ok(n)
    }

    /// Add a detached node carrying `mesh` and return its index.
    ///
    /// The node won't be baked until it's [attached](Self::attach) below the root.
    ///
    /// # Errors
    ///
    /// * [Error::IndexOverflow] if the scene is already full
    pub fn insert(&mut self, mesh: Mesh) -> Result<Idx, Error<Idx>> {
        let len = self.nodes.len();
        let idx = Idx::from_position(len).ok_or(Error::IndexOverflow(len))?;
        self.nodes.push(Node::new(mesh));
        Ok(idx)
    }

    /// Add a detached node with an empty mesh.
    #[inline]
    pub fn create_node(&mut self) -> Result<Idx, Error<Idx>> {
        self.insert(Mesh::empty())
    }

    /// Make `child` the first child of `parent`.
    ///
    /// Children are kept newest first, so later attachments are visited earlier.
    ///
    /// # Errors
    ///
    /// * [Error::InvalidIndex] if either node doesn't exist
    /// * [Error::RootIsImmutable] if `child` is the root
    /// * [Error::AlreadyAttached] if `child` already has a parent
    /// * [Error::WouldCycle] if `child` is `parent` or one of its ancestors
    pub fn attach(&mut self, parent: Idx, child: Idx) -> Result<(), Error<Idx>> {
        self.node(parent)?;
        if child == self.root() {
            return Err(Error::RootIsImmutable);
        }
        let c = self.node(child)?;
        if let Some(existing) = c.parent {
            return Err(Error::AlreadyAttached {
                child,
                parent: existing,
            });
        }

        let mut ancestor = Some(parent);
        while let Some(a) = ancestor {
            if a == child {
                return Err(Error::WouldCycle { parent, child });
            }
            ancestor = self.node(a)?.parent;
        }

        let head = self.node(parent)?.first_child;
        let c = self.node_mut(child)?;
        c.parent = Some(parent);
        c.next_sibling = head;
        self.nodes[parent.position()].first_child = Some(child);
        Ok(())
    }

    /// [Insert](Self::insert) `mesh` and attach it directly below the root.
    pub fn add(&mut self, mesh: Mesh) -> Result<Idx, Error<Idx>> {
        let idx = self.insert(mesh)?;
        self.attach(self.root(), idx)?;
        Ok(idx)
    }

    /// The node `node` is attached to, if any.
    pub fn parent(&self, node: Idx) -> Result<Option<Idx>, Error<Idx>> {
        Ok(self.node(node)?.parent)
    }

    /// The direct children of `node`, most recently attached first.
    pub fn children(&self, node: Idx) -> Result<Children<'_, Idx>, Error<Idx>> {
        Ok(Children {
            nodes: &self.nodes,
            next: self.node(node)?.first_child,
        })
    }

    pub fn mesh(&self, node: Idx) -> Result<&Mesh, Error<Idx>> {
        Ok(&self.node(node)?.mesh)
    }

    /// Mutable access to a node's mesh (vertices & local transform).
    ///
    /// # Errors
    ///
    /// * [Error::RootIsImmutable] for the root
    /// * [Error::InvalidIndex]
    pub fn mesh_mut(&mut self, node: Idx) -> Result<&mut Mesh, Error<Idx>> {
        Ok(&mut self.node_mut(node)?.mesh)
    }

    /// The transform of `node` relative to its parent.
    pub fn local_transform(&self, node: Idx) -> Result<Transform, Error<Idx>> {
        Ok(*self.node(node)?.mesh.transform())
    }

    /// # Errors
    ///
    /// * [Error::RootIsImmutable] for the root
    /// * [Error::InvalidIndex]
    pub fn set_local_transform(&mut self, node: Idx, transform: Transform) -> Result<(), Error<Idx>> {
        self.node_mut(node)?.mesh.set_transform(transform);
        Ok(())
    }

    /// Compose the local transforms from the top of `node`'s ancestor chain down to `node`.
    ///
    /// Doesn't depend on (or update) anything cached by a bake.
    pub fn world_transform(&self, node: Idx) -> Result<Transform, Error<Idx>> {
        let n = self.node(node)?;
        let mut world = *n.mesh.transform();
        let mut ancestor = n.parent;
        while let Some(a) = ancestor {
            let p = self.node(a)?;
            world = p.mesh.transform().compose(&world);
            ancestor = p.parent;
        }
        Ok(world)
    }

    /// The world transform computed for `node` by the most recent bake.
    ///
    /// `None` if the scene has changed since, or if the node wasn't reachable from the root. The
    /// root is always the identity.
    pub fn cached_world_transform(&self, node: Idx) -> Result<Option<Transform>, Error<Idx>> {
        let n = self.node(node)?;
        Ok(if node == self.root() {
            Some(Transform::identity())
        } else if self.fresh {
            n.world
        } else {
            None
        })
    }

    /// Iterate over the nodes below the root in bake order, with the default depth limit.
    pub fn traverse(&self) -> Traverse<'_, Idx> {
        self.traverse_with(&BakeConfig::default())
    }

    pub fn traverse_with(&self, config: &BakeConfig) -> Traverse<'_, Idx> {
        Traverse {
            nodes: &self.nodes,
            cursor: iter::Cursor::new(&self.nodes, config.max_depth),
        }
    }
}

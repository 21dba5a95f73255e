use meshbake_common::ArrayIndex;

use super::{iter::Cursor, Error, Scene};
use crate::{
    math::Transform,
    mesh::{to_bytes, Vertex},
};

/// Traversal limit used by [BakeConfig::default].
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Options controlling how a [Scene] is flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BakeConfig {
    /// Deepest node (counting the root's children as depth 1) a bake will descend to before failing
    /// with [Error::TraversalDepthExceeded].
    pub max_depth: usize,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl<Idx: ArrayIndex> Scene<Idx> {
    /// [Self::bake_with] the default [BakeConfig].
    #[inline]
    pub fn bake(&mut self) -> Result<Vec<Vertex>, Error<Idx>> {
        self.bake_with(&BakeConfig::default())
    }

    /// Flatten every node reachable from the root into one world-space vertex list.
    ///
    /// The first pass walks the graph, caching each node's world transform and counting vertices;
    /// the second walks it again, appending each node's vertices transformed into world space.
    /// Nodes are emitted in [traversal](Self::traverse) order, so siblings come out newest first.
    ///
    /// # Errors
    ///
    /// * [Error::TraversalDepthExceeded] if the graph is deeper than `config.max_depth`; only the
    ///   root's cached world transform is valid afterwards
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(nodes = self.nodes.len(), max_depth = config.max_depth))
    )]
    pub fn bake_with(&mut self, config: &BakeConfig) -> Result<Vec<Vertex>, Error<Idx>> {
        let total = self.update_world_transforms(config)?;

        let mut out = Vec::with_capacity(total);
        let mut cursor = Cursor::new(&self.nodes, config.max_depth);
        while let Some(idx) = cursor.advance(&self.nodes) {
            let node = &self.nodes[idx?.position()];
            if let Some(world) = node.world {
                out.extend(node.mesh.vertices().iter().map(|v| v.transformed(&world)));
            }
        }
        debug_assert_eq!(out.len(), total);

        #[cfg(feature = "tracing")]
        tracing::debug!(vertices = out.len(), "baked scene");
        Ok(out)
    }

    /// Bake into the flat little-endian vertex record layout.
    pub fn bake_bytes(&mut self) -> Result<Vec<u8>, Error<Idx>> {
        self.bake_bytes_with(&BakeConfig::default())
    }

    pub fn bake_bytes_with(&mut self, config: &BakeConfig) -> Result<Vec<u8>, Error<Idx>> {
        Ok(to_bytes(&self.bake_with(config)?))
    }

    /// Recompute the cached world transform of every node reachable from the root, returning the
    /// number of vertices those nodes hold.
    fn update_world_transforms(&mut self, config: &BakeConfig) -> Result<usize, Error<Idx>> {
        self.fresh = false;
        for node in self.nodes.iter_mut().skip(1) {
            node.world = None;
        }

        let mut total = 0;
        #[cfg(feature = "tracing")]
        let mut visited = 0usize;
        let mut cursor = Cursor::new(&self.nodes, config.max_depth);
        while let Some(idx) = cursor.advance(&self.nodes) {
            let idx = idx?.position();
            let node = &self.nodes[idx];
            // parents are always visited first; the root is pinned to identity
            let parent = node
                .parent
                .and_then(|p| self.nodes[p.position()].world)
                .unwrap_or_else(Transform::identity);
            let world = parent.compose(node.mesh.transform());
            total += node.mesh.vertex_count();
            #[cfg(feature = "tracing")]
            {
                visited += 1;
            }
            self.nodes[idx].world = Some(world);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(visited, vertices = total, "computed world transforms");

        self.fresh = true;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::{from_euler, Vec3},
        mesh::{plane, Mesh},
    };

    #[test]
    fn caches_match_uncached() {
        let mut scene = Scene::<u32>::new();
        let a = scene
            .add(plane(1.0, 1.0, Vec3::new(1.0, 0.0, 0.0)))
            .unwrap();
        let b = scene.insert(Mesh::empty()).unwrap();
        scene.attach(a, b).unwrap();
        scene
            .set_local_transform(a, Transform::new(Vec3::new(3.0, 0.0, 1.0), from_euler(0.2, 0.4, 0.6), 1.5))
            .unwrap();
        scene
            .set_local_transform(b, Transform::new(Vec3::new(-1.0, 2.0, 0.0), from_euler(1.0, 0.0, -0.5), 0.5))
            .unwrap();

        assert_eq!(scene.cached_world_transform(b), Ok(None));
        scene.bake().unwrap();
        for n in [a, b] {
            let cached = scene.cached_world_transform(n).unwrap().unwrap();
            let walked = scene.world_transform(n).unwrap();
            assert!((cached.position - walked.position).norm() < 1e-5);
            assert!((cached.rotation.coords - walked.rotation.coords).norm() < 1e-5);
            assert!((cached.scale - walked.scale).abs() < 1e-6);
        }

        // any mutation invalidates the cache, except for the root
        scene.mesh_mut(a).unwrap().set_scale(2.0);
        assert_eq!(scene.cached_world_transform(a), Ok(None));
        assert_eq!(
            scene.cached_world_transform(scene.root()),
            Ok(Some(Transform::identity()))
        );
    }

    #[test]
    fn failed_bake_leaves_cache_stale() {
        let mut scene = Scene::<u32>::new();
        let mut parent = scene.root();
        for _ in 0..3 {
            let n = scene.create_node().unwrap();
            scene.attach(parent, n).unwrap();
            parent = n;
        }
        scene.bake().unwrap();
        assert!(scene.cached_world_transform(parent).unwrap().is_some());

        let shallow = BakeConfig { max_depth: 2 };
        assert_eq!(
            scene.bake_with(&shallow),
            Err(Error::TraversalDepthExceeded(2))
        );
        assert_eq!(scene.cached_world_transform(parent), Ok(None));
        assert_eq!(
            scene.cached_world_transform(scene.root()),
            Ok(Some(Transform::identity()))
        );
    }
}

//! Flat triangle-list meshes and the binary vertex record they serialize to.
//!
//! There's no index buffer: every three consecutive [Vertices](Vertex) form one triangle.

mod error;
mod icosphere;
pub mod primitive;

pub use error::*;
pub use icosphere::*;
pub use primitive::*;

use static_assertions::const_assert_eq;

use crate::math::{Quat, Real, Transform, Vec3};

/// Size, in bytes, of one serialized [Vertex]: 9 little-endian `f32`s in order
/// `position.xyz, normal.xyz, color.xyz`.
pub const VERTEX_SIZE: usize = 36;
const_assert_eq!(VERTEX_SIZE, 9 * std::mem::size_of::<f32>());

/// An RGB color.
pub type Color = Vec3;

/// Color used by generators when none is given.
pub const DEFAULT_COLOR: [Real; 3] = [1.0, 1.0, 1.0];

/// [DEFAULT_COLOR], as a [Color].
#[inline]
pub fn default_color() -> Color {
    Color::from(DEFAULT_COLOR)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Color,
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3, color: Color) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }

    /// Apply `t` to the position and normal; the color is carried over unchanged.
    #[inline]
    pub fn transformed(&self, t: &Transform) -> Self {
        Self {
            position: t.transform_point(&self.position),
            normal: t.transform_normal(&self.normal),
            color: self.color,
        }
    }

    /// Read one vertex record.
    pub fn read_le(record: &[u8; VERTEX_SIZE]) -> Self {
        let f = |i: usize| {
            let at = i * 4;
            f32::from_le_bytes([record[at], record[at + 1], record[at + 2], record[at + 3]])
        };
        Self {
            position: Vec3::new(f(0), f(1), f(2)),
            normal: Vec3::new(f(3), f(4), f(5)),
            color: Vec3::new(f(6), f(7), f(8)),
        }
    }

    /// Append this vertex's record to `out`.
    pub fn write_le(&self, out: &mut Vec<u8>) {
        for v in [&self.position, &self.normal, &self.color] {
            for c in v.iter() {
                out.extend_from_slice(&c.to_le_bytes());
            }
        }
    }
}

/// Serialize a vertex list into the flat binary layout.
pub fn to_bytes(vertices: &[Vertex]) -> Vec<u8> {
    let mut out = Vec::with_capacity(vertices.len() * VERTEX_SIZE);
    for v in vertices {
        v.write_le(&mut out);
    }
    out
}

/// A vertex list and the transform placing it relative to its parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    transform: Transform,
}

impl Mesh {
    /// A mesh with no vertices.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            transform: Transform::identity(),
        }
    }

    /// Import a flat buffer of vertex records.
    ///
    /// # Errors
    ///
    /// * [Error::InvalidBufferSize] if `bytes.len()` isn't a multiple of [VERTEX_SIZE]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() % VERTEX_SIZE != 0 {
            return Err(Error::InvalidBufferSize(bytes.len()));
        }
        Ok(Self::from_vertices(
            bytes
                .chunks_exact(VERTEX_SIZE)
                .filter_map(|record| record.try_into().ok().map(Vertex::read_le))
                .collect(),
        ))
    }

    /// Serialize this mesh's (untransformed) vertices.
    pub fn to_bytes(&self) -> Vec<u8> {
        to_bytes(&self.vertices)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Recolor every vertex.
    pub fn paint(&mut self, color: Color) {
        for v in &mut self.vertices {
            v.color = color;
        }
    }

    /// The transform relative to this mesh's parent.
    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    #[inline]
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    #[inline]
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    #[inline]
    pub fn scale(&self) -> Real {
        self.transform.scale
    }

    #[inline]
    pub fn set_scale(&mut self, scale: Real) {
        self.transform.scale = scale;
    }

    /// Builder-style [Self::set_transform].
    #[inline]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

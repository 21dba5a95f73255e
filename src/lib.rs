//! Procedural meshes, a scene graph of similarity transforms, and a baker that flattens the graph
//! into a single world-space vertex buffer.
//!
//! ```
//! use meshbake::{mesh, math::Vec3, Scene, Transform};
//!
//! let mut scene = Scene::<u32>::new();
//! let cube = scene.add(mesh::cuboid(2.0, 2.0, 2.0, mesh::default_color())).unwrap();
//! let moon = scene.insert(mesh::icosphere(0.5, 2, mesh::default_color())).unwrap();
//! scene.attach(cube, moon).unwrap();
//! scene
//!     .set_local_transform(moon, Transform::from_position(Vec3::new(3.0, 0.0, 0.0)))
//!     .unwrap();
//!
//! let vertices = scene.bake().unwrap();
//! assert_eq!(vertices.len(), 36 + 240);
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;
pub mod math;
pub mod mesh;
pub mod scene;

pub use error::Error;
pub use math::Transform;
pub use mesh::{Mesh, Vertex};
pub use scene::{BakeConfig, Scene};

pub use meshbake_common::ArrayIndex;

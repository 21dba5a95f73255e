use meshbake_common::ArrayIndex;

use crate::{math, mesh, scene};

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<Idx: ArrayIndex = u32> {
    #[error(transparent)]
    Mesh(#[from] mesh::Error),
    #[error(transparent)]
    Scene(#[from] scene::Error<Idx>),
    #[error(transparent)]
    DegenerateVector(#[from] math::DegenerateVector),
}

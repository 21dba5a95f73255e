use std::f32::consts::{PI, TAU};

use nalgebra::vector;

use super::{primitive::finish, Color, Mesh, Vertex};
use crate::math::{normalize, Real, Vec3};

/// Resolution used by [icosphere] when the caller has no preference.
pub const ICOSPHERE_DEFAULT_RESOLUTION: u32 = 1;
/// [icosphere] resolutions are clamped to this range.
pub const ICOSPHERE_RESOLUTION: (u32, u32) = (1, 8);

/// Number of vertices [icosphere] emits for `resolution`: `60·4ʳ⁻¹`, after clamping `r` to
/// [ICOSPHERE_RESOLUTION].
#[inline]
pub fn icosphere_vertex_count(resolution: u32) -> usize {
    let resolution = resolution.clamp(ICOSPHERE_RESOLUTION.0, ICOSPHERE_RESOLUTION.1);
    60 << (2 * (resolution - 1))
}

/// The 20 faces of a unit icosahedron with poles on the Z axis, as a flat triangle list.
///
/// Built from five segments around the Z axis; each contributes a triangle touching the south
/// pole, two around the equator, and one touching the north pole. The two rings of non-polar
/// vertices sit at latitude `±atan(1/2)` and are offset from each other by a tenth of a turn.
fn icosahedron() -> Vec<Vec3> {
    let (s0, c0) = 0.5f32.atan().sin_cos();
    let ring = |a: Real, z: Real| vector![a.cos() * c0, a.sin() * c0, z];

    let mut out = Vec::with_capacity(60);
    for i in 0..5 {
        let a1 = TAU * i as Real / 5.0;
        let a2 = TAU * (i + 1) as Real / 5.0;
        let lower1 = ring(a1 - PI * 0.2, -s0);
        let lower2 = ring(a2 - PI * 0.2, -s0);
        let upper1 = ring(a1, s0);
        let upper2 = ring(a2, s0);
        out.extend_from_slice(&[
            -Vec3::z(),
            lower2,
            lower1,
            lower1,
            lower2,
            upper1,
            upper1,
            lower2,
            upper2,
            Vec3::z(),
            upper1,
            upper2,
        ]);
    }
    out
}

/// Split every triangle of `src` into four, pushing the new corners out onto the unit sphere.
///
/// `(a, b, c)` becomes `(a, d, f), (d, b, e), (f, d, e), (f, e, c)`, where `d`, `e`, and `f` are
/// the normalized midpoints of `ab`, `bc`, and `ca`.
fn subdivide(src: &[Vec3]) -> Vec<Vec3> {
    let mut dst = Vec::with_capacity(src.len() * 4);
    for tri in src.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let d = normalize(&(a + b));
        let e = normalize(&(b + c));
        let f = normalize(&(c + a));
        dst.extend_from_slice(&[a, d, f, d, b, e, f, d, e, f, e, c]);
    }
    dst
}

/// A geodesic sphere of `radius` centered on the origin, with smooth normals.
///
/// Starts from an icosahedron and subdivides it `resolution - 1` times; `resolution` is clamped to
/// [ICOSPHERE_RESOLUTION]. See [icosphere_vertex_count].
pub fn icosphere(radius: Real, resolution: u32, color: Color) -> Mesh {
    let resolution = resolution.clamp(ICOSPHERE_RESOLUTION.0, ICOSPHERE_RESOLUTION.1);

    let mut unit = icosahedron();
    for _ in 1..resolution {
        unit = subdivide(&unit);
    }
    debug_assert_eq!(unit.len(), icosphere_vertex_count(resolution));

    finish(
        "icosphere",
        unit.into_iter()
            .map(|n| Vertex::new(n * radius, n, color))
            .collect(),
    )
}

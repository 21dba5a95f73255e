//! Procedural generators for simple solids.
//!
//! Every generator returns a fresh [Mesh] with an identity transform and a single flat color.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::vector;

use super::{Color, Error, Mesh, Vertex};
use crate::math::{Real, Vec3};

/// Resolution used by [cylinder] when the caller has no preference.
pub const CYLINDER_DEFAULT_RESOLUTION: u32 = 16;
/// Resolution used by [uv_sphere] when the caller has no preference.
pub const UV_SPHERE_DEFAULT_RESOLUTION: u32 = 16;
/// [uv_sphere] resolutions are clamped to this range.
pub const UV_SPHERE_RESOLUTION: (u32, u32) = (8, 128);

/// Wrap up a finished vertex list.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(super) fn finish(kind: &'static str, vertices: Vec<Vertex>) -> Mesh {
    #[cfg(feature = "tracing")]
    tracing::trace!(kind, vertices = vertices.len(), "generated mesh");
    Mesh::from_vertices(vertices)
}

/// Append a vertex sharing `normal` & `color` with its neighbours.
#[inline]
fn push(out: &mut Vec<Vertex>, position: Vec3, normal: Vec3, color: Color) {
    out.push(Vertex::new(position, normal, color));
}

/// A `width` × `length` rectangle in the XY plane, centered on the origin and facing `+Z`.
///
/// 2 triangles.
pub fn plane(width: Real, length: Real, color: Color) -> Mesh {
    let sx = width * 0.5;
    let sy = length * 0.5;
    let n = Vec3::z();
    let mut out = Vec::with_capacity(6);
    for p in [
        vector![-sx, -sy, 0.0],
        vector![sx, -sy, 0.0],
        vector![sx, sy, 0.0],
        vector![sx, sy, 0.0],
        vector![-sx, sy, 0.0],
        vector![-sx, -sy, 0.0],
    ] {
        push(&mut out, p, n, color);
    }
    finish("plane", out)
}

/// An axis-aligned box of size `width` × `length` × `height` centered on the origin, with one
/// flat normal per face.
///
/// 12 triangles.
#[rustfmt::skip]
pub fn cuboid(width: Real, length: Real, height: Real, color: Color) -> Mesh {
    let sx = width * 0.5;
    let sy = length * 0.5;
    let sz = height * 0.5;
    // (normal, corners) for each face, two triangles apiece
    let faces: [(Vec3, [Vec3; 6]); 6] = [
        (-Vec3::z(), [
            vector![-sx, -sy, -sz], vector![-sx,  sy, -sz], vector![ sx,  sy, -sz],
            vector![ sx,  sy, -sz], vector![ sx, -sy, -sz], vector![-sx, -sy, -sz],
        ]),
        (Vec3::z(), [
            vector![-sx, -sy,  sz], vector![ sx, -sy,  sz], vector![ sx,  sy,  sz],
            vector![ sx,  sy,  sz], vector![-sx,  sy,  sz], vector![-sx, -sy,  sz],
        ]),
        (-Vec3::y(), [
            vector![-sx, -sy, -sz], vector![ sx, -sy, -sz], vector![ sx, -sy,  sz],
            vector![ sx, -sy,  sz], vector![-sx, -sy,  sz], vector![-sx, -sy, -sz],
        ]),
        (Vec3::x(), [
            vector![ sx, -sy, -sz], vector![ sx,  sy, -sz], vector![ sx,  sy,  sz],
            vector![ sx,  sy,  sz], vector![ sx, -sy,  sz], vector![ sx, -sy, -sz],
        ]),
        (Vec3::y(), [
            vector![ sx,  sy, -sz], vector![-sx,  sy, -sz], vector![-sx,  sy,  sz],
            vector![-sx,  sy,  sz], vector![ sx,  sy,  sz], vector![ sx,  sy, -sz],
        ]),
        (-Vec3::x(), [
            vector![-sx,  sy, -sz], vector![-sx, -sy, -sz], vector![-sx, -sy,  sz],
            vector![-sx, -sy,  sz], vector![-sx,  sy,  sz], vector![-sx,  sy, -sz],
        ]),
    ];
    let mut out = Vec::with_capacity(36);
    for (n, corners) in faces {
        for p in corners {
            push(&mut out, p, n, color);
        }
    }
    finish("box", out)
}

/// A closed cylinder of `radius` around the Z axis, `height` tall and centered on the origin.
///
/// Each of the `resolution` angular segments contributes one bottom cap triangle (facing `-Z`),
/// two side triangles, and one top cap triangle (facing `+Z`). Side normals point straight out
/// from the axis.
///
/// # Errors
///
/// * [Error::InvalidParameter] if `resolution` is 0
pub fn cylinder(radius: Real, height: Real, resolution: u32, color: Color) -> Result<Mesh, Error> {
    if resolution == 0 {
        return Err(Error::InvalidParameter {
            name: "resolution",
            reason: "a cylinder needs at least one segment",
        });
    }

    let top = height * 0.5;
    let bottom = -height * 0.5;
    let down = -Vec3::z();
    let up = Vec3::z();

    let mut out = Vec::with_capacity(resolution as usize * 12);
    for i in 0..resolution {
        let (s1, c1) = (TAU * i as Real / resolution as Real).sin_cos();
        let (s2, c2) = (TAU * (i + 1) as Real / resolution as Real).sin_cos();
        let n1 = vector![c1, s1, 0.0];
        let n2 = vector![c2, s2, 0.0];
        let rim = |c: Real, s: Real, z: Real| vector![c * radius, s * radius, z];

        push(&mut out, vector![0.0, 0.0, bottom], down, color);
        push(&mut out, rim(c2, s2, bottom), down, color);
        push(&mut out, rim(c1, s1, bottom), down, color);

        push(&mut out, rim(c1, s1, bottom), n1, color);
        push(&mut out, rim(c2, s2, bottom), n2, color);
        push(&mut out, rim(c1, s1, top), n1, color);
        push(&mut out, rim(c1, s1, top), n1, color);
        push(&mut out, rim(c2, s2, bottom), n2, color);
        push(&mut out, rim(c2, s2, top), n2, color);

        push(&mut out, vector![0.0, 0.0, top], up, color);
        push(&mut out, rim(c1, s1, top), up, color);
        push(&mut out, rim(c2, s2, top), up, color);
    }
    Ok(finish("cylinder", out))
}

/// A latitude/longitude sphere of `radius` centered on the origin, with smooth normals.
///
/// `resolution` is the number of longitude segments, clamped to [UV_SPHERE_RESOLUTION]; there are
/// `resolution / 2` latitude bands. The bands touching the poles emit one triangle per segment,
/// all others two.
pub fn uv_sphere(radius: Real, resolution: u32, color: Color) -> Mesh {
    let resolution = resolution.clamp(UV_SPHERE_RESOLUTION.0, UV_SPHERE_RESOLUTION.1);
    let half = resolution / 2;

    // a unit direction doubles as the normal
    let at = |c_lon: Real, s_lon: Real, c_lat: Real, s_lat: Real| -> Vertex {
        let n = vector![c_lon * c_lat, s_lon * c_lat, s_lat];
        Vertex::new(n * radius, n, color)
    };

    let mut out = Vec::with_capacity(uv_sphere_vertex_count(resolution));
    for i in 0..half {
        let (s3, c3) = (PI * i as Real / half as Real - FRAC_PI_2).sin_cos();
        let (s4, c4) = (PI * (i + 1) as Real / half as Real - FRAC_PI_2).sin_cos();
        for j in 0..resolution {
            let (s1, c1) = (TAU * j as Real / resolution as Real).sin_cos();
            let (s2, c2) = (TAU * (j + 1) as Real / resolution as Real).sin_cos();
            if i != 0 {
                out.push(at(c1, s1, c3, s3));
                out.push(at(c2, s2, c3, s3));
                out.push(at(c1, s1, c4, s4));
            }
            if i != half - 1 {
                out.push(at(c1, s1, c4, s4));
                out.push(at(c2, s2, c3, s3));
                out.push(at(c2, s2, c4, s4));
            }
        }
    }
    finish("uvsphere", out)
}

/// Number of vertices [uv_sphere] emits for an (already clamped) `resolution`.
#[inline]
pub fn uv_sphere_vertex_count(resolution: u32) -> usize {
    let half = (resolution / 2) as usize;
    6 * resolution as usize * half.saturating_sub(1)
}

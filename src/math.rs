//! Vector & quaternion primitives.
//!
//! Rotations are plain (not necessarily unit) [Quaternions](Quaternion). Nothing in this module
//! renormalizes a rotation on its own; callers are expected to hand in normalized values.

mod sample;
mod transform;

pub use sample::*;
pub use transform::*;

/// Scalar type used for all geometry.
pub type Real = f32;

/// A point, direction, or color.
pub type Vec3 = nalgebra::Vector3<Real>;

/// A rotation.
pub type Quat = nalgebra::Quaternion<Real>;

/// Returned when asked to normalize a vector which has no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("attempted to normalize a degenerate (zero-length or non-finite) vector")]
pub struct DegenerateVector;

/// Scale `v` to unit length.
///
/// # Panics
///
/// Never; but if `v` is the zero vector the result is full of NaNs. Use [try_normalize] when `v`
/// isn't known to be non-zero.
#[inline]
pub fn normalize(v: &Vec3) -> Vec3 {
    v * (1.0 / v.norm())
}

/// Scale `v` to unit length.
///
/// # Errors
///
/// * [DegenerateVector] if `‖v‖` is zero or not finite
#[inline]
pub fn try_normalize(v: &Vec3) -> Result<Vec3, DegenerateVector> {
    let len = v.norm();
    if len == 0.0 || !len.is_finite() {
        return Err(DegenerateVector);
    }
    Ok(v * (1.0 / len))
}

/// The rotation which leaves everything where it is.
#[inline]
pub fn identity_rotation() -> Quat {
    Quat::identity()
}

/// Rotate `v` by `q`.
///
/// Uses the double cross-product form `v + w·t + u × t`, where `u` is the vector part of `q` and
/// `t = 2(u × v)`; no rotation matrix is built.
#[inline]
pub fn rotate(q: &Quat, v: &Vec3) -> Vec3 {
    let u = q.imag();
    let t = u.cross(v) * 2.0;
    v + t * q.w + u.cross(&t)
}

/// Hamilton product `a * b`: the rotation which applies `b` first, then `a`.
#[inline]
pub fn compose_rotation(a: &Quat, b: &Quat) -> Quat {
    a * b
}

/// Build a rotation from Euler angles (radians).
///
/// The result is `qx * (qy * qz)`, so Z is applied first, then Y, then X.
pub fn from_euler(x: Real, y: Real, z: Real) -> Quat {
    let (sx, cx) = (x * 0.5).sin_cos();
    let (sy, cy) = (y * 0.5).sin_cos();
    let (sz, cz) = (z * 0.5).sin_cos();
    let qx = Quat::new(cx, sx, 0.0, 0.0);
    let qy = Quat::new(cy, 0.0, sy, 0.0);
    let qz = Quat::new(cz, 0.0, 0.0, sz);
    compose_rotation(&qx, &compose_rotation(&qy, &qz))
}

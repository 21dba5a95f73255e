use std::f32::consts::TAU;

use super::{Quat, Real, Vec3};

/// A supplier of uniformly distributed floats in `[0, 1)`.
///
/// Implemented for any `FnMut() -> Real`, so a closure around whatever generator the caller
/// prefers is enough; with the `rand` feature, [RngSource] adapts a [rand::Rng].
pub trait UniformSource {
    /// Draw the next value in `[0, 1)`.
    fn uniform(&mut self) -> Real;
}

impl<F: FnMut() -> Real> UniformSource for F {
    #[inline]
    fn uniform(&mut self) -> Real {
        self()
    }
}

/// Adapts a [rand::Rng] into a [UniformSource].
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

#[cfg(feature = "rand")]
impl<R: rand::Rng> UniformSource for RngSource<R> {
    #[inline]
    fn uniform(&mut self) -> Real {
        self.0.random::<Real>()
    }
}

/// Map three independent uniform samples in `[0, 1)` onto a rotation uniformly distributed over
/// SO(3).
pub fn uniform_rotation(u1: Real, u2: Real, u3: Real) -> Quat {
    let a = (1.0 - u1).sqrt();
    let b = u1.sqrt();
    let (s2, c2) = (TAU * u2).sin_cos();
    let (s3, c3) = (TAU * u3).sin_cos();
    Quat::new(b * c3, a * s2, a * c2, b * s3)
}

/// Map three independent uniform samples in `[0, 1)` onto a direction uniformly distributed over
/// the unit sphere.
///
/// This is the Z basis vector of [uniform_rotation]`(u1, u2, u3)`.
pub fn uniform_axis(u1: Real, u2: Real, u3: Real) -> Vec3 {
    let q = uniform_rotation(u1, u2, u3);
    Vec3::new(
        (q.i * q.k + q.j * q.w) * 2.0,
        (q.j * q.k - q.i * q.w) * 2.0,
        1.0 - (q.i * q.i + q.j * q.j) * 2.0,
    )
}

/// Draw a uniformly distributed rotation, consuming three values from `source`.
pub fn random_rotation(source: &mut impl UniformSource) -> Quat {
    let u1 = source.uniform();
    let u2 = source.uniform();
    let u3 = source.uniform();
    uniform_rotation(u1, u2, u3)
}

/// Draw a uniformly distributed unit direction, consuming three values from `source`.
pub fn random_axis(source: &mut impl UniformSource) -> Vec3 {
    let u1 = source.uniform();
    let u2 = source.uniform();
    let u3 = source.uniform();
    uniform_axis(u1, u2, u3)
}

use std::ops::{Mul, MulAssign};

use super::{compose_rotation, identity_rotation, rotate, Quat, Real, Vec3};

/// A similarity transform: translation, rotation, and *uniform* scale.
///
/// Applied to a point as `T · R · S`. Non-uniform scale & shear are unrepresentable, which is what
/// lets normals be transformed by the rotation alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Real,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub fn new(position: Vec3, rotation: Quat, scale: Real) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// `{(0, 0, 0), (0, 0, 0, 1), 1}`
    #[inline]
    pub fn identity() -> Self {
        Self::new(Vec3::zeros(), identity_rotation(), 1.0)
    }

    #[inline]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    #[inline]
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::identity()
        }
    }

    #[inline]
    pub fn from_scale(scale: Real) -> Self {
        Self {
            scale,
            ..Self::identity()
        }
    }

    /// Rotate, then scale, then translate `p`.
    #[inline]
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        self.position + rotate(&self.rotation, p) * self.scale
    }

    /// Rotate `n`. Scale & translation don't apply to directions.
    #[inline]
    pub fn transform_normal(&self, n: &Vec3) -> Vec3 {
        rotate(&self.rotation, n)
    }

    /// Express `child` (a transform relative to `self`) in the space `self` is relative to.
    ///
    /// This is the parent → child rule used wherever a world transform is derived from a local
    /// one: `world(child) = world(parent).compose(local(child))`.
    #[inline]
    pub fn compose(&self, child: &Transform) -> Transform {
        Transform {
            position: self.transform_point(&child.position),
            rotation: compose_rotation(&self.rotation, &child.rotation),
            scale: self.scale * child.scale,
        }
    }
}

meshbake_common::impl_op!(Mul, mul -> Transform, MulAssign, mul_assign;
    self: Transform, rhs: Transform;
    self.compose(&rhs);
    *self = self.compose(&rhs));

meshbake_common::impl_op!(. Mul, mul -> Vec3;
    self: Transform, rhs: Vec3;
    self.transform_point(&rhs));

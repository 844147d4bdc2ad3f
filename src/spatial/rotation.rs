use crate::math::{Point2, Point3, Real, Rotation2, Rotation3, Vector2, Vector3};

/// The rotation matrix `Rz(yaw) · Ry(pitch) · Rx(roll)`.
///
/// Roll is applied first, then pitch, then yaw, all around the fixed world axes.
#[inline]
pub fn rotation_matrix(yaw: Real, pitch: Real, roll: Real) -> Rotation3<Real> {
    Rotation3::from_euler_angles(roll, pitch, yaw)
}

/// Values that can be rotated around the origin by Euler angles.
///
/// Planar values only use `yaw` and ignore `pitch` and `roll`.
pub trait Rotate: Sized {
    /// Returns a copy of `self` rotated by the given yaw, pitch and roll.
    fn rotated(&self, yaw: Real, pitch: Real, roll: Real) -> Self;

    /// Rotates `self` in-place by the given yaw, pitch and roll.
    #[inline]
    fn rotate_mut(&mut self, yaw: Real, pitch: Real, roll: Real) {
        *self = self.rotated(yaw, pitch, roll);
    }
}

impl Rotate for Vector2<Real> {
    #[inline]
    fn rotated(&self, yaw: Real, _: Real, _: Real) -> Self {
        Rotation2::new(yaw) * self
    }
}

impl Rotate for Point2<Real> {
    #[inline]
    fn rotated(&self, yaw: Real, _: Real, _: Real) -> Self {
        Rotation2::new(yaw) * self
    }
}

impl Rotate for Vector3<Real> {
    #[inline]
    fn rotated(&self, yaw: Real, pitch: Real, roll: Real) -> Self {
        rotation_matrix(yaw, pitch, roll) * self
    }
}

impl Rotate for Point3<Real> {
    #[inline]
    fn rotated(&self, yaw: Real, pitch: Real, roll: Real) -> Self {
        rotation_matrix(yaw, pitch, roll) * self
    }
}

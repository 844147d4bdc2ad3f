use crate::math::{Point2, Point3, Real};
use crate::utils::{fast_inv_sqrt, normalize_angle};
use na::SVector;

/// Bearings between two points.
///
/// All results are in radians and normalized to `(-π, π]`.
pub trait PointOps {
    /// Angle of `other - self` around the Z axis, measured from the X axis.
    fn yaw_to(&self, other: &Self) -> Real;

    /// Elevation of `other - self` above the XY plane.
    ///
    /// Always zero in 2D.
    fn pitch_to(&self, other: &Self) -> Real;

    /// Angle of `other - self` around the X axis, measured from the Z axis in the YZ plane.
    ///
    /// Always zero in 2D.
    fn roll_to(&self, other: &Self) -> Real;

    /// The yaw and pitch of `other` seen from `self`.
    #[inline]
    fn angle_to(&self, other: &Self) -> (Real, Real) {
        (self.yaw_to(other), self.pitch_to(other))
    }
}

impl PointOps for Point2<Real> {
    #[inline]
    fn yaw_to(&self, other: &Self) -> Real {
        let dir = other - self;
        normalize_angle(dir.y.atan2(dir.x))
    }

    #[inline]
    fn pitch_to(&self, _: &Self) -> Real {
        0.0
    }

    #[inline]
    fn roll_to(&self, _: &Self) -> Real {
        0.0
    }
}

impl PointOps for Point3<Real> {
    #[inline]
    fn yaw_to(&self, other: &Self) -> Real {
        let dir = other - self;
        normalize_angle(dir.y.atan2(dir.x))
    }

    #[inline]
    fn pitch_to(&self, other: &Self) -> Real {
        let dir = other - self;
        normalize_angle(dir.z.atan2(dir.x.hypot(dir.y)))
    }

    #[inline]
    fn roll_to(&self, other: &Self) -> Real {
        let dir = other - self;
        normalize_angle(dir.y.atan2(dir.z))
    }
}

/// Extra operations on vectors.
pub trait VectorOps: Sized {
    /// Normalizes this vector with the fast inverse square root.
    ///
    /// Vectors whose squared length is within 1% of unity are considered normalized
    /// already and are returned unchanged, and so are zero vectors.
    fn fast_normalize(&self) -> Self;

    /// Normalizes this vector in-place with the fast inverse square root.
    #[inline]
    fn fast_normalize_mut(&mut self) {
        *self = self.fast_normalize();
    }
}

impl<const D: usize> VectorOps for SVector<Real, D> {
    fn fast_normalize(&self) -> Self {
        let sq_len = self.norm_squared();

        if sq_len == 0.0 || (0.99..=1.01).contains(&sq_len) {
            *self
        } else {
            self * fast_inv_sqrt(sq_len)
        }
    }
}

use crate::math::{Point2, Point3, Real, Vector2, Vector3};
use crate::spatial::{quantize, Pose2, Pose3, Quantize, Rotate};
use std::f32::consts::FRAC_2_PI;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// Index of the symmetry axis closest to the bearing of `position` seen from the origin.
///
/// Returns `0` for the X axis and `1` for the Y axis.
fn symmetry_plane(bearing: Real) -> usize {
    ((bearing * FRAC_2_PI).round().abs() as usize) % 2
}

/// A planar pose together with its velocities.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default)]
pub struct State2 {
    /// The pose of the body.
    pub pose: Pose2,
    /// The linear velocity along X.
    pub vx: Real,
    /// The linear velocity along Y.
    pub vy: Real,
    /// The angular velocity around Z.
    pub w: Real,
}

impl State2 {
    /// Creates a new state from its pose and velocities.
    #[inline]
    pub fn new(pose: Pose2, vx: Real, vy: Real, w: Real) -> Self {
        State2 { pose, vx, vy, w }
    }

    /// A state at rest with the given pose.
    #[inline]
    pub fn at_rest(pose: Pose2) -> Self {
        Self::new(pose, 0.0, 0.0, 0.0)
    }

    /// The position of the body.
    #[inline]
    pub fn position(&self) -> &Point2<Real> {
        &self.pose.position
    }

    /// The reflection of this state across the XZ plane.
    pub fn symmetric_plane_xz(&self) -> Self {
        Self::new(self.pose.symmetric_plane_xz(), self.vx, -self.vy, -self.w)
    }

    /// The reflection of this state across the YZ plane.
    pub fn symmetric_plane_yz(&self) -> Self {
        Self::new(self.pose.symmetric_plane_yz(), self.vx, -self.vy, -self.w)
    }

    /// The reflection of this state across the XY plane, i.e., a copy of `self`.
    pub fn symmetric_plane_xy(&self) -> Self {
        *self
    }

    /// The symmetry axis closest to the bearing of this state's position from the origin.
    ///
    /// Returns `0` for the X axis and `1` for the Y axis.
    pub fn symmetry_plane(&self) -> usize {
        symmetry_plane(self.pose.y().atan2(self.pose.x()))
    }
}

impl Rotate for State2 {
    /// Rotates the pose. Velocities are kept unchanged.
    fn rotated(&self, yaw: Real, pitch: Real, roll: Real) -> Self {
        State2 {
            pose: self.pose.rotated(yaw, pitch, roll),
            ..*self
        }
    }
}

impl Add<Vector2<Real>> for State2 {
    type Output = State2;

    #[inline]
    fn add(self, rhs: Vector2<Real>) -> State2 {
        State2 {
            pose: self.pose + rhs,
            ..self
        }
    }
}

impl Sub<Vector2<Real>> for State2 {
    type Output = State2;

    #[inline]
    fn sub(self, rhs: Vector2<Real>) -> State2 {
        State2 {
            pose: self.pose - rhs,
            ..self
        }
    }
}

impl Quantize for State2 {
    type Key = ([i64; 3], [i64; 3]);

    #[inline]
    fn quantized(&self) -> Self::Key {
        (
            self.pose.quantized(),
            [quantize(self.vx), quantize(self.vy), quantize(self.w)],
        )
    }
}

impl PartialEq for State2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Eq for State2 {}

impl Hash for State2 {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantized().hash(state)
    }
}

impl fmt::Display for State2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[x={}, y={}, yaw={}, vx={}, vy={}, w={}]",
            self.pose.x(),
            self.pose.y(),
            self.pose.yaw,
            self.vx,
            self.vy,
            self.w
        )
    }
}

/// A spatial pose together with its linear and angular velocities.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default)]
pub struct State3 {
    /// The pose of the body.
    pub pose: Pose3,
    /// The linear velocity.
    pub linvel: Vector3<Real>,
    /// The angular velocities around the yaw, pitch and roll axes, in that order.
    pub angvel: Vector3<Real>,
}

impl State3 {
    /// Creates a new state from its pose and velocities.
    #[inline]
    pub fn new(pose: Pose3, linvel: Vector3<Real>, angvel: Vector3<Real>) -> Self {
        State3 {
            pose,
            linvel,
            angvel,
        }
    }

    /// A state at rest with the given pose.
    #[inline]
    pub fn at_rest(pose: Pose3) -> Self {
        Self::new(pose, Vector3::zeros(), Vector3::zeros())
    }

    /// The position of the body.
    #[inline]
    pub fn position(&self) -> &Point3<Real> {
        &self.pose.position
    }

    /// The reflection of this state across the XZ plane.
    pub fn symmetric_plane_xz(&self) -> Self {
        Self::new(
            self.pose.symmetric_plane_xz(),
            Vector3::new(self.linvel.x, -self.linvel.y, self.linvel.z),
            Vector3::new(-self.angvel.x, self.angvel.y, -self.angvel.z),
        )
    }

    /// The reflection of this state across the YZ plane.
    pub fn symmetric_plane_yz(&self) -> Self {
        Self::new(
            self.pose.symmetric_plane_yz(),
            Vector3::new(self.linvel.x, -self.linvel.y, self.linvel.z),
            Vector3::new(-self.angvel.x, self.angvel.y, -self.angvel.z),
        )
    }

    /// The reflection of this state across the XY plane.
    pub fn symmetric_plane_xy(&self) -> Self {
        Self::new(
            self.pose.symmetric_plane_xy(),
            Vector3::new(self.linvel.x, self.linvel.y, -self.linvel.z),
            Vector3::new(self.angvel.x, -self.angvel.y, self.angvel.z),
        )
    }

    /// The symmetry axis closest to the planar bearing of this state's position from the origin.
    ///
    /// Returns `0` for the X axis and `1` for the Y axis.
    pub fn symmetry_plane(&self) -> usize {
        symmetry_plane(self.pose.y().atan2(self.pose.x()))
    }
}

impl Rotate for State3 {
    /// Rotates the pose. Velocities are kept unchanged.
    fn rotated(&self, yaw: Real, pitch: Real, roll: Real) -> Self {
        State3 {
            pose: self.pose.rotated(yaw, pitch, roll),
            ..*self
        }
    }
}

impl Add<Vector3<Real>> for State3 {
    type Output = State3;

    #[inline]
    fn add(self, rhs: Vector3<Real>) -> State3 {
        State3 {
            pose: self.pose + rhs,
            ..self
        }
    }
}

impl Sub<Vector3<Real>> for State3 {
    type Output = State3;

    #[inline]
    fn sub(self, rhs: Vector3<Real>) -> State3 {
        State3 {
            pose: self.pose - rhs,
            ..self
        }
    }
}

impl Quantize for State3 {
    type Key = ([i64; 6], [i64; 3], [i64; 3]);

    #[inline]
    fn quantized(&self) -> Self::Key {
        (
            self.pose.quantized(),
            self.linvel.quantized(),
            self.angvel.quantized(),
        )
    }
}

impl PartialEq for State3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Eq for State3 {}

impl Hash for State3 {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantized().hash(state)
    }
}

use crate::math::{Point2, Point3, Real, Rotation2, Rotation3, Vector2, Vector3};
use crate::spatial::{quantize, rotation_matrix, PointOps, Quantize, Rotate};
use crate::utils::normalize_angle;
use std::f32::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A position on the plane together with a heading.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default)]
pub struct Pose2 {
    /// The position of the rotation center.
    pub position: Point2<Real>,
    /// The heading, in radians, counter-clockwise from the X axis.
    pub yaw: Real,
}

impl Pose2 {
    /// Creates a new pose from its coordinates and heading.
    #[inline]
    pub fn new(x: Real, y: Real, yaw: Real) -> Self {
        Self::from_parts(Point2::new(x, y), yaw)
    }

    /// Creates a new pose from its position and heading.
    #[inline]
    pub fn from_parts(position: Point2<Real>, yaw: Real) -> Self {
        Pose2 { position, yaw }
    }

    /// The pose at the origin, heading along the X axis.
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// The X coordinate of the position.
    #[inline]
    pub fn x(&self) -> Real {
        self.position.x
    }

    /// The Y coordinate of the position.
    #[inline]
    pub fn y(&self) -> Real {
        self.position.y
    }

    /// The rotation turning the local frame of this pose into the world frame.
    #[inline]
    pub fn rotation(&self) -> Rotation2<Real> {
        Rotation2::new(self.yaw)
    }

    /// The bearing of `point` relative to this pose's heading, in `(-π, π]`.
    #[inline]
    pub fn relative_yaw_to(&self, point: &Point2<Real>) -> Real {
        normalize_angle(self.position.yaw_to(point) - self.yaw)
    }

    /// Maps a point expressed in the local frame of this pose to the world frame.
    #[inline]
    pub fn transform_point(&self, local: &Point2<Real>) -> Point2<Real> {
        self.position + self.rotation() * local.coords
    }

    /// The reflection of this pose across the XZ plane.
    pub fn symmetric_plane_xz(&self) -> Self {
        Self::new(self.x(), -self.y(), normalize_angle(-self.yaw))
    }

    /// The reflection of this pose across the YZ plane.
    pub fn symmetric_plane_yz(&self) -> Self {
        Self::new(-self.x(), self.y(), normalize_angle(PI - self.yaw))
    }

    /// The reflection of this pose across the XY plane, i.e., a copy of `self`.
    pub fn symmetric_plane_xy(&self) -> Self {
        *self
    }
}

impl Rotate for Pose2 {
    fn rotated(&self, yaw: Real, pitch: Real, roll: Real) -> Self {
        Self::from_parts(
            self.position.rotated(yaw, pitch, roll),
            normalize_angle(self.yaw + yaw),
        )
    }
}

impl Add<Vector2<Real>> for Pose2 {
    type Output = Pose2;

    #[inline]
    fn add(self, rhs: Vector2<Real>) -> Pose2 {
        Pose2::from_parts(self.position + rhs, self.yaw)
    }
}

impl Sub<Vector2<Real>> for Pose2 {
    type Output = Pose2;

    #[inline]
    fn sub(self, rhs: Vector2<Real>) -> Pose2 {
        Pose2::from_parts(self.position - rhs, self.yaw)
    }
}

impl AddAssign<Vector2<Real>> for Pose2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2<Real>) {
        self.position += rhs;
    }
}

impl SubAssign<Vector2<Real>> for Pose2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2<Real>) {
        self.position -= rhs;
    }
}

impl Quantize for Pose2 {
    type Key = [i64; 3];

    #[inline]
    fn quantized(&self) -> [i64; 3] {
        [quantize(self.x()), quantize(self.y()), quantize(self.yaw)]
    }
}

impl PartialEq for Pose2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Eq for Pose2 {}

impl Hash for Pose2 {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantized().hash(state)
    }
}

impl fmt::Display for Pose2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[x={}, y={}, yaw={}]", self.x(), self.y(), self.yaw)
    }
}

/// A position in space together with a yaw-pitch-roll orientation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default)]
pub struct Pose3 {
    /// The position of the rotation center.
    pub position: Point3<Real>,
    /// The rotation around the Z axis, in radians.
    pub yaw: Real,
    /// The rotation around the Y axis, in radians. Positive values tilt the X axis downwards.
    pub pitch: Real,
    /// The rotation around the X axis, in radians.
    pub roll: Real,
}

impl Pose3 {
    /// Creates a new pose from its coordinates and orientation.
    #[inline]
    pub fn new(x: Real, y: Real, z: Real, yaw: Real, pitch: Real, roll: Real) -> Self {
        Self::from_parts(Point3::new(x, y, z), yaw, pitch, roll)
    }

    /// Creates a new pose from its position and orientation.
    #[inline]
    pub fn from_parts(position: Point3<Real>, yaw: Real, pitch: Real, roll: Real) -> Self {
        Pose3 {
            position,
            yaw,
            pitch,
            roll,
        }
    }

    /// The pose at the origin with the identity orientation.
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// The X coordinate of the position.
    #[inline]
    pub fn x(&self) -> Real {
        self.position.x
    }

    /// The Y coordinate of the position.
    #[inline]
    pub fn y(&self) -> Real {
        self.position.y
    }

    /// The Z coordinate of the position.
    #[inline]
    pub fn z(&self) -> Real {
        self.position.z
    }

    /// The rotation `Rz(yaw) · Ry(pitch) · Rx(roll)` of this pose.
    #[inline]
    pub fn rotation(&self) -> Rotation3<Real> {
        rotation_matrix(self.yaw, self.pitch, self.roll)
    }

    /// Maps a point expressed in the local frame of this pose to the world frame.
    #[inline]
    pub fn transform_point(&self, local: &Point3<Real>) -> Point3<Real> {
        self.position + self.rotation() * local.coords
    }

    /// The reflection of this pose across the XZ plane.
    pub fn symmetric_plane_xz(&self) -> Self {
        Self::new(
            self.x(),
            -self.y(),
            self.z(),
            normalize_angle(-self.yaw),
            self.pitch,
            normalize_angle(-self.roll),
        )
    }

    /// The reflection of this pose across the YZ plane.
    pub fn symmetric_plane_yz(&self) -> Self {
        Self::new(
            -self.x(),
            self.y(),
            self.z(),
            normalize_angle(PI - self.yaw),
            self.pitch,
            self.roll,
        )
    }

    /// The reflection of this pose across the XY plane.
    pub fn symmetric_plane_xy(&self) -> Self {
        Self::new(
            self.x(),
            self.y(),
            -self.z(),
            self.yaw,
            normalize_angle(-self.pitch),
            normalize_angle(-self.roll),
        )
    }
}

impl Rotate for Pose3 {
    /// Rotates the position around the origin and composes the orientation additively.
    ///
    /// Each composed angle keeps its sign and is normalized to `(-π, π]`.
    fn rotated(&self, yaw: Real, pitch: Real, roll: Real) -> Self {
        Self::from_parts(
            self.position.rotated(yaw, pitch, roll),
            normalize_angle(self.yaw + yaw),
            normalize_angle(self.pitch + pitch),
            normalize_angle(self.roll + roll),
        )
    }
}

impl Add<Vector3<Real>> for Pose3 {
    type Output = Pose3;

    #[inline]
    fn add(self, rhs: Vector3<Real>) -> Pose3 {
        Pose3 {
            position: self.position + rhs,
            ..self
        }
    }
}

impl Sub<Vector3<Real>> for Pose3 {
    type Output = Pose3;

    #[inline]
    fn sub(self, rhs: Vector3<Real>) -> Pose3 {
        Pose3 {
            position: self.position - rhs,
            ..self
        }
    }
}

impl AddAssign<Vector3<Real>> for Pose3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3<Real>) {
        self.position += rhs;
    }
}

impl SubAssign<Vector3<Real>> for Pose3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3<Real>) {
        self.position -= rhs;
    }
}

impl Quantize for Pose3 {
    type Key = [i64; 6];

    #[inline]
    fn quantized(&self) -> [i64; 6] {
        [
            quantize(self.x()),
            quantize(self.y()),
            quantize(self.z()),
            quantize(self.yaw),
            quantize(self.pitch),
            quantize(self.roll),
        ]
    }
}

impl PartialEq for Pose3 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Eq for Pose3 {}

impl Hash for Pose3 {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantized().hash(state)
    }
}

impl fmt::Display for Pose3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[x={}, y={}, z={}, yaw={}, pitch={}, roll={}]",
            self.x(),
            self.y(),
            self.z(),
            self.yaw,
            self.pitch,
            self.roll
        )
    }
}

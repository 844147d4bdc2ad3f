use crate::math::{Matrix2, Matrix3, Point2, Point3, Real, Vector2, Vector3};
use crate::shape::{AsymmetricRectangle, Circle, Cuboid, Rectangle, ShapeError, Sphere};
use crate::spatial::{Pose2, Pose3};
use arrayvec::ArrayVec;
use downcast_rs::{impl_downcast, DowncastSync};
use std::fmt;
use std::str::FromStr;

/// The maximum number of vertices of a spatial shape.
pub const MAX_VERTICES_3D: usize = 8;

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A circle.
    Circle,
    /// A sphere.
    Sphere,
    /// A rectangle centered on its rotation center.
    Rectangle,
    /// A rectangle with independent distances from the rotation center to each side.
    AsymmetricRectangle,
    /// A box centered on its rotation center.
    Cuboid,
    /// A custom user-defined shape.
    Custom,
}

impl ShapeType {
    /// The configuration tag of this shape type.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeType::Circle => "circle",
            ShapeType::Sphere => "sphere",
            ShapeType::Rectangle => "rectangle",
            ShapeType::AsymmetricRectangle => "asymmetric_rectangle",
            ShapeType::Cuboid => "cuboid",
            ShapeType::Custom => "custom",
        }
    }

    /// The number of dimensions of the shapes of this type, if known.
    pub fn dimension(self) -> Option<usize> {
        match self {
            ShapeType::Circle | ShapeType::Rectangle | ShapeType::AsymmetricRectangle => Some(2),
            ShapeType::Sphere | ShapeType::Cuboid => Some(3),
            ShapeType::Custom => None,
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeType {
    type Err = ShapeError;

    fn from_str(tag: &str) -> Result<Self, ShapeError> {
        match tag {
            "" => Err(ShapeError::MissingShapeType),
            "circle" => Ok(ShapeType::Circle),
            "sphere" => Ok(ShapeType::Sphere),
            "rectangle" => Ok(ShapeType::Rectangle),
            "asymmetric_rectangle" => Ok(ShapeType::AsymmetricRectangle),
            "cuboid" => Ok(ShapeType::Cuboid),
            _ => Err(ShapeError::UnknownShapeType(tag.to_string())),
        }
    }
}

/// Enum representing the shape with its actual type.
#[derive(Copy, Clone, Debug)]
pub enum TypedShape<'a> {
    /// A circle.
    Circle(&'a Circle),
    /// A sphere.
    Sphere(&'a Sphere),
    /// A rectangle centered on its rotation center.
    Rectangle(&'a Rectangle),
    /// A rectangle with independent distances to each side.
    AsymmetricRectangle(&'a AsymmetricRectangle),
    /// A box centered on its rotation center.
    Cuboid(&'a Cuboid),
    /// A custom user-defined shape.
    Custom,
}

/// The footprint of a rigid body moving on the plane.
///
/// Relative angles are measured counter-clockwise from the body's heading. Every border
/// query is total: angles outside of `(-π, π]` are normalized first.
pub trait Shape2d: DowncastSync + fmt::Debug {
    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;

    /// The smallest distance from the rotation center to the border.
    fn min_radius(&self) -> Real;

    /// The largest distance from the rotation center to the border.
    fn max_radius(&self) -> Real;

    /// Distances from the centroid to the border along the local X and Y axes.
    fn half_extents(&self) -> Vector2<Real>;

    /// The border point at the given relative yaw, in the local frame of the body.
    fn border_point_at_relative_angle(&self, yaw: Real) -> Point2<Real>;

    /// The distance from the rotation center to the border at the given relative yaw.
    ///
    /// This is always within `[self.min_radius(), self.max_radius()]`.
    fn border_distance_at_relative_angle(&self, yaw: Real) -> Real;

    /// The four characteristic vertices of this shape placed at `pose`, in world coordinates.
    fn vertices_at(&self, pose: &Pose2) -> [Point2<Real>; 4];

    /// The local X and Y axes of this shape placed at `pose`, in world coordinates.
    fn axes_at(&self, pose: &Pose2) -> [Vector2<Real>; 2] {
        let rot = pose.rotation();
        [rot * Vector2::x(), rot * Vector2::y()]
    }

    /// The rotation matrix whose columns are the axes returned by [`Self::axes_at`].
    fn axes_matrix_at(&self, pose: &Pose2) -> Matrix2<Real> {
        Matrix2::from_columns(&self.axes_at(pose))
    }

    /// The vector from the border of this shape placed at `pose` to `point`, given the
    /// bearing `angle` of `point` relative to the pose's heading.
    fn distance_vector_to_point_at_angle(
        &self,
        pose: &Pose2,
        point: &Point2<Real>,
        angle: Real,
    ) -> Vector2<Real>;

    /// The vector from the border of this shape placed at `pose` to `point`.
    fn distance_vector_to_point(&self, pose: &Pose2, point: &Point2<Real>) -> Vector2<Real> {
        let angle = pose.relative_yaw_to(point);
        self.distance_vector_to_point_at_angle(pose, point, angle)
    }
}

impl_downcast!(sync Shape2d);

impl dyn Shape2d {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape2d>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a circle, if it is one.
    pub fn as_circle(&self) -> Option<&Circle> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a rectangle, if it is one.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to an asymmetric rectangle, if it is one.
    pub fn as_asymmetric_rectangle(&self) -> Option<&AsymmetricRectangle> {
        self.downcast_ref()
    }
}

/// The footprint of a rigid body moving in space.
///
/// A bearing is given by a relative yaw and a relative pitch. Positive pitches point
/// towards the local `-Z` axis.
pub trait Shape3d: DowncastSync + fmt::Debug {
    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;

    /// The smallest distance from the rotation center to the border.
    fn min_radius(&self) -> Real;

    /// The largest distance from the rotation center to the border.
    fn max_radius(&self) -> Real;

    /// Distances from the centroid to the border along the local X, Y and Z axes.
    fn half_extents(&self) -> Vector3<Real>;

    /// The border point at the given relative yaw and pitch, in the local frame of the body.
    fn border_point_at_relative_angle(&self, yaw: Real, pitch: Real) -> Point3<Real>;

    /// The distance from the rotation center to the border at the given relative yaw and pitch.
    fn border_distance_at_relative_angle(&self, yaw: Real, pitch: Real) -> Real {
        self.border_point_at_relative_angle(yaw, pitch)
            .coords
            .norm()
    }

    /// The characteristic vertices of this shape placed at `pose`, in world coordinates.
    fn vertices_at(&self, pose: &Pose3) -> ArrayVec<Point3<Real>, MAX_VERTICES_3D>;

    /// The local X, Y and Z axes of this shape placed at `pose`, in world coordinates.
    fn axes_at(&self, pose: &Pose3) -> [Vector3<Real>; 3] {
        let rot = pose.rotation();
        [rot * Vector3::x(), rot * Vector3::y(), rot * Vector3::z()]
    }

    /// The rotation matrix whose columns are the axes returned by [`Self::axes_at`].
    fn axes_matrix_at(&self, pose: &Pose3) -> Matrix3<Real> {
        Matrix3::from_columns(&self.axes_at(pose))
    }
}

impl_downcast!(sync Shape3d);

impl dyn Shape3d {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape3d>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a sphere, if it is one.
    pub fn as_sphere(&self) -> Option<&Sphere> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }
}

use crate::math::{Point2, Real, Vector2};
use crate::shape::config::{keys, ConfigSource};
use crate::shape::{Shape2d, ShapeError, ShapeType, TypedShape};
use crate::spatial::Pose2;

/// A circle centered on its rotation center.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Circle {
    /// The radius of the circle.
    pub radius: Real,
}

impl Circle {
    /// Creates a new circle with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Circle {
        Circle { radius }
    }

    /// Builds a circle from the `radius` parameter of `config`.
    pub fn from_config(config: &dyn ConfigSource) -> Result<Self, ShapeError> {
        Ok(Self::new(config.positive_real(keys::RADIUS)?))
    }
}

impl Shape2d for Circle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Circle(self)
    }

    fn min_radius(&self) -> Real {
        self.radius
    }

    fn max_radius(&self) -> Real {
        self.radius
    }

    fn half_extents(&self) -> Vector2<Real> {
        Vector2::repeat(self.radius)
    }

    #[inline]
    fn border_point_at_relative_angle(&self, yaw: Real) -> Point2<Real> {
        let (sin, cos) = yaw.sin_cos();
        Point2::new(self.radius * cos, self.radius * sin)
    }

    #[inline]
    fn border_distance_at_relative_angle(&self, _: Real) -> Real {
        self.radius
    }

    /// The axis-aligned extrema of the circle, which ignore the heading of `pose`.
    fn vertices_at(&self, pose: &Pose2) -> [Point2<Real>; 4] {
        let r = self.radius;
        [
            pose.position + Vector2::new(r, 0.0),
            pose.position + Vector2::new(0.0, r),
            pose.position + Vector2::new(-r, 0.0),
            pose.position + Vector2::new(0.0, -r),
        ]
    }

    fn distance_vector_to_point_at_angle(
        &self,
        pose: &Pose2,
        point: &Point2<Real>,
        angle: Real,
    ) -> Vector2<Real> {
        let border = pose.position + self.border_point_at_relative_angle(pose.yaw + angle).coords;
        point - border
    }
}

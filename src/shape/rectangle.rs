use crate::math::{Point2, Real, Vector2};
use crate::shape::config::{keys, ConfigSource};
use crate::shape::{
    BorderTable, RectangleSectors, RectangleSide, Shape2d, ShapeError, ShapeType, TypedShape,
};
use crate::spatial::Pose2;
use crate::utils::project_point_on_segment2d;

/// Border queries shared by every rectangular footprint.
#[derive(Clone, Debug)]
pub(crate) struct RectangularFootprint {
    pub sectors: RectangleSectors,
    pub table: BorderTable,
}

impl RectangularFootprint {
    pub fn new(sectors: RectangleSectors) -> Self {
        RectangularFootprint {
            table: BorderTable::new(&sectors),
            sectors,
        }
    }

    pub fn side_segment_at(&self, pose: &Pose2, angle: Real) -> (Point2<Real>, Point2<Real>) {
        self.sectors.segment_at(pose, self.sectors.side_at(angle))
    }

    pub fn distance_vector_to_point_at_angle(
        &self,
        pose: &Pose2,
        point: &Point2<Real>,
        angle: Real,
    ) -> Vector2<Real> {
        let (a, b) = self.side_segment_at(pose, angle);
        point - project_point_on_segment2d(point, &a, &b)
    }
}

/// A rectangle whose rotation center is its centroid.
///
/// Border queries are answered from a table precomputed at every integer degree, so
/// they are exact only up to the rounding of the relative angle to the nearest degree.
///
/// The dimensions are fixed at construction since the table is derived from them:
///
/// ```compile_fail
/// use footprint::math::Vector2;
/// use footprint::shape::Rectangle;
///
/// let mut rect = Rectangle::new(2.0, 2.0);
/// rect.half_extents = Vector2::new(5.0, 5.0);
/// ```
#[derive(Clone, Debug)]
pub struct Rectangle {
    half_extents: Vector2<Real>,
    footprint: RectangularFootprint,
}

impl Rectangle {
    /// Creates a new rectangle from its full dimensions along the local X and Y axes.
    #[inline]
    pub fn new(dim_x: Real, dim_y: Real) -> Self {
        Self::from_half_extents(Vector2::new(dim_x, dim_y) / 2.0)
    }

    /// Creates a new rectangle from its half-extents.
    pub fn from_half_extents(half_extents: Vector2<Real>) -> Self {
        Rectangle {
            half_extents,
            footprint: RectangularFootprint::new(RectangleSectors::symmetric(
                half_extents.x,
                half_extents.y,
            )),
        }
    }

    /// Builds a rectangle from the `dimX` and `dimY` parameters of `config`.
    pub fn from_config(config: &dyn ConfigSource) -> Result<Self, ShapeError> {
        let dim_x = config.positive_real(keys::DIM_X)?;
        let dim_y = config.positive_real(keys::DIM_Y)?;
        Ok(Self::new(dim_x, dim_y))
    }

    /// The full dimension along the local X axis.
    #[inline]
    pub fn dim_x(&self) -> Real {
        self.half_extents.x * 2.0
    }

    /// The full dimension along the local Y axis.
    #[inline]
    pub fn dim_y(&self) -> Real {
        self.half_extents.y * 2.0
    }

    /// The angular sectors of the sides of this rectangle.
    #[inline]
    pub fn sectors(&self) -> &RectangleSectors {
        &self.footprint.sectors
    }

    /// The precomputed border of this rectangle.
    #[inline]
    pub fn border_table(&self) -> &BorderTable {
        &self.footprint.table
    }

    /// The side crossed by the ray at the relative angle `angle`.
    #[inline]
    pub fn side_at_relative_angle(&self, angle: Real) -> RectangleSide {
        self.footprint.sectors.side_at(angle)
    }

    /// The world-frame endpoints of the side crossed by the ray at the relative angle `angle`,
    /// for the rectangle placed at `pose`.
    #[inline]
    pub fn side_segment_at(&self, pose: &Pose2, angle: Real) -> (Point2<Real>, Point2<Real>) {
        self.footprint.side_segment_at(pose, angle)
    }
}

impl Shape2d for Rectangle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangle
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Rectangle(self)
    }

    fn min_radius(&self) -> Real {
        self.half_extents.min()
    }

    fn max_radius(&self) -> Real {
        self.half_extents.norm()
    }

    fn half_extents(&self) -> Vector2<Real> {
        self.half_extents
    }

    fn border_point_at_relative_angle(&self, yaw: Real) -> Point2<Real> {
        self.footprint.table.point(yaw)
    }

    fn border_distance_at_relative_angle(&self, yaw: Real) -> Real {
        self.footprint.table.distance(yaw)
    }

    fn vertices_at(&self, pose: &Pose2) -> [Point2<Real>; 4] {
        self.footprint.sectors.corners_at(pose)
    }

    fn distance_vector_to_point_at_angle(
        &self,
        pose: &Pose2,
        point: &Point2<Real>,
        angle: Real,
    ) -> Vector2<Real> {
        self.footprint
            .distance_vector_to_point_at_angle(pose, point, angle)
    }
}

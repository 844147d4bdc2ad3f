use crate::math::{Point2, Real, Vector2};
use crate::shape::config::{keys, ConfigSource};
use crate::shape::rectangle::RectangularFootprint;
use crate::shape::{
    BorderTable, RectangleSectors, RectangleSide, Shape2d, ShapeError, ShapeType, TypedShape,
};
use crate::spatial::Pose2;

/// A rectangle whose rotation center may lie anywhere inside it.
///
/// The rectangle is described by the distances from its rotation center to each of
/// its four sides. Like [`Rectangle`](crate::shape::Rectangle), border queries are
/// answered from a table precomputed at every integer degree.
#[derive(Clone, Debug)]
pub struct AsymmetricRectangle {
    footprint: RectangularFootprint,
}

impl AsymmetricRectangle {
    /// Creates a new rectangle from the distances between its rotation center and its
    /// front (`+X`), back (`-X`), left (`+Y`) and right (`-Y`) sides.
    ///
    /// All the distances are expected to be non-negative.
    pub fn new(positive_x: Real, negative_x: Real, positive_y: Real, negative_y: Real) -> Self {
        AsymmetricRectangle {
            footprint: RectangularFootprint::new(RectangleSectors::new(
                positive_x,
                -negative_x,
                positive_y,
                -negative_y,
            )),
        }
    }

    /// Builds a rectangle from the `positiveX`, `negativeX`, `positiveY` and `negativeY`
    /// parameters of `config`.
    pub fn from_config(config: &dyn ConfigSource) -> Result<Self, ShapeError> {
        let positive_x = config.non_negative_real(keys::POSITIVE_X)?;
        let negative_x = config.non_negative_real(keys::NEGATIVE_X)?;
        let positive_y = config.non_negative_real(keys::POSITIVE_Y)?;
        let negative_y = config.non_negative_real(keys::NEGATIVE_Y)?;
        Ok(Self::new(positive_x, negative_x, positive_y, negative_y))
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

    /// The offset from the rotation center to the centroid, in the local frame.
    pub fn centroid(&self) -> Vector2<Real> {
        let sectors = &self.footprint.sectors;
        Vector2::new(
            sectors.positive_x() + sectors.negative_x(),
            sectors.positive_y() + sectors.negative_y(),
        ) / 2.0
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

impl Shape2d for AsymmetricRectangle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::AsymmetricRectangle
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::AsymmetricRectangle(self)
    }

    fn min_radius(&self) -> Real {
        self.footprint.sectors.min_radius()
    }

    fn max_radius(&self) -> Real {
        self.footprint.sectors.max_radius()
    }

    fn half_extents(&self) -> Vector2<Real> {
        let sectors = &self.footprint.sectors;
        Vector2::new(
            sectors.positive_x() - sectors.negative_x(),
            sectors.positive_y() - sectors.negative_y(),
        ) / 2.0
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

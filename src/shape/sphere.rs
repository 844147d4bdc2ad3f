use crate::math::{Point3, Real, Vector3};
use crate::shape::config::{keys, ConfigSource};
use crate::shape::{Shape3d, ShapeError, ShapeType, TypedShape, MAX_VERTICES_3D};
use crate::spatial::{Pose3, Rotate};
use arrayvec::ArrayVec;

/// A sphere centered on its rotation center.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    /// The radius of the sphere.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given radius.
    #[inline]
    pub fn new(radius: Real) -> Sphere {
        Sphere { radius }
    }

    /// Builds a sphere from the `radius` parameter of `config`.
    pub fn from_config(config: &dyn ConfigSource) -> Result<Self, ShapeError> {
        Ok(Self::new(config.positive_real(keys::RADIUS)?))
    }
}

impl Shape3d for Sphere {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Sphere
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Sphere(self)
    }

    fn min_radius(&self) -> Real {
        self.radius
    }

    fn max_radius(&self) -> Real {
        self.radius
    }

    fn half_extents(&self) -> Vector3<Real> {
        Vector3::repeat(self.radius)
    }

    fn border_point_at_relative_angle(&self, yaw: Real, pitch: Real) -> Point3<Real> {
        Point3::new(self.radius, 0.0, 0.0).rotated(yaw, pitch, 0.0)
    }

    #[inline]
    fn border_distance_at_relative_angle(&self, _: Real, _: Real) -> Real {
        self.radius
    }

    /// The six axis-aligned extrema of the sphere, which ignore the orientation of `pose`.
    fn vertices_at(&self, pose: &Pose3) -> ArrayVec<Point3<Real>, MAX_VERTICES_3D> {
        let r = self.radius;
        [
            Vector3::new(r, 0.0, 0.0),
            Vector3::new(-r, 0.0, 0.0),
            Vector3::new(0.0, r, 0.0),
            Vector3::new(0.0, -r, 0.0),
            Vector3::new(0.0, 0.0, r),
            Vector3::new(0.0, 0.0, -r),
        ]
        .iter()
        .map(|offset| pose.position + offset)
        .collect()
    }
}

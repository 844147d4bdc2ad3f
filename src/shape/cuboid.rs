use crate::math::{Point3, Real, Vector3};
use crate::shape::config::{keys, ConfigSource};
use crate::shape::{
    RectangleSectors, RectangleSide, Shape3d, ShapeError, ShapeType, TypedShape, MAX_VERTICES_3D,
};
use crate::spatial::{Pose3, Rotate};
use crate::utils::{line_plane_intersection, normalize_angle};
use arrayvec::ArrayVec;
use std::f32::consts::FRAC_PI_2;

/// Rays with a pitch smaller than this, in absolute value, only hit the lateral faces.
pub const HORIZONTAL_PITCH_THRESHOLD: Real = 0.01;

/// A box whose rotation center is its centroid.
///
/// The half-extents are fixed at construction, and read through [`Shape3d::half_extents`].
///
/// ```compile_fail
/// use footprint::math::Vector3;
/// use footprint::shape::Cuboid;
///
/// let mut cuboid = Cuboid::new(2.0, 2.0, 2.0);
/// cuboid.half_extents = Vector3::new(5.0, 0.5, 1.0);
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    half_extents: Vector3<Real>,
    sectors: RectangleSectors,
}

impl Cuboid {
    /// Creates a new box from its full dimensions along the local X, Y and Z axes.
    #[inline]
    pub fn new(dim_x: Real, dim_y: Real, dim_z: Real) -> Self {
        Self::from_half_extents(Vector3::new(dim_x, dim_y, dim_z) / 2.0)
    }

    /// Creates a new box from its half-extents.
    pub fn from_half_extents(half_extents: Vector3<Real>) -> Self {
        Cuboid {
            half_extents,
            sectors: RectangleSectors::symmetric(half_extents.x, half_extents.y),
        }
    }

    /// Builds a box from the `dimX`, `dimY` and `dimZ` parameters of `config`.
    pub fn from_config(config: &dyn ConfigSource) -> Result<Self, ShapeError> {
        let dim_x = config.positive_real(keys::DIM_X)?;
        let dim_y = config.positive_real(keys::DIM_Y)?;
        let dim_z = config.positive_real(keys::DIM_Z)?;
        Ok(Self::new(dim_x, dim_y, dim_z))
    }

    /// The angular sectors of the lateral faces of this box.
    #[inline]
    pub fn sectors(&self) -> &RectangleSectors {
        &self.sectors
    }

    /// The eight corners of this box, in the local frame.
    pub fn local_corners(&self) -> [Point3<Real>; 8] {
        let he = self.half_extents;
        std::array::from_fn(|i| {
            let sign = |bit: usize| if i & (1 << bit) != 0 { -1.0 } else { 1.0 };
            Point3::new(sign(0) * he.x, sign(1) * he.y, sign(2) * he.z)
        })
    }

    // Normal and signed distance of the plane supporting a lateral face.
    fn lateral_plane(&self, side: RectangleSide) -> (Vector3<Real>, Real) {
        match side {
            RectangleSide::Front => (Vector3::x(), self.half_extents.x),
            RectangleSide::Back => (Vector3::x(), -self.half_extents.x),
            RectangleSide::Left => (Vector3::y(), self.half_extents.y),
            RectangleSide::Right => (Vector3::y(), -self.half_extents.y),
        }
    }

    // Intersection between the ray from the origin along `dir` and a face plane, if it
    // lies in front of the origin.
    fn ray_hit(&self, dir: &Vector3<Real>, plane: (Vector3<Real>, Real)) -> Option<Point3<Real>> {
        let (normal, dist) = plane;
        line_plane_intersection(&Point3::origin(), &Point3::from(*dir), &normal, dist)
            .filter(|pt| pt.coords.dot(dir) > 0.0)
    }
}

/// The candidate closest to the origin.
fn closest(a: Option<Point3<Real>>, b: Option<Point3<Real>>) -> Option<Point3<Real>> {
    match (a, b) {
        (Some(a), Some(b)) => {
            if a.coords.norm_squared() <= b.coords.norm_squared() {
                Some(a)
            } else {
                Some(b)
            }
        }
        (a, None) => a,
        (None, b) => b,
    }
}

impl Shape3d for Cuboid {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cuboid(self)
    }

    fn min_radius(&self) -> Real {
        self.half_extents.min()
    }

    fn max_radius(&self) -> Real {
        self.half_extents.norm()
    }

    fn half_extents(&self) -> Vector3<Real> {
        self.half_extents
    }

    fn border_point_at_relative_angle(&self, yaw: Real, pitch: Real) -> Point3<Real> {
        let yaw = normalize_angle(yaw);
        let dir = Vector3::<Real>::x().rotated(yaw, pitch, 0.0);

        if pitch.abs() < HORIZONTAL_PITCH_THRESHOLD {
            let side = self.sectors.side_at(yaw);
            // Flat boxes may be left through the top or bottom before the lateral plane.
            if let Some(pt) = self
                .ray_hit(&dir, self.lateral_plane(side))
                .filter(|pt| pt.z.abs() <= self.half_extents.z)
            {
                return pt;
            }
        }

        // Positive pitches tilt the ray towards -Z.
        let vertical = if dir.z > 0.0 {
            (Vector3::z(), self.half_extents.z)
        } else {
            (Vector3::z(), -self.half_extents.z)
        };

        let (longitudinal, lateral) = if yaw < -FRAC_PI_2 {
            (RectangleSide::Back, RectangleSide::Right)
        } else if yaw < 0.0 {
            (RectangleSide::Front, RectangleSide::Right)
        } else if yaw < FRAC_PI_2 {
            (RectangleSide::Front, RectangleSide::Left)
        } else {
            (RectangleSide::Back, RectangleSide::Left)
        };

        let candidate = closest(
            self.ray_hit(&dir, vertical),
            self.ray_hit(&dir, self.lateral_plane(longitudinal)),
        );

        closest(candidate, self.ray_hit(&dir, self.lateral_plane(lateral)))
            // Only reachable with degenerate extents.
            .unwrap_or_else(|| Point3::from(dir * self.min_radius()))
    }

    fn vertices_at(&self, pose: &Pose3) -> ArrayVec<Point3<Real>, MAX_VERTICES_3D> {
        self.local_corners()
            .iter()
            .map(|pt| pose.transform_point(pt))
            .collect()
    }
}

use crate::math::{Point2, Real, DEFAULT_EPSILON};
use crate::shape::RectangleSectors;
use crate::utils::{
    deg_to_rad, line_line_intersection2d, project_point_on_segment2d, round_to_degrees,
};
use std::fmt;

/// Number of entries of a [`BorderTable`]: one per integer degree in `[-180, 180]`.
pub const BORDER_TABLE_SIZE: usize = 361;

/// Border points and distances of a rectangular footprint, precomputed at every integer degree.
///
/// Entry `i` holds the border at `i - 180` degrees. Queries round the requested angle to
/// the nearest degree, ties away from zero, and never evaluate any trigonometric function.
#[derive(Clone)]
pub struct BorderTable {
    points: [Point2<Real>; BORDER_TABLE_SIZE],
    distances: [Real; BORDER_TABLE_SIZE],
}

impl BorderTable {
    /// Computes the table of the rectangle described by `sectors`.
    ///
    /// Each entry intersects the ray at the entry's degree with the supporting line of
    /// the side selected by `sectors`.
    pub fn new(sectors: &RectangleSectors) -> Self {
        let min_radius = sectors.min_radius();
        let max_radius = sectors.max_radius();
        let mut points = [Point2::origin(); BORDER_TABLE_SIZE];
        let mut distances = [0.0; BORDER_TABLE_SIZE];

        for (i, (point, distance)) in points.iter_mut().zip(distances.iter_mut()).enumerate() {
            let degrees = i as i32 - 180;
            let angle = deg_to_rad(degrees as Real);
            let dir = Point2::new(angle.cos(), angle.sin());
            let side = sectors.side_at(angle);
            let (a, b) = sectors.local_segment(side);

            *point = collinear_far_end(&dir, &a, &b)
                .or_else(|| line_line_intersection2d(&Point2::origin(), &dir, &a, &b))
                .unwrap_or_else(|| {
                    log::warn!(
                        "ray at {}° is parallel to the {:?} side, using the closest point of that side",
                        degrees,
                        side
                    );
                    project_point_on_segment2d(&(dir * max_radius), &a, &b)
                });
            *distance = point.coords.norm().clamp(min_radius, max_radius);
        }

        log::debug!(
            "precomputed border table, distances within [{}, {}]",
            min_radius,
            max_radius
        );

        BorderTable { points, distances }
    }

    /// Index of the entry used for `angle`.
    #[inline]
    pub fn index_of(angle: Real) -> usize {
        (round_to_degrees(angle) + 180) as usize
    }

    /// The border point at the relative angle `angle`, rounded to the nearest degree.
    #[inline]
    pub fn point(&self, angle: Real) -> Point2<Real> {
        self.points[Self::index_of(angle)]
    }

    /// The border distance at the relative angle `angle`, rounded to the nearest degree.
    #[inline]
    pub fn distance(&self, angle: Real) -> Real {
        self.distances[Self::index_of(angle)]
    }

    /// All the precomputed border points, from `-180°` to `180°`.
    #[inline]
    pub fn points(&self) -> &[Point2<Real>; BORDER_TABLE_SIZE] {
        &self.points
    }

    /// All the precomputed border distances, from `-180°` to `180°`.
    #[inline]
    pub fn distances(&self) -> &[Real; BORDER_TABLE_SIZE] {
        &self.distances
    }
}

// When the rotation center lies on the side `[a, b]` and the ray at `dir` runs along it,
// the border point is the endpoint of the side ahead of the ray.
fn collinear_far_end(
    dir: &Point2<Real>,
    a: &Point2<Real>,
    b: &Point2<Real>,
) -> Option<Point2<Real>> {
    let side = b - a;
    let tolerance = DEFAULT_EPSILON * side.norm();

    if a.coords.perp(&side).abs() > tolerance || dir.coords.perp(&side).abs() > tolerance {
        return None;
    }

    if a.coords.dot(&dir.coords) >= b.coords.dot(&dir.coords) {
        Some(*a)
    } else {
        Some(*b)
    }
}

impl fmt::Debug for BorderTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BorderTable")
            .field("front", &self.distances[180])
            .field("left", &self.distances[270])
            .field("back", &self.distances[0])
            .field("right", &self.distances[90])
            .finish_non_exhaustive()
    }
}

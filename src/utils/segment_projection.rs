use crate::math::{Point2, Point3, Real};
use na::Point;

/// Orthogonal projection of `point` on the segment `[a, b]`.
///
/// The projection parameter is clamped so the result always lies on the segment.
/// A degenerate segment projects everything on `a`.
#[inline]
pub fn project_point_on_segment2d(
    point: &Point2<Real>,
    a: &Point2<Real>,
    b: &Point2<Real>,
) -> Point2<Real> {
    project_on_segment(point, a, b)
}

/// Orthogonal projection of `point` on the segment `[a, b]`.
///
/// The projection parameter is clamped so the result always lies on the segment.
/// A degenerate segment projects everything on `a`.
#[inline]
pub fn project_point_on_segment3d(
    point: &Point3<Real>,
    a: &Point3<Real>,
    b: &Point3<Real>,
) -> Point3<Real> {
    project_on_segment(point, a, b)
}

/// Orthogonal projection of `point` on the infinite line through `a` and `b`.
///
/// Returns `a` if `a == b`.
pub fn project_point_on_line2d(
    point: &Point2<Real>,
    a: &Point2<Real>,
    b: &Point2<Real>,
) -> Point2<Real> {
    let ab = b - a;
    let sq_len = ab.norm_squared();

    if sq_len == 0.0 {
        return *a;
    }

    a + ab * (ab.dot(&(point - a)) / sq_len)
}

/// Euclidean distance between `point` and the segment `[a, b]`.
#[inline]
pub fn distance_to_segment3d(point: &Point3<Real>, a: &Point3<Real>, b: &Point3<Real>) -> Real {
    na::distance(point, &project_point_on_segment3d(point, a, b))
}

fn project_on_segment<const D: usize>(
    point: &Point<Real, D>,
    a: &Point<Real, D>,
    b: &Point<Real, D>,
) -> Point<Real, D> {
    let ab = b - a;
    let sq_len = ab.norm_squared();

    if sq_len == 0.0 {
        return *a;
    }

    let t = ab.dot(&(point - a)) / sq_len;
    a + ab * t.clamp(0.0, 1.0)
}

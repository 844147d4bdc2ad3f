use crate::math::{Point2, Point3, Real, Vector3, DEFAULT_EPSILON};

/// Intersects the infinite line through `a` and `b` with the plane `{p | normal·p = signed_distance}`.
///
/// Returns `None` if the line is parallel to the plane, i.e., if `|normal·(b - a)|` is
/// smaller than `DEFAULT_EPSILON`.
pub fn line_plane_intersection(
    a: &Point3<Real>,
    b: &Point3<Real>,
    normal: &Vector3<Real>,
    signed_distance: Real,
) -> Option<Point3<Real>> {
    let dir = b - a;
    let denom = normal.dot(&dir);

    if denom.abs() < DEFAULT_EPSILON {
        return None;
    }

    let t = (signed_distance - normal.dot(&a.coords)) / denom;
    Some(a + dir * t)
}

/// Intersects the infinite line through `a1` and `a2` with the infinite line through `b1` and `b2`.
///
/// Returns `None` if the lines are parallel, i.e., if the determinant of their directions is
/// zero up to a few ulps.
pub fn line_line_intersection2d(
    a1: &Point2<Real>,
    a2: &Point2<Real>,
    b1: &Point2<Real>,
    b2: &Point2<Real>,
) -> Option<Point2<Real>> {
    let da = a1 - a2;
    let db = b1 - b2;
    let denom = det(da.x, da.y, db.x, db.y);

    if ulps_eq!(denom, 0.0) {
        return None;
    }

    let det_a = det(a1.x, a1.y, a2.x, a2.y);
    let det_b = det(b1.x, b1.y, b2.x, b2.y);

    Some(Point2::new(
        det(det_a, da.x, det_b, db.x) / denom,
        det(det_a, da.y, det_b, db.y) / denom,
    ))
}

#[inline]
fn det(a: Real, b: Real, c: Real, d: Real) -> Real {
    a * d - b * c
}

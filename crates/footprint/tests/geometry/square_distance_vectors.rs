use footprint::math::{Point2, Real, Vector2};
use footprint::shape::{Rectangle, Shape2d};
use footprint::spatial::{Pose2, Rotate};
use footprint::utils::deg_to_rad;
use std::f32::consts::FRAC_PI_2;

// Points around a 2x2 square and the expected vector from its border to each of them.
// The four diagonal points lie exactly on the corner bearings.
const CASES: [((Real, Real), (Real, Real)); 12] = [
    ((1.0, 3.0), (0.0, 2.0)),
    ((3.0, 1.0), (2.0, 0.0)),
    ((1.0, -3.0), (0.0, -2.0)),
    ((3.0, -1.0), (2.0, 0.0)),
    ((-1.0, 3.0), (0.0, 2.0)),
    ((-3.0, 1.0), (-2.0, 0.0)),
    ((-1.0, -3.0), (0.0, -2.0)),
    ((-3.0, -1.0), (-2.0, 0.0)),
    ((3.0, 3.0), (2.0, 2.0)),
    ((3.0, -3.0), (2.0, -2.0)),
    ((-3.0, 3.0), (-2.0, 2.0)),
    ((-3.0, -3.0), (-2.0, -2.0)),
];

#[test]
fn square_distance_vectors_at_identity() {
    let square = Rectangle::new(2.0, 2.0);
    let pose = Pose2::identity();

    for ((px, py), (ex, ey)) in CASES {
        let dist = square.distance_vector_to_point(&pose, &Point2::new(px, py));
        assert_relative_eq!(dist, Vector2::new(ex, ey), epsilon = 1.0e-5);
    }
}

#[test]
fn square_distance_vectors_follow_pose() {
    let square = Rectangle::new(2.0, 2.0);
    let pose = Pose2::new(10.0, -5.0, FRAC_PI_2 / 3.0);

    for ((px, py), (ex, ey)) in CASES {
        let local = Point2::new(px, py);
        let point = pose.transform_point(&local);
        let expected = Vector2::new(ex, ey).rotated(pose.yaw, 0.0, 0.0);
        let dist = square.distance_vector_to_point(&pose, &point);
        assert_relative_eq!(dist, expected, epsilon = 1.0e-4);
    }
}

#[test]
fn distance_vector_vanishes_on_border() {
    let square = Rectangle::new(2.0, 2.0);
    let pose = Pose2::new(1.0, 2.0, 0.3);

    for deg in (-180..180).step_by(7) {
        let local = square.border_point_at_relative_angle(deg_to_rad(deg as Real));
        let point = pose.transform_point(&local);
        let dist = square.distance_vector_to_point(&pose, &point);
        assert!(dist.norm() < 1.0e-4, "{}°: {:?}", deg, dist);
    }
}

#[test]
fn corner_angles_and_distances() {
    let rect = Rectangle::new(4.0, 2.0);
    let corners = rect.sectors().corner_angles();
    let expected: [(Real, Real); 4] = [(-1.0, 2.0), (1.0, 2.0), (1.0, -2.0), (-1.0, -2.0)];

    for (angle, (y, x)) in corners.iter().zip(expected.iter()) {
        assert_relative_eq!(*angle, y.atan2(*x), epsilon = 1.0e-6);
    }

    let square = Rectangle::new(2.0, 2.0);
    for deg in [45.0, 135.0, -45.0, -135.0] {
        assert_relative_eq!(
            square.border_distance_at_relative_angle(deg_to_rad(deg)),
            2.0f32.sqrt(),
            epsilon = 1.0e-5
        );
    }

    // Straight ahead, to the left, behind and to the right.
    for (deg, expected) in [(0.0, 2.0), (90.0, 1.0), (180.0, 2.0), (-90.0, 1.0)] {
        assert_relative_eq!(
            rect.border_distance_at_relative_angle(deg_to_rad(deg)),
            expected,
            epsilon = 1.0e-5
        );
    }
}

#[test]
fn square_vertices_and_axes() {
    let square = Rectangle::new(2.0, 2.0);
    let pose = Pose2::new(3.0, 4.0, FRAC_PI_2);
    let vertices = square.vertices_at(&pose);
    let expected = [
        Point2::new(4.0, 5.0),
        Point2::new(2.0, 5.0),
        Point2::new(2.0, 3.0),
        Point2::new(4.0, 3.0),
    ];

    for (vertex, expected) in vertices.iter().zip(expected.iter()) {
        assert_relative_eq!(vertex, expected, epsilon = 1.0e-5);
    }

    let axes = square.axes_matrix_at(&pose);
    assert_relative_eq!(axes.column(0).into_owned(), Vector2::y(), epsilon = 1.0e-6);
    assert_relative_eq!(axes.column(1).into_owned(), -Vector2::x(), epsilon = 1.0e-6);
}

#[test]
fn square_vertices_at_identity() {
    let square = Rectangle::new(2.0, 2.0);
    let vertices = square.vertices_at(&Pose2::identity());
    let expected: [(Real, Real); 4] = [(1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)];

    for (vertex, (x, y)) in vertices.iter().zip(expected.iter()) {
        assert_relative_eq!(vertex.coords.norm(), x.hypot(*y), epsilon = 1.0e-6);
        assert_relative_eq!(vertex.y.atan2(vertex.x), y.atan2(*x), epsilon = 1.0e-6);
    }

    for (vertex, angle) in vertices.iter().zip(square.sectors().corner_angles().iter()) {
        assert_relative_eq!(vertex.y.atan2(vertex.x), *angle, epsilon = 1.0e-6);
    }
}

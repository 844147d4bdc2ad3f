use footprint::math::{Point3, Real, Vector3};
use footprint::shape::{Cuboid, Shape3d, HORIZONTAL_PITCH_THRESHOLD};
use std::f32::consts::{FRAC_PI_2, PI};

const EPS: Real = 1.0e-4;

// Checks that `pt` lies on the surface of the box of half-extents `he`.
fn assert_on_surface(pt: &Point3<Real>, he: &Vector3<Real>, yaw: Real, pitch: Real) {
    let mut on_face = false;

    for i in 0..3 {
        assert!(
            pt[i].abs() <= he[i] + EPS,
            "border point {:?} at ({}, {}) outside of the box",
            pt,
            yaw,
            pitch
        );
        on_face |= (pt[i].abs() - he[i]).abs() <= EPS;
    }

    assert!(
        on_face,
        "border point {:?} at ({}, {}) is not on any face",
        pt, yaw, pitch
    );
}

#[test]
fn random_border_points_lie_on_faces() {
    let cuboid = Cuboid::new(2.0, 4.0, 6.0);
    let he = cuboid.half_extents();
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let yaw = (rng.rand_float() - 0.5) * 2.0 * PI;
        let pitch = (rng.rand_float() - 0.5) * PI;
        let pt = cuboid.border_point_at_relative_angle(yaw, pitch);
        assert_on_surface(&pt, &he, yaw, pitch);

        // The border point lies along the requested bearing.
        let dir = Vector3::new(
            yaw.cos() * pitch.cos(),
            yaw.sin() * pitch.cos(),
            -pitch.sin(),
        );
        assert_relative_eq!(pt.coords.normalize(), dir, epsilon = 1.0e-3);
    }
}

#[test]
fn near_horizontal_rays_hit_lateral_faces() {
    let cuboid = Cuboid::new(2.0, 4.0, 6.0);
    let he = cuboid.half_extents();
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..1000 {
        let yaw = (rng.rand_float() - 0.5) * 2.0 * PI;
        let pitch = (rng.rand_float() - 0.5) * 2.0 * HORIZONTAL_PITCH_THRESHOLD * 0.99;
        let pt = cuboid.border_point_at_relative_angle(yaw, pitch);

        assert_on_surface(&pt, &he, yaw, pitch);
        assert!(pt.z.abs() < he.z, "{:?} should be on a lateral face", pt);
        assert!(
            (pt.x.abs() - he.x).abs() <= EPS || (pt.y.abs() - he.y).abs() <= EPS,
            "{:?} should be on a lateral face",
            pt
        );
    }
}

#[test]
fn near_horizontal_rays_stay_on_flat_boxes() {
    let cuboid = Cuboid::new(200.0, 200.0, 0.2);
    let he = cuboid.half_extents();
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..1000 {
        let yaw = (rng.rand_float() - 0.5) * 2.0 * PI;
        let pitch = (rng.rand_float() - 0.5) * 2.0 * HORIZONTAL_PITCH_THRESHOLD * 0.99;
        let pt = cuboid.border_point_at_relative_angle(yaw, pitch);

        assert_on_surface(&pt, &he, yaw, pitch);
        assert!(
            cuboid.border_distance_at_relative_angle(yaw, pitch) <= cuboid.max_radius() + EPS,
            "border distance at ({}, {}) exceeds the largest radius",
            yaw,
            pitch
        );
    }
}

#[test]
fn pitch_sign_selects_top_or_bottom() {
    let cuboid = Cuboid::new(2.0, 4.0, 6.0);

    for yaw in [-3.0, -1.5, -0.2, 0.0, 0.7, 2.9] {
        let down = cuboid.border_point_at_relative_angle(yaw, FRAC_PI_2 - 0.05);
        let up = cuboid.border_point_at_relative_angle(yaw, -FRAC_PI_2 + 0.05);
        assert_relative_eq!(down.z, -3.0, epsilon = EPS);
        assert_relative_eq!(up.z, 3.0, epsilon = EPS);
    }
}

#[test]
fn vertices_are_placed_and_rotated() {
    use footprint::spatial::Pose3;

    let cuboid = Cuboid::new(2.0, 4.0, 6.0);
    let pose = Pose3::new(1.0, 2.0, 3.0, 0.4, -0.3, 1.2);
    let vertices = cuboid.vertices_at(&pose);
    let axes = cuboid.axes_at(&pose);

    assert_eq!(vertices.len(), 8);

    for (vertex, local) in vertices.iter().zip(cuboid.local_corners().iter()) {
        // Each vertex is the pose position plus the local corner expressed with the pose axes.
        let expected = pose.position + axes[0] * local.x + axes[1] * local.y + axes[2] * local.z;
        assert_relative_eq!(*vertex, expected, epsilon = 1.0e-4);
        assert_relative_eq!(
            (vertex - pose.position).norm(),
            cuboid.max_radius(),
            epsilon = 1.0e-4
        );
    }
}

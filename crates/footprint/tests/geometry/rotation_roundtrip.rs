use footprint::math::{Point2, Point3, Real, Vector3};
use footprint::spatial::{Pose2, Pose3, Rotate, State2};
use footprint::utils::angle_error;
use std::f32::consts::PI;

fn random(rng: &mut oorandom::Rand32, half_range: Real) -> Real {
    (rng.rand_float() * 2.0 - 1.0) * half_range
}

#[test]
fn planar_rotation_roundtrip() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let pt = Point2::new(random(&mut rng, 10.0), random(&mut rng, 10.0));
        let yaw = random(&mut rng, 2.0 * PI);
        let back = pt.rotated(yaw, 0.0, 0.0).rotated(-yaw, 0.0, 0.0);
        assert_relative_eq!(back, pt, epsilon = 1.0e-4);

        let pose = Pose2::from_parts(pt, random(&mut rng, PI));
        let back = pose.rotated(yaw, 0.0, 0.0).rotated(-yaw, 0.0, 0.0);
        assert_relative_eq!(back.position, pose.position, epsilon = 1.0e-4);
        assert!(angle_error(back.yaw, pose.yaw).abs() < 1.0e-4);
    }
}

#[test]
fn spatial_rotation_roundtrip() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let pt = Point3::new(
            random(&mut rng, 10.0),
            random(&mut rng, 10.0),
            random(&mut rng, 10.0),
        );
        let (yaw, pitch, roll) = (
            random(&mut rng, PI),
            random(&mut rng, PI),
            random(&mut rng, PI),
        );

        // The inverse of Rz·Ry·Rx applies the opposite angles in reverse order.
        let back = pt
            .rotated(yaw, pitch, roll)
            .rotated(-yaw, 0.0, 0.0)
            .rotated(0.0, -pitch, 0.0)
            .rotated(0.0, 0.0, -roll);
        assert_relative_eq!(back, pt, epsilon = 1.0e-4);

        // Rotations preserve lengths.
        let v = pt.coords;
        assert_relative_eq!(
            v.rotated(yaw, pitch, roll).norm(),
            v.norm(),
            epsilon = 1.0e-4
        );
    }
}

#[test]
fn rotation_preserves_velocities() {
    let mut rng = oorandom::Rand32::new(11);

    for _ in 0..100 {
        let state = State2::new(
            Pose2::new(random(&mut rng, 5.0), random(&mut rng, 5.0), random(&mut rng, PI)),
            random(&mut rng, 1.0),
            random(&mut rng, 1.0),
            random(&mut rng, 1.0),
        );
        let mut rotated = state;
        rotated.rotate_mut(random(&mut rng, PI), 0.0, 0.0);

        assert_eq!((rotated.vx, rotated.vy, rotated.w), (state.vx, state.vy, state.w));
        assert_relative_eq!(
            rotated.position().coords.norm(),
            state.position().coords.norm(),
            epsilon = 1.0e-4
        );
    }
}

#[test]
fn pose_rotation_composes_angles() {
    let pose = Pose3::new(1.0, 0.0, 0.0, 3.0, -0.5, 0.2).rotated(1.0, 0.2, -0.4);
    assert!(pose.yaw > -PI && pose.yaw <= PI);
    assert_relative_eq!(pose.yaw, 4.0 - 2.0 * PI, epsilon = 1.0e-5);
    assert_relative_eq!(pose.pitch, -0.3, epsilon = 1.0e-5);
    assert_relative_eq!(pose.roll, -0.2, epsilon = 1.0e-5);
    assert_relative_eq!(
        pose.position.coords,
        Vector3::x().rotated(1.0, 0.2, -0.4),
        epsilon = 1.0e-5
    );
}

use footprint::math::Real;
use footprint::shape::{AsymmetricRectangle, Circle, Cuboid, Rectangle, Shape2d, Shape3d, Sphere};
use std::f32::consts::{FRAC_PI_2, PI};

const EPS: Real = 1.0e-5;

fn random_angle(rng: &mut oorandom::Rand32, half_range: Real) -> Real {
    (rng.rand_float() * 2.0 - 1.0) * half_range
}

fn check_planar(name: &str, shape: &dyn Shape2d, rng: &mut oorandom::Rand32) {
    let (min, max) = (shape.min_radius(), shape.max_radius());
    assert!(min <= max, "{}: min radius {} above max radius {}", name, min, max);

    for _ in 0..1000 {
        // Includes angles outside of (-π, π].
        let yaw = random_angle(rng, 3.0 * PI);
        let dist = shape.border_distance_at_relative_angle(yaw);

        assert!(
            dist >= min - EPS && dist <= max + EPS,
            "{}: border distance {} at yaw {} outside of [{}, {}]",
            name,
            dist,
            yaw,
            min,
            max
        );
    }
}

fn check_spatial(name: &str, shape: &dyn Shape3d, rng: &mut oorandom::Rand32) {
    let (min, max) = (shape.min_radius(), shape.max_radius());
    assert!(min <= max, "{}: min radius {} above max radius {}", name, min, max);

    for _ in 0..1000 {
        let yaw = random_angle(rng, PI);
        let pitch = random_angle(rng, FRAC_PI_2);
        let dist = shape.border_distance_at_relative_angle(yaw, pitch);

        assert!(
            dist >= min - EPS && dist <= max + EPS,
            "{}: border distance {} at ({}, {}) outside of [{}, {}]",
            name,
            dist,
            yaw,
            pitch,
            min,
            max
        );
    }
}

#[test]
fn border_distance_within_radii() {
    let mut rng = oorandom::Rand32::new(42);

    check_planar("circle", &Circle::new(0.7), &mut rng);
    check_planar("square", &Rectangle::new(2.0, 2.0), &mut rng);
    check_planar("rectangle", &Rectangle::new(5.0, 0.5), &mut rng);
    check_planar(
        "asymmetric rectangle",
        &AsymmetricRectangle::new(4.0, 0.5, 1.0, 2.0),
        &mut rng,
    );
    check_planar(
        "asymmetric rectangle touching its center",
        &AsymmetricRectangle::new(3.0, 0.0, 1.0, 1.0),
        &mut rng,
    );
    check_spatial("sphere", &Sphere::new(1.3), &mut rng);
    check_spatial("cuboid", &Cuboid::new(2.0, 4.0, 6.0), &mut rng);
    check_spatial("flat cuboid", &Cuboid::new(6.0, 3.0, 0.2), &mut rng);
}

#[test]
fn random_rectangles_within_radii() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..20 {
        let mut extent = || 0.1 + rng.rand_float() * 5.0;
        let (px, nx, py, ny) = (extent(), extent(), extent(), extent());
        let shape = AsymmetricRectangle::new(px, nx, py, ny);
        assert_relative_eq!(shape.min_radius(), px.min(nx).min(py).min(ny));
        check_planar("random asymmetric rectangle", &shape, &mut rng);
    }
}

#[test]
fn circle_border_is_constant() {
    let circle = Circle::new(2.5);
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..100 {
        let yaw = random_angle(&mut rng, PI);
        assert_eq!(circle.border_distance_at_relative_angle(yaw), 2.5);
    }
}

use footprint::math::Real;
use footprint::shape::{
    create_shape, AsymmetricRectangle, Circle, ConfigSource, Cuboid, Rectangle, ShapeConfig,
    ShapeError, ShapeRegistry, ShapeType, SharedShape, Sphere,
};
use std::collections::HashMap;

// A configuration source backed by borrowed data, as an application would provide it.
struct Properties<'a> {
    class: &'a str,
    values: &'a [(&'a str, Real)],
}

impl ConfigSource for Properties<'_> {
    fn shape_type_tag(&self) -> Option<&str> {
        Some(self.class)
    }

    fn real(&self, key: &str) -> Option<Real> {
        self.values.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

#[test]
fn builds_every_builtin_shape() {
    let configs = [
        (ShapeConfig::new("circle").with("radius", 1.0), ShapeType::Circle),
        (ShapeConfig::new("sphere").with("radius", 1.0), ShapeType::Sphere),
        (
            ShapeConfig::new("rectangle").with("dimX", 2.0).with("dimY", 1.0),
            ShapeType::Rectangle,
        ),
        (
            ShapeConfig::new("asymmetric_rectangle")
                .with("positiveX", 2.0)
                .with("negativeX", 0.5)
                .with("positiveY", 1.0)
                .with("negativeY", 1.0),
            ShapeType::AsymmetricRectangle,
        ),
        (
            ShapeConfig::new("cuboid")
                .with("dimX", 2.0)
                .with("dimY", 4.0)
                .with("dimZ", 6.0),
            ShapeType::Cuboid,
        ),
    ];

    for (config, expected) in configs {
        let shape = create_shape(&config).unwrap();
        assert_eq!(shape.shape_type(), expected);
        assert_eq!(Some(shape.dimension()), expected.dimension());
    }
}

#[test]
fn built_shapes_match_direct_construction() {
    let config = ShapeConfig::new("cuboid")
        .with("dimX", 2.0)
        .with("dimY", 4.0)
        .with("dimZ", 6.0);
    let shape = create_shape(&config).unwrap();
    assert_eq!(shape.downcast_3d::<Cuboid>(), Some(&Cuboid::new(2.0, 4.0, 6.0)));
    assert!(shape.downcast_3d::<Sphere>().is_none());

    let props = Properties {
        class: "asymmetric_rectangle",
        values: &[
            ("positiveX", 3.0),
            ("negativeX", 1.0),
            ("positiveY", 0.5),
            ("negativeY", 1.5),
        ],
    };
    let shape = create_shape(&props).unwrap();
    let direct = AsymmetricRectangle::new(3.0, 1.0, 0.5, 1.5);
    let built = shape.downcast_2d::<AsymmetricRectangle>().unwrap();
    assert_eq!(built.sectors(), direct.sectors());
    assert_eq!(shape.min_radius(), 0.5);
    assert!(shape.downcast_2d::<Rectangle>().is_none());
    assert!(shape.downcast_2d::<Circle>().is_none());
}

#[test]
fn factory_errors() {
    let missing_class = Properties {
        class: "",
        values: &[],
    };
    assert_eq!(
        create_shape(&missing_class).unwrap_err(),
        ShapeError::MissingShapeType
    );

    let unknown = ShapeConfig::new("ShapeTriangle2D").with("radius", 1.0);
    let err = create_shape(&unknown).unwrap_err();
    assert_eq!(err, ShapeError::UnknownShapeType("ShapeTriangle2D".to_string()));
    assert!(err.to_string().contains("ShapeTriangle2D"));

    let missing_field = ShapeConfig::new("cuboid").with("dimX", 1.0).with("dimZ", 1.0);
    let err = create_shape(&missing_field).unwrap_err();
    assert_eq!(err, ShapeError::MissingParameter("dimY"));
    assert!(err.to_string().contains("dimY"));

    let nan = ShapeConfig::new("circle").with("radius", Real::NAN);
    assert_eq!(
        create_shape(&nan).unwrap_err(),
        ShapeError::MissingParameter("radius")
    );

    let negative = ShapeConfig::new("asymmetric_rectangle")
        .with("positiveX", 1.0)
        .with("negativeX", -1.0)
        .with("positiveY", 1.0)
        .with("negativeY", 1.0);
    assert_eq!(
        create_shape(&negative).unwrap_err(),
        ShapeError::InvalidParameter {
            name: "negativeX",
            value: -1.0
        }
    );
}

#[test]
fn registry_accepts_new_constructors() {
    let mut registry = ShapeRegistry::with_builtin_shapes();
    let previous = registry.register("circle", |config| {
        // Circles given by their diameter.
        let diameter = config.positive_real("diameter")?;
        Ok(SharedShape::circle(diameter / 2.0))
    });
    assert!(previous.is_some());

    let mut parameters = HashMap::new();
    let _ = parameters.insert("diameter".to_string(), 3.0);
    let config = ShapeConfig {
        class: "circle".to_string(),
        parameters,
    };

    let shape = registry.create(&config).unwrap();
    assert_eq!(shape.max_radius(), 1.5);

    // The process-wide registry is untouched.
    assert_eq!(
        create_shape(&config).unwrap_err(),
        ShapeError::MissingParameter("radius")
    );
}

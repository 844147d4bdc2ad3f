//! Construction of shapes from their configuration.

use crate::shape::{
    AsymmetricRectangle, Circle, ConfigSource, Cuboid, Rectangle, ShapeError, ShapeType,
    SharedShape, Sphere,
};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// A function building a shape from its configuration.
pub type ShapeConstructor = fn(&dyn ConfigSource) -> Result<SharedShape, ShapeError>;

/// A map from shape type tags to shape constructors.
///
/// ```
/// use footprint::shape::{ShapeConfig, ShapeRegistry, ShapeType, SharedShape};
///
/// let mut registry = ShapeRegistry::with_builtin_shapes();
/// let _ = registry.register("unit_circle", |_| Ok(SharedShape::circle(1.0)));
///
/// let shape = registry.create(&ShapeConfig::new("unit_circle")).unwrap();
/// assert_eq!(shape.shape_type(), ShapeType::Circle);
/// ```
#[derive(Clone, Default)]
pub struct ShapeRegistry {
    constructors: HashMap<String, ShapeConstructor>,
}

impl ShapeRegistry {
    /// A registry without any constructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with a constructor for each of the built-in shape types.
    pub fn with_builtin_shapes() -> Self {
        let mut registry = Self::new();
        let builtins: [(ShapeType, ShapeConstructor); 5] = [
            (ShapeType::Circle, |config| {
                Circle::from_config(config).map(SharedShape::new_2d)
            }),
            (ShapeType::Sphere, |config| {
                Sphere::from_config(config).map(SharedShape::new_3d)
            }),
            (ShapeType::Rectangle, |config| {
                Rectangle::from_config(config).map(SharedShape::new_2d)
            }),
            (ShapeType::AsymmetricRectangle, |config| {
                AsymmetricRectangle::from_config(config).map(SharedShape::new_2d)
            }),
            (ShapeType::Cuboid, |config| {
                Cuboid::from_config(config).map(SharedShape::new_3d)
            }),
        ];

        for (shape_type, constructor) in builtins {
            let _ = registry.register(shape_type.as_str(), constructor);
        }

        registry
    }

    /// The registry of built-in shapes shared by the whole process.
    pub fn builtin() -> &'static ShapeRegistry {
        static BUILTIN: OnceLock<ShapeRegistry> = OnceLock::new();
        BUILTIN.get_or_init(Self::with_builtin_shapes)
    }

    /// Registers `constructor` for the type tag `tag`.
    ///
    /// Returns the constructor previously registered for this tag, if any.
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        constructor: ShapeConstructor,
    ) -> Option<ShapeConstructor> {
        self.constructors.insert(tag.into(), constructor)
    }

    /// Whether a constructor is registered for `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// The registered type tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Builds the shape described by `config`.
    ///
    /// Fails if the configuration has no type tag, if the tag is not registered, or if
    /// the constructor rejects the parameters.
    pub fn create(&self, config: &dyn ConfigSource) -> Result<SharedShape, ShapeError> {
        let tag = config
            .shape_type_tag()
            .filter(|tag| !tag.is_empty())
            .ok_or(ShapeError::MissingShapeType)?;
        let constructor = self
            .constructors
            .get(tag)
            .ok_or_else(|| ShapeError::UnknownShapeType(tag.to_string()))?;

        log::debug!("building a `{}` shape from its configuration", tag);
        constructor(config)
    }
}

impl fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.tags()).finish()
    }
}

/// Builds the shape described by `config` with the built-in constructors.
///
/// ```
/// use footprint::shape::{create_shape, ShapeConfig, ShapeType};
///
/// let config = ShapeConfig::new("cuboid")
///     .with("dimX", 2.0)
///     .with("dimY", 4.0)
///     .with("dimZ", 6.0);
/// let shape = create_shape(&config).unwrap();
///
/// assert_eq!(shape.shape_type(), ShapeType::Cuboid);
/// assert_eq!(shape.dimension(), 3);
/// ```
pub fn create_shape(config: &dyn ConfigSource) -> Result<SharedShape, ShapeError> {
    ShapeRegistry::builtin().create(config)
}

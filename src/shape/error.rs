use crate::math::Real;

/// Errors that can occur while building a shape from its configuration.
///
/// Shapes are either fully built or not built at all: the factory never hands out a
/// shape with a missing or defaulted parameter.
///
/// # Handling errors
///
/// ```
/// use footprint::shape::{create_shape, ShapeConfig, ShapeError};
///
/// let config = ShapeConfig::new("rectangle").with("dimX", 2.0);
///
/// match create_shape(&config) {
///     Err(ShapeError::MissingParameter(name)) => assert_eq!(name, "dimY"),
///     other => panic!("unexpected result: {:?}", other.map(|s| s.shape_type())),
/// }
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The configuration does not name the type of shape to build.
    ///
    /// The type tag is either absent or an empty string.
    #[error("required value for the shape type is missing")]
    MissingShapeType,

    /// No constructor is registered for the given type tag.
    ///
    /// The built-in tags are `circle`, `sphere`, `rectangle`, `asymmetric_rectangle`
    /// and `cuboid`. Additional tags can be added with
    /// [`ShapeRegistry::register`](crate::shape::ShapeRegistry::register).
    #[error("shape type `{0}` is not registered")]
    UnknownShapeType(String),

    /// A parameter required by the requested shape is absent or NaN.
    #[error("required field `{0}` is empty")]
    MissingParameter(&'static str),

    /// A parameter is present but outside of its valid range.
    ///
    /// Extents must be finite and non-negative, radii and full dimensions must be
    /// finite and strictly positive.
    #[error("field `{name}` has an invalid value: {value}")]
    InvalidParameter {
        /// The name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: Real,
    },
}

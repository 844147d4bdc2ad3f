//! Key-value configuration of shapes.

use crate::math::Real;
use crate::shape::ShapeError;
use std::collections::HashMap;

/// Names of the parameters read by the built-in shapes.
pub mod keys {
    /// Radius of a circle or sphere.
    pub const RADIUS: &str = "radius";
    /// Full extent along the local X axis.
    pub const DIM_X: &str = "dimX";
    /// Full extent along the local Y axis.
    pub const DIM_Y: &str = "dimY";
    /// Full extent along the local Z axis.
    pub const DIM_Z: &str = "dimZ";
    /// Distance from the rotation center to the front side.
    pub const POSITIVE_X: &str = "positiveX";
    /// Distance from the rotation center to the back side.
    pub const NEGATIVE_X: &str = "negativeX";
    /// Distance from the rotation center to the left side.
    pub const POSITIVE_Y: &str = "positiveY";
    /// Distance from the rotation center to the right side.
    pub const NEGATIVE_Y: &str = "negativeY";
}

/// A source of shape parameters.
///
/// Implement this to build shapes directly from an application's own configuration
/// system. Only `shape_type_tag` and `real` are required.
pub trait ConfigSource {
    /// The tag naming the type of shape to build, e.g. `"rectangle"`.
    fn shape_type_tag(&self) -> Option<&str>;

    /// The value of the real parameter `key`, if set.
    fn real(&self, key: &str) -> Option<Real>;

    /// The value of the parameter `key`, failing if it is absent or NaN.
    fn required_real(&self, key: &'static str) -> Result<Real, ShapeError> {
        match self.real(key) {
            Some(value) if !value.is_nan() => Ok(value),
            _ => Err(ShapeError::MissingParameter(key)),
        }
    }

    /// The value of the parameter `key`, failing unless it is finite and strictly positive.
    fn positive_real(&self, key: &'static str) -> Result<Real, ShapeError> {
        let value = self.required_real(key)?;

        if value > 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(ShapeError::InvalidParameter { name: key, value })
        }
    }

    /// The value of the parameter `key`, failing unless it is finite and non-negative.
    fn non_negative_real(&self, key: &'static str) -> Result<Real, ShapeError> {
        let value = self.required_real(key)?;

        if value >= 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(ShapeError::InvalidParameter { name: key, value })
        }
    }
}

/// An owned shape configuration: a type tag and a map of real parameters.
///
/// ```
/// use footprint::shape::{ConfigSource, ShapeConfig};
///
/// let config = ShapeConfig::new("circle").with("radius", 0.5);
/// assert_eq!(config.shape_type_tag(), Some("circle"));
/// assert_eq!(config.real("radius"), Some(0.5));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeConfig {
    /// The type tag of the shape.
    pub class: String,
    /// The real parameters of the shape, by name.
    #[cfg_attr(feature = "serde-serialize", serde(default))]
    pub parameters: HashMap<String, Real>,
}

impl ShapeConfig {
    /// Creates a configuration for the given type tag, without any parameter.
    pub fn new(class: impl Into<String>) -> Self {
        ShapeConfig {
            class: class.into(),
            parameters: HashMap::new(),
        }
    }

    /// Sets the parameter `key` and returns the modified configuration.
    pub fn with(mut self, key: impl Into<String>, value: Real) -> Self {
        let _ = self.set(key, value);
        self
    }

    /// Sets the parameter `key`, returning its previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: Real) -> Option<Real> {
        self.parameters.insert(key.into(), value)
    }
}

impl ConfigSource for ShapeConfig {
    fn shape_type_tag(&self) -> Option<&str> {
        Some(self.class.as_str()).filter(|class| !class.is_empty())
    }

    fn real(&self, key: &str) -> Option<Real> {
        self.parameters.get(key).copied()
    }
}

impl<C: ConfigSource + ?Sized> ConfigSource for &C {
    fn shape_type_tag(&self) -> Option<&str> {
        (**self).shape_type_tag()
    }

    fn real(&self, key: &str) -> Option<Real> {
        (**self).real(key)
    }
}

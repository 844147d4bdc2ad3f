use crate::math::Real;
use crate::shape::{
    AsymmetricRectangle, Circle, Cuboid, Rectangle, Shape2d, Shape3d, ShapeType, Sphere,
    TypedShape,
};
use std::fmt;
use std::sync::Arc;

/// A reference-counted, shareable footprint of either dimension.
///
/// Cloning a `SharedShape` only increments a reference count. Shapes are immutable, so
/// the same footprint can be queried from any number of threads.
///
/// ```
/// use footprint::shape::{SharedShape, ShapeType};
///
/// let shape = SharedShape::rectangle(2.0, 1.0);
/// let other = shape.clone();
///
/// assert_eq!(other.shape_type(), ShapeType::Rectangle);
/// assert_eq!(shape.as_shape2d().map(|s| s.min_radius()), Some(0.5));
/// assert!(shape.as_shape3d().is_none());
/// ```
#[derive(Clone)]
pub enum SharedShape {
    /// A footprint on the plane.
    Planar(Arc<dyn Shape2d>),
    /// A footprint in space.
    Spatial(Arc<dyn Shape3d>),
}

impl SharedShape {
    /// Wraps the given planar shape into a `SharedShape`.
    pub fn new_2d(shape: impl Shape2d) -> Self {
        SharedShape::Planar(Arc::new(shape))
    }

    /// Wraps the given spatial shape into a `SharedShape`.
    pub fn new_3d(shape: impl Shape3d) -> Self {
        SharedShape::Spatial(Arc::new(shape))
    }

    /// Initialize a circle with the given radius.
    pub fn circle(radius: Real) -> Self {
        Self::new_2d(Circle::new(radius))
    }

    /// Initialize a sphere with the given radius.
    pub fn sphere(radius: Real) -> Self {
        Self::new_3d(Sphere::new(radius))
    }

    /// Initialize a rectangle with the given full dimensions.
    pub fn rectangle(dim_x: Real, dim_y: Real) -> Self {
        Self::new_2d(Rectangle::new(dim_x, dim_y))
    }

    /// Initialize a rectangle from the distances between its rotation center and its sides.
    pub fn asymmetric_rectangle(
        positive_x: Real,
        negative_x: Real,
        positive_y: Real,
        negative_y: Real,
    ) -> Self {
        Self::new_2d(AsymmetricRectangle::new(
            positive_x, negative_x, positive_y, negative_y,
        ))
    }

    /// Initialize a box with the given full dimensions.
    pub fn cuboid(dim_x: Real, dim_y: Real, dim_z: Real) -> Self {
        Self::new_3d(Cuboid::new(dim_x, dim_y, dim_z))
    }

    /// Gets the type tag of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            SharedShape::Planar(s) => s.shape_type(),
            SharedShape::Spatial(s) => s.shape_type(),
        }
    }

    /// Gets the underlying shape as an enum.
    pub fn as_typed_shape(&self) -> TypedShape<'_> {
        match self {
            SharedShape::Planar(s) => s.as_typed_shape(),
            SharedShape::Spatial(s) => s.as_typed_shape(),
        }
    }

    /// The number of dimensions of this shape.
    pub fn dimension(&self) -> usize {
        match self {
            SharedShape::Planar(_) => 2,
            SharedShape::Spatial(_) => 3,
        }
    }

    /// The smallest distance from the rotation center to the border.
    pub fn min_radius(&self) -> Real {
        match self {
            SharedShape::Planar(s) => s.min_radius(),
            SharedShape::Spatial(s) => s.min_radius(),
        }
    }

    /// The largest distance from the rotation center to the border.
    pub fn max_radius(&self) -> Real {
        match self {
            SharedShape::Planar(s) => s.max_radius(),
            SharedShape::Spatial(s) => s.max_radius(),
        }
    }

    /// The planar shape, if this is one.
    pub fn as_shape2d(&self) -> Option<&(dyn Shape2d + 'static)> {
        match self {
            SharedShape::Planar(s) => Some(&**s),
            SharedShape::Spatial(_) => None,
        }
    }

    /// The spatial shape, if this is one.
    pub fn as_shape3d(&self) -> Option<&(dyn Shape3d + 'static)> {
        match self {
            SharedShape::Planar(_) => None,
            SharedShape::Spatial(s) => Some(&**s),
        }
    }

    /// Converts this shape to the given planar shape, if it is one.
    pub fn downcast_2d<T: Shape2d>(&self) -> Option<&T> {
        self.as_shape2d()?.as_shape()
    }

    /// Converts this shape to the given spatial shape, if it is one.
    pub fn downcast_3d<T: Shape3d>(&self) -> Option<&T> {
        self.as_shape3d()?.as_shape()
    }
}

impl fmt::Debug for SharedShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SharedShape::Planar(s) => f.debug_tuple("Planar").field(s).finish(),
            SharedShape::Spatial(s) => f.debug_tuple("Spatial").field(s).finish(),
        }
    }
}

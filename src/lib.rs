/*!
footprint
=========

**footprint** answers orientation-aware queries about the physical footprint of a
rigid body, in 2 and 3 dimensions, for motion planners: distance from the rotation
center to the border at a relative bearing, the border point itself, the vertices
and axes of the body under a pose, and the displacement from an external point to
the border.

Every shape is immutable once built and can be queried concurrently.

```
use footprint::math::{Point2, Vector2};
use footprint::shape::{Rectangle, Shape2d};
use footprint::spatial::Pose2;

let shape = Rectangle::new(2.0, 2.0);
let dist = shape.distance_vector_to_point(&Pose2::identity(), &Point2::new(3.0, 3.0));
assert!(approx::relative_eq!(dist, Vector2::new(2.0, 2.0), epsilon = 1.0e-5));
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(not(feature = "std"))]
std::compile_error!("footprint currently requires the `std` feature.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod shape;
pub mod spatial;
pub mod utils;

/// Aliases for the mathematical types used by this crate.
pub mod math {
    pub use na::{Matrix2, Matrix3, Point2, Point3, Rotation2, Rotation3, Vector2, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// Precision used to compare positions and angles: two values are considered equal
    /// when they agree once multiplied by this factor and rounded.
    pub const POSITION_PRECISION: Real = 1.0e4;
}

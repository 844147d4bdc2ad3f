//! Footprints supported by footprint.

pub use self::asymmetric_rectangle::AsymmetricRectangle;
pub use self::border_table::{BorderTable, BORDER_TABLE_SIZE};
pub use self::circle::Circle;
pub use self::config::{keys, ConfigSource, ShapeConfig};
pub use self::cuboid::{Cuboid, HORIZONTAL_PITCH_THRESHOLD};
pub use self::error::ShapeError;
pub use self::factory::{create_shape, ShapeConstructor, ShapeRegistry};
pub use self::rectangle::Rectangle;
pub use self::rectangle_sectors::{RectangleSectors, RectangleSide};
pub use self::shape::{Shape2d, Shape3d, ShapeType, TypedShape, MAX_VERTICES_3D};
pub use self::shared_shape::SharedShape;
pub use self::sphere::Sphere;

mod asymmetric_rectangle;
mod border_table;
mod circle;
mod config;
mod cuboid;
mod error;
mod factory;
mod rectangle;
mod rectangle_sectors;
mod shape;
mod shared_shape;
mod sphere;

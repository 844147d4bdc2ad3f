//! Poses, kinematic states, and the rotation and bearing operations shared by all shapes.

pub use self::point_ops::{PointOps, VectorOps};
pub use self::pose::{Pose2, Pose3};
pub use self::quantize::{quantize, Quantize, RoundedPoint};
pub use self::rotation::{rotation_matrix, Rotate};
pub use self::state::{State2, State3};

mod point_ops;
mod pose;
mod quantize;
mod rotation;
mod state;

//! Various unsorted geometrical and angular operators.

pub use self::angles::{
    angle_error, deg_to_rad, nearest_integer_degree, normalize_angle, normalize_angle_positive,
    rad_to_deg, round_to_degree_precision, round_to_degrees, trunc,
};
pub use self::fast_inv_sqrt::fast_inv_sqrt;
pub use self::intersections::{line_line_intersection2d, line_plane_intersection};
pub use self::segment_projection::{
    distance_to_segment3d, project_point_on_line2d, project_point_on_segment2d,
    project_point_on_segment3d,
};

mod angles;
mod fast_inv_sqrt;
mod intersections;
mod segment_projection;

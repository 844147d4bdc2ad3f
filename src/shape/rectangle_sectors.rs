use crate::math::{Point2, Real};
use crate::spatial::Pose2;
use crate::utils::normalize_angle;

/// A side of a rectangular footprint.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RectangleSide {
    /// The side crossed by the local `+X` axis.
    Front,
    /// The side crossed by the local `+Y` axis.
    Left,
    /// The side crossed by the local `-Y` axis.
    Right,
    /// The side crossed by the local `-X` axis.
    Back,
}

/// The angular sectors of a rectangle whose rotation center is not necessarily its centroid.
///
/// The rectangle spans `[negative_x, positive_x] × [negative_y, positive_y]` in its local
/// frame, with `negative_x, negative_y ≤ 0 ≤ positive_x, positive_y`. Each side is hit by
/// the rays whose bearing lies between the bearings of its two corners.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectangleSectors {
    positive_x: Real,
    negative_x: Real,
    positive_y: Real,
    negative_y: Real,
    // Bearings of the corners, named after the two sides they join.
    front_left: Real,
    back_left: Real,
    back_right: Real,
    front_right: Real,
}

impl RectangleSectors {
    /// Computes the sectors of a rectangle given the signed coordinates of its sides.
    ///
    /// `negative_x` and `negative_y` are expected to be non-positive.
    pub fn new(positive_x: Real, negative_x: Real, positive_y: Real, negative_y: Real) -> Self {
        RectangleSectors {
            positive_x,
            negative_x,
            positive_y,
            negative_y,
            front_left: positive_y.atan2(positive_x),
            back_left: positive_y.atan2(negative_x),
            back_right: negative_y.atan2(negative_x),
            front_right: negative_y.atan2(positive_x),
        }
    }

    /// Computes the sectors of a rectangle centered on its rotation center.
    pub fn symmetric(half_x: Real, half_y: Real) -> Self {
        Self::new(half_x, -half_x, half_y, -half_y)
    }

    /// The signed coordinate of the front side.
    #[inline]
    pub fn positive_x(&self) -> Real {
        self.positive_x
    }

    /// The signed coordinate of the back side.
    #[inline]
    pub fn negative_x(&self) -> Real {
        self.negative_x
    }

    /// The signed coordinate of the left side.
    #[inline]
    pub fn positive_y(&self) -> Real {
        self.positive_y
    }

    /// The signed coordinate of the right side.
    #[inline]
    pub fn negative_y(&self) -> Real {
        self.negative_y
    }

    /// The bearings of the corners, in the same order as [`Self::corners`].
    pub fn corner_angles(&self) -> [Real; 4] {
        [
            self.front_right,
            self.front_left,
            self.back_left,
            self.back_right,
        ]
    }

    /// The side hit by the ray leaving the rotation center at the relative bearing `angle`.
    pub fn side_at(&self, angle: Real) -> RectangleSide {
        let angle = normalize_angle(angle);

        if angle >= self.front_right && angle < self.front_left {
            RectangleSide::Front
        } else if angle >= self.front_left && angle < self.back_left {
            RectangleSide::Left
        } else if angle >= self.back_right && angle < self.front_right {
            RectangleSide::Right
        } else {
            RectangleSide::Back
        }
    }

    /// The corners `(+x, -y)`, `(+x, +y)`, `(-x, +y)` and `(-x, -y)`, in the local frame.
    pub fn corners(&self) -> [Point2<Real>; 4] {
        [
            Point2::new(self.positive_x, self.negative_y),
            Point2::new(self.positive_x, self.positive_y),
            Point2::new(self.negative_x, self.positive_y),
            Point2::new(self.negative_x, self.negative_y),
        ]
    }

    /// The corners of the rectangle placed at `pose`, in world coordinates.
    pub fn corners_at(&self, pose: &Pose2) -> [Point2<Real>; 4] {
        self.corners().map(|pt| pose.transform_point(&pt))
    }

    /// The endpoints of `side`, in the local frame.
    pub fn local_segment(&self, side: RectangleSide) -> (Point2<Real>, Point2<Real>) {
        let [front_right, front_left, back_left, back_right] = self.corners();

        match side {
            RectangleSide::Front => (front_right, front_left),
            RectangleSide::Left => (front_left, back_left),
            RectangleSide::Right => (back_right, front_right),
            RectangleSide::Back => (back_left, back_right),
        }
    }

    /// The endpoints of `side` of the rectangle placed at `pose`, in world coordinates.
    pub fn segment_at(&self, pose: &Pose2, side: RectangleSide) -> (Point2<Real>, Point2<Real>) {
        let (a, b) = self.local_segment(side);
        (pose.transform_point(&a), pose.transform_point(&b))
    }

    /// The distance from the rotation center to the closest side.
    pub fn min_radius(&self) -> Real {
        self.positive_x
            .min(-self.negative_x)
            .min(self.positive_y)
            .min(-self.negative_y)
    }

    /// The distance from the rotation center to the farthest corner.
    pub fn max_radius(&self) -> Real {
        let x = self.positive_x.max(-self.negative_x);
        let y = self.positive_y.max(-self.negative_y);
        x.hypot(y)
    }
}

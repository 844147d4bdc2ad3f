//! Angle normalization and unit conversions.
//!
//! All angles are in radians unless the function name says otherwise.

use crate::math::Real;
use std::f32::consts::{PI, TAU};

/// Maps `angle` to the half-open range `(-π, π]`.
///
/// Non-finite inputs are returned unchanged.
#[inline]
pub fn normalize_angle(angle: Real) -> Real {
    if !angle.is_finite() {
        return angle;
    }

    let angle = angle % TAU;

    if angle <= -PI {
        angle + TAU
    } else if angle > PI {
        angle - TAU
    } else {
        angle
    }
}

/// Maps `angle` to the half-open range `[0, 2π)`.
///
/// Non-finite inputs are returned unchanged.
#[inline]
pub fn normalize_angle_positive(angle: Real) -> Real {
    if !angle.is_finite() {
        return angle;
    }

    let mut angle = angle % TAU;

    if angle < 0.0 {
        angle += TAU;
    }

    // Adding TAU to a tiny negative value can round up to TAU itself.
    if angle >= TAU {
        0.0
    } else {
        angle
    }
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: Real) -> Real {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(radians: Real) -> Real {
    radians.to_degrees()
}

/// The signed difference `to - from`, normalized to `(-π, π]`.
#[inline]
pub fn angle_error(from: Real, to: Real) -> Real {
    normalize_angle(to - from)
}

/// Drops the fractional part of `angle` once expressed in degrees.
///
/// The truncation goes towards zero, so `-10.7°` becomes `-10°`.
#[inline]
pub fn round_to_degree_precision(angle: Real) -> Real {
    deg_to_rad(rad_to_deg(angle).trunc())
}

/// Rounds an angle given in degrees to the nearest integer, ties away from zero.
#[inline]
pub fn nearest_integer_degree(degrees: Real) -> i32 {
    degrees.round() as i32
}

/// Normalizes `angle` and rounds it to the nearest integer degree in `[-180, 180]`.
///
/// Ties are rounded away from zero.
#[inline]
pub fn round_to_degrees(angle: Real) -> i32 {
    nearest_integer_degree(rad_to_deg(normalize_angle(angle))).clamp(-180, 180)
}

/// Rounds `value` to the given number of decimal digits.
#[inline]
pub fn trunc(value: Real, digits: i32) -> Real {
    let scale = (10.0 as Real).powi(digits);
    (value * scale).round() / scale
}

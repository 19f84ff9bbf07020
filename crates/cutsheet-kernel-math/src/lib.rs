#![warn(missing_docs)]

//! 2D math primitives for the cutsheet drawing kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types and
//! pure, total functions for boundary construction: point/vector math,
//! polygon winding and containment, intersection tests, quadratic
//! bezier evaluation, and the raw⇄display axis swap.
//!
//! Everything here is side-effect free and safe to call with
//! degenerate input: empty polygons yield empty or zero results,
//! coincident points yield zero vectors, never a panic.

use nalgebra::Vector2;

/// A point in the 2D drawing plane (inches).
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in the 2D drawing plane.
pub type Vec2 = Vector2<f64>;

mod bezier;
mod geometry;
pub mod space;

pub use bezier::QuadBezier;
pub use geometry::{
    bounds, dedupe_points, distance, nearest_point_index, normalized_index, outward_normal,
    point_line_distance, point_segment_distance, polygon_contains, polygon_is_clockwise,
    ray_segment_intersection, rotate, unit_vector, Rect,
};

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in inches. Points closer than this
    /// are treated as coincident (and collapsed by
    /// [`dedupe_points`]).
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default drawing tolerances (1e-3 in linear, 1e-6 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-3,
        angular: 1e-6,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: Point2, b: Point2) -> bool {
        (b - a).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//! Quadratic bezier evaluation and subdivision.

use crate::Point2;

/// A quadratic bezier arc: start, one control point, end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBezier {
    /// Start point (`t = 0`).
    pub start: Point2,
    /// Control point.
    pub control: Point2,
    /// End point (`t = 1`).
    pub end: Point2,
}

impl QuadBezier {
    /// Create a new arc.
    pub fn new(start: Point2, control: Point2, end: Point2) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Evaluate the arc at parameter `t`.
    pub fn point(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        Point2::from(
            self.start.coords * (u * u)
                + self.control.coords * (2.0 * u * t)
                + self.end.coords * (t * t),
        )
    }

    /// De Casteljau subdivision at `t`.
    ///
    /// The halves share the exact split point and reproduce the
    /// original endpoints: `left.start == start`, `right.end == end`,
    /// `left.end == right.start`.
    pub fn split(&self, t: f64) -> (QuadBezier, QuadBezier) {
        let a = lerp(self.start, self.control, t);
        let b = lerp(self.control, self.end, t);
        let m = lerp(a, b, t);
        (
            QuadBezier::new(self.start, a, m),
            QuadBezier::new(m, b, self.end),
        )
    }

    /// Sample the arc into `segments + 1` points including both
    /// endpoints. At least one segment is always produced.
    pub fn sample(&self, segments: usize) -> Vec<Point2> {
        let n = segments.max(1);
        (0..=n).map(|i| self.point(i as f64 / n as f64)).collect()
    }
}

fn lerp(a: Point2, b: Point2, t: f64) -> Point2 {
    Point2::from(a.coords * (1.0 - t) + b.coords * t)
}

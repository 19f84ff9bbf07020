//! Point, vector, and polygon functions.

use crate::{Point2, Tolerance, Vec2};

/// Euclidean distance between two points.
pub fn distance(a: Point2, b: Point2) -> f64 {
    (b - a).norm()
}

/// Unit vector from `from` toward `to`.
///
/// Returns the zero vector when the endpoints coincide within
/// tolerance, so callers never divide by a near-zero length.
pub fn unit_vector(from: Point2, to: Point2) -> Vec2 {
    let d = to - from;
    let len = d.norm();
    if len < Tolerance::DEFAULT.linear {
        Vec2::zeros()
    } else {
        d / len
    }
}

/// Rotate a vector about the origin by `angle` radians.
pub fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Collapse consecutive points closer than the linear tolerance.
///
/// A non-empty input always yields at least one point. The first point
/// is kept verbatim; a closing point coincident with the first is also
/// dropped so closed sequences stay minimal.
pub fn dedupe_points(points: &[Point2]) -> Vec<Point2> {
    let tol = Tolerance::DEFAULT;
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for &p in points {
        match out.last() {
            Some(&last) if tol.points_equal(last, p) => {}
            _ => out.push(p),
        }
    }
    if out.len() > 1 && tol.points_equal(out[0], *out.last().unwrap()) {
        out.pop();
    }
    out
}

/// An axis-aligned rectangle, `min` through `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Lower-left corner (minimum X and Y).
    pub min: Point2,
    /// Upper-right corner (maximum X and Y).
    pub max: Point2,
}

impl Rect {
    /// The degenerate zero rectangle at the origin.
    pub const ZERO: Self = Self {
        min: Point2::new(0.0, 0.0),
        max: Point2::new(0.0, 0.0),
    };

    /// Rectangle from explicit corners (not reordered).
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Rectangle of `width × height` centered at `(cx, cy)`.
    pub fn from_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self {
            min: Point2::new(cx - hw, cy - hh),
            max: Point2::new(cx + hw, cy + hh),
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point.
    pub fn center(&self) -> Point2 {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Whether `p` lies inside, expanded outward by `tol`.
    pub fn contains(&self, p: Point2, tol: f64) -> bool {
        p.x >= self.min.x - tol
            && p.x <= self.max.x + tol
            && p.y >= self.min.y - tol
            && p.y <= self.max.y + tol
    }

    /// Whether two rectangles overlap with positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Closest point of the rectangle (boundary or interior) to `p`.
    pub fn closest_point(&self, p: Point2) -> Point2 {
        Point2::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Corner points in boundary order: `(min,min)`, `(max,min)`,
    /// `(max,max)`, `(min,max)`.
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }
}

/// Axis-aligned bounding box of a point set; [`Rect::ZERO`] for empty
/// input.
pub fn bounds(points: &[Point2]) -> Rect {
    let mut iter = points.iter();
    let first = match iter.next() {
        Some(p) => *p,
        None => return Rect::ZERO,
    };
    let mut min = first;
    let mut max = first;
    for p in iter {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Rect::new(min, max)
}

/// Shoelace winding test in the Y-down drawing frame.
///
/// Polygons with fewer than three points are not clockwise.
pub fn polygon_is_clockwise(points: &[Point2]) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum += (b.x - a.x) * (b.y + a.y);
    }
    sum > 0.0
}

/// Even-odd containment test against a closed polygon.
pub fn polygon_contains(points: &[Point2], p: Point2) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Wrap an index into `[0, count)`. Returns 0 when `count` is zero.
pub fn normalized_index(i: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    i.rem_euclid(count as isize) as usize
}

/// Index of the point closest to `target` (minimal squared distance,
/// linear scan). `None` for an empty slice.
pub fn nearest_point_index(points: &[Point2], target: Point2) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let d2 = (p - target).norm_squared();
        match best {
            Some((_, bd2)) if bd2 <= d2 => {}
            _ => best = Some((i, d2)),
        }
    }
    best.map(|(i, _)| i)
}

/// Intersection of the ray `origin + t·dir` (t ≥ 0) with the segment
/// `a..b`.
///
/// `None` when the ray points away from the segment, the hit parameter
/// lies outside `[0, 1]` on the segment, or ray and segment are
/// parallel.
pub fn ray_segment_intersection(origin: Point2, dir: Vec2, a: Point2, b: Point2) -> Option<Point2> {
    let s = b - a;
    let denom = dir.x * s.y - dir.y * s.x;
    if denom.abs() < 1e-12 {
        return None;
    }
    let qp = a - origin;
    let t = (qp.x * s.y - qp.y * s.x) / denom;
    let u = (qp.x * dir.y - qp.y * dir.x) / denom;
    let eps = 1e-9;
    if t < -eps || u < -eps || u > 1.0 + eps {
        return None;
    }
    Some(origin + dir * t.max(0.0))
}

/// Perpendicular distance from `p` to the infinite line through `a`
/// and `b`. Falls back to point distance when the line is degenerate.
pub fn point_line_distance(p: Point2, a: Point2, b: Point2) -> f64 {
    let d = b - a;
    let len = d.norm();
    if len < Tolerance::DEFAULT.linear {
        return distance(p, a);
    }
    let ap = p - a;
    (d.x * ap.y - d.y * ap.x).abs() / len
}

/// Distance from `p` to the segment `a..b`, clamping the projection
/// parameter to `[0, 1]`.
pub fn point_segment_distance(p: Point2, a: Point2, b: Point2) -> f64 {
    let d = b - a;
    let len2 = d.norm_squared();
    if len2 < 1e-12 {
        return distance(p, a);
    }
    let t = ((p - a).dot(&d) / len2).clamp(0.0, 1.0);
    distance(p, a + d * t)
}

/// Unit normal of the edge `start..end` pointing away from the filled
/// interior, given the polygon's winding.
pub fn outward_normal(start: Point2, end: Point2, clockwise: bool) -> Vec2 {
    let d = unit_vector(start, end);
    if clockwise {
        Vec2::new(-d.y, d.x)
    } else {
        Vec2::new(d.y, -d.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        assert_relative_eq!(
            distance(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)),
            5.0
        );
        let p = Point2::new(7.2, -1.5);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn test_unit_vector() {
        let u = unit_vector(Point2::new(1.0, 1.0), Point2::new(4.0, 1.0));
        assert_relative_eq!(u.x, 1.0);
        assert_relative_eq!(u.y, 0.0);

        let zero = unit_vector(Point2::new(2.0, 2.0), Point2::new(2.0, 2.0));
        assert_eq!(zero, Vec2::zeros());
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = rotate(Vec2::new(1.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!(r.x.abs() < 1e-12);
        assert_relative_eq!(r.y, 1.0);
    }

    #[test]
    fn test_dedupe_points() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1e-4, 1e-4),
            Point2::new(1.0, 0.0),
        ];
        assert_eq!(dedupe_points(&pts).len(), 2);

        // Never empties a non-empty input.
        let same = [Point2::new(2.0, 2.0); 5];
        assert_eq!(dedupe_points(&same).len(), 1);
        assert!(dedupe_points(&[]).is_empty());
    }

    #[test]
    fn test_dedupe_drops_closing_point() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        assert_eq!(dedupe_points(&pts).len(), 3);
    }

    #[test]
    fn test_bounds() {
        let r = bounds(&[
            Point2::new(1.0, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ]);
        assert_eq!(r.min, Point2::new(-2.0, -1.0));
        assert_eq!(r.max, Point2::new(4.0, 5.0));
        assert_eq!(bounds(&[]), Rect::ZERO);
    }

    #[test]
    fn test_polygon_winding() {
        let cw = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        assert!(polygon_is_clockwise(&cw));

        let ccw: Vec<Point2> = cw.iter().rev().copied().collect();
        assert!(!polygon_is_clockwise(&ccw));

        assert!(!polygon_is_clockwise(&cw[..2]));
    }

    #[test]
    fn test_polygon_contains() {
        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        assert!(polygon_contains(&square, Point2::new(5.0, 5.0)));
        assert!(!polygon_contains(&square, Point2::new(-1.0, 5.0)));
        assert!(!polygon_contains(&square, Point2::new(5.0, 11.0)));
    }

    #[test]
    fn test_normalized_index() {
        assert_eq!(normalized_index(5, 4), 1);
        assert_eq!(normalized_index(-1, 4), 3);
        assert_eq!(normalized_index(4, 4), 0);
        assert_eq!(normalized_index(7, 0), 0);
    }

    #[test]
    fn test_nearest_point_index() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 5.0),
        ];
        assert_eq!(nearest_point_index(&pts, Point2::new(4.8, 0.1)), Some(1));
        assert_eq!(nearest_point_index(&[], Point2::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_ray_segment_intersection() {
        let hit = ray_segment_intersection(
            Point2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Point2::new(5.0, -1.0),
            Point2::new(5.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(hit.x, 5.0);
        assert!(hit.y.abs() < 1e-12);

        // Behind the origin.
        assert!(ray_segment_intersection(
            Point2::new(0.0, 0.0),
            Vec2::new(-1.0, 0.0),
            Point2::new(5.0, -1.0),
            Point2::new(5.0, 1.0),
        )
        .is_none());

        // Misses the segment span.
        assert!(ray_segment_intersection(
            Point2::new(0.0, 5.0),
            Vec2::new(1.0, 0.0),
            Point2::new(5.0, -1.0),
            Point2::new(5.0, 1.0),
        )
        .is_none());
    }

    #[test]
    fn test_point_distances() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        assert_relative_eq!(point_line_distance(Point2::new(5.0, 3.0), a, b), 3.0);
        // Beyond the segment end the clamped distance grows.
        assert_relative_eq!(point_line_distance(Point2::new(15.0, 3.0), a, b), 3.0);
        assert_relative_eq!(
            point_segment_distance(Point2::new(15.0, 0.0), a, b),
            5.0
        );
        assert_relative_eq!(point_segment_distance(Point2::new(5.0, 3.0), a, b), 3.0);
    }

    #[test]
    fn test_outward_normal() {
        // Clockwise unit square (Y-down frame): interior is x > 0 for
        // the left edge (0,0)->(0,1).
        let n = outward_normal(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0), true);
        assert_relative_eq!(n.x, -1.0);
        assert!(n.y.abs() < 1e-12);

        let n = outward_normal(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0), false);
        assert_relative_eq!(n.x, 1.0);
    }

    #[test]
    fn test_rect_queries() {
        let r = Rect::from_center(5.0, 5.0, 4.0, 2.0);
        assert_eq!(r.min, Point2::new(3.0, 4.0));
        assert_eq!(r.max, Point2::new(7.0, 6.0));
        assert!(r.contains(Point2::new(3.0, 4.0), 0.0));
        assert!(!r.contains(Point2::new(2.9, 4.0), 0.0));
        assert!(r.intersects(&Rect::from_center(7.5, 5.0, 2.0, 2.0)));
        assert!(!r.intersects(&Rect::from_center(10.0, 5.0, 2.0, 2.0)));
        assert_eq!(r.closest_point(Point2::new(0.0, 5.0)), Point2::new(3.0, 5.0));
    }
}

//! Notch splicing: merging boundary cutouts into the outer polygon.
//!
//! Whether a cutout is a notch is re-derived from geometry on every
//! rebuild; the stored `is_notch` flag is never consulted. A notch is
//! spliced by walking the outline, finding where it enters and leaves
//! the cutout footprint, dropping the swallowed vertices and inserting
//! a detour around the footprint perimeter between the crossing
//! points. A notch whose crossing pattern cannot be resolved to a
//! single entry/exit pair (tangencies, piece-splitting slots, a
//! footprint swallowing the whole outline) is skipped and the boundary
//! built as if it were absent.

use cutsheet_ir::{Cutout, CutoutKind, Piece, PieceEdge, ShapeKind};
use cutsheet_kernel_math::{
    distance, nearest_point_index, point_segment_distance, polygon_contains, Point2, Rect,
    Tolerance,
};

use crate::template::template_points;

/// Samples inserted for a circular notch detour arc.
const CIRCLE_DETOUR_SEGMENTS: usize = 16;

/// Crossing parameters this close to a segment endpoint are treated as
/// vertex hits, not interior crossings.
const PARAM_EPS: f64 = 1e-9;

/// Nudge used to move an on-boundary probe point off the boundary
/// before a containment test.
const PROBE_NUDGE: f64 = 1e-6;

/// The solid region a cutout removes, in raw space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    /// Axis-aligned rectangular footprint.
    Rect(Rect),
    /// Circular footprint.
    Circle {
        /// Center in raw space.
        center: Point2,
        /// Radius in inches.
        radius: f64,
    },
}

impl Footprint {
    /// The footprint of a cutout record.
    pub fn of(cutout: &Cutout) -> Self {
        match cutout.kind {
            CutoutKind::Circle => Footprint::Circle {
                center: Point2::new(cutout.center_x, cutout.center_y),
                radius: cutout.width / 2.0,
            },
            CutoutKind::Square | CutoutKind::Rectangle => Footprint::Rect(Rect::from_center(
                cutout.center_x,
                cutout.center_y,
                cutout.width,
                cutout.height,
            )),
        }
    }

    /// Axis-aligned bounds of the footprint.
    pub fn bounds(&self) -> Rect {
        match *self {
            Footprint::Rect(r) => r,
            Footprint::Circle { center, radius } => {
                Rect::from_center(center.x, center.y, radius * 2.0, radius * 2.0)
            }
        }
    }

    /// Footprint center.
    pub fn center(&self) -> Point2 {
        match *self {
            Footprint::Rect(r) => r.center(),
            Footprint::Circle { center, .. } => center,
        }
    }

    /// Whether `p` lies inside the footprint expanded outward by
    /// `tol` (negative `tol` shrinks it).
    pub fn contains(&self, p: Point2, tol: f64) -> bool {
        match *self {
            Footprint::Rect(r) => r.contains(p, tol),
            Footprint::Circle { center, radius } => distance(center, p) <= radius + tol,
        }
    }

    /// Parameters `t` where the open segment `a..b` crosses the
    /// footprint boundary, sorted ascending. Endpoint grazes are
    /// excluded.
    fn segment_crossings(&self, a: Point2, b: Point2) -> Vec<f64> {
        let mut ts: Vec<f64> = Vec::new();
        match *self {
            Footprint::Rect(r) => {
                let corners = r.corners();
                for i in 0..4 {
                    let (sa, sb) = (corners[i], corners[(i + 1) % 4]);
                    if let Some(t) = segment_segment_param(a, b, sa, sb) {
                        ts.push(t);
                    }
                }
            }
            Footprint::Circle { center, radius } => {
                let d = b - a;
                let f = a - center;
                let qa = d.norm_squared();
                if qa > 1e-18 {
                    let qb = 2.0 * f.dot(&d);
                    let qc = f.norm_squared() - radius * radius;
                    let disc = qb * qb - 4.0 * qa * qc;
                    if disc > 0.0 {
                        let sq = disc.sqrt();
                        ts.push((-qb - sq) / (2.0 * qa));
                        ts.push((-qb + sq) / (2.0 * qa));
                    }
                }
            }
        }
        ts.retain(|&t| t > PARAM_EPS && t < 1.0 - PARAM_EPS);
        ts.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
        ts.dedup_by(|x, y| (*x - *y).abs() < PARAM_EPS);
        ts
    }

    /// Whether the segment `a..b` crosses into the footprint.
    pub(crate) fn intersects_segment(&self, a: Point2, b: Point2) -> bool {
        if self.contains(a, 0.0) || self.contains(b, 0.0) {
            return true;
        }
        !self.segment_crossings(a, b).is_empty()
    }

    /// Detour from `entry` to `exit` around the footprint perimeter,
    /// both crossing points included.
    ///
    /// Of the two ways around, the valid one keeps every intermediate
    /// point strictly inside the outer template polygon (the detour
    /// carves into the piece, never out of it). When both directions
    /// qualify the one passing more footprint corners wins; when
    /// neither does the crossings are joined by a straight cut.
    fn detour(&self, entry: Point2, exit: Point2, outer: &[Point2]) -> Vec<Point2> {
        let inner: Vec<Point2> = match *self {
            Footprint::Rect(r) => {
                let forward = rect_walk(&r, entry, exit, false);
                let backward = rect_walk(&r, entry, exit, true);
                let fwd_ok = forward.iter().all(|&c| strictly_inside(outer, c));
                let bwd_ok = backward.iter().all(|&c| strictly_inside(outer, c));
                match (fwd_ok, bwd_ok) {
                    (true, true) => {
                        if forward.len() >= backward.len() {
                            forward
                        } else {
                            backward
                        }
                    }
                    (true, false) => forward,
                    (false, true) => backward,
                    (false, false) => Vec::new(),
                }
            }
            Footprint::Circle { center, radius } => {
                let forward = arc_walk(center, radius, entry, exit, false);
                let backward = arc_walk(center, radius, entry, exit, true);
                let mid = |pts: &[Point2]| pts[pts.len() / 2];
                if !forward.is_empty() && strictly_inside(outer, mid(&forward)) {
                    forward
                } else if !backward.is_empty() && strictly_inside(outer, mid(&backward)) {
                    backward
                } else {
                    Vec::new()
                }
            }
        };
        let mut out = vec![entry];
        out.extend(inner);
        out.push(exit);
        out
    }
}

/// Whether a point is inside the polygon and clear of its boundary.
fn strictly_inside(polygon: &[Point2], p: Point2) -> bool {
    let mut min_dist = f64::MAX;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        min_dist = min_dist.min(point_segment_distance(p, a, b));
    }
    min_dist > PROBE_NUDGE && polygon_contains(polygon, p)
}

/// Parameter on `a..b` where it crosses `c..d`, if the crossing lies
/// within both segments.
fn segment_segment_param(a: Point2, b: Point2, c: Point2, d: Point2) -> Option<f64> {
    let r = b - a;
    let s = d - c;
    let denom = r.x * s.y - r.y * s.x;
    if denom.abs() < 1e-12 {
        return None;
    }
    let qp = c - a;
    let t = (qp.x * s.y - qp.y * s.x) / denom;
    let u = (qp.x * r.y - qp.y * r.x) / denom;
    if u < -PARAM_EPS || u > 1.0 + PARAM_EPS {
        return None;
    }
    Some(t)
}

/// Footprint corners passed when walking the rectangle perimeter from
/// `entry` to `exit`, in walk order.
fn rect_walk(r: &Rect, entry: Point2, exit: Point2, backward: bool) -> Vec<Point2> {
    let corners = r.corners();
    let side_lens = [r.width(), r.height(), r.width(), r.height()];
    let total: f64 = side_lens.iter().sum();
    if total < 1e-12 {
        return Vec::new();
    }
    let corner_pos: Vec<f64> = {
        let mut acc = 0.0;
        let mut v = Vec::with_capacity(4);
        for len in side_lens {
            v.push(acc);
            acc += len;
        }
        v
    };
    let pos_of = |p: Point2| -> f64 {
        let mut best = (f64::MAX, 0.0);
        for i in 0..4 {
            let (a, b) = (corners[i], corners[(i + 1) % 4]);
            let d = point_segment_distance(p, a, b);
            if d < best.0 {
                let seg = b - a;
                let len2 = seg.norm_squared();
                let t = if len2 < 1e-12 {
                    0.0
                } else {
                    ((p - a).dot(&seg) / len2).clamp(0.0, 1.0)
                };
                best = (d, corner_pos[i] + t * side_lens[i]);
            }
        }
        best.1
    };
    let pe = pos_of(entry);
    let px = pos_of(exit);
    let span = if backward {
        (pe - px).rem_euclid(total)
    } else {
        (px - pe).rem_euclid(total)
    };
    let mut passed: Vec<(f64, Point2)> = Vec::new();
    for i in 0..4 {
        let along = if backward {
            (pe - corner_pos[i]).rem_euclid(total)
        } else {
            (corner_pos[i] - pe).rem_euclid(total)
        };
        if along > PARAM_EPS && along < span - PARAM_EPS {
            passed.push((along, corners[i]));
        }
    }
    passed.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(std::cmp::Ordering::Equal));
    passed.into_iter().map(|(_, c)| c).collect()
}

/// Intermediate samples of the circular arc from `entry` to `exit`.
fn arc_walk(center: Point2, radius: f64, entry: Point2, exit: Point2, backward: bool) -> Vec<Point2> {
    if radius < 1e-12 {
        return Vec::new();
    }
    let ae = (entry.y - center.y).atan2(entry.x - center.x);
    let ax = (exit.y - center.y).atan2(exit.x - center.x);
    let sweep = if backward {
        -((ae - ax).rem_euclid(std::f64::consts::TAU))
    } else {
        (ax - ae).rem_euclid(std::f64::consts::TAU)
    };
    if sweep.abs() < 1e-9 {
        return Vec::new();
    }
    (1..CIRCLE_DETOUR_SEGMENTS)
        .map(|i| {
            let theta = ae + sweep * i as f64 / CIRCLE_DETOUR_SEGMENTS as f64;
            Point2::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}

/// Whether a cutout merges into the outer boundary instead of being an
/// interior hole.
///
/// True when the footprint reaches the raw bounding box of the piece,
/// or crosses the template outline directly (a sloped or curved
/// outline can be crossed well inside the bounding box).
pub fn is_boundary_notch(piece: &Piece, cutout: &Cutout) -> bool {
    let fp = Footprint::of(cutout);
    let fb = fp.bounds();
    let tol = Tolerance::DEFAULT.linear;
    if fb.min.x <= tol
        || fb.min.y <= tol
        || fb.max.x >= piece.width - tol
        || fb.max.y >= piece.height - tol
    {
        return true;
    }
    if matches!(piece.shape, ShapeKind::Rectangle) {
        return false;
    }
    let outline = template_points(piece);
    (0..outline.len())
        .any(|i| fp.intersects_segment(outline[i], outline[(i + 1) % outline.len()]))
}

/// The nominal edges a boundary notch bites into, in traversal order.
///
/// Derived from which sides of the raw bounding box the footprint
/// reaches; the right triangle's hypotenuse is reported when the
/// footprint crosses it directly.
pub fn touched_sides(piece: &Piece, cutout: &Cutout) -> Vec<PieceEdge> {
    let fp = Footprint::of(cutout);
    let fb = fp.bounds();
    let tol = Tolerance::DEFAULT.linear;
    let mut out = Vec::new();
    let mut push = |edge: PieceEdge| {
        if edge.is_valid_for(piece.shape) && !out.contains(&edge) {
            out.push(edge);
        }
    };
    if fb.min.y <= tol {
        push(PieceEdge::Top);
        push(PieceEdge::LegA);
    }
    if fb.max.x >= piece.width - tol {
        push(PieceEdge::Right);
    }
    if fb.max.y >= piece.height - tol {
        push(PieceEdge::Bottom);
    }
    if fb.min.x <= tol {
        push(PieceEdge::Left);
        push(PieceEdge::LegB);
    }
    if piece.shape == ShapeKind::RightTriangle {
        let a = Point2::new(piece.width, 0.0);
        let b = Point2::new(0.0, piece.height);
        if fp.intersects_segment(a, b) {
            push(PieceEdge::Hypotenuse);
        }
    }
    out
}

/// The outer boundary polygon with every boundary notch spliced in.
///
/// Interior cutouts leave the outline untouched. The result keeps the
/// template winding and starts at the vertex nearest the template
/// start point.
pub fn spliced_points(piece: &Piece) -> Vec<Point2> {
    let mut pts = template_points(piece);
    for cutout in &piece.cutouts {
        if !is_boundary_notch(piece, cutout) {
            continue;
        }
        if let Some(next) = splice_one(&pts, &Footprint::of(cutout)) {
            pts = next;
        }
    }
    pts
}

/// Splice one footprint into the polygon. `None` means the notch could
/// not be resolved and the polygon is left unchanged.
fn splice_one(polygon: &[Point2], fp: &Footprint) -> Option<Vec<Point2>> {
    let n = polygon.len();
    if n < 3 {
        return None;
    }
    // Start the walk at a vertex clearly outside the footprint.
    let start = (0..n).find(|&i| !fp.contains(polygon[i], PROBE_NUDGE))?;
    let pts: Vec<Point2> = (0..n).map(|i| polygon[(start + i) % n]).collect();

    let mut out: Vec<Point2> = vec![pts[0]];
    let mut inside = false;
    let mut entry: Option<Point2> = None;
    let mut pairs = 0usize;

    for i in 0..n {
        let a = pts[i];
        let b = pts[(i + 1) % n];
        for t in fp.segment_crossings(a, b) {
            let c = a + (b - a) * t;
            if inside {
                inside = false;
                pairs += 1;
                if pairs > 1 {
                    return None;
                }
                let e = entry.take()?;
                out.extend(fp.detour(e, c, polygon));
            } else {
                inside = true;
                entry = Some(c);
            }
        }
        // The walk state must agree with where the vertex actually is;
        // tangent grazes and odd crossing counts show up here.
        if fp.contains(b, -PROBE_NUDGE) != inside && !on_footprint_boundary(fp, b) {
            return None;
        }
        if (i + 1) % n != 0 && !inside {
            out.push(b);
        }
    }
    if pairs != 1 || inside {
        return None;
    }

    // Keep the start vertex stable across splices.
    let anchor = polygon[0];
    if let Some(k) = nearest_point_index(&out, anchor) {
        out.rotate_left(k);
    }
    Some(out)
}

fn on_footprint_boundary(fp: &Footprint, p: Point2) -> bool {
    fp.contains(p, PROBE_NUDGE) && !fp.contains(p, -PROBE_NUDGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutsheet_ir::Piece;
    use cutsheet_kernel_math::{bounds, polygon_is_clockwise};

    fn has_point(pts: &[Point2], x: f64, y: f64) -> bool {
        pts.iter().any(|p| (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6)
    }

    #[test]
    fn test_interior_cutout_is_not_a_notch() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.cutouts.push(Cutout::square(2.0, 12.0, 9.0));
        assert!(!is_boundary_notch(&p, &p.cutouts[0]));
        assert_eq!(spliced_points(&p).len(), 4);
    }

    #[test]
    fn test_corner_notch_splice() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        // 2x2 square notch at the origin corner.
        p.cutouts.push(Cutout::square(2.0, 1.0, 1.0));
        let c = p.cutouts[0].clone();
        assert!(is_boundary_notch(&p, &c));

        let pts = spliced_points(&p);
        assert_eq!(pts.len(), 6);
        // The origin corner is gone, replaced by the notch corner.
        assert!(!has_point(&pts, 0.0, 0.0));
        assert!(has_point(&pts, 2.0, 2.0));
        assert!(has_point(&pts, 2.0, 0.0));
        assert!(has_point(&pts, 0.0, 2.0));
        assert_eq!(
            polygon_is_clockwise(&pts),
            polygon_is_clockwise(&template_points(&p))
        );
    }

    #[test]
    fn test_mid_edge_notch_splice() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        // 4x2 notch straddling the top edge.
        p.cutouts.push(Cutout::rectangle(4.0, 2.0, 12.0, 0.0));
        let pts = spliced_points(&p);
        assert_eq!(pts.len(), 8);
        assert!(has_point(&pts, 10.0, 0.0));
        assert!(has_point(&pts, 10.0, 1.0));
        assert!(has_point(&pts, 14.0, 1.0));
        assert!(has_point(&pts, 14.0, 0.0));
    }

    #[test]
    fn test_circular_notch_splice() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        // 4"-diameter bite centered on the top edge.
        p.cutouts.push(Cutout::circle(4.0, 12.0, 0.0));
        let pts = spliced_points(&p);
        assert!(pts.len() > 4);
        // Deepest point of the bite sits on the arc.
        assert!(pts
            .iter()
            .any(|q| (q.y - 2.0).abs() < 0.05 && (q.x - 12.0).abs() < 0.5));
        // Every arc point stays within the footprint circle.
        for q in &pts {
            if q.y > 1e-6 && (q.x - 12.0).abs() < 2.1 {
                assert!(distance(*q, Point2::new(12.0, 0.0)) < 2.0 + 1e-6);
            }
        }
    }

    #[test]
    fn test_full_width_slot_is_skipped() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        // A slot spanning the whole width would split the piece in two.
        p.cutouts.push(Cutout::rectangle(26.0, 2.0, 12.0, 9.0));
        assert_eq!(spliced_points(&p).len(), 4);
    }

    #[test]
    fn test_footprint_swallowing_piece_is_skipped() {
        let mut p = Piece::rectangle(4.0, 4.0).unwrap();
        p.cutouts.push(Cutout::square(20.0, 2.0, 2.0));
        assert_eq!(spliced_points(&p).len(), 4);
    }

    #[test]
    fn test_hypotenuse_notch_detected() {
        let mut p = Piece::right_triangle(20.0, 20.0).unwrap();
        // Centered on the hypotenuse midpoint, clear of the bounding box.
        p.cutouts.push(Cutout::square(3.0, 10.0, 10.0));
        let c = p.cutouts[0].clone();
        assert!(is_boundary_notch(&p, &c));
        assert_eq!(touched_sides(&p, &c), vec![PieceEdge::Hypotenuse]);
    }

    #[test]
    fn test_touched_sides_corner_notch() {
        let p = Piece::rectangle(24.0, 18.0).unwrap();
        let c = Cutout::square(2.0, 1.0, 1.0);
        assert_eq!(touched_sides(&p, &c), vec![PieceEdge::Top, PieceEdge::Left]);
    }

    #[test]
    fn test_notch_keeps_start_anchor() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        // Notch far from the start corner: vertex 0 must stay put.
        p.cutouts.push(Cutout::square(2.0, 23.0, 17.0));
        let pts = spliced_points(&p);
        assert_eq!(pts[0], Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_bounds_of_point_set() {
        // Footprint bounds agree with the generic point bounds.
        let c = Cutout::rectangle(4.0, 2.0, 10.0, 5.0);
        let fp = Footprint::of(&c);
        let r = fp.bounds();
        let pts = match fp {
            Footprint::Rect(r) => r.corners().to_vec(),
            _ => unreachable!(),
        };
        assert_eq!(bounds(&pts), r);
    }
}

//! Straight boundary segments classified back to nominal edges.
//!
//! Notching breaks a nominal edge into several straight remnants, and
//! adds detour walls parallel to other edges. Edge treatments are
//! addressed per segment, so the spliced outline is regrouped into
//! maximal collinear runs and each run is attributed to the nominal
//! edge it is parallel and nearest to. Runs with no parallel nominal
//! edge (arc samples) carry no treatment identity and are omitted.

use cutsheet_ir::{Piece, PieceEdge, ShapeKind};
use cutsheet_kernel_math::{point_line_distance, unit_vector, Point2, Tolerance, Vec2};

use crate::notch::spliced_points;
use crate::template::{edge_chord, shape_edges};

/// One straight run of the spliced outline, attributed to a nominal
/// edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySegment {
    /// The nominal edge this run belongs to.
    pub edge: PieceEdge,
    /// Sequence index among this edge's segments, in outline traversal
    /// order.
    pub index: usize,
    /// Run start point.
    pub start: Point2,
    /// Run end point.
    pub end: Point2,
    /// Outline vertex index of the run start.
    pub start_index: usize,
    /// Outline vertex index of the run end.
    pub end_index: usize,
}

fn parallel(a: Vec2, b: Vec2) -> bool {
    (a.x * b.y - a.y * b.x).abs() < Tolerance::DEFAULT.angular
        && a.norm_squared() > 0.0
        && b.norm_squared() > 0.0
}

/// Straight boundary segments of the notch-spliced outline.
///
/// Circles have no nominal edges and yield an empty set.
pub fn boundary_segments(piece: &Piece) -> Vec<BoundarySegment> {
    if piece.shape == ShapeKind::Circle {
        return Vec::new();
    }
    let pts = spliced_points(piece);
    let n = pts.len();
    if n < 3 {
        return Vec::new();
    }
    let dir = |i: usize| unit_vector(pts[i], pts[(i + 1) % n]);

    // Group edges into maximal collinear runs, starting at a direction
    // break so no run is split across the seam.
    let start = (0..n)
        .find(|&v| !parallel(dir((v + n - 1) % n), dir(v)))
        .unwrap_or(0);
    let mut runs: Vec<(usize, usize)> = Vec::new();
    let mut run_start = start;
    let mut run_len = 1usize;
    for k in 1..n {
        let i = (start + k) % n;
        if parallel(dir((i + n - 1) % n), dir(i)) {
            run_len += 1;
        } else {
            runs.push((run_start, run_len));
            run_start = i;
            run_len = 1;
        }
    }
    runs.push((run_start, run_len));

    // Attribute each run to the parallel nominal edge whose line it is
    // nearest to, then number segments per edge in traversal order.
    let edges: Vec<(PieceEdge, Point2, Point2)> = shape_edges(piece.shape)
        .into_iter()
        .filter_map(|e| edge_chord(piece, e).map(|(a, b)| (e, a, b)))
        .collect();
    let mut classified: Vec<(usize, usize, PieceEdge)> = Vec::new();
    for &(s, len) in &runs {
        let e = (s + len) % n;
        let u = unit_vector(pts[s], pts[e]);
        let mid = Point2::from((pts[s].coords + pts[e].coords) / 2.0);
        let mut best: Option<(f64, PieceEdge)> = None;
        for &(edge, a, b) in &edges {
            if !parallel(u, unit_vector(a, b)) {
                continue;
            }
            let d = point_line_distance(mid, a, b);
            match best {
                Some((bd, _)) if bd <= d => {}
                _ => best = Some((d, edge)),
            }
        }
        if let Some((_, edge)) = best {
            classified.push((s, e, edge));
        }
    }
    classified.sort_by_key(|&(s, _, _)| s);

    let mut counts: Vec<(PieceEdge, usize)> = Vec::new();
    let mut out = Vec::with_capacity(classified.len());
    for (s, e, edge) in classified {
        let index = match counts.iter_mut().find(|(k, _)| *k == edge) {
            Some((_, c)) => {
                *c += 1;
                *c - 1
            }
            None => {
                counts.push((edge, 1));
                0
            }
        };
        out.push(BoundarySegment {
            edge,
            index,
            start: pts[s],
            end: pts[e],
            start_index: s,
            end_index: e,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutsheet_ir::{Cutout, Piece};

    fn count_for(segs: &[BoundarySegment], edge: PieceEdge) -> usize {
        segs.iter().filter(|s| s.edge == edge).count()
    }

    #[test]
    fn test_plain_rectangle_one_segment_per_edge() {
        let p = Piece::rectangle(24.0, 18.0).unwrap();
        let segs = boundary_segments(&p);
        assert_eq!(segs.len(), 4);
        for edge in [
            PieceEdge::Top,
            PieceEdge::Right,
            PieceEdge::Bottom,
            PieceEdge::Left,
        ] {
            assert_eq!(count_for(&segs, edge), 1);
        }
        assert!(segs.iter().all(|s| s.index == 0));
    }

    #[test]
    fn test_corner_notch_splits_touched_edges() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.cutouts.push(Cutout::square(2.0, 1.0, 1.0));
        let segs = boundary_segments(&p);
        // The notch walls are parallel to and nearest the touched
        // edges, so each touched edge carries two segments.
        assert_eq!(count_for(&segs, PieceEdge::Top), 2);
        assert_eq!(count_for(&segs, PieceEdge::Left), 2);
        assert_eq!(count_for(&segs, PieceEdge::Right), 1);
        assert_eq!(count_for(&segs, PieceEdge::Bottom), 1);

        let top: Vec<_> = segs.iter().filter(|s| s.edge == PieceEdge::Top).collect();
        assert_eq!(top[0].index, 0);
        assert_eq!(top[1].index, 1);
    }

    #[test]
    fn test_circle_has_no_segments() {
        let p = Piece::circle(10.0, 10.0).unwrap();
        assert!(boundary_segments(&p).is_empty());
    }

    #[test]
    fn test_quarter_circle_legs_only() {
        let p = Piece::quarter_circle(12.0, 8.0).unwrap();
        let segs = boundary_segments(&p);
        // The arc samples carry no edge identity.
        assert_eq!(segs.len(), 2);
        assert_eq!(count_for(&segs, PieceEdge::Top), 1);
        assert_eq!(count_for(&segs, PieceEdge::Left), 1);
    }

    #[test]
    fn test_triangle_edges() {
        let p = Piece::right_triangle(20.0, 10.0).unwrap();
        let segs = boundary_segments(&p);
        assert_eq!(segs.len(), 3);
        assert_eq!(count_for(&segs, PieceEdge::Hypotenuse), 1);
    }

    #[test]
    fn test_segment_endpoints_lie_on_outline() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.cutouts.push(Cutout::rectangle(4.0, 2.0, 12.0, 0.0));
        let pts = spliced_points(&p);
        for s in boundary_segments(&p) {
            assert_eq!(s.start, pts[s.start_index]);
            assert_eq!(s.end, pts[s.end_index % pts.len()]);
        }
    }
}

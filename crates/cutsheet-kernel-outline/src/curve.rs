//! Curved edges: quadratic arcs replacing straight boundary runs.

use cutsheet_ir::Piece;
use cutsheet_kernel_math::{
    outward_normal, point_line_distance, Point2, QuadBezier, Tolerance,
};
use cutsheet_kernel_boundary::{edge_chord, template_corners};

use crate::ring::{find_vertex, splice_ring};

/// Samples per curved edge arc.
pub(crate) const CURVE_SEGMENTS: usize = 16;

/// Apply every realizable curved edge to the spliced outline.
///
/// A curve's chord runs between its span corners (or the whole nominal
/// edge when no span is stored). The chord endpoints must survive in
/// the outline and the run between them must still be straight; a
/// notch that bit into the edge leaves the curve unapplied.
pub(crate) fn apply_curved_edges(piece: &Piece, pts: &mut Vec<Point2>, clockwise: bool) {
    let corners = template_corners(piece);
    for curve in &piece.curved_edges {
        if curve.radius <= 0.0 || !curve.edge.is_valid_for(piece.shape) {
            continue;
        }
        let chord = match curve.span {
            Some((a, b)) => match (corners.get(a), corners.get(b)) {
                (Some(&pa), Some(&pb)) => Some((pa, pb)),
                _ => None,
            },
            None => edge_chord(piece, curve.edge),
        };
        let Some((a_pos, b_pos)) = chord else { continue };
        let (Some(ia), Some(ib)) = (find_vertex(pts, a_pos), find_vertex(pts, b_pos)) else {
            continue;
        };
        let n = pts.len();
        let span_len = (ib + n - ia) % n;
        if span_len == 0 {
            continue;
        }
        let tol = Tolerance::DEFAULT.linear;
        let straight = (1..span_len)
            .all(|k| point_line_distance(pts[(ia + k) % n], a_pos, b_pos) <= tol);
        if !straight {
            continue;
        }
        let mid = Point2::from((a_pos.coords + b_pos.coords) / 2.0);
        let sign = if curve.is_concave { -1.0 } else { 1.0 };
        let control = mid + outward_normal(a_pos, b_pos, clockwise) * (2.0 * curve.radius * sign);
        let samples = QuadBezier::new(a_pos, control, b_pos).sample(CURVE_SEGMENTS);
        splice_ring(pts, ia, span_len + 1, samples);
    }
}

//! Finished outline and hole path assembly.
//!
//! Passes run in a fixed order: notch splicing (from the boundary
//! crate), curved edges, corner fillets, then angle cuts. Later passes
//! locate their corners by position, so a corner consumed by an
//! earlier pass simply isn't found and the feature is skipped.

use cutsheet_ir::{Cutout, CutoutKind, Piece};
use cutsheet_kernel_boundary::{
    corner_claims, cutout_corner_points, cutout_corner_ranges, is_boundary_notch, resolve_corner,
    spliced_points, template_corners, CornerRing,
};
use cutsheet_kernel_math::{dedupe_points, polygon_is_clockwise, Point2};

use crate::chamfer::{resolve_angle_cut, ChamferSegment};
use crate::curve::apply_curved_edges;
use crate::fillet::fillet_corner;
use crate::ring::{find_vertex, splice_ring};

/// Samples for a circular hole path.
pub(crate) const CUTOUT_CIRCLE_SEGMENTS: usize = 32;

/// The finished outer boundary path of a piece.
///
/// Closed polygon in raw space, closing edge implied. Features that
/// cannot be realized against the current boundary are skipped, so
/// the result is always a drawable simple polygon.
pub fn outline_path(piece: &Piece) -> Vec<Point2> {
    dedupe_points(&build_outline(piece, true).0)
}

/// The straight segments produced by applied angle cuts, on the outer
/// boundary and on cutout rings, for edge treatment addressing.
pub fn angle_segments(piece: &Piece) -> Vec<ChamferSegment> {
    let mut out = build_outline(piece, true).1;
    for cutout in &piece.cutouts {
        if cutout.is_rectangular() && !is_boundary_notch(piece, cutout) {
            out.extend(build_cutout_ring(piece, cutout).1);
        }
    }
    out
}

/// Labelable corner points of a piece.
///
/// With `include_angles` false this is the nominal template corner
/// set; with it true the notch-spliced vertices with angle cuts
/// applied, which is what corner dimensioning annotates.
pub fn corner_points(piece: &Piece, include_angles: bool) -> Vec<Point2> {
    if !include_angles {
        return template_corners(piece);
    }
    build_outline(piece, false).0
}

/// The hole path a cutout is drawn with.
///
/// Empty for boundary notches (their geometry lives in the outline).
/// Outer contours run counter-clockwise, holes run clockwise.
pub fn cutout_path(piece: &Piece, cutout: &Cutout) -> Vec<Point2> {
    if is_boundary_notch(piece, cutout) {
        return Vec::new();
    }
    let mut ring = match cutout.kind {
        CutoutKind::Circle => {
            let r = cutout.width / 2.0;
            (0..CUTOUT_CIRCLE_SEGMENTS)
                .map(|i| {
                    let theta =
                        i as f64 / CUTOUT_CIRCLE_SEGMENTS as f64 * std::f64::consts::TAU;
                    Point2::new(
                        cutout.center_x + r * theta.cos(),
                        cutout.center_y + r * theta.sin(),
                    )
                })
                .collect()
        }
        CutoutKind::Square | CutoutKind::Rectangle => {
            dedupe_points(&build_cutout_ring(piece, cutout).0)
        }
    };
    ring.reverse();
    ring
}

fn build_outline(piece: &Piece, with_arcs: bool) -> (Vec<Point2>, Vec<ChamferSegment>) {
    let mut pts = spliced_points(piece);
    let clockwise = polygon_is_clockwise(&pts);
    let claims = corner_claims(piece);
    let corners = template_corners(piece);

    if with_arcs {
        apply_curved_edges(piece, &mut pts, clockwise);
        for radius in &piece.corner_radii {
            if radius.radius <= 0.0 || !claims.is_held_by(radius.corner, radius.id) {
                continue;
            }
            let Some((CornerRing::Outer, local)) = resolve_corner(piece, radius.corner) else {
                continue;
            };
            let Some(&pos) = corners.get(local) else { continue };
            let Some(i) = find_vertex(&pts, pos) else { continue };
            let arc = fillet_corner(&pts, i, radius.radius, radius.is_inside);
            splice_ring(&mut pts, i, 1, arc);
        }
    }

    let mut segments = Vec::new();
    for cut in &piece.angle_cuts {
        let Some(anchor) = cut.anchor_corner else { continue };
        if !claims.is_held_by(anchor, cut.id) {
            continue;
        }
        let Some((CornerRing::Outer, local)) = resolve_corner(piece, anchor) else {
            continue;
        };
        let Some(&pos) = corners.get(local) else { continue };
        let Some(i) = find_vertex(&pts, pos) else { continue };
        let secondary = if cut.uses_second_point {
            let Some(s) = cut.secondary_corner else { continue };
            let Some((CornerRing::Outer, sl)) = resolve_corner(piece, s) else {
                continue;
            };
            let Some(si) = corners.get(sl).and_then(|&p| find_vertex(&pts, p)) else {
                continue;
            };
            Some(si)
        } else {
            None
        };
        let Some(resolved) = resolve_angle_cut(&pts, i, secondary, cut) else {
            continue;
        };
        segments.push(ChamferSegment {
            angle_cut: cut.id,
            start: resolved.insert[0],
            end: resolved.insert[1],
        });
        splice_ring(
            &mut pts,
            resolved.remove_from,
            resolved.remove_len,
            resolved.insert.to_vec(),
        );
    }
    (pts, segments)
}

fn build_cutout_ring(piece: &Piece, cutout: &Cutout) -> (Vec<Point2>, Vec<ChamferSegment>) {
    let base = cutout_corner_points(cutout);
    let mut pts = base.to_vec();
    let Some(range) = cutout_corner_ranges(piece)
        .into_iter()
        .find(|r| r.cutout == cutout.id)
    else {
        return (pts, Vec::new());
    };
    let claims = corner_claims(piece);

    for radius in &piece.corner_radii {
        if radius.radius <= 0.0
            || !range.contains(radius.corner)
            || !claims.is_held_by(radius.corner, radius.id)
        {
            continue;
        }
        let pos = base[radius.corner - range.start];
        let Some(i) = find_vertex(&pts, pos) else { continue };
        let arc = fillet_corner(&pts, i, radius.radius, radius.is_inside);
        splice_ring(&mut pts, i, 1, arc);
    }

    let mut segments = Vec::new();
    for cut in &piece.angle_cuts {
        let Some(anchor) = cut.anchor_corner else { continue };
        if !range.contains(anchor) || !claims.is_held_by(anchor, cut.id) {
            continue;
        }
        let Some(i) = find_vertex(&pts, base[anchor - range.start]) else {
            continue;
        };
        let secondary = if cut.uses_second_point {
            let Some(s) = cut.secondary_corner.filter(|&s| range.contains(s)) else {
                continue;
            };
            let Some(si) = find_vertex(&pts, base[s - range.start]) else {
                continue;
            };
            Some(si)
        } else {
            None
        };
        let Some(resolved) = resolve_angle_cut(&pts, i, secondary, cut) else {
            continue;
        };
        segments.push(ChamferSegment {
            angle_cut: cut.id,
            start: resolved.insert[0],
            end: resolved.insert[1],
        });
        splice_ring(
            &mut pts,
            resolved.remove_from,
            resolved.remove_len,
            resolved.insert.to_vec(),
        );
    }
    (pts, segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutsheet_ir::{AngleCut, CornerRadius, CurvedEdge, PieceEdge};
    use cutsheet_kernel_math::distance;

    fn has_point(pts: &[Point2], x: f64, y: f64) -> bool {
        pts.iter()
            .any(|p| (p.x - x).abs() < 1e-6 && (p.y - y).abs() < 1e-6)
    }

    #[test]
    fn test_plain_rectangle_outline() {
        let p = Piece::rectangle(24.0, 18.0).unwrap();
        let path = outline_path(&p);
        assert_eq!(path.len(), 4);
        assert_eq!(polygon_is_clockwise(&path), polygon_is_clockwise(&spliced_points(&p)));
    }

    #[test]
    fn test_fillet_replaces_corner() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.corner_radii.push(CornerRadius::new(1, 2.0));
        let path = outline_path(&p);
        // One corner becomes a nine-point arc.
        assert_eq!(path.len(), 4 - 1 + 9);
        assert!(!has_point(&path, 24.0, 0.0));
        assert!(has_point(&path, 22.0, 0.0));
        assert!(has_point(&path, 24.0, 2.0));
    }

    #[test]
    fn test_curved_edge_bulges_outward() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.curved_edges.push(CurvedEdge::new(PieceEdge::Top, 1.0, false));
        let path = outline_path(&p);
        // Arc midpoint deviates from the chord by the stored depth,
        // away from the interior.
        assert!(has_point(&path, 12.0, -1.0));

        p.curved_edges[0].is_concave = true;
        let path = outline_path(&p);
        assert!(has_point(&path, 12.0, 1.0));
    }

    #[test]
    fn test_curve_rejected_on_notched_edge() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.cutouts.push(Cutout::rectangle(4.0, 2.0, 12.0, 0.0));
        p.curved_edges.push(CurvedEdge::new(PieceEdge::Top, 1.0, false));
        let path = outline_path(&p);
        // The notch stays, the curve does not apply.
        assert!(has_point(&path, 10.0, 1.0));
        assert!(!has_point(&path, 12.0, -1.0));
    }

    #[test]
    fn test_curve_endpoint_beats_radius() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.curved_edges.push(CurvedEdge::new(PieceEdge::Top, 1.0, false));
        p.corner_radii.push(CornerRadius::new(0, 0.5));
        let path = outline_path(&p);
        // The fillet lost the corner: no tangent point below it.
        assert!(!has_point(&path, 0.0, 0.5));
        assert!(has_point(&path, 12.0, -1.0));
    }

    #[test]
    fn test_corner_points_modes() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.angle_cuts.push(AngleCut::symmetric(1, 3.0));
        assert_eq!(corner_points(&p, false).len(), 4);

        let with = corner_points(&p, true);
        assert_eq!(with.len(), 5);
        assert!(has_point(&with, 21.0, 0.0));
        assert!(has_point(&with, 24.0, 3.0));
        assert!(!has_point(&with, 24.0, 0.0));
    }

    #[test]
    fn test_angle_segments_reported() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.angle_cuts.push(AngleCut::symmetric(2, 2.0));
        let segs = angle_segments(&p);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].angle_cut, p.angle_cuts[0].id);
        assert_eq!(segs[0].start, Point2::new(24.0, 16.0));
        assert_eq!(segs[0].end, Point2::new(22.0, 18.0));
    }

    #[test]
    fn test_circle_cutout_path_is_clockwise() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.cutouts.push(Cutout::circle(3.0, 12.0, 9.0));
        let hole = cutout_path(&p, &p.cutouts[0].clone());
        assert_eq!(hole.len(), CUTOUT_CIRCLE_SEGMENTS);
        assert!(polygon_is_clockwise(&hole));
        for q in &hole {
            assert!((distance(*q, Point2::new(12.0, 9.0)) - 1.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rect_cutout_path_with_fillet() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.cutouts.push(Cutout::square(4.0, 12.0, 9.0));
        // Corner label 4 is the cutout's minimum corner.
        p.corner_radii.push(CornerRadius::new(4, 1.0));
        let hole = cutout_path(&p, &p.cutouts[0].clone());
        assert_eq!(hole.len(), 4 - 1 + 9);
        assert!(polygon_is_clockwise(&hole));
        assert!(!has_point(&hole, 10.0, 7.0));
        assert!(has_point(&hole, 11.0, 7.0));
        assert!(has_point(&hole, 10.0, 8.0));
    }

    #[test]
    fn test_notch_has_no_hole_path() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.cutouts.push(Cutout::square(2.0, 1.0, 1.0));
        assert!(cutout_path(&p, &p.cutouts[0].clone()).is_empty());
    }

    #[test]
    fn test_quarter_circle_leg_curve() {
        let mut p = Piece::quarter_circle(12.0, 8.0).unwrap();
        p.curved_edges.push(CurvedEdge::new(PieceEdge::Top, 0.5, false));
        let path = outline_path(&p);
        assert!(has_point(&path, 6.0, -0.5));
    }
}

//! The validation pass.
//!
//! Pure function of the current feature state. Issues are advisory:
//! validation never mutates the piece and never blocks geometry
//! construction. Checks run in a fixed order so re-runs over unchanged
//! state produce an identical list.

use cutsheet_ir::{Cutout, Piece};
use cutsheet_kernel_boundary::{
    corner_position, cutout_corner_ranges, edge_corner_span, is_boundary_notch, touched_sides,
    Footprint, CutoutCornerRange,
};
use cutsheet_kernel_math::{distance, Point2, Rect};

use crate::issues::{IssueKind, ValidationIssue};

/// Distance from a point to a footprint's solid region; zero inside.
fn footprint_distance(fp: &Footprint, p: Point2) -> f64 {
    match *fp {
        Footprint::Rect(r) => distance(p, r.closest_point(p)),
        Footprint::Circle { center, radius } => (distance(p, center) - radius).max(0.0),
    }
}

/// Whether two cutout footprints intersect.
fn footprints_overlap(a: &Footprint, b: &Footprint) -> bool {
    match (*a, *b) {
        (Footprint::Rect(ra), Footprint::Rect(rb)) => ra.intersects(&rb),
        (
            Footprint::Circle {
                center: ca,
                radius: ra,
            },
            Footprint::Circle {
                center: cb,
                radius: rb,
            },
        ) => distance(ca, cb) < ra + rb,
        (Footprint::Rect(r), Footprint::Circle { center, radius })
        | (Footprint::Circle { center, radius }, Footprint::Rect(r)) => {
            distance(center, r.closest_point(center)) < radius
        }
    }
}

fn in_own_range(ranges: &[CutoutCornerRange], cutout: &Cutout, corner: usize) -> bool {
    ranges
        .iter()
        .any(|r| r.cutout == cutout.id && r.contains(corner))
}

/// Half the shorter edge adjacent to a corner label, the largest
/// realizable fillet radius there.
fn max_fillet_radius(piece: &Piece, corner: usize) -> Option<f64> {
    use cutsheet_kernel_boundary::{resolve_corner, template_corners, CornerRing};
    match resolve_corner(piece, corner)? {
        (CornerRing::Outer, local) => {
            let corners = template_corners(piece);
            let n = corners.len();
            let c = corners[local];
            let prev = corners[(local + n - 1) % n];
            let next = corners[(local + 1) % n];
            Some(distance(c, prev).min(distance(c, next)) / 2.0)
        }
        (CornerRing::Cutout(id), _) => {
            let cutout = piece.cutout(id)?;
            Some(cutout.width.min(cutout.height) / 2.0)
        }
    }
}

/// Validate a piece's feature state.
///
/// Issues come out grouped by kind in severity-table order, each
/// carrying the offending entity ids.
pub fn validate_piece(piece: &Piece) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let ranges = cutout_corner_ranges(piece);
    let piece_rect = Rect::new(
        Point2::new(0.0, 0.0),
        Point2::new(piece.width, piece.height),
    );
    let active_radii: Vec<_> = piece
        .corner_radii
        .iter()
        .filter(|r| r.radius > 0.0)
        .collect();
    let active_cuts: Vec<_> = piece
        .angle_cuts
        .iter()
        .filter(|c| c.anchor_corner.is_some() && c.anchor_offset > 0.0)
        .collect();
    let active_curves: Vec<_> = piece
        .curved_edges
        .iter()
        .filter(|c| c.radius > 0.0 && c.edge.is_valid_for(piece.shape))
        .collect();

    // An interior hole sticking past the blank. Uses the stored intent
    // flag: a footprint the user placed as a notch is allowed to
    // exceed the bounds.
    for cutout in &piece.cutouts {
        if cutout.is_notch {
            continue;
        }
        let fb = Footprint::of(cutout).bounds();
        if fb.min.x < piece_rect.min.x
            || fb.min.y < piece_rect.min.y
            || fb.max.x > piece_rect.max.x
            || fb.max.y > piece_rect.max.y
        {
            issues.push(ValidationIssue::new(
                IssueKind::CutoutOutsideBounds,
                vec![cutout.id],
            ));
        }
    }

    for (i, a) in piece.cutouts.iter().enumerate() {
        for b in piece.cutouts.iter().skip(i + 1) {
            if footprints_overlap(&Footprint::of(a), &Footprint::of(b)) {
                issues.push(ValidationIssue::new(
                    IssueKind::CutoutsOverlap,
                    vec![a.id, b.id],
                ));
            }
        }
    }

    for radius in &active_radii {
        for cut in &active_cuts {
            if cut.anchor_corner == Some(radius.corner) {
                issues.push(ValidationIssue::new(
                    IssueKind::CornerRadiusConflictsWithAngle,
                    vec![radius.id, cut.id],
                ));
            }
        }
    }

    for cutout in &piece.cutouts {
        if !is_boundary_notch(piece, cutout) {
            continue;
        }
        let touched = touched_sides(piece, cutout);
        for curve in &active_curves {
            if touched.contains(&curve.edge) {
                issues.push(ValidationIssue::new(
                    IssueKind::CutoutOnCurvedEdge,
                    vec![cutout.id, curve.id],
                ));
            }
        }
    }

    for cutout in &piece.cutouts {
        let fp = Footprint::of(cutout);
        for radius in &active_radii {
            if in_own_range(&ranges, cutout, radius.corner) {
                continue;
            }
            let Some(pos) = corner_position(piece, radius.corner) else {
                continue;
            };
            if footprint_distance(&fp, pos) <= radius.radius {
                issues.push(ValidationIssue::new(
                    IssueKind::CutoutOverlapsCornerRadius,
                    vec![cutout.id, radius.id],
                ));
            }
        }
    }

    for cutout in &piece.cutouts {
        let fp = Footprint::of(cutout);
        for cut in &active_cuts {
            let Some(anchor) = cut.anchor_corner else { continue };
            if in_own_range(&ranges, cutout, anchor) {
                continue;
            }
            let Some(pos) = corner_position(piece, anchor) else {
                continue;
            };
            if footprint_distance(&fp, pos) <= cut.anchor_offset {
                issues.push(ValidationIssue::new(
                    IssueKind::CutoutOverlapsAngleCut,
                    vec![cutout.id, cut.id],
                ));
            }
        }
    }

    for curve in &active_curves {
        for cutout in &piece.cutouts {
            if is_boundary_notch(piece, cutout)
                && touched_sides(piece, cutout).contains(&curve.edge)
            {
                issues.push(ValidationIssue::new(
                    IssueKind::CurveOnNotchedEdge,
                    vec![curve.id, cutout.id],
                ));
            }
        }
    }

    for curve in &active_curves {
        let span = curve
            .span
            .or_else(|| edge_corner_span(piece.shape, curve.edge));
        let Some((a, b)) = span else { continue };
        for radius in &active_radii {
            if radius.corner == a || radius.corner == b {
                issues.push(ValidationIssue::new(
                    IssueKind::CurveConflictsWithCornerRadius,
                    vec![curve.id, radius.id],
                ));
            }
        }
    }

    for radius in &active_radii {
        for curve in &active_curves {
            let Some((a, b)) = edge_corner_span(piece.shape, curve.edge) else {
                continue;
            };
            if radius.corner == a || radius.corner == b {
                issues.push(ValidationIssue::new(
                    IssueKind::CornerRadiusOnCurvedEdge,
                    vec![radius.id, curve.id],
                ));
            }
        }
    }

    for radius in &active_radii {
        if let Some(max) = max_fillet_radius(piece, radius.corner) {
            if radius.radius > max {
                issues.push(ValidationIssue::new(
                    IssueKind::CornerRadiusTooLarge,
                    vec![radius.id],
                ));
            }
        }
    }

    issues
}

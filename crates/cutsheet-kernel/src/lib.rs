#![warn(missing_docs)]

//! Manufacturing drawing geometry kernel for cutsheet.
//!
//! Turns a [`Piece`] record (a nominal blank shape plus its notches,
//! cutouts, curved edges, chamfers, and fillets) into the drawable
//! geometry the renderer and editing UI consume: one closed outer
//! boundary path, a hole path per interior cutout, per-edge boundary
//! segments, the corner label index space, and advisory validation
//! issues. Every entry point is a pure function of the piece snapshot.
//!
//! # Example
//!
//! ```
//! use cutsheet_kernel::{outline_path, validate_piece, Cutout, Piece};
//!
//! let mut piece = Piece::rectangle(24.0, 18.0).unwrap();
//! piece.cutouts.push(Cutout::square(2.0, 1.0, 1.0));
//!
//! // The corner notch is spliced into the boundary.
//! let path = outline_path(&piece);
//! assert_eq!(path.len(), 6);
//! assert!(validate_piece(&piece).is_empty());
//! ```

pub use cutsheet_ir;
pub use cutsheet_kernel_boundary;
pub use cutsheet_kernel_math;
pub use cutsheet_kernel_outline;
pub use cutsheet_kernel_validate;

pub use cutsheet_ir::migrate::{remap_corner_index, remap_piece};
pub use cutsheet_ir::{
    AngleCut, CornerRadius, Cutout, CutoutKind, CurvedEdge, EdgeAssignment, EdgeTarget, Piece,
    PieceEdge, ShapeKind,
};
pub use cutsheet_kernel_boundary::{
    boundary_segments, corner_claims, corner_label_count, cutout_corner_ranges, BoundarySegment,
    CornerClaims, CutoutCornerRange,
};
pub use cutsheet_kernel_math::{space, Point2, Tolerance, Vec2};
pub use cutsheet_kernel_outline::{
    angle_segments, corner_points, cutout_path, outline_path, ChamferSegment,
};
pub use cutsheet_kernel_validate::{validate_piece, IssueKind, Severity, ValidationIssue};

use cutsheet_kernel_math::space::display_point;

/// The raw-space size of a piece in inches.
pub fn piece_size(piece: &Piece) -> (f64, f64) {
    (piece.width, piece.height)
}

/// The piece size in display orientation.
pub fn display_size(piece: &Piece) -> (f64, f64) {
    space::display_size(piece_size(piece))
}

/// The full drawable outer boundary of a piece, in raw space.
pub fn path(piece: &Piece) -> Vec<Point2> {
    cutsheet_kernel_outline::outline_path(piece)
}

/// Labelable corner points in display orientation.
pub fn display_polygon_points(piece: &Piece, include_angles: bool) -> Vec<Point2> {
    corner_points(piece, include_angles)
        .into_iter()
        .map(display_point)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let p = Piece::rectangle(24.0, 18.0).unwrap();
        assert_eq!(piece_size(&p), (24.0, 18.0));
        assert_eq!(display_size(&p), (18.0, 24.0));
    }

    #[test]
    fn test_plain_piece_path() {
        let p = Piece::rectangle(24.0, 18.0).unwrap();
        assert_eq!(path(&p).len(), 4);
        assert_eq!(corner_points(&p, false).len(), 4);
        assert_eq!(corner_label_count(&p), 4);
    }

    #[test]
    fn test_interior_cutout_extends_label_space() {
        let mut p = Piece::rectangle(20.0, 20.0).unwrap();
        p.cutouts.push(Cutout::square(4.0, 10.0, 10.0));
        assert_eq!(corner_label_count(&p), 4 + 4);
        let hole = cutout_path(&p, &p.cutouts[0].clone());
        assert_eq!(hole.len(), 4);
    }

    #[test]
    fn test_display_points_are_swapped() {
        let p = Piece::rectangle(24.0, 18.0).unwrap();
        let raw = corner_points(&p, false);
        let display = display_polygon_points(&p, false);
        for (r, d) in raw.iter().zip(&display) {
            assert_eq!(d.x, r.y);
            assert_eq!(d.y, r.x);
        }
    }

    #[test]
    fn test_full_feature_build() {
        // One piece exercising every feature kind at once, placed so
        // no two features contest the same corner.
        let mut p = Piece::rectangle(36.0, 24.0).unwrap();
        p.cutouts.push(Cutout::rectangle(3.0, 3.0, 18.0, 1.5)); // top-edge notch
        p.cutouts.push(Cutout::circle(2.0, 30.0, 12.0)); // hole
        p.cutouts.push(Cutout::rectangle(4.0, 3.0, 12.0, 12.0)); // hole
        p.corner_radii.push(CornerRadius::new(0, 2.0));
        p.angle_cuts.push(AngleCut::symmetric(1, 2.0));
        p.curved_edges
            .push(CurvedEdge::new(PieceEdge::Bottom, 1.0, false));

        let boundary = path(&p);
        assert!(boundary.len() > 6);
        // Notch wall, fillet tangent, chamfer endpoint, curve apex.
        let has = |x: f64, y: f64| {
            boundary
                .iter()
                .any(|q| (q.x - x).abs() < 1e-6 && (q.y - y).abs() < 1e-6)
        };
        assert!(has(16.5, 3.0));
        assert!(has(2.0, 0.0));
        assert!(has(34.0, 0.0));
        assert!(has(18.0, 25.0));

        assert_eq!(corner_label_count(&p), 4 + 4);
        assert_eq!(
            cutout_path(&p, &p.cutouts[1].clone()).len(),
            32
        );
        assert!(validate_piece(&p).is_empty());
    }

    #[test]
    fn test_remap_round_trip() {
        let mut p = Piece::rectangle(10.0, 10.0).unwrap();
        p.corner_radii.push(CornerRadius::new(3, 1.0));
        let migrated = remap_piece(&p, 4);
        assert_eq!(migrated.corner_radii[0].corner, 1);
        assert_eq!(remap_corner_index(remap_corner_index(3, 4), 4), 3);
    }

    #[test]
    fn test_boundary_segments_exposed() {
        let mut p = Piece::rectangle(24.0, 18.0).unwrap();
        p.cutouts.push(Cutout::square(2.0, 1.0, 1.0));
        let segs = boundary_segments(&p);
        let top: Vec<&BoundarySegment> =
            segs.iter().filter(|s| s.edge == PieceEdge::Top).collect();
        assert_eq!(top.len(), 2);
    }
}

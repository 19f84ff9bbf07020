//! Nominal shape templates.
//!
//! Every piece starts from a template polygon in raw space: the piece
//! sits in the first quadrant with its bounding box spanning
//! `(0, 0)..(width, height)`. Curved outlines are pre-sampled here so
//! downstream passes only ever deal with polylines.

use cutsheet_ir::{Piece, PieceEdge, ShapeKind};
use cutsheet_kernel_math::Point2;

/// Sample count for a full circle template.
pub(crate) const CIRCLE_TEMPLATE_SEGMENTS: usize = 64;

/// Sample count for the quarter-circle arc.
pub(crate) const QUARTER_ARC_SEGMENTS: usize = 24;

/// Number of discrete, labelable corners of a shape. Curved shapes
/// have none.
pub fn corner_count(shape: ShapeKind) -> usize {
    match shape {
        ShapeKind::Rectangle => 4,
        ShapeKind::RightTriangle => 3,
        ShapeKind::Circle | ShapeKind::QuarterCircle => 0,
    }
}

/// The discrete corner points of a piece's template, in boundary
/// order starting at the raw origin. Empty for curved shapes.
pub fn template_corners(piece: &Piece) -> Vec<Point2> {
    let (w, h) = (piece.width, piece.height);
    match piece.shape {
        ShapeKind::Rectangle => vec![
            Point2::new(0.0, 0.0),
            Point2::new(w, 0.0),
            Point2::new(w, h),
            Point2::new(0.0, h),
        ],
        ShapeKind::RightTriangle => vec![
            Point2::new(0.0, 0.0),
            Point2::new(w, 0.0),
            Point2::new(0.0, h),
        ],
        ShapeKind::Circle | ShapeKind::QuarterCircle => Vec::new(),
    }
}

/// The full template outline polygon, curved portions pre-sampled.
pub fn template_points(piece: &Piece) -> Vec<Point2> {
    let (w, h) = (piece.width, piece.height);
    match piece.shape {
        ShapeKind::Rectangle | ShapeKind::RightTriangle => template_corners(piece),
        ShapeKind::Circle => {
            let (cx, cy) = (w / 2.0, h / 2.0);
            let (rx, ry) = (w / 2.0, h / 2.0);
            (0..CIRCLE_TEMPLATE_SEGMENTS)
                .map(|i| {
                    let theta =
                        i as f64 / CIRCLE_TEMPLATE_SEGMENTS as f64 * std::f64::consts::TAU;
                    Point2::new(cx + rx * theta.cos(), cy + ry * theta.sin())
                })
                .collect()
        }
        ShapeKind::QuarterCircle => {
            let mut pts = vec![Point2::new(0.0, 0.0), Point2::new(w, 0.0)];
            for i in 1..=QUARTER_ARC_SEGMENTS {
                let theta =
                    i as f64 / QUARTER_ARC_SEGMENTS as f64 * std::f64::consts::FRAC_PI_2;
                pts.push(Point2::new(w * theta.cos(), h * theta.sin()));
            }
            // Land exactly on the leg endpoint regardless of rounding.
            *pts.last_mut().unwrap() = Point2::new(0.0, h);
            pts
        }
    }
}

/// The nominal edges of a shape in boundary traversal order.
pub fn shape_edges(shape: ShapeKind) -> Vec<PieceEdge> {
    match shape {
        ShapeKind::Rectangle => vec![
            PieceEdge::Top,
            PieceEdge::Right,
            PieceEdge::Bottom,
            PieceEdge::Left,
        ],
        ShapeKind::RightTriangle => {
            vec![PieceEdge::LegA, PieceEdge::Hypotenuse, PieceEdge::LegB]
        }
        ShapeKind::QuarterCircle => vec![PieceEdge::Top, PieceEdge::Left],
        ShapeKind::Circle => Vec::new(),
    }
}

/// The `(start, end)` template corner indices an edge runs between.
///
/// `None` for shapes without discrete corners and for invalid
/// shape/edge combinations.
pub fn edge_corner_span(shape: ShapeKind, edge: PieceEdge) -> Option<(usize, usize)> {
    match (shape, edge) {
        (ShapeKind::Rectangle, PieceEdge::Top) => Some((0, 1)),
        (ShapeKind::Rectangle, PieceEdge::Right) => Some((1, 2)),
        (ShapeKind::Rectangle, PieceEdge::Bottom) => Some((2, 3)),
        (ShapeKind::Rectangle, PieceEdge::Left) => Some((3, 0)),
        (ShapeKind::RightTriangle, PieceEdge::LegA) => Some((0, 1)),
        (ShapeKind::RightTriangle, PieceEdge::Hypotenuse) => Some((1, 2)),
        (ShapeKind::RightTriangle, PieceEdge::LegB) => Some((2, 0)),
        _ => None,
    }
}

/// The straight chord an edge nominally occupies, in traversal order.
///
/// For the quarter circle this covers the two straight legs; the arc
/// has no edge identity. `None` for invalid shape/edge combinations.
pub fn edge_chord(piece: &Piece, edge: PieceEdge) -> Option<(Point2, Point2)> {
    if !edge.is_valid_for(piece.shape) {
        return None;
    }
    let (w, h) = (piece.width, piece.height);
    if piece.shape == ShapeKind::QuarterCircle {
        return match edge {
            PieceEdge::Top => Some((Point2::new(0.0, 0.0), Point2::new(w, 0.0))),
            PieceEdge::Left => Some((Point2::new(0.0, h), Point2::new(0.0, 0.0))),
            _ => None,
        };
    }
    let corners = template_corners(piece);
    let (a, b) = edge_corner_span(piece.shape, edge)?;
    Some((corners[a], corners[b]))
}

#![warn(missing_docs)]

//! Piece and feature records for the cutsheet drawing kernel.
//!
//! This crate defines the plain-data aggregate the kernel consumes: a
//! [`Piece`] with its nominal shape and dimensions, owning ordered
//! collections of boundary-modifying feature records. It is purely
//! declarative: no geometry math, just serializable state shared with
//! the editing and persistence layers. Derived geometry (boundary
//! polygons, hole paths, validation issues) is computed separately by
//! the kernel crates from a snapshot of this data.
//!
//! All lengths are inches in raw measurement space; angles cross this
//! boundary in degrees and are converted to radians inside the kernel.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod migrate;

/// The nominal blank shape of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned rectangle, `width × height`.
    Rectangle,
    /// Circle (or ellipse when `width != height`) inscribed in the
    /// `width × height` bounds.
    Circle,
    /// Right triangle with the right angle at the raw origin and legs
    /// along the raw axes.
    RightTriangle,
    /// Quarter circle with the square corner at the raw origin and the
    /// arc spanning between the two legs.
    QuarterCircle,
}

/// Identity of one nominal boundary edge.
///
/// The valid variant set depends on the owning piece's shape:
/// quadrilateral names for rectangles (and the two straight legs of a
/// quarter circle), leg/hypotenuse names for right triangles. Circles
/// have no edge identities. Invalid combinations are ignored at the
/// kernel boundary rather than trusted to caller discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceEdge {
    /// The `y = 0` edge of a rectangle or quarter circle.
    Top,
    /// The `x = width` edge of a rectangle.
    Right,
    /// The `y = height` edge of a rectangle.
    Bottom,
    /// The `x = 0` edge of a rectangle or quarter circle.
    Left,
    /// The `y = 0` leg of a right triangle.
    LegA,
    /// The `x = 0` leg of a right triangle.
    LegB,
    /// The sloped edge of a right triangle.
    Hypotenuse,
}

impl PieceEdge {
    /// Whether this edge identity exists on the given shape.
    pub fn is_valid_for(self, shape: ShapeKind) -> bool {
        match shape {
            ShapeKind::Rectangle => matches!(
                self,
                PieceEdge::Top | PieceEdge::Right | PieceEdge::Bottom | PieceEdge::Left
            ),
            ShapeKind::RightTriangle => {
                matches!(self, PieceEdge::LegA | PieceEdge::LegB | PieceEdge::Hypotenuse)
            }
            ShapeKind::QuarterCircle => matches!(self, PieceEdge::Top | PieceEdge::Left),
            ShapeKind::Circle => false,
        }
    }
}

/// The footprint shape of a cutout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CutoutKind {
    /// Circular hole; `width` is the diameter.
    Circle,
    /// Square hole; `width` and `height` carry the same value.
    Square,
    /// Rectangular hole.
    Rectangle,
}

/// A hole or boundary notch in a piece.
///
/// Whether a cutout merges into the outer boundary (a notch) or is
/// drawn as an interior hole is re-derived from its position on every
/// rebuild; the stored [`is_notch`](Self::is_notch) flag is only a UI
/// hint and can go stale when a cutout is moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cutout {
    /// Stable identifier.
    pub id: Uuid,
    /// Footprint shape.
    pub kind: CutoutKind,
    /// Footprint width in inches (diameter for circles).
    pub width: f64,
    /// Footprint height in inches (diameter for circles).
    pub height: f64,
    /// Footprint center X in raw space.
    pub center_x: f64,
    /// Footprint center Y in raw space.
    pub center_y: f64,
    /// UI hint: last known boundary-touching status. Never consulted
    /// for geometry.
    pub is_notch: bool,
    /// UI hint: the piece corner this notch was snapped to, if any.
    pub corner_snap: Option<usize>,
}

impl Cutout {
    /// Circular cutout of the given diameter centered at `(cx, cy)`.
    pub fn circle(diameter: f64, cx: f64, cy: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: CutoutKind::Circle,
            width: diameter,
            height: diameter,
            center_x: cx,
            center_y: cy,
            is_notch: false,
            corner_snap: None,
        }
    }

    /// Square cutout of the given side centered at `(cx, cy)`.
    pub fn square(side: f64, cx: f64, cy: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: CutoutKind::Square,
            width: side,
            height: side,
            center_x: cx,
            center_y: cy,
            is_notch: false,
            corner_snap: None,
        }
    }

    /// Rectangular cutout centered at `(cx, cy)`.
    pub fn rectangle(width: f64, height: f64, cx: f64, cy: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: CutoutKind::Rectangle,
            width,
            height,
            center_x: cx,
            center_y: cy,
            is_notch: false,
            corner_snap: None,
        }
    }

    /// Whether the footprint has discrete corners (square/rectangle).
    pub fn is_rectangular(&self) -> bool {
        matches!(self.kind, CutoutKind::Square | CutoutKind::Rectangle)
    }
}

/// A single quadratic-bezier arc replacing a straight boundary run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvedEdge {
    /// Stable identifier.
    pub id: Uuid,
    /// The nominal edge the curve replaces (or a span of it).
    pub edge: PieceEdge,
    /// Arc depth in inches: the maximum deviation from the chord.
    pub radius: f64,
    /// Bulge toward the piece interior instead of away from it.
    pub is_concave: bool,
    /// Explicit `(start, end)` corner-index span. `None` curves the
    /// whole edge.
    pub span: Option<(usize, usize)>,
}

impl CurvedEdge {
    /// Curve over the whole given edge.
    pub fn new(edge: PieceEdge, radius: f64, is_concave: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            edge,
            radius,
            is_concave,
            span: None,
        }
    }
}

/// A straight chamfer replacing a corner (or a corner-to-corner span).
///
/// Three modes, checked in order:
/// - `uses_second_point`: cut from an offset before the anchor corner
///   to an offset past the secondary corner, removing everything
///   between;
/// - `angle_degrees` set: one offset along the incoming edge plus a
///   signed cut angle, the far endpoint found on the outgoing edge;
/// - otherwise: symmetric `anchor_offset` along both adjacent edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleCut {
    /// Stable identifier.
    pub id: Uuid,
    /// Corner index the cut is anchored to. `None` means the record is
    /// inactive (the earlier data format stored `-1` here).
    pub anchor_corner: Option<usize>,
    /// Offset from the anchor corner along the incoming edge, inches.
    pub anchor_offset: f64,
    /// Far corner for two-point mode.
    pub secondary_corner: Option<usize>,
    /// Offset from the secondary corner along its outgoing edge.
    pub secondary_offset: f64,
    /// Selects two-point mode when a secondary corner is present.
    pub uses_second_point: bool,
    /// Signed cut angle in degrees for one-offset mode.
    pub angle_degrees: Option<f64>,
}

impl AngleCut {
    /// Symmetric chamfer at a corner: the same offset along both
    /// adjacent edges.
    pub fn symmetric(corner: usize, offset: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor_corner: Some(corner),
            anchor_offset: offset,
            secondary_corner: None,
            secondary_offset: 0.0,
            uses_second_point: false,
            angle_degrees: None,
        }
    }

    /// Two-point chamfer spanning from one corner to another.
    pub fn two_point(anchor: usize, anchor_offset: f64, secondary: usize, secondary_offset: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor_corner: Some(anchor),
            anchor_offset,
            secondary_corner: Some(secondary),
            secondary_offset,
            uses_second_point: true,
            angle_degrees: None,
        }
    }

    /// One-offset chamfer at a signed angle off the incoming edge.
    pub fn angled(corner: usize, offset: f64, angle_degrees: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor_corner: Some(corner),
            anchor_offset: offset,
            secondary_corner: None,
            secondary_offset: 0.0,
            uses_second_point: false,
            angle_degrees: Some(angle_degrees),
        }
    }
}

/// A circular fillet replacing a corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    /// Stable identifier.
    pub id: Uuid,
    /// Corner index the fillet is applied to.
    pub corner: usize,
    /// Fillet radius in inches. Zero is a no-op.
    pub radius: f64,
    /// Concave (scooped inward) instead of the usual convex round.
    pub is_inside: bool,
}

impl CornerRadius {
    /// Convex fillet at the given corner.
    pub fn new(corner: usize, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            corner,
            radius,
            is_inside: false,
        }
    }
}

/// What an edge treatment label is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EdgeTarget {
    /// A whole nominal edge.
    Edge {
        /// The nominal edge.
        edge: PieceEdge,
    },
    /// One boundary segment of a (possibly notched) nominal edge.
    Segment {
        /// The nominal edge the segment belongs to.
        edge: PieceEdge,
        /// Sequence index of the segment along that edge.
        index: usize,
    },
    /// One side of a cutout.
    CutoutEdge {
        /// Owning cutout.
        cutout: Uuid,
        /// Side index, counted in the cutout's corner order.
        side: usize,
    },
    /// The straight segment produced by an angle cut.
    AngleCutEdge {
        /// Owning angle cut.
        angle_cut: Uuid,
    },
}

/// A treatment label attached to part of the boundary.
///
/// Pure metadata: consumed only by the print/export renderer, never by
/// geometry construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeAssignment {
    /// Stable identifier.
    pub id: Uuid,
    /// What the label is attached to.
    pub target: EdgeTarget,
    /// The treatment name shown on the drawing.
    pub treatment: String,
}

/// One fabricated material blank with its modifying features.
///
/// The kernel never mutates a `Piece`; the editing layer owns the
/// records and the kernel recomputes derived geometry from the current
/// snapshot on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Stable identifier.
    pub id: Uuid,
    /// Nominal blank shape.
    pub shape: ShapeKind,
    /// Raw-space width in inches.
    pub width: f64,
    /// Raw-space height in inches.
    pub height: f64,
    /// How many identical blanks to fabricate.
    pub quantity: u32,
    /// Holes and boundary notches.
    pub cutouts: Vec<Cutout>,
    /// Bezier arcs replacing straight edges.
    pub curved_edges: Vec<CurvedEdge>,
    /// Corner chamfers.
    pub angle_cuts: Vec<AngleCut>,
    /// Corner fillets.
    pub corner_radii: Vec<CornerRadius>,
    /// Renderer-only treatment labels.
    pub edge_assignments: Vec<EdgeAssignment>,
}

impl Piece {
    /// Create a piece, validating that both dimensions are positive.
    pub fn new(shape: ShapeKind, width: f64, height: f64) -> Result<Self, PieceError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(PieceError::InvalidDimensions { width, height });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            shape,
            width,
            height,
            quantity: 1,
            cutouts: Vec::new(),
            curved_edges: Vec::new(),
            angle_cuts: Vec::new(),
            corner_radii: Vec::new(),
            edge_assignments: Vec::new(),
        })
    }

    /// Rectangular piece.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, PieceError> {
        Self::new(ShapeKind::Rectangle, width, height)
    }

    /// Circular piece inscribed in `width × height`.
    pub fn circle(width: f64, height: f64) -> Result<Self, PieceError> {
        Self::new(ShapeKind::Circle, width, height)
    }

    /// Right-triangle piece with legs `width` and `height`.
    pub fn right_triangle(width: f64, height: f64) -> Result<Self, PieceError> {
        Self::new(ShapeKind::RightTriangle, width, height)
    }

    /// Quarter-circle piece with legs `width` and `height`.
    pub fn quarter_circle(width: f64, height: f64) -> Result<Self, PieceError> {
        Self::new(ShapeKind::QuarterCircle, width, height)
    }

    /// Look up a cutout by id.
    pub fn cutout(&self, id: Uuid) -> Option<&Cutout> {
        self.cutouts.iter().find(|c| c.id == id)
    }
}

/// Errors from constructing piece records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PieceError {
    /// Width or height was zero or negative.
    #[error("piece dimensions must be positive (got {width} x {height})")]
    InvalidDimensions {
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },
}

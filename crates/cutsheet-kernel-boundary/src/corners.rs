//! The corner label index space.
//!
//! Corner features address corners by a single flat index: base shape
//! corners first, then four corners for each interior rectangular
//! cutout in record order. Notches and circular cutouts contribute no
//! labels. The mapping is recomputed from the piece snapshot, so
//! adding or removing a cutout shifts the ranges behind it; stored
//! indices pointing past the current count simply resolve to nothing.

use cutsheet_ir::{Cutout, Piece};
use cutsheet_kernel_math::Point2;
use uuid::Uuid;

use crate::notch::is_boundary_notch;
use crate::template::{corner_count, template_corners};

/// Which boundary ring a corner label lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerRing {
    /// The outer piece boundary.
    Outer,
    /// An interior rectangular cutout's ring.
    Cutout(Uuid),
}

/// The contiguous label range assigned to one interior cutout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutoutCornerRange {
    /// Owning cutout.
    pub cutout: Uuid,
    /// First label index of the range.
    pub start: usize,
    /// Number of labels in the range (always four).
    pub len: usize,
}

impl CutoutCornerRange {
    /// Whether a label index falls in this range.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.start + self.len
    }
}

/// The corner points of a rectangular cutout, in boundary order
/// starting at the minimum corner.
pub fn cutout_corner_points(cutout: &Cutout) -> [Point2; 4] {
    let (hw, hh) = (cutout.width / 2.0, cutout.height / 2.0);
    let (cx, cy) = (cutout.center_x, cutout.center_y);
    [
        Point2::new(cx - hw, cy - hh),
        Point2::new(cx + hw, cy - hh),
        Point2::new(cx + hw, cy + hh),
        Point2::new(cx - hw, cy + hh),
    ]
}

/// Label ranges for every interior rectangular cutout, in record
/// order.
pub fn cutout_corner_ranges(piece: &Piece) -> Vec<CutoutCornerRange> {
    let mut next = corner_count(piece.shape);
    let mut out = Vec::new();
    for cutout in &piece.cutouts {
        if !cutout.is_rectangular() || is_boundary_notch(piece, cutout) {
            continue;
        }
        out.push(CutoutCornerRange {
            cutout: cutout.id,
            start: next,
            len: 4,
        });
        next += 4;
    }
    out
}

/// Total number of labelable corners: base corners plus four per
/// interior rectangular cutout.
pub fn corner_label_count(piece: &Piece) -> usize {
    corner_count(piece.shape) + 4 * cutout_corner_ranges(piece).len()
}

/// Resolve a label index to its ring and local index within it.
///
/// `None` when the index is out of range (stale stored data).
pub fn resolve_corner(piece: &Piece, index: usize) -> Option<(CornerRing, usize)> {
    let base = corner_count(piece.shape);
    if index < base {
        return Some((CornerRing::Outer, index));
    }
    cutout_corner_ranges(piece)
        .into_iter()
        .find(|r| r.contains(index))
        .map(|r| (CornerRing::Cutout(r.cutout), index - r.start))
}

/// The raw-space position of a corner label.
pub fn corner_position(piece: &Piece, index: usize) -> Option<Point2> {
    match resolve_corner(piece, index)? {
        (CornerRing::Outer, local) => template_corners(piece).get(local).copied(),
        (CornerRing::Cutout(id), local) => {
            let cutout = piece.cutout(id)?;
            Some(cutout_corner_points(cutout)[local])
        }
    }
}

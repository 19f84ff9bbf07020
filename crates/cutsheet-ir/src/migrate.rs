//! One-time corner-index remap for data stored under the earlier
//! winding convention.
//!
//! Early documents indexed corners walking the boundary in the opposite
//! direction. Loading such a document requires remapping every stored
//! corner index once; the remap is a pure function so the persistence
//! layer can apply it without the kernel holding any state.

use crate::Piece;

/// Remap a corner index recorded under the reversed winding convention.
///
/// `(corner_count - old) % corner_count`; corner 0 is the shared fixed
/// point of both conventions. Returns `old` unchanged when
/// `corner_count` is zero (curved shapes have no corners to remap).
pub fn remap_corner_index(old: usize, corner_count: usize) -> usize {
    if corner_count == 0 {
        return old;
    }
    (corner_count - old % corner_count) % corner_count
}

/// Apply [`remap_corner_index`] to every corner-indexed feature of a
/// piece, returning the migrated copy.
///
/// Only base-shape corner indices are remapped; cutout corner ranges
/// did not exist in the old format.
pub fn remap_piece(piece: &Piece, corner_count: usize) -> Piece {
    let mut out = piece.clone();
    for radius in &mut out.corner_radii {
        if radius.corner < corner_count {
            radius.corner = remap_corner_index(radius.corner, corner_count);
        }
    }
    for cut in &mut out.angle_cuts {
        if let Some(anchor) = cut.anchor_corner {
            if anchor < corner_count {
                cut.anchor_corner = Some(remap_corner_index(anchor, corner_count));
            }
        }
        if let Some(secondary) = cut.secondary_corner {
            if secondary < corner_count {
                cut.secondary_corner = Some(remap_corner_index(secondary, corner_count));
            }
        }
    }
    for curve in &mut out.curved_edges {
        if let Some((a, b)) = curve.span {
            if a < corner_count && b < corner_count {
                // Reversing the winding also swaps which end starts the span.
                curve.span = Some((
                    remap_corner_index(b, corner_count),
                    remap_corner_index(a, corner_count),
                ));
            }
        }
    }
    out
}

//! Angle cuts (chamfers).
//!
//! An angle cut replaces a corner, or a corner-to-corner span, with a
//! single straight segment. Three modes are resolved in order:
//! two-point span removal, one-offset-plus-angle, and the symmetric
//! default. Resolution is pure; the caller splices the result into the
//! ring it is building.

use cutsheet_ir::AngleCut;
use cutsheet_kernel_math::{
    distance, ray_segment_intersection, rotate, unit_vector, Point2, Vec2,
};
use uuid::Uuid;

/// The straight segment an applied angle cut produced, for edge
/// treatment addressing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamferSegment {
    /// The producing angle cut record.
    pub angle_cut: Uuid,
    /// Segment start, on the incoming edge.
    pub start: Point2,
    /// Segment end.
    pub end: Point2,
}

/// A resolved splice: remove `remove_len` ring vertices starting at
/// `remove_from` (wrapping) and insert the cut endpoints in their
/// place.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChamferCut {
    pub remove_from: usize,
    pub remove_len: usize,
    pub insert: [Point2; 2],
}

/// Resolve an angle cut against the current ring.
///
/// `anchor` and `secondary` are vertex indices in the ring. `None`
/// when the cut cannot be realized (zero offset, degenerate adjacent
/// edges, or an angled ray that misses the outgoing edge).
pub(crate) fn resolve_angle_cut(
    ring: &[Point2],
    anchor: usize,
    secondary: Option<usize>,
    cut: &AngleCut,
) -> Option<ChamferCut> {
    let n = ring.len();
    if n < 3 || cut.anchor_offset <= 0.0 {
        return None;
    }
    let corner = ring[anchor];
    let prev = ring[(anchor + n - 1) % n];
    let next = ring[(anchor + 1) % n];
    let u_prev = unit_vector(corner, prev);
    let u_next = unit_vector(corner, next);
    if u_prev == Vec2::zeros() || u_next == Vec2::zeros() {
        return None;
    }
    let p1 = corner + u_prev * cut.anchor_offset.min(distance(corner, prev));

    if cut.uses_second_point {
        let b = secondary?;
        let corner_b = ring[b];
        let next_b = ring[(b + 1) % n];
        let u_out = unit_vector(corner_b, next_b);
        if u_out == Vec2::zeros() {
            return None;
        }
        let p2 = corner_b + u_out * cut.secondary_offset.max(0.0).min(distance(corner_b, next_b));
        return Some(ChamferCut {
            remove_from: anchor,
            remove_len: (b + n - anchor) % n + 1,
            insert: [p1, p2],
        });
    }

    if let Some(angle) = cut.angle_degrees {
        // Swing the cut direction off the incoming edge and find where
        // it lands on the outgoing edge.
        let dir = rotate(unit_vector(p1, corner), angle.to_radians());
        let hit = ray_segment_intersection(p1, dir, corner, next)?;
        return Some(ChamferCut {
            remove_from: anchor,
            remove_len: 1,
            insert: [p1, hit],
        });
    }

    let p2 = corner + u_next * cut.anchor_offset.min(distance(corner, next));
    Some(ChamferCut {
        remove_from: anchor,
        remove_len: 1,
        insert: [p1, p2],
    })
}

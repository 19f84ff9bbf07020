//! Ring editing helpers shared by the outline passes.

use cutsheet_kernel_math::{Point2, Tolerance};

/// Index of the ring vertex coincident with `target`, if any.
pub(crate) fn find_vertex(pts: &[Point2], target: Point2) -> Option<usize> {
    let tol = Tolerance::DEFAULT;
    pts.iter().position(|&p| tol.points_equal(p, target))
}

/// Replace `remove_len` ring vertices starting at `from` with
/// `insert`, wrapping past the seam when needed.
pub(crate) fn splice_ring(pts: &mut Vec<Point2>, from: usize, remove_len: usize, insert: Vec<Point2>) {
    let n = pts.len();
    if remove_len >= n {
        *pts = insert;
        return;
    }
    if from + remove_len <= n {
        pts.splice(from..from + remove_len, insert);
    } else {
        let tail = from + remove_len - n;
        pts.truncate(from);
        pts.drain(..tail);
        pts.extend(insert);
    }
}

//! Raw⇄display coordinate conversion.
//!
//! Pieces are modeled with `width` along x and `height` along y. Shop
//! drawings are printed with the piece rotated so height runs
//! horizontally, which amounts to swapping the axes. The swap is its
//! own inverse; `raw_point` exists so call sites say which direction
//! they mean.

use crate::Point2;

/// Convert a raw model point to display orientation.
pub fn display_point(raw: Point2) -> Point2 {
    Point2::new(raw.y, raw.x)
}

/// Convert a display point back to raw model orientation.
pub fn raw_point(display: Point2) -> Point2 {
    Point2::new(display.y, display.x)
}

/// Convert a raw `(width, height)` pair to display orientation.
pub fn display_size(size: (f64, f64)) -> (f64, f64) {
    (size.1, size.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display_point_swaps_axes() {
        let p = display_point(Point2::new(3.0, 7.0));
        assert_eq!(p, Point2::new(7.0, 3.0));
    }

    #[test]
    fn test_display_size_swaps_axes() {
        assert_eq!(display_size((24.0, 18.0)), (18.0, 24.0));
    }

    proptest! {
        #[test]
        fn prop_swap_is_involution(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            let p = Point2::new(x, y);
            prop_assert_eq!(raw_point(display_point(p)), p);
            prop_assert_eq!(display_point(raw_point(p)), p);
        }
    }
}

//! Corner fillets.

use cutsheet_kernel_math::{distance, unit_vector, Point2, QuadBezier, Vec2};

/// Samples per fillet arc.
pub(crate) const FILLET_SEGMENTS: usize = 8;

/// Replacement points for a filleted ring vertex.
///
/// The radius is clamped to half of each adjacent segment so the
/// tangent points never pass the neighboring vertices. A zero or
/// unrealizable fillet returns the corner unchanged.
pub fn fillet_corner(ring: &[Point2], index: usize, radius: f64, is_inside: bool) -> Vec<Point2> {
    let n = ring.len();
    let corner = ring[index];
    if n < 3 || radius <= 0.0 {
        return vec![corner];
    }
    let prev = ring[(index + n - 1) % n];
    let next = ring[(index + 1) % n];
    let u_prev = unit_vector(corner, prev);
    let u_next = unit_vector(corner, next);
    if u_prev == Vec2::zeros() || u_next == Vec2::zeros() {
        return vec![corner];
    }
    let r = radius
        .min(distance(corner, prev) / 2.0)
        .min(distance(corner, next) / 2.0);
    let t1 = corner + u_prev * r;
    let t2 = corner + u_next * r;
    let control = if is_inside {
        // Scooped fillet: reflect the corner through the chord.
        Point2::from(t1.coords + t2.coords - corner.coords)
    } else {
        corner
    };
    QuadBezier::new(t1, control, t2).sample(FILLET_SEGMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_zero_radius_is_noop() {
        let ring = square();
        assert_eq!(fillet_corner(&ring, 1, 0.0, false), vec![ring[1]]);
    }

    #[test]
    fn test_fillet_tangent_points() {
        let ring = square();
        let arc = fillet_corner(&ring, 1, 2.0, false);
        assert_eq!(arc.len(), FILLET_SEGMENTS + 1);
        // Tangent points sit 2" back along each adjacent edge.
        assert_eq!(arc[0], Point2::new(8.0, 0.0));
        assert_eq!(*arc.last().unwrap(), Point2::new(10.0, 2.0));
        // A convex arc stays inside the corner triangle.
        for p in &arc {
            assert!(p.x <= 10.0 + 1e-9 && p.y >= -1e-9);
        }
    }

    #[test]
    fn test_radius_clamped_to_half_edge() {
        let ring = square();
        let arc = fillet_corner(&ring, 1, 50.0, false);
        assert_eq!(arc[0], Point2::new(5.0, 0.0));
        assert_eq!(*arc.last().unwrap(), Point2::new(10.0, 5.0));
    }

    #[test]
    fn test_inside_fillet_scoops_past_chord() {
        let ring = square();
        let convex = fillet_corner(&ring, 1, 2.0, false);
        let scoop = fillet_corner(&ring, 1, 2.0, true);
        // Same tangent points, opposite bulge.
        assert_eq!(convex[0], scoop[0]);
        let mid_convex = convex[FILLET_SEGMENTS / 2];
        let mid_scoop = scoop[FILLET_SEGMENTS / 2];
        // The chord midpoint separates the two arc midpoints.
        let chord_mid = Point2::new(9.0, 1.0);
        let d = Point2::new(10.0, 0.0) - chord_mid;
        assert!((mid_convex - chord_mid).dot(&d) > 0.0);
        assert!((mid_scoop - chord_mid).dot(&d) < 0.0);
        assert_relative_eq!(
            (mid_convex - chord_mid).norm(),
            (mid_scoop - chord_mid).norm(),
            epsilon = 1e-9
        );
    }
}

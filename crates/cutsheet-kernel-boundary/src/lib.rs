#![warn(missing_docs)]

//! Boundary polygon construction for the cutsheet drawing kernel.
//!
//! Takes a [`Piece`](cutsheet_ir::Piece) and produces the derived
//! boundary state the rest of the kernel works from:
//!
//! - the nominal shape template ([`template_points`],
//!   [`template_corners`], edge identities and chords);
//! - the notch-spliced outline ([`spliced_points`]), with boundary
//!   cutouts merged into the outer polygon;
//! - straight boundary segments classified back to their nominal edges
//!   ([`boundary_segments`]);
//! - the corner label index space spanning base corners and interior
//!   cutout corners ([`cutout_corner_ranges`], [`corner_position`]);
//! - corner ownership arbitration between competing corner features
//!   ([`corner_claims`]).
//!
//! Everything here is recomputed from the piece snapshot on every call;
//! no state is cached between rebuilds. Degenerate feature input never
//! panics: a feature that cannot be realized is skipped and the
//! boundary built as if it were absent.

mod claims;
mod corners;
mod notch;
mod segments;
mod template;

pub use claims::{corner_claims, ClaimConflict, CornerClaim, CornerClaims, CornerFeatureKind};
pub use corners::{
    corner_label_count, corner_position, cutout_corner_points, cutout_corner_ranges,
    resolve_corner, CornerRing, CutoutCornerRange,
};
pub use notch::{is_boundary_notch, spliced_points, touched_sides, Footprint};
pub use segments::{boundary_segments, BoundarySegment};
pub use template::{
    corner_count, edge_chord, edge_corner_span, shape_edges, template_corners, template_points,
};

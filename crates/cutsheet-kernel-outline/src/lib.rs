#![warn(missing_docs)]

//! Finished outline and hole path construction for the cutsheet
//! drawing kernel.
//!
//! Builds on the boundary crate's notch-spliced polygon and applies
//! the shaping features in a fixed pass order: curved edges, corner
//! fillets, then angle cuts. The same fillet and chamfer primitives
//! shape interior cutout rings. Output paths are closed polygons in
//! raw space; outer contours run counter-clockwise and hole paths
//! clockwise.
//!
//! Feature application is total: a feature that cannot be realized
//! against the current boundary (its corner notched away, its edge no
//! longer straight, its angled ray missing the outgoing edge) is
//! skipped, never an error.

mod chamfer;
mod curve;
mod fillet;
mod path;
mod ring;

pub use chamfer::ChamferSegment;
pub use fillet::fillet_corner;
pub use path::{angle_segments, corner_points, cutout_path, outline_path};

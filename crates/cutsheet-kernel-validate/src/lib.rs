#![warn(missing_docs)]

//! Feature conflict validation for the cutsheet drawing kernel.
//!
//! A pure pass over the current feature state producing an ordered
//! list of [`ValidationIssue`]s: structural conflicts (errors) and
//! suspect-but-buildable geometry (warnings). The kernel still builds
//! geometry for a piece with issues; the caller decides whether to
//! block save or export on the errors.

mod engine;
mod issues;

pub use engine::validate_piece;
pub use issues::{IssueKind, Severity, ValidationIssue};

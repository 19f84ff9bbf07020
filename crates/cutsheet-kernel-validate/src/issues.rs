//! Validation issue records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How serious an issue is.
///
/// Errors are structural conflicts the caller will usually block
/// save/export on; warnings mean the geometry builds but may be
/// manufacturably wrong. Neither blocks geometry construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Structurally conflicting feature assignment.
    Error,
    /// Geometry builds but is suspect.
    Warning,
}

/// The kinds of issue the validation engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    /// An interior cutout's bounding rect exceeds the piece's raw
    /// bounds.
    CutoutOutsideBounds,
    /// Two cutout footprints intersect.
    CutoutsOverlap,
    /// The same corner is claimed by both a radius and an angle cut.
    CornerRadiusConflictsWithAngle,
    /// A notch touches an edge that also carries a curved edge.
    CutoutOnCurvedEdge,
    /// A cutout footprint intrudes on the region a fillet consumes.
    CutoutOverlapsCornerRadius,
    /// A cutout footprint intrudes on the region an angle cut
    /// consumes.
    CutoutOverlapsAngleCut,
    /// A curve is requested on an edge a notch has broken.
    CurveOnNotchedEdge,
    /// A curve span ends at a corner that carries a fillet.
    CurveConflictsWithCornerRadius,
    /// A fillet sits on an edge that carries a curved edge.
    CornerRadiusOnCurvedEdge,
    /// A fillet radius exceeds half the shorter adjacent edge.
    CornerRadiusTooLarge,
}

impl IssueKind {
    /// The fixed severity of this kind.
    pub fn severity(self) -> Severity {
        match self {
            IssueKind::CutoutOutsideBounds
            | IssueKind::CutoutsOverlap
            | IssueKind::CornerRadiusConflictsWithAngle => Severity::Error,
            IssueKind::CutoutOnCurvedEdge
            | IssueKind::CutoutOverlapsCornerRadius
            | IssueKind::CutoutOverlapsAngleCut
            | IssueKind::CurveOnNotchedEdge
            | IssueKind::CurveConflictsWithCornerRadius
            | IssueKind::CornerRadiusOnCurvedEdge
            | IssueKind::CornerRadiusTooLarge => Severity::Warning,
        }
    }
}

/// One reported issue.
///
/// Value-equatable so callers can de-duplicate across re-runs. Carries
/// the offending feature record ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// What went wrong.
    pub kind: IssueKind,
    /// Severity derived from the kind.
    pub severity: Severity,
    /// The offending entity ids, most specific first.
    pub entities: Vec<Uuid>,
}

impl ValidationIssue {
    /// Build an issue; the severity follows from the kind.
    pub fn new(kind: IssueKind, entities: Vec<Uuid>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            entities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(IssueKind::CutoutsOverlap.severity(), Severity::Error);
        assert_eq!(
            IssueKind::CornerRadiusConflictsWithAngle.severity(),
            Severity::Error
        );
        assert_eq!(IssueKind::CornerRadiusTooLarge.severity(), Severity::Warning);
    }

    #[test]
    fn test_issues_are_value_equatable() {
        use std::collections::HashSet;
        let id = Uuid::new_v4();
        let a = ValidationIssue::new(IssueKind::CornerRadiusTooLarge, vec![id]);
        let b = ValidationIssue::new(IssueKind::CornerRadiusTooLarge, vec![id]);
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_issue_serde_round_trip() {
        let issue = ValidationIssue::new(IssueKind::CutoutsOverlap, vec![Uuid::new_v4()]);
        let json = serde_json::to_string(&issue).unwrap();
        let back: ValidationIssue = serde_json::from_str(&json).unwrap();
        assert_eq!(issue, back);
    }
}

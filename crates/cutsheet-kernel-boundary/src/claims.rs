//! Corner ownership arbitration.
//!
//! At most one shaping feature may act on a corner: a curve whose span
//! ends there, a fillet, or an angle-cut anchor. Claims are resolved
//! before the outline is built so every downstream pass agrees on the
//! winner. Precedence is fixed (curve endpoints, then fillets, then
//! angle anchors) and within a kind the earlier record wins; losing
//! claims are kept as conflicts so the editing layer can surface them.

use std::collections::BTreeMap;

use cutsheet_ir::Piece;
use uuid::Uuid;

use crate::template::{corner_count, edge_corner_span};

/// The kind of feature claiming a corner, in descending precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CornerFeatureKind {
    /// A curved edge's span endpoint.
    CurveEndpoint,
    /// A corner radius.
    Radius,
    /// An angle cut anchored at the corner.
    AngleAnchor,
}

/// A feature's claim on one corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerClaim {
    /// What kind of feature is claiming.
    pub kind: CornerFeatureKind,
    /// The claiming feature record's id.
    pub feature: Uuid,
}

/// A claim that lost to an incumbent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimConflict {
    /// The contested corner label index.
    pub corner: usize,
    /// The claim that holds the corner.
    pub held: CornerClaim,
    /// The claim that was turned away.
    pub rejected: CornerClaim,
}

/// Resolved corner ownership for one piece.
#[derive(Debug, Clone, Default)]
pub struct CornerClaims {
    claims: BTreeMap<usize, CornerClaim>,
    conflicts: Vec<ClaimConflict>,
}

impl CornerClaims {
    /// An empty claim table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a corner if it is free; a held corner records a conflict
    /// instead. Returns whether the claim took the corner.
    pub fn try_claim(&mut self, corner: usize, claim: CornerClaim) -> bool {
        match self.claims.get(&corner) {
            Some(&held) => {
                self.conflicts.push(ClaimConflict {
                    corner,
                    held,
                    rejected: claim,
                });
                false
            }
            None => {
                self.claims.insert(corner, claim);
                true
            }
        }
    }

    /// Claim a corner unconditionally, returning the evicted holder if
    /// there was one.
    pub fn assign(&mut self, corner: usize, claim: CornerClaim) -> Option<CornerClaim> {
        self.claims.insert(corner, claim)
    }

    /// The claim holding a corner, if any.
    pub fn holder(&self, corner: usize) -> Option<&CornerClaim> {
        self.claims.get(&corner)
    }

    /// Whether the given feature holds the corner.
    pub fn is_held_by(&self, corner: usize, feature: Uuid) -> bool {
        self.holder(corner).is_some_and(|c| c.feature == feature)
    }

    /// Claims that lost to an incumbent, in arrival order.
    pub fn conflicts(&self) -> &[ClaimConflict] {
        &self.conflicts
    }

    /// Iterate held corners in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CornerClaim)> {
        self.claims.iter().map(|(&k, v)| (k, v))
    }
}

/// Resolve corner ownership for a piece.
///
/// Zero-magnitude features (zero radius, zero offsets) claim nothing;
/// they are no-ops and must not block a real feature.
pub fn corner_claims(piece: &Piece) -> CornerClaims {
    let mut claims = CornerClaims::new();
    let base = corner_count(piece.shape);

    for curve in &piece.curved_edges {
        if curve.radius <= 0.0 {
            continue;
        }
        let span = curve
            .span
            .or_else(|| edge_corner_span(piece.shape, curve.edge));
        if let Some((a, b)) = span {
            for corner in [a, b] {
                if corner < base {
                    claims.try_claim(
                        corner,
                        CornerClaim {
                            kind: CornerFeatureKind::CurveEndpoint,
                            feature: curve.id,
                        },
                    );
                }
            }
        }
    }

    for radius in &piece.corner_radii {
        if radius.radius <= 0.0 {
            continue;
        }
        claims.try_claim(
            radius.corner,
            CornerClaim {
                kind: CornerFeatureKind::Radius,
                feature: radius.id,
            },
        );
    }

    for cut in &piece.angle_cuts {
        if cut.anchor_offset <= 0.0 {
            continue;
        }
        if let Some(anchor) = cut.anchor_corner {
            claims.try_claim(
                anchor,
                CornerClaim {
                    kind: CornerFeatureKind::AngleAnchor,
                    feature: cut.id,
                },
            );
        }
    }

    claims
}

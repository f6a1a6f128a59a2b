//! Strut element stiffness in global coordinates.
//!
//! A strut is a 2-node axial-only member with 3 translational DOFs per node.
//!
//! Local stiffness (1D axial):
//! ```text
//! Ke = [ 1  -1]
//!      [-1   1]
//! ```
//!
//! The 2×6 transform maps the two local axial DOFs to the six global DOFs of
//! the end nodes through the direction cosines (l, m, n):
//! ```text
//! Te = [l  m  n  0  0  0]
//!      [0  0  0  l  m  n]
//! ```
//!
//! Global stiffness: `K = (E·A/L) · Teᵗ · Ke · Te` (6×6, symmetric).

use crate::error::{Result, SolveError};
use nalgebra::{Matrix2, Matrix2x6, Matrix6};
use truss_model::Node;

/// Per-strut data cached during assembly and reused for stress recovery.
///
/// Owned by one solve invocation; a fresh solve rebuilds it from scratch, so
/// a reloaded model can never see stale transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementCache {
    /// Local-to-global transform Te
    pub transform: Matrix2x6<f64>,
    /// Strut length
    pub length: f64,
}

/// Element stiffness in the global frame plus its reusable cache
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStiffness {
    /// 6×6 global-frame stiffness block
    pub matrix: Matrix6<f64>,
    /// Transform and length needed again during stress recovery
    pub cache: ElementCache,
}

/// Build the global-frame stiffness of one strut.
///
/// Fails with a geometry error if the strut has non-positive length or a
/// non-positive radius; neither is representable as a truss member.
pub fn element_stiffness(
    p: &Node,
    q: &Node,
    radius: f64,
    elastic_modulus: f64,
    strut: usize,
) -> Result<ElementStiffness> {
    if radius <= 0.0 {
        return Err(SolveError::Geometry {
            strut,
            reason: format!("non-positive radius ({radius})"),
        });
    }

    let length = p.distance_to(q);
    if length <= 0.0 {
        return Err(SolveError::Geometry {
            strut,
            reason: format!("non-positive length ({length})"),
        });
    }

    let area = std::f64::consts::PI * radius * radius;
    let coefficient = elastic_modulus * area / length;

    // Direction cosines of the strut axis
    let l = (q.x - p.x) / length;
    let m = (q.y - p.y) / length;
    let n = (q.z - p.z) / length;

    #[rustfmt::skip]
    let transform = Matrix2x6::new(
        l,   m,   n,   0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, l,   m,   n,
    );

    let ke = Matrix2::new(1.0, -1.0, -1.0, 1.0);
    let matrix = (transform.transpose() * ke * transform) * coefficient;

    Ok(ElementStiffness {
        matrix,
        cache: ElementCache { transform, length },
    })
}

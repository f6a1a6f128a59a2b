//! Global sparse assembly of strut stiffness contributions.
//!
//! Assembly runs in COO (coordinate) format: each strut's 6×6 block is
//! scattered as four 3×3 sub-blocks at (p,p), (p,q), (q,p), (q,q), and the
//! COO→CSC conversion sums duplicate coordinates, so struts sharing a node
//! accumulate additively at the same DOF pairs.
//!
//! Element stiffness blocks depend only on their own strut, so they are
//! computed in parallel; the scatter into the shared COO builder happens
//! afterwards on one thread.

use crate::element::{ElementCache, ElementStiffness, element_stiffness};
use crate::error::Result;
use nalgebra::{DVector, Matrix6};
use nalgebra_sparse::{CooMatrix, CscMatrix};
use rayon::prelude::*;
use truss_model::TrussModel;

/// Scatter one 6×6 stiffness block into the COO builder as four 3×3 blocks.
///
/// Quadrant layout of the element matrix:
/// ```text
///        p      q
///   p [ K11 | K12 ]
///   q [ K21 | K22 ]
/// ```
pub fn scatter_element(coo: &mut CooMatrix<f64>, p: usize, q: usize, k: &Matrix6<f64>) {
    let (rp, rq) = (3 * p, 3 * q);
    for a in 0..3 {
        for b in 0..3 {
            coo.push(rp + a, rp + b, k[(a, b)]);
            coo.push(rp + a, rq + b, k[(a, b + 3)]);
            coo.push(rq + a, rp + b, k[(a + 3, b)]);
            coo.push(rq + a, rq + b, k[(a + 3, b + 3)]);
        }
    }
}

/// Assemble the global stiffness matrix and the per-strut solve cache.
///
/// Returns the 3N×3N matrix in CSC form together with the transforms and
/// lengths needed later for stress recovery.
pub fn assemble_stiffness(model: &TrussModel) -> Result<(CscMatrix<f64>, Vec<ElementCache>)> {
    let num_dofs = model.num_dofs();

    let blocks: Vec<ElementStiffness> = model
        .struts
        .par_iter()
        .enumerate()
        .map(|(id, strut)| {
            element_stiffness(
                &model.nodes[strut.p],
                &model.nodes[strut.q],
                strut.radius,
                model.elastic_modulus,
                id,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let mut coo = CooMatrix::new(num_dofs, num_dofs);
    let mut caches = Vec::with_capacity(blocks.len());
    for (strut, block) in model.struts.iter().zip(blocks) {
        scatter_element(&mut coo, strut.p, strut.q, &block.matrix);
        caches.push(block.cache);
    }

    Ok((CscMatrix::from(&coo), caches))
}

/// Build the global force vector from the applied nodal loads.
///
/// Multiple loads on the same node sum, matching the assembler's additive
/// semantics.
pub fn assemble_force_vector(model: &TrussModel) -> DVector<f64> {
    let mut force = DVector::zeros(model.num_dofs());
    for load in &model.loads {
        let base = 3 * load.node;
        force[base] += load.fx;
        force[base + 1] += load.fy;
        force[base + 2] += load.fz;
    }
    force
}

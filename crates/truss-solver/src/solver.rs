//! Sparse symmetric positive definite solve for the constrained system.

use crate::error::{Result, SolveError};
use nalgebra::DVector;
use nalgebra_sparse::factorization::CscCholesky;
use nalgebra_sparse::{CscMatrix, SparseEntryMut};

/// Solve `K * u = F` by sparse Cholesky factorization.
///
/// The constrained stiffness matrix must be symmetric positive definite over
/// the DOFs that carry stiffness. Diagonal handling before factoring:
///
/// - A structurally absent diagonal means the node touches no strut: the
///   system is singular (and any constraint on that node was ineffective),
///   so the solve fails naming the node.
/// - An explicit zero diagonal implies the whole row is zero, because each
///   strut adds `k·cosᵢ²` with `k > 0`. With zero applied load that DOF is
///   decoupled and cannot deform; it is pinned with a unit diagonal so the
///   factorization can proceed and the DOF solves to exactly zero. With a
///   nonzero load the equations are inconsistent and the solve fails.
///
/// A failed factorization (indefinite system, e.g. a free-floating
/// substructure) is reported the same way; no displacement vector escapes a
/// failure.
pub fn solve_displacements(
    stiffness: &mut CscMatrix<f64>,
    force: &DVector<f64>,
) -> Result<DVector<f64>> {
    for dof in 0..stiffness.nrows() {
        match stiffness.get_entry_mut(dof, dof) {
            Some(SparseEntryMut::NonZero(value)) => {
                if *value == 0.0 {
                    if force[dof] != 0.0 {
                        return Err(SolveError::Solver(format!(
                            "DOF {dof} (node {}) carries a load but has no stiffness",
                            dof / 3
                        )));
                    }
                    *value = 1.0;
                }
            }
            _ => {
                return Err(SolveError::Solver(format!(
                    "singular system: DOF {dof} (node {}) has no stiffness entries",
                    dof / 3
                )));
            }
        }
    }

    let factorization =
        CscCholesky::factor(&*stiffness).map_err(|err| SolveError::Solver(err.to_string()))?;
    let rhs = nalgebra::DMatrix::from_column_slice(force.len(), 1, force.as_slice());
    let solution = factorization.solve(&rhs);

    let displacements = solution.column(0).into_owned();
    if displacements.iter().any(|v| !v.is_finite()) {
        return Err(SolveError::Solver(
            "factorization produced non-finite displacements".to_string(),
        ));
    }
    Ok(displacements)
}

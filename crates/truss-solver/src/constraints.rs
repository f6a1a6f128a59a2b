//! Penalty-method enforcement of fixed-displacement constraints.
//!
//! A constrained node has all three of its DOFs forced to (approximately)
//! zero: the force entries are discarded and each diagonal stiffness entry
//! is multiplied by a large penalty factor. The sparsity pattern is never
//! resized or renumbered, at the cost of enforcing the constraint only to
//! within ~1/penalty of the surrounding stiffness magnitudes.

use nalgebra::DVector;
use nalgebra_sparse::{CscMatrix, SparseEntryMut};

/// Default diagonal penalty factor
pub const PENALTY_FACTOR: f64 = 1e16;

/// Apply all fixed-node constraints to the assembled system in place.
///
/// Per constrained node: the three force entries are zeroed (an applied load
/// at a fixed node is superseded by the constraint), and the three diagonal
/// stiffness entries are scaled by `penalty`. Off-diagonal entries are left
/// untouched, so symmetry is preserved.
///
/// If a constrained node is isolated, its diagonal entries are structurally
/// absent and the scaling is a no-op: the DOF stays singular and the solve
/// reports the failure instead of this step hiding it.
pub fn apply_constraints(
    stiffness: &mut CscMatrix<f64>,
    force: &mut DVector<f64>,
    constraints: &[usize],
    penalty: f64,
) {
    for &node in constraints {
        for axis in 0..3 {
            let dof = 3 * node + axis;
            force[dof] = 0.0;
            if let Some(SparseEntryMut::NonZero(value)) = stiffness.get_entry_mut(dof, dof) {
                *value *= penalty;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::{assemble_force_vector, assemble_stiffness};
    use nalgebra_sparse::SparseEntry;
    use truss_model::TrussModel;

    fn entry(m: &CscMatrix<f64>, i: usize, j: usize) -> f64 {
        match m.get_entry(i, j) {
            Some(SparseEntry::NonZero(v)) => *v,
            _ => 0.0,
        }
    }

    fn bar_model() -> TrussModel {
        let mut model = TrussModel::new(200_000.0);
        model.add_node(0.0, 0.0, 0.0);
        model.add_node(1.0, 2.0, 2.0);
        model.add_strut(0, 1, 0.05);
        model.add_load(0, 40.0, -10.0, 5.0);
        model.constrain_node(0);
        model
    }

    #[test]
    fn scales_diagonal_and_zeroes_force() {
        let model = bar_model();
        let (mut k, _) = assemble_stiffness(&model).unwrap();
        let mut force = assemble_force_vector(&model);
        let before: Vec<f64> = (0..3).map(|d| entry(&k, d, d)).collect();

        apply_constraints(&mut k, &mut force, &model.constraints, PENALTY_FACTOR);

        for d in 0..3 {
            assert!((entry(&k, d, d) - before[d] * PENALTY_FACTOR).abs() <= before[d].abs() * 1e-3);
            assert_eq!(force[d], 0.0);
        }
    }

    #[test]
    fn off_diagonal_entries_untouched() {
        let model = bar_model();
        let (mut k, _) = assemble_stiffness(&model).unwrap();
        let mut force = assemble_force_vector(&model);
        let coupling_before = entry(&k, 0, 3);
        let off_diag_before = entry(&k, 0, 1);

        apply_constraints(&mut k, &mut force, &model.constraints, PENALTY_FACTOR);

        assert_eq!(entry(&k, 0, 3), coupling_before);
        assert_eq!(entry(&k, 0, 1), off_diag_before);
    }

    #[test]
    fn unconstrained_dofs_keep_their_loads() {
        let mut model = bar_model();
        model.add_load(1, 0.0, 77.0, 0.0);
        let (mut k, _) = assemble_stiffness(&model).unwrap();
        let mut force = assemble_force_vector(&model);

        apply_constraints(&mut k, &mut force, &model.constraints, PENALTY_FACTOR);

        assert!((force[4] - 77.0).abs() < 1e-12);
    }

    #[test]
    fn isolated_node_constraint_is_a_no_op() {
        // Node 2 touches no strut: its diagonal entries are structurally
        // absent, so the penalty has nothing to scale and the DOFs stay
        // singular.
        let mut model = bar_model();
        model.add_node(9.0, 9.0, 9.0);
        model.constrain_node(2);

        let (mut k, _) = assemble_stiffness(&model).unwrap();
        let mut force = assemble_force_vector(&model);
        apply_constraints(&mut k, &mut force, &model.constraints, PENALTY_FACTOR);

        for d in 6..9 {
            assert_eq!(entry(&k, d, d), 0.0);
        }
    }
}

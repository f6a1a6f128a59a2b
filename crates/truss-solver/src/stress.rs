//! Axial stress recovery from solved displacements.

use crate::element::ElementCache;
use nalgebra::{DVector, RowVector2, Vector6};
use truss_model::TrussModel;

/// Recover the axial stress of every strut.
///
/// Per strut: gather the six end-node displacement components in (p, q)
/// order and evaluate `(E / L) · [-1, 1] · Te · d`. Positive stress is
/// tension, negative is compression. A model with zero struts yields an
/// empty vector.
///
/// `caches` must come from the same solve that produced `displacements`,
/// indexed by strut id.
pub fn recover_stresses(
    model: &TrussModel,
    caches: &[ElementCache],
    displacements: &DVector<f64>,
) -> Vec<f64> {
    let axial = RowVector2::new(-1.0, 1.0);

    model
        .struts
        .iter()
        .zip(caches)
        .map(|(strut, cache)| {
            let (p, q) = (3 * strut.p, 3 * strut.q);
            let d = Vector6::new(
                displacements[p],
                displacements[p + 1],
                displacements[p + 2],
                displacements[q],
                displacements[q + 1],
                displacements[q + 2],
            );
            let coefficient = model.elastic_modulus / cache.length;
            coefficient * (axial * cache.transform * d)[(0, 0)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::assemble_stiffness;

    #[test]
    fn uniform_extension_gives_tension() {
        let mut model = TrussModel::new(100.0);
        model.add_node(0.0, 0.0, 0.0);
        model.add_node(2.0, 0.0, 0.0);
        model.add_strut(0, 1, 0.01);
        let (_, caches) = assemble_stiffness(&model).unwrap();

        // Node 1 moves +0.01 in x: strain = 0.005, stress = E * strain
        let u = DVector::from_vec(vec![0.0, 0.0, 0.0, 0.01, 0.0, 0.0]);
        let stresses = recover_stresses(&model, &caches, &u);

        assert_eq!(stresses.len(), 1);
        assert!((stresses[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn shortening_gives_compression() {
        let mut model = TrussModel::new(100.0);
        model.add_node(0.0, 0.0, 0.0);
        model.add_node(2.0, 0.0, 0.0);
        model.add_strut(0, 1, 0.01);
        let (_, caches) = assemble_stiffness(&model).unwrap();

        let u = DVector::from_vec(vec![0.0, 0.0, 0.0, -0.01, 0.0, 0.0]);
        let stresses = recover_stresses(&model, &caches, &u);

        assert!((stresses[0] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn lateral_motion_produces_no_axial_stress() {
        let mut model = TrussModel::new(100.0);
        model.add_node(0.0, 0.0, 0.0);
        model.add_node(1.0, 0.0, 0.0);
        model.add_strut(0, 1, 0.01);
        let (_, caches) = assemble_stiffness(&model).unwrap();

        let u = DVector::from_vec(vec![0.0, 0.0, 0.0, 0.0, 0.3, -0.2]);
        let stresses = recover_stresses(&model, &caches, &u);

        assert!(stresses[0].abs() < 1e-12);
    }

    #[test]
    fn empty_model_yields_empty_stresses() {
        let mut model = TrussModel::new(100.0);
        model.add_node(0.0, 0.0, 0.0);
        let u = DVector::zeros(3);

        let stresses = recover_stresses(&model, &[], &u);
        assert!(stresses.is_empty());
    }
}

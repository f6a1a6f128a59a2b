//! Linear static analysis pipeline.
//!
//! Runs the full solve for one model: index precondition checks, parallel
//! element stiffness, sparse assembly, constraint enforcement, the Cholesky
//! solve, and stress recovery. Each run builds every intermediate fresh and
//! drops it when the run ends, so consecutive solves (or a model reload)
//! never see stale cached transforms.

use crate::assembly::{assemble_force_vector, assemble_stiffness};
use crate::constraints::{PENALTY_FACTOR, apply_constraints};
use crate::error::{EntityKind, Result, SolveError};
use crate::solver::solve_displacements;
use crate::stress::recover_stresses;
use serde::Serialize;
use truss_model::TrussModel;

/// Analysis configuration and control
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Diagonal penalty factor for fixed-displacement constraints
    pub penalty_factor: f64,
    /// Whether to print progress to stderr
    pub verbose: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            penalty_factor: PENALTY_FACTOR,
            verbose: false,
        }
    }
}

/// Results of a successful linear static solve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticResults {
    /// Nodal displacements, three components per node in node order
    pub displacements: Vec<f64>,
    /// Axial stress per strut in strut order (positive = tension)
    pub stresses: Vec<f64>,
    /// Number of degrees of freedom solved
    pub num_dofs: usize,
}

impl StaticResults {
    /// Displacement components (dx, dy, dz) of one node
    pub fn node_displacement(&self, node: usize) -> [f64; 3] {
        let base = 3 * node;
        [
            self.displacements[base],
            self.displacements[base + 1],
            self.displacements[base + 2],
        ]
    }
}

/// Linear static analysis driver
pub struct StaticAnalysis {
    config: AnalysisConfig,
}

impl StaticAnalysis {
    /// Create an analysis with the given configuration
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the full solve pipeline for one model.
    ///
    /// Blocks until displacements and stresses are computed or a terminal
    /// error is raised; on error no partial results are returned.
    pub fn run(&self, model: &TrussModel) -> Result<StaticResults> {
        check_node_indices(model)?;

        if self.config.verbose {
            let stats = model.statistics();
            eprintln!(
                "  assembling {} struts over {} DOFs",
                stats.num_struts, stats.num_dofs
            );
        }

        let (mut stiffness, caches) = assemble_stiffness(model)?;
        let mut force = assemble_force_vector(model);
        apply_constraints(
            &mut stiffness,
            &mut force,
            &model.constraints,
            self.config.penalty_factor,
        );

        if self.config.verbose {
            eprintln!("  factoring ({} nonzeros)", stiffness.nnz());
        }

        let displacements = solve_displacements(&mut stiffness, &force)?;
        let stresses = recover_stresses(model, &caches, &displacements);

        Ok(StaticResults {
            num_dofs: displacements.len(),
            displacements: displacements.as_slice().to_vec(),
            stresses,
        })
    }
}

impl Default for StaticAnalysis {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

/// Run a linear static analysis with the default configuration
pub fn solve_static(model: &TrussModel) -> Result<StaticResults> {
    StaticAnalysis::default().run(model)
}

/// Verify that every strut, load, and constraint references a valid node.
///
/// Runs before assembly so an out-of-range index aborts the solve instead of
/// panicking mid-scatter.
fn check_node_indices(model: &TrussModel) -> Result<()> {
    let num_nodes = model.nodes.len();
    let bad = |entity, index, node| SolveError::NodeIndex {
        entity,
        index,
        node,
        num_nodes,
    };

    for (index, strut) in model.struts.iter().enumerate() {
        for node in [strut.p, strut.q] {
            if node >= num_nodes {
                return Err(bad(EntityKind::Strut, index, node));
            }
        }
    }
    for (index, load) in model.loads.iter().enumerate() {
        if load.node >= num_nodes {
            return Err(bad(EntityKind::Load, index, load.node));
        }
    }
    for (index, &node) in model.constraints.iter().enumerate() {
        if node >= num_nodes {
            return Err(bad(EntityKind::Constraint, index, node));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cantilever_bar() -> TrussModel {
        let mut model = TrussModel::new(2.0e11);
        model.add_node(0.0, 0.0, 0.0);
        model.add_node(1.0, 0.0, 0.0);
        model.add_strut(0, 1, 0.01);
        model.add_load(1, 1000.0, 0.0, 0.0);
        model.constrain_node(0);
        model
    }

    #[test]
    fn solves_cantilever_bar() {
        let results = solve_static(&cantilever_bar()).unwrap();

        let area = std::f64::consts::PI * 1e-4;
        let axial_k = 2.0e11 * area;
        let expected_u = 1000.0 / axial_k;
        let expected_stress = 1000.0 / area;

        let [dx, dy, dz] = results.node_displacement(1);
        assert!((dx - expected_u).abs() / expected_u < 1e-6);
        assert!(dy.abs() < expected_u * 1e-9);
        assert!(dz.abs() < expected_u * 1e-9);

        assert_eq!(results.stresses.len(), 1);
        assert!((results.stresses[0] - expected_stress).abs() / expected_stress < 1e-6);
        assert!(results.stresses[0] > 0.0, "axial pull is tension");
    }

    #[test]
    fn rejects_strut_with_bad_node_index() {
        let mut model = cantilever_bar();
        model.add_strut(1, 5, 0.01);
        let err = solve_static(&model).unwrap_err();
        assert!(matches!(
            err,
            SolveError::NodeIndex {
                entity: EntityKind::Strut,
                node: 5,
                ..
            }
        ));
    }

    #[test]
    fn rejects_load_and_constraint_with_bad_node_index() {
        let mut model = cantilever_bar();
        model.add_load(9, 1.0, 0.0, 0.0);
        assert!(matches!(
            solve_static(&model).unwrap_err(),
            SolveError::NodeIndex {
                entity: EntityKind::Load,
                ..
            }
        ));

        let mut model = cantilever_bar();
        model.constrain_node(7);
        assert!(matches!(
            solve_static(&model).unwrap_err(),
            SolveError::NodeIndex {
                entity: EntityKind::Constraint,
                ..
            }
        ));
    }

    #[test]
    fn constrained_displacement_shrinks_with_penalty() {
        let model = cantilever_bar();

        let soft = StaticAnalysis::new(AnalysisConfig {
            penalty_factor: 1e6,
            verbose: false,
        })
        .run(&model)
        .unwrap();
        let hard = StaticAnalysis::new(AnalysisConfig {
            penalty_factor: 1e12,
            verbose: false,
        })
        .run(&model)
        .unwrap();

        let soft_residual = soft.node_displacement(0)[0].abs();
        let hard_residual = hard.node_displacement(0)[0].abs();
        assert!(hard_residual < soft_residual / 1e3);
    }
}

//! Direct stiffness solver for 3D pin-jointed truss structures.
//!
//! The pipeline: per-strut 6×6 stiffness in global coordinates, sparse COO
//! assembly with duplicate summation, penalty enforcement of fixed-node
//! constraints, a sparse Cholesky solve, and axial stress recovery from the
//! solved displacements.

pub mod analysis;
pub mod assembly;
pub mod constraints;
pub mod element;
pub mod error;
pub mod solver;
pub mod stress;

pub use analysis::{AnalysisConfig, StaticAnalysis, StaticResults, solve_static};
pub use assembly::{assemble_force_vector, assemble_stiffness, scatter_element};
pub use constraints::{PENALTY_FACTOR, apply_constraints};
pub use element::{ElementCache, ElementStiffness, element_stiffness};
pub use error::{EntityKind, Result, SolveError};
pub use solver::solve_displacements;
pub use stress::recover_stresses;

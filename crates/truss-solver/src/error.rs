//! Error types for the truss solver

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolveError>;

/// Kind of model entity holding a bad node reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Strut,
    Load,
    Constraint,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Strut => write!(f, "strut"),
            EntityKind::Load => write!(f, "load"),
            EntityKind::Constraint => write!(f, "constraint"),
        }
    }
}

/// Terminal failures of one solve invocation.
///
/// None of these are recovered internally: the caller must correct the model
/// and re-run. No partial displacement or stress output survives a failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// A strut has degenerate geometry (non-positive length or radius)
    #[error("strut {strut}: {reason}")]
    Geometry { strut: usize, reason: String },

    /// An entity references a node index outside the model
    #[error("{entity} {index} references node {node}, but the model has {num_nodes} nodes")]
    NodeIndex {
        entity: EntityKind,
        index: usize,
        node: usize,
        num_nodes: usize,
    },

    /// The constrained global matrix is singular or indefinite
    #[error("linear solve failed: {0}")]
    Solver(String),
}

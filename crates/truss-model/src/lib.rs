//! In-memory model data for 3D pin-jointed truss structures.
//!
//! This crate holds the geometry, connectivity, material, loading, and
//! constraint data consumed by the solver: nodes, struts, nodal loads, and
//! fully-fixed node constraints. Everything is populated once at load time
//! and treated as immutable input to a solve.

/// A node in the truss structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Node {
    /// Create a new node
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Get coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// A strut (two-node axial member) with a circular cross-section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strut {
    /// Index of the first end node
    pub p: usize,
    /// Index of the second end node
    pub q: usize,
    /// Cross-section radius
    pub radius: f64,
}

impl Strut {
    /// Create a new strut between nodes `p` and `q`
    pub fn new(p: usize, q: usize, radius: f64) -> Self {
        Self { p, q, radius }
    }
}

/// An external force applied to a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodalLoad {
    /// Index of the loaded node
    pub node: usize,
    /// Force component along X
    pub fx: f64,
    /// Force component along Y
    pub fy: f64,
    /// Force component along Z
    pub fz: f64,
}

impl NodalLoad {
    /// Create a new nodal load
    pub fn new(node: usize, fx: f64, fy: f64, fz: f64) -> Self {
        Self { node, fx, fy, fz }
    }

    /// Force components as an array
    pub fn components(&self) -> [f64; 3] {
        [self.fx, self.fy, self.fz]
    }
}

/// Complete truss model: geometry, topology, material, loads, constraints
///
/// Node indices are dense and zero-based; a node's index is its position in
/// `nodes`. A constraint entry fixes all three displacement components of
/// that node to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TrussModel {
    /// Global elastic modulus shared by all struts
    pub elastic_modulus: f64,
    /// All nodes, index = position
    pub nodes: Vec<Node>,
    /// All struts, index = position
    pub struts: Vec<Strut>,
    /// Applied nodal loads (duplicate node entries sum)
    pub loads: Vec<NodalLoad>,
    /// Indices of fully-fixed nodes
    pub constraints: Vec<usize>,
}

impl TrussModel {
    /// Create an empty model with the given elastic modulus
    pub fn new(elastic_modulus: f64) -> Self {
        Self {
            elastic_modulus,
            nodes: Vec::new(),
            struts: Vec::new(),
            loads: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Add a node, returning its index
    pub fn add_node(&mut self, x: f64, y: f64, z: f64) -> usize {
        self.nodes.push(Node::new(x, y, z));
        self.nodes.len() - 1
    }

    /// Add a strut between two node indices
    pub fn add_strut(&mut self, p: usize, q: usize, radius: f64) {
        self.struts.push(Strut::new(p, q, radius));
    }

    /// Add a nodal load
    pub fn add_load(&mut self, node: usize, fx: f64, fy: f64, fz: f64) {
        self.loads.push(NodalLoad::new(node, fx, fy, fz));
    }

    /// Fix all three displacement components of a node
    pub fn constrain_node(&mut self, node: usize) {
        self.constraints.push(node);
    }

    /// Total number of degrees of freedom (3 per node)
    pub fn num_dofs(&self) -> usize {
        self.nodes.len() * 3
    }

    /// Get model statistics
    pub fn statistics(&self) -> ModelStatistics {
        ModelStatistics {
            num_nodes: self.nodes.len(),
            num_struts: self.struts.len(),
            num_loads: self.loads.len(),
            num_constraints: self.constraints.len(),
            num_dofs: self.num_dofs(),
        }
    }
}

/// Model statistics for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStatistics {
    /// Total number of nodes
    pub num_nodes: usize,
    /// Total number of struts
    pub num_struts: usize,
    /// Number of applied nodal loads
    pub num_loads: usize,
    /// Number of fully-fixed nodes
    pub num_constraints: usize,
    /// Total degrees of freedom
    pub num_dofs: usize,
}

impl ModelStatistics {
    /// Format as a human-readable string
    pub fn format(&self) -> String {
        [
            format!("Nodes: {}", self.num_nodes),
            format!("Struts: {}", self.num_struts),
            format!("Loads: {}", self.num_loads),
            format!("Constrained nodes: {}", self.num_constraints),
            format!("DOFs: {}", self.num_dofs),
        ]
        .join("\n")
    }
}

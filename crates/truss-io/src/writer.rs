//! Results writers: plain text and JSON.

use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use truss_solver::StaticResults;

/// Format results as the plain-text report.
///
/// One line per node with its displacement components, then one line per
/// strut with its axial stress (positive = tension).
pub fn results_to_string(results: &StaticResults) -> String {
    let mut out = String::from("results data\n");

    out.push_str("Nodes Displacement\n");
    for node in 0..results.displacements.len() / 3 {
        let [dx, dy, dz] = results.node_displacement(node);
        out.push_str(&format!("Node{node}:{dx:.6E},{dy:.6E},{dz:.6E}\n"));
    }

    out.push_str("Element Unit Stress\n");
    for (strut, stress) in results.stresses.iter().enumerate() {
        out.push_str(&format!("Unit{strut}:{stress:.6E}\n"));
    }

    out
}

/// Write the plain-text report to a file
pub fn write_results_txt(path: impl AsRef<Path>, results: &StaticResults) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(results_to_string(results).as_bytes())?;
    Ok(())
}

/// Write results as pretty-printed JSON
pub fn write_results_json(path: impl AsRef<Path>, results: &StaticResults) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, results)?;
    Ok(())
}

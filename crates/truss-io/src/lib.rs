//! Text I/O collaborators for the truss solver: model loading and results
//! writing. The numerical core only ever sees the in-memory `TrussModel`
//! and produces `StaticResults`; everything file-shaped lives here.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{IoError, Result};
pub use reader::{read_model_file, read_model_str};
pub use writer::{results_to_string, write_results_json, write_results_txt};

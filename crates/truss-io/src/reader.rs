//! Keyword text-format loader for truss models.
//!
//! The format is a flat sequence of whitespace-separated tokens grouped into
//! keyword sections:
//!
//! ```text
//! elasticModulus 2e11
//! nodes 2
//! 0 0 0
//! 1 0 0
//! units 1
//! 0 1 0.01
//! force 1
//! 1 1000 0 0
//! constraint 1
//! 0
//! ```
//!
//! Dispatch is on exact keyword tokens; an unrecognized keyword is a
//! structured error carrying its line number, never a silently skipped
//! section.

use crate::error::{IoError, Result};
use std::fs;
use std::path::Path;
use truss_model::TrussModel;

/// Load a truss model from a file
pub fn read_model_file(path: impl AsRef<Path>) -> Result<TrussModel> {
    let raw = fs::read_to_string(path)?;
    read_model_str(&raw)
}

/// Load a truss model from raw text
pub fn read_model_str(raw: &str) -> Result<TrussModel> {
    let mut cursor = Cursor::new(raw);
    let mut model = TrussModel::new(0.0);

    while let Some((line, keyword)) = cursor.next_token() {
        match keyword {
            "elasticModulus" => {
                model.elastic_modulus = cursor.expect_f64("elastic modulus")?;
            }
            "nodes" => {
                let count = cursor.expect_usize("node count")?;
                for _ in 0..count {
                    let x = cursor.expect_f64("node x coordinate")?;
                    let y = cursor.expect_f64("node y coordinate")?;
                    let z = cursor.expect_f64("node z coordinate")?;
                    model.add_node(x, y, z);
                }
            }
            "units" => {
                let count = cursor.expect_usize("strut count")?;
                for _ in 0..count {
                    let p = cursor.expect_usize("strut first node")?;
                    let q = cursor.expect_usize("strut second node")?;
                    let radius = cursor.expect_f64("strut radius")?;
                    model.add_strut(p, q, radius);
                }
            }
            "force" => {
                let count = cursor.expect_usize("force count")?;
                for _ in 0..count {
                    let node = cursor.expect_usize("force node index")?;
                    let fx = cursor.expect_f64("force x component")?;
                    let fy = cursor.expect_f64("force y component")?;
                    let fz = cursor.expect_f64("force z component")?;
                    model.add_load(node, fx, fy, fz);
                }
            }
            "constraint" => {
                let count = cursor.expect_usize("constraint count")?;
                for _ in 0..count {
                    let node = cursor.expect_usize("constraint node index")?;
                    model.constrain_node(node);
                }
            }
            other => {
                return Err(IoError::UnknownKeyword {
                    line,
                    keyword: other.to_string(),
                });
            }
        }
    }

    Ok(model)
}

/// Whitespace tokenizer that remembers the line of every token
struct Cursor<'a> {
    tokens: Vec<(usize, &'a str)>,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(raw: &'a str) -> Self {
        let tokens = raw
            .lines()
            .enumerate()
            .flat_map(|(index, line)| line.split_whitespace().map(move |tok| (index + 1, tok)))
            .collect();
        Self {
            tokens,
            position: 0,
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        let token = self.tokens.get(self.position).copied();
        self.position += token.is_some() as usize;
        token
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map(|&(line, _)| line).unwrap_or(0)
    }

    fn expect_f64(&mut self, what: &str) -> Result<f64> {
        match self.next_token() {
            Some((line, token)) => token.parse().map_err(|_| IoError::Parse {
                line,
                message: format!("expected {what}, found '{token}'"),
            }),
            None => Err(IoError::Parse {
                line: self.last_line(),
                message: format!("unexpected end of file, expected {what}"),
            }),
        }
    }

    fn expect_usize(&mut self, what: &str) -> Result<usize> {
        match self.next_token() {
            Some((line, token)) => token.parse().map_err(|_| IoError::Parse {
                line,
                message: format!("expected {what}, found '{token}'"),
            }),
            None => Err(IoError::Parse {
                line: self.last_line(),
                message: format!("unexpected end of file, expected {what}"),
            }),
        }
    }
}

//! Error types for maze generation and export

use std::fmt;
use std::path::PathBuf;

use crate::maze::grid::{Cell, CellState};

/// Main error type for all maze operations
///
/// The first group of variants reports broken internal invariants of the
/// generator. They indicate a logic fault in the caller and abort generation
/// instead of continuing with a corrupted grid.
#[derive(Debug)]
pub enum MazeError {
    /// A cell was asked to change state from something other than `Unvisited`
    InvalidTransition {
        /// Cell whose state change was rejected
        cell: Cell,
        /// State the cell was in at the time
        from: CellState,
    },

    /// Random selection was requested from an empty remaining set
    Empty,

    /// Removal of a cell that is not a member of the remaining set
    NotFound {
        /// Cell that was not found
        cell: Cell,
    },

    /// Loop erasure targeted a cell absent from the current walk
    NotInPath {
        /// Cell that was not found in the trail
        cell: Cell,
    },

    /// Cell coordinates fall outside the grid
    OutOfBounds {
        /// Offending cell
        cell: Cell,
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// Following direction pointers from a cell did not reach the root
    BrokenTree {
        /// Cell where the traversal started
        cell: Cell,
        /// What went wrong during the traversal
        reason: &'static str,
    },

    /// The random source kept producing directions that leave the grid
    ///
    /// Only reachable with a biased or scripted source; a fair source
    /// redraws successfully with overwhelming probability.
    RedrawLimit {
        /// Walk position where the draws were attempted
        cell: Cell,
        /// Number of consecutive rejected draws
        attempts: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing to the terminal failed
    Terminal {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTransition { cell, from } => {
                write!(f, "Invalid transition at {cell}: cell is already {from}")
            }
            Self::Empty => write!(f, "Cannot pick from an empty remaining set"),
            Self::NotFound { cell } => {
                write!(f, "Cell {cell} is not in the remaining set")
            }
            Self::NotInPath { cell } => {
                write!(f, "Cell {cell} is not part of the current walk")
            }
            Self::OutOfBounds { cell, dimensions } => {
                write!(
                    f,
                    "Cell {cell} is outside the {}x{} grid",
                    dimensions.0, dimensions.1
                )
            }
            Self::BrokenTree { cell, reason } => {
                write!(f, "Cell {cell} does not reach the root: {reason}")
            }
            Self::RedrawLimit { cell, attempts } => {
                write!(
                    f,
                    "No in-bounds direction from {cell} after {attempts} draws"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Terminal { source } => write!(f, "Terminal output failed: {source}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Terminal { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::Terminal { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}


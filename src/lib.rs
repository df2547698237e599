//! Uniform random perfect mazes via Wilson's algorithm
//!
//! A maze is a spanning tree over a rectangular grid: exactly one path joins
//! any two cells. Wilson's algorithm grows that tree from loop-erased random
//! walks, sampling every spanning tree of the grid with equal probability.

#![forbid(unsafe_code)]

/// Input/output operations, rendering and error handling
pub mod io;
/// Core maze model and the loop-erased random walk generator
pub mod maze;

pub use io::error::{MazeError, Result};
pub use maze::builder::{GenerationObserver, MazeBuilder, Phase};
pub use maze::grid::{Cell, CellState, Direction, Grid};

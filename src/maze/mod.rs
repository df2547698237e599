//! Maze model and generation
//!
//! This module contains the core of the generator:
//! - The cell grid and its tree encoding
//! - The set of cells still outside the tree
//! - The loop-erased walk trail
//! - The builder running Wilson's algorithm

/// Wilson's algorithm orchestration
pub mod builder;
/// Cell grid, directions and tree queries
pub mod grid;
/// Injectable random sources
pub mod random;
/// Unvisited cell tracking with uniform sampling
pub mod remaining;
/// Loop-erased walk trail
pub mod walk;

pub use builder::MazeBuilder;
pub use grid::Grid;

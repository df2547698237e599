//! Rectangular cell grid encoding the maze as a tree of direction pointers
//!
//! Every cell absorbed into the maze records the single direction through
//! which it attaches toward the root. Read together, those pointers form a
//! parent-pointer tree, and the wall between two neighbours is open exactly
//! when one of them points at the other.

use std::fmt;

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result, invalid_parameter};

/// Compass direction between orthogonally adjacent cells
///
/// `y` grows southward, so North is the row above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row `y - 1`
    North,
    /// Toward row `y + 1`
    South,
    /// Toward column `x + 1`
    East,
    /// Toward column `x - 1`
    West,
}

impl Direction {
    /// All directions in draw order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Map a uniform draw in `0..4` to a direction
    ///
    /// Larger values wrap around, so any integer maps to some direction.
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::South,
            2 => Self::East,
            _ => Self::West,
        }
    }

    /// Coordinate delta `(dx, dy)` of one step in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The direction pointing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, growing eastward
    pub x: usize,
    /// Row, growing southward
    pub y: usize,
}

impl Cell {
    /// Create a cell at the given column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Membership of a cell in the spanning tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Not yet part of the tree
    #[default]
    Unvisited,
    /// The tree's single root, with no outgoing direction
    Root,
    /// Part of the tree, attached through the neighbour in this direction
    Connected(Direction),
}

impl CellState {
    /// True for `Root` and `Connected` cells
    pub const fn is_in_tree(self) -> bool {
        !matches!(self, Self::Unvisited)
    }

    /// Direction toward the parent, if the cell has one
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Connected(direction) => Some(direction),
            Self::Unvisited | Self::Root => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unvisited => f.write_str("unvisited"),
            Self::Root => f.write_str("root"),
            Self::Connected(direction) => write!(f, "connected {direction}"),
        }
    }
}

/// Fixed-size grid owning the state of every cell
///
/// Cells are stored row-major in an `(height, width)` array, so the
/// element for cell `(x, y)` lives at index `[y, x]`.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<CellState>,
    /// Grid dimensions (width, height)
    dimensions: (usize, usize),
    root: Option<Cell>,
}

impl Grid {
    /// Create a grid with every cell unvisited
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        Ok(Self {
            cells: Array2::default((height, width)),
            dimensions: (width, height),
            root: None,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.dimensions.0
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.dimensions.1
    }

    /// Grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.dimensions.0 * self.dimensions.1
    }

    /// Always false; a grid holds at least one cell
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check signed coordinates against the grid extent
    pub const fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.dimensions.0 && (y as usize) < self.dimensions.1
    }

    /// Check whether a cell lies on the grid
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x < self.dimensions.0 && cell.y < self.dimensions.1
    }

    /// Adjacent cell in the given direction, if it is on the grid
    pub const fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.offset();
        let x = cell.x as isize + dx;
        let y = cell.y as isize + dy;
        if self.in_bounds(x, y) {
            Some(Cell::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Cell at a row-major index
    pub const fn cell_at(&self, index: usize) -> Option<Cell> {
        if index < self.len() {
            Some(Cell::new(index % self.dimensions.0, index / self.dimensions.0))
        } else {
            None
        }
    }

    /// Row-major index of a cell
    pub const fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.y * self.dimensions.0 + cell.x)
        } else {
            None
        }
    }

    /// Current state of a cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the cell is not on the grid
    pub fn state_of(&self, cell: Cell) -> Result<CellState> {
        self.cells
            .get([cell.y, cell.x])
            .copied()
            .ok_or(MazeError::OutOfBounds {
                cell,
                dimensions: self.dimensions,
            })
    }

    /// Attach an unvisited cell to the tree through `direction`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for cells off the grid and `InvalidTransition`
    /// if the cell is not currently `Unvisited`
    pub fn mark_connected(&mut self, cell: Cell, direction: Direction) -> Result<()> {
        let slot = self.slot_mut(cell)?;
        match *slot {
            CellState::Unvisited => {
                *slot = CellState::Connected(direction);
                Ok(())
            }
            from => Err(MazeError::InvalidTransition { cell, from }),
        }
    }

    /// Make a cell the tree's root
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if a root already exists or the cell is
    /// not `Unvisited`, and `OutOfBounds` for cells off the grid
    pub fn mark_root(&mut self, cell: Cell) -> Result<()> {
        if let Some(existing) = self.root {
            return Err(MazeError::InvalidTransition {
                cell: existing,
                from: CellState::Root,
            });
        }

        let slot = self.slot_mut(cell)?;
        match *slot {
            CellState::Unvisited => {
                *slot = CellState::Root;
                self.root = Some(cell);
                Ok(())
            }
            from => Err(MazeError::InvalidTransition { cell, from }),
        }
    }

    /// The root cell, once one has been chosen
    pub const fn root(&self) -> Option<Cell> {
        self.root
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height()).flat_map(move |y| (0..self.width()).map(move |x| Cell::new(x, y)))
    }

    /// Read-only view of every cell state, indexed `[y, x]`
    pub const fn states(&self) -> &Array2<CellState> {
        &self.cells
    }

    /// Number of cells currently in the tree
    pub fn tree_size(&self) -> usize {
        self.cells.iter().filter(|state| state.is_in_tree()).count()
    }

    /// Whether the wall between `cell` and its neighbour in `direction` is open
    ///
    /// A passage exists iff one of the two cells is `Connected` pointing at
    /// the other. Directions leaving the grid are always walled.
    pub fn has_passage(&self, cell: Cell, direction: Direction) -> bool {
        let Some(neighbor) = self.neighbor(cell, direction) else {
            return false;
        };

        let points_at = |from: Cell, toward: Direction| {
            self.state_of(from).ok().and_then(CellState::direction) == Some(toward)
        };

        points_at(cell, direction) || points_at(neighbor, -direction)
    }

    /// Follow direction pointers from `cell` to the root
    ///
    /// Returns every cell visited, starting with `cell` and ending with the
    /// root.
    ///
    /// # Errors
    ///
    /// Returns `BrokenTree` if the traversal meets an unvisited cell, a
    /// pointer leaving the grid, or a cell it has already visited, and
    /// `OutOfBounds` if `cell` is off the grid
    pub fn path_to_root(&self, cell: Cell) -> Result<Vec<Cell>> {
        let mut visited = bitvec![0; self.len()];
        let mut path = Vec::new();
        let mut current = cell;

        loop {
            let index = self.index_of(current).ok_or(MazeError::OutOfBounds {
                cell: current,
                dimensions: self.dimensions,
            })?;
            if visited.get(index).as_deref() == Some(&true) {
                return Err(MazeError::BrokenTree {
                    cell,
                    reason: "pointers form a cycle",
                });
            }
            visited.set(index, true);
            path.push(current);

            match self.state_of(current)? {
                CellState::Root => return Ok(path),
                CellState::Unvisited => {
                    return Err(MazeError::BrokenTree {
                        cell,
                        reason: "reached an unvisited cell",
                    });
                }
                CellState::Connected(direction) => {
                    current =
                        self.neighbor(current, direction)
                            .ok_or(MazeError::BrokenTree {
                                cell,
                                reason: "pointer leaves the grid",
                            })?;
                }
            }
        }
    }

    /// True when every cell is in the tree and reaches the single root
    pub fn is_spanning_tree(&self) -> bool {
        let roots = self
            .cells
            .iter()
            .filter(|state| **state == CellState::Root)
            .count();

        roots == 1 && self.cells().all(|cell| self.path_to_root(cell).is_ok())
    }

    fn slot_mut(&mut self, cell: Cell) -> Result<&mut CellState> {
        let dimensions = self.dimensions;
        self.cells
            .get_mut([cell.y, cell.x])
            .ok_or(MazeError::OutOfBounds { cell, dimensions })
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

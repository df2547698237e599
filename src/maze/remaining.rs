//! Set of cells not yet absorbed into the spanning tree

use crate::io::error::{MazeError, Result};
use crate::maze::grid::{Cell, Grid};
use crate::maze::random::RandomSource;

/// Unvisited cells with O(1) membership, removal and uniform sampling
///
/// Members live in a dense vector for sampling; a row-major position table
/// maps each cell to its slot so removal can swap the last member into the
/// vacated slot.
#[derive(Debug, Clone)]
pub struct RemainingSet {
    members: Vec<Cell>,
    positions: Vec<Option<usize>>,
    width: usize,
    height: usize,
}

impl RemainingSet {
    /// Create an empty set over a `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            members: Vec::new(),
            positions: vec![None; width * height],
            width,
            height,
        }
    }

    /// Create a set holding every unvisited cell of the grid
    ///
    /// Called once the root has been marked, this yields all cells except
    /// the root.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut set = Self::new(grid.width(), grid.height());
        set.members.reserve(grid.len());

        for (cell, state) in grid.cells().zip(grid.states().iter()) {
            if !state.is_in_tree() {
                set.push(cell);
            }
        }
        set
    }

    /// Add a cell, returning false if it was already present
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the cell lies outside the set's grid
    pub fn insert(&mut self, cell: Cell) -> Result<bool> {
        if self.slot(cell)?.is_some() {
            return Ok(false);
        }
        self.push(cell);
        Ok(true)
    }

    /// Test membership
    pub fn contains(&self, cell: Cell) -> bool {
        matches!(self.slot(cell), Ok(Some(_)))
    }

    /// Pick a member uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `Empty` if the set has no members
    pub fn pick_random<R: RandomSource + ?Sized>(&self, source: &mut R) -> Result<Cell> {
        if self.members.is_empty() {
            return Err(MazeError::Empty);
        }
        let index = source.next_index(self.members.len());
        self.members.get(index).copied().ok_or(MazeError::Empty)
    }

    /// Remove a member
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the cell is not a member
    pub fn remove(&mut self, cell: Cell) -> Result<()> {
        let position = match self.slot(cell) {
            Ok(Some(position)) => position,
            Ok(None) | Err(_) => return Err(MazeError::NotFound { cell }),
        };

        self.members.swap_remove(position);
        self.set_slot(cell, None);
        if let Some(&moved) = self.members.get(position) {
            self.set_slot(moved, Some(position));
        }
        Ok(())
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no cells remain
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over members in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.members.iter().copied()
    }

    fn push(&mut self, cell: Cell) {
        self.set_slot(cell, Some(self.members.len()));
        self.members.push(cell);
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        (cell.x < self.width && cell.y < self.height).then_some(cell.y * self.width + cell.x)
    }

    fn slot(&self, cell: Cell) -> Result<Option<usize>> {
        self.index_of(cell)
            .and_then(|index| self.positions.get(index).copied())
            .ok_or(MazeError::OutOfBounds {
                cell,
                dimensions: (self.width, self.height),
            })
    }

    fn set_slot(&mut self, cell: Cell, position: Option<usize>) {
        if let Some(slot) = self
            .index_of(cell)
            .and_then(|index| self.positions.get_mut(index))
        {
            *slot = position;
        }
    }
}

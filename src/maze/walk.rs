//! Trail of the in-progress loop-erased random walk

use bitvec::prelude::*;

use crate::io::error::{MazeError, Result};
use crate::maze::grid::{Cell, Direction};

/// One move of a walk: the cell it left and the direction it took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Cell the step originates from
    pub cell: Cell,
    /// Direction taken out of `cell`
    pub direction: Direction,
}

impl Step {
    /// Create a step leaving `cell` toward `direction`
    pub const fn new(cell: Cell, direction: Direction) -> Self {
        Self { cell, direction }
    }
}

/// Ordered, self-avoiding trail of a random walk
///
/// Behaves as a stack of steps. Walking back onto the trail truncates it to
/// the revisited cell, so the trail never contains a cell twice. A bitset
/// over the grid mirrors trail membership for constant-time lookups.
#[derive(Debug, Clone)]
pub struct WalkPath {
    steps: Vec<Step>,
    on_trail: BitVec,
    width: usize,
    height: usize,
}

impl WalkPath {
    /// Create an empty trail over a `width` x `height` grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            steps: Vec::new(),
            on_trail: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Record a step leaving `cell` toward `direction`
    ///
    /// If the trail already ends at `cell`, which is where `erase_back_to`
    /// leaves it, that step's direction is replaced instead of adding a
    /// second step from the same cell.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the cell lies outside the trail's grid
    pub fn append(&mut self, cell: Cell, direction: Direction) -> Result<()> {
        let index = self.index_of(cell)?;

        if let Some(last) = self.steps.last_mut()
            && last.cell == cell
        {
            last.direction = direction;
            return Ok(());
        }

        self.steps.push(Step::new(cell, direction));
        self.on_trail.set(index, true);
        Ok(())
    }

    /// True if some recorded step originates at `cell`
    pub fn contains_cell(&self, cell: Cell) -> bool {
        self.index_of(cell)
            .is_ok_and(|index| self.on_trail.get(index).as_deref() == Some(&true))
    }

    /// Erase the loop closed by walking back onto `cell`
    ///
    /// Pops every step recorded after `cell`'s own step, leaving `cell` at
    /// the end of the trail. Returns the number of steps erased.
    ///
    /// # Errors
    ///
    /// Returns `NotInPath` if `cell` is not on the trail
    pub fn erase_back_to(&mut self, cell: Cell) -> Result<usize> {
        if !self.contains_cell(cell) {
            return Err(MazeError::NotInPath { cell });
        }

        let mut erased = 0;
        while let Some(last) = self.steps.last() {
            if last.cell == cell {
                break;
            }
            let last_cell = last.cell;
            self.steps.pop();
            self.unmark(last_cell);
            erased += 1;
        }
        Ok(erased)
    }

    /// Steps in trail order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Cells of the trail in order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.steps.iter().map(|step| step.cell)
    }

    /// Most recent step
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when no steps are recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Reset to an empty trail for the next walk
    pub fn clear(&mut self) {
        while let Some(step) = self.steps.pop() {
            self.unmark(step.cell);
        }
    }

    fn unmark(&mut self, cell: Cell) {
        if let Ok(index) = self.index_of(cell) {
            self.on_trail.set(index, false);
        }
    }

    fn index_of(&self, cell: Cell) -> Result<usize> {
        if cell.x < self.width && cell.y < self.height {
            Ok(cell.y * self.width + cell.x)
        } else {
            Err(MazeError::OutOfBounds {
                cell,
                dimensions: (self.width, self.height),
            })
        }
    }
}

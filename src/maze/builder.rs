//! Wilson's algorithm: grow a uniform spanning tree from loop-erased walks
//!
//! A root cell seeds the tree. Each walk starts from a random unvisited
//! cell and wanders until it touches the tree, erasing any loop it closes
//! along the way. The resulting self-avoiding trail is then grafted onto
//! the tree, and walks repeat until no unvisited cell remains.

use log::{debug, info, trace};

use crate::io::configuration::MAX_DIRECTION_REDRAWS;
use crate::io::error::{MazeError, Result};
use crate::maze::grid::{Cell, Direction, Grid};
use crate::maze::random::{RandomSource, SeededSource};
use crate::maze::remaining::RemainingSet;
use crate::maze::walk::{Step, WalkPath};

/// Lifecycle of a maze build
///
/// `MazeBuilder::new` performs the whole `Initializing` step, validating the
/// grid and placing the root, before it returns. A constructed builder
/// therefore reports `Generating` or `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Root not yet chosen
    Initializing,
    /// Walks are being run and committed
    Generating,
    /// Every cell is part of the tree
    Done,
}

/// Receives progress notifications during generation
///
/// Both hooks see shared references only. Returning an error aborts
/// generation and propagates the error to the caller.
pub trait GenerationObserver {
    /// Called after every move of an in-progress walk
    ///
    /// `current` is the walk's head, which is not yet part of `path`.
    ///
    /// # Errors
    ///
    /// Implementations may fail, e.g. when writing a frame
    fn on_step(&mut self, _grid: &Grid, _path: &WalkPath, _current: Cell) -> Result<()> {
        Ok(())
    }

    /// Called after a walk has been grafted onto the tree
    ///
    /// # Errors
    ///
    /// Implementations may fail, e.g. when writing a frame
    fn on_commit(&mut self, _grid: &Grid, _committed: &[Step]) -> Result<()> {
        Ok(())
    }
}

impl GenerationObserver for () {}

impl<T: GenerationObserver> GenerationObserver for Option<T> {
    fn on_step(&mut self, grid: &Grid, path: &WalkPath, current: Cell) -> Result<()> {
        self.as_mut()
            .map_or(Ok(()), |observer| observer.on_step(grid, path, current))
    }

    fn on_commit(&mut self, grid: &Grid, committed: &[Step]) -> Result<()> {
        self.as_mut()
            .map_or(Ok(()), |observer| observer.on_commit(grid, committed))
    }
}

impl<A: GenerationObserver, B: GenerationObserver> GenerationObserver for (A, B) {
    fn on_step(&mut self, grid: &Grid, path: &WalkPath, current: Cell) -> Result<()> {
        self.0.on_step(grid, path, current)?;
        self.1.on_step(grid, path, current)
    }

    fn on_commit(&mut self, grid: &Grid, committed: &[Step]) -> Result<()> {
        self.0.on_commit(grid, committed)?;
        self.1.on_commit(grid, committed)
    }
}

/// Maze generator running Wilson's algorithm over a rectangular grid
///
/// Owns the grid along with the transient remaining set and walk trail.
/// Generation can run to completion with `generate`, or one walk at a time
/// with `execute_walk`, which is also the safe point for cancellation.
pub struct MazeBuilder<R: RandomSource = SeededSource> {
    grid: Grid,
    remaining: RemainingSet,
    path: WalkPath,
    source: R,
    phase: Phase,
    /// Head of the walk in progress
    current: Option<Cell>,
    walks_committed: usize,
    steps_committed: usize,
    max_redraws: usize,
}

impl<R: RandomSource> MazeBuilder<R> {
    /// Create a builder and choose the root
    ///
    /// The root is drawn uniformly from the whole grid and every other cell
    /// starts in the remaining set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize, mut source: R) -> Result<Self> {
        let mut grid = Grid::new(width, height)?;
        debug!("Initializing {width}x{height} maze");

        let index = source.next_index(grid.len());
        let root = grid.cell_at(index).ok_or(MazeError::OutOfBounds {
            cell: Cell::new(index % width, index / width),
            dimensions: grid.dimensions(),
        })?;
        grid.mark_root(root)?;
        info!("Maze {width}x{height} rooted at {root}");

        let remaining = RemainingSet::from_grid(&grid);
        let path = WalkPath::new(width, height);

        Ok(Self {
            grid,
            remaining,
            path,
            source,
            phase: Phase::Generating,
            current: None,
            walks_committed: 0,
            steps_committed: 0,
            max_redraws: MAX_DIRECTION_REDRAWS,
        })
    }

    /// Override the number of consecutive off-grid draws tolerated per move
    #[must_use]
    pub const fn with_redraw_limit(mut self, max_redraws: usize) -> Self {
        self.max_redraws = max_redraws;
        self
    }

    /// Run a single walk and graft it onto the tree
    ///
    /// Returns `false` once no unvisited cells remain.
    ///
    /// # Errors
    ///
    /// Returns an error if an internal invariant is violated, if the random
    /// source keeps drawing off-grid directions, or if the observer fails
    pub fn execute_walk<O: GenerationObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<bool> {
        if self.phase == Phase::Done {
            return Ok(false);
        }
        if self.remaining.is_empty() {
            self.finish();
            return Ok(false);
        }

        let start = self.remaining.pick_random(&mut self.source)?;
        self.path.clear();
        self.current = Some(start);

        self.random_walk(start, observer)?;
        self.commit(start, observer)?;

        if self.remaining.is_empty() {
            self.finish();
        }
        Ok(true)
    }

    /// Run walks until the maze is complete
    ///
    /// # Errors
    ///
    /// Propagates any error from `execute_walk`
    pub fn generate(&mut self) -> Result<&Grid> {
        self.generate_with(&mut ())
    }

    /// Run walks until the maze is complete, notifying an observer
    ///
    /// # Errors
    ///
    /// Propagates any error from `execute_walk`
    pub fn generate_with<O: GenerationObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<&Grid> {
        while self.execute_walk(observer)? {}
        Ok(&self.grid)
    }

    /// Current lifecycle phase
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// True once every cell is in the tree
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// The maze grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells not yet in the tree
    pub const fn remaining(&self) -> &RemainingSet {
        &self.remaining
    }

    /// Trail of the current or most recently committed walk
    pub const fn walk_path(&self) -> &WalkPath {
        &self.path
    }

    /// Head of the walk in progress, if any
    pub const fn current(&self) -> Option<Cell> {
        self.current
    }

    /// Number of walks grafted onto the tree
    pub const fn walks_committed(&self) -> usize {
        self.walks_committed
    }

    /// Number of cells attached by committed walks
    pub const fn steps_committed(&self) -> usize {
        self.steps_committed
    }

    /// The random source driving generation
    pub const fn source(&self) -> &R {
        &self.source
    }

    /// Consume the builder, keeping only the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    fn random_walk<O: GenerationObserver + ?Sized>(
        &mut self,
        start: Cell,
        observer: &mut O,
    ) -> Result<()> {
        let mut current = start;

        loop {
            let (direction, neighbor) = self.draw_move(current)?;

            if self.grid.state_of(neighbor)?.is_in_tree() {
                self.path.append(current, direction)?;
                self.current = Some(neighbor);
                return observer.on_step(&self.grid, &self.path, neighbor);
            }

            if self.path.contains_cell(neighbor) {
                let erased = self.path.erase_back_to(neighbor)?;
                trace!("Erased {erased} step loop at {neighbor}");
            } else {
                self.path.append(current, direction)?;
            }

            current = neighbor;
            self.current = Some(current);
            observer.on_step(&self.grid, &self.path, current)?;
        }
    }

    /// Draw directions until one stays on the grid
    fn draw_move(&mut self, from: Cell) -> Result<(Direction, Cell)> {
        for _ in 0..self.max_redraws {
            let direction = Direction::from_index(self.source.next_index(Direction::ALL.len()));
            if let Some(neighbor) = self.grid.neighbor(from, direction) {
                return Ok((direction, neighbor));
            }
        }

        Err(MazeError::RedrawLimit {
            cell: from,
            attempts: self.max_redraws,
        })
    }

    fn commit<O: GenerationObserver + ?Sized>(
        &mut self,
        start: Cell,
        observer: &mut O,
    ) -> Result<()> {
        for step in self.path.steps() {
            self.grid.mark_connected(step.cell, step.direction)?;
            self.remaining.remove(step.cell)?;
        }

        self.walks_committed += 1;
        self.steps_committed += self.path.len();
        self.current = None;
        debug!(
            "Walk {} from {start} grafted {} cells, {} remaining",
            self.walks_committed,
            self.path.len(),
            self.remaining.len()
        );

        observer.on_commit(&self.grid, self.path.steps())
    }

    fn finish(&mut self) {
        self.phase = Phase::Done;
        info!(
            "Maze complete after {} walks ({} cells attached)",
            self.walks_committed, self.steps_committed
        );
    }
}

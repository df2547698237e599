//! Text rendering of the maze and terminal animation of its generation

use std::io::Write;
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::io::error::Result;
use crate::maze::builder::GenerationObserver;
use crate::maze::grid::{Cell, Direction, Grid};
use crate::maze::walk::{Step, WalkPath};

/// Snapshot of a walk in progress, drawn over the grid
#[derive(Debug, Clone, Copy)]
pub struct WalkView<'a> {
    /// Trail steps in order
    pub steps: &'a [Step],
    /// Head of the walk
    pub current: Cell,
}

impl<'a> WalkView<'a> {
    /// View the trail and head of a live walk
    pub fn new(path: &'a WalkPath, current: Cell) -> Self {
        Self {
            steps: path.steps(),
            current,
        }
    }

    /// Whether a cell lies on the trail
    pub fn on_trail(&self, cell: Cell) -> bool {
        self.steps.iter().any(|step| step.cell == cell)
    }
}

/// Render the grid as `+-+` ASCII art
///
/// Tree cells are blank and unvisited cells are `#`. With a walk overlay
/// the walk's head is drawn as `O` and its trail as `.`.
pub fn render_ascii(grid: &Grid, walk: Option<&WalkView<'_>>) -> String {
    let width = grid.width();
    let height = grid.height();
    let border = format!("+{}", "-+".repeat(width));

    let mut out = String::with_capacity((2 * width + 2) * (2 * height + 1));
    out.push_str(&border);
    out.push('\n');

    for y in 0..height {
        let mut between = String::from("+");
        out.push('|');

        for x in 0..width {
            let cell = Cell::new(x, y);
            out.push(cell_glyph(grid, cell, walk));

            let east_open = x + 1 < width && grid.has_passage(cell, Direction::East);
            out.push(if east_open { ' ' } else { '|' });

            let south_open = y + 1 < height && grid.has_passage(cell, Direction::South);
            between.push_str(if south_open { " +" } else { "-+" });
        }

        out.push('\n');
        if y + 1 < height {
            out.push_str(&between);
            out.push('\n');
        }
    }

    out.push_str(&border);
    out.push('\n');
    out
}

fn cell_glyph(grid: &Grid, cell: Cell, walk: Option<&WalkView<'_>>) -> char {
    if let Some(view) = walk {
        if view.current == cell {
            return 'O';
        }
        if view.on_trail(cell) {
            return '.';
        }
    }

    match grid.state_of(cell) {
        Ok(state) if state.is_in_tree() => ' ',
        _ => '#',
    }
}

/// Summary line printed under a finished maze
pub fn render_summary(grid: &Grid, walks: usize, seed: Option<u64>) -> String {
    let line = format!("{}x{} maze, {walks} walks", grid.width(), grid.height());
    match seed {
        Some(seed) => format!("{line}, seed {seed}"),
        None => line,
    }
}

/// Redraws the maze in the terminal after every walk move and commit
pub struct TerminalAnimator<W: Write> {
    out: W,
    delay: Duration,
    frames: usize,
}

impl<W: Write> TerminalAnimator<W> {
    /// Animate onto `out`, pausing `delay` after each frame
    pub const fn new(out: W, delay: Duration) -> Self {
        Self {
            out,
            delay,
            frames: 0,
        }
    }

    /// Number of frames drawn so far
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, frame: &str) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.frames += 1;

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}

impl<W: Write> GenerationObserver for TerminalAnimator<W> {
    fn on_step(&mut self, grid: &Grid, path: &WalkPath, current: Cell) -> Result<()> {
        let view = WalkView::new(path, current);
        self.draw(&render_ascii(grid, Some(&view)))
    }

    fn on_commit(&mut self, grid: &Grid, _committed: &[Step]) -> Result<()> {
        self.draw(&render_ascii(grid, None))
    }
}

//! Progress bar tracking cells absorbed into the maze

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::io::error::Result;
use crate::maze::builder::GenerationObserver;
use crate::maze::grid::Grid;
use crate::maze::walk::Step;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports generation progress as the fraction of cells in the tree
pub struct ProgressReporter {
    bar: ProgressBar,
    walks: usize,
}

impl ProgressReporter {
    /// Create a progress bar for a grid, starting from its current tree size
    pub fn new(grid: &Grid) -> Self {
        Self::with_bar(ProgressBar::new(grid.len() as u64), grid)
    }

    /// Create a reporter that draws nowhere, for tests and quiet runs
    pub fn hidden(grid: &Grid) -> Self {
        Self::with_bar(ProgressBar::hidden(), grid)
    }

    fn with_bar(bar: ProgressBar, grid: &Grid) -> Self {
        bar.set_length(grid.len() as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_position(grid.tree_size() as u64);
        Self { bar, walks: 0 }
    }

    /// Cells counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Walks counted so far
    pub const fn walks(&self) -> usize {
        self.walks
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl GenerationObserver for ProgressReporter {
    fn on_commit(&mut self, _grid: &Grid, committed: &[Step]) -> Result<()> {
        self.walks += 1;
        self.bar.inc(committed.len() as u64);
        self.bar.set_message(format!("({} walks)", self.walks));
        Ok(())
    }
}

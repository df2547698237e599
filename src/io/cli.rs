//! Command-line interface for generating, animating and exporting mazes

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::info;

use crate::io::configuration::{
    DEFAULT_FRAME_DELAY_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
};
use crate::io::error::Result;
use crate::io::image::export_maze_as_png;
use crate::io::progress::ProgressReporter;
use crate::io::render::{TerminalAnimator, render_ascii, render_summary};
use crate::io::visualization::VisualizationCapture;
use crate::maze::builder::MazeBuilder;
use crate::maze::random::SeededSource;

#[derive(Parser, Debug)]
#[command(name = "wilsonmaze")]
#[command(
    author,
    version,
    about = "Generate uniform random mazes with Wilson's algorithm"
)]
/// Command-line arguments for the maze generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Maze width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Animate every walk in the terminal
    #[arg(short, long)]
    pub animate: bool,

    /// Pause between animation frames in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub delay: u64,

    /// Write the finished maze to a PNG file
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Write an animation of the generation to a GIF file
    #[arg(long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Include every walk move in the GIF, not just committed walks
    #[arg(long, requires = "gif")]
    pub gif_walks: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not print the finished maze
    #[arg(long)]
    pub no_print: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.animate
    }

    /// Check if the finished maze should be printed
    pub const fn should_print_maze(&self) -> bool {
        !self.no_print
    }

    /// Pause between animation frames
    pub const fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }
}

/// Runs one generation according to the CLI arguments
pub struct MazeRunner {
    cli: Cli,
}

impl MazeRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the maze, then print and export it as requested
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid, generation fails, or
    /// terminal output or file export fails
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        self.run_with_output(stdout.lock())
    }

    /// Generate the maze, writing terminal output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid, generation fails, or
    /// writing or file export fails
    pub fn run_with_output<W: Write>(&self, mut out: W) -> Result<()> {
        let source = self
            .cli
            .seed
            .map_or_else(SeededSource::from_entropy, SeededSource::new);
        let seed = source.seed();
        info!("Using seed {seed}");

        let mut builder = MazeBuilder::new(self.cli.width, self.cli.height, source)?;

        let animator = if self.cli.animate {
            Some(TerminalAnimator::new(&mut out, self.cli.frame_delay()))
        } else {
            None
        };
        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressReporter::new(builder.grid()));
        let capture = self
            .cli
            .gif
            .as_ref()
            .map(|_| VisualizationCapture::new(builder.grid(), self.cli.gif_walks));

        let (progress, capture) = {
            let mut observer = (animator, (progress, capture));
            builder.generate_with(&mut observer)?;
            observer.1
        };

        if let Some(progress) = progress {
            progress.finish();
        }

        let grid = builder.grid();
        if self.cli.should_print_maze() {
            if !self.cli.animate {
                out.write_all(render_ascii(grid, None).as_bytes())?;
            }
            writeln!(
                out,
                "{}",
                render_summary(grid, builder.walks_committed(), Some(seed))
            )?;
            out.flush()?;
        }

        if let Some(path) = &self.cli.png {
            export_maze_as_png(grid, path)?;
            info!("Wrote {}", path.display());
        }

        if let (Some(path), Some(capture)) = (&self.cli.gif, capture) {
            capture.export_gif(path, GIF_FRAME_DELAY_MS)?;
            info!("Wrote {} ({} events)", path.display(), capture.event_count());
        }

        Ok(())
    }
}

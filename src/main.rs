//! CLI entry point for the Wilson's algorithm maze generator

use clap::Parser;
use wilsonmaze::io::cli::{Cli, MazeRunner};

fn main() -> wilsonmaze::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let runner = MazeRunner::new(cli);
    runner.run()
}

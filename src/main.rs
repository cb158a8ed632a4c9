//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use grid_maze::{
    playback::{render_frame, Playback},
    solve, Algorithm, Grid, NoFrames, Solution, DEFAULT_MAX_SIZE,
};

/// Find a way from `S` to `E` through a maze of `#` walls
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Search algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Bfs)]
    algorithm: Algorithm,

    /// Solve with both algorithms and compare path lengths
    #[arg(long, conflicts_with = "playback")]
    compare: bool,

    /// Animate the search on the terminal
    #[arg(short, long)]
    playback: bool,

    /// Playback frame length in milliseconds, 0 for no pause
    #[arg(short, long, default_value_t = 100)]
    frame_length: u64,

    /// Print without ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Largest accepted number of rows or columns
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("Could not read maze from stdin")?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Could not read maze from {}", args.file.display()))?
    };
    let grid = Grid::parse_with_limit(&text, args.max_size).context("Invalid maze input")?;

    if args.compare {
        let solutions = [Algorithm::Dfs, Algorithm::Bfs]
            .into_iter()
            .map(|algorithm| solve(&grid, algorithm, &mut NoFrames))
            .collect::<Result<Vec<_>, _>>()?;
        for solution in &solutions {
            solution.print_report();
        }
        return Ok(());
    }

    let solution = if args.playback {
        let mut playback = Playback::new(args.frame_length, !args.no_color);
        solve(&grid, args.algorithm, &mut playback)?
    } else {
        solve(&grid, args.algorithm, &mut NoFrames)?
    };
    print_result(&grid, &solution, !args.no_color);
    Ok(())
}

fn print_result(grid: &Grid, solution: &Solution, color: bool) {
    solution.print_report();
    if solution.is_solved() {
        println!("{}", render_frame(grid, &solution.overlay, color));
    }
}

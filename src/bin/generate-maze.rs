//! CLI for maze generation

use clap::Parser;
use grid_maze::{
    maze_generator::MazeGenerator, playback::render_frame, solve, Algorithm, NoFrames,
    DEFAULT_MAX_SIZE,
};

/// Random maze generator, output is readable by `solve-maze`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated maze height
    #[arg(long, default_value_t = 21)]
    rows: usize,

    /// Generated maze width
    #[arg(long, default_value_t = 21)]
    cols: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Largest accepted number of rows or columns
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,

    /// Solve the generated maze and print the marked path instead
    #[arg(long, value_enum)]
    solve: Option<Algorithm>,
}

/// Generate maze, print it
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed).with_max_size(args.max_size);
    let grid = gen.generate_maze(args.rows, args.cols)?;

    match args.solve {
        Some(algorithm) => {
            let solution = solve(&grid, algorithm, &mut NoFrames)?;
            solution.print_report();
            println!("{}", render_frame(&grid, &solution.overlay, false));
        }
        None => println!("{}", grid),
    }
    Ok(())
}

mod args;
mod report;

use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use gridwalk_core::{Grid, GridError, Point, parse_points};
use gridwalk_paths::{HeightMap, bfs_map, first_blocking, parse_puzzle};
use log::debug;

use crate::args::{Args, Command, MazeArgs, RamArgs};

fn read_input(path: &Path) -> Result<String, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    debug!("read {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

fn maze(args: &MazeArgs) -> Result<String, Box<dyn Error>> {
    let grid = Grid::load(&read_input(&args.input)?)?;
    debug!("maze is {}x{}", grid.width(), grid.height());
    let solution = gridwalk_paths::solve_with(&grid, args.facing.into(), args.cost_model())?;
    Ok(report::maze(&grid, &solution, args.show))
}

fn ram(args: &RamArgs) -> Result<String, Box<dyn Error>> {
    let drops = parse_points(&read_input(&args.input)?)?;
    Ok(ram_report(&drops, args.size, args.take)?)
}

/// Walk a `size`-square memory grid from its top-left to its bottom-right
/// corner after the first `take` drops, then find the drop that cuts it off.
fn ram_report(drops: &[Point], size: i32, take: usize) -> Result<String, GridError> {
    let open = Grid::open(size, size)?;
    let exit = Point::new(size - 1, size - 1);

    let taken = take.min(drops.len());
    let fallen = open.with_walls(&drops[..taken]);
    let steps = if fallen.is_passable(Point::ZERO) {
        bfs_map(&fallen, fallen.bounds(), &[Point::ZERO], i32::MAX).steps_to(exit)
    } else {
        None
    };
    let blocking = first_blocking(&open, Point::ZERO, exit, drops);
    Ok(report::ram(taken, steps, blocking))
}

fn trails(input: &Path) -> Result<String, Box<dyn Error>> {
    let map = HeightMap::load(&read_input(input)?)?;
    Ok(report::trails(map.total_score(), map.total_rating()))
}

fn warehouse(input: &Path, wide: bool) -> Result<String, Box<dyn Error>> {
    let (house, moves) = parse_puzzle(&read_input(input)?)?;
    let mut house = if wide { house.widen() } else { house };
    let moved = house.run(&moves);
    Ok(report::warehouse(&house, moved))
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let out = match &args.command {
        Command::Maze(maze_args) => maze(maze_args)?,
        Command::Ram(ram_args) => ram(ram_args)?,
        Command::Trails { input } => trails(input)?,
        Command::Warehouse { input, wide } => warehouse(input, *wide)?,
    };
    print!("{out}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

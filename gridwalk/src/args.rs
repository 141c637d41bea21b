//! Command-line options.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use gridwalk_core::Direction;
use gridwalk_paths::CostModel;

/// Walk text grids: score reindeer mazes, race falling bytes, count
/// climbing trails and push warehouse boxes.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug messages
    #[arg(short, long, global = true, default_value_t = false)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cheapest route from `S` to `E`, and how many cells lie on any cheapest route
    Maze(MazeArgs),
    /// Shortest walk across a memory grid, and the first byte that cuts it off
    Ram(RamArgs),
    /// Trailhead scores and ratings of a height map
    Trails {
        /// Height map file, one row of digits (or `.`) per line
        input: PathBuf,
    },
    /// Run a warehouse robot through its moves and sum the box coordinates
    Warehouse {
        /// Map file, a blank line, then the moves
        input: PathBuf,

        /// Double the map's width first, turning boxes into `[]`
        #[arg(short, long, default_value_t = false)]
        wide: bool,
    },
}

#[derive(ClapArgs, Debug)]
pub struct MazeArgs {
    /// Maze file, one row of `#`, `.`, `S` and `E` per line
    pub input: PathBuf,

    /// Facing at the start cell
    #[arg(value_enum, short, long, default_value_t = Facing::Right)]
    pub facing: Facing,

    /// Price of one forward step
    #[arg(long, default_value_t = 1)]
    pub step_cost: i32,

    /// Price of one 90° turn
    #[arg(long, default_value_t = 1000)]
    pub turn_cost: i32,

    /// Print the maze with best-route cells drawn as `O`
    #[arg(short, long, default_value_t = false)]
    pub show: bool,
}

impl MazeArgs {
    pub fn cost_model(&self) -> CostModel {
        CostModel::new(self.step_cost, self.turn_cost)
    }
}

#[derive(ClapArgs, Debug)]
pub struct RamArgs {
    /// Byte positions, one `x,y` per line, in falling order
    pub input: PathBuf,

    /// Side length of the square memory grid
    #[arg(long, default_value_t = 71, value_parser = clap::value_parser!(i32).range(1..))]
    pub size: i32,

    /// Number of bytes fallen before measuring the walk
    #[arg(short, long, default_value_t = 1024)]
    pub take: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl From<Facing> for Direction {
    fn from(f: Facing) -> Self {
        match f {
            Facing::Up => Direction::Up,
            Facing::Down => Direction::Down,
            Facing::Left => Direction::Left,
            Facing::Right => Direction::Right,
        }
    }
}

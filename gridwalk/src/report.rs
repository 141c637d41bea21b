use std::fmt::Write;

use gridwalk_core::{Grid, Point};
use gridwalk_paths::{Solution, Warehouse};

/// Text printed for a solved maze.
pub fn maze(grid: &Grid, solution: &Solution, show: bool) -> String {
    let mut out = String::new();
    if show {
        let _ = writeln!(out, "{}", solution.mask.render(grid));
    }
    let _ = writeln!(out, "Min score: {}", solution.min_cost);
    let _ = writeln!(out, "Best path tiles: {}", solution.tiles());
    out
}

/// Text printed for a falling-bytes run: the walk after `taken` bytes and
/// the first byte that cuts the exit off.
pub fn ram(taken: usize, steps: Option<i32>, blocking: Option<(usize, Point)>) -> String {
    let mut out = String::new();
    match steps {
        Some(n) => {
            let _ = writeln!(out, "Steps after {taken} bytes: {n}");
        }
        None => {
            let _ = writeln!(out, "Steps after {taken} bytes: unreachable");
        }
    }
    match blocking {
        Some((i, p)) => {
            let _ = writeln!(out, "First blocking byte: {p} (#{})", i + 1);
        }
        None => {
            let _ = writeln!(out, "First blocking byte: none");
        }
    }
    out
}

pub fn trails(score: usize, rating: u64) -> String {
    format!("Trailhead score: {score}\nTrailhead rating: {rating}\n")
}

pub fn warehouse(house: &Warehouse, moved: usize) -> String {
    format!("{house}\nMoves made: {moved}\nGPS sum: {}\n", house.gps_sum())
}

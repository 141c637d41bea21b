use gridwalk_core::{Direction, Grid};
use log::debug;

use crate::cost::CostModel;
use crate::costmap::CostMap;
use crate::error::PathError;
use crate::mask::PathMask;

/// Answer for a maze with `S` and `E` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Cheapest score from `S` to `E`.
    pub min_cost: i32,
    /// Cells on any cheapest route.
    pub mask: PathMask,
}

impl Solution {
    /// Number of cells on any cheapest route.
    #[inline]
    pub fn tiles(&self) -> usize {
        self.mask.len()
    }
}

/// Solve `grid` starting on its `S` facing `facing`, with default prices.
pub fn solve(grid: &Grid, facing: Direction) -> Result<Solution, PathError> {
    solve_with(grid, facing, CostModel::default())
}

/// Solve `grid` starting on its `S` facing `facing`.
pub fn solve_with(grid: &Grid, facing: Direction, model: CostModel) -> Result<Solution, PathError> {
    let start = grid.require_start()?;
    let end = grid.require_end()?;
    let costs = CostMap::compute(grid, start, facing, model)?;
    let min_cost = costs.min_cost(end)?;
    let mask = PathMask::build(&costs, end)?;
    debug!(
        "solved {}x{} maze: score {min_cost}, {} tiles",
        grid.width(),
        grid.height(),
        mask.len()
    );
    Ok(Solution { min_cost, mask })
}

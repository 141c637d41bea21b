//! Cells lying on at least one cheapest route.

use gridwalk_core::{Direction, Grid, Point, Range};
use log::debug;

use crate::cost::UNREACHABLE;
use crate::costmap::CostMap;
use crate::error::PathError;
use crate::state::State;

/// The set of cells visited by some minimum-cost route to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMask {
    range: Range,
    cells: Vec<bool>,
    count: usize,
}

impl PathMask {
    /// Walk backward from every cheapest facing at `end` to the start state.
    ///
    /// A predecessor is kept when its own cost plus the price of the move
    /// into the current state equals the current state's cost. Branches are
    /// followed with an explicit stack; each state is pushed at most once.
    pub fn build(costs: &CostMap, end: Point) -> Result<Self, PathError> {
        let best = costs.min_cost(end)?;
        let index = costs.index();
        let range = index.range();
        let model = costs.model();

        let mut visited = vec![false; index.len()];
        let mut stack = Vec::new();
        for dir in Direction::ALL {
            let s = State::new(end, dir);
            if costs.state_cost(s) != best {
                continue;
            }
            if let Some(i) = index.idx(s) {
                visited[i] = true;
                stack.push(i);
            }
        }

        let mut cells = vec![false; range.len()];
        let mut count = 0;
        let mut expanded = 0;

        while let Some(ci) = stack.pop() {
            expanded += 1;
            let current = index.state(ci);
            let cost = costs.cost_at(ci);
            if let Some(cell) = range.index(current.pos) {
                if !cells[cell] {
                    cells[cell] = true;
                    count += 1;
                }
            }

            let predecessors = [
                (current.backward(), model.step),
                (current.turn_left(), model.turn),
                (current.turn_right(), model.turn),
            ];
            for (prev, price) in predecessors {
                let Some(pi) = index.idx(prev) else {
                    continue;
                };
                if visited[pi] {
                    continue;
                }
                let prev_cost = costs.cost_at(pi);
                if prev_cost == UNREACHABLE || prev_cost.checked_add(price) != Some(cost) {
                    continue;
                }
                visited[pi] = true;
                stack.push(pi);
            }
        }

        debug!("path mask to ({end}): {count} cells from {expanded} states at cost {best}");
        Ok(Self {
            range,
            cells,
            count,
        })
    }

    /// Whether `p` lies on some cheapest route.
    pub fn contains(&self, p: Point) -> bool {
        self.range.index(p).is_some_and(|i| self.cells[i])
    }

    /// Number of cells on cheapest routes.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Marked cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.range
            .iter()
            .zip(self.cells.iter())
            .filter(|&(_, &on)| on)
            .map(|(p, _)| p)
    }

    /// Draw `grid` with every marked cell shown as `O`.
    pub fn render(&self, grid: &Grid) -> String {
        grid.render_with('O', |p| self.contains(p))
    }
}

//! Direction-aware Dijkstra over (point, facing) states.

use std::collections::BinaryHeap;

use gridwalk_core::{Direction, Grid, GridError, Point, Range};
use log::debug;

use crate::cost::{CostModel, UNREACHABLE};
use crate::error::PathError;
use crate::state::{State, StateIndex};
use crate::traits::Passable;

/// Reference into the state array, ordered by cost for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    cost: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest state first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimal cost of every (point, facing) state from one start state.
///
/// Costs are kept per facing: the cheapest way to stand on a cell may face
/// the wrong way for what comes next, and path reconstruction needs every
/// facing's cost to find all best routes. [`min_at`](Self::min_at) projects
/// to a single value per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMap {
    index: StateIndex,
    costs: Vec<i32>,
    start: State,
    model: CostModel,
    settled: usize,
}

/// Compute costs over `grid` with the default [`CostModel`].
pub fn compute_costs(grid: &Grid, start: Point, dir: Direction) -> Result<CostMap, PathError> {
    CostMap::compute(grid, start, dir, CostModel::default())
}

impl CostMap {
    /// Compute costs over the whole of `grid`.
    pub fn compute(
        grid: &Grid,
        start: Point,
        dir: Direction,
        model: CostModel,
    ) -> Result<Self, PathError> {
        Self::compute_in(grid, grid.bounds(), start, dir, model)
    }

    /// Compute costs for every state inside `range`.
    ///
    /// From each settled state the walker may step forward onto a passable
    /// cell for `model.step`, or turn left or right in place for
    /// `model.turn`. The search runs until the queue is exhausted; states
    /// never reached keep [`UNREACHABLE`].
    pub fn compute_in<P: Passable>(
        pather: &P,
        range: Range,
        start: Point,
        dir: Direction,
        model: CostModel,
    ) -> Result<Self, PathError> {
        let index = StateIndex::new(range);
        let model = model.validate_for(index.len())?;
        let start = State::new(start, dir);
        let si = index
            .idx(start)
            .ok_or(GridError::OutOfBounds(start.pos))?;

        let mut costs = vec![UNREACHABLE; index.len()];
        let mut closed = vec![false; index.len()];
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut settled = 0;

        costs[si] = 0;
        open.push(NodeRef { idx: si, cost: 0 });

        while let Some(NodeRef { idx: ci, cost }) = open.pop() {
            // Skip stale entries.
            if closed[ci] || cost > costs[ci] {
                continue;
            }
            closed[ci] = true;
            settled += 1;

            let current = index.state(ci);
            let moves = [
                (current.forward(), model.step),
                (current.turn_left(), model.turn),
                (current.turn_right(), model.turn),
            ];
            for (next, price) in moves {
                if next.pos != current.pos && !pather.passable(next.pos) {
                    continue;
                }
                let Some(ni) = index.idx(next) else {
                    continue;
                };
                if closed[ni] {
                    continue;
                }
                // Bounded by `validate_for`, so never reaches UNREACHABLE.
                let tentative = cost + price;
                if tentative >= costs[ni] {
                    continue;
                }
                costs[ni] = tentative;
                open.push(NodeRef {
                    idx: ni,
                    cost: tentative,
                });
            }
        }

        debug!(
            "cost map from ({}) facing {}: {settled} of {} states settled",
            start.pos,
            start.dir,
            index.len()
        );
        Ok(Self {
            index,
            costs,
            start,
            model,
            settled,
        })
    }

    /// The state the search started from.
    #[inline]
    pub fn start(&self) -> State {
        self.start
    }

    /// The prices the map was computed with.
    #[inline]
    pub fn model(&self) -> CostModel {
        self.model
    }

    /// The rectangle the map covers.
    #[inline]
    pub fn range(&self) -> Range {
        self.index.range()
    }

    /// Number of states the search reached.
    #[inline]
    pub fn settled(&self) -> usize {
        self.settled
    }

    /// Cost of standing on `p` facing `dir`, or [`UNREACHABLE`].
    pub fn at(&self, p: Point, dir: Direction) -> i32 {
        self.state_cost(State::new(p, dir))
    }

    /// Cheapest cost of standing on `p` in any facing, or [`UNREACHABLE`].
    pub fn min_at(&self, p: Point) -> i32 {
        Direction::ALL
            .iter()
            .map(|&d| self.at(p, d))
            .min()
            .unwrap_or(UNREACHABLE)
    }

    /// Cheapest cost of reaching `end`.
    pub fn min_cost(&self, end: Point) -> Result<i32, PathError> {
        if !self.range().contains(end) {
            return Err(GridError::OutOfBounds(end).into());
        }
        match self.min_at(end) {
            UNREACHABLE => Err(PathError::UnreachableTarget {
                start: self.start.pos,
                end,
            }),
            cost => Ok(cost),
        }
    }

    /// Every reached state with its cost, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (State, i32)> + '_ {
        self.costs
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != UNREACHABLE)
            .map(|(i, &c)| (self.index.state(i), c))
    }

    #[inline]
    pub(crate) fn state_cost(&self, s: State) -> i32 {
        match self.index.idx(s) {
            Some(i) => self.costs[i],
            None => UNREACHABLE,
        }
    }

    #[inline]
    pub(crate) fn index(&self) -> StateIndex {
        self.index
    }

    #[inline]
    pub(crate) fn cost_at(&self, idx: usize) -> i32 {
        self.costs[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use crate::fixtures::{MAZE_LARGE, MAZE_SMALL};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn best(text: &str, dir: Direction) -> Result<i32, PathError> {
        let g = Grid::load(text).unwrap();
        let costs = compute_costs(&g, g.start().unwrap(), dir)?;
        costs.min_cost(g.end().unwrap())
    }

    #[test]
    fn start_state_costs_zero() {
        let g = Grid::load("S.\n.E").unwrap();
        let costs = compute_costs(&g, Point::new(0, 0), Direction::Right).unwrap();
        assert_eq!(costs.at(Point::new(0, 0), Direction::Right), 0);
        assert_eq!(costs.at(Point::new(0, 0), Direction::Up), 1000);
        assert_eq!(costs.at(Point::new(0, 0), Direction::Down), 1000);
        assert_eq!(costs.at(Point::new(0, 0), Direction::Left), 2000);
        assert_eq!(costs.min_at(Point::new(0, 0)), 0);
        assert_eq!(costs.start(), State::new(Point::new(0, 0), Direction::Right));
    }

    #[test]
    fn open_three_by_three_needs_one_turn() {
        assert_eq!(best("S..\n...\n..E", Direction::Right), Ok(1004));
    }

    #[test]
    fn facing_away_costs_two_turns() {
        assert_eq!(best("S..E", Direction::Left), Ok(2003));
    }

    #[test]
    fn straight_corridor_costs_manhattan_distance() {
        for len in 2..12 {
            let row = format!("S{}E", ".".repeat(len - 2));
            let g = Grid::load(&row).unwrap();
            let (s, e) = (g.start().unwrap(), g.end().unwrap());
            let costs = compute_costs(&g, s, Direction::Right).unwrap();
            assert_eq!(costs.min_cost(e), Ok(manhattan(s, e)));

            let column = row.chars().map(String::from).collect::<Vec<_>>().join("\n");
            let g = Grid::load(&column).unwrap();
            let (s, e) = (g.start().unwrap(), g.end().unwrap());
            let costs = compute_costs(&g, s, Direction::Down).unwrap();
            assert_eq!(costs.min_cost(e), Ok(manhattan(s, e)));
        }
    }

    #[test]
    fn walled_off_end_is_unreachable() {
        let err = best("S.#\n.##\n#.E", Direction::Right).unwrap_err();
        assert_eq!(
            err,
            PathError::UnreachableTarget {
                start: Point::new(0, 0),
                end: Point::new(2, 2)
            }
        );
        let g = Grid::load("S.#\n.##\n#.E").unwrap();
        let costs = compute_costs(&g, Point::new(0, 0), Direction::Right).unwrap();
        assert_eq!(costs.min_at(Point::new(1, 2)), UNREACHABLE);
        assert_eq!(costs.min_at(Point::new(2, 0)), UNREACHABLE);
    }

    #[test]
    fn published_mazes() {
        assert_eq!(best(MAZE_SMALL, Direction::Right), Ok(7036));
        assert_eq!(best(MAZE_LARGE, Direction::Right), Ok(11048));
    }

    #[test]
    fn recomputing_is_idempotent() {
        let g = Grid::load(MAZE_SMALL).unwrap();
        let a = compute_costs(&g, g.start().unwrap(), Direction::Right).unwrap();
        let b = compute_costs(&g, g.start().unwrap(), Direction::Right).unwrap();
        assert_eq!(a, b);
        assert!(a.settled() > 0);
        assert_eq!(a.iter().count(), a.settled());
    }

    #[test]
    fn custom_prices() {
        let g = Grid::load("S..\n...\n..E").unwrap();
        let costs = CostMap::compute(&g, Point::new(0, 0), Direction::Right, CostModel::new(2, 3))
            .unwrap();
        assert_eq!(costs.min_cost(Point::new(2, 2)), Ok(11));
        assert_eq!(costs.model(), CostModel::new(2, 3));
    }

    #[test]
    fn bad_start_and_model_rejected() {
        let g = Grid::load("S.E").unwrap();
        assert_eq!(
            compute_costs(&g, Point::new(3, 0), Direction::Right),
            Err(PathError::Grid(GridError::OutOfBounds(Point::new(3, 0))))
        );
        assert!(matches!(
            CostMap::compute(&g, Point::ZERO, Direction::Right, CostModel::new(1, 0)),
            Err(PathError::InvalidCostModel { .. })
        ));
        let costs = compute_costs(&g, Point::ZERO, Direction::Right).unwrap();
        assert!(matches!(
            costs.min_cost(Point::new(0, 4)),
            Err(PathError::Grid(GridError::OutOfBounds(_)))
        ));
    }

    #[test]
    fn huge_prices_never_collide_with_unreachable() {
        let g = Grid::load("S.E").unwrap();
        assert_eq!(
            CostMap::compute(&g, Point::ZERO, Direction::Left, CostModel::new(1, i32::MAX)),
            Err(PathError::CostOverflow {
                step: 1,
                turn: i32::MAX,
                states: 12
            })
        );

        // Largest turn price the 12-state map accepts: the end must still
        // come out finite and distinct from UNREACHABLE.
        let turn = (UNREACHABLE - 1) / 12;
        let costs =
            CostMap::compute(&g, Point::ZERO, Direction::Left, CostModel::new(1, turn)).unwrap();
        assert_eq!(costs.min_cost(Point::new(2, 0)), Ok(2 * turn + 2));
        assert_eq!(costs.iter().count(), 12);
    }

    #[test]
    fn adding_walls_never_lowers_the_cost() {
        let mut rng = StdRng::seed_from_u64(16);
        for _ in 0..20 {
            let mut g = Grid::open(10, 10).unwrap();
            let (start, end) = (Point::new(0, 9), Point::new(9, 0));
            let mut last = 0;
            for _ in 0..40 {
                let costs = compute_costs(&g, start, Direction::Right).unwrap();
                let cost = costs.min_at(end);
                assert!(cost >= last, "cost dropped from {last} to {cost}");
                last = cost;

                let p = Point::new(rng.random_range(0..10), rng.random_range(0..10));
                if p != start && p != end {
                    g = g.with_walls(&[p]);
                }
            }
        }
    }
}

//! Direction-aware pathfinding on text grids.
//!
//! The central search walks the state space of (cell, facing) pairs, where a
//! forward step and a 90° turn have separate prices:
//!
//! - **Directional Dijkstra** cost maps ([`CostMap::compute`], [`compute_costs`])
//! - **Best-route reconstruction** of every cell on a cheapest route ([`PathMask::build`])
//! - **One-call solving** of `S`/`E` mazes ([`solve`], [`solve_with`])
//!
//! Plain 4-way searches are also provided:
//!
//! - **BFS** unweighted distance maps ([`bfs_map`])
//! - **Reachability** by iterative depth-first search ([`reachable`])
//! - **Blocking search** for the first obstacle that disconnects two cells ([`first_blocking`])
//!
//! Two grid puzzles reuse the same building blocks:
//!
//! - **Height maps** whose trails climb one level per step ([`HeightMap`])
//! - **Warehouses** where a robot pushes narrow or wide boxes ([`Warehouse`])
//!
//! # Traits
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Passable`] | directional Dijkstra |
//! | [`Pather`] | BFS, reachability |
//!
//! Both are implemented for [`gridwalk_core::Grid`]; [`HeightMap`] implements
//! [`Pather`] with uphill moves only.

mod bfs;
mod blocking;
mod cost;
mod costmap;
mod distance;
mod error;
mod heightmap;
mod mask;
mod solve;
mod state;
mod traits;
mod warehouse;

#[cfg(test)]
mod fixtures;

pub use bfs::{StepMap, bfs_map, reachable};
pub use blocking::first_blocking;
pub use cost::{CostModel, UNREACHABLE};
pub use costmap::{CostMap, compute_costs};
pub use distance::manhattan;
pub use error::PathError;
pub use heightmap::{HeightMap, TRAIL_END, TRAIL_START};
pub use mask::PathMask;
pub use solve::{Solution, solve, solve_with};
pub use state::State;
pub use traits::{Passable, Pather};
pub use warehouse::{Tile, Warehouse, parse_moves, parse_puzzle};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use gridwalk_core::{Direction, Point};

    #[test]
    fn cost_model_round_trip() {
        let model = CostModel::new(2, 500);
        let json = serde_json::to_string(&model).unwrap();
        let back: CostModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, back);
    }

    #[test]
    fn state_round_trip() {
        let s = State::new(Point::new(3, 7), Direction::Left);
        let json = serde_json::to_string(&s).unwrap();
        let back: State = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}

//! Unweighted step distances and plain reachability.

use std::collections::VecDeque;

use gridwalk_core::{Point, Range};

use crate::cost::UNREACHABLE;
use crate::traits::Pather;

/// Breadth-first step counts from a set of sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepMap {
    range: Range,
    dist: Vec<i32>,
    reached: usize,
}

impl StepMap {
    /// Step count to `p`, or [`UNREACHABLE`].
    pub fn at(&self, p: Point) -> i32 {
        match self.range.index(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Step count to `p` if it was reached.
    pub fn steps_to(&self, p: Point) -> Option<i32> {
        Some(self.at(p)).filter(|&d| d != UNREACHABLE)
    }

    /// Number of cells reached, sources included.
    #[inline]
    pub fn reached(&self) -> usize {
        self.reached
    }
}

/// Compute a multi-source breadth-first search distance map.
///
/// Each step has cost 1. Expansion stops when the distance exceeds
/// `max_dist`. Sources outside `range` are ignored.
pub fn bfs_map<P: Pather>(pather: &P, range: Range, sources: &[Point], max_dist: i32) -> StepMap {
    let mut dist = vec![UNREACHABLE; range.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut reached = 0;

    for &src in sources {
        let Some(si) = range.index(src) else {
            continue;
        };
        if dist[si] != UNREACHABLE {
            continue;
        }
        dist[si] = 0;
        reached += 1;
        queue.push_back(si);
    }

    let mut nbuf = Vec::with_capacity(4);
    while let Some(ci) = queue.pop_front() {
        let nd = dist[ci] + 1;
        if nd > max_dist {
            continue;
        }
        nbuf.clear();
        pather.neighbors(range.point(ci), &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = range.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            reached += 1;
            queue.push_back(ni);
        }
    }

    StepMap {
        range,
        dist,
        reached,
    }
}

/// Whether `to` can be reached from `from` through `pather`'s neighbours.
///
/// Iterative depth-first search that stops as soon as `to` is found.
pub fn reachable<P: Pather>(pather: &P, range: Range, from: Point, to: Point) -> bool {
    let (Some(si), Some(goal)) = (range.index(from), range.index(to)) else {
        return false;
    };
    if si == goal {
        return true;
    }

    let mut visited = vec![false; range.len()];
    let mut stack = vec![si];
    let mut nbuf = Vec::with_capacity(4);
    visited[si] = true;

    while let Some(ci) = stack.pop() {
        nbuf.clear();
        pather.neighbors(range.point(ci), &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = range.index(np) else {
                continue;
            };
            if ni == goal {
                return true;
            }
            if !visited[ni] {
                visited[ni] = true;
                stack.push(ni);
            }
        }
    }
    false
}

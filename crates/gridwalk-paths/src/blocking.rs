use gridwalk_core::{Grid, Point};
use log::trace;

use crate::bfs::reachable;

/// Find the first obstacle in `drops` that cuts `from` off from `to`.
///
/// Obstacles land in order; after the first `n` of them are walls, `to` is
/// either still reachable or not, and more walls never reopen a route. The
/// answer is found by binary search over `n`, each check running on its own
/// grid snapshot. Returns the index into `drops` and the obstacle, or `None`
/// if the two points stay connected after every drop or were never
/// connected to begin with.
pub fn first_blocking(grid: &Grid, from: Point, to: Point, drops: &[Point]) -> Option<(usize, Point)> {
    let cut = |n: usize| {
        let snapshot = grid.with_walls(&drops[..n]);
        let open = snapshot.is_passable(from)
            && snapshot.is_passable(to)
            && reachable(&snapshot, snapshot.bounds(), from, to);
        trace!("after {n} drops ({from}) -> ({to}) is {}", if open { "open" } else { "cut" });
        !open
    };

    if !cut(drops.len()) || cut(0) {
        return None;
    }

    // cut(lo) is false and cut(hi) is true.
    let (mut lo, mut hi) = (0, drops.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if cut(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some((hi - 1, drops[hi - 1]))
}

use gridwalk_core::{Grid, Point};

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Passability test used by the direction-aware search, which generates its
/// own moves from the current facing.
pub trait Passable {
    /// Whether a walker may stand on `p`.
    fn passable(&self, p: Point) -> bool;
}

impl Passable for Grid {
    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_passable(p)
    }
}

/// Cardinal moves onto non-wall cells.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }
}

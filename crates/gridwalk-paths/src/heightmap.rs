//! Height maps: trails that climb one level per step.

use gridwalk_core::{GridError, Point, Range, parse_rows};
use log::debug;

use crate::bfs::bfs_map;
use crate::traits::Pather;

/// Lowest height, where trails start.
pub const TRAIL_START: u8 = 0;
/// Highest height, where trails end.
pub const TRAIL_END: u8 = 9;

/// A rectangle of single-digit heights.
///
/// A `.` marks a cell without a height; no trail enters or leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    range: Range,
    heights: Vec<Option<u8>>,
}

impl HeightMap {
    /// Parse digit rows, one row per line.
    pub fn load(text: &str) -> Result<Self, GridError> {
        let (heights, range) = parse_rows(text, |ch, pos| match ch {
            '.' => Ok(None),
            '0'..='9' => Ok(Some(ch as u8 - b'0')),
            _ => Err(GridError::InvalidSymbol { ch, pos }),
        })?;
        Ok(Self { range, heights })
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.range
    }

    /// Height at `p`, if `p` is inside and has one.
    pub fn height(&self, p: Point) -> Option<u8> {
        self.range.index(p).and_then(|i| self.heights[i])
    }

    /// Every cell of height [`TRAIL_START`], in row-major order.
    pub fn trailheads(&self) -> Vec<Point> {
        self.cells_at(TRAIL_START).collect()
    }

    fn cells_at(&self, h: u8) -> impl Iterator<Item = Point> + '_ {
        self.range
            .iter()
            .zip(self.heights.iter())
            .filter(move |&(_, &c)| c == Some(h))
            .map(|(p, _)| p)
    }

    /// Number of distinct summits reachable from `head` by climbing trails.
    pub fn score(&self, head: Point) -> usize {
        if self.height(head) != Some(TRAIL_START) {
            return 0;
        }
        let steps = bfs_map(self, self.range, &[head], i32::MAX);
        self.cells_at(TRAIL_END)
            .filter(|&p| steps.steps_to(p).is_some())
            .count()
    }

    /// Number of distinct climbing trails through every cell.
    ///
    /// Summits count one trail each; any other cell counts the trails of the
    /// cells one level above it. Cells are settled from the top down, so each
    /// is visited once.
    pub fn ratings(&self) -> Vec<u64> {
        let mut ways = vec![0u64; self.heights.len()];
        let mut nbuf = Vec::with_capacity(4);
        for h in (TRAIL_START..=TRAIL_END).rev() {
            for p in self.cells_at(h) {
                let Some(i) = self.range.index(p) else {
                    continue;
                };
                if h == TRAIL_END {
                    ways[i] = 1;
                    continue;
                }
                nbuf.clear();
                self.neighbors(p, &mut nbuf);
                ways[i] = nbuf
                    .iter()
                    .filter_map(|&n| self.range.index(n))
                    .map(|ni| ways[ni])
                    .sum();
            }
        }
        ways
    }

    /// Number of distinct trails starting at `head`.
    pub fn rating(&self, head: Point) -> u64 {
        if self.height(head) != Some(TRAIL_START) {
            return 0;
        }
        self.range
            .index(head)
            .map_or(0, |i| self.ratings()[i])
    }

    /// Sum of [`score`](Self::score) over every trailhead.
    pub fn total_score(&self) -> usize {
        let total = self.trailheads().into_iter().map(|p| self.score(p)).sum();
        debug!("height map {}: trailhead score {total}", self.range);
        total
    }

    /// Sum of [`rating`](Self::rating) over every trailhead.
    pub fn total_rating(&self) -> u64 {
        let ways = self.ratings();
        let total = self
            .trailheads()
            .into_iter()
            .filter_map(|p| self.range.index(p))
            .map(|i| ways[i])
            .sum();
        debug!("height map {}: trailhead rating {total}", self.range);
        total
    }
}

/// Cardinal moves exactly one level up.
impl Pather for HeightMap {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(h) = self.height(p) else {
            return;
        };
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&n| self.height(n) == Some(h + 1)),
        );
    }
}

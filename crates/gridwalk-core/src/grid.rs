//! The [`Grid`] type — an immutable 2D array of [`Cell`]s parsed from text.
//!
//! A grid is never modified after construction. Searches keep their own
//! score arrays, and "what if this cell were blocked" questions are answered
//! on a fresh snapshot from [`with_walls`](Grid::with_walls).

use std::fmt;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A rectangular maze of [`Cell`]s with optional unique start and end markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Point>,
    end: Option<Point>,
}

/// Parse rectangular text into row-major values and its bounds.
///
/// Blank lines around the text and line endings are dropped; nothing else
/// is, so a stray space reaches `decode` like any other character. Every row
/// must have the width of the first.
pub fn parse_rows<T>(
    text: &str,
    mut decode: impl FnMut(char, Point) -> Result<T, GridError>,
) -> Result<(Vec<T>, Range), GridError> {
    let text = text.trim_matches(|c| c == '\n' || c == '\r');
    if text.trim().is_empty() {
        return Err(GridError::Empty);
    }

    let mut values = Vec::with_capacity(text.len());
    let mut width: Option<usize> = None;
    let mut height = 0;

    for (y, line) in text.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut x = 0;
        for ch in line.chars() {
            values.push(decode(ch, Point::new(x as i32, y as i32))?);
            x += 1;
        }
        match width {
            None => width = Some(x),
            Some(w) if w != x => {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: w,
                    found: x,
                });
            }
            Some(_) => {}
        }
        height = y + 1;
    }

    let width = width.unwrap_or(0);
    if width == 0 {
        return Err(GridError::Empty);
    }
    Ok((values, Range::new(0, 0, width as i32, height as i32)))
}

/// Record a unique marker at `pos`, failing if `slot` is already taken.
pub fn place_marker(slot: &mut Option<Point>, ch: char, pos: Point) -> Result<(), GridError> {
    if slot.is_some() {
        return Err(GridError::DuplicateMarker { ch, pos });
    }
    *slot = Some(pos);
    Ok(())
}

impl Grid {
    /// Parse grid text, one row per line.
    ///
    /// Blank lines around the text are ignored. Every row must have the same
    /// width, every character must be a cell symbol and `S`/`E` may each
    /// appear at most once.
    pub fn load(text: &str) -> Result<Self, GridError> {
        let mut start = None;
        let mut end = None;
        let (cells, bounds) = parse_rows(text, |ch, pos| {
            let cell = Cell::from_char(ch).ok_or(GridError::InvalidSymbol { ch, pos })?;
            match cell {
                Cell::Start => place_marker(&mut start, ch, pos)?,
                Cell::End => place_marker(&mut end, ch, pos)?,
                _ => {}
            }
            Ok(cell)
        })?;
        Ok(Self {
            cells,
            bounds,
            start,
            end,
        })
    }

    /// An all-open grid of the given size without markers.
    ///
    /// Returns [`GridError::Empty`] if either side is not positive.
    pub fn open(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let bounds = Range::new(0, 0, width, height);
        Ok(Self {
            cells: vec![Cell::Open; bounds.len()],
            bounds,
            start: None,
            end: None,
        })
    }

    /// A copy of this grid with every listed in-bounds point turned into a
    /// wall. Points outside the grid are ignored. A marker covered by a wall
    /// is dropped.
    pub fn with_walls(&self, walls: &[Point]) -> Self {
        let mut next = self.clone();
        for &p in walls {
            if let Some(i) = next.bounds.index(p) {
                next.cells[i] = Cell::Wall;
                if next.start == Some(p) {
                    next.start = None;
                }
                if next.end == Some(p) {
                    next.end = None;
                }
            }
        }
        next
    }

    /// The bounding range of this grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`.
    pub fn at(&self, p: Point) -> Result<Cell, GridError> {
        self.bounds
            .index(p)
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds(p))
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.bounds
            .index(p)
            .is_some_and(|i| self.cells[i].is_passable())
    }

    /// Position of the `S` marker, if any.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `E` marker, if any.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Position of the `S` marker, or [`GridError::MissingMarker`].
    pub fn require_start(&self) -> Result<Point, GridError> {
        self.start
            .ok_or(GridError::MissingMarker(Cell::Start.to_char()))
    }

    /// Position of the `E` marker, or [`GridError::MissingMarker`].
    pub fn require_end(&self) -> Result<Point, GridError> {
        self.end.ok_or(GridError::MissingMarker(Cell::End.to_char()))
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Render the grid, drawing `mark` for every point where `marked` is true.
    pub fn render_with(&self, mark: char, marked: impl Fn(Point) -> bool) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height() as usize);
        for (p, cell) in self.iter() {
            if p.x == 0 && p.y > 0 {
                out.push('\n');
            }
            out.push(if marked(p) { mark } else { cell.to_char() });
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(' ', |_| false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#S..#
#.#E#
#####";

    #[test]
    fn load_and_size() {
        let g = Grid::load(ROOM).unwrap();
        assert_eq!(g.width(), 5);
        assert_eq!(g.height(), 4);
        assert_eq!(g.start(), Some(Point::new(1, 1)));
        assert_eq!(g.end(), Some(Point::new(3, 2)));
        assert_eq!(g.at(Point::new(2, 2)), Ok(Cell::Wall));
        assert_eq!(g.at(Point::new(2, 1)), Ok(Cell::Open));
    }

    #[test]
    fn load_tolerates_crlf_and_trailing_newline() {
        let g = Grid::load("S.\r\n.E\r\n").unwrap();
        assert_eq!(g.bounds(), Range::new(0, 0, 2, 2));
        assert_eq!(g.end(), Some(Point::new(1, 1)));
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let err = Grid::load("###\n##").unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert!(err.is_malformed());
    }

    #[test]
    fn leading_space_is_not_trimmed_away() {
        let err = Grid::load(" S.\n.E").unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            Grid::load("S.\n.E "),
            Err(GridError::InvalidSymbol {
                ch: ' ',
                pos: Point::new(2, 1)
            })
        );
        assert_eq!(
            Grid::load(" S.\n .E"),
            Err(GridError::InvalidSymbol {
                ch: ' ',
                pos: Point::new(0, 0)
            })
        );
    }

    #[test]
    fn surrounding_blank_lines_are_ignored() {
        let g = Grid::load("\n\nS.\n.E\n\n").unwrap();
        assert_eq!(g.bounds(), Range::new(0, 0, 2, 2));
        assert_eq!(g.start(), Some(Point::new(0, 0)));
    }

    #[test]
    fn empty_input_is_malformed() {
        assert_eq!(Grid::load(""), Err(GridError::Empty));
        assert_eq!(Grid::load("  \n\n "), Err(GridError::Empty));
        assert!(GridError::Empty.is_malformed());
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = Grid::load("S.\n.X").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidSymbol {
                ch: 'X',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.is_malformed());
    }

    #[test]
    fn duplicate_markers_are_rejected() {
        let err = Grid::load("S.S\n..E").unwrap_err();
        assert_eq!(
            err,
            GridError::DuplicateMarker {
                ch: 'S',
                pos: Point::new(2, 0)
            }
        );
        assert!(Grid::load("E.E").is_err());
    }

    #[test]
    fn at_out_of_bounds() {
        let g = Grid::load(ROOM).unwrap();
        for p in [Point::new(-1, 0), Point::new(5, 0), Point::new(0, 4)] {
            assert_eq!(g.at(p), Err(GridError::OutOfBounds(p)));
            assert!(!g.is_passable(p));
        }
        assert!(!GridError::OutOfBounds(Point::ZERO).is_malformed());
    }

    #[test]
    fn passability() {
        let g = Grid::load(ROOM).unwrap();
        assert!(!g.is_passable(Point::new(0, 0)));
        assert!(g.is_passable(Point::new(1, 1)));
        assert!(g.is_passable(Point::new(3, 2)));
    }

    #[test]
    fn missing_markers() {
        let g = Grid::open(3, 3).unwrap();
        assert_eq!(g.require_start(), Err(GridError::MissingMarker('S')));
        assert_eq!(g.require_end(), Err(GridError::MissingMarker('E')));
        assert!(Grid::open(0, 3).is_err());
    }

    #[test]
    fn with_walls_leaves_original_untouched() {
        let g = Grid::load(ROOM).unwrap();
        let blocked = g.with_walls(&[Point::new(2, 1), Point::new(3, 2), Point::new(9, 9)]);
        assert!(g.is_passable(Point::new(2, 1)));
        assert!(!blocked.is_passable(Point::new(2, 1)));
        assert_eq!(blocked.end(), None);
        assert_eq!(g.end(), Some(Point::new(3, 2)));
    }

    #[test]
    fn display_round_trips() {
        let g = Grid::load(ROOM).unwrap();
        assert_eq!(g.to_string(), ROOM);
        let marked = g.render_with('O', |p| p == Point::new(2, 1));
        assert_eq!(marked.lines().nth(1), Some("#SO.#"));
    }
}

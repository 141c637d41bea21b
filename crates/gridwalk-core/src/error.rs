use std::fmt;

use crate::geom::Point;

/// Errors raised while loading or querying a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no rows.
    Empty,
    /// A row's width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a known cell symbol.
    InvalidSymbol { ch: char, pos: Point },
    /// A start or end marker appears more than once.
    DuplicateMarker { ch: char, pos: Point },
    /// A required start or end marker is absent.
    MissingMarker(char),
    /// A coordinate outside the grid was queried.
    OutOfBounds(Point),
    /// Text that is not an `x,y` coordinate pair.
    InvalidPoint(String),
}

impl GridError {
    /// Whether this error describes unusable grid text rather than a bad
    /// query against a valid grid.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Empty
                | Self::RaggedRow { .. }
                | Self::InvalidSymbol { .. }
                | Self::DuplicateMarker { .. }
        )
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "malformed grid: no rows"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "malformed grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidSymbol { ch, pos } => {
                write!(f, "malformed grid: unknown symbol \u{201c}{ch}\u{201d} at ({pos})")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "malformed grid: second \u{201c}{ch}\u{201d} marker at ({pos})")
            }
            Self::MissingMarker(ch) => write!(f, "grid has no \u{201c}{ch}\u{201d} marker"),
            Self::OutOfBounds(p) => write!(f, "position ({p}) is outside the grid"),
            Self::InvalidPoint(s) => write!(f, "expected an \u{201c}x,y\u{201d} pair, got {s:?}"),
        }
    }
}

impl std::error::Error for GridError {}

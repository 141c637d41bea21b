use std::fmt;

use gridwalk_core::{GridError, Point};

/// Errors raised by the traversal algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The grid rejected a query or lacks a marker the search needs.
    Grid(GridError),
    /// The search finished without ever reaching `end`.
    UnreachableTarget { start: Point, end: Point },
    /// Step and turn costs must both be positive.
    InvalidCostModel { step: i32, turn: i32 },
    /// Prices so large that a route over `states` states could overflow.
    CostOverflow { step: i32, turn: i32, states: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::UnreachableTarget { start, end } => {
                write!(f, "no path from ({start}) to ({end})")
            }
            Self::InvalidCostModel { step, turn } => write!(
                f,
                "step and turn costs must be positive, got step={step} turn={turn}"
            ),
            Self::CostOverflow { step, turn, states } => write!(
                f,
                "step={step} turn={turn} are too large for a search over {states} states"
            ),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

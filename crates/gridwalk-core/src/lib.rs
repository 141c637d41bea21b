//! **gridwalk-core** — core types for grid traversal.
//!
//! This crate provides the foundational types used across the *gridwalk*
//! workspace: geometry primitives, facings, maze cells and an immutable grid
//! parsed from text.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{Direction, Point, Range, RangeIter, parse_points};
pub use grid::{Grid, parse_rows, place_marker};

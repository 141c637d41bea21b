//! The [`Cell`] type — one grid position's symbol.

use std::fmt;

/// A grid cell as read from maze text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// `#`
    Wall,
    /// `.`
    #[default]
    Open,
    /// `S`
    Start,
    /// `E`
    End,
}

impl Cell {
    /// Decode a symbol, or `None` if it is not a cell symbol.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Open),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }

    /// The symbol this cell is written as.
    pub const fn to_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Everything but a wall can be walked on.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

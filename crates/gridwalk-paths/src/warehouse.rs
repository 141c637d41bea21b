//! A robot pushing boxes around a walled warehouse.
//!
//! Boxes are either one cell wide (`O`) or two (`[]`). A push moves the
//! whole chain of boxes in front of the robot by one cell, or nothing at all
//! if any box in the chain would hit a wall.

use std::fmt;

use gridwalk_core::{Direction, GridError, Point, Range, parse_rows, place_marker};
use log::{debug, trace};

/// Contents of one warehouse cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Wall,
    Floor,
    Box,
    BoxLeft,
    BoxRight,
}

impl Tile {
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Floor),
            'O' => Some(Self::Box),
            '[' => Some(Self::BoxLeft),
            ']' => Some(Self::BoxRight),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Box => 'O',
            Self::BoxLeft => '[',
            Self::BoxRight => ']',
        }
    }

    /// Whether the tile is a box, or the left half of a wide one.
    #[inline]
    pub const fn is_box_origin(self) -> bool {
        matches!(self, Self::Box | Self::BoxLeft)
    }
}

const ROBOT: char = '@';

/// A warehouse map with the robot's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    range: Range,
    tiles: Vec<Tile>,
    robot: Point,
}

impl Warehouse {
    /// Parse a map of `#`, `.`, `O`, `[`, `]` and exactly one `@`.
    ///
    /// Every `[` must be directly followed by a `]`.
    pub fn load(text: &str) -> Result<Self, GridError> {
        let mut robot = None;
        let (tiles, range) = parse_rows(text, |ch, pos| {
            if ch == ROBOT {
                place_marker(&mut robot, ch, pos)?;
                return Ok(Tile::Floor);
            }
            Tile::from_char(ch).ok_or(GridError::InvalidSymbol { ch, pos })
        })?;
        let robot = robot.ok_or(GridError::MissingMarker(ROBOT))?;
        let house = Self {
            range,
            tiles,
            robot,
        };
        house.check_wide_boxes()?;
        Ok(house)
    }

    fn check_wide_boxes(&self) -> Result<(), GridError> {
        for (p, &t) in self.range.iter().zip(self.tiles.iter()) {
            let paired = match t {
                Tile::BoxLeft => self.tile(p.step(Direction::Right)) == Some(Tile::BoxRight),
                Tile::BoxRight => self.tile(p.step(Direction::Left)) == Some(Tile::BoxLeft),
                _ => true,
            };
            if !paired {
                return Err(GridError::InvalidSymbol {
                    ch: t.to_char(),
                    pos: p,
                });
            }
        }
        Ok(())
    }

    /// The same warehouse at double width: every cell becomes two, and every
    /// box half becomes a full wide box.
    pub fn widen(&self) -> Self {
        let range = Range::new(0, 0, self.range.width() * 2, self.range.height());
        let mut tiles = Vec::with_capacity(self.tiles.len() * 2);
        for &t in &self.tiles {
            let pair = match t {
                Tile::Wall => [Tile::Wall, Tile::Wall],
                Tile::Floor => [Tile::Floor, Tile::Floor],
                Tile::Box | Tile::BoxLeft | Tile::BoxRight => [Tile::BoxLeft, Tile::BoxRight],
            };
            tiles.extend(pair);
        }
        Self {
            range,
            tiles,
            robot: Point::new(self.robot.x * 2, self.robot.y),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn robot(&self) -> Point {
        self.robot
    }

    /// Tile at `p`, if inside the map.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.range.index(p).map(|i| self.tiles[i])
    }

    /// Move the robot one cell, pushing any boxes in the way.
    ///
    /// Returns whether the robot moved. A blocked push leaves the
    /// warehouse untouched.
    pub fn try_move(&mut self, dir: Direction) -> bool {
        let target = self.robot.step(dir);
        let mut seen = vec![false; self.tiles.len()];
        let mut pending = vec![target];
        let mut moving = Vec::new();

        while let Some(p) = pending.pop() {
            let Some(i) = self.range.index(p) else {
                return false;
            };
            if std::mem::replace(&mut seen[i], true) {
                continue;
            }
            let tile = self.tiles[i];
            let partner = match tile {
                Tile::Wall => return false,
                Tile::Floor => continue,
                Tile::Box => None,
                Tile::BoxLeft => Some(p.step(Direction::Right)),
                Tile::BoxRight => Some(p.step(Direction::Left)),
            };
            moving.push((p, tile));
            pending.push(p.step(dir));
            pending.extend(partner);
        }

        for &(p, _) in &moving {
            if let Some(i) = self.range.index(p) {
                self.tiles[i] = Tile::Floor;
            }
        }
        for &(p, tile) in &moving {
            if let Some(i) = self.range.index(p.step(dir)) {
                self.tiles[i] = tile;
            }
        }
        trace!("robot {} -> {target}, pushed {} box cells", self.robot, moving.len());
        self.robot = target;
        true
    }

    /// Apply `moves` in order; returns how many of them moved the robot.
    pub fn run(&mut self, moves: &[Direction]) -> usize {
        let moved = moves.iter().filter(|&&d| self.try_move(d)).count();
        debug!(
            "warehouse {}: {moved} of {} moves made, robot at ({})",
            self.range,
            moves.len(),
            self.robot
        );
        moved
    }

    /// Sum of `100 * y + x` over every box, measured at its left edge.
    pub fn gps_sum(&self) -> i64 {
        self.range
            .iter()
            .zip(self.tiles.iter())
            .filter(|&(_, t)| t.is_box_origin())
            .map(|(p, _)| 100 * i64::from(p.y) + i64::from(p.x))
            .sum()
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, &t) in self.range.iter().zip(self.tiles.iter()) {
            if p.x == 0 && p.y > 0 {
                f.write_str("\n")?;
            }
            let ch = if p == self.robot { ROBOT } else { t.to_char() };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Parse a move list of `^`, `v`, `<` and `>`. Whitespace is skipped;
/// positions in errors count lines and columns of the move text.
pub fn parse_moves(text: &str) -> Result<Vec<Direction>, GridError> {
    let mut moves = Vec::with_capacity(text.len());
    for (y, line) in text.lines().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let dir = match ch {
                '^' => Direction::Up,
                'v' => Direction::Down,
                '<' => Direction::Left,
                '>' => Direction::Right,
                c if c.is_whitespace() => continue,
                _ => {
                    return Err(GridError::InvalidSymbol {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                }
            };
            moves.push(dir);
        }
    }
    Ok(moves)
}

/// Parse a warehouse map followed, after a blank line, by its moves.
pub fn parse_puzzle(text: &str) -> Result<(Warehouse, Vec<Direction>), GridError> {
    let text = text.trim_start_matches(['\n', '\r']);
    let mut split = text.len();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            split = offset;
            break;
        }
        offset += line.len();
    }
    let (map, moves) = text.split_at(split);
    Ok((Warehouse::load(map)?, parse_moves(moves)?))
}

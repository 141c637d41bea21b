use gridwalk_core::{Direction, Point, Range};

/// A walker's situation: where it stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub pos: Point,
    pub dir: Direction,
}

impl State {
    #[inline]
    pub const fn new(pos: Point, dir: Direction) -> Self {
        Self { pos, dir }
    }

    /// One step ahead, same facing.
    #[inline]
    pub fn forward(self) -> Self {
        Self::new(self.pos.step(self.dir), self.dir)
    }

    /// The state that steps forward into `self`.
    #[inline]
    pub fn backward(self) -> Self {
        Self::new(self.pos.step(self.dir.reverse()), self.dir)
    }

    #[inline]
    pub fn turn_left(self) -> Self {
        Self::new(self.pos, self.dir.turn_left())
    }

    #[inline]
    pub fn turn_right(self) -> Self {
        Self::new(self.pos, self.dir.turn_right())
    }
}

/// Flat indexing of every (point, direction) state of a range.
///
/// The four facings of a cell are adjacent: `cell_index * 4 + ordinal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StateIndex {
    range: Range,
}

impl StateIndex {
    pub(crate) fn new(range: Range) -> Self {
        Self { range }
    }

    #[inline]
    pub(crate) fn range(&self) -> Range {
        self.range
    }

    /// Number of states.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.range.len() * 4
    }

    /// Convert a state to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, s: State) -> Option<usize> {
        self.range.index(s.pos).map(|i| i * 4 + s.dir.ordinal())
    }

    /// Convert a flat index back to a state.
    #[inline]
    pub(crate) fn state(&self, idx: usize) -> State {
        State::new(self.range.point(idx / 4), Direction::from_ordinal(idx % 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves() {
        let s = State::new(Point::new(2, 2), Direction::Right);
        assert_eq!(s.forward(), State::new(Point::new(3, 2), Direction::Right));
        assert_eq!(s.backward(), State::new(Point::new(1, 2), Direction::Right));
        assert_eq!(s.forward().backward(), s);
        assert_eq!(s.turn_left().dir, Direction::Up);
        assert_eq!(s.turn_right().dir, Direction::Down);
        assert_eq!(s.turn_left().pos, s.pos);
    }

    #[test]
    fn index_covers_every_state_once() {
        let index = StateIndex::new(Range::new(0, 0, 3, 2));
        assert_eq!(index.len(), 24);
        let mut seen = vec![false; index.len()];
        for p in index.range() {
            for d in Direction::ALL {
                let s = State::new(p, d);
                let i = index.idx(s).unwrap();
                assert!(!seen[i]);
                seen[i] = true;
                assert_eq!(index.state(i), s);
            }
        }
        assert!(seen.iter().all(|&v| v));
        assert_eq!(index.idx(State::new(Point::new(3, 0), Direction::Up)), None);
    }
}

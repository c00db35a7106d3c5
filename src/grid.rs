use crate::{Cell, GridInt};
use Heading::*;

/// One of the four cardinal unit movement vectors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Unit vector in (column, row) order; rows grow downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Heading {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_reverse_of(self, other: Heading) -> bool {
        self == other.opposite()
    }
}

/// Board dimensions in cells, with toroidal movement arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: GridInt,
    pub height: GridInt,
}

impl Grid {
    pub fn new(width: GridInt, height: GridInt) -> Self {
        Grid { width, height }
    }

    /// Moves a cell one step along `heading`, wrapping each axis so that
    /// leaving one edge re-enters at the opposite edge.
    pub fn wrap(self, cell: Cell, heading: Heading) -> Cell {
        let (dx, dy) = heading.delta();
        let col = (i32::from(cell.0) + dx).rem_euclid(i32::from(self.width)) as GridInt;
        let row = (i32::from(cell.1) + dy).rem_euclid(i32::from(self.height)) as GridInt;
        (col, row)
    }

    pub fn center(self) -> Cell {
        (self.width / 2, self.height / 2)
    }
}

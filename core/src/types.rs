use serde::{Deserialize, Serialize};

/// Single axis value, used for board width/height and positions.
pub type Coord = u8;

/// Area value, used for mine counts and cell counts.
pub type CellCount = u16;

/// Position or size as `(row, col)`, row runs along the width.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

pub const fn in_bounds((x, y): Coord2, (width, height): Coord2) -> bool {
    x < width && y < height
}

/// Offsets of the 8-neighbourhood, row-major around the center.
static OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn offset((x, y): Coord2, (dx, dy): (i8, i8), size: Coord2) -> Option<Coord2> {
    let moved = (x.checked_add_signed(dx)?, y.checked_add_signed(dy)?);
    in_bounds(moved, size).then_some(moved)
}

/// In-bounds neighbours of a cell, never more than 8 and never the cell itself.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    size: Coord2,
    offsets: core::slice::Iter<'static, (i8, i8)>,
}

impl Neighbors {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            offsets: OFFSETS.iter(),
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (center, size) = (self.center, self.size);
        self.offsets
            .by_ref()
            .find_map(|&delta| offset(center, delta, size))
    }
}

/// Cursor movement. `Up`/`Down` walk rows, `Left`/`Right` walk columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Position one step away, `None` when the step would leave the board.
    pub fn step(self, from: Coord2, size: Coord2) -> Option<Coord2> {
        offset(from, self.delta(), size)
    }
}

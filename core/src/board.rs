use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells with a fixed set of mines.
///
/// Deserializing goes through the same checks as [`Board::from_mine_coords`]; the stored mine count is recomputed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord2,
    mine_count: CellCount,
}

#[derive(Deserialize)]
struct RawBoard {
    cells: Array2<Cell>,
    size: Coord2,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(RawBoard { cells, size }: RawBoard) -> Result<Self> {
        if cells.dim() != (usize::from(size.0), usize::from(size.1)) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut board = Self {
            cells,
            size,
            mine_count: 0,
        };
        for (coords, cell) in board.iter() {
            if cell.is_revealed() && (cell.is_mine || cell.is_flagged) {
                return Err(GameError::InvalidCellState(coords));
            }
        }
        board.mine_count = board.mines().count() as CellCount;
        GameConfig::new(size, board.mine_count)?;
        Ok(board)
    }
}

impl Board {
    /// Board with no mines, every cell hidden and unflagged.
    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            size,
            mine_count: 0,
        }
    }

    /// Builds a fixed layout. Duplicate coordinates collapse into a single mine.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(size);
        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.place_mine(coords);
        }
        GameConfig::new(size, board.mine_count)?;
        Ok(board)
    }

    /// Returns whether a new mine was placed, `false` if one was already there.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self[coords];
        if cell.is_mine {
            return false;
        }
        cell.is_mine = true;
        self.mine_count += 1;
        true
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        in_bounds(coords, self.size).then(|| self[coords])
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.cell(coords).is_some_and(Cell::is_mine)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbours, so the narrowing is lossless
        self.neighbors(coords).filter(|&pos| self[pos].is_mine).count() as u8
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size)
    }

    /// All cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_mine)
            .map(|(coords, _)| coords)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

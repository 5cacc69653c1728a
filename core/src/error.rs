use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

/// Why a requested board shape or mine count was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: Coord, height: Coord },
    #[error("Board needs at least one mine")]
    NoMines,
    #[error("Too many mines, requested {mines} but board has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board cell at {0:?} is revealed on a mine or flagged after reveal")]
    InvalidCellState(Coord2),
}

pub type Result<T> = core::result::Result<T, GameError>;

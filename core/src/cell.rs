use serde::{Deserialize, Serialize};

/// One board position as the engine stores it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) is_flagged: bool,
    /// `None` until revealed, then the number of adjacent mines.
    pub(crate) adjacent_mines: Option<u8>,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    pub const fn is_revealed(self) -> bool {
        self.adjacent_mines.is_some()
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        self.adjacent_mines
    }

    /// Counted by the win check: still hidden, or carrying a flag.
    pub(crate) const fn is_win_candidate(self) -> bool {
        !self.is_revealed() || self.is_flagged
    }
}

/// What a renderer is allowed to see of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// Mine shown after a loss.
    Mine,
    /// The mine that ended the game.
    Exploded,
    /// Flag that sat on a safe cell, shown after a loss.
    WrongFlag,
}

impl CellView {
    /// Whether the cell still reads as closed on screen.
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged | Self::WrongFlag)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

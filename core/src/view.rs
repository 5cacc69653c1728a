use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to redraw a game, with mines hidden until the game ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub cursor: Coord2,
    pub state: GameState,
    pub mines_left: isize,
    pub cells: Array2<CellView>,
}

impl BoardView {
    pub fn from_game<G: MinefieldGenerator>(game: &Game<G>) -> Self {
        let size = game.size();
        let mut cells = Array2::default(size.to_nd_index());
        for ((x, y), cell) in cells.indexed_iter_mut() {
            if let Some(view) = game.cell_view((x as Coord, y as Coord)) {
                *cell = view;
            }
        }

        Self {
            size,
            cursor: game.cursor(),
            state: game.state(),
            mines_left: game.mines_left(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }
}

impl CellView {
    /// Mines only show once the game is over: all of them after a loss, as flags after a win.
    pub(crate) fn project(cell: Cell, state: GameState, exploded: bool) -> Self {
        use CellView::*;

        if let Some(count) = cell.adjacent_mines() {
            return Revealed(count);
        }

        match state {
            GameState::Playing if cell.is_flagged() => Flagged,
            GameState::Playing => Hidden,
            GameState::Won if cell.is_mine() || cell.is_flagged() => Flagged,
            GameState::Won => Hidden,
            GameState::Lost if exploded => Exploded,
            GameState::Lost => match (cell.is_mine(), cell.is_flagged()) {
                (true, true) => Flagged,
                (true, false) => Mine,
                (false, true) => WrongFlag,
                (false, false) => Hidden,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::from_board(Board::from_mine_coords(size, mines).unwrap(), 0)
    }

    #[test]
    fn playing_view_hides_mines() {
        let mut game = game((3, 3), &[(0, 0), (2, 2)]);
        game.toggle_flag_at((2, 2));
        game.reveal_at((0, 2));

        let view = game.view();

        assert_eq!(view.size, (3, 3));
        assert_eq!(view.cursor, (2, 2));
        assert_eq!(view.state, GameState::Playing);
        assert_eq!(view.mines_left, 1);
        assert_eq!(view.cell_at((0, 0)), CellView::Hidden);
        assert_eq!(view.cell_at((2, 2)), CellView::Flagged);
        assert_eq!(view.cell_at((0, 2)), CellView::Revealed(0));
        assert_eq!(view.cell_at((1, 1)), CellView::Revealed(2));
    }

    #[test]
    fn serialized_view_does_not_leak_mines() {
        let game = game((4, 4), &[(1, 1), (3, 0)]);

        let json = serde_json::to_string(&game.view()).unwrap();

        assert!(json.contains("Hidden"));
        assert!(!json.contains("Mine"));
        assert!(!json.contains("Exploded"));
    }

    #[test]
    fn lost_view_shows_mines_and_wrong_flags() {
        let mut game = game((3, 3), &[(0, 0), (0, 2), (2, 0)]);
        game.toggle_flag_at((0, 2));
        game.toggle_flag_at((2, 2));
        game.reveal_at((1, 1));
        game.reveal_at((0, 0));

        assert_eq!(game.cell_view((0, 0)), Some(CellView::Exploded));
        assert_eq!(game.cell_view((0, 2)), Some(CellView::Flagged));
        assert_eq!(game.cell_view((2, 0)), Some(CellView::Mine));
        assert_eq!(game.cell_view((2, 2)), Some(CellView::WrongFlag));
        assert_eq!(game.cell_view((1, 1)), Some(CellView::Revealed(3)));
        assert_eq!(game.cell_view((1, 2)), Some(CellView::Hidden));
        assert_eq!(game.cell_view((3, 0)), None);
    }

    #[test]
    fn won_view_flags_remaining_mines() {
        let mut game = game((3, 3), &[(0, 0)]);
        game.reveal_at((2, 2));

        let view = game.view();

        assert_eq!(view.state, GameState::Won);
        assert_eq!(view.cell_at((0, 0)), CellView::Flagged);
        assert_eq!(view.cells.iter().filter(|cell| cell.is_closed()).count(), 1);
    }
}

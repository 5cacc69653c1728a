use rand::Rng;

use crate::*;
pub use rejection::*;
pub use shuffle::*;

mod rejection;
mod shuffle;

/// Strategy for choosing where the mines of a new board go.
///
/// Implementations must pick exactly `config.mines` distinct cells, uniformly over all possible subsets. An unchecked
/// configuration asking for more mines than cells gets every cell mined, never a hang or a panic.
pub trait MinefieldGenerator {
    fn generate<R: Rng + ?Sized>(&self, config: GameConfig, rng: &mut R) -> Board;
}

/// Validates the requested shape and places mines with the default [`ShuffleGenerator`].
pub fn generate<R: Rng + ?Sized>(
    width: Coord,
    height: Coord,
    mines: CellCount,
    rng: &mut R,
) -> Result<Board> {
    let config = GameConfig::new((width, height), mines)?;
    Ok(ShuffleGenerator.generate(config, rng))
}

/// Marks the chosen cells on an empty board of the configured size.
fn board_with_mines(config: GameConfig, mines: impl IntoIterator<Item = Coord2>) -> Board {
    let mut board = Board::empty(config.size);
    for coords in mines {
        board.place_mine(coords);
    }

    // double check mine count
    if board.mine_count() != config.mines {
        log::warn!(
            "Generated board mine count mismatch, actual: {}, requested: {}",
            board.mine_count(),
            config.mines
        );
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn generate_rejects_invalid_configuration() {
        let mut rng = SmallRng::seed_from_u64(1);

        for (width, height, mines) in [(0, 9, 1), (9, 0, 1), (3, 3, 0), (3, 3, 9), (2, 2, 10)] {
            assert!(matches!(
                generate(width, height, mines, &mut rng),
                Err(GameError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn generate_places_requested_mines() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = generate(16, 30, 99, &mut rng).unwrap();

        assert_eq!(board.size(), (16, 30));
        assert_eq!(board.mine_count(), 99);
        assert_eq!(board.mines().count(), 99);
        assert!(board.iter().all(|(_, cell)| !cell.is_revealed() && !cell.is_flagged()));
    }
}

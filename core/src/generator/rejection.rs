use alloc::collections::BTreeSet;

use super::*;

/// Draws random coordinates until enough distinct ones have been collected.
///
/// Retries grow as the board fills up; prefer [`ShuffleGenerator`] for dense boards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RejectionGenerator;

impl MinefieldGenerator for RejectionGenerator {
    fn generate<R: Rng + ?Sized>(&self, config: GameConfig, rng: &mut R) -> Board {
        let (width, height) = config.size;
        // unchecked configs may ask for more mines than cells
        let target = usize::from(config.mines.min(config.total_cells()));
        let mut chosen = BTreeSet::new();

        while chosen.len() < target {
            let coords = (rng.random_range(0..width), rng.random_range(0..height));
            if !chosen.insert(coords) {
                log::trace!("Rejected duplicate mine position {:?}", coords);
            }
        }

        board_with_mines(config, chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn places_exact_count() {
        let mut rng = SmallRng::seed_from_u64(5);

        for config in [
            GameConfig::BEGINNER,
            GameConfig::INTERMEDIATE,
            GameConfig::EXPERT,
        ] {
            let board = RejectionGenerator.generate(config, &mut rng);
            assert_eq!(board.mine_count(), config.mines);
            assert_eq!(board.size(), config.size);
        }
    }

    #[test]
    fn fills_nearly_full_board() {
        let mut rng = SmallRng::seed_from_u64(9);
        let config = GameConfig::new((3, 3), 8).unwrap();

        let board = RejectionGenerator.generate(config, &mut rng);

        assert_eq!(board.mine_count(), 8);
        assert_eq!(board.iter().filter(|(_, cell)| !cell.is_mine()).count(), 1);
    }

    #[test]
    fn every_cell_can_hold_the_mine() {
        let config = GameConfig::new((2, 3), 1).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut hits = [[0u32; 3]; 2];

        for _ in 0..600 {
            let board = RejectionGenerator.generate(config, &mut rng);
            for (x, y) in board.mines() {
                hits[usize::from(x)][usize::from(y)] += 1;
            }
        }

        // 100 expected per cell
        for row in hits {
            for count in row {
                assert!((50..150).contains(&count), "skewed placement: {hits:?}");
            }
        }
    }

    #[test]
    fn unchecked_config_matches_shuffle() {
        let mut rng = SmallRng::seed_from_u64(2);

        for config in [
            GameConfig {
                size: (2, 2),
                mines: 5,
            },
            GameConfig {
                size: (0, 3),
                mines: 1,
            },
        ] {
            let rejected = RejectionGenerator.generate(config, &mut rng);
            let shuffled = ShuffleGenerator.generate(config, &mut rng);

            assert_eq!(rejected.mine_count(), config.total_cells());
            assert_eq!(rejected, shuffled);
        }
    }
}

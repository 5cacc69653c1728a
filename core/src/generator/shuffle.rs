use alloc::vec::Vec;
use rand::seq::SliceRandom;

use super::*;

/// Shuffles the list of every coordinate and takes the first `mines` entries.
///
/// Cost is linear in the board area regardless of density.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShuffleGenerator;

impl MinefieldGenerator for ShuffleGenerator {
    fn generate<R: Rng + ?Sized>(&self, config: GameConfig, rng: &mut R) -> Board {
        let (width, height) = config.size;
        let mut coords: Vec<Coord2> = (0..width)
            .flat_map(|x| (0..height).map(move |y| (x, y)))
            .collect();

        let amount = usize::from(config.mines.min(config.total_cells()));
        let (chosen, _) = coords.partial_shuffle(rng, amount);
        board_with_mines(config, chosen.iter().copied())
    }
}

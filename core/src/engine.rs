use alloc::collections::VecDeque;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> Playing, through a reset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }

    pub const fn is_lost(self) -> bool {
        matches!(self, Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// One game from first move to reset: the board, the cursor and the win/lose state.
///
/// All in-game operations are total. Moves that make no sense (past an edge, on a revealed cell, after the game
/// ended) report no change instead of failing.
#[derive(Clone, Debug)]
pub struct Game<G = ShuffleGenerator> {
    board: Board,
    cursor: Coord2,
    state: GameState,
    triggered_mine: Option<Coord2>,
    flagged_count: CellCount,
    rng: SmallRng,
    generator: G,
}

impl Game {
    /// New game with a shuffled layout. The seed drives this and every later reset.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, seed, ShuffleGenerator)
    }

    /// Plays on a prepared layout; resets fall back to shuffled layouts of the same shape.
    pub fn from_board(board: Board, seed: u64) -> Self {
        Self::from_board_with_generator(board, seed, ShuffleGenerator)
    }

    #[cfg(feature = "std")]
    pub fn from_entropy(config: GameConfig) -> Result<Self> {
        use rand::Rng;

        let seed = rand::rng().random();
        log::debug!("Seeding new game from entropy: {}", seed);
        Self::new(config, seed)
    }
}

/// Starts a game of the given shape, seeded from the thread RNG.
#[cfg(feature = "std")]
pub fn new_game(width: Coord, height: Coord, mines: CellCount) -> Result<Game> {
    Game::from_entropy(GameConfig::new((width, height), mines)?)
}

impl<G: MinefieldGenerator> Game<G> {
    pub fn with_generator(config: GameConfig, seed: u64, generator: G) -> Result<Self> {
        let config = config.validate()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = generator.generate(config, &mut rng);
        Ok(Self::assemble(board, rng, generator))
    }

    pub fn from_board_with_generator(board: Board, seed: u64, generator: G) -> Self {
        Self::assemble(board, SmallRng::seed_from_u64(seed), generator)
    }

    fn assemble(board: Board, rng: SmallRng, generator: G) -> Self {
        let mut game = Self {
            board: Board::empty((0, 0)),
            cursor: (0, 0),
            state: GameState::Playing,
            triggered_mine: None,
            flagged_count: 0,
            rng,
            generator,
        };
        game.install(board);
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.board.game_config()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mines minus placed flags. Goes negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// What a renderer may show at `coords`, `None` outside the board.
    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        let cell = self.board.cell(coords)?;
        let exploded = self.triggered_mine == Some(coords);
        Some(CellView::project(cell, self.state, exploded))
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_game(self)
    }

    #[cfg(test)]
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whether the cursor moved.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        if self.state.is_finished() {
            return false;
        }

        match direction.step(self.cursor, self.board.size()) {
            Some(next) => {
                self.cursor = next;
                true
            }
            None => false,
        }
    }

    pub fn toggle_flag(&mut self) -> MarkOutcome {
        self.toggle_flag_at(self.cursor)
    }

    pub fn toggle_flag_at(&mut self, coords: Coord2) -> MarkOutcome {
        if self.state.is_finished() {
            return MarkOutcome::NoChange;
        }
        match self.board.cell(coords) {
            Some(cell) if !cell.is_revealed() => {}
            _ => return MarkOutcome::NoChange,
        }

        let cell = &mut self.board[coords];
        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }

        if self.check_won() {
            MarkOutcome::Won
        } else {
            MarkOutcome::Changed
        }
    }

    pub fn reveal(&mut self) -> RevealOutcome {
        self.reveal_at(self.cursor)
    }

    /// Flagged cells are protected and must be unflagged before they can be revealed.
    pub fn reveal_at(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_finished() {
            return RevealOutcome::NoChange;
        }
        let Some(cell) = self.board.cell(coords) else {
            return RevealOutcome::NoChange;
        };
        if cell.is_flagged || cell.is_revealed() {
            return RevealOutcome::NoChange;
        }

        if cell.is_mine {
            self.triggered_mine = Some(coords);
            self.end_game(GameState::Lost);
            return RevealOutcome::HitMine;
        }

        let opened = self.flood_reveal(coords);
        log::trace!("Reveal at {:?} opened {} cells", coords, opened);

        if self.check_won() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Reveals `start` and, through zero-count cells, the whole connected zero region and its numbered border.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = self.board[coords];
            if cell.is_revealed() || cell.is_flagged || cell.is_mine {
                continue;
            }

            let count = self.board.adjacent_mine_count(coords);
            self.board[coords].adjacent_mines = Some(count);
            opened += 1;
            log::trace!("Flood opened cell at {:?}, mine count: {}", coords, count);

            if count == 0 {
                to_visit.extend(
                    self.board
                        .neighbors(coords)
                        .filter(|&pos| !self.board[pos].is_revealed()),
                );
            }
        }

        opened
    }

    /// Won once the cells still hidden or flagged are exactly the mines.
    fn check_won(&mut self) -> bool {
        let (candidates, all_mines) = self
            .board
            .iter()
            .filter(|(_, cell)| cell.is_win_candidate())
            .fold((0 as CellCount, true), |(count, all_mines), (_, cell)| {
                (count + 1, all_mines && cell.is_mine)
            });

        let won = all_mines && candidates == self.board.mine_count();
        if won {
            self.end_game(GameState::Won);
        }
        won
    }

    fn end_game(&mut self, state: GameState) {
        if self.state.is_finished() {
            return;
        }

        self.state = state;
        match state {
            GameState::Won => {
                self.triggered_mine = None;
                log::info!("Game won");
            }
            GameState::Lost => log::info!("Game lost, mine at {:?}", self.triggered_mine),
            GameState::Playing => {}
        }
    }

    /// Starts over with a fresh layout of the same shape.
    pub fn reset(&mut self) {
        let config = self.config();
        let board = self.generator.generate(config, &mut self.rng);
        self.install(board);
    }

    /// Starts over with a fresh layout of a new shape. On error the current game is kept.
    pub fn reset_with(&mut self, config: GameConfig) -> Result<()> {
        let config = config.validate()?;
        let board = self.generator.generate(config, &mut self.rng);
        self.install(board);
        Ok(())
    }

    fn install(&mut self, board: Board) {
        let config = board.game_config();
        log::debug!(
            "New game {}x{} with {} mines",
            config.size.0,
            config.size.1,
            config.mines
        );

        self.flagged_count = board
            .iter()
            .filter(|(_, cell)| cell.is_flagged)
            .count() as CellCount;
        self.board = board;
        self.cursor = config.start_cursor();
        self.state = GameState::Playing;
        self.triggered_mine = None;
    }
}

use crate::board::Mark;
use crate::game::{GameState, GameStatus};

/// Per-session win/tie counters. Incremented exactly once per
/// completed game and only reset by an explicit request; starting a
/// new game never touches the tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl ScoreBoard {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Won(Mark::Empty) => unreachable!("Empty cannot win"),
            GameStatus::Draw => self.ties += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One sitting against the computer: the current game plus the score
/// tally carried across games. The starting side alternates strictly
/// by game count - game 1 starts with X, game 2 with O, and so on,
/// regardless of who won.
pub struct Session {
    game: GameState,
    scores: ScoreBoard,
    games_started: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            game: GameState::new(Self::starting_mark(0)),
            scores: ScoreBoard::default(),
            games_started: 1,
        }
    }

    fn starting_mark(game_number: u32) -> Mark {
        if game_number % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Discards the current board and starts the next game with the
    /// alternated starting side.
    pub fn new_game(&mut self) {
        self.game = GameState::new(Self::starting_mark(self.games_started));
        self.games_started += 1;
    }

    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    pub fn player_move(&mut self, index: usize) -> Result<(), String> {
        self.game.place_mark(index)?;
        self.record_outcome();
        Ok(())
    }

    pub fn computer_move(&mut self) -> Result<usize, String> {
        let index = self.game.computer_move()?;
        self.record_outcome();
        Ok(index)
    }

    // A finished game rejects further moves, so the transition into a
    // terminal status is observed at most once per game.
    fn record_outcome(&mut self) {
        if self.game.status != GameStatus::InProgress {
            self.scores.record(self.game.status);
        }
    }
}

use crate::board::{Board, CELL_COUNT, Mark};
use crate::bot::{COMPUTER_MARK, select_move};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// Outcome of a board, checked in fixed priority order: X win, then
/// O win, then draw on a full board.
pub fn evaluate(board: &Board) -> GameStatus {
    if board.has_winner(Mark::X) {
        return GameStatus::Won(Mark::X);
    }
    if board.has_winner(Mark::O) {
        return GameStatus::Won(Mark::O);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub turns: u32,
}

impl GameState {
    pub fn new(starting_mark: Mark) -> Self {
        if starting_mark == Mark::Empty {
            panic!("A game must start with X or O");
        }

        Self {
            board: Board::new(),
            current_mark: starting_mark,
            status: GameStatus::InProgress,
            last_move: None,
            turns: 0,
        }
    }

    /// Applies the current side's mark to `index`. This is the
    /// validated entry point for the human path; occupied cells,
    /// out-of-bounds indices and finished games are rejected.
    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Cell index out of bounds".to_string());
        }

        if self.board.get(index) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(index, self.current_mark);
        self.last_move = Some(index);
        self.turns += 1;

        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    /// Runs the move selector for O and applies the chosen cell
    /// through the same mutation path as a human move. Calling this
    /// when the game is over or it is not O's turn is a caller bug
    /// and fails with an error.
    pub fn computer_move(&mut self) -> Result<usize, String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if self.current_mark != COMPUTER_MARK {
            return Err("Not the computer's turn".to_string());
        }

        let chosen = select_move(&self.board, COMPUTER_MARK);
        let index = chosen
            .index
            .ok_or_else(|| "No move available".to_string())?;

        self.place_mark(index)?;
        Ok(index)
    }

    fn switch_turn(&mut self) {
        self.current_mark = self.current_mark.opponent().unwrap();
    }
}

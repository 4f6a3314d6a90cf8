use crate::config::Config;
use tictactoe_engine::{GameState, GameStatus, Mark, ScoreBoard};

pub fn render_board(game: &GameState, config: &Config) -> String {
    let winning = if config.highlight_winner {
        match game.status {
            GameStatus::Won(mark) => game.board.winning_line(mark),
            _ => None,
        }
    } else {
        None
    };

    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        for col in 0..3 {
            if col > 0 {
                out.push('|');
            }
            out.push_str(&cell_text(game, config, winning, row * 3 + col));
        }
        out.push('\n');
    }
    out
}

fn cell_text(game: &GameState, config: &Config, winning: Option<[usize; 3]>, index: usize) -> String {
    let symbol = match game.board.get(index) {
        Mark::X => 'X',
        Mark::O => 'O',
        // Empty cells show the number the player would type.
        Mark::Empty => char::from_digit(index as u32 + config.input_base, 10).unwrap_or('?'),
    };

    if winning.is_some_and(|line| line.contains(&index)) {
        format!("[{}]", symbol)
    } else {
        format!(" {} ", symbol)
    }
}

pub fn render_scores(scores: &ScoreBoard) -> String {
    format!(
        "X: {}  O: {}  Ties: {}",
        scores.x_wins, scores.o_wins, scores.ties
    )
}

pub fn outcome_message(status: GameStatus) -> String {
    match status {
        GameStatus::Won(Mark::X) => "X wins!".to_string(),
        GameStatus::Won(Mark::O) => "O wins!".to_string(),
        GameStatus::Won(Mark::Empty) | GameStatus::InProgress => String::new(),
        GameStatus::Draw => "It's a tie!".to_string(),
    }
}

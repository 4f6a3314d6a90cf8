use crate::board::{Board, Mark};

/// The computer always plays O. The score convention is bound to the
/// symbol, not to who is driving the call: X minimizes, O maximizes.
pub const COMPUTER_MARK: Mark = Mark::O;

const X_WIN_SCORE: i32 = -10;
const O_WIN_SCORE: i32 = 10;
const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    /// `None` only when the board is already terminal.
    pub index: Option<usize>,
    pub score: i32,
}

/// Exhaustive minimax over the 3x3 board, no pruning, no depth
/// discounting. Returns the game-theoretically optimal cell for
/// `mark` together with its score, assuming optimal play by both
/// sides thereafter. On an already-terminal board the result carries
/// the terminal score and no index.
///
/// Ties between equally scored moves go to the earliest cell index,
/// because candidates are scanned in ascending order and only strict
/// improvements replace the current best.
pub fn select_move(board: &Board, mark: Mark) -> ScoredMove {
    let mut scratch = board.clone();
    minimax(&mut scratch, mark)
}

fn minimax(board: &mut Board, mark: Mark) -> ScoredMove {
    // Terminal checks in fixed priority order: X win, O win, full.
    if board.has_winner(Mark::X) {
        return ScoredMove {
            index: None,
            score: X_WIN_SCORE,
        };
    }
    if board.has_winner(Mark::O) {
        return ScoredMove {
            index: None,
            score: O_WIN_SCORE,
        };
    }
    let available = board.empty_cells();
    if available.is_empty() {
        return ScoredMove {
            index: None,
            score: DRAW_SCORE,
        };
    }

    let opponent = mark.opponent().unwrap();

    let mut moves = Vec::with_capacity(available.len());
    for cell in available {
        board.place(cell, mark);
        let result = minimax(board, opponent);
        board.place(cell, Mark::Empty);
        moves.push(ScoredMove {
            index: Some(cell),
            score: result.score,
        });
    }

    let mut best = moves[0];
    if mark == Mark::O {
        for &candidate in &moves[1..] {
            if candidate.score > best.score {
                best = candidate;
            }
        }
    } else {
        for &candidate in &moves[1..] {
            if candidate.score < best.score {
                best = candidate;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;

    fn board_from(marks: [Mark; CELL_COUNT]) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board.place(index, mark);
        }
        board
    }

    #[test]
    fn test_empty_board_for_o_is_a_draw_from_top_left() {
        let board = Board::new();
        let chosen = select_move(&board, Mark::O);
        // Every opening move leads to a draw under optimal play, so
        // the tie-break keeps the first candidate.
        assert_eq!(chosen.index, Some(0));
        assert_eq!(chosen.score, 0);
    }

    #[test]
    fn test_empty_board_for_x_is_a_draw_from_top_left() {
        let board = Board::new();
        let chosen = select_move(&board, Mark::X);
        assert_eq!(chosen.index, Some(0));
        assert_eq!(chosen.score, 0);
    }

    #[test]
    fn test_o_converts_its_own_double_threat() {
        use Mark::{Empty as E, O, X};
        // X threatens cell 2, O holds 3 and 4. Playing 2 gives O the
        // double threat 3-4-5 / 2-4-6 and wins outright, and it is
        // scanned before the immediate win at 5, so it is kept.
        let board = board_from([X, X, E, O, O, E, E, E, E]);
        let chosen = select_move(&board, Mark::O);
        assert_eq!(chosen.score, 10);
        assert_eq!(chosen.index, Some(2));
    }

    #[test]
    fn test_lost_position_returns_earliest_best_candidate() {
        use Mark::{Empty as E, X};
        // X already holds two cells of the 0-4-8 diagonal with no O
        // on the board. Every O reply loses to perfect X play.
        let board = board_from([X, E, E, E, X, E, E, E, E]);
        let chosen = select_move(&board, Mark::O);

        let mut best_alternative = i32::MIN;
        let mut scratch = board.clone();
        for cell in board.empty_cells() {
            scratch.place(cell, Mark::O);
            let score = select_move(&scratch, Mark::X).score;
            scratch.place(cell, Mark::Empty);
            best_alternative = best_alternative.max(score);
        }

        assert_eq!(chosen.score, best_alternative);
        assert_eq!(chosen.score, -10);
        assert_eq!(chosen.index, Some(1));
    }

    #[test]
    fn test_single_empty_cell_without_winner() {
        use Mark::{Empty as E, O, X};
        let board = board_from([X, O, X, X, O, O, O, X, E]);
        for mark in [Mark::X, Mark::O] {
            let chosen = select_move(&board, mark);
            assert_eq!(chosen.index, Some(8));
            assert_eq!(chosen.score, 0);
        }
    }

    #[test]
    fn test_terminal_boards_return_score_without_index() {
        use Mark::{Empty as E, O, X};
        let x_won = board_from([X, X, X, O, O, E, E, E, E]);
        assert_eq!(
            select_move(&x_won, Mark::O),
            ScoredMove {
                index: None,
                score: -10
            }
        );

        let o_won = board_from([O, O, O, X, X, E, X, E, E]);
        assert_eq!(
            select_move(&o_won, Mark::X),
            ScoredMove {
                index: None,
                score: 10
            }
        );

        let tied = board_from([X, O, X, X, O, O, O, X, X]);
        assert_eq!(
            select_move(&tied, Mark::O),
            ScoredMove {
                index: None,
                score: 0
            }
        );
    }

    #[test]
    fn test_search_does_not_mutate_the_callers_board() {
        use Mark::{Empty as E, O, X};
        let board = board_from([X, E, E, E, O, E, E, E, E]);
        let snapshot = board.clone();
        select_move(&board, Mark::X);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_o_blocks_an_immediate_x_win_when_it_cannot_win_itself() {
        use Mark::{Empty as E, O, X};
        // X threatens the top row at cell 2; O has no counter-threat,
        // so the only non-losing reply is the block.
        let board = board_from([X, X, E, E, O, E, E, E, E]);
        let chosen = select_move(&board, Mark::O);
        assert_eq!(chosen.index, Some(2));
    }
}

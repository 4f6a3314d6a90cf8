pub mod board;
pub mod bot;
pub mod game;
pub mod logger;
pub mod session;

pub use board::{Board, CELL_COUNT, Mark, WIN_PATTERNS};
pub use bot::{COMPUTER_MARK, ScoredMove, select_move};
pub use game::{GameState, GameStatus, evaluate};
pub use session::{ScoreBoard, Session};

mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, LINES};
pub use bot_controller::{best_move, rank_moves};
pub use game_state::TicTacToeGameState;
pub use settings::{FirstPlayer, TicTacToeSettings};
pub use types::{GameStatus, Line, Mark, Move, Player};
pub use win_detector::{check_winner, has_won, is_full, winning_line};

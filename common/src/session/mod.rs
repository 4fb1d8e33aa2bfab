pub mod tictactoe_session;

use std::future::Future;

use crate::games::tictactoe::{Board, GameStatus, Line, Move, Player};

pub use tictactoe_session::{TicTacToeSessionState, run_game_loop};

/// Receives everything the presentation layer needs to redraw.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameStateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameStateUpdate {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<Move>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameOverNotification {
    pub board: Board,
    pub status: GameStatus,
    pub winner: Option<Player>,
    pub winning_line: Option<Line>,
    pub message: String,
}

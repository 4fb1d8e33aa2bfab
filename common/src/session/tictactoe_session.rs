use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};

use crate::config::Validate;
use crate::games::tictactoe::{
    Move, Player, TicTacToeGameState, TicTacToeSettings, best_move, rank_moves,
};
use crate::session::{GameBroadcaster, GameOverNotification, GameStateUpdate};
use crate::{debug_log, log};

#[derive(Clone)]
pub struct TicTacToeSessionState {
    pub game_state: Arc<Mutex<TicTacToeGameState>>,
    pub turn_notify: Arc<Notify>,
    thinking_delay: Duration,
}

impl TicTacToeSessionState {
    pub fn create(settings: &TicTacToeSettings) -> Result<Self, String> {
        settings.validate()?;

        Ok(Self {
            game_state: Arc::new(Mutex::new(TicTacToeGameState::new(settings.first_player))),
            turn_notify: Arc::new(Notify::new()),
            thinking_delay: settings.thinking_delay(),
        })
    }

    pub async fn place_human_mark(&self, index: Move) -> Result<(), String> {
        {
            let mut game_state = self.game_state.lock().await;
            game_state.place_mark(Player::HUMAN, index)?;
        }
        self.turn_notify.notify_one();
        Ok(())
    }

    pub async fn restart(&self) {
        {
            let mut game_state = self.game_state.lock().await;
            game_state.reset();
        }
        self.turn_notify.notify_one();
    }

    pub async fn snapshot(&self) -> GameStateUpdate {
        let game_state = self.game_state.lock().await;
        GameStateUpdate {
            board: game_state.board,
            current_player: game_state.current_player,
            status: game_state.status,
            last_move: game_state.last_move,
            message: game_state.status_message(),
        }
    }
}

/// Drives one game until it is won or drawn. A `restart` while the loop is
/// running starts over without leaving the loop.
pub async fn run_game_loop<B: GameBroadcaster>(
    session_state: TicTacToeSessionState,
    broadcaster: B,
) -> GameOverNotification {
    let mut last_broadcast: Option<GameStateUpdate> = None;

    loop {
        let snapshot = session_state.snapshot().await;
        let is_game_over = snapshot.status.is_over();
        let is_computer_turn = snapshot.current_player.is_computer();

        // Wakeups that changed nothing are not re-broadcast.
        if last_broadcast.as_ref() != Some(&snapshot) {
            broadcaster.broadcast_state(snapshot.clone()).await;
            last_broadcast = Some(snapshot);
        }

        if is_game_over {
            break;
        }

        if is_computer_turn {
            if let Err(e) = play_computer_turn(&session_state).await {
                log!("Abandoning game: {}", e);
                session_state.game_state.lock().await.abandon();
            }
        } else {
            session_state.turn_notify.notified().await;
        }
    }

    let notification = build_game_over_notification(&session_state).await;
    log!("Game over: {}", notification.message);
    broadcaster.broadcast_game_over(notification.clone()).await;
    notification
}

/// A move computed for a board that has since changed is dropped, not an
/// error. Errors mean the computer cannot move at all.
async fn play_computer_turn(session_state: &TicTacToeSessionState) -> Result<(), String> {
    tokio::time::sleep(session_state.thinking_delay).await;

    let board = session_state.game_state.lock().await.board;

    let calculated_move = tokio::task::spawn_blocking(move || {
        debug_log!("Candidate scores: {:?}", rank_moves(&board));
        best_move(&board)
    })
    .await;

    let index = match calculated_move {
        Ok(Some(index)) => index,
        Ok(None) => return Err("No empty cell left for the computer".to_string()),
        Err(e) => return Err(format!("Move search task failed: {}", e)),
    };

    let mut game_state = session_state.game_state.lock().await;
    if game_state.board != board || !game_state.is_computer_turn() {
        debug_log!("Board changed while thinking, discarding move {}", index);
        return Ok(());
    }

    game_state
        .place_mark(Player::COMPUTER, index)
        .map_err(|e| format!("Computer move {} rejected: {}", index, e))?;
    log!("Computer plays cell {}", index);
    Ok(())
}

async fn build_game_over_notification(
    session_state: &TicTacToeSessionState,
) -> GameOverNotification {
    let game_state = session_state.game_state.lock().await;

    GameOverNotification {
        board: game_state.board,
        status: game_state.status,
        winner: game_state.status.winner(),
        winning_line: game_state.winning_line(),
        message: game_state.status_message(),
    }
}

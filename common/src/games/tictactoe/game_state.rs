use super::board::{Board, CELL_COUNT};
use super::settings::FirstPlayer;
use super::types::{GameStatus, Line, Move, Player};
use super::win_detector::{is_full, winning_line};

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<Move>,
    first_player: FirstPlayer,
}

impl TicTacToeGameState {
    pub fn new(first_player: FirstPlayer) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player.player(),
            status: GameStatus::InProgress,
            last_move: None,
            first_player,
        }
    }

    pub fn place_mark(&mut self, player: Player, index: Move) -> Result<(), String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if player != self.current_player {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !self.board.is_empty_at(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(index, player);
        self.last_move = Some(index);

        self.check_game_over(player);

        if !self.status.is_over() {
            self.current_player = player.opponent();
        }

        Ok(())
    }

    fn check_game_over(&mut self, mover: Player) {
        if winning_line(&self.board, mover).is_some() {
            self.status = GameStatus::won_by(mover);
            return;
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    /// Ends a game that cannot continue. Finished games are left as they are.
    pub fn abandon(&mut self) {
        if !self.status.is_over() {
            self.status = GameStatus::Abandoned;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.first_player);
    }

    pub fn first_player(&self) -> FirstPlayer {
        self.first_player
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.status.is_over() && self.current_player.is_computer()
    }

    pub fn available_moves(&self) -> Vec<Move> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.board.available_moves()
    }

    pub fn winning_line(&self) -> Option<Line> {
        let winner = self.status.winner()?;
        winning_line(&self.board, winner)
    }

    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress if self.current_player.is_computer() => {
                format!("Computer's turn ({})", self.current_player)
            }
            GameStatus::InProgress => format!("Your turn ({})", self.current_player),
            GameStatus::OWon => "Computer wins! 😢".to_string(),
            GameStatus::XWon => format!("Player {} wins! 🎉", Player::HUMAN),
            GameStatus::Draw => "It's a draw!".to_string(),
            GameStatus::Abandoned => "Game abandoned".to_string(),
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(FirstPlayer::default())
    }
}

use super::board::{Board, LINES};
use super::types::{Line, Mark, Player};

pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    let mark = player.mark();
    LINES
        .iter()
        .find(|line| line.iter().all(|&index| board.cells()[index] == mark))
        .copied()
}

pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}

/// The computer is checked first, so on a malformed board showing two
/// completed lines `O` is reported.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::COMPUTER, Player::HUMAN]
        .into_iter()
        .find(|&player| has_won(board, player))
}

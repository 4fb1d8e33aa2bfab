use super::board::{Board, CELL_COUNT};
use super::types::{Move, Player};
use super::win_detector::{has_won, is_full};

const WIN_SCORE: i32 = 10;

/// Picks the computer's move by exhaustive minimax.
///
/// Candidates are tried in index order and only a strictly better score
/// replaces the current pick, so the lowest index wins ties. Returns `None`
/// when the board has no empty cell. The caller's board is never modified.
pub fn best_move(board: &Board) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;

    for (index, score) in rank_moves(board) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}

/// Minimax score of every computer move available on `board`, in index order.
pub fn rank_moves(board: &Board) -> Vec<(Move, i32)> {
    let mut scratch = *board;
    let mut ranked = Vec::new();

    for index in 0..CELL_COUNT {
        if !scratch.is_empty_at(index) {
            continue;
        }

        scratch.place(index, Player::COMPUTER);
        let score = minimax(&mut scratch, 0, Player::HUMAN);
        scratch.clear(index);

        ranked.push((index, score));
    }

    ranked
}

fn terminal_score(board: &Board, depth: i32) -> Option<i32> {
    if has_won(board, Player::COMPUTER) {
        return Some(WIN_SCORE - depth);
    }
    if has_won(board, Player::HUMAN) {
        return Some(depth - WIN_SCORE);
    }
    if is_full(board) {
        return Some(0);
    }
    None
}

fn minimax(board: &mut Board, depth: i32, side_to_move: Player) -> i32 {
    if let Some(score) = terminal_score(board, depth) {
        return score;
    }

    let maximizing = side_to_move.is_computer();
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if !board.is_empty_at(index) {
            continue;
        }

        board.place(index, side_to_move);
        let eval = minimax(board, depth + 1, side_to_move.opponent());
        board.clear(index);

        best = if maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}

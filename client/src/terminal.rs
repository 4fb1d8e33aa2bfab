use common::games::tictactoe::{BOARD_SIZE, Board, Line, Mark};
use common::session::{GameBroadcaster, GameOverNotification, GameStateUpdate};

/// Draws the board with empty cells numbered 1-9. Cells of `highlight`
/// are bracketed.
pub fn render_board(board: &Board, highlight: Option<Line>) -> String {
    let rows: Vec<String> = board
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * BOARD_SIZE + col;
                    let highlighted = highlight.is_some_and(|line| line.contains(&index));
                    render_cell(index, mark, highlighted)
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

fn render_cell(index: usize, mark: Mark, highlighted: bool) -> String {
    match mark {
        Mark::Empty => format!(" {} ", index + 1),
        _ if highlighted => format!("[{}]", mark.symbol()),
        _ => format!(" {} ", mark.symbol()),
    }
}

#[derive(Clone, Default)]
pub struct TerminalBroadcaster;

impl TerminalBroadcaster {
    pub fn new() -> Self {
        Self
    }
}

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, state: GameStateUpdate) {
        // The final position is printed with the game-over notification.
        if state.status.is_over() {
            return;
        }
        println!("\n{}\n{}", render_board(&state.board, None), state.message);
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        println!(
            "\n{}\n{}\nEnter r to play again or q to quit.",
            render_board(&notification.board, notification.winning_line),
            notification.message
        );
    }
}

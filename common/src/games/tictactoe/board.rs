use super::types::{Line, Mark, Move, Player};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Rows, then columns, then the two diagonals.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from nine characters: `X`, `O`, anything else is empty.
    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &str) -> Self {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (cell, ch) in cells.iter_mut().zip(pattern.chars()) {
            *cell = match ch {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: Move) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: Move) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Panics if `index` is off the board; callers pick indices from
    /// `empty_cells` or validate them first.
    pub fn place(&mut self, index: Move, player: Player) {
        self.cells[index] = player.mark();
    }

    pub fn clear(&mut self, index: Move) {
        self.cells[index] = Mark::Empty;
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
    }

    pub fn available_moves(&self) -> Vec<Move> {
        self.empty_cells().collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.count(Mark::Empty), 9);
    }

    #[test]
    fn test_place_and_clear_restore_cell() {
        let mut board = Board::new();
        board.place(4, Player::O);
        assert_eq!(board.get(4), Some(Mark::O));
        assert!(!board.is_empty_at(4));
        board.clear(4);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_at(9));
    }

    #[test]
    fn test_available_moves_skip_occupied_cells() {
        let board = Board::from_pattern("XO..X...O");
        assert_eq!(board.available_moves(), vec![2, 3, 5, 6, 7]);
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_rows_are_row_major() {
        let board = Board::from_pattern("X...O...X");
        let rows: Vec<&[Mark]> = board.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], &[Mark::X, Mark::Empty, Mark::Empty]);
        assert_eq!(rows[1], &[Mark::Empty, Mark::O, Mark::Empty]);
        assert_eq!(rows[2], &[Mark::Empty, Mark::Empty, Mark::X]);
    }

    #[test]
    fn test_lines_cover_every_cell() {
        for cell in 0..CELL_COUNT {
            assert!(LINES.iter().any(|line| line.contains(&cell)));
        }
    }
}

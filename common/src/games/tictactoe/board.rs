use std::fmt;

use super::types::{BOARD_SIZE, Mark, Player, Position};

/// Fixed 3x3 grid. `Copy`, so every caller works on its own snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of `'X'`, `'O'` and any other char for empty.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(BOARD_SIZE).enumerate() {
                board.cells[row][col] = match ch {
                    'X' | 'x' => Mark::X,
                    'O' | 'o' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        board
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.is_on_board() && self.get(pos) == Mark::Empty
    }

    /// Puts `player`'s mark on `pos`. The cell must be empty.
    pub fn place(&mut self, pos: Position, player: Player) {
        debug_assert_eq!(self.get(pos), Mark::Empty);
        self.cells[pos.row][pos.col] = player.mark();
    }

    /// Undoes a `place`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn mark_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.empty_cells().len()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let line: Vec<String> = cells
                .iter()
                .map(|cell| format!(" {} ", cell.symbol()))
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

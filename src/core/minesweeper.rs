//! Minesweeper board generation.
//!
//! Produces the classic Discord spoiler-tag minesweeper: every cell is
//! hidden behind `||`, mines are an emoji, and safe cells show the count of
//! adjacent mines as a keycap digit.

use crate::errors::{Error, Result};
use rand::RngCore;
use rand::seq::index::sample;

/// Largest board dimension accepted in either direction.
pub const MAX_DIMENSION: u8 = 12;

/// Keycap digits for 0-8 adjacent mines.
const DIGITS: [&str; 9] = [
    "0️⃣", "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣",
];

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A mine
    Mine,
    /// A safe cell with this many adjacent mines
    Adjacent(u8),
}

/// A generated minesweeper board.
#[derive(Debug, Clone)]
pub struct Board {
    rows: u8,
    columns: u8,
    cells: Vec<Cell>,
}

/// Generates a board with `mines` mines placed uniformly at random.
///
/// # Errors
/// Rejects dimensions outside `1..=MAX_DIMENSION` and mine counts that
/// leave no safe cell.
pub fn generate(rng: &mut dyn RngCore, rows: u8, columns: u8, mines: u16) -> Result<Board> {
    if rows == 0 || columns == 0 || rows > MAX_DIMENSION || columns > MAX_DIMENSION {
        return Err(Error::InvalidInput(format!(
            "Rows and columns must be between 1 and {MAX_DIMENSION}."
        )));
    }
    let cell_count = usize::from(rows) * usize::from(columns);
    if mines == 0 {
        return Err(Error::InvalidInput("Place at least one mine!".to_string()));
    }
    if usize::from(mines) >= cell_count {
        return Err(Error::InvalidInput("❌ Too many mines! Try fewer.".to_string()));
    }

    let mut cells = vec![Cell::Adjacent(0); cell_count];
    for index in sample(rng, cell_count, usize::from(mines)) {
        cells[index] = Cell::Mine;
    }

    let mut board = Board {
        rows,
        columns,
        cells,
    };
    board.count_neighbors();
    Ok(board)
}

impl Board {
    /// Cell at (row, column); out-of-range coordinates yield `None`.
    #[must_use]
    pub fn cell(&self, row: u8, column: u8) -> Option<Cell> {
        if row < self.rows && column < self.columns {
            self.cells
                .get(usize::from(row) * usize::from(self.columns) + usize::from(column))
                .copied()
        } else {
            None
        }
    }

    /// Number of mines on the board.
    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Mine).count()
    }

    fn count_neighbors(&mut self) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let index = usize::from(row) * usize::from(self.columns) + usize::from(column);
                if self.cells[index] == Cell::Mine {
                    continue;
                }
                let mut adjacent = 0;
                for dr in -1i16..=1 {
                    for dc in -1i16..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let nr = i16::from(row) + dr;
                        let nc = i16::from(column) + dc;
                        if nr < 0 || nc < 0 {
                            continue;
                        }
                        #[allow(clippy::cast_sign_loss)] // checked non-negative above
                        if self.cell(nr as u8, nc as u8) == Some(Cell::Mine) {
                            adjacent += 1;
                        }
                    }
                }
                self.cells[index] = Cell::Adjacent(adjacent);
            }
        }
    }

    /// Renders the board as spoiler-tagged emoji text.
    ///
    /// `mine_emote` replaces the default 💣; `spaces` inserts a space
    /// between cells.
    #[must_use]
    pub fn render(&self, mine_emote: &str, spaces: bool) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            if row > 0 {
                out.push('\n');
            }
            for column in 0..self.columns {
                if spaces && column > 0 {
                    out.push(' ');
                }
                // cell() is always Some inside the board bounds
                let piece = match self.cell(row, column) {
                    Some(Cell::Mine) | None => mine_emote,
                    Some(Cell::Adjacent(n)) => DIGITS[usize::from(n.min(8))],
                };
                out.push_str("||");
                out.push_str(piece);
                out.push_str("||");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_rejects_bad_dimensions() {
        let mut rng = rand::rng();
        assert!(generate(&mut rng, 0, 5, 1).is_err());
        assert!(generate(&mut rng, 5, 0, 1).is_err());
        assert!(generate(&mut rng, 13, 5, 1).is_err());
    }

    #[test]
    fn test_rejects_too_many_mines() {
        let mut rng = rand::rng();
        assert!(generate(&mut rng, 3, 3, 9).is_err());
        assert!(generate(&mut rng, 3, 3, 50).is_err());
        assert!(generate(&mut rng, 3, 3, 0).is_err());
    }

    #[test]
    fn test_mine_count_is_exact() {
        let mut rng = rand::rng();
        let board = generate(&mut rng, 8, 8, 10).unwrap();
        assert_eq!(board.mine_count(), 10);
    }

    #[test]
    fn test_adjacency_counts_are_consistent() {
        let mut rng = rand::rng();
        let board = generate(&mut rng, 6, 7, 9).unwrap();

        for row in 0..6 {
            for column in 0..7 {
                let Some(Cell::Adjacent(n)) = board.cell(row, column) else {
                    continue;
                };
                let mut expected = 0;
                for dr in -1i16..=1 {
                    for dc in -1i16..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let nr = i16::from(row) + dr;
                        let nc = i16::from(column) + dc;
                        if nr >= 0
                            && nc >= 0
                            && board.cell(nr as u8, nc as u8) == Some(Cell::Mine)
                        {
                            expected += 1;
                        }
                    }
                }
                assert_eq!(n, expected, "bad count at ({row}, {column})");
            }
        }
    }

    #[test]
    fn test_render_shapes() {
        let mut rng = rand::rng();
        let board = generate(&mut rng, 2, 3, 2).unwrap();

        let rendered = board.render("💣", false);
        assert_eq!(rendered.lines().count(), 2);
        assert_eq!(rendered.matches("||").count(), 2 * 3 * 2);

        let spaced = board.render("💥", true);
        assert!(spaced.lines().all(|line| line.matches(' ').count() == 2));
    }

    #[test]
    fn test_single_cell_board_is_impossible() {
        // 1x1 with one mine leaves no safe cell
        let mut rng = rand::rng();
        assert!(generate(&mut rng, 1, 1, 1).is_err());
    }
}

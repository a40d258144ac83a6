use super::error::TicTacToeError;
use super::types::Mark;

pub const SIDE: usize = 3;
pub const CELL_COUNT: usize = SIDE * SIDE;

/// 3x3 board stored row-major: `index = row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), TicTacToeError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(TicTacToeError::OutOfBounds(index))?;
        if !cell.is_empty() {
            return Err(TicTacToeError::CellOccupied(index));
        }
        *cell = mark;
        Ok(())
    }

    /// Copy of this board with `mark` written at `index`. The caller
    /// guarantees the index is in range.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(SIDE)
    }

    pub fn index_of(row: usize, col: usize) -> Option<usize> {
        if row < SIDE && col < SIDE {
            Some(row * SIDE + col)
        } else {
            None
        }
    }
}

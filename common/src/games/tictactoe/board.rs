use super::types::{CELL_COUNT, Mark};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from raw cells without checking any placement
    /// invariant.
    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied()
    }

    pub fn is_empty_cell(&self, cell: usize) -> bool {
        self.get(cell) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub(crate) fn set(&mut self, cell: usize, mark: Mark) {
        self.cells[cell] = mark;
    }

    pub(crate) fn clear(&mut self, cell: usize) {
        self.cells[cell] = Mark::Empty;
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(get_available_moves(&board), (0..CELL_COUNT).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_are_ascending() {
        let mut board = Board::new();
        board.set(4, Mark::X);
        board.set(0, Mark::O);
        assert_eq!(get_available_moves(&board), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_cell(9));
    }
}

pub const CELL_COUNT: usize = 9;

/// The 3 rows, 3 columns and 2 diagonals of the 3x3 grid, as cell
/// index triples. Cells are numbered 0-8 in row-major order.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
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

    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    /// Indices of all empty cells, in ascending order. The ordering
    /// fixes the search iteration order of the move selector and
    /// therefore its tie-breaking.
    pub fn empty_cells(&self) -> Vec<usize> {
        let mut cells = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                cells.push(index);
            }
        }
        cells
    }

    pub fn has_winner(&self, mark: Mark) -> bool {
        self.winning_line(mark).is_some()
    }

    /// The first completed win pattern for `mark`, if any. In a valid
    /// terminal board at most one pattern can be completed.
    pub fn winning_line(&self, mark: Mark) -> Option<[usize; 3]> {
        if mark == Mark::Empty {
            return None;
        }
        for pattern in WIN_PATTERNS {
            let [a, b, c] = pattern;
            if self.cells[a] == mark && self.cells[b] == mark && self.cells[c] == mark {
                return Some(pattern);
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        if index >= CELL_COUNT {
            return false;
        }
        self.cells[index] == Mark::Empty
    }

    /// Writes `mark` into the cell. Callers are responsible for
    /// bounds and emptiness checks; the validated entry points live
    /// in the game layer.
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

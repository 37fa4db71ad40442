/// (row, column) coordinate of a matrix entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(usize, usize);

impl Cell {
    pub const fn row(&self) -> usize {
        self.0
    }
    pub const fn col(&self) -> usize {
        self.1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self(row, col)
    }
}
impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.0, cell.1)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

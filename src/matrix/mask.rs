use super::cell::Cell;

/// boolean grid with the same shape as a CostMatrix.
/// the solver keeps two of these: one for starred zeros,
/// one for zeros primed during the current phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    rows: usize,
    cols: usize,
    bits: Vec<bool>,
}

impl Mask {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bits: vec![false; rows * cols],
        }
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, cell: Cell) -> bool {
        self.bits[self.index(cell)]
    }
    pub fn set(&mut self, cell: Cell) {
        let i = self.index(cell);
        self.bits[i] = true;
    }
    pub fn unset(&mut self, cell: Cell) {
        let i = self.index(cell);
        self.bits[i] = false;
    }
    pub fn clear(&mut self) {
        self.bits.iter_mut().for_each(|b| *b = false);
    }

    /// first marked column in the given row
    pub fn in_row(&self, row: usize) -> Option<usize> {
        self.row(row).next()
    }
    /// first marked row in the given column
    pub fn in_col(&self, col: usize) -> Option<usize> {
        self.col(col).next()
    }
    /// marked columns of a row, ascending
    pub fn row(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(move |&c| self.get(Cell::from((row, c))))
    }
    /// marked rows of a column, ascending
    pub fn col(&self, col: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.rows).filter(move |&r| self.get(Cell::from((r, col))))
    }
    /// every marked cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(move |(i, _)| Cell::from((i / self.cols, i % self.cols)))
    }
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(cell.row() < self.rows, "row {} out of bounds", cell.row());
        assert!(cell.col() < self.cols, "col {} out of bounds", cell.col());
        cell.row() * self.cols + cell.col()
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                match self.get(Cell::from((r, c))) {
                    true => write!(f, "*")?,
                    false => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_unset() {
        let ref mut mask = Mask::new(2, 3);
        mask.set(Cell::from((1, 2)));
        assert!(mask.get(Cell::from((1, 2))));
        assert_eq!(mask.count(), 1);
        mask.unset(Cell::from((1, 2)));
        assert!(!mask.get(Cell::from((1, 2))));
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn finds_first_in_row_and_col() {
        let ref mut mask = Mask::new(3, 3);
        mask.set(Cell::from((1, 2)));
        mask.set(Cell::from((1, 0)));
        mask.set(Cell::from((2, 0)));
        assert_eq!(mask.in_row(1), Some(0));
        assert_eq!(mask.in_row(0), None);
        assert_eq!(mask.in_col(0), Some(1));
        assert_eq!(mask.in_col(1), None);
        assert_eq!(mask.col(0).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn cells_are_row_major() {
        let ref mut mask = Mask::new(2, 2);
        mask.set(Cell::from((1, 0)));
        mask.set(Cell::from((0, 1)));
        let cells = mask.cells().collect::<Vec<_>>();
        assert_eq!(cells, vec![Cell::from((0, 1)), Cell::from((1, 0))]);
    }

    #[test]
    fn clear_resets_everything() {
        let ref mut mask = Mask::new(2, 2);
        mask.set(Cell::from((0, 0)));
        mask.set(Cell::from((1, 1)));
        mask.clear();
        assert_eq!(*mask, Mask::new(2, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn rejects_out_of_bounds() {
        Mask::new(2, 2).get(Cell::from((2, 0)));
    }
}

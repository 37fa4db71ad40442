use crate::matrix::Cell;

/// rows and columns excluded from the search for uncovered zeros.
/// covering a covered line or uncovering an uncovered one means
/// the state machine is broken, so both panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl Cover {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![false; rows],
            cols: vec![false; cols],
        }
    }

    pub fn is_row_covered(&self, row: usize) -> bool {
        self.rows[row]
    }
    pub fn is_col_covered(&self, col: usize) -> bool {
        self.cols[col]
    }
    pub fn is_uncovered(&self, cell: Cell) -> bool {
        !self.is_row_covered(cell.row()) && !self.is_col_covered(cell.col())
    }

    pub fn cover_row(&mut self, row: usize) {
        assert!(!self.rows[row], "row {} is already covered", row);
        self.rows[row] = true;
    }
    pub fn cover_col(&mut self, col: usize) {
        assert!(!self.cols[col], "column {} is already covered", col);
        self.cols[col] = true;
    }
    pub fn uncover_col(&mut self, col: usize) {
        assert!(self.cols[col], "column {} is not covered", col);
        self.cols[col] = false;
    }
    pub fn clear(&mut self) {
        self.rows.iter_mut().for_each(|b| *b = false);
        self.cols.iter_mut().for_each(|b| *b = false);
    }

    /// covered rows plus covered columns
    pub fn count(&self) -> usize {
        self.rows.iter().chain(self.cols.iter()).filter(|b| **b).count()
    }
    pub fn covered_cols(&self) -> usize {
        self.cols.iter().filter(|b| **b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_and_uncovers() {
        let ref mut cover = Cover::new(2, 3);
        cover.cover_col(1);
        cover.cover_row(0);
        assert!(cover.is_col_covered(1));
        assert!(cover.is_row_covered(0));
        assert!(!cover.is_uncovered(Cell::from((1, 1))));
        assert!(cover.is_uncovered(Cell::from((1, 2))));
        assert_eq!(cover.count(), 2);
        cover.uncover_col(1);
        assert_eq!(cover.covered_cols(), 0);
        cover.clear();
        assert_eq!(cover.count(), 0);
    }

    #[test]
    #[should_panic(expected = "already covered")]
    fn double_covered_column_panics() {
        let ref mut cover = Cover::new(2, 2);
        cover.cover_col(0);
        cover.cover_col(0);
    }

    #[test]
    #[should_panic(expected = "already covered")]
    fn double_covered_row_panics() {
        let ref mut cover = Cover::new(2, 2);
        cover.cover_row(1);
        cover.cover_row(1);
    }

    #[test]
    #[should_panic(expected = "not covered")]
    fn uncovering_free_column_panics() {
        Cover::new(2, 2).uncover_col(0);
    }
}

use super::cover::Cover;
use crate::Cost;
use crate::matrix::Cell;
use crate::matrix::CostMatrix;

/// dual variables of the assignment problem, one per row and column.
/// the solver keeps reduced[r][c] = cost[r][c] - row[r] - col[c]
/// over active rows, so once every column holds a starred zero the
/// dual objective equals the cost of the assignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Potential {
    rows: Vec<Cost>,
    cols: Vec<Cost>,
}

impl Potential {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![0.; rows],
            cols: vec![0.; cols],
        }
    }
    pub fn row(&self, row: usize) -> Cost {
        self.rows[row]
    }
    pub fn col(&self, col: usize) -> Cost {
        self.cols[col]
    }

    /// column minima removed by the reduction step
    pub fn absorb(&mut self, minima: &[Cost]) {
        assert!(minima.len() == self.cols.len(), "one minimum per column");
        self.cols
            .iter_mut()
            .zip(minima)
            .for_each(|(v, min)| *v += min);
    }
    /// mirror of the adjustment step: uncovered rows rise by h,
    /// covered columns fall by h
    pub fn shift(&mut self, h: Cost, cover: &Cover, active: usize) {
        (0..active)
            .filter(|&r| !cover.is_row_covered(r))
            .for_each(|r| self.rows[r] += h);
        (0..self.cols.len())
            .filter(|&c| cover.is_col_covered(c))
            .for_each(|c| self.cols[c] -= h);
    }

    /// reduced cost of a cell relative to the original matrix
    pub fn reduced(&self, original: &CostMatrix, cell: Cell) -> Cost {
        original[cell] - self.rows[cell.row()] - self.cols[cell.col()]
    }
    /// dual objective. the virtual row stands in for one
    /// copy of itself per column it may claim.
    pub fn dual(&self, matrix: &CostMatrix) -> Cost {
        let real = self.rows[..matrix.real()].iter().sum::<Cost>();
        let diagonal = self.rows[matrix.diagonal()] * matrix.capacity() as Cost;
        let cols = self.cols.iter().sum::<Cost>();
        real + diagonal + cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorbs_minima() {
        let ref mut potential = Potential::new(2, 3);
        potential.absorb(&[1., 2., 3.]);
        assert_eq!(potential.col(2), 3.);
        assert_eq!(potential.row(0), 0.);
    }

    #[test]
    fn shifts_with_cover() {
        let ref mut potential = Potential::new(3, 2);
        let ref mut cover = Cover::new(3, 2);
        cover.cover_row(0);
        cover.cover_col(1);
        potential.shift(0.5, cover, 3);
        assert_eq!(potential.row(0), 0.);
        assert_eq!(potential.row(1), 0.5);
        assert_eq!(potential.row(2), 0.5);
        assert_eq!(potential.col(0), 0.);
        assert_eq!(potential.col(1), -0.5);
    }

    #[test]
    fn dual_weights_diagonal_by_capacity() {
        let ref matrix = CostMatrix::try_from(vec![vec![1., 1., 1.], vec![0., 0., 0.]]).unwrap();
        let ref mut potential = Potential::new(2, 3);
        potential.absorb(&[1., 1., 1.]);
        let ref cover = Cover::new(2, 3);
        potential.shift(1., cover, 2);
        // real row 1 + diagonal 1 × capacity 2 + columns 3
        assert_eq!(potential.dual(matrix), 6.);
    }
}

use crate::Cost;
use crate::matrix::Cell;
use crate::matrix::CostMatrix;
use crate::matrix::Mask;
use serde::Deserialize;
use serde::Serialize;

/// result of a solve. every real row holds a distinct column;
/// whatever columns remain are matched to the diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    matches: Vec<usize>,
    diagonal: Vec<usize>,
}

impl Assignment {
    /// column of a real row
    pub fn column(&self, row: usize) -> Option<usize> {
        self.matches.get(row).copied()
    }
    /// (real row, column) pairs in row order
    pub fn matches(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.matches.iter().copied().enumerate()
    }
    /// columns claimed by the virtual row, ascending
    pub fn diagonal(&self) -> &[usize] {
        &self.diagonal
    }
    /// number of real rows
    pub fn len(&self) -> usize {
        self.matches.len()
    }
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// total price of this assignment under the given matrix,
    /// diagonal columns charged at the virtual row's cost
    pub fn cost(&self, matrix: &CostMatrix) -> Cost {
        assert!(matrix.real() == self.len(), "assignment shape mismatch");
        let real = self
            .matches()
            .map(|(r, c)| matrix[Cell::from((r, c))])
            .sum::<Cost>();
        let diagonal = self
            .diagonal
            .iter()
            .map(|&c| matrix[Cell::from((matrix.diagonal(), c))])
            .sum::<Cost>();
        real + diagonal
    }
}

/// (row → column picks, column count). columns nobody
/// picked go to the diagonal.
impl From<(Vec<usize>, usize)> for Assignment {
    fn from((matches, cols): (Vec<usize>, usize)) -> Self {
        let ref mut taken = vec![false; cols];
        for &c in matches.iter() {
            assert!(c < cols, "column {} out of bounds", c);
            assert!(!taken[c], "column {} matched twice", c);
            taken[c] = true;
        }
        let diagonal = (0..cols).filter(|&c| !taken[c]).collect();
        Self { matches, diagonal }
    }
}

/// read off a complete star mask, virtual row last
impl From<&Mask> for Assignment {
    fn from(stars: &Mask) -> Self {
        let matches = (0..stars.rows().saturating_sub(1))
            .map(|r| stars.in_row(r).expect("every real row holds a star"))
            .collect::<Vec<_>>();
        Self::from((matches, stars.cols()))
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, c) in self.matches() {
            writeln!(f, "{:>6} -> {}", r, c)?;
        }
        write!(f, "{:>6} -> {:?}", "diag", self.diagonal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_goes_to_diagonal() {
        let assignment = Assignment::from((vec![2, 0], 4));
        assert_eq!(assignment.column(0), Some(2));
        assert_eq!(assignment.column(1), Some(0));
        assert_eq!(assignment.column(2), None);
        assert_eq!(assignment.diagonal(), &[1, 3]);
    }

    #[test]
    fn prices_diagonal_columns() {
        let ref matrix = CostMatrix::try_from(vec![
            vec![1., 2., 3.],
            vec![2., 1., 3.],
            vec![0.5, 0.25, 4.],
        ])
        .unwrap();
        let assignment = Assignment::from((vec![0, 2], 3));
        assert_eq!(assignment.cost(matrix), 1. + 3. + 0.25);
    }

    #[test]
    #[should_panic(expected = "matched twice")]
    fn rejects_shared_columns() {
        Assignment::from((vec![1, 1], 3));
    }

    #[test]
    fn reads_star_mask() {
        let ref mut stars = Mask::new(3, 4);
        stars.set(Cell::from((0, 3)));
        stars.set(Cell::from((1, 0)));
        stars.set(Cell::from((2, 1)));
        stars.set(Cell::from((2, 2)));
        let assignment = Assignment::from(&*stars);
        assert_eq!(assignment.matches().collect::<Vec<_>>(), vec![(0, 3), (1, 0)]);
        assert_eq!(assignment.diagonal(), &[1, 2]);
    }

    #[test]
    fn serializes_as_json() {
        let assignment = Assignment::from((vec![1], 3));
        let json = serde_json::to_string(&assignment).unwrap();
        assert_eq!(json, r#"{"matches":[1],"diagonal":[0,2]}"#);
        assert_eq!(serde_json::from_str::<Assignment>(&json).unwrap(), assignment);
    }
}

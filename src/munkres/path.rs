use crate::matrix::Cell;
use crate::matrix::Mask;

/// alternating sequence prime, star, prime, ..., prime.
/// built from the primed zero that ended the search: each prime
/// leads to the star in its column, each star to the prime in its
/// row, until a prime lands in a column without a star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Cell>);

impl Path {
    pub fn primes(&self) -> impl Iterator<Item = &Cell> {
        self.0.iter().step_by(2)
    }
    pub fn stars(&self) -> impl Iterator<Item = &Cell> {
        self.0.iter().skip(1).step_by(2)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<(Cell, &Mask, &Mask)> for Path {
    fn from((start, stars, primes): (Cell, &Mask, &Mask)) -> Self {
        let mut path = vec![start];
        let mut prime = start;
        while let Some(row) = stars.in_col(prime.col()) {
            let star = Cell::from((row, prime.col()));
            let col = primes
                .in_row(row)
                .expect("starred row on an augmenting path holds a prime");
            prime = Cell::from((row, col));
            assert!(!path.contains(&prime), "augmenting path revisits {}", prime);
            path.push(star);
            path.push(prime);
        }
        Self(path)
    }
}

use super::assignment::Assignment;
use super::cover::Cover;
use super::path::Path;
use super::potential::Potential;
use super::step::Step;
use crate::Cost;
use crate::matrix::Cell;
use crate::matrix::CostMatrix;
use crate::matrix::Mask;

/// Kuhn-Munkres over a cost matrix whose last row is the diagonal.
///
/// Real rows may hold one star each. The virtual row may hold one star
/// per column up to its capacity, m - (n - 1), which is the number of
/// columns left unmatched once every real row holds one. The solve ends
/// when every column holds a star, so the columns the diagonal absorbs
/// are priced as well.
///
/// # Algorithm
///
/// 1. Reduce: subtract each column's minimum
/// 2. Mark: star isolated zeros
/// 3. Cover: cover every starred column; stop if all are covered
/// 4. Search: prime uncovered zeros until one starts an augmenting path
/// 5. Augment: flip stars and primes along the path, back to 3
/// 6. Adjust: shift costs by the smallest uncovered entry, back to 4
pub struct Munkres {
    original: CostMatrix,
    matrix: CostMatrix,
    stars: Mask,
    primes: Mask,
    covers: Cover,
    potential: Potential,
    augmentations: usize,
    adjustments: usize,
}

impl From<CostMatrix> for Munkres {
    fn from(matrix: CostMatrix) -> Self {
        let (n, m) = (matrix.rows(), matrix.cols());
        Self {
            original: matrix.clone(),
            matrix,
            stars: Mask::new(n, m),
            primes: Mask::new(n, m),
            covers: Cover::new(n, m),
            potential: Potential::new(n, m),
            augmentations: 0,
            adjustments: 0,
        }
    }
}

impl Munkres {
    /// run the state machine to completion and read off the assignment
    pub fn compute(mut self) -> Assignment {
        self.run();
        self.assignment()
    }

    pub fn run(&mut self) -> &mut Self {
        let mut step = Step::Reduce;
        while step != Step::Done {
            log::trace!("{}", step);
            step = self.step(step);
        }
        log::debug!(
            "{:<32}{}x{} after {} augmentations, {} adjustments",
            "solved assignment",
            self.matrix.rows(),
            self.matrix.cols(),
            self.augmentations,
            self.adjustments,
        );
        self
    }

    /// execute a single step, returning its successor
    pub fn step(&mut self, step: Step) -> Step {
        match step {
            Step::Reduce => self.reduce(),
            Step::Mark => self.mark(),
            Step::Cover => self.cover(),
            Step::Search => self.search(),
            Step::Augment(start) => self.augment(start),
            Step::Adjust => self.adjust(),
            Step::Done => Step::Done,
        }
    }

    pub fn assignment(&self) -> Assignment {
        assert!(self.is_complete(), "assignment read before completion");
        Assignment::from(&self.stars)
    }
    pub fn original(&self) -> &CostMatrix {
        &self.original
    }
    pub fn reduced(&self) -> &CostMatrix {
        &self.matrix
    }
    pub fn stars(&self) -> &Mask {
        &self.stars
    }
    pub fn primes(&self) -> &Mask {
        &self.primes
    }
    pub fn covers(&self) -> &Cover {
        &self.covers
    }
    pub fn potential(&self) -> &Potential {
        &self.potential
    }
    /// primal cost minus dual objective. zero (up to rounding) once complete.
    pub fn gap(&self) -> Cost {
        self.assignment().cost(&self.original) - self.potential.dual(&self.original)
    }

    /// every real row holds a star and the diagonal is at capacity
    pub fn is_complete(&self) -> bool {
        (0..self.matrix.real()).all(|r| self.stars.in_row(r).is_some())
            && self.stars.row(self.matrix.diagonal()).count() == self.matrix.capacity()
    }
    /// no column holds two stars, no real row holds two stars,
    /// the diagonal holds no more stars than its capacity
    pub fn is_exclusive(&self) -> bool {
        (0..self.stars.cols()).all(|c| self.stars.col(c).count() <= 1)
            && (0..self.matrix.real()).all(|r| self.stars.row(r).count() <= 1)
            && self.stars.row(self.matrix.diagonal()).count() <= self.matrix.capacity()
    }

    /// raw zero pattern test used before any star is placed.
    /// the diagonal is always independent; a real zero only when
    /// it is alone in both its row and its column.
    pub fn is_independent(&self, cell: Cell) -> bool {
        if self.matrix.is_diagonal(cell.row()) {
            return true;
        }
        let alone_in_row = self
            .matrix
            .row(cell.row())
            .iter()
            .enumerate()
            .filter(|(c, _)| *c != cell.col())
            .all(|(_, x)| *x != 0.);
        let alone_in_col = self
            .matrix
            .col(cell.col())
            .enumerate()
            .filter(|(r, _)| *r != cell.row())
            .all(|(_, x)| x != 0.);
        alone_in_row && alone_in_col
    }

    /// star a zero if neither its row nor its column forbids it
    pub fn star(&mut self, cell: Cell) -> bool {
        let row_free = match self.matrix.is_diagonal(cell.row()) {
            true => self.stars.row(cell.row()).count() < self.matrix.capacity(),
            false => self.stars.in_row(cell.row()).is_none(),
        };
        let col_free = self.stars.in_col(cell.col()).is_none();
        if row_free && col_free {
            self.stars.set(cell);
            debug_assert!(self.is_exclusive(), "star at {} broke exclusivity", cell);
            true
        } else {
            false
        }
    }
    pub fn prime(&mut self, cell: Cell) {
        self.primes.set(cell);
    }
    /// clear every prime and every cover
    pub fn reset(&mut self) {
        self.primes.clear();
        self.covers.clear();
    }

    /// step 1
    pub fn reduce(&mut self) -> Step {
        let ref minima = self.matrix.reduce();
        self.potential.absorb(minima);
        Step::Mark
    }

    /// step 2
    pub fn mark(&mut self) -> Step {
        let candidates = self
            .matrix
            .zeros()
            .filter(|zero| self.is_independent(*zero))
            .collect::<Vec<_>>();
        for zero in candidates {
            self.star(zero);
        }
        Step::Cover
    }

    /// step 3
    pub fn cover(&mut self) -> Step {
        for star in self.stars.cells() {
            self.covers.cover_col(star.col());
        }
        match self.is_complete() {
            true => Step::Done,
            false => Step::Search,
        }
    }

    /// step 4
    pub fn search(&mut self) -> Step {
        loop {
            debug_assert!(self.covers.count() <= self.stars.count());
            let Some(zero) = self.uncovered() else {
                return Step::Adjust;
            };
            self.prime(zero);
            let row = zero.row();
            if self.matrix.is_diagonal(row) {
                if self.stars.row(row).count() < self.matrix.capacity() {
                    return Step::Augment(zero);
                }
                self.covers.cover_row(row);
                for col in self.stars.row(row) {
                    self.covers.uncover_col(col);
                }
            } else {
                match self.stars.in_row(row) {
                    None => return Step::Augment(zero),
                    Some(col) => {
                        self.covers.cover_row(row);
                        self.covers.uncover_col(col);
                    }
                }
            }
        }
    }

    /// step 5
    pub fn augment(&mut self, start: Cell) -> Step {
        let path = Path::from((start, &self.stars, &self.primes));
        log::trace!("augmenting from {} through {} cells", start, path.len());
        for star in path.stars() {
            self.stars.unset(*star);
        }
        for prime in path.primes() {
            let starred = self.star(*prime);
            assert!(starred, "prime {} on augmenting path is not free", prime);
        }
        self.augmentations += 1;
        self.reset();
        Step::Cover
    }

    /// step 6
    pub fn adjust(&mut self) -> Step {
        let h = self
            .matrix
            .cells()
            .filter(|cell| self.covers.is_uncovered(*cell))
            .map(|cell| self.matrix[cell])
            .fold(Cost::INFINITY, Cost::min);
        assert!(h.is_finite(), "no uncovered cell left to adjust");
        for r in 0..self.matrix.active() {
            for c in 0..self.matrix.cols() {
                let cell = Cell::from((r, c));
                match (self.covers.is_row_covered(r), self.covers.is_col_covered(c)) {
                    (true, true) => self.matrix[cell] += h,
                    (false, false) => self.matrix[cell] -= h,
                    _ => {}
                }
            }
        }
        self.potential.shift(h, &self.covers, self.matrix.active());
        log::trace!("adjusted uncovered entries by {:.6}", h);
        self.adjustments += 1;
        Step::Search
    }

    /// first uncovered zero in row-major order
    fn uncovered(&self) -> Option<Cell> {
        self.matrix
            .zeros()
            .find(|zero| self.covers.is_uncovered(*zero))
    }
}

impl std::fmt::Display for Munkres {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.matrix)?;
        write!(f, "{}", self.stars)
    }
}

use super::assignment::Assignment;
use crate::BRUTE_FORCE_LIMIT;
use crate::Cost;
use crate::matrix::CostMatrix;

/// enumerates every injective real row → column map and keeps the
/// cheapest. exponential, so only used to check the solver on
/// small matrices.
pub struct Exhaustive<'a>(&'a CostMatrix);

impl<'a> From<&'a CostMatrix> for Exhaustive<'a> {
    fn from(matrix: &'a CostMatrix) -> Self {
        Self(matrix)
    }
}

impl Exhaustive<'_> {
    pub fn minimize(&self) -> (Assignment, Cost) {
        assert!(
            self.0.cols() <= BRUTE_FORCE_LIMIT,
            "{} columns is too many to enumerate",
            self.0.cols()
        );
        let ref mut picks = Vec::with_capacity(self.0.real());
        let ref mut taken = vec![false; self.0.cols()];
        let ref mut best = None;
        self.descend(picks, taken, best);
        best.take().expect("at least one assignment exists")
    }

    fn descend(
        &self,
        picks: &mut Vec<usize>,
        taken: &mut Vec<bool>,
        best: &mut Option<(Assignment, Cost)>,
    ) {
        if picks.len() == self.0.real() {
            let candidate = Assignment::from((picks.clone(), self.0.cols()));
            let cost = candidate.cost(self.0);
            if best.as_ref().map_or(true, |(_, min)| cost < *min) {
                *best = Some((candidate, cost));
            }
            return;
        }
        for c in 0..self.0.cols() {
            if !taken[c] {
                taken[c] = true;
                picks.push(c);
                self.descend(picks, taken, best);
                picks.pop();
                taken[c] = false;
            }
        }
    }
}

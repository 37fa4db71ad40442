use crate::matrix::Cell;

/// states of the solver. every step runs to completion
/// and names its successor; Augment carries the primed zero
/// that starts the augmenting path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Reduce,
    Mark,
    Cover,
    Search,
    Augment(Cell),
    Adjust,
    Done,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reduce => write!(f, "step 1 reduce"),
            Self::Mark => write!(f, "step 2 mark"),
            Self::Cover => write!(f, "step 3 cover"),
            Self::Search => write!(f, "step 4 search"),
            Self::Augment(cell) => write!(f, "step 5 augment from {}", cell),
            Self::Adjust => write!(f, "step 6 adjust"),
            Self::Done => write!(f, "done"),
        }
    }
}

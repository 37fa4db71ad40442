//! Kuhn-Munkres assignment with a virtual "diagonal" row.
//!
//! The last row of every cost matrix stands for leaving a column unmatched.
//! Real rows are assigned to distinct columns while the virtual row absorbs
//! every column left over, which is the matching needed to compare
//! persistence diagrams of unequal size.
//!
//! ## Core Types
//!
//! - [`CostMatrix`] — validated non-negative costs, virtual row last
//! - [`Munkres`] — the six-step reduction / augmenting-path state machine
//! - [`Assignment`] — real row → column mapping plus the diagonal columns
//! - [`Potential`] — dual variables certifying optimality
pub mod matrix;
pub mod munkres;

pub use matrix::*;
pub use munkres::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Matching costs, reduced costs and dual potentials.
pub type Cost = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SOLVER PARAMETERS
// ============================================================================
/// Slack allowed when comparing primal and dual objectives of a solve.
pub const TOLERANCE: Cost = 1e-3;
/// Largest column count the exhaustive oracle will enumerate.
pub const BRUTE_FORCE_LIMIT: usize = 8;
/// Upper bound on rows of an `Arbitrary` cost matrix, virtual row included.
pub const ARBITRARY_ROWS: usize = 5;
/// Upper bound on extra columns of an `Arbitrary` cost matrix beyond n - 1.
pub const ARBITRARY_SLACK: usize = 3;

/// Solve a row-major cost matrix whose last row is the virtual row.
pub fn solve(rows: Vec<Vec<Cost>>) -> anyhow::Result<Assignment> {
    Ok(Munkres::from(CostMatrix::try_from(rows)?).compute())
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging for the command line solver.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

pub mod assignment;
pub use assignment::*;

pub mod cover;
pub use cover::*;

pub mod exhaustive;
pub use exhaustive::*;

pub mod path;
pub use path::*;

pub mod potential;
pub use potential::*;

pub mod solver;
pub use solver::*;

pub mod step;
pub use step::*;

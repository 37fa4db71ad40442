pub mod cell;
pub use cell::*;

pub mod cost;
pub use cost::*;

pub mod mask;
pub use mask::*;

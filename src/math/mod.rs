//! 2D vector math.

mod vector;

pub use vector::Vector;

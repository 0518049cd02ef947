pub mod aggregate;
pub mod board;
pub mod nte;
pub mod overtime;
pub mod range;
pub mod schedule;

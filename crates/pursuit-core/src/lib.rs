//! Closed-form lead pursuit: where and when a constant-speed hunter can catch a
//! target moving in a straight line.
//!
//! All positions live on a plane with `x` pointing east and `y` pointing north.
//! Headings are navigation bearings in degrees (0° = north, clockwise positive).

mod angle;
mod scenario;
mod solver;
mod track;

pub use angle::*;
pub use scenario::*;
pub use solver::*;
pub use track::*;

/// A 2D vector on the east/north plane.
pub type Vector2 = nalgebra::Vector2<f64>;

/// A position on the east/north plane.
pub type Point = Vector2;

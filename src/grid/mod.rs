//! Grid geometry and the food occupancy layer

pub mod cell;
pub mod food;
pub mod grid;

pub use cell::Cell;
pub use food::{FoodMap, FoodPile};
pub use grid::{Connectivity, EdgePolicy, Grid};

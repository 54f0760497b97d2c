//! # Ant Foraging
//!
//! A deterministic simulation of collective foraging: ants on a shared
//! 2D grid search for food, carry it home, and coordinate only through
//! a decaying dual-pheromone field (to-nest and to-food trails).
//!
//! This crate is the headless core. Display layers drive
//! [`SimulationEngine::step`] at whatever rate they like and read the
//! world back through stats and snapshots.

pub mod ant;
pub mod cli;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod pheromone;
pub mod simulation;

pub use ant::{Ant, Mode};
pub use cli::Args;
pub use config::{BehaviorParams, SimConfig};
pub use direction::Direction;
pub use error::{ConfigError, Result};
pub use grid::{Cell, Connectivity, EdgePolicy, FoodMap, Grid};
pub use pheromone::{PheromoneField, PheromoneKind};
pub use simulation::{RunState, SimulationEngine};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::simulation::{TickStats, WorldLayout, WorldSnapshot};
    pub use crate::{
        Ant, Args, Cell, ConfigError, Connectivity, Direction, EdgePolicy, Grid, Mode,
        PheromoneKind, Result, RunState, SimConfig, SimulationEngine,
    };
}

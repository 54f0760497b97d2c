//! The tick scheduler, run statistics, and recording outputs

pub mod engine;
pub mod recorder;
pub mod snapshot;

pub use engine::{Nest, RunState, SimulationEngine, WorldLayout, NEAR_NEST_RADIUS};
pub use recorder::{write_snapshot, Recorder};
pub use snapshot::{TickStats, WorldSnapshot};

use crate::config::SimConfig;
use crate::grid::{Connectivity, EdgePolicy};
use clap::Parser;

/// CLI arguments for the foraging simulation
#[derive(Parser, Debug)]
#[command(name = "ant_foraging", about = "🐜 Ant colony foraging simulator")]
pub struct Args {
    /// Number of ants [10-500]
    #[arg(short = 'n', long = "ants", default_value_t = 50)]
    pub ants: usize,

    /// Grid width
    #[arg(long, default_value_t = 100)]
    pub width: u16,

    /// Grid height
    #[arg(long, default_value_t = 100)]
    pub height: u16,

    /// Number of food piles [1-20]
    #[arg(long = "piles", default_value_t = 5)]
    pub food_piles: usize,

    /// Food units per pile [10-1000]
    #[arg(long, default_value_t = 100)]
    pub pile_size: u32,

    /// Speed multiplier [1-10]; compresses pheromone lifespans
    #[arg(long, default_value_t = 1)]
    pub speed: u32,

    /// To-nest pheromone lifespan in seconds [1-30]
    #[arg(long, default_value_t = 10.0)]
    pub to_nest_lifespan: f32,

    /// To-food pheromone lifespan in seconds [1-20]
    #[arg(long, default_value_t = 6.0)]
    pub to_food_lifespan: f32,

    /// Ticks to simulate
    #[arg(long, default_value_t = 1000)]
    pub ticks: u64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Record per-tick stats to CSV
    #[arg(long, default_value_t = false)]
    pub record: bool,

    /// CSV output path
    #[arg(long, default_value = "foraging_data.csv")]
    pub record_path: String,

    /// Write the final world state as JSON
    #[arg(long)]
    pub snapshot_path: Option<String>,

    /// Bounded edges instead of wrap-around
    #[arg(long, default_value_t = false)]
    pub bounded: bool,

    /// 4-connected neighborhoods instead of 8
    #[arg(long, default_value_t = false)]
    pub orthogonal: bool,

    /// Suppress startup detail output
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Args {
    /// Fold the arguments into a run configuration; bounds are checked
    /// by the engine, not here
    pub fn to_config(&self) -> SimConfig {
        let mut config = SimConfig::default();
        config.width = self.width;
        config.height = self.height;
        config.ants = self.ants;
        config.food_piles = self.food_piles;
        config.pile_size = self.pile_size;
        config.speed = self.speed;
        config.to_nest_lifespan = self.to_nest_lifespan;
        config.to_food_lifespan = self.to_food_lifespan;
        config.record = self.record;
        config.seed = self.seed.unwrap_or_else(|| fastrand::u64(..));
        config.edge = if self.bounded {
            EdgePolicy::Bounded
        } else {
            EdgePolicy::Wrap
        };
        config.connectivity = if self.orthogonal {
            Connectivity::Orthogonal
        } else {
            Connectivity::Moore
        };
        config
    }
}

use crate::grid::Cell;
use crate::pheromone::PheromoneKind;
use serde::{Deserialize, Serialize};

/// Per-tick counters published to recorders and display layers.
/// Field order is the CSV column order; keep it stable across a run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickStats {
    pub tick: u64,
    pub food_delivered: u32,
    pub to_nest_pheromones: u32,
    pub to_food_pheromones: u32,
    pub ants_carrying: u32,
    pub ants_near_nest: u32,
    pub ants_afield: u32,
    pub ants_on_trail: u32,
    pub ants_walking: u32,
    pub food_remaining: u32,
    /// Deliveries per tick since the start of the run
    pub food_efficiency: f64,
}

impl TickStats {
    pub const CSV_HEADER: &'static str = "tick,food_delivered,to_nest_pheromones,to_food_pheromones,ants_carrying,ants_near_nest,ants_afield,ants_on_trail,ants_walking,food_remaining,food_efficiency";

    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{:.6}",
            self.tick,
            self.food_delivered,
            self.to_nest_pheromones,
            self.to_food_pheromones,
            self.ants_carrying,
            self.ants_near_nest,
            self.ants_afield,
            self.ants_on_trail,
            self.ants_walking,
            self.food_remaining,
            self.food_efficiency,
        )
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AntSnapshot {
    pub id: u32,
    pub cell: Cell,
    pub carrying: bool,
    pub on_trail: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DepositSnapshot {
    pub cell: Cell,
    pub kind: PheromoneKind,
    pub strength: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FoodCellSnapshot {
    pub cell: Cell,
    pub units: u16,
}

/// A complete observable world state at one tick
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub nest: Cell,
    pub stats: TickStats,
    pub ants: Vec<AntSnapshot>,
    pub pheromones: Vec<DepositSnapshot>,
    pub food: Vec<FoodCellSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_row_matches_header_width() {
        let stats = TickStats::default();
        let columns = TickStats::CSV_HEADER.split(',').count();
        assert_eq!(stats.csv_row().split(',').count(), columns);
    }
}

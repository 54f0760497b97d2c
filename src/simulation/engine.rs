use crate::ant::{Ant, StepCtx};
use crate::config::SimConfig;
use crate::error::{ConfigError, Result};
use crate::grid::{Cell, FoodMap, Grid};
use crate::pheromone::{PheromoneField, PheromoneKind};
use crate::simulation::snapshot::{
    AntSnapshot, DepositSnapshot, FoodCellSnapshot, TickStats, WorldSnapshot,
};
use colored::Colorize;
use std::time::Duration;

/// Ants inside this distance of the nest count as "near nest" in the stats
pub const NEAR_NEST_RADIUS: f32 = 5.0;

/// Scheduler lifecycle; the caller drives every transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Initialized,
    Running,
    Paused,
    Terminated,
}

/// The colony's home cell: delivery sink and trail origin
#[derive(Clone, Copy, Debug)]
pub struct Nest {
    pub position: Cell,
    pub food_stored: u32,
}

/// Explicit world layout for scripted scenarios. Bypasses the external
/// configuration bounds (a scenario may want a single ant on a single
/// food unit) but not the structural checks.
#[derive(Clone, Debug)]
pub struct WorldLayout {
    /// `None` puts the nest at the grid center
    pub nest: Option<Cell>,
    /// (center, radius, units) per pile
    pub piles: Vec<(Cell, u16, u32)>,
    pub ants: usize,
}

/// Single-owner scheduler: holds the whole world, advances it one tick
/// at a time. Ants activate sequentially in an order reshuffled every
/// tick, so no two ants act simultaneously and later ants see trails
/// laid earlier in the same tick.
pub struct SimulationEngine {
    config: SimConfig,
    grid: Grid,
    food: FoodMap,
    field: PheromoneField,
    nest: Nest,
    ants: Vec<Ant>,
    rng: fastrand::Rng,
    tick: u64,
    state: RunState,
    stats: TickStats,
    order: Vec<usize>,
}

impl SimulationEngine {
    /// Build a run from validated external configuration
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = fastrand::Rng::with_seed(config.seed);
        let grid = Grid::new(config.width, config.height, config.edge, config.connectivity);
        let nest = grid.center();
        let mut food = FoodMap::new(&grid);
        food.spawn_piles(
            &grid,
            nest,
            config.food_piles,
            config.pile_size,
            config.pile_radius,
            &mut rng,
        );
        let ants = config.ants;
        Ok(Self::assemble(config, grid, food, nest, rng, ants))
    }

    /// Build a scripted scenario with explicit placement
    pub fn with_layout(config: SimConfig, layout: WorldLayout) -> Result<Self> {
        let mut rng = fastrand::Rng::with_seed(config.seed);
        let grid = Grid::new(config.width, config.height, config.edge, config.connectivity);
        let nest = layout.nest.unwrap_or_else(|| grid.center());
        if !grid.contains(nest) {
            return Err(ConfigError::CellOutOfGrid {
                x: nest.x,
                y: nest.y,
                width: grid.width,
                height: grid.height,
            });
        }
        let mut food = FoodMap::new(&grid);
        for (center, radius, units) in layout.piles {
            if !grid.contains(center) {
                return Err(ConfigError::CellOutOfGrid {
                    x: center.x,
                    y: center.y,
                    width: grid.width,
                    height: grid.height,
                });
            }
            food.spawn_pile(&grid, center, radius, units, &mut rng);
        }
        if layout.ants == 0 {
            return Err(ConfigError::OutOfRange {
                field: "ants",
                value: "0".to_string(),
                min: "1".to_string(),
                max: usize::MAX.to_string(),
            });
        }
        Ok(Self::assemble(config, grid, food, nest, rng, layout.ants))
    }

    fn assemble(
        config: SimConfig,
        grid: Grid,
        food: FoodMap,
        nest_pos: Cell,
        rng: fastrand::Rng,
        ant_count: usize,
    ) -> Self {
        let field = PheromoneField::new(
            &grid,
            nest_pos,
            config.field.clone(),
            config.to_nest_lifespan,
            config.to_food_lifespan,
            config.speed,
        );
        let ants = (0..ant_count)
            .map(|i| Ant::new(i as u32, nest_pos))
            .collect();
        let mut engine = Self {
            config,
            grid,
            food,
            field,
            nest: Nest {
                position: nest_pos,
                food_stored: 0,
            },
            ants,
            rng,
            tick: 0,
            state: RunState::Initialized,
            stats: TickStats::default(),
            order: Vec::new(),
        };
        engine.stats = engine.collect_stats();
        engine
    }

    /// Advance the world by exactly one tick. A no-op while paused or
    /// after termination.
    pub fn step(&mut self) {
        match self.state {
            RunState::Terminated | RunState::Paused => return,
            _ => self.state = RunState::Running,
        }

        // fresh activation order every tick
        self.order.clear();
        self.order.extend(0..self.ants.len());
        self.rng.shuffle(&mut self.order);

        let tick = self.tick;
        let mut delivered = 0u32;
        {
            let Self {
                grid,
                food,
                field,
                nest,
                ants,
                rng,
                order,
                config,
                ..
            } = self;
            for &i in order.iter() {
                let mut ctx = StepCtx {
                    grid: &*grid,
                    food: &mut *food,
                    field: &mut *field,
                    nest: nest.position,
                    rng: &mut *rng,
                    tick,
                    params: &config.behavior,
                };
                if ants[i].step(&mut ctx) {
                    delivered += 1;
                }
            }
        }
        self.nest.food_stored += delivered;

        // the field ages only after every ant has acted
        self.field.decay();

        self.tick += 1;
        self.stats = self.collect_stats();
    }

    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::Running;
        }
    }

    /// Terminal; a stopped engine never advances again
    pub fn stop(&mut self) {
        self.state = RunState::Terminated;
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn stats(&self) -> &TickStats {
        &self.stats
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn food(&self) -> &FoodMap {
        &self.food
    }

    pub fn field(&self) -> &PheromoneField {
        &self.field
    }

    pub fn nest(&self) -> &Nest {
        &self.nest
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    fn collect_stats(&self) -> TickStats {
        let mut carrying = 0u32;
        let mut near = 0u32;
        let mut on_trail = 0u32;
        for ant in &self.ants {
            if ant.carrying() {
                carrying += 1;
            }
            if self.grid.distance(ant.pos, self.nest.position) < NEAR_NEST_RADIUS {
                near += 1;
            }
            if ant.on_trail() {
                on_trail += 1;
            }
        }
        let total = self.ants.len() as u32;
        let delivered = self.nest.food_stored;
        TickStats {
            tick: self.tick,
            food_delivered: delivered,
            to_nest_pheromones: self.field.active(PheromoneKind::ToNest),
            to_food_pheromones: self.field.active(PheromoneKind::ToFood),
            ants_carrying: carrying,
            ants_near_nest: near,
            ants_afield: total - near,
            ants_on_trail: on_trail,
            ants_walking: total - on_trail,
            food_remaining: self.food.remaining(),
            food_efficiency: if self.tick > 0 {
                delivered as f64 / self.tick as f64
            } else {
                0.0
            },
        }
    }

    /// A complete copy of the observable world state at the current tick
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            nest: self.nest.position,
            stats: self.stats.clone(),
            ants: self
                .ants
                .iter()
                .map(|a| AntSnapshot {
                    id: a.id,
                    cell: a.pos,
                    carrying: a.carrying(),
                    on_trail: a.on_trail(),
                })
                .collect(),
            pheromones: self
                .field
                .deposits(&self.grid)
                .into_iter()
                .map(|d| DepositSnapshot {
                    cell: d.cell,
                    kind: d.kind,
                    strength: d.strength,
                })
                .collect(),
            food: self
                .food
                .food_cells(&self.grid)
                .into_iter()
                .map(|(cell, units)| FoodCellSnapshot { cell, units })
                .collect(),
        }
    }

    /// Print derived run parameters before the first tick
    pub fn print_startup_details(&self) {
        println!(
            "{} {} {} {}",
            format!("nest=({},{})", self.nest.position.x, self.nest.position.y).dimmed(),
            format!("food={}", self.food.total_spawned()).dimmed(),
            format!(
                "decay[{}]={:.4}",
                PheromoneKind::ToNest.as_str(),
                self.field.decay_of(PheromoneKind::ToNest)
            )
            .dimmed(),
            format!(
                "decay[{}]={:.4}",
                PheromoneKind::ToFood.as_str(),
                self.field.decay_of(PheromoneKind::ToFood)
            )
            .dimmed(),
        );
    }

    /// Print simulation summary
    pub fn print_summary(&self, simulation_time: Duration) {
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("ticks={}", self.tick).cyan(),
            format!("delivered={}", self.nest.food_stored).cyan(),
            format!("remaining={}", self.food.remaining()).cyan(),
            format!("efficiency={:.4}", self.stats.food_efficiency).cyan(),
        );
    }
}

use crate::grid::{Cell, Grid};
use serde::{Deserialize, Serialize};

/// The two trail types laid by foraging ants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PheromoneKind {
    /// Laid while carrying food home; guides loaded ants toward the nest
    ToNest,
    /// Laid while retracing to a known source; guides searchers toward food
    ToFood,
}

impl PheromoneKind {
    pub const ALL: [PheromoneKind; 2] = [PheromoneKind::ToNest, PheromoneKind::ToFood];

    #[inline]
    pub const fn layer(self) -> usize {
        match self {
            PheromoneKind::ToNest => 0,
            PheromoneKind::ToFood => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PheromoneKind::ToNest => "to_nest",
            PheromoneKind::ToFood => "to_food",
        }
    }
}

/// A single active deposit, as seen by callers
#[derive(Clone, Copy, Debug)]
pub struct Deposit {
    pub cell: Cell,
    pub kind: PheromoneKind,
    pub strength: f32,
    pub created_at: u64,
    pub reinforced_at: u64,
}

/// Field tuning. Defaults match the reference colony model.
#[derive(Clone, Debug)]
pub struct FieldParams {
    /// Ceiling any single deposit can reach
    pub max_strength: f32,
    /// Deposits decaying below this are removed
    pub epsilon: f32,
    /// New deposits weaker than this are not created at all
    pub min_deposit: f32,
    /// Fraction of the base strength spread into adjacent cells
    pub neighbor_fraction: f32,
    /// Deposits inside this distance of the nest are scaled down
    pub suppression_radius: f32,
    /// No deposits at all inside this distance of the nest
    pub inner_radius: f32,
    /// Tick rate the lifespan seconds are expressed against
    pub ticks_per_second: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_strength: 3.0,
            epsilon: 0.05,
            min_deposit: 0.2,
            neighbor_fraction: 0.3,
            suppression_radius: 10.0,
            inner_radius: 3.0,
            ticks_per_second: 10.0,
        }
    }
}

/// One flat strength plane per pheromone kind
#[derive(Clone, Debug)]
struct Layer {
    strength: Vec<f32>,
    created: Vec<u64>,
    reinforced: Vec<u64>,
    active: u32,
    decay: f32,
}

impl Layer {
    fn new(cells: usize, decay: f32) -> Self {
        Self {
            strength: vec![0.0; cells],
            created: vec![0; cells],
            reinforced: vec![0; cells],
            active: 0,
            decay,
        }
    }
}

/// Dual decaying pheromone field over the grid.
///
/// Reinforcement takes the max of the existing and incoming strength,
/// capped at `max_strength`; repeated traffic refreshes a trail rather
/// than stacking it without bound.
#[derive(Clone, Debug)]
pub struct PheromoneField {
    layers: [Layer; 2],
    nest: Cell,
    params: FieldParams,
}

impl PheromoneField {
    /// Lifespans are wall-clock seconds at `ticks_per_second`; the speed
    /// multiplier compresses them so a sped-up run still looks the same
    /// per displayed second.
    pub fn new(
        grid: &Grid,
        nest: Cell,
        params: FieldParams,
        to_nest_lifespan: f32,
        to_food_lifespan: f32,
        speed: u32,
    ) -> Self {
        let cells = grid.cells();
        let to_nest_decay = decay_factor(to_nest_lifespan, speed, &params);
        let to_food_decay = decay_factor(to_food_lifespan, speed, &params);
        Self {
            layers: [
                Layer::new(cells, to_nest_decay),
                Layer::new(cells, to_food_decay),
            ],
            nest,
            params,
        }
    }

    /// Lay pheromone at a cell and, at reduced strength, its immediate
    /// neighbors. Near the nest the deposit is scaled down; inside the
    /// inner radius it is skipped entirely so the densest traffic does
    /// not drown the colony's doorstep in trails pointing nowhere.
    pub fn deposit(&mut self, grid: &Grid, cell: Cell, kind: PheromoneKind, base: f32, tick: u64) {
        let dist = grid.distance(cell, self.nest);
        if dist < self.params.inner_radius {
            return;
        }
        let base = if dist < self.params.suppression_radius {
            base * dist / self.params.suppression_radius
        } else {
            base
        };
        self.reinforce(grid.index(cell), kind, base, tick);
        let spread = base * self.params.neighbor_fraction;
        for n in grid.neighbors(cell, 1) {
            self.reinforce(grid.index(n), kind, spread, tick);
        }
    }

    fn reinforce(&mut self, idx: usize, kind: PheromoneKind, strength: f32, tick: u64) {
        let max = self.params.max_strength;
        let min = self.params.min_deposit;
        let layer = &mut self.layers[kind.layer()];
        let existing = layer.strength[idx];
        if existing <= 0.0 {
            if strength < min {
                return;
            }
            layer.strength[idx] = strength.min(max);
            layer.created[idx] = tick;
            layer.reinforced[idx] = tick;
            layer.active += 1;
        } else if strength > existing {
            layer.strength[idx] = strength.min(max);
            layer.reinforced[idx] = tick;
        }
    }

    #[inline]
    pub fn strength_at(&self, grid: &Grid, cell: Cell, kind: PheromoneKind) -> f32 {
        self.layers[kind.layer()].strength[grid.index(cell)]
    }

    pub fn deposit_at(&self, grid: &Grid, cell: Cell, kind: PheromoneKind) -> Option<Deposit> {
        let idx = grid.index(cell);
        let layer = &self.layers[kind.layer()];
        if layer.strength[idx] <= 0.0 {
            return None;
        }
        Some(Deposit {
            cell,
            kind,
            strength: layer.strength[idx],
            created_at: layer.created[idx],
            reinforced_at: layer.reinforced[idx],
        })
    }

    /// Active deposits of one kind within the radius of a cell, excluding
    /// the cell itself, in grid scan order
    pub fn sense(
        &self,
        grid: &Grid,
        cell: Cell,
        kind: PheromoneKind,
        radius: u16,
    ) -> Vec<(Cell, f32)> {
        let layer = &self.layers[kind.layer()];
        let mut out = Vec::new();
        for c in grid.neighbors(cell, radius) {
            let s = layer.strength[grid.index(c)];
            if s > 0.0 {
                out.push((c, s));
            }
        }
        out
    }

    /// Age every deposit by one tick; deposits falling below epsilon vanish
    pub fn decay(&mut self) {
        let epsilon = self.params.epsilon;
        for layer in &mut self.layers {
            let factor = layer.decay;
            for s in layer.strength.iter_mut() {
                if *s <= 0.0 {
                    continue;
                }
                *s *= factor;
                if *s < epsilon {
                    *s = 0.0;
                    layer.active -= 1;
                }
            }
        }
    }

    #[inline]
    pub fn active(&self, kind: PheromoneKind) -> u32 {
        self.layers[kind.layer()].active
    }

    #[inline]
    pub fn decay_of(&self, kind: PheromoneKind) -> f32 {
        self.layers[kind.layer()].decay
    }

    /// Every active deposit of both kinds, for snapshots
    pub fn deposits(&self, grid: &Grid) -> Vec<Deposit> {
        let mut out = Vec::new();
        for kind in PheromoneKind::ALL {
            let layer = &self.layers[kind.layer()];
            for (idx, &s) in layer.strength.iter().enumerate() {
                if s > 0.0 {
                    out.push(Deposit {
                        cell: grid.cell_of(idx),
                        kind,
                        strength: s,
                        created_at: layer.created[idx],
                        reinforced_at: layer.reinforced[idx],
                    });
                }
            }
        }
        out
    }
}

/// Per-tick multiplicative factor that takes a full-strength deposit down
/// to epsilon over its configured lifespan
fn decay_factor(lifespan_secs: f32, speed: u32, params: &FieldParams) -> f32 {
    let total_ticks = lifespan_secs * params.ticks_per_second / speed.max(1) as f32;
    if total_ticks <= 0.0 {
        return 0.01;
    }
    let factor = (params.epsilon / params.max_strength).powf(1.0 / total_ticks);
    factor.clamp(0.01, 0.999)
}

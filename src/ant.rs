use crate::config::BehaviorParams;
use crate::direction::Direction;
use crate::grid::{Cell, FoodMap, Grid};
use crate::pheromone::{PheromoneField, PheromoneKind};

/// Behavior state. Carrying food is `Returning`, so "a loaded ant always
/// remembers where its unit came from" holds by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Looking for food or a to-food trail
    Searching,
    /// Carrying food back to the nest
    Returning { food_cell: Cell },
    /// Just delivered; retracing to the remembered source, laying to-food trail
    Revisiting { food_cell: Cell },
}

/// Directional persistence for the random walk: weight by ring distance
/// from the previous heading, so straight-ahead dominates and reversals
/// stay possible but rare
const MOMENTUM_WEIGHTS: [f32; 5] = [8.0, 4.0, 2.0, 1.0, 0.5];

/// One tick's view of the world, borrowed from the engine.
/// Fields are public so scripted scenarios can build one directly.
pub struct StepCtx<'a> {
    pub grid: &'a Grid,
    pub food: &'a mut FoodMap,
    pub field: &'a mut PheromoneField,
    pub nest: Cell,
    pub rng: &'a mut fastrand::Rng,
    pub tick: u64,
    pub params: &'a BehaviorParams,
}

#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    pub pos: Cell,
    pub mode: Mode,
    momentum: Option<Direction>,
    exploration_cooldown: u32,
    following_trail: bool,
    last_delivery_tick: Option<u64>,
}

impl Ant {
    /// Create a new ant at the given position
    pub fn new(id: u32, pos: Cell) -> Self {
        Self {
            id,
            pos,
            mode: Mode::Searching,
            momentum: None,
            exploration_cooldown: 0,
            following_trail: false,
            last_delivery_tick: None,
        }
    }

    /// Check if the ant is carrying a food unit
    #[inline]
    pub fn carrying(&self) -> bool {
        matches!(self.mode, Mode::Returning { .. })
    }

    /// The food source this ant is bound to, if any
    pub fn remembered_food_cell(&self) -> Option<Cell> {
        match self.mode {
            Mode::Searching => None,
            Mode::Returning { food_cell } | Mode::Revisiting { food_cell } => Some(food_cell),
        }
    }

    /// Whether this tick's move came from following a trail
    #[inline]
    pub fn on_trail(&self) -> bool {
        self.following_trail
    }

    #[inline]
    pub fn last_delivery_tick(&self) -> Option<u64> {
        self.last_delivery_tick
    }

    #[inline]
    pub fn exploration_cooldown(&self) -> u32 {
        self.exploration_cooldown
    }

    /// Execute one tick. Returns true when a food unit reached the nest.
    pub fn step(&mut self, ctx: &mut StepCtx) -> bool {
        self.following_trail = false;
        match self.mode {
            Mode::Searching => {
                self.step_searching(ctx);
                false
            }
            Mode::Returning { food_cell } => self.step_returning(ctx, food_cell),
            Mode::Revisiting { food_cell } => {
                self.step_revisiting(ctx, food_cell);
                false
            }
        }
    }

    /// Priority order: food underfoot, visible food, a to-food trail,
    /// then the momentum random walk
    fn step_searching(&mut self, ctx: &mut StepCtx) {
        if ctx.food.pick_up(ctx.grid, self.pos) {
            self.mode = Mode::Returning { food_cell: self.pos };
            return;
        }
        if let Some(target) = ctx
            .food
            .nearest_food(ctx.grid, self.pos, ctx.params.detection_radius)
        {
            self.advance_toward(ctx.grid, target);
            if self.pos == target && ctx.food.pick_up(ctx.grid, self.pos) {
                self.mode = Mode::Returning { food_cell: self.pos };
            }
            return;
        }
        if let Some(target) = self.choose_trail_cell(ctx, PheromoneKind::ToFood) {
            self.advance_toward(ctx.grid, target);
            self.following_trail = true;
            return;
        }
        self.random_walk(ctx);
    }

    fn step_returning(&mut self, ctx: &mut StepCtx, food_cell: Cell) -> bool {
        if ctx.grid.chebyshev(self.pos, ctx.nest) <= 1 {
            self.mode = Mode::Revisiting { food_cell };
            self.exploration_cooldown = ctx.params.cooldown_ticks;
            self.last_delivery_tick = Some(ctx.tick);
            return true;
        }
        let target = if ctx.grid.distance(self.pos, ctx.nest) <= ctx.params.detection_radius as f32
        {
            ctx.nest
        } else if let Some(cell) = self.choose_trail_cell(ctx, PheromoneKind::ToNest) {
            self.following_trail = true;
            cell
        } else {
            ctx.nest
        };
        self.advance_toward(ctx.grid, target);
        ctx.field.deposit(
            ctx.grid,
            self.pos,
            PheromoneKind::ToNest,
            ctx.params.to_nest_deposit,
            ctx.tick,
        );
        false
    }

    /// Head straight back to the remembered source. An exhausted source
    /// drops the memory the moment the ant stands on it.
    fn step_revisiting(&mut self, ctx: &mut StepCtx, food_cell: Cell) {
        if self.pos == food_cell {
            if ctx.food.pick_up(ctx.grid, self.pos) {
                self.mode = Mode::Returning { food_cell };
            } else {
                self.mode = Mode::Searching;
            }
            return;
        }
        self.advance_toward(ctx.grid, food_cell);
        ctx.field.deposit(
            ctx.grid,
            self.pos,
            PheromoneKind::ToFood,
            ctx.params.to_food_deposit,
            ctx.tick,
        );
    }

    /// Strength-weighted draw over trail cells in sensing range; stronger
    /// trails win more often but weak ones still get traffic
    fn choose_trail_cell(&self, ctx: &mut StepCtx, kind: PheromoneKind) -> Option<Cell> {
        let candidates: Vec<(Cell, f32)> = ctx
            .field
            .sense(ctx.grid, self.pos, kind, ctx.params.detection_radius)
            .into_iter()
            .filter(|&(_, s)| s >= ctx.params.follow_threshold)
            .collect();
        if candidates.is_empty() {
            return None;
        }
        let total: f32 = candidates.iter().map(|&(_, s)| s).sum();
        let mut roll = ctx.rng.f32() * total;
        for &(cell, s) in &candidates {
            roll -= s;
            if roll <= 0.0 {
                return Some(cell);
            }
        }
        candidates.last().map(|&(cell, _)| cell)
    }

    fn random_walk(&mut self, ctx: &mut StepCtx) {
        let enforced = self.exploration_cooldown > 0;
        let moved = self.walk_once(ctx, enforced);
        if !moved && enforced {
            // cornered by the nest-avoidance filter; walk unconstrained
            self.walk_once(ctx, false);
        }
        if enforced {
            self.exploration_cooldown -= 1;
        }
    }

    fn walk_once(&mut self, ctx: &mut StepCtx, avoid_nestward: bool) -> bool {
        let here = ctx.grid.distance(self.pos, ctx.nest);
        let mut options: Vec<(Direction, Cell, f32)> = Vec::with_capacity(8);
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let Some(next) = ctx.grid.offset(self.pos, dx, dy) else {
                continue;
            };
            if avoid_nestward && ctx.grid.distance(next, ctx.nest) < here {
                continue;
            }
            let weight = match self.momentum {
                Some(prev) => MOMENTUM_WEIGHTS[prev.ring_distance(dir) as usize],
                None => 1.0,
            };
            options.push((dir, next, weight));
        }
        if options.is_empty() {
            return false;
        }
        let total: f32 = options.iter().map(|&(_, _, w)| w).sum();
        let mut roll = ctx.rng.f32() * total;
        let mut chosen = options.len() - 1;
        for (i, &(_, _, w)) in options.iter().enumerate() {
            roll -= w;
            if roll <= 0.0 {
                chosen = i;
                break;
            }
        }
        let (dir, next, _) = options[chosen];
        self.momentum = Some(dir);
        self.pos = next;
        true
    }

    /// One greedy step toward a target, keeping momentum in sync
    fn advance_toward(&mut self, grid: &Grid, target: Cell) {
        if let Some(next) = grid.step_toward(self.pos, target) {
            let (dx, dy) = grid.delta(self.pos, next);
            self.momentum = Direction::from_delta(dx, dy);
            self.pos = next;
        }
    }
}

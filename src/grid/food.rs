use super::cell::Cell;
use super::grid::Grid;

/// A circular cluster of food units
#[derive(Clone, Debug)]
pub struct FoodPile {
    pub center: Cell,
    pub radius: u16,
    pub units_remaining: u32,
}

/// Per-cell food occupancy plus pile bookkeeping.
///
/// Every unit on a cell keeps its owning pile id, so overlapping pile
/// footprints stay accounted correctly: a pickup always debits the pile
/// the removed unit came from. `total_spawned == remaining + picked up
/// + delivered` holds for the lifetime of a run; pickups go through
/// [`FoodMap::pick_up`] only.
#[derive(Clone, Debug)]
pub struct FoodMap {
    /// owning pile id per unit, stacked per cell
    owners: Vec<Vec<u16>>,
    piles: Vec<FoodPile>,
    total_spawned: u32,
    remaining: u32,
}

impl FoodMap {
    pub fn new(grid: &Grid) -> Self {
        Self {
            owners: vec![Vec::new(); grid.cells()],
            piles: Vec::new(),
            total_spawned: 0,
            remaining: 0,
        }
    }

    /// Scatter `count` piles, keeping centers away from the nest so a run
    /// never starts with food in the suppression zone
    pub fn spawn_piles(
        &mut self,
        grid: &Grid,
        nest: Cell,
        count: usize,
        units_per_pile: u32,
        radius: u16,
        rng: &mut fastrand::Rng,
    ) {
        let min_dist = (grid.width.max(grid.height) / 8) as f32;
        for _ in 0..count {
            let mut center = Cell::new(0, 0);
            for _ in 0..256 {
                let c = Cell::new(rng.u16(0..grid.width), rng.u16(0..grid.height));
                if grid.distance(c, nest) > min_dist {
                    center = c;
                    break;
                }
            }
            self.spawn_pile(grid, center, radius, units_per_pile, rng);
        }
    }

    /// Drop `units` food units uniformly over the circular footprint
    /// around `center`
    pub fn spawn_pile(
        &mut self,
        grid: &Grid,
        center: Cell,
        radius: u16,
        units: u32,
        rng: &mut fastrand::Rng,
    ) {
        let pile_id = self.piles.len() as u16;
        let r = radius as i32;
        for _ in 0..units {
            let (dx, dy) = loop {
                let dx = rng.i32(-r..=r);
                let dy = rng.i32(-r..=r);
                if dx * dx + dy * dy <= r * r {
                    break (dx, dy);
                }
            };
            // bounded edges clamp clipped offsets to the boundary,
            // keeping the footprint spread instead of stacking one cell
            let cell = grid.offset_clamped(center, dx, dy);
            self.owners[grid.index(cell)].push(pile_id);
        }
        self.piles.push(FoodPile {
            center,
            radius,
            units_remaining: units,
        });
        self.total_spawned += units;
        self.remaining += units;
    }

    #[inline]
    pub fn units_at(&self, grid: &Grid, cell: Cell) -> u16 {
        self.owners[grid.index(cell)].len() as u16
    }

    #[inline]
    pub fn has_food(&self, grid: &Grid, cell: Cell) -> bool {
        !self.owners[grid.index(cell)].is_empty()
    }

    /// Remove one unit from a cell, debiting the pile it belongs to.
    /// Returns false when the cell is empty, which is how a second ant
    /// discovers it lost the race.
    pub fn pick_up(&mut self, grid: &Grid, cell: Cell) -> bool {
        let Some(pile) = self.owners[grid.index(cell)].pop() else {
            return false;
        };
        self.remaining -= 1;
        self.piles[pile as usize].units_remaining -= 1;
        true
    }

    /// Closest cell with food within the radius, excluding `from` itself.
    /// Ties keep the first candidate in scan order.
    pub fn nearest_food(&self, grid: &Grid, from: Cell, radius: u16) -> Option<Cell> {
        let mut best: Option<(Cell, f32)> = None;
        for c in grid.neighbors(from, radius) {
            if !self.has_food(grid, c) {
                continue;
            }
            let d = grid.distance(from, c);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }

    /// Every cell currently holding food, with its unit count
    pub fn food_cells(&self, grid: &Grid) -> Vec<(Cell, u16)> {
        self.owners
            .iter()
            .enumerate()
            .filter(|(_, units)| !units.is_empty())
            .map(|(i, units)| (grid.cell_of(i), units.len() as u16))
            .collect()
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn total_spawned(&self) -> u32 {
        self.total_spawned
    }

    pub fn piles(&self) -> &[FoodPile] {
        &self.piles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid::{Connectivity, EdgePolicy};

    fn torus() -> Grid {
        Grid::new(32, 32, EdgePolicy::Wrap, Connectivity::Moore)
    }

    #[test]
    fn test_spawn_pile_accounts_for_every_unit() {
        let grid = torus();
        let mut food = FoodMap::new(&grid);
        let mut rng = fastrand::Rng::with_seed(42);

        food.spawn_pile(&grid, Cell::new(10, 10), 2, 50, &mut rng);

        assert_eq!(food.total_spawned(), 50);
        assert_eq!(food.remaining(), 50);
        assert_eq!(food.piles().len(), 1);
        assert_eq!(food.piles()[0].units_remaining, 50);

        let placed: u32 = food
            .food_cells(&grid)
            .iter()
            .map(|&(_, u)| u as u32)
            .sum();
        assert_eq!(placed, 50);

        // radius 2 footprint
        for (cell, _) in food.food_cells(&grid) {
            assert!(grid.distance(cell, Cell::new(10, 10)) <= 2.0 + f32::EPSILON);
        }
    }

    #[test]
    fn test_pick_up_decrements_and_rejects_empty() {
        let grid = torus();
        let mut food = FoodMap::new(&grid);
        let mut rng = fastrand::Rng::with_seed(7);
        let center = Cell::new(5, 5);

        // radius 0 stacks everything on the center
        food.spawn_pile(&grid, center, 0, 3, &mut rng);
        assert_eq!(food.units_at(&grid, center), 3);

        assert!(food.pick_up(&grid, center));
        assert!(food.pick_up(&grid, center));
        assert!(food.pick_up(&grid, center));
        assert!(!food.pick_up(&grid, center));

        assert_eq!(food.remaining(), 0);
        assert_eq!(food.piles()[0].units_remaining, 0);
        assert_eq!(food.total_spawned(), 3);
    }

    #[test]
    fn test_overlapping_piles_debit_their_own_stock() {
        let grid = torus();
        let mut food = FoodMap::new(&grid);
        let mut rng = fastrand::Rng::with_seed(3);
        let shared = Cell::new(9, 9);

        food.spawn_pile(&grid, shared, 0, 1, &mut rng);
        food.spawn_pile(&grid, shared, 0, 1, &mut rng);
        assert_eq!(food.units_at(&grid, shared), 2);

        assert!(food.pick_up(&grid, shared));
        let after_first: u32 = food.piles().iter().map(|p| p.units_remaining).sum();
        assert_eq!(after_first, 1);

        assert!(food.pick_up(&grid, shared));
        assert!(!food.pick_up(&grid, shared));
        assert_eq!(food.remaining(), 0);
        assert_eq!(food.piles()[0].units_remaining, 0);
        assert_eq!(food.piles()[1].units_remaining, 0);
    }

    #[test]
    fn test_bounded_corner_pile_spreads_along_the_boundary() {
        let grid = Grid::new(32, 32, EdgePolicy::Bounded, Connectivity::Moore);
        let mut food = FoodMap::new(&grid);
        let mut rng = fastrand::Rng::with_seed(13);

        food.spawn_pile(&grid, Cell::new(0, 0), 2, 60, &mut rng);

        let cells = food.food_cells(&grid);
        // clipped offsets clamp to the nearest in-grid cell, so the
        // footprint stays spread instead of collapsing onto the center
        assert!(cells.len() > 1);
        for (cell, _) in cells {
            assert!(cell.x <= 2 && cell.y <= 2);
        }
        assert_eq!(food.remaining(), 60);
    }

    #[test]
    fn test_nearest_food_prefers_the_closer_cell() {
        let grid = torus();
        let mut food = FoodMap::new(&grid);
        let mut rng = fastrand::Rng::with_seed(7);

        food.spawn_pile(&grid, Cell::new(8, 6), 0, 1, &mut rng);
        food.spawn_pile(&grid, Cell::new(8, 7), 0, 1, &mut rng);

        let found = food.nearest_food(&grid, Cell::new(8, 8), 2);
        assert_eq!(found, Some(Cell::new(8, 7)));

        assert_eq!(food.nearest_food(&grid, Cell::new(20, 20), 2), None);
    }

    #[test]
    fn test_spawn_piles_keeps_centers_away_from_nest() {
        let grid = torus();
        let nest = grid.center();
        let mut food = FoodMap::new(&grid);
        let mut rng = fastrand::Rng::with_seed(99);

        food.spawn_piles(&grid, nest, 5, 20, 2, &mut rng);

        assert_eq!(food.total_spawned(), 100);
        let min_dist = (grid.width.max(grid.height) / 8) as f32;
        for pile in food.piles() {
            assert!(grid.distance(pile.center, nest) > min_dist);
        }
    }
}

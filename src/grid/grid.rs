use super::cell::Cell;

/// Edge behavior, fixed at construction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Coordinates wrap around (torus)
    Wrap,
    /// Moves past the boundary are rejected
    Bounded,
}

/// Neighborhood shape used by every radius query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connectivity {
    /// 8 neighbors, diagonals included
    Moore,
    /// 4 neighbors
    Orthogonal,
}

/// Grid geometry: dimensions, edge policy, neighborhood shape.
/// Occupancy lives in separate layers (`FoodMap`, `PheromoneField`)
/// indexed through [`Grid::index`].
#[derive(Clone, Debug)]
pub struct Grid {
    pub width: u16,
    pub height: u16,
    edge: EdgePolicy,
    connectivity: Connectivity,
}

impl Grid {
    pub fn new(width: u16, height: u16, edge: EdgePolicy, connectivity: Connectivity) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self {
            width,
            height,
            edge,
            connectivity,
        }
    }

    /// Total cell count
    #[inline]
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of a cell, for the flat occupancy layers
    #[inline]
    pub fn index(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    /// Cell at a row-major index
    #[inline]
    pub fn cell_of(&self, index: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((index % w) as u16, (index / w) as u16)
    }

    #[inline]
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    #[inline]
    pub fn edge(&self) -> EdgePolicy {
        self.edge
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Cell at the given offset, or `None` when a bounded edge rejects it
    pub fn offset(&self, cell: Cell, dx: i32, dy: i32) -> Option<Cell> {
        let x = cell.x as i32 + dx;
        let y = cell.y as i32 + dy;
        match self.edge {
            EdgePolicy::Wrap => Some(Cell::new(
                x.rem_euclid(self.width as i32) as u16,
                y.rem_euclid(self.height as i32) as u16,
            )),
            EdgePolicy::Bounded => {
                if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
                    Some(Cell::new(x as u16, y as u16))
                } else {
                    None
                }
            }
        }
    }

    /// Cell at the given offset, clamping to the boundary instead of
    /// rejecting when the edge is bounded
    pub fn offset_clamped(&self, cell: Cell, dx: i32, dy: i32) -> Cell {
        let x = cell.x as i32 + dx;
        let y = cell.y as i32 + dy;
        match self.edge {
            EdgePolicy::Wrap => Cell::new(
                x.rem_euclid(self.width as i32) as u16,
                y.rem_euclid(self.height as i32) as u16,
            ),
            EdgePolicy::Bounded => Cell::new(
                x.clamp(0, self.width as i32 - 1) as u16,
                y.clamp(0, self.height as i32 - 1) as u16,
            ),
        }
    }

    /// Cells within the given radius, excluding the center, in a fixed
    /// row-major scan order so callers stay deterministic
    pub fn neighbors(&self, cell: Cell, radius: u16) -> Vec<Cell> {
        let r = radius as i32;
        let mut out = Vec::with_capacity((2 * radius as usize + 1).pow(2) - 1);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.connectivity == Connectivity::Orthogonal && dx.abs() + dy.abs() > r {
                    continue;
                }
                if let Some(c) = self.offset(cell, dx, dy) {
                    out.push(c);
                }
            }
        }
        out
    }

    /// Shortest signed vector from one cell to another, going through
    /// the wrap seam when that is closer
    pub fn delta(&self, from: Cell, to: Cell) -> (i32, i32) {
        let mut dx = to.x as i32 - from.x as i32;
        let mut dy = to.y as i32 - from.y as i32;
        if self.edge == EdgePolicy::Wrap {
            let w = self.width as i32;
            let h = self.height as i32;
            if dx > w / 2 {
                dx -= w;
            } else if dx < -(w / 2) {
                dx += w;
            }
            if dy > h / 2 {
                dy -= h;
            } else if dy < -(h / 2) {
                dy += h;
            }
        }
        (dx, dy)
    }

    /// Euclidean distance over the shortest vector
    pub fn distance(&self, a: Cell, b: Cell) -> f32 {
        let (dx, dy) = self.delta(a, b);
        ((dx * dx + dy * dy) as f32).sqrt()
    }

    /// Chebyshev distance over the shortest vector
    pub fn chebyshev(&self, a: Cell, b: Cell) -> u16 {
        let (dx, dy) = self.delta(a, b);
        dx.unsigned_abs().max(dy.unsigned_abs()) as u16
    }

    /// One greedy step toward a target: the adjacent cell closest to it.
    /// Ties keep the first candidate in scan order. `None` when already
    /// there or every adjacent cell is rejected by a bounded edge.
    pub fn step_toward(&self, from: Cell, to: Cell) -> Option<Cell> {
        if from == to {
            return None;
        }
        let mut best: Option<(Cell, f32)> = None;
        for c in self.neighbors(from, 1) {
            let d = self.distance(c, to);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn torus() -> Grid {
        Grid::new(16, 16, EdgePolicy::Wrap, Connectivity::Moore)
    }

    #[test]
    fn test_offset_wraps_around_edges() {
        let grid = torus();
        assert_eq!(grid.offset(Cell::new(0, 0), -1, -1), Some(Cell::new(15, 15)));
        assert_eq!(grid.offset(Cell::new(15, 15), 1, 1), Some(Cell::new(0, 0)));
    }

    #[test]
    fn test_bounded_offset_rejects_outside_moves() {
        let grid = Grid::new(16, 16, EdgePolicy::Bounded, Connectivity::Moore);
        assert_eq!(grid.offset(Cell::new(0, 0), -1, 0), None);
        assert_eq!(grid.offset(Cell::new(15, 0), 1, 0), None);
        assert_eq!(grid.offset(Cell::new(5, 5), 1, -1), Some(Cell::new(6, 4)));
    }

    #[test]
    fn test_offset_clamped_sticks_to_the_boundary() {
        let grid = Grid::new(16, 16, EdgePolicy::Bounded, Connectivity::Moore);
        assert_eq!(grid.offset_clamped(Cell::new(0, 0), -3, -1), Cell::new(0, 0));
        assert_eq!(grid.offset_clamped(Cell::new(1, 14), -2, 4), Cell::new(0, 15));
        assert_eq!(grid.offset_clamped(Cell::new(5, 5), 1, -1), Cell::new(6, 4));

        let wrap = Grid::new(16, 16, EdgePolicy::Wrap, Connectivity::Moore);
        assert_eq!(wrap.offset_clamped(Cell::new(0, 0), -1, -1), Cell::new(15, 15));
    }

    #[test]
    fn test_neighbor_counts() {
        let moore = torus();
        assert_eq!(moore.neighbors(Cell::new(8, 8), 1).len(), 8);
        assert_eq!(moore.neighbors(Cell::new(8, 8), 2).len(), 24);

        let orth = Grid::new(16, 16, EdgePolicy::Wrap, Connectivity::Orthogonal);
        assert_eq!(orth.neighbors(Cell::new(8, 8), 1).len(), 4);

        let corner = Grid::new(16, 16, EdgePolicy::Bounded, Connectivity::Moore);
        assert_eq!(corner.neighbors(Cell::new(0, 0), 1).len(), 3);
    }

    #[test]
    fn test_delta_takes_the_wrap_seam() {
        let grid = torus();
        assert_eq!(grid.delta(Cell::new(1, 8), Cell::new(15, 8)), (-2, 0));
        assert_eq!(grid.delta(Cell::new(15, 15), Cell::new(0, 0)), (1, 1));
        assert_eq!(grid.chebyshev(Cell::new(1, 8), Cell::new(15, 8)), 2);
    }

    #[test]
    fn test_step_toward_reduces_distance() {
        let grid = torus();
        let from = Cell::new(2, 2);
        let to = Cell::new(10, 6);
        let next = grid.step_toward(from, to).unwrap();
        assert!(grid.distance(next, to) < grid.distance(from, to));
        assert_eq!(grid.step_toward(to, to), None);
    }

    #[test]
    fn test_step_toward_crosses_the_seam() {
        let grid = torus();
        let next = grid.step_toward(Cell::new(0, 8), Cell::new(15, 8)).unwrap();
        assert_eq!(next, Cell::new(15, 8));
    }

    #[test]
    fn test_index_round_trip() {
        let grid = torus();
        let cell = Cell::new(3, 7);
        assert_eq!(grid.cell_of(grid.index(cell)), cell);
    }
}

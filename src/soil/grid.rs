//! The soil grid — per-cell tag state and its mutation contract.
//!
//! All soil mutation in the game goes through `SoilGrid`. Systems own the
//! sprite side effects; the grid owns the state and its invariants:
//! Tilled requires Farmable, Watered/Planted require Tilled, and each tag
//! is present at most once per cell.
//!
//! Every point-taking operation is total. A point outside the grid maps to
//! an absent cell: queries report false, mutations report no change.

use bevy::prelude::*;

use crate::shared::{point_to_cell, CellPos, FarmMap};

// ─────────────────────────────────────────────────────────────────────────────
// Cell tags
// ─────────────────────────────────────────────────────────────────────────────

/// Tag set for one cell, packed into a byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellTags(u8);

impl CellTags {
    const FARMABLE: u8 = 1 << 0;
    const TILLED: u8 = 1 << 1;
    const WATERED: u8 = 1 << 2;
    const PLANTED: u8 = 1 << 3;

    pub fn farmable(self) -> bool {
        self.0 & Self::FARMABLE != 0
    }

    pub fn tilled(self) -> bool {
        self.0 & Self::TILLED != 0
    }

    pub fn watered(self) -> bool {
        self.0 & Self::WATERED != 0
    }

    pub fn planted(self) -> bool {
        self.0 & Self::PLANTED != 0
    }

    fn insert(&mut self, tag: u8) {
        self.0 |= tag;
    }

    fn remove(&mut self, tag: u8) {
        self.0 &= !tag;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Soil grid
// ─────────────────────────────────────────────────────────────────────────────

/// Row-major grid of cell tags. Dimensions are fixed at construction from
/// the farm map and never change.
#[derive(Resource, Debug, Clone, Default)]
pub struct SoilGrid {
    width: usize,
    height: usize,
    cells: Vec<CellTags>,
}

impl SoilGrid {
    pub fn from_map(map: &FarmMap) -> Self {
        let mut cells = vec![CellTags::default(); map.width * map.height];
        for row in 0..map.height {
            for col in 0..map.width {
                if map.farmable_at((col, row)) {
                    cells[row * map.width + col].insert(CellTags::FARMABLE);
                }
            }
        }
        Self { width: map.width, height: map.height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tags at a cell; out-of-bounds addresses read as the empty tag set.
    pub fn tags(&self, cell: CellPos) -> CellTags {
        let (col, row) = cell;
        if col < self.width && row < self.height {
            self.cells[row * self.width + col]
        } else {
            CellTags::default()
        }
    }

    fn tags_mut(&mut self, cell: CellPos) -> Option<&mut CellTags> {
        let (col, row) = cell;
        if col < self.width && row < self.height {
            Some(&mut self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Cell containing a world-space point, if it lies inside the grid.
    pub fn cell_at_point(&self, point: Vec2) -> Option<CellPos> {
        let cell = point_to_cell(point)?;
        (cell.0 < self.width && cell.1 < self.height).then_some(cell)
    }

    /// Neighbor probe for the autotile classifier. Signed coordinates so
    /// callers can ask about cells one step past the edge; anything off the
    /// grid is simply not tilled.
    pub fn tilled_at(&self, col: isize, row: isize) -> bool {
        if col < 0 || row < 0 {
            return false;
        }
        self.tags((col as usize, row as usize)).tilled()
    }

    // ── Mutations ────────────────────────────────────────────────────────

    /// Till the farmable cell under `point`. Returns whether a change
    /// occurred; tilling untillable or already-tilled ground is a no-op.
    pub fn till(&mut self, point: Vec2) -> bool {
        let Some(cell) = self.cell_at_point(point) else {
            return false;
        };
        let Some(tags) = self.tags_mut(cell) else {
            return false;
        };
        if !tags.farmable() || tags.tilled() {
            return false;
        }
        tags.insert(CellTags::TILLED);
        true
    }

    /// Water the tilled cell under `point`. `Some(cell)` iff the cell was
    /// newly watered; watering untilled ground or an already-wet cell
    /// changes nothing.
    pub fn water(&mut self, point: Vec2) -> Option<CellPos> {
        let cell = self.cell_at_point(point)?;
        let tags = self.tags_mut(cell)?;
        if !tags.tilled() || tags.watered() {
            return None;
        }
        tags.insert(CellTags::WATERED);
        Some(cell)
    }

    /// Water every tilled, not-yet-watered cell (rain). Returns the cells
    /// that changed so the caller can spawn their water tiles.
    pub fn water_all(&mut self) -> Vec<CellPos> {
        let mut changed = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let tags = &mut self.cells[row * self.width + col];
                if tags.tilled() && !tags.watered() {
                    tags.insert(CellTags::WATERED);
                    changed.push((col, row));
                }
            }
        }
        changed
    }

    /// Strip the watered tag from every cell (day transition).
    pub fn remove_water(&mut self) {
        for tags in &mut self.cells {
            tags.remove(CellTags::WATERED);
        }
    }

    /// Pure query: is the cell under `point` watered?
    pub fn is_watered(&self, point: Vec2) -> bool {
        self.cell_at_point(point)
            .map(|cell| self.tags(cell).watered())
            .unwrap_or(false)
    }

    /// Mark the tilled cell under `point` planted. `Some(cell)` iff the
    /// cell was newly planted.
    pub fn plant_seed(&mut self, point: Vec2) -> Option<CellPos> {
        let cell = self.cell_at_point(point)?;
        let tags = self.tags_mut(cell)?;
        if !tags.tilled() || tags.planted() {
            return None;
        }
        tags.insert(CellTags::PLANTED);
        Some(cell)
    }

    /// Remove the planted tag after a harvest or dig-up. The cell stays
    /// tilled.
    pub fn clear_plant(&mut self, cell: CellPos) {
        if let Some(tags) = self.tags_mut(cell) {
            tags.remove(CellTags::PLANTED);
        }
    }

    /// All currently tilled cells, row-major order.
    pub fn tilled_cells(&self) -> Vec<CellPos> {
        let mut cells = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[row * self.width + col].tilled() {
                    cells.push((col, row));
                }
            }
        }
        cells
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::TILE_SIZE;

    /// 4×3 map, farmable everywhere except the rightmost column.
    fn test_grid() -> SoilGrid {
        let farmable: Vec<bool> = (0..12).map(|i| i % 4 != 3).collect();
        SoilGrid::from_map(&FarmMap::new(4, 3, farmable))
    }

    fn centre(cell: CellPos) -> Vec2 {
        Vec2::new(
            cell.0 as f32 * TILE_SIZE + TILE_SIZE / 2.0,
            cell.1 as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        )
    }

    #[test]
    fn till_requires_farmable() {
        let mut grid = test_grid();
        // Column 3 is not farmable.
        assert!(!grid.till(centre((3, 0))));
        assert!(!grid.tags((3, 0)).tilled());
        assert!(grid.till(centre((0, 0))));
        assert!(grid.tags((0, 0)).tilled());
    }

    #[test]
    fn till_is_idempotent() {
        let mut grid = test_grid();
        assert!(grid.till(centre((1, 1))));
        assert!(!grid.till(centre((1, 1))), "second till reports no change");
    }

    #[test]
    fn till_outside_grid_is_noop() {
        let mut grid = test_grid();
        assert!(!grid.till(Vec2::new(-10.0, 5.0)));
        assert!(!grid.till(Vec2::new(9999.0, 9999.0)));
        assert!(grid.tilled_cells().is_empty());
    }

    #[test]
    fn water_requires_tilled() {
        let mut grid = test_grid();
        assert_eq!(grid.water(centre((0, 0))), None, "untilled cell");
        grid.till(centre((0, 0)));
        assert_eq!(grid.water(centre((0, 0))), Some((0, 0)));
        assert_eq!(grid.water(centre((0, 0))), None, "already watered");
        assert!(grid.is_watered(centre((0, 0))));
    }

    #[test]
    fn water_all_covers_exactly_the_tilled_cells() {
        let mut grid = test_grid();
        grid.till(centre((0, 0)));
        grid.till(centre((2, 1)));
        let changed = grid.water_all();
        assert_eq!(changed, vec![(0, 0), (2, 1)]);
        assert!(grid.is_watered(centre((0, 0))));
        assert!(grid.is_watered(centre((2, 1))));
        assert!(!grid.is_watered(centre((1, 0))), "untilled cell stays dry");
        // Second rain changes nothing.
        assert!(grid.water_all().is_empty());
    }

    #[test]
    fn remove_water_clears_every_cell() {
        let mut grid = test_grid();
        grid.till(centre((0, 0)));
        grid.till(centre((1, 0)));
        grid.water_all();
        grid.remove_water();
        for row in 0..3 {
            for col in 0..4 {
                assert!(!grid.tags((col, row)).watered());
            }
        }
        // Tilled state survives the night.
        assert!(grid.tags((0, 0)).tilled());
    }

    #[test]
    fn plant_requires_tilled_and_is_exclusive() {
        let mut grid = test_grid();
        assert_eq!(grid.plant_seed(centre((0, 0))), None, "untilled");
        grid.till(centre((0, 0)));
        assert_eq!(grid.plant_seed(centre((0, 0))), Some((0, 0)));
        assert_eq!(grid.plant_seed(centre((0, 0))), None, "already planted");
        grid.clear_plant((0, 0));
        assert!(!grid.tags((0, 0)).planted());
        assert!(grid.tags((0, 0)).tilled());
    }

    #[test]
    fn queries_off_grid_are_false() {
        let grid = test_grid();
        assert!(!grid.is_watered(Vec2::new(-1.0, -1.0)));
        assert!(!grid.tilled_at(-1, 0));
        assert!(!grid.tilled_at(0, -1));
        assert!(!grid.tilled_at(4, 0));
        assert!(!grid.tilled_at(0, 3));
    }
}

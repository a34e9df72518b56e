//! Autotile classification for tilled soil patches.
//!
//! Given the tilled flags of a cell's four cardinal neighbors, pick which
//! of the 16 edge/corner art pieces to draw. The rules are applied as
//! successive overrides in a fixed order — they are not mutually exclusive
//! by construction, only by the ordering, and the last applicable rule
//! wins. The order matches the existing art exactly and must not change.
//!
//! Naming is cross-mapped on purpose: a tile with only its LEFT neighbor
//! tilled draws the RIGHT-facing edge piece (`r`), because the patch
//! continues to the left and this tile closes it on the right. Same for
//! every corner and T-junction name.

use crate::shared::CellPos;

use super::grid::SoilGrid;

/// The named soil art pieces, keyed into the soil image set by
/// [`SoilVariant::asset_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilVariant {
    /// Isolated patch, no tilled neighbors.
    O,
    /// Fully surrounded.
    X,
    L,
    R,
    Lr,
    T,
    B,
    Tb,
    Tl,
    Tr,
    Bl,
    Br,
    Tbr,
    Tbl,
    Lrb,
    Lrt,
}

impl SoilVariant {
    pub const ALL: [SoilVariant; 16] = [
        SoilVariant::O,
        SoilVariant::X,
        SoilVariant::L,
        SoilVariant::R,
        SoilVariant::Lr,
        SoilVariant::T,
        SoilVariant::B,
        SoilVariant::Tb,
        SoilVariant::Tl,
        SoilVariant::Tr,
        SoilVariant::Bl,
        SoilVariant::Br,
        SoilVariant::Tbr,
        SoilVariant::Tbl,
        SoilVariant::Lrb,
        SoilVariant::Lrt,
    ];

    /// File stem of the art piece for this variant.
    pub fn asset_key(self) -> &'static str {
        match self {
            SoilVariant::O => "o",
            SoilVariant::X => "x",
            SoilVariant::L => "l",
            SoilVariant::R => "r",
            SoilVariant::Lr => "lr",
            SoilVariant::T => "t",
            SoilVariant::B => "b",
            SoilVariant::Tb => "tb",
            SoilVariant::Tl => "tl",
            SoilVariant::Tr => "tr",
            SoilVariant::Bl => "bl",
            SoilVariant::Br => "br",
            SoilVariant::Tbr => "tbr",
            SoilVariant::Tbl => "tbl",
            SoilVariant::Lrb => "lrb",
            SoilVariant::Lrt => "lrt",
        }
    }
}

/// Classify from the four neighbors' tilled flags: top, bottom, left,
/// right. Later rules overwrite earlier ones.
pub fn classify(t: bool, b: bool, l: bool, r: bool) -> SoilVariant {
    let mut variant = SoilVariant::O;

    // all sides
    if t && b && l && r {
        variant = SoilVariant::X;
    }

    // horizontal runs
    if l && !(t || r || b) {
        variant = SoilVariant::R;
    }
    if r && !(t || l || b) {
        variant = SoilVariant::L;
    }
    if l && r && !(t || b) {
        variant = SoilVariant::Lr;
    }

    // vertical runs
    if t && !(r || l || b) {
        variant = SoilVariant::B;
    }
    if b && !(r || l || t) {
        variant = SoilVariant::T;
    }
    if b && t && !(r || l) {
        variant = SoilVariant::Tb;
    }

    // corners
    if l && b && !(t || r) {
        variant = SoilVariant::Tr;
    }
    if r && b && !(t || l) {
        variant = SoilVariant::Tl;
    }
    if l && t && !(b || r) {
        variant = SoilVariant::Br;
    }
    if r && t && !(b || l) {
        variant = SoilVariant::Bl;
    }

    // T shapes
    if t && b && r && !l {
        variant = SoilVariant::Tbr;
    }
    if t && b && l && !r {
        variant = SoilVariant::Tbl;
    }
    if l && r && t && !b {
        variant = SoilVariant::Lrb;
    }
    if l && r && b && !t {
        variant = SoilVariant::Lrt;
    }

    variant
}

/// Classify a tilled cell in place on the grid. Neighbors past the grid
/// edge count as not tilled.
pub fn classify_cell(grid: &SoilGrid, cell: CellPos) -> SoilVariant {
    let (col, row) = (cell.0 as isize, cell.1 as isize);
    classify(
        grid.tilled_at(col, row - 1),
        grid.tilled_at(col, row + 1),
        grid.tilled_at(col - 1, row),
        grid.tilled_at(col + 1, row),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FarmMap;

    #[test]
    fn isolated_cell_is_o() {
        assert_eq!(classify(false, false, false, false), SoilVariant::O);
    }

    #[test]
    fn full_surround_is_x() {
        assert_eq!(classify(true, true, true, true), SoilVariant::X);
    }

    #[test]
    fn edge_names_are_cross_mapped() {
        // Patch continues to the left → this tile is the right-facing edge.
        assert_eq!(classify(false, false, true, false), SoilVariant::R);
        assert_eq!(classify(false, false, false, true), SoilVariant::L);
        assert_eq!(classify(true, false, false, false), SoilVariant::B);
        assert_eq!(classify(false, true, false, false), SoilVariant::T);
    }

    #[test]
    fn straight_runs() {
        assert_eq!(classify(false, false, true, true), SoilVariant::Lr);
        assert_eq!(classify(true, true, false, false), SoilVariant::Tb);
    }

    #[test]
    fn corners() {
        assert_eq!(classify(false, true, true, false), SoilVariant::Tr);
        assert_eq!(classify(false, true, false, true), SoilVariant::Tl);
        assert_eq!(classify(true, false, true, false), SoilVariant::Br);
        assert_eq!(classify(true, false, false, true), SoilVariant::Bl);
    }

    #[test]
    fn t_junctions() {
        assert_eq!(classify(true, true, false, true), SoilVariant::Tbr);
        assert_eq!(classify(true, true, true, false), SoilVariant::Tbl);
        assert_eq!(classify(true, false, true, true), SoilVariant::Lrb);
        assert_eq!(classify(false, true, true, true), SoilVariant::Lrt);
    }

    /// Rotating the neighbor pattern 90° clockwise maps each variant to the
    /// variant with correspondingly rotated letters (t→r, r→b, b→l, l→t).
    #[test]
    fn rotation_symmetry() {
        fn rotate_pattern(t: bool, b: bool, l: bool, r: bool) -> (bool, bool, bool, bool) {
            // left neighbor moves to top, top to right, right to bottom,
            // bottom to left
            (l, r, b, t)
        }

        fn rotate_variant(v: SoilVariant) -> SoilVariant {
            match v {
                SoilVariant::O => SoilVariant::O,
                SoilVariant::X => SoilVariant::X,
                SoilVariant::T => SoilVariant::R,
                SoilVariant::R => SoilVariant::B,
                SoilVariant::B => SoilVariant::L,
                SoilVariant::L => SoilVariant::T,
                SoilVariant::Tb => SoilVariant::Lr,
                SoilVariant::Lr => SoilVariant::Tb,
                SoilVariant::Tr => SoilVariant::Br,
                SoilVariant::Br => SoilVariant::Bl,
                SoilVariant::Bl => SoilVariant::Tl,
                SoilVariant::Tl => SoilVariant::Tr,
                // The cross-mapped T-junction names rotate against the
                // letter direction: each name describes the closed sides,
                // not the open one.
                SoilVariant::Tbr => SoilVariant::Lrt,
                SoilVariant::Lrt => SoilVariant::Tbl,
                SoilVariant::Tbl => SoilVariant::Lrb,
                SoilVariant::Lrb => SoilVariant::Tbr,
            }
        }

        for bits in 0u8..16 {
            let (t, b, l, r) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let (t2, b2, l2, r2) = rotate_pattern(t, b, l, r);
            assert_eq!(
                classify(t2, b2, l2, r2),
                rotate_variant(classify(t, b, l, r)),
                "pattern t={t} b={b} l={l} r={r}"
            );
        }
    }

    #[test]
    fn plus_shape_centre_classifies_as_x() {
        // 3×3 farmable map, till a plus shape.
        let map = FarmMap::new(3, 3, vec![true; 9]);
        let mut grid = SoilGrid::from_map(&map);
        for cell in [(1usize, 0usize), (0, 1), (1, 1), (2, 1), (1, 2)] {
            let point = bevy::math::Vec2::new(
                cell.0 as f32 * crate::shared::TILE_SIZE + 1.0,
                cell.1 as f32 * crate::shared::TILE_SIZE + 1.0,
            );
            assert!(grid.till(point));
        }
        assert_eq!(classify_cell(&grid, (1, 1)), SoilVariant::X);
        // The arms are single edges with the cross-mapped names.
        assert_eq!(classify_cell(&grid, (0, 1)), SoilVariant::L);
        assert_eq!(classify_cell(&grid, (2, 1)), SoilVariant::R);
        assert_eq!(classify_cell(&grid, (1, 0)), SoilVariant::T);
        assert_eq!(classify_cell(&grid, (1, 2)), SoilVariant::B);
    }

    #[test]
    fn lone_tilled_cell_on_grid_is_o() {
        let map = FarmMap::new(3, 3, vec![true; 9]);
        let mut grid = SoilGrid::from_map(&map);
        grid.till(bevy::math::Vec2::new(70.0, 70.0)); // cell (1, 1)
        assert_eq!(classify_cell(&grid, (1, 1)), SoilVariant::O);
    }
}

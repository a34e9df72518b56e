//! The farmable-cell mask, read from a RON resource bundled with the game.
//!
//! Each row string is one map row; `F` marks a farmable cell, anything
//! else is untillable ground.

use serde::Deserialize;

use crate::shared::FarmMap;

const FARM_MAP_RON: &str = include_str!("../../assets/data/farm.ron");

#[derive(Debug, Deserialize)]
struct FarmMapData {
    rows: Vec<String>,
}

/// Parse the bundled farm map. Panics on malformed data — a bad map is a
/// build mistake, not a runtime condition.
pub fn load_farm_map() -> FarmMap {
    parse_farm_map(FARM_MAP_RON)
}

pub fn parse_farm_map(source: &str) -> FarmMap {
    let data: FarmMapData = match ron::from_str(source) {
        Ok(data) => data,
        Err(err) => panic!("farm map is not valid RON: {err}"),
    };

    let height = data.rows.len();
    if height == 0 {
        panic!("farm map has no rows");
    }
    let width = data.rows[0].chars().count();
    if width == 0 {
        panic!("farm map rows are empty");
    }

    let mut farmable = Vec::with_capacity(width * height);
    for (idx, row) in data.rows.iter().enumerate() {
        if row.chars().count() != width {
            panic!(
                "farm map row {idx} is {} cells wide, expected {width}",
                row.chars().count()
            );
        }
        farmable.extend(row.chars().map(|c| c == 'F'));
    }

    FarmMap::new(width, height, farmable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_into_mask() {
        let map = parse_farm_map(r#"(rows: ["..F", "FF.", "..."])"#);
        assert_eq!((map.width, map.height), (3, 3));
        assert!(map.farmable_at((2, 0)));
        assert!(map.farmable_at((0, 1)));
        assert!(map.farmable_at((1, 1)));
        assert!(!map.farmable_at((0, 0)));
        assert!(!map.farmable_at((2, 2)));
    }

    #[test]
    #[should_panic(expected = "row 1")]
    fn ragged_rows_fail() {
        parse_farm_map(r#"(rows: ["..F", "FF"])"#);
    }

    #[test]
    fn bundled_map_is_well_formed() {
        let map = load_farm_map();
        assert!(map.width > 0 && map.height > 0);
        assert!(map.farmable_count() > 0, "bundled map has farmable land");
    }
}

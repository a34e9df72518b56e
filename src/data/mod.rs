//! Data layer — populates the plant registry and the farm map at startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills the registries
//! from the bundled game-design data, validates them fail-fast, then
//! transitions the game into GameState::Playing. All domain plugins can
//! safely read them once GameState has advanced past Loading.

pub mod farm_map;
pub mod plants;

use bevy::prelude::*;

use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Single system that populates everything and then transitions to Playing.
fn load_all_data(
    mut registry: ResMut<PlantRegistry>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("DataPlugin: populating registries…");

    plants::populate_plants(&mut registry);
    plants::validate_plants(&registry);
    info!("  Plant kinds loaded: {}", registry.plants.len());

    let map = farm_map::load_farm_map();
    info!(
        "  Farm map: {}×{}, {} farmable cells",
        map.width,
        map.height,
        map.farmable_count()
    );
    commands.insert_resource(map);

    next_state.set(GameState::Playing);
}

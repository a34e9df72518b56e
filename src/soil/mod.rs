//! Soil domain — tilling, watering, autotiling, planting, growth, harvest.
//!
//! Communicates with other domains exclusively through crate::shared
//! events/resources. The grid is owned here; nothing outside this module
//! mutates soil state.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::shared::*;

pub mod assets;
pub mod autotile;
pub mod day;
pub mod grid;
pub mod plants;
pub mod render;
pub mod tools;

use autotile::SoilVariant;

/// Marker component for a soil tile sprite at a tilled cell.
#[derive(Component, Debug, Clone)]
pub struct SoilTileSprite {
    pub cell: CellPos,
    pub variant: SoilVariant,
}

/// Marker component for a water overlay sprite at a watered cell.
#[derive(Component, Debug, Clone)]
pub struct WaterTileSprite {
    pub cell: CellPos,
}

/// Tracks which soil/water/plant entities exist keyed by cell, so systems
/// can find the ECS entity for a given tile quickly.
#[derive(Resource, Default, Debug)]
pub struct SoilEntities {
    pub soil: HashMap<CellPos, Entity>,
    pub water: HashMap<CellPos, Entity>,
    pub plants: HashMap<CellPos, Entity>,
}

/// Set whenever tillage changed; the soil layer is rebuilt at the end of
/// the frame.
#[derive(Resource, Default, Debug)]
pub struct SoilTilesDirty(pub bool);

/// Build the grid from the farm map once Playing begins. The map is
/// populated by the data layer during Loading.
fn init_soil_grid(map: Res<FarmMap>, mut grid: ResMut<grid::SoilGrid>) {
    *grid = grid::SoilGrid::from_map(&map);
}

pub struct SoilPlugin;

impl Plugin for SoilPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoilEntities>()
            .init_resource::<SoilTilesDirty>()
            .init_resource::<grid::SoilGrid>()
            .init_resource::<assets::SoilAssets>()
            .add_systems(
                OnEnter(GameState::Playing),
                (init_soil_grid, assets::load_soil_assets),
            )
            .add_systems(
                Update,
                (
                    tools::handle_hoe_tool_use,
                    tools::handle_watering_can_tool_use,
                    plants::handle_plant_seed,
                    plants::handle_harvest_attempt,
                    day::on_day_end,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            // Visual sync runs after all state mutations.
            .add_systems(
                PostUpdate,
                (render::regenerate_soil_tiles, render::sync_plant_sprites)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

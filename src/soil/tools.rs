//! Tool-use handlers — hoe tills, watering can waters.

use bevy::prelude::*;

use crate::shared::*;

use super::assets::SoilAssets;
use super::grid::SoilGrid;
use super::render::spawn_water_tile;
use super::{SoilEntities, SoilTilesDirty};

pub fn handle_hoe_tool_use(
    mut tool_events: EventReader<ToolUseEvent>,
    mut grid: ResMut<SoilGrid>,
    mut dirty: ResMut<SoilTilesDirty>,
    mut entities: ResMut<SoilEntities>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
    weather: Res<Weather>,
    assets: Res<SoilAssets>,
) {
    for event in tool_events.read() {
        if event.tool != ToolKind::Hoe {
            continue;
        }

        // Untillable or already-tilled ground: silent no-op.
        if !grid.till(event.target) {
            continue;
        }

        // The new tile changes its neighbors' variants too, so the whole
        // soil layer is rebuilt.
        dirty.0 = true;

        // Tilling during rain: the fresh tile (and any dry stragglers) get
        // watered immediately.
        if weather.raining {
            for cell in grid.water_all() {
                spawn_water_tile(&mut commands, &mut entities, &assets, &mut rng, cell);
            }
        }
    }
}

pub fn handle_watering_can_tool_use(
    mut tool_events: EventReader<ToolUseEvent>,
    mut grid: ResMut<SoilGrid>,
    mut entities: ResMut<SoilEntities>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
    assets: Res<SoilAssets>,
) {
    for event in tool_events.read() {
        if event.tool != ToolKind::WateringCan {
            continue;
        }
        if let Some(cell) = grid.water(event.target) {
            spawn_water_tile(&mut commands, &mut entities, &assets, &mut rng, cell);
        }
    }
}

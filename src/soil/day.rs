//! Day-transition orchestration for the soil domain.
//!
//! One DayEndEvent = one growth tick. Order matters: plants read the
//! watered tags of the day that just ended, then the night strips the
//! water, then tomorrow's weather is rolled and rain pre-waters the field.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

use super::assets::SoilAssets;
use super::grid::SoilGrid;
use super::plants::{advance_plants, Plant, PlantHitbox};
use super::render::{despawn_all_water_tiles, spawn_water_tile};
use super::{SoilEntities, WaterTileSprite};

pub fn on_day_end(
    mut day_events: EventReader<DayEndEvent>,
    mut grid: ResMut<SoilGrid>,
    mut entities: ResMut<SoilEntities>,
    mut weather: ResMut<Weather>,
    mut rng: ResMut<GameRng>,
    mut commands: Commands,
    assets: Res<SoilAssets>,
    mut plants: Query<(Entity, &mut Plant, &mut Transform, Option<&PlantHitbox>)>,
    water_tiles: Query<Entity, With<WaterTileSprite>>,
) {
    for _ in day_events.read() {
        advance_plants(&grid, &mut commands, &mut plants);

        grid.remove_water();
        despawn_all_water_tiles(&mut commands, &mut entities, &water_tiles);

        weather.raining = rng.0.gen_range(0..=10) > 7;
        if weather.raining {
            info!("a rainy day begins");
            for cell in grid.water_all() {
                spawn_water_tile(&mut commands, &mut entities, &assets, &mut rng, cell);
            }
        }
    }
}

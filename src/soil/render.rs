//! Sprite-side systems — soil tile regeneration, water tiles, plant frames.

use bevy::prelude::*;

use crate::shared::*;

use super::assets::SoilAssets;
use super::autotile::classify_cell;
use super::grid::SoilGrid;
use super::plants::Plant;
use super::{SoilEntities, SoilTileSprite, SoilTilesDirty, WaterTileSprite};

// ─────────────────────────────────────────────────────────────────────────────
// Soil tiles
// ─────────────────────────────────────────────────────────────────────────────

/// Rebuild every soil tile sprite from the grid.
///
/// This is the destroy-all/recreate-all policy from the original design:
/// O(grid) per till action, fine at farm scale. The dirty flag is the only
/// entry point, so an incremental rebuild could replace this system
/// without touching any caller.
pub fn regenerate_soil_tiles(
    mut dirty: ResMut<SoilTilesDirty>,
    mut entities: ResMut<SoilEntities>,
    mut commands: Commands,
    grid: Res<SoilGrid>,
    assets: Res<SoilAssets>,
    existing: Query<Entity, With<SoilTileSprite>>,
) {
    if !dirty.0 {
        return;
    }
    dirty.0 = false;

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    entities.soil.clear();

    for cell in grid.tilled_cells() {
        let variant = classify_cell(&grid, cell);
        let entity = commands
            .spawn((
                Sprite {
                    image: assets.soil_variant(variant),
                    custom_size: Some(Vec2::splat(TILE_SIZE)),
                    ..default()
                },
                Transform::from_translation(cell_to_world(cell, layer::SOIL)),
                SoilTileSprite { cell, variant },
            ))
            .id();
        entities.soil.insert(cell, entity);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Water tiles
// ─────────────────────────────────────────────────────────────────────────────

/// Spawn one water overlay at a freshly watered cell, with a skin drawn
/// from the seeded RNG.
pub fn spawn_water_tile(
    commands: &mut Commands,
    entities: &mut SoilEntities,
    assets: &SoilAssets,
    rng: &mut GameRng,
    cell: CellPos,
) {
    if entities.water.contains_key(&cell) {
        return;
    }
    let entity = commands
        .spawn((
            Sprite {
                image: assets.random_water_skin(&mut rng.0),
                custom_size: Some(Vec2::splat(TILE_SIZE)),
                ..default()
            },
            Transform::from_translation(cell_to_world(cell, layer::SOIL_WATER)),
            WaterTileSprite { cell },
        ))
        .id();
    entities.water.insert(cell, entity);
}

/// Destroy every water overlay; pairs with `SoilGrid::remove_water`.
pub fn despawn_all_water_tiles(
    commands: &mut Commands,
    entities: &mut SoilEntities,
    water: &Query<Entity, With<WaterTileSprite>>,
) {
    for entity in water {
        commands.entity(entity).despawn();
    }
    entities.water.clear();
}

// ─────────────────────────────────────────────────────────────────────────────
// Plant frames
// ─────────────────────────────────────────────────────────────────────────────

/// Keep each plant sprite showing the frame for `floor(age)`.
pub fn sync_plant_sprites(
    assets: Res<SoilAssets>,
    mut plants: Query<(&Plant, &mut Sprite), Changed<Plant>>,
) {
    for (plant, mut sprite) in plants.iter_mut() {
        sprite.image = assets.plant_frame(plant.kind, plant.frame());
    }
}

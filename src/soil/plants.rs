//! Plant entities — seeding, the growth state machine, and harvest.

use bevy::prelude::*;

use crate::shared::*;

use super::assets::SoilAssets;
use super::grid::SoilGrid;
use super::SoilEntities;

/// A crop growing on one soil cell. Growth is driven purely by the owning
/// cell's watered state, one tick per day transition.
#[derive(Component, Debug, Clone)]
pub struct Plant {
    pub kind: PlantKind,
    pub cell: CellPos,
    /// Continuous age; the visual frame is `floor(age)`.
    pub age: f32,
    /// `frame_count - 1`. Age is clamped here and never exceeds it.
    pub max_age: f32,
    pub grow_speed: f32,
    pub harvestable: bool,
    pub y_offset: f32,
}

impl Plant {
    pub fn new(def: &PlantDef, cell: CellPos) -> Self {
        Self {
            kind: def.kind,
            cell,
            age: 0.0,
            max_age: (def.frame_count - 1) as f32,
            grow_speed: def.grow_speed,
            harvestable: false,
            y_offset: def.y_offset,
        }
    }

    /// One growth tick. An unwatered tick changes nothing; a watered tick
    /// adds the per-kind rate, clamped at `max_age`, where the plant
    /// becomes harvestable and freezes.
    pub fn grow(&mut self, watered: bool) {
        if !watered {
            return;
        }
        self.age += self.grow_speed;
        if self.age >= self.max_age {
            self.age = self.max_age;
            self.harvestable = true;
        }
    }

    /// Frame index into the kind's growth animation.
    pub fn frame(&self) -> usize {
        self.age as usize
    }

    /// Past the seedling stage: the sprite moves from the ground-plant
    /// layer to the main layer and gains a hitbox.
    pub fn sprouted(&self) -> bool {
        self.frame() > 0
    }
}

/// Collision box for a sprouted plant, shrunk in from the sprite bounds.
#[derive(Component, Debug, Clone)]
pub struct PlantHitbox(pub Rect);

// ─────────────────────────────────────────────────────────────────────────────
// Seeding
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_plant_seed(
    mut plant_events: EventReader<PlantSeedEvent>,
    mut grid: ResMut<SoilGrid>,
    mut entities: ResMut<SoilEntities>,
    mut commands: Commands,
    registry: Res<PlantRegistry>,
    assets: Res<SoilAssets>,
) {
    for event in plant_events.read() {
        // No-op unless the target cell is tilled and not yet planted.
        let Some(cell) = grid.plant_seed(event.target) else {
            continue;
        };

        let Some(def) = registry.get(event.kind) else {
            // Registry validation runs at startup, so this is unreachable
            // in a correctly configured game.
            warn!("no plant definition for {:?}; seed wasted", event.kind);
            grid.clear_plant(cell);
            continue;
        };

        let plant = Plant::new(def, cell);
        let mut translation = cell_to_world(cell, layer::GROUND_PLANT);
        translation.y += def.y_offset;

        let entity = commands
            .spawn((
                Sprite {
                    image: assets.plant_frame(event.kind, 0),
                    custom_size: Some(Vec2::splat(TILE_SIZE)),
                    ..default()
                },
                Transform::from_translation(translation),
                plant,
            ))
            .id();
        entities.plants.insert(cell, entity);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Growth
// ─────────────────────────────────────────────────────────────────────────────

/// Advance every live plant one tick. Called once per DayEndEvent, before
/// the night strips the watered tags.
pub fn advance_plants(
    grid: &SoilGrid,
    commands: &mut Commands,
    plants: &mut Query<(Entity, &mut Plant, &mut Transform, Option<&PlantHitbox>)>,
) {
    for (entity, mut plant, mut transform, hitbox) in plants.iter_mut() {
        let watered = grid.tags(plant.cell).watered();
        plant.grow(watered);

        if plant.sprouted() {
            transform.translation.z = layer::MAIN;
            if hitbox.is_none() {
                // Shrink the tile-sized sprite bounds: trim the sides and
                // lop 40% off the height.
                let size = Vec2::new(TILE_SIZE - 26.0, TILE_SIZE * 0.6);
                let rect = Rect::from_center_size(transform.translation.truncate(), size);
                commands.entity(entity).insert(PlantHitbox(rect));
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Harvest
// ─────────────────────────────────────────────────────────────────────────────

/// Harvest a ripe plant under the target point: despawn it and free the
/// cell for replanting. The soil stays tilled.
pub fn handle_harvest_attempt(
    mut harvest_events: EventReader<HarvestAttemptEvent>,
    mut grid: ResMut<SoilGrid>,
    mut entities: ResMut<SoilEntities>,
    mut commands: Commands,
    plants: Query<&Plant>,
) {
    for event in harvest_events.read() {
        let Some(cell) = grid.cell_at_point(event.target) else {
            continue;
        };
        let Some(&entity) = entities.plants.get(&cell) else {
            continue;
        };
        let Ok(plant) = plants.get(entity) else {
            continue;
        };
        if !plant.harvestable {
            continue;
        }

        commands.entity(entity).despawn();
        entities.plants.remove(&cell);
        grid.clear_plant(cell);
        info!("harvested {:?} at {:?}", plant.kind, cell);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(grow_speed: f32, frame_count: usize) -> Plant {
        let def = PlantDef {
            kind: PlantKind::Corn,
            grow_speed,
            frame_count,
            y_offset: -16.0,
        };
        Plant::new(&def, (0, 0))
    }

    #[test]
    fn grows_to_harvestable_and_pins_at_max_age() {
        let mut p = plant(1.0, 5); // max_age = 4
        for tick in 1..=4 {
            p.grow(true);
            assert_eq!(p.age, tick as f32);
        }
        assert!(p.harvestable);
        // Fifth watered tick: age stays pinned.
        p.grow(true);
        assert_eq!(p.age, 4.0);
        assert!(p.harvestable);
    }

    #[test]
    fn unwatered_ticks_never_advance() {
        let mut p = plant(1.0, 5);
        for _ in 0..10 {
            p.grow(false);
        }
        assert_eq!(p.age, 0.0);
        assert!(!p.harvestable);
        assert!(!p.sprouted());
    }

    #[test]
    fn fractional_rate_crosses_frame_thresholds_slowly() {
        let mut p = plant(0.7, 5);
        p.grow(true);
        assert_eq!(p.frame(), 0, "0.7 still seedling");
        assert!(!p.sprouted());
        p.grow(true);
        assert_eq!(p.frame(), 1, "1.4 sprouted");
        assert!(p.sprouted());
        // 6 ticks total: 4.2 clamps to max_age 4.
        for _ in 0..4 {
            p.grow(true);
        }
        assert_eq!(p.age, 4.0);
        assert!(p.harvestable);
    }

    #[test]
    fn frame_tracks_integer_part_of_age() {
        let mut p = plant(1.0, 5);
        assert_eq!(p.frame(), 0);
        p.grow(true);
        assert_eq!(p.frame(), 1);
        p.grow(true);
        assert_eq!(p.frame(), 2);
    }
}

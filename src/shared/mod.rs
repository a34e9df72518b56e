//! Shared components, resources, events, and states for Loamfield.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const TILE_SIZE: f32 = 64.0;
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Render-layer Z ordering. Sprites are drawn back to front.
pub mod layer {
    pub const GROUND: f32 = 0.0;
    pub const SOIL: f32 = 1.0;
    pub const SOIL_WATER: f32 = 2.0;
    pub const GROUND_PLANT: f32 = 3.0;
    pub const MAIN: f32 = 4.0;
    pub const OVERLAY: f32 = 10.0;
}

// ═══════════════════════════════════════════════════════════════════════
// GRID ADDRESSING
// ═══════════════════════════════════════════════════════════════════════

/// A cell address: (col, row), row 0 at the top-left of the farm map.
pub type CellPos = (usize, usize);

/// Map a world-space point to a cell address. Points with a negative
/// coordinate are off-grid by definition (bounds against a concrete grid
/// are checked by the owner of that grid).
pub fn point_to_cell(point: Vec2) -> Option<CellPos> {
    if point.x < 0.0 || point.y < 0.0 {
        return None;
    }
    Some((
        (point.x / TILE_SIZE) as usize,
        (point.y / TILE_SIZE) as usize,
    ))
}

/// World-space translation for a cell at the given render layer.
pub fn cell_to_world(cell: CellPos, z: f32) -> Vec3 {
    Vec3::new(cell.0 as f32 * TILE_SIZE, cell.1 as f32 * TILE_SIZE, z)
}

// ═══════════════════════════════════════════════════════════════════════
// PLANTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum PlantKind {
    Corn,
    Tomato,
}

impl PlantKind {
    pub const ALL: [PlantKind; 2] = [PlantKind::Corn, PlantKind::Tomato];

    /// Asset folder name for this plant's growth frames.
    pub fn asset_key(self) -> &'static str {
        match self {
            PlantKind::Corn => "corn",
            PlantKind::Tomato => "tomato",
        }
    }
}

/// Static per-kind growth configuration supplied by the data layer.
#[derive(Debug, Clone)]
pub struct PlantDef {
    pub kind: PlantKind,
    /// Age gained per watered growth tick. Fractional rates take several
    /// ticks to cross a frame threshold.
    pub grow_speed: f32,
    /// Number of animation frames; max age is `frame_count - 1`.
    pub frame_count: usize,
    /// Vertical sprite offset so tall plants sit on the soil tile.
    pub y_offset: f32,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct PlantRegistry {
    pub plants: HashMap<PlantKind, PlantDef>,
}

impl PlantRegistry {
    pub fn get(&self, kind: PlantKind) -> Option<&PlantDef> {
        self.plants.get(&kind)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FARM MAP — the immutable farmable-cell mask
// ═══════════════════════════════════════════════════════════════════════

/// Which cells of the map may ever be tilled. Built once at startup from
/// the map resource, never mutated afterwards.
#[derive(Resource, Debug, Clone, Default)]
pub struct FarmMap {
    pub width: usize,
    pub height: usize,
    farmable: Vec<bool>,
}

impl FarmMap {
    pub fn new(width: usize, height: usize, farmable: Vec<bool>) -> Self {
        debug_assert_eq!(farmable.len(), width * height);
        Self { width, height, farmable }
    }

    pub fn farmable_at(&self, cell: CellPos) -> bool {
        let (col, row) = cell;
        col < self.width && row < self.height && self.farmable[row * self.width + col]
    }

    pub fn farmable_count(&self) -> usize {
        self.farmable.iter().filter(|&&f| f).count()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WEATHER & RNG
// ═══════════════════════════════════════════════════════════════════════

/// Today's sky. Re-rolled at every day transition.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Weather {
    pub raining: bool,
}

/// Seedable random source for water-skin choice and weather rolls.
/// Injected as a resource so tests can pin the seed.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Hoe,
    WateringCan,
}

/// The player used a tool at a world-space point.
#[derive(Event, Debug, Clone)]
pub struct ToolUseEvent {
    pub tool: ToolKind,
    pub target: Vec2,
}

/// The player used a seed at a world-space point.
#[derive(Event, Debug, Clone)]
pub struct PlantSeedEvent {
    pub target: Vec2,
    pub kind: PlantKind,
}

/// The player tried to harvest at a world-space point.
#[derive(Event, Debug, Clone)]
pub struct HarvestAttemptEvent {
    pub target: Vec2,
}

/// The player went to bed; the transition overlay starts fading.
#[derive(Event, Debug, Clone)]
pub struct SleepEvent;

/// Fired once per day transition, at the black midpoint of the fade.
/// One event = one growth tick for every live plant.
#[derive(Event, Debug, Clone)]
pub struct DayEndEvent;

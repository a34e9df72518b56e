//! Image assets for the soil domain: the variant-keyed soil pieces, the
//! water-tile skins, and each plant kind's growth frames.
//!
//! Loaded once on entering Playing. Lookups are total: before loading (or
//! in headless tests) they return default handles, which render as plain
//! quads and keep every system runnable without an asset server.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;

use crate::shared::{PlantKind, PlantRegistry};

use super::autotile::SoilVariant;

/// Number of interchangeable watered-soil skins on disk
/// (`soil_water/0.png` …).
pub const WATER_SKIN_COUNT: usize = 3;

#[derive(Resource, Default)]
pub struct SoilAssets {
    pub loaded: bool,
    soil: HashMap<SoilVariant, Handle<Image>>,
    water: Vec<Handle<Image>>,
    plants: HashMap<PlantKind, Vec<Handle<Image>>>,
}

impl SoilAssets {
    pub fn soil_variant(&self, variant: SoilVariant) -> Handle<Image> {
        self.soil.get(&variant).cloned().unwrap_or_default()
    }

    /// One of the equivalent water skins, chosen uniformly.
    pub fn random_water_skin(&self, rng: &mut impl Rng) -> Handle<Image> {
        if self.water.is_empty() {
            return Handle::default();
        }
        self.water[rng.gen_range(0..self.water.len())].clone()
    }

    pub fn plant_frame(&self, kind: PlantKind, frame: usize) -> Handle<Image> {
        self.plants
            .get(&kind)
            .and_then(|frames| frames.get(frame))
            .cloned()
            .unwrap_or_default()
    }
}

/// Load every soil/water/plant image once when Playing is entered.
///
/// Assets:
///   assets/soil/{variant}.png   — one piece per autotile variant name
///   assets/soil_water/{i}.png   — interchangeable wet-soil overlays
///   assets/fruit/{kind}/{i}.png — ordered growth frames per plant kind
pub fn load_soil_assets(
    asset_server: Res<AssetServer>,
    registry: Res<PlantRegistry>,
    mut assets: ResMut<SoilAssets>,
) {
    if assets.loaded {
        return;
    }

    for variant in SoilVariant::ALL {
        assets.soil.insert(
            variant,
            asset_server.load(format!("soil/{}.png", variant.asset_key())),
        );
    }

    for i in 0..WATER_SKIN_COUNT {
        assets
            .water
            .push(asset_server.load(format!("soil_water/{i}.png")));
    }

    for def in registry.plants.values() {
        let frames = (0..def.frame_count)
            .map(|i| asset_server.load(format!("fruit/{}/{i}.png", def.kind.asset_key())))
            .collect();
        assets.plants.insert(def.kind, frames);
    }

    assets.loaded = true;
    info!(
        "soil assets loaded: {} variants, {} water skins, {} plant kinds",
        assets.soil.len(),
        assets.water.len(),
        assets.plants.len()
    );
}

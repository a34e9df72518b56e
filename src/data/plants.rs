use crate::shared::*;

/// Populate the PlantRegistry with all plant definitions.
///
/// Frame counts match the art on disk (`assets/fruit/<kind>/`), so max age
/// is `frame_count - 1`. Corn grows a full frame per watered day; tomato
/// takes a fractional rate and needs several wet days per frame.
pub fn populate_plants(registry: &mut PlantRegistry) {
    let plants = [
        PlantDef {
            kind: PlantKind::Corn,
            grow_speed: 1.0,
            frame_count: 4,
            // Tall sprite, sits higher on the soil tile.
            y_offset: -16.0,
        },
        PlantDef {
            kind: PlantKind::Tomato,
            grow_speed: 0.7,
            frame_count: 5,
            y_offset: -8.0,
        },
    ];

    for def in plants {
        registry.plants.insert(def.kind, def);
    }
}

/// Fail fast on a configuration that would only blow up tile-by-tile at
/// runtime: every kind needs growth data, at least a seedling and a ripe
/// frame, and a positive growth rate.
pub fn validate_plants(registry: &PlantRegistry) {
    for kind in PlantKind::ALL {
        let Some(def) = registry.get(kind) else {
            panic!("plant {kind:?} has no definition in the registry");
        };
        if def.frame_count < 2 {
            panic!("plant {kind:?} needs at least 2 growth frames, has {}", def.frame_count);
        }
        if def.grow_speed <= 0.0 {
            panic!("plant {kind:?} has non-positive grow speed {}", def.grow_speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_definitions_are_valid() {
        let mut registry = PlantRegistry::default();
        populate_plants(&mut registry);
        validate_plants(&registry);
        assert_eq!(registry.plants.len(), PlantKind::ALL.len());
    }

    #[test]
    #[should_panic(expected = "no definition")]
    fn empty_registry_fails_validation() {
        validate_plants(&PlantRegistry::default());
    }
}

mod data;
mod shared;
mod soil;
mod ui;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Loamfield".into(),
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<PlantRegistry>()
        .init_resource::<FarmMap>()
        .init_resource::<Weather>()
        .init_resource::<GameRng>()
        // Events
        .add_event::<ToolUseEvent>()
        .add_event::<PlantSeedEvent>()
        .add_event::<HarvestAttemptEvent>()
        .add_event::<SleepEvent>()
        .add_event::<DayEndEvent>()
        // Domain plugins
        .add_plugins(soil::SoilPlugin)
        .add_plugins(ui::UiPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_translation(Vec3::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0, 0.0)),
    ));
}

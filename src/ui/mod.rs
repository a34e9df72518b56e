//! Day-transition fade.
//!
//! Going to sleep fades a full-screen overlay to black, fires the day
//! reset exactly once at the black midpoint, then fades back in.

use bevy::prelude::*;

use crate::shared::*;

/// Marker for the screen fade overlay node.
#[derive(Component)]
pub struct ScreenFadeOverlay;

/// Resource that drives the sleep fade.
#[derive(Resource)]
pub struct ScreenFade {
    /// Current opacity 0.0 (transparent) to 1.0 (opaque black).
    pub alpha: f32,
    /// Alpha units per second.
    pub speed: f32,
    /// Whether a fade is actively running.
    pub active: bool,
    /// True while darkening, false while brightening.
    pub rising: bool,
    /// Guards the one-shot reset at the black midpoint.
    pub reset_fired: bool,
}

impl Default for ScreenFade {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            speed: 2.0,
            active: false,
            rising: false,
            reset_fired: false,
        }
    }
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenFade>()
            .add_systems(Startup, spawn_fade_overlay)
            .add_systems(
                Update,
                (detect_sleep_input, trigger_fade_on_sleep, update_fade)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Spawn the fade overlay (always present but invisible).
pub fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        ScreenFadeOverlay,
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        GlobalZIndex(100), // on top of everything
    ));
}

/// Keyboard shortcut: Enter → go to bed.
pub fn detect_sleep_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut sleep_events: EventWriter<SleepEvent>,
) {
    if keys.just_pressed(KeyCode::Enter) {
        sleep_events.send(SleepEvent);
    }
}

pub fn trigger_fade_on_sleep(mut events: EventReader<SleepEvent>, mut fade: ResMut<ScreenFade>) {
    for _ in events.read() {
        if fade.active {
            continue;
        }
        fade.active = true;
        fade.rising = true;
        fade.reset_fired = false;
    }
}

/// Animate the overlay. The day reset fires exactly once, while the
/// screen is fully black, so the field never visibly snaps.
pub fn update_fade(
    time: Res<Time>,
    mut fade: ResMut<ScreenFade>,
    mut day_end_events: EventWriter<DayEndEvent>,
    mut overlays: Query<&mut BackgroundColor, With<ScreenFadeOverlay>>,
) {
    if !fade.active {
        return;
    }

    let dt = time.delta_secs();
    if fade.rising {
        fade.alpha = (fade.alpha + fade.speed * dt).min(1.0);
        if fade.alpha >= 1.0 {
            if !fade.reset_fired {
                day_end_events.send(DayEndEvent);
                fade.reset_fired = true;
            }
            fade.rising = false;
        }
    } else {
        fade.alpha = (fade.alpha - fade.speed * dt).max(0.0);
        if fade.alpha <= 0.0 {
            fade.active = false;
        }
    }

    for mut bg in &mut overlays {
        *bg = BackgroundColor(Color::srgba(0.0, 0.0, 0.0, fade.alpha));
    }
}

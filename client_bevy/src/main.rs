mod audio;
mod board;
mod constants;
mod coord;
mod game;

use bevy::audio::{AudioPlugin, SpatialScale};
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use bevy_rapier2d::prelude::*;

use audiopong_shared::config::GameConfig;

use audio::AudioScenePlugin;
use constants::{CONFIG_ENV, WINDOW_HEIGHT, WINDOW_WIDTH};
use game::{
    BallPlugin, BoardPlugin, CorePlugin, DebugViewPlugin, InputPlugin, PaddlesPlugin,
    ScoringPlugin,
};

fn main() {
    let config = match config_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid audiopong configuration: {}", e);
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Audio Pong".to_string(),
                        resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(AudioPlugin {
                    // Keep the whole board within rodio's unattenuated range;
                    // loudness comes from the environment's distance model.
                    default_spatial_scale: SpatialScale::new(1.0 / config.board.board_height),
                    ..default()
                }),
        )
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        .add_plugins(RapierDebugRenderPlugin {
            enabled: false,
            ..default()
        })
        .add_plugins(CorePlugin { config })
        .add_plugins(BoardPlugin)
        .add_plugins(BallPlugin)
        .add_plugins(PaddlesPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(ScoringPlugin)
        .add_plugins(AudioScenePlugin)
        .add_plugins(DebugViewPlugin)
        .run();
}

/// Defaults, or the JSON file named by `AUDIOPONG_CONFIG`.
fn config_from_env() -> Result<GameConfig, String> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(GameConfig::default());
    };
    let json =
        std::fs::read_to_string(&path).map_err(|e| format!("cannot read {}: {}", path, e))?;
    GameConfig::from_json(&json)
}

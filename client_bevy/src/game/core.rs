use bevy::prelude::*;
use bevy::time::Virtual;
use bevy::window::PrimaryWindow;
use bevy_rapier2d::prelude::{PhysicsSet, RapierConfiguration, TimestepMode};
use std::time::Duration;

use audiopong_shared::config::GameConfig;
use audiopong_shared::layout::BoardLayout;
use audiopong_shared::STEP_SECONDS;

use crate::constants::{
    color_from_hex, Colors, PHYSICS_MAX_CATCHUP_SECS, PHYSICS_SUBSTEPS, VIEW_MARGIN,
};

use super::ball::RespawnState;
use super::board::Board;
use super::input::InputState;
use super::paddles::OpponentRuntime;
use super::scoring::{PointScored, ScoreBoard};

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Audio,
}

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum FixedSet {
    /// Before the physics step: clear per-step contacts, drive paddles.
    Simulate,
    /// After writeback: fold collision messages into the ledger.
    Record,
    /// Consumers of this step's contacts.
    React,
    Spawn,
}

/// The configuration the session was started with.
#[derive(Resource, Deref)]
pub(crate) struct GameSettings(pub(crate) GameConfig);

pub struct CorePlugin {
    pub config: GameConfig,
}

#[derive(Component)]
struct MainCamera;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let layout = BoardLayout::new(&self.config.board);

        app.insert_resource(GameSettings(self.config))
            .insert_resource(Board::new(layout))
            .insert_resource(RespawnState::new(self.config.play.respawn_delay))
            .init_resource::<InputState>()
            .init_resource::<OpponentRuntime>()
            .init_resource::<ScoreBoard>()
            .add_message::<PointScored>()
            .insert_resource(ClearColor(color_from_hex(Colors::BACKGROUND)))
            .insert_resource(Time::<Fixed>::from_seconds(STEP_SECONDS as f64))
            .insert_resource(TimestepMode::Fixed {
                dt: STEP_SECONDS,
                substeps: PHYSICS_SUBSTEPS,
            })
            .configure_sets(Update, (UpdateSet::Input, UpdateSet::Audio).chain())
            .configure_sets(
                FixedUpdate,
                (
                    FixedSet::Simulate,
                    FixedSet::Record,
                    FixedSet::React,
                    FixedSet::Spawn,
                )
                    .chain(),
            )
            .configure_sets(
                FixedUpdate,
                FixedSet::Simulate.before(PhysicsSet::SyncBackend),
            )
            .configure_sets(FixedUpdate, FixedSet::Record.after(PhysicsSet::Writeback))
            .add_systems(
                Startup,
                (
                    setup_camera,
                    configure_virtual_time_catchup_cap,
                    configure_rapier_gravity,
                )
                    .chain(),
            )
            .add_systems(Update, fit_camera_to_board);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Pong is played on a level table: nothing pulls the ball.
fn configure_rapier_gravity(mut q_config: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q_config {
        cfg.gravity = Vec2::ZERO;
    }
}

fn configure_virtual_time_catchup_cap(mut virtual_time: ResMut<Time<Virtual>>) {
    virtual_time.set_max_delta(Duration::from_secs_f64(PHYSICS_MAX_CATCHUP_SECS));
}

fn fit_camera_to_board(
    settings: Res<GameSettings>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut q_projection: Query<&mut Projection, With<MainCamera>>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };

    if window.width() <= 0.0 || window.height() <= 0.0 {
        return;
    }

    let scale_x = settings.board.board_width * VIEW_MARGIN / window.width();
    let scale_y = settings.board.board_height * VIEW_MARGIN / window.height();
    let target_scale = scale_x.max(scale_y).max(0.0001);

    for mut projection in &mut q_projection {
        if let Projection::Orthographic(ortho) = &mut *projection {
            ortho.scale = target_scale;
        }
    }
}

//! The soundscape: the ball's hiss follows the ball across the board and
//! short bursts mark impacts and points.
//!
//! Graph, wired once at startup:
//! white noise -> band-pass -> spatial source -> environment -> output.
//! Bevy's spatial sink does the stereo panning; the environment's distance
//! model drives the sink volume.

mod biquad;
mod cues;
mod noise;
mod sources;

use bevy::audio::{AddAudioSource, AudioSinkPlayback, SpatialAudioSink, SpatialListener, Volume};
use bevy::prelude::*;

use audiopong_shared::environment::Environment;

use crate::coord::{board_to_world, world_to_board};
use crate::game::{Ball, Board, FixedSet, GameSettings, UpdateSet};

use cues::{load_cue_sounds, play_impact_cues, play_point_cues};
use sources::{FilteredNoise, ImpactBurst};

pub struct AudioScenePlugin;

/// Listener placement and distance roll-off.
#[derive(Resource, Deref)]
pub(crate) struct AudioEnvironment(pub(crate) Environment);

/// The endless source that voices the ball.
#[derive(Component)]
pub(crate) struct BallSource;

impl Plugin for AudioScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_audio_source::<FilteredNoise>()
            .add_audio_source::<ImpactBurst>()
            .add_systems(Startup, (setup_audio_graph, load_cue_sounds))
            .add_systems(
                Update,
                (track_ball_source, play_point_cues).in_set(UpdateSet::Audio),
            )
            .add_systems(FixedUpdate, play_impact_cues.in_set(FixedSet::React));
    }
}

fn setup_audio_graph(
    mut commands: Commands,
    settings: Res<GameSettings>,
    mut noise_sources: ResMut<Assets<FilteredNoise>>,
) {
    let environment = Environment::from_config(&settings);

    // Ears sit on the listener's local x axis. With no rotation the listener
    // faces +y (up the board) and +z is up, so the ball's x pans.
    commands.spawn((
        SpatialListener::new(settings.board.board_width * 0.5),
        Transform::from_translation(board_to_world(environment.listener, 0.0)),
    ));

    let noise = noise_sources.add(FilteredNoise {
        center_hz: settings.audio.filter_frequency,
        q: settings.audio.filter_q,
        seed: settings.audio.noise_seed,
    });
    commands.spawn((
        AudioPlayer(noise),
        ball_source_playback(),
        Transform::from_translation(board_to_world(settings.play.ball_spawn, 0.0)),
        BallSource,
    ));

    info!(
        "Audio graph ready: {} Hz band-pass (Q {}), {:?} roll-off to {} m",
        settings.audio.filter_frequency,
        settings.audio.filter_q,
        environment.model,
        environment.max_distance
    );
    commands.insert_resource(AudioEnvironment(environment));
}

/// The noise never ends on its own. Looping would make rodio buffer every
/// sample it has played, so the source plays once, forever.
fn ball_source_playback() -> PlaybackSettings {
    PlaybackSettings::ONCE
        .with_spatial(true)
        .with_volume(Volume::Linear(0.0))
}

/// Every frame the source moves to the ball and its volume follows the
/// distance model. With no ball on the board the source is paused.
fn track_ball_source(
    board: Res<Board>,
    settings: Res<GameSettings>,
    environment: Option<Res<AudioEnvironment>>,
    q_ball: Query<&Transform, (With<Ball>, Without<BallSource>)>,
    mut q_source: Query<(&mut Transform, Option<&mut SpatialAudioSink>), With<BallSource>>,
) {
    let Some(environment) = environment else {
        return;
    };
    let Ok((mut transform, sink)) = q_source.single_mut() else {
        return;
    };

    let ball = board.ball().and_then(|e| q_ball.get(e).ok());
    match (ball, sink) {
        (Some(ball), sink) => {
            let p = world_to_board(ball.translation.truncate());
            transform.translation = board_to_world(p, 0.0);
            if let Some(mut sink) = sink {
                if sink.is_paused() {
                    sink.play();
                }
                let gain = settings.audio.source_volume * environment.gain_at(p);
                sink.set_volume(Volume::Linear(gain));
            }
        }
        (None, Some(sink)) => {
            if !sink.is_paused() {
                sink.pause();
            }
        }
        (None, None) => {}
    }
}

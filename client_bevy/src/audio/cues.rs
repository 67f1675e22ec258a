use bevy::audio::Volume;
use bevy::prelude::*;

use audiopong_shared::body::BodyTag;
use audiopong_shared::collisions::TagPair;
use audiopong_shared::scoring::Side;
use audiopong_shared::vec2::Vec2 as BoardVec2;

use crate::coord::board_to_world;
use crate::game::{Board, GameSettings, PointScored};

use super::sources::ImpactBurst;
use super::AudioEnvironment;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cue {
    Paddle,
    Wall,
    PointWon,
    PointLost,
}

impl Cue {
    fn burst(self) -> ImpactBurst {
        let (center_hz, q, seconds, seed) = match self {
            Cue::Paddle => (1_400.0, 3.0, 0.06, 11),
            Cue::Wall => (350.0, 2.0, 0.08, 12),
            Cue::PointWon => (2_400.0, 6.0, 0.45, 13),
            Cue::PointLost => (180.0, 4.0, 0.6, 14),
        };
        ImpactBurst {
            center_hz,
            q,
            seconds,
            seed,
        }
    }
}

/// Which cue a contact begun this step should play, if any. Dead zones
/// are voiced by the point cues instead.
pub(crate) fn impact_cue(pair: TagPair) -> Option<Cue> {
    match pair.other(BodyTag::Ball)? {
        BodyTag::LowerPaddle | BodyTag::UpperPaddle => Some(Cue::Paddle),
        BodyTag::Border => Some(Cue::Wall),
        _ => None,
    }
}

/// The lower paddle is the player's.
pub(crate) fn point_cue(scorer: Side) -> Cue {
    match scorer {
        Side::Lower => Cue::PointWon,
        Side::Upper => Cue::PointLost,
    }
}

#[derive(Resource)]
pub(crate) struct CueSounds {
    paddle: Handle<ImpactBurst>,
    wall: Handle<ImpactBurst>,
    point_won: Handle<ImpactBurst>,
    point_lost: Handle<ImpactBurst>,
}

impl CueSounds {
    fn handle(&self, cue: Cue) -> Handle<ImpactBurst> {
        match cue {
            Cue::Paddle => self.paddle.clone(),
            Cue::Wall => self.wall.clone(),
            Cue::PointWon => self.point_won.clone(),
            Cue::PointLost => self.point_lost.clone(),
        }
    }
}

pub(crate) fn load_cue_sounds(mut commands: Commands, mut bursts: ResMut<Assets<ImpactBurst>>) {
    commands.insert_resource(CueSounds {
        paddle: bursts.add(Cue::Paddle.burst()),
        wall: bursts.add(Cue::Wall.burst()),
        point_won: bursts.add(Cue::PointWon.burst()),
        point_lost: bursts.add(Cue::PointLost.burst()),
    });
}

fn spawn_cue(commands: &mut Commands, sounds: &CueSounds, cue: Cue, at: BoardVec2, volume: f32) {
    commands.spawn((
        AudioPlayer(sounds.handle(cue)),
        PlaybackSettings::DESPAWN
            .with_spatial(true)
            .with_volume(Volume::Linear(volume)),
        Transform::from_translation(board_to_world(at, 0.0)),
    ));
}

pub(crate) fn play_impact_cues(
    mut commands: Commands,
    board: Res<Board>,
    settings: Res<GameSettings>,
    sounds: Option<Res<CueSounds>>,
    environment: Option<Res<AudioEnvironment>>,
) {
    let (Some(sounds), Some(environment)) = (sounds, environment) else {
        return;
    };

    for (pair, at) in board.collisions.this_step() {
        let Some(cue) = impact_cue(pair) else {
            continue;
        };
        let volume = settings.audio.cue_volume * environment.gain_at(at);
        if volume > 0.0 {
            spawn_cue(&mut commands, &sounds, cue, at, volume);
        }
    }
}

pub(crate) fn play_point_cues(
    mut commands: Commands,
    settings: Res<GameSettings>,
    sounds: Option<Res<CueSounds>>,
    mut points: MessageReader<PointScored>,
) {
    let Some(sounds) = sounds else {
        return;
    };

    for point in points.read() {
        // Points stay audible wherever they happen.
        spawn_cue(
            &mut commands,
            &sounds,
            point_cue(point.scorer),
            point.at,
            settings.audio.cue_volume,
        );
    }
}

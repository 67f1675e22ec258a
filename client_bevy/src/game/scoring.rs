use bevy::prelude::*;

use audiopong_shared::scoring::{scorer_for, Score, Side};
use audiopong_shared::vec2::Vec2 as BoardVec2;

use super::ball::RespawnState;
use super::board::Board;
use super::core::GameSettings;
use super::FixedSet;

pub struct ScoringPlugin;

#[derive(Resource, Default)]
pub(crate) struct ScoreBoard {
    pub(crate) score: Score,
}

/// A dead zone was reached. `at` is where the ball entered it.
#[derive(Message, Clone, Copy, Debug)]
pub(crate) struct PointScored {
    pub(crate) scorer: Side,
    pub(crate) at: BoardVec2,
}

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, score_points.in_set(FixedSet::React));
    }
}

fn score_points(
    mut commands: Commands,
    mut board: ResMut<Board>,
    mut scores: ResMut<ScoreBoard>,
    mut respawn: ResMut<RespawnState>,
    settings: Res<GameSettings>,
    mut points: MessageWriter<PointScored>,
) {
    let Some((scorer, at)) = board
        .collisions
        .this_step()
        .find_map(|(pair, at)| scorer_for(pair).map(|side| (side, at)))
    else {
        return;
    };

    scores.score.award(scorer);
    info!(
        "Point to {:?} player, score {} - {} (you - opponent)",
        scorer, scores.score.lower, scores.score.upper
    );

    board.despawn_ball(&mut commands);
    respawn.seconds_left = settings.play.respawn_delay;
    respawn.serve_toward = scorer.opponent();
    points.write(PointScored { scorer, at });
}

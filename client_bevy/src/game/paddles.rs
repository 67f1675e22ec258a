use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use audiopong_shared::body::BodyTag;

use crate::board::opponent_logic::{Opponent, OpponentBallInfo, OpponentTuning};
use crate::board::paddle_logic::{key_direction, paddle_velocity};

use super::ball::Ball;
use super::board::Board;
use super::bodies::Tagged;
use super::core::GameSettings;
use super::input::InputState;
use super::FixedSet;

pub struct PaddlesPlugin;

#[derive(Resource, Default)]
pub(crate) struct OpponentRuntime {
    pub(crate) bot: Opponent,
}

impl Plugin for PaddlesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, drive_paddles.in_set(FixedSet::Simulate));
    }
}

/// Paddles are kinematic: each step sets their horizontal velocity and lets
/// the physics step move them.
fn drive_paddles(
    input: Res<InputState>,
    settings: Res<GameSettings>,
    board: Res<Board>,
    mut opponent: ResMut<OpponentRuntime>,
    time: Res<Time<Fixed>>,
    q_ball: Query<(&Transform, &Velocity), With<Ball>>,
    mut q_paddles: Query<(&Tagged, &Transform, &mut Velocity), Without<Ball>>,
) {
    let dt = time.delta_secs();
    let limit = board.layout.paddle_travel_limit();
    let ball = board
        .ball()
        .and_then(|e| q_ball.get(e).ok())
        .map(|(transform, vel)| OpponentBallInfo {
            x: transform.translation.x,
            vy: vel.linvel.y,
        });

    for (tag, transform, mut vel) in &mut q_paddles {
        let x = transform.translation.x;
        let vx = match **tag {
            BodyTag::LowerPaddle => paddle_velocity(
                key_direction(input.left, input.right),
                x,
                limit,
                settings.play.paddle_speed,
                dt,
            ),
            BodyTag::UpperPaddle => opponent.bot.update(
                dt,
                x,
                ball,
                OpponentTuning {
                    speed: settings.play.opponent_speed,
                    dead_band: settings.play.opponent_dead_band,
                    limit,
                },
            ),
            _ => continue,
        };
        vel.linvel = Vec2::new(vx, 0.0);
        vel.angvel = 0.0;
    }
}

use bevy::prelude::*;

use audiopong_shared::scoring::{serve_velocity, Side};

use super::board::Board;
use super::core::GameSettings;
use super::paddles::OpponentRuntime;
use super::FixedSet;

pub struct BallPlugin;

#[derive(Component)]
pub(crate) struct Ball;

/// Countdown to the next serve while no ball is on the board.
#[derive(Resource)]
pub(crate) struct RespawnState {
    pub(crate) seconds_left: f32,
    /// The ball is served toward this player.
    pub(crate) serve_toward: Side,
    serves: u32,
}

impl RespawnState {
    pub(crate) fn new(delay: f32) -> Self {
        Self {
            seconds_left: delay,
            serve_toward: Side::Lower,
            serves: 0,
        }
    }

    /// Alternate the sideways drift so consecutive serves differ.
    fn next_drift_sign(&mut self) -> f32 {
        self.serves += 1;
        if self.serves % 2 == 1 {
            1.0
        } else {
            -1.0
        }
    }
}

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_initial_ball)
            .add_systems(FixedUpdate, respawn_system.in_set(FixedSet::Spawn));
    }
}

fn spawn_initial_ball(
    mut commands: Commands,
    mut board: ResMut<Board>,
    mut respawn: ResMut<RespawnState>,
    settings: Res<GameSettings>,
) {
    serve(&mut commands, &mut board, &mut respawn, &settings);
}

fn respawn_system(
    mut commands: Commands,
    mut board: ResMut<Board>,
    mut respawn: ResMut<RespawnState>,
    mut opponent: ResMut<OpponentRuntime>,
    settings: Res<GameSettings>,
    time: Res<Time<Fixed>>,
) {
    if board.ball().is_some() {
        return;
    }

    respawn.seconds_left -= time.delta_secs();
    if respawn.seconds_left <= 0.0 {
        opponent.bot.reset();
        serve(&mut commands, &mut board, &mut respawn, &settings);
        respawn.seconds_left = settings.play.respawn_delay;
    }
}

fn serve(
    commands: &mut Commands,
    board: &mut Board,
    respawn: &mut RespawnState,
    settings: &GameSettings,
) {
    let play = settings.play;
    let drift_sign = respawn.next_drift_sign();
    let velocity = serve_velocity(
        play.serve_speed,
        play.serve_drift,
        drift_sign,
        respawn.serve_toward,
    );

    match board.spawn_ball(commands, play.ball_spawn, velocity) {
        Ok(entity) => info!(
            "Serve toward {:?} player ({:?}), velocity ({:.2}, {:.2})",
            respawn.serve_toward, entity, velocity.x, velocity.y
        ),
        Err(e) => warn!("Serve skipped: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_alternates() {
        let mut state = RespawnState::new(1.0);
        assert_eq!(state.next_drift_sign(), 1.0);
        assert_eq!(state.next_drift_sign(), -1.0);
        assert_eq!(state.next_drift_sign(), 1.0);
    }

    #[test]
    fn first_serve_goes_to_the_player() {
        assert_eq!(RespawnState::new(0.5).serve_toward, Side::Lower);
    }
}

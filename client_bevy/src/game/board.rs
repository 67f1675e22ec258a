use std::collections::HashMap;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use audiopong_shared::body::BodyTag;
use audiopong_shared::collisions::{approximate_contact, CollisionLedger};
use audiopong_shared::error::BoardError;
use audiopong_shared::layout::BoardLayout;
use audiopong_shared::vec2::Vec2 as BoardVec2;

use crate::coord::world_to_board;

use super::ball::Ball;
use super::bodies::{spawn_body, Tagged};
use super::FixedSet;

pub struct BoardPlugin;

/// The playing field: its layout, the entities of its bodies and the
/// collision ledger. Audio lives elsewhere.
#[derive(Resource)]
pub(crate) struct Board {
    pub(crate) layout: BoardLayout,
    bodies: HashMap<BodyTag, Entity>,
    ball: Option<Entity>,
    pub(crate) collisions: CollisionLedger,
    steps: u64,
}

impl Board {
    pub(crate) fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            bodies: HashMap::new(),
            ball: None,
            collisions: CollisionLedger::default(),
            steps: 0,
        }
    }

    /// Create the border, paddles and dead zones. They are never destroyed,
    /// so a second call does nothing.
    pub(crate) fn spawn_permanent_bodies(&mut self, commands: &mut Commands) {
        if !self.bodies.is_empty() {
            warn!("Board bodies already exist; not spawning them again");
            return;
        }
        for def in self.layout.static_bodies() {
            let entity = spawn_body(commands, &def);
            self.bodies.insert(def.tag, entity);
        }
    }

    /// Put the ball on the board. Only one ball may exist at a time.
    pub(crate) fn spawn_ball(
        &mut self,
        commands: &mut Commands,
        position: BoardVec2,
        velocity: BoardVec2,
    ) -> Result<Entity, BoardError> {
        if self.ball.is_some() {
            return Err(BoardError::BallAlreadySpawned);
        }
        let def = self.layout.ball(position, velocity);
        let entity = spawn_body(commands, &def);
        commands.entity(entity).insert(Ball);
        self.ball = Some(entity);
        Ok(entity)
    }

    /// Remove the ball, if any, and forget its contacts.
    pub(crate) fn despawn_ball(&mut self, commands: &mut Commands) -> Option<Entity> {
        let entity = self.ball.take()?;
        commands.entity(entity).despawn();
        self.collisions.forget(BodyTag::Ball);
        Some(entity)
    }

    pub(crate) fn ball(&self) -> Option<Entity> {
        self.ball
    }

    fn begin_step(&mut self) {
        self.collisions.begin_step();
        self.steps += 1;
    }
}

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_board)
            .add_systems(FixedUpdate, begin_step_system.in_set(FixedSet::Simulate))
            .add_systems(FixedUpdate, record_collisions.in_set(FixedSet::Record));
    }
}

fn spawn_board(mut commands: Commands, mut board: ResMut<Board>) {
    board.spawn_permanent_bodies(&mut commands);
    let c = board.layout.config;
    info!(
        "Board ready: {}x{} m, paddles {}x{} m, ball radius {} m",
        c.board_width, c.board_height, c.paddle_width, c.paddle_height, c.ball_radius
    );
}

fn begin_step_system(mut board: ResMut<Board>) {
    board.begin_step();
}

fn record_collisions(
    mut board: ResMut<Board>,
    mut collision_events: MessageReader<CollisionEvent>,
    q_bodies: Query<(&Tagged, &Transform)>,
) {
    for event in collision_events.read() {
        match event {
            CollisionEvent::Started(a, b, _) => {
                let (Ok((tag_a, at_a)), Ok((tag_b, at_b))) = (q_bodies.get(*a), q_bodies.get(*b))
                else {
                    continue;
                };
                let point = approximate_contact(
                    **tag_a,
                    world_to_board(at_a.translation.truncate()),
                    **tag_b,
                    world_to_board(at_b.translation.truncate()),
                );
                debug!(
                    "step {}: {:?} touched {:?} at ({:.2}, {:.2})",
                    board.steps, **tag_a, **tag_b, point.x, point.y
                );
                board.collisions.begin_contact(**tag_a, **tag_b, point);
            }
            CollisionEvent::Stopped(a, b, _) => {
                // A despawned ball no longer carries its tag; its contacts
                // were already forgotten by `despawn_ball`.
                if let (Ok((tag_a, _)), Ok((tag_b, _))) = (q_bodies.get(*a), q_bodies.get(*b)) {
                    board.collisions.end_contact(**tag_a, **tag_b);
                }
            }
        }
    }
}

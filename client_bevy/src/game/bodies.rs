//! Turns declarative [`BodyDef`]s into Rapier bodies.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use audiopong_shared::body::{BodyDef, BodyTag, BodyType, Shape};
use audiopong_shared::vec2::Vec2 as BoardVec2;

use crate::coord::{board_to_world, board_to_world2};

/// Identifies which board body an entity is.
#[derive(Component, Clone, Copy, Debug, Deref, PartialEq, Eq)]
pub(crate) struct Tagged(pub(crate) BodyTag);

/// Spawn one rigid body carrying one collider, as described by `def`.
pub(crate) fn spawn_body(commands: &mut Commands, def: &BodyDef) -> Entity {
    let mut entity = commands.spawn((
        rigid_body(def.body_type),
        collider_for(&def.shape),
        Transform::from_translation(board_to_world(def.position, 0.0))
            .with_rotation(Quat::from_rotation_z(def.angle)),
        Tagged(def.tag),
    ));

    if def.body_type != BodyType::Static {
        entity.insert(Velocity::linear(board_to_world2(def.linear_velocity)));
    }
    if def.body_type == BodyType::Dynamic {
        // A pair is reported when either collider asks for events.
        entity.insert((Ccd::enabled(), ActiveEvents::COLLISION_EVENTS));
    }
    if let Some(friction) = def.friction {
        entity.insert(Friction {
            coefficient: friction,
            combine_rule: CoefficientCombineRule::Min,
        });
    }
    if let Some(restitution) = def.restitution {
        // Max so a perfectly elastic ball stays elastic against any surface.
        entity.insert(Restitution {
            coefficient: restitution,
            combine_rule: CoefficientCombineRule::Max,
        });
    }
    if let Some(density) = def.density {
        entity.insert(ColliderMassProperties::Density(density));
    }
    if let Some(linear_damping) = def.linear_damping {
        entity.insert(Damping {
            linear_damping,
            angular_damping: 0.0,
        });
    }
    if def.is_sensor {
        entity.insert(Sensor);
    }
    if def.fixed_rotation {
        entity.insert(LockedAxes::ROTATION_LOCKED);
    }

    entity.id()
}

fn rigid_body(body_type: BodyType) -> RigidBody {
    match body_type {
        BodyType::Static => RigidBody::Fixed,
        BodyType::Kinematic => RigidBody::KinematicVelocityBased,
        BodyType::Dynamic => RigidBody::Dynamic,
    }
}

pub(crate) fn collider_for(shape: &Shape) -> Collider {
    match shape {
        Shape::Circle { radius } => Collider::ball(*radius),
        Shape::Box {
            half_width,
            half_height,
        } => Collider::cuboid(*half_width, *half_height),
        Shape::Polygon { vertices } => {
            let points = to_world_points(vertices);
            let (half_w, half_h) = half_extents(vertices);
            Collider::convex_hull(&points).unwrap_or_else(|| Collider::cuboid(half_w, half_h))
        }
        Shape::ChainLoop { vertices } => {
            let n = vertices.len() as u32;
            let indices = (0..n).map(|i| [i, (i + 1) % n]).collect();
            Collider::polyline(to_world_points(vertices), Some(indices))
        }
    }
}

fn to_world_points(vertices: &[BoardVec2]) -> Vec<Vec2> {
    vertices.iter().copied().map(board_to_world2).collect()
}

fn half_extents(vertices: &[BoardVec2]) -> (f32, f32) {
    let max_x = vertices.iter().map(|v| v.x.abs()).fold(0.0, f32::max);
    let max_y = vertices.iter().map(|v| v.y.abs()).fold(0.0, f32::max);
    (max_x.max(0.01), max_y.max(0.01))
}

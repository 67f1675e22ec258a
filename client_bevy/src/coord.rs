use audiopong_shared::vec2::Vec2 as BoardVec2;
use bevy::prelude::{Vec2, Vec3};

/// Board space and Bevy world space share origin and units (one metre per
/// unit, +y up); only the vector types differ.
pub fn board_to_world(p: BoardVec2, z: f32) -> Vec3 {
    Vec3::new(p.x, p.y, z)
}

pub fn board_to_world2(p: BoardVec2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

pub fn world_to_board(world_xy: Vec2) -> BoardVec2 {
    BoardVec2::new(world_xy.x, world_xy.y)
}

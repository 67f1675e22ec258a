use bevy::prelude::*;
use bevy_rapier2d::render::DebugRenderContext;

use super::UpdateSet;

/// Wireframe of the physics world for sighted debugging. Off by default.
pub struct DebugViewPlugin;

impl Plugin for DebugViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, toggle_debug_view.in_set(UpdateSet::Input));
    }
}

fn toggle_debug_view(keys: Res<ButtonInput<KeyCode>>, mut ctx: ResMut<DebugRenderContext>) {
    if keys.just_pressed(KeyCode::F3) {
        ctx.enabled = !ctx.enabled;
        info!("Debug view {}", if ctx.enabled { "on" } else { "off" });
    }
}

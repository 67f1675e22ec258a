use bevy::prelude::*;

use super::UpdateSet;

pub struct InputPlugin;

#[derive(Resource, Default)]
pub(crate) struct InputState {
    pub(crate) left: bool,
    pub(crate) right: bool,
}

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, input_system.in_set(UpdateSet::Input));
    }
}

fn input_system(
    mut input: ResMut<InputState>,
    keys: Res<ButtonInput<KeyCode>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    input.left = keys.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]);
    input.right = keys.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]);

    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        app_exit.write(AppExit::Success);
    }
}

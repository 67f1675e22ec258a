pub const WINDOW_WIDTH: u32 = 360;
pub const WINDOW_HEIGHT: u32 = 760;

pub const PHYSICS_SUBSTEPS: usize = 1;
pub const PHYSICS_MAX_STEPS_PER_FRAME: u32 = 4;
pub const PHYSICS_MAX_CATCHUP_SECS: f64 =
    audiopong_shared::STEP_SECONDS as f64 * PHYSICS_MAX_STEPS_PER_FRAME as f64;

/// Margin around the board when the debug view is visible.
pub const VIEW_MARGIN: f32 = 1.1;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "AUDIOPONG_CONFIG";

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const BACKGROUND: u32 = 0x050510;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}

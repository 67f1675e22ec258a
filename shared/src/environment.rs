//! Listener placement and distance attenuation for the board's soundscape.
//!
//! The listener sits inside the lower half of the board facing +y (up the
//! table) with +z as its up vector, so the ball's x coordinate pans left
//! and right and its y coordinate sets the distance.

use crate::config::GameConfig;
use crate::vec2::Vec2;

/// Steepness of the exponential roll-off.
const EXPONENTIAL_ROLLOFF: f32 = 4.0;
/// Knee of the inverse-square roll-off.
const INVERSE_SQUARE_KNEE: f32 = 24.0;

#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceModel {
    Linear,
    #[default]
    Exponential,
    InverseSquare,
}

impl DistanceModel {
    /// Gain for a source `distance` metres away. 1 at the listener, 0 at or
    /// past `max_distance`, continuous and non-increasing in between.
    pub fn gain(self, distance: f32, max_distance: f32) -> f32 {
        if max_distance <= 0.0 || distance >= max_distance {
            return 0.0;
        }
        let t = (distance / max_distance).clamp(0.0, 1.0);
        match self {
            DistanceModel::Linear => 1.0 - t,
            DistanceModel::Exponential => {
                let floor = (-EXPONENTIAL_ROLLOFF).exp();
                ((-EXPONENTIAL_ROLLOFF * t).exp() - floor) / (1.0 - floor)
            }
            DistanceModel::InverseSquare => {
                let floor = 1.0 / (1.0 + INVERSE_SQUARE_KNEE);
                (1.0 / (1.0 + INVERSE_SQUARE_KNEE * t * t) - floor) / (1.0 - floor)
            }
        }
    }
}

/// Where the player hears from and how loudness falls off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub listener: Vec2,
    pub max_distance: f32,
    pub model: DistanceModel,
}

impl Environment {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            listener: Vec2::new(0.0, -config.board.board_width * 0.5),
            max_distance: config.max_audible_distance(),
            model: config.audio.distance_model,
        }
    }

    pub fn gain_at(&self, source: Vec2) -> f32 {
        self.model
            .gain(self.listener.distance(source), self.max_distance)
    }
}

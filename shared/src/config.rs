use crate::environment::DistanceModel;
use crate::vec2::Vec2;

/// Sample rate every synthesized source renders at.
pub const SAMPLE_RATE: u32 = 44_100;

/// Board geometry, in metres.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub board_width: f32,
    pub board_height: f32,
    pub dead_zone_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_width: 10.0,
            board_height: 30.0,
            dead_zone_height: 0.2,
            paddle_width: 1.0,
            paddle_height: 0.2,
            ball_radius: 0.05,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("board_width", self.board_width),
            ("board_height", self.board_height),
            ("dead_zone_height", self.dead_zone_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be finite and > 0"));
            }
        }
        if self.paddle_width >= self.board_width {
            return Err("paddle_width must be < board_width".to_string());
        }
        // Both paddles and both dead zones stacked must leave room for the ball.
        let reserved = 2.0 * (self.dead_zone_height + self.paddle_height);
        if reserved + 2.0 * self.ball_radius >= self.board_height {
            return Err("board_height too small for dead zones and paddles".to_string());
        }
        if 2.0 * self.ball_radius >= self.paddle_width {
            return Err("ball diameter must be < paddle_width".to_string());
        }
        Ok(())
    }
}

/// Audio graph parameters.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AudioConfig {
    /// Centre frequency of the band-pass filter on the ball's noise (Hz)
    pub filter_frequency: f32,
    pub filter_q: f32,
    pub noise_seed: u64,
    /// Distance past which sources are silent. `None` means the board height.
    pub max_distance: Option<f32>,
    pub distance_model: DistanceModel,
    /// Linear gain of the ball source before distance attenuation
    pub source_volume: f32,
    /// Linear gain of impact and score cues
    pub cue_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            filter_frequency: 500.0,
            filter_q: 1.0,
            noise_seed: 42,
            max_distance: None,
            distance_model: DistanceModel::Exponential,
            source_volume: 1.0,
            cue_volume: 0.8,
        }
    }
}

impl AudioConfig {
    pub fn validate(&self) -> Result<(), String> {
        let nyquist = SAMPLE_RATE as f32 * 0.5;
        if !self.filter_frequency.is_finite()
            || self.filter_frequency <= 0.0
            || self.filter_frequency >= nyquist
        {
            return Err(format!("filter_frequency must be in (0, {nyquist})"));
        }
        if !self.filter_q.is_finite() || self.filter_q <= 0.0 {
            return Err("filter_q must be finite and > 0".to_string());
        }
        if let Some(max) = self.max_distance {
            if !max.is_finite() || max <= 0.0 {
                return Err("max_distance must be finite and > 0".to_string());
            }
        }
        if !self.source_volume.is_finite() || self.source_volume < 0.0 {
            return Err("source_volume must be finite and >= 0".to_string());
        }
        if !self.cue_volume.is_finite() || self.cue_volume < 0.0 {
            return Err("cue_volume must be finite and >= 0".to_string());
        }
        Ok(())
    }
}

/// Gameplay tuning.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayConfig {
    pub ball_spawn: Vec2,
    /// Ball speed at serve (m/s)
    pub serve_speed: f32,
    /// Horizontal share of the serve direction, in [0, 1)
    pub serve_drift: f32,
    pub paddle_speed: f32,
    pub opponent_speed: f32,
    /// Opponent ignores ball offsets smaller than this (m)
    pub opponent_dead_band: f32,
    /// Delay between a point and the next serve (seconds)
    pub respawn_delay: f32,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            ball_spawn: Vec2::new(-0.3, 0.0),
            serve_speed: 6.0,
            serve_drift: 0.25,
            paddle_speed: 8.0,
            opponent_speed: 5.0,
            opponent_dead_band: 0.1,
            respawn_delay: 1.0,
        }
    }
}

impl PlayConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("serve_speed", self.serve_speed),
            ("paddle_speed", self.paddle_speed),
            ("opponent_speed", self.opponent_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be finite and > 0"));
            }
        }
        if !(0.0..1.0).contains(&self.serve_drift) {
            return Err("serve_drift must be in [0, 1)".to_string());
        }
        if !self.opponent_dead_band.is_finite() || self.opponent_dead_band < 0.0 {
            return Err("opponent_dead_band must be finite and >= 0".to_string());
        }
        if !self.respawn_delay.is_finite() || self.respawn_delay < 0.0 {
            return Err("respawn_delay must be finite and >= 0".to_string());
        }
        Ok(())
    }
}

/// Everything a game session is configured with.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub board: BoardConfig,
    pub audio: AudioConfig,
    pub play: PlayConfig,
}

impl GameConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid config JSON: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        self.audio.validate()?;
        self.play.validate()?;

        let half_w = self.board.board_width * 0.5;
        let half_h = self.board.board_height * 0.5
            - self.board.dead_zone_height
            - self.board.paddle_height;
        let spawn = self.play.ball_spawn;
        if spawn.x.abs() + self.board.ball_radius >= half_w
            || spawn.y.abs() + self.board.ball_radius >= half_h
        {
            return Err("ball_spawn must lie between the paddles".to_string());
        }
        Ok(())
    }

    /// Distance past which the environment silences a source.
    pub fn max_audible_distance(&self) -> f32 {
        self.audio.max_distance.unwrap_or(self.board.board_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_game_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn paddle_wider_than_board_invalid() {
        let mut config = GameConfig::default();
        config.board.paddle_width = 12.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_ball_radius_invalid() {
        let mut config = GameConfig::default();
        config.board.ball_radius = -0.05;
        assert!(config.validate().is_err());
    }

    #[test]
    fn filter_above_nyquist_invalid() {
        let mut config = GameConfig::default();
        config.audio.filter_frequency = 30_000.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn spawn_outside_board_invalid() {
        let mut config = GameConfig::default();
        config.play.ball_spawn = Vec2::new(0.0, 20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn max_distance_defaults_to_board_height() {
        let config = GameConfig::default();
        assert_eq!(config.max_audible_distance(), 30.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json(r#"{ "board": { "boardHeight": 40.0 }, "play": { "paddleSpeed": 3.0 } }"#)
                .expect("valid config");
        assert_eq!(config.board.board_height, 40.0);
        assert_eq!(config.board.board_width, 10.0);
        assert_eq!(config.play.paddle_speed, 3.0);
        assert_eq!(config.audio, AudioConfig::default());
    }

    #[test]
    fn distance_model_parses_lowercase() {
        let config = GameConfig::from_json(r#"{ "audio": { "distanceModel": "linear" } }"#)
            .expect("valid config");
        assert_eq!(config.audio.distance_model, DistanceModel::Linear);
    }

    #[test]
    fn invalid_values_in_json_rejected() {
        let err = GameConfig::from_json(r#"{ "audio": { "filterQ": 0.0 } }"#).unwrap_err();
        assert!(err.contains("filter_q"));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(GameConfig::from_json("{ board: ").is_err());
    }
}

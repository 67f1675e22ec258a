//! Board geometry, body descriptions, collision bookkeeping and scoring
//! for audio pong.
//!
//! Nothing in here touches an engine: the game crate turns these
//! descriptions into Rapier bodies and Bevy audio nodes.

pub mod body;
pub mod collisions;
pub mod config;
pub mod environment;
pub mod error;
pub mod layout;
pub mod scoring;
pub mod vec2;

/// Physics step length in seconds. Fixed, not part of [`config::GameConfig`].
pub const STEP_SECONDS: f32 = 1.0 / 60.0;

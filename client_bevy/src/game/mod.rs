mod ball;
mod board;
mod bodies;
mod core;
mod debug_view;
mod input;
mod paddles;
mod scoring;

pub use ball::BallPlugin;
pub use board::BoardPlugin;
pub use self::core::CorePlugin;
pub(crate) use self::core::{FixedSet, GameSettings, UpdateSet};
pub use debug_view::DebugViewPlugin;
pub use input::InputPlugin;
pub use paddles::PaddlesPlugin;
pub use scoring::ScoringPlugin;

pub(crate) use ball::Ball;
pub(crate) use board::Board;
pub(crate) use scoring::PointScored;

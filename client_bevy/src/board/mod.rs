pub mod opponent_logic;
pub mod paddle_logic;

//! Upper-paddle bot: chases the ball while it travels up the board and
//! drifts back to the centre line otherwise. A small, periodically
//! re-rolled aim error keeps it beatable.

use super::paddle_logic::paddle_velocity;

#[derive(Clone, Copy, Debug)]
pub(crate) struct OpponentBallInfo {
    pub(crate) x: f32,
    pub(crate) vy: f32,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct OpponentTuning {
    pub(crate) speed: f32,
    pub(crate) dead_band: f32,
    pub(crate) limit: f32,
}

const REACTION_INTERVAL: f32 = 0.25;
const MAX_AIM_ERROR: f32 = 0.45;

#[derive(Debug)]
pub(crate) struct Opponent {
    aim_error: f32,
    retarget_in: f32,
    seed: u32,
}

impl Default for Opponent {
    fn default() -> Self {
        Self {
            aim_error: 0.0,
            retarget_in: 0.0,
            seed: 1,
        }
    }
}

impl Opponent {
    fn next_random(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223) & 0x7fff_ffff;
        self.seed as f32 / 0x7fff_ffffu32 as f32
    }

    /// Horizontal velocity for the upper paddle this step.
    pub(crate) fn update(
        &mut self,
        dt: f32,
        paddle_x: f32,
        ball: Option<OpponentBallInfo>,
        tuning: OpponentTuning,
    ) -> f32 {
        self.retarget_in -= dt;
        if self.retarget_in <= 0.0 {
            self.retarget_in = REACTION_INTERVAL;
            self.aim_error = (self.next_random() * 2.0 - 1.0) * MAX_AIM_ERROR;
        }

        let target = match ball {
            Some(b) if b.vy > 0.0 => b.x + self.aim_error,
            _ => 0.0,
        };

        let offset = target - paddle_x;
        if offset.abs() <= tuning.dead_band || dt <= 0.0 {
            return 0.0;
        }

        // Slow down on approach so the paddle settles instead of jittering.
        let speed = tuning.speed.min(offset.abs() / dt);
        paddle_velocity(offset.signum(), paddle_x, tuning.limit, speed, dt)
    }

    pub(crate) fn reset(&mut self) {
        self.aim_error = 0.0;
        self.retarget_in = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const TUNING: OpponentTuning = OpponentTuning {
        speed: 5.0,
        dead_band: 0.1,
        limit: 4.5,
    };

    #[test]
    fn chases_ball_heading_its_way() {
        let mut bot = Opponent::default();
        let v = bot.update(DT, 0.0, Some(OpponentBallInfo { x: 3.0, vy: 4.0 }), TUNING);
        assert!(v > 0.0);
        let v = bot.update(DT, 0.0, Some(OpponentBallInfo { x: -3.0, vy: 4.0 }), TUNING);
        assert!(v < 0.0);
    }

    #[test]
    fn returns_to_centre_when_ball_recedes() {
        let mut bot = Opponent::default();
        let v = bot.update(DT, 2.0, Some(OpponentBallInfo { x: 4.0, vy: -4.0 }), TUNING);
        assert!(v < 0.0);
    }

    #[test]
    fn idles_inside_dead_band() {
        let mut bot = Opponent::default();
        assert_eq!(bot.update(DT, 0.05, None, TUNING), 0.0);
    }

    #[test]
    fn never_exceeds_speed() {
        let mut bot = Opponent::default();
        for i in 0..200 {
            let x = (i as f32 * 0.37).sin() * 4.0;
            let v = bot.update(DT, 0.0, Some(OpponentBallInfo { x, vy: 1.0 }), TUNING);
            assert!(v.abs() <= TUNING.speed + 1e-4);
        }
    }

    #[test]
    fn settles_near_ball_without_oscillating() {
        let mut bot = Opponent::default();
        let mut x = -4.0;
        let ball = Some(OpponentBallInfo { x: 2.0, vy: 3.0 });
        for _ in 0..600 {
            x += bot.update(DT, x, ball, TUNING) * DT;
        }
        assert!((x - 2.0).abs() <= MAX_AIM_ERROR + TUNING.dead_band + 1e-3);
    }

    #[test]
    fn aim_error_stays_bounded() {
        let mut bot = Opponent::default();
        for _ in 0..1000 {
            bot.update(REACTION_INTERVAL, 0.0, None, TUNING);
            assert!(bot.aim_error.abs() <= MAX_AIM_ERROR);
        }
    }
}

use crate::body::BodyTag;
use crate::collisions::TagPair;
use crate::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Lower,
    Upper,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Lower => Side::Upper,
            Side::Upper => Side::Lower,
        }
    }

    /// +1 for the upper end of the board, -1 for the lower.
    pub fn direction(self) -> f32 {
        match self {
            Side::Lower => -1.0,
            Side::Upper => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub lower: u32,
    pub upper: u32,
}

impl Score {
    pub fn award(&mut self, scorer: Side) {
        match scorer {
            Side::Lower => self.lower += 1,
            Side::Upper => self.upper += 1,
        }
    }
}

/// Who scores when this pair touches. The ball reaching a player's dead
/// zone is a point for the other player.
pub fn scorer_for(pair: TagPair) -> Option<Side> {
    match pair.other(BodyTag::Ball)? {
        BodyTag::LowerDeadZone => Some(Side::Upper),
        BodyTag::UpperDeadZone => Some(Side::Lower),
        _ => None,
    }
}

/// Serve velocity heading toward `toward` with `drift` of the speed spent
/// sideways; `drift_sign` picks left or right.
pub fn serve_velocity(speed: f32, drift: f32, drift_sign: f32, toward: Side) -> Vec2 {
    let drift = drift.clamp(0.0, 0.99);
    let vx = speed * drift * drift_sign.signum();
    let vy = speed * (1.0 - drift * drift).sqrt() * toward.direction();
    Vec2::new(vx, vy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_dead_zone_scores_for_upper() {
        let pair = TagPair::new(BodyTag::LowerDeadZone, BodyTag::Ball);
        assert_eq!(scorer_for(pair), Some(Side::Upper));
    }

    #[test]
    fn upper_dead_zone_scores_for_lower() {
        let pair = TagPair::new(BodyTag::Ball, BodyTag::UpperDeadZone);
        assert_eq!(scorer_for(pair), Some(Side::Lower));
    }

    #[test]
    fn paddle_hits_score_nothing() {
        assert_eq!(scorer_for(TagPair::new(BodyTag::Ball, BodyTag::LowerPaddle)), None);
        assert_eq!(
            scorer_for(TagPair::new(BodyTag::UpperPaddle, BodyTag::UpperDeadZone)),
            None
        );
    }

    #[test]
    fn award_counts_points() {
        let mut score = Score::default();
        score.award(Side::Lower);
        score.award(Side::Upper);
        score.award(Side::Lower);
        assert_eq!(score, Score { lower: 2, upper: 1 });
    }

    #[test]
    fn serve_keeps_requested_speed_and_heading() {
        let v = serve_velocity(6.0, 0.25, -1.0, Side::Lower);
        assert!((v.length() - 6.0).abs() < 1e-4);
        assert!(v.y < 0.0);
        assert!(v.x < 0.0);

        let v = serve_velocity(6.0, 0.25, 1.0, Side::Upper);
        assert!(v.y > 0.0);
        assert!(v.x > 0.0);
    }
}

/// Horizontal velocity for a kinematic paddle.
///
/// `direction` is the requested heading in [-1, 1]. The result never carries
/// the paddle origin past `±limit` within one step of `dt` seconds.
pub fn paddle_velocity(direction: f32, x: f32, limit: f32, speed: f32, dt: f32) -> f32 {
    let wanted = direction.clamp(-1.0, 1.0) * speed;
    clamp_to_travel(wanted, x, limit, dt)
}

fn clamp_to_travel(velocity: f32, x: f32, limit: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    let next = x + velocity * dt;
    if next > limit {
        ((limit - x) / dt).max(0.0)
    } else if next < -limit {
        ((-limit - x) / dt).min(0.0)
    } else {
        velocity
    }
}

/// Heading from a pair of held keys.
pub fn key_direction(left: bool, right: bool) -> f32 {
    match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;
    const LIMIT: f32 = 4.5;
    const SPEED: f32 = 8.0;

    fn integrate(mut x: f32, direction: f32, steps: usize) -> f32 {
        for _ in 0..steps {
            x += paddle_velocity(direction, x, LIMIT, SPEED, DT) * DT;
        }
        x
    }

    mod free_travel {
        use super::*;

        #[test]
        fn moves_at_full_speed_in_open_space() {
            assert_eq!(paddle_velocity(1.0, 0.0, LIMIT, SPEED, DT), SPEED);
            assert_eq!(paddle_velocity(-1.0, 0.0, LIMIT, SPEED, DT), -SPEED);
        }

        #[test]
        fn idle_without_direction() {
            assert_eq!(paddle_velocity(0.0, 1.0, LIMIT, SPEED, DT), 0.0);
        }

        #[test]
        fn oversized_direction_is_clamped() {
            assert_eq!(paddle_velocity(3.0, 0.0, LIMIT, SPEED, DT), SPEED);
        }
    }

    mod walls {
        use super::*;

        #[test]
        fn stops_at_right_wall() {
            assert_eq!(paddle_velocity(1.0, LIMIT, LIMIT, SPEED, DT), 0.0);
        }

        #[test]
        fn stops_at_left_wall() {
            assert_eq!(paddle_velocity(-1.0, -LIMIT, LIMIT, SPEED, DT), 0.0);
        }

        #[test]
        fn can_leave_the_wall() {
            assert_eq!(paddle_velocity(-1.0, LIMIT, LIMIT, SPEED, DT), -SPEED);
        }

        #[test]
        fn never_overshoots_when_held() {
            let x = integrate(0.0, 1.0, 600);
            assert!(x <= LIMIT + 1e-4);
            assert!((x - LIMIT).abs() < 1e-3);

            let x = integrate(0.0, -1.0, 600);
            assert!(x >= -LIMIT - 1e-4);
        }

        #[test]
        fn zero_dt_yields_no_motion() {
            assert_eq!(paddle_velocity(1.0, 0.0, LIMIT, SPEED, 0.0), 0.0);
        }
    }

    #[test]
    fn opposing_keys_cancel() {
        assert_eq!(key_direction(true, true), 0.0);
        assert_eq!(key_direction(true, false), -1.0);
        assert_eq!(key_direction(false, true), 1.0);
        assert_eq!(key_direction(false, false), 0.0);
    }
}

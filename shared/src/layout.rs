use crate::body::{box_vertices, BodyDef, BodyTag, BodyType, Shape};
use crate::config::BoardConfig;
use crate::vec2::{cross, sub, Vec2};

/// Ball restitution. Pong keeps its energy.
pub const BALL_RESTITUTION: f32 = 1.0;

/// Resolved board geometry. The board centre is the origin.
///
/// Paddles are triangles rather than bars, so the ball leaves them at an
/// angle that depends on where it hits; a practised player can aim.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub config: BoardConfig,
    pub border_vertices: Vec<Vec2>,
    pub lower_paddle_vertices: Vec<Vec2>,
    pub upper_paddle_vertices: Vec<Vec2>,
    /// Paddle positions are the back edge of the triangle.
    pub lower_paddle_position: Vec2,
    pub upper_paddle_position: Vec2,
    /// Dead-zone positions are box centres.
    pub lower_dead_zone_position: Vec2,
    pub upper_dead_zone_position: Vec2,
}

impl BoardLayout {
    pub fn new(config: &BoardConfig) -> Self {
        let half_w = config.board_width * 0.5;
        let half_h = config.board_height * 0.5;
        let dz = config.dead_zone_height;

        let lower_paddle_vertices = vec![
            Vec2::new(-config.paddle_width * 0.5, 0.0),
            Vec2::new(config.paddle_width * 0.5, 0.0),
            Vec2::new(0.0, config.paddle_height),
        ];
        // Mirroring flips the winding, so reverse to stay counter-clockwise.
        let upper_paddle_vertices = lower_paddle_vertices
            .iter()
            .rev()
            .map(|v| v.flip_y())
            .collect();

        Self {
            config: *config,
            border_vertices: box_vertices(half_w, half_h),
            lower_paddle_vertices,
            upper_paddle_vertices,
            lower_paddle_position: Vec2::new(0.0, -half_h + dz),
            upper_paddle_position: Vec2::new(0.0, half_h - dz),
            lower_dead_zone_position: Vec2::new(0.0, -half_h + dz * 0.5),
            upper_dead_zone_position: Vec2::new(0.0, half_h - dz * 0.5),
        }
    }

    /// Furthest a paddle origin may travel from the centre line before its
    /// corner touches the side wall.
    pub fn paddle_travel_limit(&self) -> f32 {
        (self.config.board_width - self.config.paddle_width) * 0.5
    }

    /// The five bodies that exist for the lifetime of the board.
    pub fn static_bodies(&self) -> Vec<BodyDef> {
        let dead_zone = Shape::Box {
            half_width: self.config.board_width * 0.5,
            half_height: self.config.dead_zone_height * 0.5,
        };

        vec![
            BodyDef::new(
                BodyTag::Border,
                BodyType::Static,
                Shape::ChainLoop {
                    vertices: self.border_vertices.clone(),
                },
            )
            .with_friction(0.0),
            BodyDef::new(
                BodyTag::LowerPaddle,
                BodyType::Kinematic,
                Shape::Polygon {
                    vertices: self.lower_paddle_vertices.clone(),
                },
            )
            .at(self.lower_paddle_position)
            .with_friction(0.0),
            BodyDef::new(
                BodyTag::UpperPaddle,
                BodyType::Kinematic,
                Shape::Polygon {
                    vertices: self.upper_paddle_vertices.clone(),
                },
            )
            .at(self.upper_paddle_position)
            .with_friction(0.0),
            BodyDef::new(BodyTag::LowerDeadZone, BodyType::Static, dead_zone.clone())
                .at(self.lower_dead_zone_position)
                .sensor(),
            BodyDef::new(BodyTag::UpperDeadZone, BodyType::Static, dead_zone)
                .at(self.upper_dead_zone_position)
                .sensor(),
        ]
    }

    pub fn ball(&self, position: Vec2, velocity: Vec2) -> BodyDef {
        BodyDef::new(
            BodyTag::Ball,
            BodyType::Dynamic,
            Shape::Circle {
                radius: self.config.ball_radius,
            },
        )
        .at(position)
        .with_velocity(velocity)
        .with_friction(0.0)
        .with_restitution(BALL_RESTITUTION)
        .with_density(1.0)
        .with_linear_damping(0.0)
        .fixed_rotation()
    }
}

/// True when a simple polygon winds counter-clockwise (positive signed area).
pub fn is_counter_clockwise(vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let origin = vertices[0];
    let twice_area: f32 = vertices
        .windows(2)
        .skip(1)
        .map(|w| cross(sub(w[0], origin), sub(w[1], origin)))
        .sum();
    twice_area > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> BoardLayout {
        BoardLayout::new(&BoardConfig::default())
    }

    #[test]
    fn paddles_wind_counter_clockwise() {
        let l = layout();
        assert!(is_counter_clockwise(&l.lower_paddle_vertices));
        assert!(is_counter_clockwise(&l.upper_paddle_vertices));
    }

    #[test]
    fn upper_paddle_points_down() {
        let l = layout();
        assert!(l.upper_paddle_vertices.iter().all(|v| v.y <= 0.0));
        assert!(l.lower_paddle_vertices.iter().all(|v| v.y >= 0.0));
    }

    #[test]
    fn clockwise_polygon_detected() {
        let cw = vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)];
        assert!(!is_counter_clockwise(&cw));
    }

    #[test]
    fn paddles_sit_on_dead_zone_inner_edge() {
        let l = layout();
        let c = l.config;
        assert!((l.lower_paddle_position.y - (-15.0 + 0.2)).abs() < 1e-6);
        assert!((l.upper_paddle_position.y - (15.0 - 0.2)).abs() < 1e-6);
        assert!(
            (l.lower_dead_zone_position.y + c.dead_zone_height * 0.5 - l.lower_paddle_position.y)
                .abs()
                < 1e-6
        );
    }

    #[test]
    fn static_bodies_have_one_of_each_tag() {
        let bodies = layout().static_bodies();
        assert_eq!(bodies.len(), 5);
        for tag in BodyTag::ALL.iter().filter(|t| **t != BodyTag::Ball) {
            assert_eq!(bodies.iter().filter(|b| b.tag == *tag).count(), 1, "{tag:?}");
        }
    }

    #[test]
    fn only_dead_zones_are_sensors() {
        for body in layout().static_bodies() {
            assert_eq!(body.is_sensor, body.tag.is_dead_zone(), "{:?}", body.tag);
        }
    }

    #[test]
    fn paddles_are_kinematic_and_frictionless() {
        for body in layout().static_bodies().iter().filter(|b| b.tag.is_paddle()) {
            assert_eq!(body.body_type, BodyType::Kinematic);
            assert_eq!(body.friction, Some(0.0));
        }
    }

    #[test]
    fn ball_is_dynamic_and_bouncy() {
        let ball = layout().ball(Vec2::new(-0.3, 0.0), Vec2::new(1.0, -6.0));
        assert_eq!(ball.tag, BodyTag::Ball);
        assert_eq!(ball.body_type, BodyType::Dynamic);
        assert_eq!(ball.restitution, Some(BALL_RESTITUTION));
        assert_eq!(ball.shape, Shape::Circle { radius: 0.05 });
        assert_eq!(ball.linear_velocity, Vec2::new(1.0, -6.0));
    }

    #[test]
    fn travel_limit_keeps_paddle_inside() {
        let l = layout();
        assert!((l.paddle_travel_limit() - 4.5).abs() < 1e-6);
    }
}

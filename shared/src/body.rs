//! Declarative body descriptions.
//!
//! A [`BodyDef`] describes one rigid body carrying exactly one collider.
//! The game crate turns it into engine components; keeping the description
//! engine-free lets the layout be checked without a physics world.

use crate::vec2::Vec2;

/// There are only a handful of objects in a pong game, so a closed tag set
/// identifies every body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyTag {
    Ball,
    LowerPaddle,
    UpperPaddle,
    Border,
    LowerDeadZone,
    UpperDeadZone,
}

impl BodyTag {
    pub const ALL: [BodyTag; 6] = [
        BodyTag::Ball,
        BodyTag::LowerPaddle,
        BodyTag::UpperPaddle,
        BodyTag::Border,
        BodyTag::LowerDeadZone,
        BodyTag::UpperDeadZone,
    ];

    pub fn is_paddle(self) -> bool {
        matches!(self, BodyTag::LowerPaddle | BodyTag::UpperPaddle)
    }

    pub fn is_dead_zone(self) -> bool {
        matches!(self, BodyTag::LowerDeadZone | BodyTag::UpperDeadZone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    /// Never moves.
    Static,
    /// Moved by setting its velocity; unaffected by forces.
    Kinematic,
    Dynamic,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned box centred on the body origin.
    Box { half_width: f32, half_height: f32 },
    /// Convex polygon, counter-clockwise.
    Polygon { vertices: Vec<Vec2> },
    /// Closed chain of edges; the last vertex connects back to the first.
    ChainLoop { vertices: Vec<Vec2> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyDef {
    pub tag: BodyTag,
    pub body_type: BodyType,
    pub shape: Shape,
    pub position: Vec2,
    /// Radians, counter-clockwise.
    pub angle: f32,
    pub linear_velocity: Vec2,
    pub friction: Option<f32>,
    pub restitution: Option<f32>,
    pub density: Option<f32>,
    pub linear_damping: Option<f32>,
    pub is_sensor: bool,
    pub fixed_rotation: bool,
}

impl BodyDef {
    pub fn new(tag: BodyTag, body_type: BodyType, shape: Shape) -> Self {
        Self {
            tag,
            body_type,
            shape,
            position: Vec2::ZERO,
            angle: 0.0,
            linear_velocity: Vec2::ZERO,
            friction: None,
            restitution: None,
            density: None,
            linear_damping: None,
            is_sensor: false,
            fixed_rotation: false,
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.linear_velocity = velocity;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = Some(restitution);
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = Some(density);
        self
    }

    pub fn with_linear_damping(mut self, damping: f32) -> Self {
        self.linear_damping = Some(damping);
        self
    }

    pub fn sensor(mut self) -> Self {
        self.is_sensor = true;
        self
    }

    pub fn fixed_rotation(mut self) -> Self {
        self.fixed_rotation = true;
        self
    }
}

/// Corners of a box centred on the origin, counter-clockwise from the
/// lower-left corner.
pub fn box_vertices(half_width: f32, half_height: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(-half_width, -half_height),
        Vec2::new(half_width, -half_height),
        Vec2::new(half_width, half_height),
        Vec2::new(-half_width, half_height),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_vertices_start_lower_left() {
        let v = box_vertices(2.0, 1.0);
        assert_eq!(v[0], Vec2::new(-2.0, -1.0));
        assert_eq!(v[2], Vec2::new(2.0, 1.0));
    }

    #[test]
    fn builder_sets_optional_parameters() {
        let def = BodyDef::new(BodyTag::Ball, BodyType::Dynamic, Shape::Circle { radius: 0.1 })
            .at(Vec2::new(1.0, 2.0))
            .with_friction(0.0)
            .with_linear_damping(0.5)
            .fixed_rotation();
        assert_eq!(def.position, Vec2::new(1.0, 2.0));
        assert_eq!(def.friction, Some(0.0));
        assert_eq!(def.restitution, None);
        assert_eq!(def.linear_damping, Some(0.5));
        assert!(def.fixed_rotation);
        assert!(!def.is_sensor);
    }

    #[test]
    fn tag_predicates() {
        assert!(BodyTag::UpperPaddle.is_paddle());
        assert!(!BodyTag::Border.is_paddle());
        assert!(BodyTag::LowerDeadZone.is_dead_zone());
        assert!(!BodyTag::Ball.is_dead_zone());
    }
}

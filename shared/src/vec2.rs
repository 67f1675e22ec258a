/// 2D point/vector in board space (metres, origin at the board centre, +y up).
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        sub(self, other).length()
    }

    /// Mirror across the x axis.
    pub fn flip_y(self) -> Self {
        Self::new(self.x, -self.y)
    }
}

/// Shorthand constructor
pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x + b.x, a.y + b.y)
}

pub fn sub(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x - b.x, a.y - b.y)
}

pub fn scale(v: Vec2, s: f32) -> Vec2 {
    Vec2::new(v.x * s, v.y * s)
}

pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    scale(add(a, b), 0.5)
}

/// Z component of the 2D cross product.
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_halfway() {
        let m = midpoint(vec2(-2.0, 4.0), vec2(2.0, 0.0));
        assert_eq!(m, vec2(0.0, 2.0));
    }

    #[test]
    fn cross_sign_follows_turn_direction() {
        assert!(cross(vec2(1.0, 0.0), vec2(0.0, 1.0)) > 0.0);
        assert!(cross(vec2(0.0, 1.0), vec2(1.0, 0.0)) < 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = vec2(3.0, 0.0);
        let b = vec2(0.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((b.distance(a) - 5.0).abs() < 1e-6);
    }
}

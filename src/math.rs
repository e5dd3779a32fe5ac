//! 2D vector math for the simulation
//!
//! Plain value type: every operation returns a new vector. Positions are
//! pixels, velocities pixels per second.

// Not every op is used by the sim itself; the full kit stays available.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Component-wise tolerance for approximate equality
pub const EQUAL_EPSILON: f32 = 0.001;

/// 2D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction. The zero vector normalizes to
    /// itself rather than producing NaN.
    pub fn normalize(self) -> Vec2 {
        let l = self.length();
        if l == 0.0 {
            return Vec2::ZERO;
        }
        Vec2 {
            x: self.x / l,
            y: self.y / l,
        }
    }

    pub fn scale(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }

    /// True if both components are within [`EQUAL_EPSILON`] of each other.
    pub fn approx_eq(self, other: Vec2) -> bool {
        (self.x - other.x).abs() <= EQUAL_EPSILON && (self.y - other.y).abs() <= EQUAL_EPSILON
    }

    /// Rotate counter-clockwise by `radians`.
    pub fn rotate(self, radians: f32) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2 {
            x: cos * self.x - sin * self.y,
            y: sin * self.x + cos * self.y,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        self.scale(s)
    }
}

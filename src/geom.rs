//! 2D geometry primitives
//!
//! Vectors are plain `glam::Vec2` values (screen space, y grows downward).
//! `Rect` is an axis-aligned rectangle with half-open containment.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle: top-left origin plus size (width, height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub origin: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle anchored at (0, 0)
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            size: Vec2::new(width, height),
        }
    }

    /// Half-open containment: `origin <= p < origin + size` on both axes
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.origin.x <= p.x
            && p.x < self.origin.x + self.size.x
            && self.origin.y <= p.y
            && p.y < self.origin.y + self.size.y
    }

    /// Center point, using floor division of the size
    pub fn center(&self) -> Vec2 {
        self.origin + self.size.floor_div(2.0)
    }
}

/// Extra vector operations used by input and scene code
pub trait VecExt {
    /// Whether this point lies inside `rect` (half-open)
    fn is_in_rect(self, rect: &Rect) -> bool;
    /// Clamp each axis into `[origin, origin + size - 1]`
    fn clamp_to_rect(self, rect: &Rect) -> Vec2;
    /// Unit vector scaled by `k`, or zero for a zero-length vector
    fn unit_or_zero(self, k: f32) -> Vec2;
    /// Component-wise floor division
    fn floor_div(self, k: f32) -> Vec2;
}

impl VecExt for Vec2 {
    #[inline]
    fn is_in_rect(self, rect: &Rect) -> bool {
        rect.contains(self)
    }

    fn clamp_to_rect(self, rect: &Rect) -> Vec2 {
        Vec2::new(
            clamp(self.x, rect.origin.x, rect.origin.x + rect.size.x - 1.0),
            clamp(self.y, rect.origin.y, rect.origin.y + rect.size.y - 1.0),
        )
    }

    fn unit_or_zero(self, k: f32) -> Vec2 {
        let r = self.length();
        if r == 0.0 {
            return Vec2::ZERO;
        }
        self * (k / r)
    }

    #[inline]
    fn floor_div(self, k: f32) -> Vec2 {
        (self / k).floor()
    }
}

/// Clamp `x` into `[min, max]`. Unlike `f32::clamp` this never panics when
/// `min > max`; `max` wins.
#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    let mut x = x;
    if x < min {
        x = min;
    }
    if x > max {
        x = max;
    }
    x
}

/// Sine of an angle in degrees
#[inline]
pub fn sin_deg(deg: f32) -> f32 {
    deg.to_radians().sin()
}

/// Cosine of an angle in degrees
#[inline]
pub fn cos_deg(deg: f32) -> f32 {
    deg.to_radians().cos()
}

/// Heading of `v` in degrees, `[0, 360)`.
///
/// 0 points right and angles grow counter-clockwise on screen, so with y
/// growing downward `(0, -1)` is 90 (up) and `(0, 1)` is 270 (down).
#[inline]
pub fn heading_degrees(v: Vec2) -> f32 {
    (360.0 - v.y.atan2(v.x) * 180.0 / std::f32::consts::PI) % 360.0
}

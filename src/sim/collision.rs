//! Collision detection between a falling ball and the cup
//!
//! The cup is an axis-aligned rectangle; the ball is a circle. The test
//! clamps the circle center onto the rectangle to find the nearest point and
//! compares that distance against the radius.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CupRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CupRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    /// Point on (or in) the rectangle nearest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}

/// True if a circle at `center` with `radius` touches or overlaps `rect`
///
/// Touching (distance exactly equal to the radius) counts as a hit.
#[inline]
pub fn check_collision(center: Vec2, radius: f32, rect: &CupRect) -> bool {
    let nearest = rect.closest_point(center);
    center.distance(nearest) <= radius
}

//! Axis-aligned rectangles for static wall geometry.
//!
//! Walls are described by their top-left corner and size, in the same screen
//! coordinates as agent positions (y grows downward).

use glam::Vec2;

/// An axis-aligned rectangle `[min, min + size]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min:  Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { min: Vec2::new(x, y), size: Vec2::new(width, height) }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x < max.x && p.y >= self.min.y && p.y < max.y
    }

    /// The point of the rectangle nearest to `p` (`p` itself when inside).
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max())
    }

    /// Euclidean distance from `p` to the rectangle; zero inside.
    #[inline]
    pub fn distance_to(&self, p: Vec2) -> f32 {
        self.closest_point(p).distance(p)
    }

    #[inline]
    pub fn distance_squared_to(&self, p: Vec2) -> f32 {
        self.closest_point(p).distance_squared(p)
    }
}

//! Axis-aligned rectangles
//!
//! Screen space: x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    /// Rectangle from top-left corner and size
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    /// Rectangle from integer tile coordinates
    pub fn from_tile(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x as f32, y as f32, w as f32, h as f32)
    }

    /// Rectangle of the given size centered on a point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_disjoint_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(200.0, 300.0), Vec2::splat(40.0));
        assert_eq!(r.min, Vec2::new(180.0, 280.0));
        assert_eq!(r.max, Vec2::new(220.0, 320.0));
        assert_eq!(r.center(), Vec2::new(200.0, 300.0));
        assert_eq!(r.size(), Vec2::splat(40.0));
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(
            ax in -500i32..500, ay in -500i32..500, aw in 1i32..200, ah in 1i32..200,
            bx in -500i32..500, by in -500i32..500, bw in 1i32..200, bh in 1i32..200,
        ) {
            let a = Rect::from_tile(ax, ay, aw, ah);
            let b = Rect::from_tile(bx, by, bw, bh);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn rect_right_of_another_never_intersects(
            x in -500i32..500, y in -500i32..500, w in 1i32..200, h in 1i32..200,
            gap in 0i32..50, dy in -100i32..100,
        ) {
            let a = Rect::from_tile(x, y, w, h);
            let b = Rect::from_tile(x + w + gap, y + dy, w, h);
            prop_assert!(!a.intersects(&b));
        }
    }
}

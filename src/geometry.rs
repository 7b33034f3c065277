//! Integer pixel rectangles.

use crate::scale::round_px;
use glam::{IVec2, Vec2};

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rect of the given size whose center is `center` (integer halving of the size)
    pub fn from_center(center: IVec2, width: i32, height: i32) -> Self {
        Self::new(center.x - width / 2, center.y - height / 2, width, height)
    }

    /// Rect spanning two real-valued corners, each edge rounded on its own.
    ///
    /// Rounding edges instead of size keeps adjacent rects flush.
    pub fn from_edges(min: Vec2, max: Vec2) -> Self {
        let x0 = round_px(min.x);
        let y0 = round_px(min.y);
        let x1 = round_px(max.x);
        let y1 = round_px(max.y);
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn translate(&self, delta: IVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlap test; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(IVec2::new(100, 50), 49, 43);
        assert_eq!(r, Rect::new(76, 29, 49, 43));
        assert_eq!(r.center(), IVec2::new(100, 50));
    }

    #[test]
    fn test_from_edges_shares_boundaries() {
        let a = Rect::from_edges(Vec2::new(0.0, 0.0), Vec2::new(10.5, 4.0));
        let b = Rect::from_edges(Vec2::new(10.5, 0.0), Vec2::new(21.0, 4.0));
        assert_eq!(a.right(), b.x);
    }

    #[test]
    fn test_intersects_excludes_touching() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
        assert!(!a.intersects(&Rect::new(0, 10, 5, 5)));
    }

    #[test]
    fn test_translate_and_contains() {
        let r = Rect::new(0, 0, 4, 4).translate(IVec2::new(-2, 3));
        assert!(r.contains(-2, 3));
        assert!(!r.contains(2, 3));
    }
}

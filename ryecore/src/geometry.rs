//! Plain geometry values shared by the evaluator, the solver and the app.
//!
//! Everything here lives in surface-local pixel space: (0, 0) is the
//! top-left corner of the playground, x grows right and y grows down.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Sentinel used before the first pointer event.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The point at `angle` radians on the circle of `radius` around `self`.
    pub fn on_circle(self, radius: f64, angle: f64) -> Point {
        Point {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

// egui works in f32. Positions widen on the way in and narrow again only
// when handed back for painting.

impl From<egui::Pos2> for Point {
    fn from(pos: egui::Pos2) -> Self {
        Point::new(pos.x.into(), pos.y.into())
    }
}

impl From<egui::Vec2> for Point {
    fn from(v: egui::Vec2) -> Self {
        Point::new(v.x.into(), v.y.into())
    }
}

impl From<Point> for egui::Pos2 {
    fn from(p: Point) -> Self {
        egui::pos2(p.x as f32, p.y as f32)
    }
}

impl From<Point> for egui::Vec2 {
    fn from(p: Point) -> Self {
        egui::vec2(p.x as f32, p.y as f32)
    }
}

/// Measured size of the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Size reported before the surface has been laid out.
    pub const UNMEASURED: Viewport = Viewport { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface collapsed to zero in either direction cannot host the
    /// button, so it counts as not measured yet.
    pub fn is_measured(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Strict containment in the viewport shrunk by `margin` on all four sides.
    pub fn inset_contains(self, p: Point, margin: f64) -> bool {
        p.x > margin
            && p.y > margin
            && p.x < self.width - margin
            && p.y < self.height - margin
    }
}

impl From<egui::Vec2> for Viewport {
    fn from(size: egui::Vec2) -> Self {
        Viewport::new(size.x.max(0.0).into(), size.y.max(0.0).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
        assert_eq!(Point::new(-1.0, 2.0).distance(Point::new(-1.0, 2.0)), 0.0);
    }

    #[test]
    fn test_on_circle() {
        let c = Point::new(10.0, 20.0);
        let right = c.on_circle(5.0, 0.0);
        assert_eq!(right, Point::new(15.0, 20.0));

        let down = c.on_circle(5.0, FRAC_PI_2);
        assert!((down.x - 10.0).abs() < 1e-9);
        assert!((down.y - 25.0).abs() < 1e-9);

        let left = c.on_circle(5.0, PI);
        assert!((left.x - 5.0).abs() < 1e-9);
        assert!((left.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_inset_is_strict() {
        let vp = Viewport::new(200.0, 100.0);
        assert!(vp.inset_contains(Point::new(100.0, 50.0), 10.0));
        assert!(!vp.inset_contains(Point::new(10.0, 50.0), 10.0));
        assert!(!vp.inset_contains(Point::new(190.0, 50.0), 10.0));
        assert!(!vp.inset_contains(Point::new(100.0, 90.0), 10.0));
        assert!(!vp.inset_contains(Point::new(100.0, 10.0), 10.0));
    }

    #[test]
    fn test_measured() {
        assert!(!Viewport::UNMEASURED.is_measured());
        assert!(!Viewport::new(640.0, 0.0).is_measured());
        assert!(Viewport::new(640.0, 480.0).is_measured());
    }

    #[test]
    fn test_egui_conversions() {
        let p: Point = egui::pos2(1.5, -2.0).into();
        assert_eq!(p, Point::new(1.5, -2.0));
        let back: egui::Pos2 = p.into();
        assert_eq!(back, egui::pos2(1.5, -2.0));

        let local: Point = egui::vec2(0.25, 3.5).into();
        assert_eq!(local, Point::new(0.25, 3.5));

        let vp: Viewport = egui::vec2(-3.0, 7.0).into();
        assert_eq!(vp, Viewport::new(0.0, 7.0));
    }
}

//! Core geometry types for tessera.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! In JS you'd write: `const point = { x: 1.0, y: 2.0 }`
//! In Rust, we define a `struct` with explicit types.
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = like console.log, lets you print with `{:?}`
//! - `Clone` = can duplicate the value (like spread: `{...obj}`)
//! - `Copy` = can copy implicitly (small stack values only)
//! - `PartialEq` = can compare with `==`

use std::f64::consts::PI;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this point around `center` by `degrees` (counter-clockwise
    /// in math terms; visually clockwise in SVG space since y grows down).
    #[inline]
    pub fn rotated_about(&self, center: Point, degrees: f64) -> Point {
        let rad = degrees * PI / 180.0;
        let (sin_a, cos_a) = rad.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point::new(
            center.x + dx * cos_a - dy * sin_a,
            center.y + dx * sin_a + dy * cos_a,
        )
    }
}

/// Clip outline for a non-rectangular tile.
///
/// The renderer applies this in tile-local coordinates so that overflow
/// from the rectangular source artwork stays hidden.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Straight-edged outline (hexagons).
    Polygon(Vec<Point>),
    /// SVG path data for curved outlines (fish scales).
    Path(String),
}

impl Outline {
    /// Render the outline as SVG path data.
    pub fn to_path_data(&self) -> String {
        match self {
            Outline::Polygon(points) => {
                let mut d = String::new();
                for (i, p) in points.iter().enumerate() {
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    d.push_str(&format!("{}{:.2},{:.2} ", cmd, p.x, p.y));
                }
                d.push('Z');
                d
            }
            Outline::Path(data) => data.clone(),
        }
    }
}

/// Vertices of a flat-top hexagon inscribed in a `width` x `height`
/// bounding box. The horizontal top edge spans the middle half of the
/// width, so the side length equals `width / 2`.
pub fn hexagon_outline(width: f64, height: f64) -> Vec<Point> {
    vec![
        Point::new(width * 0.25, 0.0),
        Point::new(width * 0.75, 0.0),
        Point::new(width, height * 0.5),
        Point::new(width * 0.75, height),
        Point::new(width * 0.25, height),
        Point::new(0.0, height * 0.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_quarter_turn() {
        let p = Point::new(100.0, 50.0);
        let r = p.rotated_about(Point::new(50.0, 50.0), 90.0);
        assert!((r.x - 50.0).abs() < 1e-9);
        assert!((r.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn rotate_full_turn_is_identity() {
        let p = Point::new(12.5, -3.0);
        let r = p.rotated_about(Point::new(0.0, 0.0), 360.0);
        assert!((r.x - p.x).abs() < 1e-9);
        assert!((r.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn hexagon_has_six_vertices() {
        let hex = hexagon_outline(200.0, 173.0);
        assert_eq!(hex.len(), 6);
        // Top edge runs from 25% to 75% of the width
        assert_eq!(hex[0], Point::new(50.0, 0.0));
        assert_eq!(hex[1], Point::new(150.0, 0.0));
        // Side vertices sit at mid-height
        assert_eq!(hex[2], Point::new(200.0, 86.5));
        assert_eq!(hex[5], Point::new(0.0, 86.5));
    }

    #[test]
    fn polygon_outline_path_data() {
        let outline = Outline::Polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ]);
        let d = outline.to_path_data();
        assert!(d.starts_with("M0.00,0.00"), "Path should start with moveto, got {}", d);
        assert!(d.ends_with('Z'), "Path should be closed");
    }
}

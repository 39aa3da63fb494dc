//! Integer pixel geometry shared by the layout engine and its collaborators.
//!
//! Coordinates follow raster conventions: `x` grows to the right and `y`
//! grows downwards, with `(0, 0)` at the top-left pixel of the image.

use derive_more::{Add, AddAssign, Display, From, Sub, SubAssign};

/// A pixel coordinate
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Add, AddAssign, Sub, SubAssign, From, Display,
)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Translate the point by `dx`, `dy`
    pub const fn offset(self, dx: i32, dy: i32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A pixel extent. Heights may be negative when a block grows upwards
/// (see [`FormatConfig::reverse`](crate::FormatConfig::reverse)).
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Add, AddAssign, Sub, SubAssign, From, Display,
)]
#[display("{width}x{height}")]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Size {
        Size { width, height }
    }
}

/// Round a scaled pixel quantity to the nearest integer, ties to even.
///
/// This is the rounding used for every `multiplier * pixels` product in the
/// layout engine so that line advances stay stable across platforms.
pub(crate) fn round_px(v: f64) -> i32 {
    v.round_ties_even() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_add_and_subtract() {
        let p = Point::new(40, 40) + Point::new(-5, 10);
        assert_eq!(p, Point::new(35, 50));
        assert_eq!(p - Point::new(35, 50), Point::default());
        assert_eq!(Point::from((1, 2)), Point::new(1, 2));
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
        assert_eq!(Size::new(12, 7).to_string(), "12x7");
    }

    #[test]
    fn rounding_matches_nearest_even() {
        assert_eq!(round_px(2.5), 2);
        assert_eq!(round_px(3.5), 4);
        assert_eq!(round_px(-2.5), -2);
        assert_eq!(round_px(35.2), 35);
    }
}

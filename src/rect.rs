use crate::units::*;

/// An axis-aligned rectangle, specified by its top-left corner and size.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x: i32,
    /// The y-coordinate of the top-left corner.
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from two opposite corners, in any order. The result
    /// always has a non-negative width and height.
    pub fn from_corners(a: Point, b: Point) -> Rect {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Rect {
            x,
            y,
            width: a.x.max(b.x) - x,
            height: a.y.max(b.y) - y,
        }
    }

    /// Build a rectangle from its top-left corner and a size
    pub fn from_origin_size(tl: Point, size: Size) -> Rect {
        Rect::new(tl.x, tl.y, size.width, size.height)
    }

    pub fn tl(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn br(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<(Point, Size)> for Rect {
    fn from((tl, size): (Point, Size)) -> Self {
        Rect::from_origin_size(tl, size)
    }
}

impl From<Rect> for Option<tiny_skia::Rect> {
    fn from(r: Rect) -> Self {
        tiny_skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
    }
}

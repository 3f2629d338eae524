//! Element geometry
//!
//! Minimal 2D types for describing where an element sits on screen.
//! Coordinates are in the host's screen space (pixels, y-down).

/// A point in screen space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An element's bounding rectangle (origin at top-left)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half-extents (half width, half height)
    pub fn half_extents(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Whether the rect is unusable as interaction geometry.
    ///
    /// Zero or negative extents (element not laid out yet, or collapsed)
    /// and non-finite values both count. Callers must treat a degenerate
    /// rect as "no interaction" rather than divide by its extents.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
            || !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
    }

    /// Offset of a point from the rect's center
    pub fn offset_from_center(&self, point: Point) -> (f32, f32) {
        let c = self.center();
        (point.x - c.x, point.y - c.y)
    }

    /// Whether a point lies inside the rect (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

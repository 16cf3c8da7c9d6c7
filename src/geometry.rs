//! Geometric primitives in device units.
//!
//! Device coordinates grow to the right and upwards, as in PGPLOT; output
//! devices flip the y axis when they write pixels or SVG.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the left edge.
    pub x: f64,
    /// Y coordinate of the bottom edge.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Get the center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether both sides are finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Rotation plus translation aligned to an axis.
///
/// Local coordinates are `(along, across)`: distance from the start point in
/// the direction of the end point, and perpendicular offset where positive
/// values lie to the left of the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLocalFrame {
    origin: Point,
    cos: f64,
    sin: f64,
}

impl AxisLocalFrame {
    /// Build the frame for the axis running from `start` to `end`.
    ///
    /// Coincident end points produce a frame aligned with the x axis.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let length = start.distance(end);
        let (cos, sin) = if length > 0.0 {
            ((end.x - start.x) / length, (end.y - start.y) / length)
        } else {
            (1.0, 0.0)
        };
        Self { origin: start, cos, sin }
    }

    /// Map local `(along, across)` to device coordinates.
    #[must_use]
    pub fn to_device(&self, along: f64, across: f64) -> Point {
        Point::new(
            self.origin.x + along * self.cos - across * self.sin,
            self.origin.y + along * self.sin + across * self.cos,
        )
    }

    /// Axis direction in degrees, counter-clockwise from +x.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.sin.atan2(self.cos).to_degrees()
    }

    /// Start point of the axis.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }
}

use super::Point;

/// Axis-aligned box given by two corners, in logical pixels.
///
/// `x1 <= x2` and `y1 <= y2` is expected but not enforced; use
/// [`normalized`](Self::normalized) when the corners may be swapped.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box with its lower-left corner at `origin` and the given extent.
    #[inline]
    pub fn from_origin_size(origin: Point, width: f32, height: f32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    /// Box of `side × side` centered on `center`.
    #[inline]
    pub fn centered_square(center: Point, side: f32) -> Self {
        let h = side * 0.5;
        Self::new(center.x - h, center.y - h, center.x + h, center.y + h)
    }

    #[inline]
    pub fn min(self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn max(self) -> Point {
        Point::new(self.x2, self.y2)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.y2 - self.y1
    }

    #[inline]
    pub fn area(self) -> f32 {
        self.width() * self.height()
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new((self.x1 + self.x2) * 0.5, (self.y1 + self.y2) * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min().is_finite() && self.max().is_finite()
    }

    /// Swaps corners where needed so that `x1 <= x2` and `y1 <= y2`.
    #[inline]
    pub fn normalized(self) -> Self {
        Rect::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }

    /// Strict interior containment: points on the border are outside.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x > self.x1 && p.x < self.x2 && p.y > self.y1 && p.y < self.y2
    }

    /// Returns true when the interiors overlap. Touching edges do not count.
    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        self.intersect(other).is_some()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x1 = a.x1.max(b.x1);
        let y1 = a.y1.max(b.y1);
        let x2 = a.x2.min(b.x2);
        let y2 = a.y2.min(b.y2);

        if x2 - x1 <= 0.0 || y2 - y1 <= 0.0 {
            None
        } else {
            Some(Rect::new(x1, y1, x2, y2))
        }
    }
}

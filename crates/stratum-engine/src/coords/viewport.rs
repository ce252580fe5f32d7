use super::Point;

/// Drawable area in logical pixels.
///
/// The vertex shaders map `[0, width] × [0, height]` onto NDC, so this is the
/// orthographic projection shared by every pipeline.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// CPU mirror of the shader projection. Useful for hit-testing and tests.
    #[inline]
    pub fn to_ndc(self, p: Point) -> Point {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Point::new(p.x / w * 2.0 - 1.0, p.y / h * 2.0 - 1.0)
    }

    /// Converts a window-space position (top-left origin, +Y down) into
    /// bottom-left logical coordinates.
    #[inline]
    pub fn from_window(self, x: f32, y: f32) -> Point {
        Point::new(x, self.height - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners() {
        let vp = Viewport::new(640.0, 480.0);
        assert_eq!(vp.to_ndc(Point::new(0.0, 0.0)), Point::new(-1.0, -1.0));
        assert_eq!(vp.to_ndc(Point::new(640.0, 480.0)), Point::new(1.0, 1.0));
        assert_eq!(vp.to_ndc(Point::new(320.0, 240.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn window_position_flips_y() {
        let vp = Viewport::new(640.0, 480.0);
        assert_eq!(vp.from_window(10.0, 0.0), Point::new(10.0, 480.0));
        assert_eq!(vp.from_window(10.0, 480.0), Point::new(10.0, 0.0));
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}

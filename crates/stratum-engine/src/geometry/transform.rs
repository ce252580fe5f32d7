//! Centroid-relative transforms and bounding queries on [`VertexObject`].
//!
//! Every transform comes in two forms:
//! - in place (`move_by`, `rotate_rad`, `scale`, ...) taking `&mut self`
//! - by value (`moved`, `rotated_rad`, `scaled`, ...) returning a new object
//!
//! The by-value forms let a simulation step build the next state while the
//! renderer still reads the previous one. Rotation and scaling pivot on the
//! centroid, so they fail with [`GeometryError::EmptyGeometry`] on an empty
//! vertex set instead of producing NaN coordinates.

use crate::coords::{Point, Rect};

use super::error::{GeometryError, Result};
use super::VertexObject;

impl VertexObject {
    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Result<Point> {
        if self.vertices.is_empty() {
            return Err(GeometryError::EmptyGeometry);
        }

        let sum = self
            .vertices
            .iter()
            .fold(Point::zero(), |acc, &p| acc + p);
        Ok(sum / self.vertices.len() as f32)
    }

    /// Axis-aligned bounding box of the vertices.
    ///
    /// An empty vertex set yields the degenerate `Rect::new(0.0, 0.0, 0.0, 0.0)`
    /// rather than an error; callers that care should check [`is_empty`](Self::is_empty).
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::default();
        };

        self.vertices.iter().skip(1).fold(
            Rect::new(first.x, first.y, first.x, first.y),
            |r, p| Rect::new(r.x1.min(p.x), r.y1.min(p.y), r.x2.max(p.x), r.y2.max(p.y)),
        )
    }

    /// Translates every vertex by `(dx, dy)`.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        for p in &mut self.vertices {
            p.x += dx;
            p.y += dy;
        }
    }

    #[must_use]
    pub fn moved(&self, dx: f32, dy: f32) -> Self {
        let mut out = self.clone();
        out.move_by(dx, dy);
        out
    }

    /// Moves the object so that its centroid lands on `target`.
    pub fn center_at(&mut self, target: Point) -> Result<()> {
        let c = self.centroid()?;
        self.move_by(target.x - c.x, target.y - c.y);
        Ok(())
    }

    /// Rotates every vertex about the centroid by `angle` radians (counter-clockwise, +Y up).
    pub fn rotate_rad(&mut self, angle: f32) -> Result<()> {
        let c = self.centroid()?;
        let (sin, cos) = angle.sin_cos();

        for p in &mut self.vertices {
            let dx = p.x - c.x;
            let dy = p.y - c.y;
            p.x = dx * cos - dy * sin + c.x;
            p.y = dx * sin + dy * cos + c.y;
        }
        Ok(())
    }

    #[inline]
    pub fn rotate_deg(&mut self, angle: f32) -> Result<()> {
        self.rotate_rad(angle.to_radians())
    }

    pub fn rotated_rad(&self, angle: f32) -> Result<Self> {
        let mut out = self.clone();
        out.rotate_rad(angle)?;
        Ok(out)
    }

    #[inline]
    pub fn rotated_deg(&self, angle: f32) -> Result<Self> {
        self.rotated_rad(angle.to_radians())
    }

    /// Scales every vertex about the centroid by `factor`.
    pub fn scale(&mut self, factor: f32) -> Result<()> {
        let c = self.centroid()?;
        for p in &mut self.vertices {
            p.x = (p.x - c.x) * factor + c.x;
            p.y = (p.y - c.y) * factor + c.y;
        }
        Ok(())
    }

    pub fn scaled(&self, factor: f32) -> Result<Self> {
        let mut out = self.clone();
        out.scale(factor)?;
        Ok(out)
    }

    /// Vertex with the greatest `x` (first one wins on ties).
    pub fn x_most(&self) -> Option<Point> {
        self.extreme(|a, b| b.x > a.x)
    }

    /// Vertex with the smallest `x`.
    pub fn x_least(&self) -> Option<Point> {
        self.extreme(|a, b| b.x < a.x)
    }

    /// Vertex with the greatest `y`.
    pub fn y_most(&self) -> Option<Point> {
        self.extreme(|a, b| b.y > a.y)
    }

    /// Vertex with the smallest `y`.
    pub fn y_least(&self) -> Option<Point> {
        self.extreme(|a, b| b.y < a.y)
    }

    fn extreme(&self, better: impl Fn(Point, Point) -> bool) -> Option<Point> {
        let mut it = self.vertices.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |best, p| if better(best, p) { p } else { best }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn p(x: f32, y: f32) -> Point { Point::new(x, y) }

    fn approx_eq(a: &VertexObject, b: &VertexObject) -> bool {
        a.vertices.len() == b.vertices.len()
            && a.vertices
                .iter()
                .zip(&b.vertices)
                .all(|(u, v)| (u.x - v.x).abs() < EPS && (u.y - v.y).abs() < EPS)
    }

    fn triangle() -> VertexObject {
        VertexObject::from_points(vec![p(0.0, 0.0), p(0.0, 30.0), p(60.0, 0.0)])
    }

    // ── centroid / bounds ─────────────────────────────────────────────────

    #[test]
    fn centroid_is_vertex_mean() {
        assert_eq!(triangle().centroid(), Ok(p(20.0, 10.0)));
    }

    #[test]
    fn centroid_of_empty_fails() {
        assert_eq!(VertexObject::default().centroid(), Err(GeometryError::EmptyGeometry));
    }

    #[test]
    fn bounds_scans_min_max() {
        let v = VertexObject::from_points(vec![p(3.0, -1.0), p(-2.0, 4.0), p(1.0, 9.0)]);
        assert_eq!(v.bounds(), Rect::new(-2.0, -1.0, 3.0, 9.0));
    }

    #[test]
    fn bounds_of_empty_is_zero_rect() {
        assert_eq!(VertexObject::default().bounds(), Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    // ── move ──────────────────────────────────────────────────────────────

    #[test]
    fn move_then_inverse_restores_exactly() {
        let original = VertexObject::rectangle(Rect::new(12.5, 3.0, 80.0, 41.25));
        let mut v = original.clone();
        v.move_by(17.0, -6.5);
        assert_ne!(v, original);
        v.move_by(-17.0, 6.5);
        assert_eq!(v, original);
    }

    #[test]
    fn moved_leaves_source_untouched() {
        let src = triangle();
        let out = src.moved(1.0, 2.0);
        assert_eq!(src, triangle());
        assert_eq!(out.vertices[0], p(1.0, 2.0));
    }

    #[test]
    fn center_at_moves_centroid() {
        let mut v = triangle();
        v.center_at(p(100.0, 100.0)).unwrap();
        let c = v.centroid().unwrap();
        assert!((c.x - 100.0).abs() < EPS && (c.y - 100.0).abs() < EPS);
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn rotate_zero_is_identity() {
        let mut v = triangle();
        v.rotate_deg(0.0).unwrap();
        assert!(approx_eq(&v, &triangle()));
    }

    #[test]
    fn rotate_then_inverse_restores() {
        let original = VertexObject::rectangle_at(p(300.0, 200.0), 200.0, 100.0);
        for angle in [0.3_f32, 45.0, 90.0, 179.0, -271.5] {
            let back = original.rotated_deg(angle).unwrap().rotated_deg(-angle).unwrap();
            assert!(approx_eq(&back, &original), "angle {angle}");
        }
    }

    #[test]
    fn rotate_quarter_turn_about_centroid() {
        let mut v = VertexObject::from_points(vec![p(-1.0, 0.0), p(1.0, 0.0)]);
        v.rotate_rad(std::f32::consts::FRAC_PI_2).unwrap();
        let expected = VertexObject::from_points(vec![p(0.0, -1.0), p(0.0, 1.0)]);
        assert!(approx_eq(&v, &expected));
    }

    #[test]
    fn rotate_keeps_centroid() {
        let v = triangle().rotated_deg(33.0).unwrap();
        let c = v.centroid().unwrap();
        assert!((c.x - 20.0).abs() < EPS && (c.y - 10.0).abs() < EPS);
    }

    #[test]
    fn rotate_empty_fails() {
        let mut v = VertexObject::default();
        assert_eq!(v.rotate_deg(10.0), Err(GeometryError::EmptyGeometry));
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_one_is_identity() {
        let v = triangle().scaled(1.0).unwrap();
        assert!(approx_eq(&v, &triangle()));
    }

    #[test]
    fn scale_doubles_extent_about_centroid() {
        let v = VertexObject::rectangle(Rect::new(0.0, 0.0, 10.0, 10.0))
            .scaled(2.0)
            .unwrap();
        assert_eq!(v.bounds(), Rect::new(-5.0, -5.0, 15.0, 15.0));
    }

    #[test]
    fn scale_empty_fails() {
        assert_eq!(VertexObject::default().scaled(3.0), Err(GeometryError::EmptyGeometry));
    }

    // ── extremes ──────────────────────────────────────────────────────────

    #[test]
    fn extreme_vertices() {
        let v = VertexObject::from_points(vec![p(3.0, -1.0), p(-2.0, 4.0), p(1.0, 9.0)]);
        assert_eq!(v.x_most(), Some(p(3.0, -1.0)));
        assert_eq!(v.x_least(), Some(p(-2.0, 4.0)));
        assert_eq!(v.y_most(), Some(p(1.0, 9.0)));
        assert_eq!(v.y_least(), Some(p(3.0, -1.0)));
        assert_eq!(VertexObject::default().x_most(), None);
    }
}

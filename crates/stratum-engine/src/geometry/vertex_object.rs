use crate::coords::{Point, Rect};

use super::error::{GeometryError, Result};

/// Ordered vertices plus an index list: a polygon, a line set or a triangle mesh.
///
/// Invariant: every entry of `indices` is `< vertices.len()`. The fields are
/// public so callers can populate objects directly; [`check_indices`] verifies
/// the invariant before the data reaches a GPU buffer.
///
/// What `indices` encodes depends on how the object was built:
/// - empty for a raw outline (see [`from_points`])
/// - a triangle list after [`triangulate`] or for the quad constructors
/// - a line strip for [`polyline`]
///
/// [`check_indices`]: Self::check_indices
/// [`from_points`]: Self::from_points
/// [`triangulate`]: Self::triangulate
/// [`polyline`]: Self::polyline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexObject {
    pub vertices: Vec<Point>,
    pub indices: Vec<u32>,
}

/// Triangle-list indices shared by the quad constructors.
///
/// Quads are emitted in strip order: `(x1,y1) (x1,y2) (x2,y1) (x2,y2)`.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 1, 2, 3];

impl VertexObject {
    #[inline]
    pub fn new(vertices: Vec<Point>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Outline only; call [`triangulate`](Self::triangulate) to fill it.
    #[inline]
    pub fn from_points(points: impl Into<Vec<Point>>) -> Self {
        Self { vertices: points.into(), indices: Vec::new() }
    }

    /// Pre-triangulated quad covering `rect`.
    pub fn rectangle(rect: Rect) -> Self {
        Self {
            vertices: vec![
                Point::new(rect.x1, rect.y1),
                Point::new(rect.x1, rect.y2),
                Point::new(rect.x2, rect.y1),
                Point::new(rect.x2, rect.y2),
            ],
            indices: QUAD_INDICES.to_vec(),
        }
    }

    /// Quad with its lower-left corner at `origin`.
    #[inline]
    pub fn rectangle_at(origin: Point, width: f32, height: f32) -> Self {
        Self::rectangle(Rect::from_origin_size(origin, width, height))
    }

    /// Quad of `side × side` centered on `center`.
    #[inline]
    pub fn square(center: Point, side: f32) -> Self {
        Self::rectangle(Rect::centered_square(center, side))
    }

    /// Line strip through `points` in order (indices `0..n`).
    pub fn polyline(points: impl Into<Vec<Point>>) -> Self {
        let vertices = points.into();
        let indices = (0..vertices.len() as u32).collect();
        Self { vertices, indices }
    }

    /// Independent triangles, three points each.
    ///
    /// Trailing points that do not complete a triangle are dropped.
    pub fn triangles(points: &[Point]) -> Self {
        if points.len() % 3 != 0 {
            log::warn!(
                "VertexObject::triangles: {} points is not a multiple of 3; dropping {}",
                points.len(),
                points.len() % 3
            );
        }

        let usable = points.len() - points.len() % 3;
        Self {
            vertices: points[..usable].to_vec(),
            indices: (0..usable as u32).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of whole triangles the index list describes when read as a triangle list.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Appends a vertex. Existing indices no longer describe the outline and are dropped.
    pub fn push_vertex(&mut self, p: Point) {
        self.vertices.push(p);
        self.indices.clear();
    }

    /// Removes the last vertex, dropping indices like [`push_vertex`](Self::push_vertex).
    pub fn pop_vertex(&mut self) -> Option<Point> {
        let p = self.vertices.pop();
        if p.is_some() {
            self.indices.clear();
        }
        p
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Verifies that every index refers to an existing vertex.
    pub fn check_indices(&self) -> Result<()> {
        let len = self.vertices.len();
        match self.indices.iter().find(|&&i| i as usize >= len) {
            Some(&index) => Err(GeometryError::IndexOutOfBounds { index, len }),
            None => Ok(()),
        }
    }

    /// Flattens into interleaved `x, y` coordinates plus indices, ready for upload.
    pub fn vertex_array(&self) -> (Vec<f32>, Vec<u32>) {
        let mut coords = Vec::with_capacity(self.vertices.len() * 2);
        for p in &self.vertices {
            coords.push(p.x);
            coords.push(p.y);
        }
        (coords, self.indices.clone())
    }
}

impl From<Rect> for VertexObject {
    #[inline]
    fn from(rect: Rect) -> Self {
        Self::rectangle(rect)
    }
}

//! Polygon triangulation by ear clipping.
//!
//! Turns a simple polygon into a triangle list of indices into its own
//! vertex array, ready to be drawn with `PrimitiveTopology::TriangleList`.
//!
//! # Winding
//!
//! Vertices must be listed **clockwise with +Y up** (non-positive shoelace
//! area). Counter-clockwise input is rejected with
//! [`TriangulationFailure::CounterClockwise`] instead of being silently
//! reversed. Zero-area input, such as the strip-ordered quads built by
//! [`VertexObject::rectangle`], goes through the normal ear scan.
//!
//! # Algorithm
//!
//! An active list starts as `0..n`. While more than three entries remain, the
//! list is scanned in order for the first triple whose middle vertex turns
//! clockwise and whose triangle contains no vertex of the original polygon;
//! that triangle is emitted and its middle entry removed. The scan visits the
//! non-wrapping triples first, then the two that wrap across the end of the
//! list. The first-found rule makes the output deterministic.
//!
//! # Complexity
//!
//! O(n) candidate ears per pass, O(n) containment test per candidate, n − 3
//! passes: O(n³) in the worst case. Intended for interactively authored
//! outlines of tens to a few hundred vertices, not for large meshes.

mod predicates;
mod winding;

pub use winding::{signed_area, winding, Winding};

use crate::coords::Point;
use crate::geometry::{GeometryError, Result, TriangulationFailure, VertexObject};

use predicates::is_ear;

/// Triangulates a simple, clockwise polygon.
///
/// Returns `3 × (n − 2)` indices into `vertices`.
///
/// # Errors
/// - [`GeometryError::InvalidInput`] when fewer than 3 vertices are given
/// - [`GeometryError::TriangulationFailed`] when the polygon is wound
///   counter-clockwise or when a pass finds no ear (typically a
///   self-intersecting outline); no partial index list is returned
///
/// # Example
///
/// ```
/// use stratum_engine::coords::Point;
/// use stratum_engine::triangulate::triangulate;
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// ];
/// assert_eq!(triangulate(&square).unwrap(), vec![0, 1, 2, 0, 2, 3]);
/// ```
pub fn triangulate(vertices: &[Point]) -> Result<Vec<u32>> {
    let n = vertices.len();
    if n < 3 {
        return Err(GeometryError::InvalidInput { vertices: n });
    }

    if winding(vertices) == Winding::CounterClockwise {
        return Err(GeometryError::TriangulationFailed(
            TriangulationFailure::CounterClockwise,
        ));
    }

    let mut active: Vec<u32> = (0..n as u32).collect();
    let mut indices = Vec::with_capacity((n - 2) * 3);

    while active.len() > 3 {
        let Some(pos) = find_ear(vertices, &active) else {
            log::debug!(
                "triangulate: no ear among {} remaining of {} vertices",
                active.len(),
                n
            );
            return Err(GeometryError::TriangulationFailed(
                TriangulationFailure::NoEar { remaining: active.len() },
            ));
        };

        let m = active.len();
        let middle = (pos + 1) % m;
        indices.extend_from_slice(&[active[pos], active[middle], active[(pos + 2) % m]]);

        // Order-preserving removal keeps the scan deterministic.
        active.remove(middle);
    }

    indices.extend_from_slice(&active);
    Ok(indices)
}

/// Position of the first ear in scan order, if any.
fn find_ear(vertices: &[Point], active: &[u32]) -> Option<usize> {
    let m = active.len();
    (0..m).find(|&i| is_ear(vertices, active[i], active[(i + 1) % m], active[(i + 2) % m]))
}

impl VertexObject {
    /// Replaces `indices` with a triangulation of the outline.
    ///
    /// On failure `indices` is left empty. See [`triangulate`] for the
    /// winding requirement and complexity.
    pub fn triangulate(&mut self) -> Result<()> {
        match triangulate(&self.vertices) {
            Ok(indices) => {
                self.indices = indices;
                Ok(())
            }
            Err(e) => {
                self.indices.clear();
                Err(e)
            }
        }
    }

    /// Builds an object from `points` and triangulates it in one step.
    pub fn from_vertices(points: impl Into<Vec<Point>>) -> Result<Self> {
        let mut v = Self::from_points(points);
        v.triangulate()?;
        Ok(v)
    }

    #[inline]
    pub fn is_triangulated(&self) -> bool {
        !self.indices.is_empty()
            && self.indices.len() == self.vertices.len().saturating_sub(2) * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predicates::turn_sign;

    fn p(x: f32, y: f32) -> Point { Point::new(x, y) }

    fn covered_area(vertices: &[Point], indices: &[u32]) -> f32 {
        indices
            .chunks_exact(3)
            .map(|t| {
                let (a, b, c) = (vertices[t[0] as usize], vertices[t[1] as usize], vertices[t[2] as usize]);
                turn_sign(a, b, c).abs() * 0.5
            })
            .sum()
    }

    #[test]
    fn strip_ordered_square_yields_two_triangles() {
        let sq = [p(0.0, 0.0), p(0.0, 10.0), p(10.0, 0.0), p(10.0, 10.0)];
        let idx = triangulate(&sq).unwrap();
        assert_eq!(idx, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(covered_area(&sq, &idx), 100.0);
    }

    #[test]
    fn single_triangle_passes_through() {
        let tri = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)];
        assert_eq!(triangulate(&tri).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn concave_hexagon_skips_reflex_vertex() {
        // Vertex 2 at (5,5) is reflex.
        let hex = [p(0.0, 0.0), p(0.0, 10.0), p(5.0, 5.0), p(10.0, 10.0), p(10.0, 0.0), p(5.0, -5.0)];
        let idx = triangulate(&hex).unwrap();
        assert_eq!(idx, vec![0, 1, 2, 2, 3, 4, 0, 2, 4, 0, 4, 5]);
        assert_eq!(covered_area(&hex, &idx), 100.0);

        for t in idx.chunks_exact(3) {
            let (a, b, c) = (hex[t[0] as usize], hex[t[1] as usize], hex[t[2] as usize]);
            assert!(!predicates::triangle_contains(hex[2], a, b, c));
        }
    }

    #[test]
    fn vertex_on_candidate_diagonal_blocks_the_ear() {
        // (5,5) sits exactly on the diagonal (0,0)-(10,10); the first triple
        // must be rejected or the result would cover area outside the outline.
        let poly = [p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0), p(5.0, 5.0), p(3.0, -2.0)];
        let idx = triangulate(&poly).unwrap();
        assert_eq!(idx, vec![2, 3, 4, 1, 2, 4, 0, 1, 4, 0, 4, 5]);
        assert!((covered_area(&poly, &idx) - signed_area(&poly).abs()).abs() < 1e-3);
    }

    #[test]
    fn fewer_than_three_vertices_is_invalid_input() {
        assert_eq!(
            triangulate(&[p(0.0, 0.0), p(1.0, 1.0)]),
            Err(GeometryError::InvalidInput { vertices: 2 })
        );
        assert_eq!(triangulate(&[]), Err(GeometryError::InvalidInput { vertices: 0 }));
    }

    #[test]
    fn counter_clockwise_is_rejected() {
        let sq = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        assert_eq!(
            triangulate(&sq),
            Err(GeometryError::TriangulationFailed(TriangulationFailure::CounterClockwise))
        );
    }

    #[test]
    fn self_intersecting_outline_fails() {
        // Two lobes crossing at (2,2): signed area cancels to zero.
        let fig = [p(0.0, 0.0), p(0.0, 4.0), p(4.0, 0.0), p(8.0, 4.0), p(8.0, 0.0), p(4.0, 4.0)];
        assert_eq!(
            triangulate(&fig),
            Err(GeometryError::TriangulationFailed(TriangulationFailure::NoEar { remaining: 4 }))
        );
    }

    #[test]
    fn failed_triangulation_clears_indices() {
        let mut v = VertexObject::new(
            vec![p(0.0, 0.0), p(0.0, 4.0), p(4.0, 0.0), p(8.0, 4.0), p(8.0, 0.0), p(4.0, 4.0)],
            vec![0, 1, 2],
        );
        assert!(v.triangulate().is_err());
        assert!(v.indices.is_empty());
    }

    #[test]
    fn triangulate_replaces_existing_indices() {
        let mut v = VertexObject::rectangle(crate::coords::Rect::new(0.0, 0.0, 10.0, 10.0));
        v.triangulate().unwrap();
        assert_eq!(v.indices, vec![0, 1, 2, 0, 2, 3]);
        assert!(v.is_triangulated());
    }

    #[test]
    fn from_vertices_propagates_failure() {
        let ccw = vec![p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0)];
        assert!(matches!(
            VertexObject::from_vertices(ccw),
            Err(GeometryError::TriangulationFailed(_))
        ));

        let cw = vec![p(0.0, 0.0), p(0.0, 10.0), p(10.0, 0.0)];
        let v = VertexObject::from_vertices(cw).unwrap();
        assert_eq!(v.indices, vec![0, 1, 2]);
    }
}

use thiserror::Error;

/// Errors produced by geometry queries, transforms and triangulation.
///
/// All variants are recoverable; operations that fail leave no partial state
/// behind (a failed triangulation leaves the index list empty).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Too few vertices to run the algorithm at all.
    #[error("invalid input: triangulation needs at least 3 vertices, got {vertices}")]
    InvalidInput { vertices: usize },

    /// Centroid (and anything pivoting on it) of an empty vertex set.
    #[error("empty geometry: operation needs at least one vertex")]
    EmptyGeometry,

    /// The ear-clipping pass could not complete.
    #[error("triangulation failed: {0}")]
    TriangulationFailed(TriangulationFailure),

    /// An index refers past the end of the vertex list.
    #[error("index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds { index: u32, len: usize },
}

/// Why an ear-clipping pass gave up.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum TriangulationFailure {
    /// Vertices are listed counter-clockwise; the triangulator expects clockwise.
    #[error("polygon is wound counter-clockwise")]
    CounterClockwise,

    /// A full scan found no ear, usually a self-intersecting polygon.
    #[error("no ear found with {remaining} vertices left")]
    NoEar { remaining: usize },
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

//! Geometric data model: [`VertexObject`] and its transforms.
//!
//! Value types (`Point`, `Rect`) live in `coords`; triangulation lives in
//! `triangulate` and fills `VertexObject::indices`.

mod error;
mod transform;
mod vertex_object;

pub use error::{GeometryError, Result, TriangulationFailure};
pub use vertex_object::VertexObject;

//! Stratum engine crate.
//!
//! A small 2D drawing layer:
//! - `coords`, `paint`, `geometry`: value types and the [`VertexObject`] model
//! - `triangulate`: ear-clipping triangulation of simple polygons
//! - `buffer`: growable vertex/index storage
//! - `render`: drawables, pipelines and the renderer
//! - `device`, `window`, `core`, `time`, `logging`: the wgpu/winit runtime

pub mod buffer;
pub mod coords;
pub mod geometry;
pub mod paint;
pub mod render;
pub mod triangulate;

pub mod core;
pub mod device;
pub mod logging;
pub mod time;
pub mod window;

pub use coords::{distance, Point, Rect, Viewport};
pub use geometry::{GeometryError, TriangulationFailure, VertexObject};
pub use paint::Color;
pub use triangulate::triangulate;

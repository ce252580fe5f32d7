//! Coordinate and geometry value types.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin bottom-left
//! - +X right, +Y up
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod point;
mod rect;
mod viewport;

pub use point::{distance, Point};
pub use rect::Rect;
pub use viewport::Viewport;

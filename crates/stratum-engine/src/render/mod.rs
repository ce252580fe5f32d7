//! GPU drawing.
//!
//! [`Renderer`] lowers [`Drawable`]s to vertex/index payloads, streams each
//! through its [`DynamicBuffer`](crate::buffer::DynamicBuffer) and issues one
//! indexed draw per drawable, in submission order.
//!
//! Convention:
//! - CPU geometry is in logical pixels (bottom-left origin, +Y up).
//! - Vertex shaders convert to NDC using the viewport in the draw uniform.

mod ctx;
mod draw;
mod error;
mod pipeline;
mod renderer;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use draw::{
    CircleDraw, DrawGeometry, DrawKind, Drawable, LineDraw, PolygonDraw, TextureDraw, Topology,
};
pub use error::RenderError;
pub use renderer::{Renderer, RendererConfig};
pub use texture::TextureId;

use thiserror::Error;

use super::texture::TextureId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("texture size {width}x{height} is empty")]
    EmptyTexture { width: u32, height: u32 },

    #[error("expected {expected} bytes of RGBA8 pixel data, got {actual}")]
    TextureDataLength { expected: usize, actual: usize },

    #[error("unknown texture {0:?}")]
    UnknownTexture(TextureId),
}

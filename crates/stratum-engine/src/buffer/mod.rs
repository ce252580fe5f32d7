//! Growable vertex/index storage.
//!
//! [`DynamicBuffer`] owns two regions, one for flattened `f32` vertex
//! coordinates and one for `u32` indices. Each region grows by doubling when an
//! upload does not fit and is otherwise overwritten in place, so steady-state
//! frames never reallocate.
//!
//! Storage is created and written through a [`BufferBackend`]:
//! - [`WgpuBackend`] records writes on the frame's command encoder
//! - [`HostBackend`] keeps plain byte vectors (headless use, tests)

mod dynamic;
mod gpu;
mod host;

pub use dynamic::{grown_capacity, DynamicBuffer, UploadStats, DEFAULT_INITIAL_CAPACITY};
pub use gpu::WgpuBackend;
pub use host::{HostBackend, HostBuffer};

/// Size in bytes of one stored element (`f32` coordinate or `u32` index).
pub const ELEMENT_SIZE: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BufferKind {
    Vertex,
    Index,
}

impl BufferKind {
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            BufferKind::Vertex => "stratum vertex buffer",
            BufferKind::Index => "stratum index buffer",
        }
    }
}

/// Allocates and writes the storage behind a [`DynamicBuffer`].
///
/// Capacities are in elements of [`ELEMENT_SIZE`] bytes. `contents` never
/// exceeds the capacity it is written to.
pub trait BufferBackend {
    type Buffer;

    /// Allocates storage for `capacity` elements and writes `contents` at offset 0.
    fn create(&mut self, kind: BufferKind, capacity: usize, contents: &[u8]) -> Self::Buffer;

    /// Overwrites the start of `buffer` with `contents`.
    fn write(&mut self, buffer: &mut Self::Buffer, contents: &[u8]);
}

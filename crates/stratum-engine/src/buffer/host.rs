use std::ops::Range;

use super::{BufferBackend, BufferKind, ELEMENT_SIZE};

/// CPU-side storage for one region.
#[derive(Debug, Clone, PartialEq)]
pub struct HostBuffer {
    kind: BufferKind,
    bytes: Vec<u8>,
}

impl HostBuffer {
    #[inline]
    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Capacity in elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len() / ELEMENT_SIZE
    }

    /// Reads elements `range` as `f32`.
    pub fn f32s(&self, range: Range<usize>) -> Vec<f32> {
        self.elements(range)
    }

    /// Reads elements `range` as `u32`.
    pub fn u32s(&self, range: Range<usize>) -> Vec<u32> {
        self.elements(range)
    }

    fn elements<T: bytemuck::Pod>(&self, range: Range<usize>) -> Vec<T> {
        self.bytes[range.start * ELEMENT_SIZE..range.end * ELEMENT_SIZE]
            .chunks_exact(ELEMENT_SIZE)
            .map(bytemuck::pod_read_unaligned)
            .collect()
    }
}

/// Backend storing regions in plain byte vectors.
#[derive(Debug, Default)]
pub struct HostBackend {
    allocations: usize,
    writes: usize,
}

impl HostBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers created so far, growth included.
    #[inline]
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    /// In-place writes so far.
    #[inline]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BufferBackend for HostBackend {
    type Buffer = HostBuffer;

    fn create(&mut self, kind: BufferKind, capacity: usize, contents: &[u8]) -> HostBuffer {
        self.allocations += 1;

        let mut bytes = vec![0u8; capacity.saturating_mul(ELEMENT_SIZE)];
        bytes[..contents.len()].copy_from_slice(contents);
        HostBuffer { kind, bytes }
    }

    fn write(&mut self, buffer: &mut HostBuffer, contents: &[u8]) {
        self.writes += 1;
        buffer.bytes[..contents.len()].copy_from_slice(contents);
    }
}

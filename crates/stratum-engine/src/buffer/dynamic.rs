use super::{BufferBackend, BufferKind, ELEMENT_SIZE};

/// Element capacity each region starts with unless configured otherwise.
pub const DEFAULT_INITIAL_CAPACITY: usize = 128;

/// Smallest capacity reached from `current` by repeated doubling that holds `required`.
///
/// Saturates at `usize::MAX` instead of wrapping.
pub fn grown_capacity(current: usize, required: usize) -> usize {
    let mut cap = current.max(1);
    while cap < required {
        cap = cap.saturating_mul(2);
    }
    cap
}

/// Which regions had to be reallocated by an upload.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct UploadStats {
    pub vertex_grew: bool,
    pub index_grew: bool,
}

impl UploadStats {
    #[inline]
    pub fn reallocated(self) -> bool {
        self.vertex_grew || self.index_grew
    }
}

#[derive(Debug)]
struct Region<T> {
    kind: BufferKind,
    buffer: T,
    capacity: usize,
    len: usize,
}

impl<T> Region<T> {
    fn new<B: BufferBackend<Buffer = T>>(backend: &mut B, kind: BufferKind, capacity: usize) -> Self {
        Self {
            kind,
            buffer: backend.create(kind, capacity, &[]),
            capacity,
            len: 0,
        }
    }

    /// Returns true when the backing storage was replaced.
    fn upload<B: BufferBackend<Buffer = T>>(&mut self, backend: &mut B, bytes: &[u8]) -> bool {
        let elements = bytes.len() / ELEMENT_SIZE;
        let grew = elements > self.capacity;

        if grew {
            let capacity = grown_capacity(self.capacity, elements);
            log::debug!(
                "DynamicBuffer: growing {:?} region {} -> {} elements (payload {})",
                self.kind,
                self.capacity,
                capacity,
                elements
            );
            self.buffer = backend.create(self.kind, capacity, bytes);
            self.capacity = capacity;
        } else {
            backend.write(&mut self.buffer, bytes);
        }

        self.len = elements;
        grew
    }
}

/// Vertex and index storage that grows on demand and never shrinks.
///
/// `T` is the backend's buffer handle (`wgpu::Buffer` for rendering,
/// [`HostBuffer`](super::HostBuffer) for headless use). One
/// [`upload`](Self::upload) feeds exactly one draw: afterwards
/// [`element_count`](Self::element_count) is the number of indices to draw.
/// Storage past the last upload's length holds stale data.
#[derive(Debug)]
pub struct DynamicBuffer<T> {
    vertex: Region<T>,
    index: Region<T>,
    element_count: u32,
    reallocations: u64,
}

impl<T> DynamicBuffer<T> {
    /// Allocates both regions eagerly at `initial_capacity` elements (at least 1).
    pub fn new<B: BufferBackend<Buffer = T>>(backend: &mut B, initial_capacity: usize) -> Self {
        let capacity = initial_capacity.max(1);
        Self {
            vertex: Region::new(backend, BufferKind::Vertex, capacity),
            index: Region::new(backend, BufferKind::Index, capacity),
            element_count: 0,
            reallocations: 0,
        }
    }

    /// Copies one draw's payload into the regions, growing either as needed.
    pub fn upload<B: BufferBackend<Buffer = T>>(
        &mut self,
        backend: &mut B,
        vertices: &[f32],
        indices: &[u32],
    ) -> UploadStats {
        let stats = UploadStats {
            vertex_grew: self.vertex.upload(backend, bytemuck::cast_slice(vertices)),
            index_grew: self.index.upload(backend, bytemuck::cast_slice(indices)),
        };

        self.reallocations += u64::from(stats.vertex_grew) + u64::from(stats.index_grew);
        self.element_count = u32::try_from(indices.len()).unwrap_or(u32::MAX);
        stats
    }

    /// Indices to draw after the last upload.
    #[inline]
    pub fn element_count(&self) -> u32 {
        self.element_count
    }

    #[inline]
    pub fn vertex_buffer(&self) -> &T {
        &self.vertex.buffer
    }

    #[inline]
    pub fn index_buffer(&self) -> &T {
        &self.index.buffer
    }

    #[inline]
    pub fn vertex_capacity(&self) -> usize {
        self.vertex.capacity
    }

    #[inline]
    pub fn index_capacity(&self) -> usize {
        self.index.capacity
    }

    /// Coordinates (not points) written by the last upload.
    #[inline]
    pub fn vertex_len(&self) -> usize {
        self.vertex.len
    }

    #[inline]
    pub fn index_len(&self) -> usize {
        self.index.len
    }

    /// Growth events since creation, counting each region separately.
    #[inline]
    pub fn reallocations(&self) -> u64 {
        self.reallocations
    }
}

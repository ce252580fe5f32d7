use wgpu::util::DeviceExt;

use super::{BufferBackend, BufferKind, ELEMENT_SIZE};

/// Backend creating `wgpu::Buffer`s.
///
/// Writes go through a staging buffer copied on `encoder` rather than
/// `Queue::write_buffer`: queue writes all land before the encoder's commands,
/// so several upload/draw pairs recorded on one encoder would otherwise all
/// read the last payload.
pub struct WgpuBackend<'a> {
    device: &'a wgpu::Device,
    encoder: &'a mut wgpu::CommandEncoder,
}

impl<'a> WgpuBackend<'a> {
    #[inline]
    pub fn new(device: &'a wgpu::Device, encoder: &'a mut wgpu::CommandEncoder) -> Self {
        Self { device, encoder }
    }
}

impl BufferBackend for WgpuBackend<'_> {
    type Buffer = wgpu::Buffer;

    fn create(&mut self, kind: BufferKind, capacity: usize, contents: &[u8]) -> wgpu::Buffer {
        let usage = match kind {
            BufferKind::Vertex => wgpu::BufferUsages::VERTEX,
            BufferKind::Index => wgpu::BufferUsages::INDEX,
        };

        let mut buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(kind.label()),
            size: capacity.saturating_mul(ELEMENT_SIZE) as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        self.write(&mut buffer, contents);
        buffer
    }

    fn write(&mut self, buffer: &mut wgpu::Buffer, contents: &[u8]) {
        if contents.is_empty() {
            return;
        }

        let staging = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stratum staging buffer"),
            contents,
            usage: wgpu::BufferUsages::COPY_SRC,
        });

        self.encoder
            .copy_buffer_to_buffer(&staging, 0, buffer, 0, contents.len() as u64);
    }
}

use super::error::RenderError;

/// Handle to a texture owned by a [`Renderer`](super::Renderer).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Checks that `len` bytes hold exactly `width × height` RGBA8 texels.
pub(super) fn validate_rgba8(width: u32, height: u32, len: usize) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyTexture { width, height });
    }

    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4);
    if len != expected {
        return Err(RenderError::TextureDataLength { expected, actual: len });
    }
    Ok(())
}

pub(super) struct GpuTexture {
    // Kept alive for the bind group's view.
    _texture: wgpu::Texture,
    pub(super) bind_group: wgpu::BindGroup,
    pub(super) size: (u32, u32),
}

impl GpuTexture {
    /// Creates an sRGB texture, uploads `rgba` (rows top first) and binds it with `sampler`.
    pub(super) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Self {
        let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("stratum texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("stratum texture bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        Self { _texture: texture, bind_group, size: (width, height) }
    }
}

/// Textures indexed by [`TextureId`]. Ids are never reused.
#[derive(Default)]
pub(super) struct TextureRegistry {
    entries: Vec<GpuTexture>,
}

impl TextureRegistry {
    pub(super) fn insert(&mut self, texture: GpuTexture) -> TextureId {
        let id = TextureId(self.entries.len() as u32);
        self.entries.push(texture);
        id
    }

    #[inline]
    pub(super) fn get(&self, id: TextureId) -> Option<&GpuTexture> {
        self.entries.get(id.0 as usize)
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

use wgpu::util::DeviceExt;

use crate::buffer::{DynamicBuffer, WgpuBackend, DEFAULT_INITIAL_CAPACITY};

use super::draw::{DrawKind, Drawable};
use super::error::RenderError;
use super::pipeline::{
    build_pipelines, floats_per_vertex, linear_sampler, texture_layout, uniform_layout,
    DrawUniform,
};
use super::texture::{validate_rgba8, GpuTexture, TextureId, TextureRegistry};
use super::{RenderCtx, RenderTarget};

#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Starting capacity, in elements, of both dynamic buffer regions (minimum 1).
    pub initial_buffer_capacity: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self { initial_buffer_capacity: DEFAULT_INITIAL_CAPACITY }
    }
}

type DrawFn = fn(&mut Renderer, &RenderCtx<'_>, &mut RenderTarget<'_>, &Drawable);

/// Per-kind draw routines, indexed by [`DrawKind::index`].
const DISPATCH: [DrawFn; DrawKind::COUNT] = [
    Renderer::draw_texture,
    Renderer::draw_polygon,
    Renderer::draw_circle,
    Renderer::draw_lines,
];

/// Draws [`Drawable`]s, one upload and one draw call each.
///
/// Owns a pipeline per draw kind, the per-draw uniform, the texture registry
/// and a single [`DynamicBuffer`] that every drawable is streamed through.
/// GPU objects are created lazily on first use; pipelines are rebuilt when the
/// surface format changes.
pub struct Renderer {
    config: RendererConfig,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: Option<[wgpu::RenderPipeline; DrawKind::COUNT]>,

    uniform_bgl: Option<wgpu::BindGroupLayout>,
    texture_bgl: Option<wgpu::BindGroupLayout>,
    sampler: Option<wgpu::Sampler>,

    uniform_ubo: Option<wgpu::Buffer>,
    uniform_bind_group: Option<wgpu::BindGroup>,

    textures: TextureRegistry,
    buffer: Option<DynamicBuffer<wgpu::Buffer>>,

    draw_calls: u64,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            pipeline_format: None,
            pipelines: None,
            uniform_bgl: None,
            texture_bgl: None,
            sampler: None,
            uniform_ubo: None,
            uniform_bind_group: None,
            textures: TextureRegistry::default(),
            buffer: None,
            draw_calls: 0,
        }
    }

    /// Draws `drawables` in order on top of what `target` already holds.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        drawables: &[Drawable],
    ) {
        for drawable in drawables {
            self.draw(ctx, target, drawable);
        }
    }

    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, drawable: &Drawable) {
        self.ensure_layouts(ctx);
        self.ensure_pipelines(ctx);
        self.ensure_bindings(ctx);
        self.ensure_buffer(ctx, target);

        DISPATCH[drawable.kind().index()](self, ctx, target, drawable);
    }

    /// Uploads `rgba` (`width × height` RGBA8 texels, rows top first) as a new texture.
    pub fn create_texture(
        &mut self,
        ctx: &RenderCtx<'_>,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> Result<TextureId, RenderError> {
        validate_rgba8(width, height, rgba.len())?;

        let layout = &*self.texture_bgl.get_or_insert_with(|| texture_layout(ctx.device));
        let sampler = &*self.sampler.get_or_insert_with(|| linear_sampler(ctx.device));

        let texture = GpuTexture::new(ctx.device, ctx.queue, layout, sampler, width, height, rgba);
        let id = self.textures.insert(texture);
        log::debug!("Renderer: created texture {id:?} ({width}x{height})");
        Ok(id)
    }

    /// Pixel size of a texture created by this renderer.
    pub fn texture_size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures.get(id).map(|t| t.size)
    }

    #[inline]
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Buffer shared by all drawables; `None` before the first draw.
    #[inline]
    pub fn buffer(&self) -> Option<&DynamicBuffer<wgpu::Buffer>> {
        self.buffer.as_ref()
    }

    /// Draw calls issued since creation.
    #[inline]
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    // ── per-kind routines ─────────────────────────────────────────────────

    fn draw_texture(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, drawable: &Drawable) {
        let Drawable::Texture(t) = drawable else { return };
        if self.textures.get(t.texture).is_none() {
            log::warn!("Renderer: {}", RenderError::UnknownTexture(t.texture));
            return;
        }
        self.submit(ctx, target, drawable, Some(t.texture));
    }

    fn draw_polygon(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, drawable: &Drawable) {
        self.submit(ctx, target, drawable, None);
    }

    fn draw_circle(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, drawable: &Drawable) {
        self.submit(ctx, target, drawable, None);
    }

    fn draw_lines(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, drawable: &Drawable) {
        self.submit(ctx, target, drawable, None);
    }

    /// Uploads the drawable's payload and uniform, then records one indexed draw.
    fn submit(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        drawable: &Drawable,
        texture: Option<TextureId>,
    ) {
        let kind = drawable.kind();
        let geometry = match drawable.geometry() {
            Ok(g) => g,
            Err(e) => {
                log::warn!("Renderer: skipping {kind:?} drawable: {e}");
                return;
            }
        };
        if geometry.is_empty() {
            return;
        }
        debug_assert_eq!(geometry.floats_per_vertex, floats_per_vertex(kind));

        let uniform = DrawUniform::new(ctx.viewport, drawable.color(), drawable.shape_params());

        // Copies are recorded on the encoder so they land between this draw and the previous one.
        {
            let (Some(ubo), Some(buffer)) = (self.uniform_ubo.as_ref(), self.buffer.as_mut()) else {
                return;
            };

            let staging = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("stratum uniform staging"),
                contents: bytemuck::bytes_of(&uniform),
                usage: wgpu::BufferUsages::COPY_SRC,
            });
            target.encoder.copy_buffer_to_buffer(&staging, 0, ubo, 0, DrawUniform::SIZE);

            let mut backend = WgpuBackend::new(ctx.device, target.encoder);
            buffer.upload(&mut backend, &geometry.vertices, &geometry.indices);
        }

        let Some(pipelines) = self.pipelines.as_ref() else { return };
        let Some(bind_group) = self.uniform_bind_group.as_ref() else { return };
        let Some(buffer) = self.buffer.as_ref() else { return };
        let texture_group = texture.and_then(|id| self.textures.get(id)).map(|t| &t.bind_group);

        let mut rpass = target.load_pass("stratum draw pass");
        rpass.set_pipeline(&pipelines[kind.index()]);
        rpass.set_bind_group(0, bind_group, &[]);
        if let Some(group) = texture_group {
            rpass.set_bind_group(1, group, &[]);
        }
        rpass.set_vertex_buffer(0, buffer.vertex_buffer().slice(..));
        rpass.set_index_buffer(buffer.index_buffer().slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..buffer.element_count(), 0, 0..1);

        self.draw_calls += 1;
    }

    // ── lazy-init helpers ─────────────────────────────────────────────────

    fn ensure_layouts(&mut self, ctx: &RenderCtx<'_>) {
        self.uniform_bgl.get_or_insert_with(|| uniform_layout(ctx.device));
        self.texture_bgl.get_or_insert_with(|| texture_layout(ctx.device));
        self.sampler.get_or_insert_with(|| linear_sampler(ctx.device));
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipelines.is_some() {
            return;
        }
        let (Some(uniform_bgl), Some(texture_bgl)) = (self.uniform_bgl.as_ref(), self.texture_bgl.as_ref())
        else {
            return;
        };

        self.pipelines = Some(build_pipelines(ctx, uniform_bgl, texture_bgl));
        self.pipeline_format = Some(ctx.surface_format);
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.uniform_bind_group.is_some() && self.uniform_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.uniform_bgl.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("stratum draw ubo"),
            size: DrawUniform::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("stratum draw bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.uniform_ubo = Some(ubo);
        self.uniform_bind_group = Some(bind_group);
    }

    fn ensure_buffer(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        if self.buffer.is_some() {
            return;
        }

        let mut backend = WgpuBackend::new(ctx.device, target.encoder);
        self.buffer = Some(DynamicBuffer::new(&mut backend, self.config.initial_buffer_capacity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_buffer_default() {
        assert_eq!(RendererConfig::default().initial_buffer_capacity, 128);
    }

    #[test]
    fn new_renderer_owns_nothing_yet() {
        let r = Renderer::default();
        assert!(r.buffer().is_none());
        assert_eq!(r.texture_count(), 0);
        assert_eq!(r.draw_calls(), 0);
        assert_eq!(r.texture_size(TextureId(0)), None);
    }
}

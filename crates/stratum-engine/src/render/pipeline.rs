//! Pipeline and binding construction shared by every draw kind.

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;
use crate::paint::Color;

use super::draw::{DrawKind, Topology};
use super::RenderCtx;

// ── uniform ───────────────────────────────────────────────────────────────

/// Per-draw uniform, bound at group 0 by every pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct DrawUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
    pub color: [f32; 4],
    /// Circle `(cx, cy, r, 0)`.
    pub shape: [f32; 4],
}

impl DrawUniform {
    pub const SIZE: u64 = std::mem::size_of::<DrawUniform>() as u64;

    pub fn new(viewport: Viewport, color: Color, shape: [f32; 4]) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
            color: color.to_array(),
            shape,
        }
    }
}

// ── vertex layout ─────────────────────────────────────────────────────────

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const TEXTURED_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

/// Floats per vertex in the buffer each draw kind reads.
pub(super) fn floats_per_vertex(kind: DrawKind) -> usize {
    match kind {
        DrawKind::Texture => 4,
        _ => 2,
    }
}

/// `x, y` pairs, followed by `u, v` for the texture pipeline.
fn vertex_layout(kind: DrawKind) -> wgpu::VertexBufferLayout<'static> {
    let attributes: &'static [wgpu::VertexAttribute] = match kind {
        DrawKind::Texture => &TEXTURED_ATTRS,
        _ => &POSITION_ATTRS,
    };
    wgpu::VertexBufferLayout {
        array_stride: (floats_per_vertex(kind) * std::mem::size_of::<f32>()) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

// ── layouts ───────────────────────────────────────────────────────────────

pub(super) fn uniform_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("stratum draw uniform bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(DrawUniform::SIZE),
            },
            count: None,
        }],
    })
}

pub(super) fn texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("stratum texture bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

pub(super) fn linear_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("stratum texture sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

// ── pipelines ─────────────────────────────────────────────────────────────

/// Shader source and topology used for each draw kind.
fn pipeline_desc(kind: DrawKind) -> (&'static str, &'static str, Topology) {
    match kind {
        DrawKind::Texture => ("texture", include_str!("shaders/texture.wgsl"), Topology::TriangleList),
        DrawKind::Polygon => ("fill", include_str!("shaders/polygon.wgsl"), Topology::TriangleList),
        DrawKind::Circle => ("circle", include_str!("shaders/circle.wgsl"), Topology::TriangleList),
        DrawKind::Lines => ("lines", include_str!("shaders/polygon.wgsl"), Topology::LineStrip),
    }
}

/// Builds one pipeline per draw kind, ordered by [`DrawKind::index`].
pub(super) fn build_pipelines(
    ctx: &RenderCtx<'_>,
    uniform_bgl: &wgpu::BindGroupLayout,
    texture_bgl: &wgpu::BindGroupLayout,
) -> [wgpu::RenderPipeline; DrawKind::COUNT] {
    let groups = [uniform_bgl, texture_bgl];
    DrawKind::ALL.map(|kind| {
        let used = match kind {
            DrawKind::Texture => &groups[..],
            _ => &groups[..1],
        };
        build_pipeline(ctx, kind, used)
    })
}

fn build_pipeline(
    ctx: &RenderCtx<'_>,
    kind: DrawKind,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let (name, source, topology) = pipeline_desc(kind);
    log::debug!("Renderer: building {name} pipeline for {:?}", ctx.surface_format);

    let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(name),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(name),
        bind_group_layouts,
        immediate_size: 0,
    });

    let strip_index_format = match topology {
        Topology::LineStrip => Some(wgpu::IndexFormat::Uint32),
        Topology::TriangleList => None,
    };

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(name),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[vertex_layout(kind)],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                // Colors are straight alpha.
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: topology.to_wgpu(),
            strip_index_format,
            front_face: wgpu::FrontFace::Ccw,
            // Triangulated outlines are clockwise, quads mixed.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_three_vec4s() {
        assert_eq!(DrawUniform::SIZE, 48);
    }

    #[test]
    fn uniform_clamps_viewport() {
        let u = DrawUniform::new(Viewport::new(0.0, 300.0), Color::black(), [0.0; 4]);
        assert_eq!(u.viewport, [1.0, 300.0]);
        assert_eq!(u.color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn texture_layout_carries_uvs() {
        assert_eq!(vertex_layout(DrawKind::Texture).array_stride, 16);
        assert_eq!(vertex_layout(DrawKind::Texture).attributes.len(), 2);
        assert_eq!(vertex_layout(DrawKind::Circle).array_stride, 8);
    }

    #[test]
    fn line_kind_uses_strip_topology() {
        assert_eq!(pipeline_desc(DrawKind::Lines).2, Topology::LineStrip);
        assert_eq!(pipeline_desc(DrawKind::Polygon).2, Topology::TriangleList);
    }
}

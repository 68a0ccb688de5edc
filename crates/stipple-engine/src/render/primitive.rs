use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Vec2};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::common::{premul_alpha_blend, viewport_ubo_min_binding_size, ViewportUniform};
use super::{GraphicsContext, Primitive};

/// Vertices per expanded point sprite (two triangles).
const VERTICES_PER_POINT: usize = 6;

/// Smallest vertex buffer allocated, in vertices.
const MIN_VERTEX_CAPACITY: usize = 256;

/// wgpu-backed [`GraphicsContext`].
///
/// Usage per frame:
/// 1. issue primitives (`clear`, `set_color`, `draw`, ...) through the trait
/// 2. call [`flush`](Self::flush) with the frame's render context and target
///
/// All primitives are batched into one triangle list in submission order, so
/// a single draw call preserves last-writer-wins paint order. Points are
/// expanded into squares whose corners are offset in pixels by the shader.
///
/// GPU resources are created lazily and reused across frames; the pipeline
/// is rebuilt only if the surface format changes.
#[derive(Default)]
pub struct PrimitiveRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,

    // Recorded frame state.
    vertices: Vec<PrimitiveVertex>,
    clear: Option<Color>,
    color: [f32; 4],
    point_size: f32,

    warned_partial_triangle: bool,
}

impl PrimitiveRenderer {
    pub fn new() -> Self {
        Self {
            color: Color::from(ColorRgba::black()).to_array(),
            point_size: 1.0,
            ..Self::default()
        }
    }

    /// True if anything was recorded since the last flush.
    ///
    /// A full redraw always records a clear, so this is how a host tells
    /// whether the current frame still needs one.
    #[inline]
    pub fn has_pending_pass(&self) -> bool {
        self.clear.is_some() || !self.vertices.is_empty()
    }

    /// Encodes everything recorded since the last flush into `target`.
    ///
    /// Always begins exactly one render pass: it clears if a clear was
    /// recorded and loads the previous contents otherwise. Recorded state is
    /// reset afterwards.
    pub fn flush(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        let load = match self.clear.take() {
            Some(c) => wgpu::LoadOp::Clear(c.to_wgpu()),
            None => wgpu::LoadOp::Load,
        };

        let vertex_count = self.vertices.len();
        if vertex_count > 0 {
            self.write_viewport_uniform(ctx);
            self.ensure_vertex_capacity(ctx, vertex_count);
            if let Some(vbo) = self.vertex_vbo.as_ref() {
                ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));
            }
        }
        self.vertices.clear();

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("stipple primitive pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if vertex_count == 0 {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vertex_vbo.as_ref() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..vertex_count as u32, 0..1);
    }

    // ── recording ─────────────────────────────────────────────────────────

    fn push_point(&mut self, center: Vec2) {
        let h = self.point_size.max(0.0) * 0.5;
        let corners = [[-h, -h], [h, -h], [h, h], [-h, -h], [h, h], [-h, h]];
        debug_assert_eq!(corners.len(), VERTICES_PER_POINT);
        for offset_px in corners {
            self.vertices.push(PrimitiveVertex {
                ndc: [center.x, center.y],
                offset_px,
                color: self.color,
            });
        }
    }

    fn push_triangles(&mut self, vertices: &[Vec2]) {
        let chunks = vertices.chunks_exact(3);
        if !chunks.remainder().is_empty() && !self.warned_partial_triangle {
            log::debug!(
                "PrimitiveRenderer: ignoring {} trailing vertices of a partial triangle",
                chunks.remainder().len()
            );
            self.warned_partial_triangle = true;
        }
        for tri in chunks {
            for v in tri {
                self.vertices.push(PrimitiveVertex {
                    ndc: [v.x, v.y],
                    offset_px: [0.0, 0.0],
                    color: self.color,
                });
            }
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        log::debug!("building primitive pipeline for {:?}", ctx.surface_format);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("stipple primitive shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/primitive.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("stipple primitive bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: viewport_ubo_min_binding_size(),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("stipple primitive pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("stipple primitive pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[PrimitiveVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Point sprites and wedges are not consistently wound.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("stipple primitive viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("stipple primitive bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        ctx.queue.write_buffer(
            ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform {
                viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
                _pad: [0.0; 2],
            }),
        );
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vertex_capacity && self.vertex_vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(MIN_VERTEX_CAPACITY);
        log::debug!("growing primitive vertex buffer to {new_cap} vertices");
        self.vertex_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("stipple primitive vbo"),
            size: (new_cap * std::mem::size_of::<PrimitiveVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

impl GraphicsContext for PrimitiveRenderer {
    fn clear(&mut self, color: ColorRgba) {
        // Anything recorded before the clear would be painted over anyway.
        self.vertices.clear();
        self.clear = Some(Color::from(color));
    }

    fn set_point_size(&mut self, size: f32) {
        self.point_size = size;
    }

    fn set_color(&mut self, color: ColorRgba) {
        self.color = Color::from(color).to_array();
    }

    fn draw(&mut self, primitive: Primitive, vertices: &[Vec2]) {
        match primitive {
            Primitive::Points => {
                for &v in vertices {
                    self.push_point(v);
                }
            }
            Primitive::Triangles => self.push_triangles(vertices),
        }
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Vertex layout (32 bytes):
///
///  offset  0  ndc        [f32; 2]   loc 0
///  offset  8  offset_px  [f32; 2]   loc 1  (physical px, +Y up)
///  offset 16  color      [f32; 4]   loc 2  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct PrimitiveVertex {
    ndc: [f32; 2],
    offset_px: [f32; 2],
    color: [f32; 4],
}

impl PrimitiveVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // ndc
        1 => Float32x2, // offset_px
        2 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PrimitiveVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_32_bytes() {
        assert_eq!(std::mem::size_of::<PrimitiveVertex>(), 32);
    }

    #[test]
    fn point_expands_to_two_triangles_of_point_size() {
        let mut r = PrimitiveRenderer::new();
        r.set_point_size(10.0);
        r.set_color(ColorRgba::red());
        r.draw(Primitive::Points, &[Vec2::new(0.5, -0.5)]);

        assert_eq!(r.vertices.len(), VERTICES_PER_POINT);
        for v in &r.vertices {
            assert_eq!(v.ndc, [0.5, -0.5]);
            assert_eq!(v.offset_px[0].abs(), 5.0);
            assert_eq!(v.offset_px[1].abs(), 5.0);
            assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn triangles_keep_vertices_and_drop_partials() {
        let mut r = PrimitiveRenderer::new();
        let v = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)];
        r.draw(Primitive::Triangles, &v);

        assert_eq!(r.vertices.len(), 3);
        assert!(r.vertices.iter().all(|pv| pv.offset_px == [0.0, 0.0]));
    }

    #[test]
    fn colors_are_premultiplied() {
        let mut r = PrimitiveRenderer::new();
        r.set_color(ColorRgba::new(1.0, 1.0, 1.0, 0.5));
        r.draw(Primitive::Triangles, &[Vec2::zero(); 3]);
        assert_eq!(r.vertices[0].color, [0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn clear_drops_pending_geometry() {
        let mut r = PrimitiveRenderer::new();
        r.draw(Primitive::Points, &[Vec2::zero()]);
        r.clear(ColorRgba::black());
        assert_eq!(r.vertices.len(), 0);
        assert_eq!(r.clear, Some(Color::from(ColorRgba::black())));
    }

    #[test]
    fn pending_pass_tracks_recorded_work() {
        let mut r = PrimitiveRenderer::new();
        assert!(!r.has_pending_pass());

        r.set_color(ColorRgba::red());
        assert!(!r.has_pending_pass());

        r.clear(ColorRgba::black());
        assert!(r.has_pending_pass());
    }

    #[test]
    fn submission_order_is_vertex_order() {
        let mut r = PrimitiveRenderer::new();
        r.set_color(ColorRgba::red());
        r.draw(Primitive::Triangles, &[Vec2::zero(); 3]);
        r.set_color(ColorRgba::green());
        r.draw(Primitive::Points, &[Vec2::zero()]);

        assert_eq!(r.vertices[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(r.vertices[3].color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(r.vertices.len(), 3 + VERTICES_PER_POINT);
    }
}

use glam::Mat4;
use std::num::NonZeroU64;

use super::batch::InstanceBatches;
use super::pipeline::{InstanceBuffer, MeshBuffers};
use crate::geometry::GeometryKind;
use crate::types::{InstanceRaw, Vertex, SHADOW_FACES};

pub const SHADOW_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const FACE_UNIFORM_SIZE: u64 = std::mem::size_of::<[[f32; 4]; 4]>() as u64;

/// Depth array with six layers per shadow-casting light
pub struct ShadowMaps {
    pub array_view: wgpu::TextureView,
    layer_views: Vec<wgpu::TextureView>,
    size: u32,
    slots: usize,
}

impl ShadowMaps {
    pub fn new(device: &wgpu::Device, size: u32, slots: usize) -> Self {
        let size = size.max(1);
        let slots = slots.max(1);
        let layers = (slots * SHADOW_FACES) as u32;

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Shadow Maps"),
            size: wgpu::Extent3d {
                width: size,
                height: size,
                depth_or_array_layers: layers,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: SHADOW_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let array_view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Shadow Map Array"),
            dimension: Some(wgpu::TextureViewDimension::D2Array),
            ..Default::default()
        });
        let layer_views = (0..layers)
            .map(|layer| {
                texture.create_view(&wgpu::TextureViewDescriptor {
                    label: Some("Shadow Map Layer"),
                    dimension: Some(wgpu::TextureViewDimension::D2),
                    base_array_layer: layer,
                    array_layer_count: Some(1),
                    ..Default::default()
                })
            })
            .collect();

        Self {
            array_view,
            layer_views,
            size,
            slots,
        }
    }

    /// True when `slots` lights at `size` fit without reallocating
    pub fn fits(&self, size: u32, slots: usize) -> bool {
        self.size == size.max(1) && self.slots >= slots
    }
}

/// Depth-only pass rendering every shadow caster into each light's cube faces
pub struct ShadowPass {
    pipeline: wgpu::RenderPipeline,
    face_buffer: wgpu::Buffer,
    face_bind_group: wgpu::BindGroup,
    face_stride: u64,
    pub maps: ShadowMaps,
    pub sampler: wgpu::Sampler,
    layers: usize,
}

impl ShadowPass {
    pub fn new(device: &wgpu::Device, max_layers: usize) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shadow Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shadow.wgsl").into()),
        });

        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let face_stride = FACE_UNIFORM_SIZE.div_ceil(alignment) * alignment;

        let face_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shadow Face Buffer"),
            size: face_stride * max_layers.max(1) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(FACE_UNIFORM_SIZE),
                },
                count: None,
            }],
            label: Some("shadow_face_bind_group_layout"),
        });

        let face_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &face_buffer,
                    offset: 0,
                    size: NonZeroU64::new(FACE_UNIFORM_SIZE),
                }),
            }],
            label: Some("shadow_face_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shadow Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shadow Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout(), InstanceRaw::layout()],
                compilation_options: Default::default(),
            },
            fragment: None,
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: SHADOW_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState {
                    constant: 2,
                    slope_scale: 2.0,
                    clamp: 0.0,
                },
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Shadow Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });

        Self {
            pipeline,
            face_buffer,
            face_bind_group,
            face_stride,
            maps: ShadowMaps::new(device, 1, 0),
            sampler,
            layers: 0,
        }
    }

    /// Upload this frame's face matrices, growing the maps if needed.
    ///
    /// Returns true when the map texture was recreated and any bind group
    /// holding `maps.array_view` must be rebuilt.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        faces: &[Mat4],
        size: u32,
    ) -> bool {
        let size = size.min(device.limits().max_texture_dimension_2d);
        let slots = faces.len() / SHADOW_FACES;
        self.layers = slots * SHADOW_FACES;

        let recreated = !self.maps.fits(size, slots);
        if recreated {
            self.maps = ShadowMaps::new(device, size, slots);
            log::debug!("Shadow maps: {} lights at {}x{}", slots, size, size);
        }

        if !faces.is_empty() {
            let stride = self.face_stride as usize;
            let mut staging = vec![0u8; stride * faces.len()];
            for (i, face) in faces.iter().enumerate() {
                let cols = face.to_cols_array();
                let bytes: &[u8] = bytemuck::cast_slice(&cols);
                staging[i * stride..i * stride + bytes.len()].copy_from_slice(bytes);
            }
            queue.write_buffer(&self.face_buffer, 0, &staging);
        }

        recreated
    }

    /// Render casters into every prepared layer
    pub fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        batches: &InstanceBatches,
        meshes: &[MeshBuffers],
        instances: &InstanceBuffer,
    ) {
        for layer in 0..self.layers {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shadow Pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.maps.layer_views[layer],
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            pass.set_pipeline(&self.pipeline);
            let offset = (layer as u64 * self.face_stride) as u32;
            pass.set_bind_group(0, &self.face_bind_group, &[offset]);

            for (kind, mesh) in GeometryKind::ALL.iter().zip(meshes) {
                let range = batches.caster_range(*kind);
                if range.is_empty() {
                    continue;
                }
                let count = range.end - range.start;
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, instances.slice(range));
                pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..mesh.index_count, 0, 0..count);
            }
        }
    }
}

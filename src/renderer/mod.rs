//! wgpu renderer: point light shadow passes, the instanced mesh pass and the egui overlay.

mod batch;
mod gpu;
mod overlay;
mod pipeline;
mod shadow;

pub use batch::InstanceBatches;
pub use gpu::{Gpu, MSAA_SAMPLES};
pub use overlay::{Overlay, OverlayFrame};
pub use pipeline::{
    create_depth_view, create_msaa_view, InstanceBuffer, MeshBuffers, ScenePipeline, DEPTH_FORMAT,
};
pub use shadow::{ShadowMaps, ShadowPass, SHADOW_FORMAT};

use anyhow::{Context, Result};
use std::sync::Arc;
use winit::window::Window;

use crate::camera::Viewport;
use crate::geometry::{build_palette, Complexity, GeometryKind};
use crate::scene::{ShadowSetup, SimulationState};
use crate::traits::SceneRenderer;
use crate::types::{SceneUniform, ShadowUniform, SHADOW_LAYERS};
use crate::ui::{ControlChange, Hud};

pub struct MeshRenderer {
    window: Arc<Window>,
    gpu: Gpu,
    pipeline: ScenePipeline,
    shadows: ShadowPass,
    depth_view: wgpu::TextureView,
    msaa_view: Option<wgpu::TextureView>,
    meshes: Vec<MeshBuffers>,
    instances: InstanceBuffer,
    batches: InstanceBatches,
    overlay: Option<Overlay>,
}

impl MeshRenderer {
    /// Set up the device, pipeline and meshes; `show_ui` toggles the egui panel
    pub async fn new(window: Arc<Window>, complexity: Complexity, show_ui: bool) -> Result<Self> {
        let gpu = Gpu::new(window.clone()).await?;
        let [width, height] = gpu.size();

        let viewport = Viewport::new(width, height);

        let shadows = ShadowPass::new(&gpu.device, SHADOW_LAYERS);
        let pipeline = ScenePipeline::new(&gpu.device, gpu.format(), gpu.sample_count, &shadows);
        let depth_view = create_depth_view(&gpu.device, &viewport, gpu.sample_count);
        let msaa_view = create_msaa_view(&gpu.device, &viewport, gpu.format(), gpu.sample_count);
        let meshes = upload_meshes(&gpu.device, complexity);
        let instances = InstanceBuffer::new(&gpu.device, 0);
        let overlay = show_ui.then(|| Overlay::new(&window, &gpu.device, gpu.format()));

        log::info!(
            "Renderer ready: {}x{} {:?} x{} MSAA, {} complexity",
            width,
            height,
            gpu.format(),
            gpu.sample_count,
            complexity
        );

        Ok(Self {
            window,
            gpu,
            pipeline,
            shadows,
            depth_view,
            msaa_view,
            meshes,
            instances,
            batches: InstanceBatches::new(),
            overlay,
        })
    }

    /// Forward a window event to the overlay; returns true when it was consumed
    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        match self.overlay.as_mut() {
            Some(overlay) => overlay.handle_event(&self.window, event),
            None => false,
        }
    }

    fn write_uniforms(&mut self, state: &SimulationState) {
        let setup = ShadowSetup::new(&state.lights);

        let uniform = SceneUniform::new(
            state.camera.view_proj(),
            state.camera.position,
            state.ambient.to_linear(),
        )
        .with_lights(setup.lights.iter().copied());
        self.gpu.queue.write_buffer(
            &self.pipeline.uniform_buffer,
            0,
            bytemuck::cast_slice(&[uniform]),
        );

        if self
            .shadows
            .prepare(&self.gpu.device, &self.gpu.queue, &setup.faces, setup.map_size)
        {
            self.pipeline.rebind_shadows(&self.gpu.device, &self.shadows);
        }
        self.gpu.queue.write_buffer(
            &self.pipeline.shadow_buffer,
            0,
            bytemuck::cast_slice(&[ShadowUniform::new(&setup.faces)]),
        );
    }

    fn acquire(&self) -> Result<Option<wgpu::SurfaceTexture>> {
        match self.gpu.surface.get_current_texture() {
            Ok(frame) => Ok(Some(frame)),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.gpu.reconfigure();
                Ok(None)
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to acquire surface texture"),
        }
    }
}

impl SceneRenderer for MeshRenderer {
    fn resize(&mut self, viewport: &Viewport) {
        self.gpu.resize(viewport);
        let sample_count = self.gpu.sample_count;
        self.depth_view = create_depth_view(&self.gpu.device, viewport, sample_count);
        self.msaa_view =
            create_msaa_view(&self.gpu.device, viewport, self.gpu.format(), sample_count);
    }

    fn rebuild_geometry(&mut self, complexity: Complexity) {
        self.meshes = upload_meshes(&self.gpu.device, complexity);
        log::debug!("Meshes rebuilt at {} complexity", complexity);
    }

    fn draw(&mut self, state: &SimulationState, hud: &Hud) -> Result<Vec<ControlChange>> {
        self.write_uniforms(state);
        self.batches.fill(&state.objects);
        self.instances
            .write(&self.gpu.device, &self.gpu.queue, self.batches.instances());

        let Some(output) = self.acquire()? else {
            return Ok(Vec::new());
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        self.shadows
            .encode(&mut encoder, &self.batches, &self.meshes, &self.instances);

        // resolve into the swapchain image when multisampling
        let (target, resolve_target, store) = match &self.msaa_view {
            Some(msaa) => (msaa, Some(&view), wgpu::StoreOp::Discard),
            None => (&view, None, wgpu::StoreOp::Store),
        };

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(state.background.to_wgpu()),
                        store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline.pipeline);
            render_pass.set_bind_group(0, &self.pipeline.bind_group, &[]);

            for (kind, mesh) in GeometryKind::ALL.iter().zip(&self.meshes) {
                let range = self.batches.range(*kind);
                if range.is_empty() {
                    continue;
                }
                let count = range.end - range.start;
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_vertex_buffer(1, self.instances.slice(range));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..count);
            }
        }

        let (changes, command_buffers) = match self.overlay.as_mut() {
            Some(overlay) => {
                let frame = overlay.draw(
                    &self.window,
                    &self.gpu.device,
                    &self.gpu.queue,
                    &mut encoder,
                    &view,
                    self.gpu.size(),
                    hud,
                );
                (frame.changes, frame.command_buffers)
            }
            None => (Vec::new(), Vec::new()),
        };

        self.gpu
            .queue
            .submit(command_buffers.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        Ok(changes)
    }
}

fn upload_meshes(device: &wgpu::Device, complexity: Complexity) -> Vec<MeshBuffers> {
    build_palette(complexity)
        .iter()
        .map(|mesh| MeshBuffers::upload(device, mesh))
        .collect()
}

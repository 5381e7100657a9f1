use winit::window::Window;

use crate::geometry::Complexity;
use crate::ui::{format_count, ControlChange, Controls, Hud, MAX_LIGHTS, MAX_OBJECTS};

/// egui panel with the FPS readout, object counter and the three sliders
pub struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Output of one overlay pass
pub struct OverlayFrame {
    pub changes: Vec<ControlChange>,
    pub command_buffers: Vec<wgpu::CommandBuffer>,
}

impl Overlay {
    pub fn new(window: &Window, device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer =
            egui_wgpu::Renderer::new(device, format, egui_wgpu::RendererOptions::default());

        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Returns true when egui consumed the event
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Lay out and paint the panel on top of `view`
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        window: &Window,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
        hud: &Hud,
    ) -> OverlayFrame {
        let raw_input = self.state.take_egui_input(window);
        let mut edited = hud.controls;

        let full_output = self.ctx.run(raw_input, |ctx| {
            control_panel(ctx, hud, &mut edited);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let pixels_per_point = self.ctx.pixels_per_point();
        let tris = self.ctx.tessellate(full_output.shapes, pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point,
        };

        let command_buffers =
            self.renderer
                .update_buffers(device, queue, encoder, &tris, &screen_descriptor);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        OverlayFrame {
            changes: hud.controls.diff(&edited),
            command_buffers,
        }
    }
}

fn control_panel(ctx: &egui::Context, hud: &Hud, edited: &mut Controls) {
    egui::Window::new("Stress Test")
        .title_bar(true)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .default_width(260.0)
        .show(ctx, |ui| {
            let fps = hud
                .fps
                .map(|fps| format!("{} FPS", fps))
                .unwrap_or_else(|| "-- FPS".to_string());
            ui.label(
                egui::RichText::new(fps)
                    .size(24.0)
                    .color(egui::Color32::from_rgb(74, 158, 255)),
            );
            ui.label(
                egui::RichText::new(format!(
                    "{} objects, {} lights",
                    format_count(hud.object_count),
                    hud.light_count
                ))
                .color(egui::Color32::GRAY),
            );

            ui.separator();

            ui.add(
                egui::Slider::new(&mut edited.object_count, 0..=MAX_OBJECTS)
                    .text("Objects")
                    .step_by(100.0),
            );
            ui.add(egui::Slider::new(&mut edited.light_count, 0..=MAX_LIGHTS).text("Lights"));

            let mut level = edited.complexity.level();
            ui.add(
                egui::Slider::new(&mut level, Complexity::MIN..=Complexity::MAX)
                    .text("Complexity")
                    .custom_formatter(|value, _| {
                        Complexity::new(value as u8)
                            .map(|c| c.label().to_string())
                            .unwrap_or_default()
                    }),
            );
            if let Some(complexity) = Complexity::new(level) {
                edited.complexity = complexity;
            }
        });
}

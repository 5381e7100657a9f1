use anyhow::Result;
use std::time::Duration;

use super::fps::FrameRateSampler;
use super::updater::advance;
use crate::camera::{OrbitCamera, Viewport};
use crate::scene::SimulationState;
use crate::traits::{RandomSource, SceneRenderer};
use crate::ui::{ControlChange, Controls, Hud, Regeneration};

/// Owns the simulation and runs one update → draw → sample cycle per frame.
///
/// Slider changes returned by the renderer are applied after the draw, so a
/// regeneration never interleaves with a frame update.
pub struct Driver<R: RandomSource> {
    state: SimulationState,
    controls: Controls,
    viewport: Viewport,
    sampler: FrameRateSampler,
    fps: Option<u32>,
    rng: R,
}

impl<R: RandomSource> Driver<R> {
    /// Build and populate the initial scene
    pub fn new(controls: Controls, viewport: Viewport, mut rng: R) -> Self {
        let camera = OrbitCamera::new(viewport.aspect().unwrap_or(1.0));
        let mut state = SimulationState::new(camera, controls.complexity);
        state.regenerate_objects(controls.object_count, &mut rng);
        state.regenerate_lights(controls.light_count, &mut rng);

        log::info!(
            "Scene ready: {} objects, {} lights, {} complexity",
            state.objects.len(),
            state.lights.len(),
            state.complexity
        );

        Self {
            state,
            controls,
            viewport,
            sampler: FrameRateSampler::default(),
            fps: None,
            rng,
        }
    }

    /// Restart FPS counting from `now`
    pub fn start(&mut self, now: Duration) {
        self.sampler = FrameRateSampler::new(now);
    }

    /// Run one frame at loop time `now`; returns the FPS when a window closes
    pub fn frame<S>(&mut self, now: Duration, renderer: &mut S) -> Result<Option<u32>>
    where
        S: SceneRenderer + ?Sized,
    {
        advance(&mut self.state, now.as_secs_f32());

        let changes = renderer.draw(&self.state, &self.hud())?;
        for change in changes {
            self.apply(change, renderer);
        }

        let report = self.sampler.record(now);
        if let Some(fps) = report {
            log::debug!("FPS: {}", fps);
            self.fps = Some(fps);
        }
        Ok(report)
    }

    /// Apply one slider edit, fully replacing the affected collection
    pub fn apply<S>(&mut self, change: ControlChange, renderer: &mut S)
    where
        S: SceneRenderer + ?Sized,
    {
        match self.controls.apply(change) {
            Regeneration::Objects => {
                self.state
                    .regenerate_objects(self.controls.object_count, &mut self.rng);
            }
            Regeneration::Lights => {
                self.state
                    .regenerate_lights(self.controls.light_count, &mut self.rng);
            }
            Regeneration::Geometry => {
                renderer.rebuild_geometry(self.controls.complexity);
                self.state
                    .set_complexity(self.controls.complexity, &mut self.rng);
            }
        }
    }

    /// Track new surface dimensions; zero-area sizes are not forwarded
    pub fn resize<S>(&mut self, width: u32, height: u32, renderer: &mut S)
    where
        S: SceneRenderer + ?Sized,
    {
        self.viewport.resize(width, height, &mut self.state.camera);
        if self.viewport.is_drawable() {
            renderer.resize(&self.viewport);
        }
    }

    pub fn hud(&self) -> Hud {
        Hud {
            fps: self.fps,
            controls: self.controls,
            object_count: self.state.objects.len(),
            light_count: self.state.lights.len(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn fps(&self) -> Option<u32> {
        self.fps
    }
}

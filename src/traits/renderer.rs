use crate::camera::Viewport;
use crate::geometry::Complexity;
use crate::scene::SimulationState;
use crate::ui::{ControlChange, Hud};

/// Drawing backend fed by the frame loop.
///
/// The loop treats it as a sink: submit the current state, get back whatever
/// control changes the user made while the frame was on screen.
pub trait SceneRenderer {
    /// Apply new surface dimensions
    fn resize(&mut self, viewport: &Viewport);

    /// Rebuild shared meshes for a new tessellation level
    fn rebuild_geometry(&mut self, complexity: Complexity);

    /// Draw one frame and collect UI input
    fn draw(&mut self, scene: &SimulationState, hud: &Hud) -> anyhow::Result<Vec<ControlChange>>;
}

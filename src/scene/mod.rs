//! Scene content: objects, lights and the state the frame loop advances.

mod generator;
mod light;
mod object;
mod random;

pub use generator::{generate_light, generate_lights, generate_object, generate_objects};
pub use light::{shadow_slots, PointLight, ShadowSetup};
pub use object::{Material, SceneObject, Transform};
pub use random::{RngSource, SequenceSource};

use crate::camera::OrbitCamera;
use crate::geometry::Complexity;
use crate::math::Color;
use crate::traits::RandomSource;

pub const BACKGROUND: u32 = 0x111111;
pub const AMBIENT: u32 = 0x404040;

/// Everything the per-frame update reads and writes
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub objects: Vec<SceneObject>,
    pub lights: Vec<PointLight>,
    pub camera: OrbitCamera,
    pub complexity: Complexity,
    pub background: Color,
    pub ambient: Color,
}

impl SimulationState {
    /// Empty scene; populate with the `regenerate_*` methods
    pub fn new(camera: OrbitCamera, complexity: Complexity) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            camera,
            complexity,
            background: Color::from_hex(BACKGROUND),
            ambient: Color::from_hex(AMBIENT),
        }
    }

    /// Replace every object with a fresh batch
    pub fn regenerate_objects(&mut self, count: usize, rng: &mut dyn RandomSource) {
        self.objects = generate_objects(count, rng);
        log::debug!("Regenerated {} objects ({})", count, self.complexity);
    }

    /// Replace every light with a fresh batch
    pub fn regenerate_lights(&mut self, count: usize, rng: &mut dyn RandomSource) {
        self.lights = generate_lights(count, rng);
        log::debug!("Regenerated {} lights", count);
    }

    /// Switch tessellation level; objects are rebuilt since their meshes change
    pub fn set_complexity(&mut self, complexity: Complexity, rng: &mut dyn RandomSource) {
        self.complexity = complexity;
        let count = self.objects.len();
        self.regenerate_objects(count, rng);
    }
}

use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::math::Color;
use crate::types::{LightUniform, MAX_LIGHTS, SHADOW_FACES};

/// Cube face look directions and up vectors: +X, -X, +Y, -Y, +Z, -Z
const FACES: [(Vec3, Vec3); SHADOW_FACES] = [
    (Vec3::X, Vec3::Y),
    (Vec3::NEG_X, Vec3::Y),
    (Vec3::Y, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::Z),
    (Vec3::Z, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y),
];

/// Point light with a finite influence range
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
    pub range: f32,
    pub cast_shadow: bool,
    pub shadow_map_size: u32,
}

impl PointLight {
    pub const INTENSITY: f32 = 1.0;
    pub const RANGE: f32 = 200.0;
    pub const SHADOW_MAP_SIZE: u32 = 1024;
    pub const SHADOW_NEAR: f32 = 0.5;
    pub const SHADOW_BIAS: f32 = 0.0005;

    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position,
            color,
            intensity: Self::INTENSITY,
            range: Self::RANGE,
            cast_shadow: true,
            shadow_map_size: Self::SHADOW_MAP_SIZE,
        }
    }

    /// Uniform form; `shadow_slot` is this light's index among shadow casters
    pub fn to_uniform(&self, shadow_slot: Option<u32>) -> LightUniform {
        let shadow_layer = match shadow_slot {
            Some(slot) if self.cast_shadow => (slot as usize * SHADOW_FACES) as i32,
            _ => -1,
        };
        LightUniform {
            position: self.position.to_array(),
            range: self.range,
            color: self.color.to_linear(),
            intensity: self.intensity,
            shadow_layer,
            shadow_bias: Self::SHADOW_BIAS,
            shadow_texel: 1.0 / self.shadow_map_size.max(1) as f32,
            _pad: 0.0,
        }
    }

    /// View-projection of each cube face, in `FACES` order
    pub fn shadow_faces(&self) -> [Mat4; SHADOW_FACES] {
        let projection = Mat4::perspective_rh(FRAC_PI_2, 1.0, Self::SHADOW_NEAR, self.range);
        FACES.map(|(dir, up)| {
            projection * Mat4::look_at_rh(self.position, self.position + dir, up)
        })
    }
}

/// Shadow map slot per light: consecutive for casters, `None` otherwise.
///
/// Lights past `MAX_LIGHTS` are never uploaded and get no slot.
pub fn shadow_slots(lights: &[PointLight]) -> Vec<Option<u32>> {
    let mut next = 0;
    lights
        .iter()
        .enumerate()
        .map(|(i, light)| {
            if i >= MAX_LIGHTS || !light.cast_shadow {
                return None;
            }
            let slot = next;
            next += 1;
            Some(slot)
        })
        .collect()
}

/// Per-frame light data for the GPU: uniforms, shadow face matrices and map size
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowSetup {
    pub lights: Vec<LightUniform>,
    /// Six matrices per casting light, in slot order
    pub faces: Vec<Mat4>,
    /// Largest `shadow_map_size` among casters; all slots share it
    pub map_size: u32,
}

impl ShadowSetup {
    pub fn new(lights: &[PointLight]) -> Self {
        let slots = shadow_slots(lights);
        let map_size = lights
            .iter()
            .zip(&slots)
            .filter(|(_, slot)| slot.is_some())
            .map(|(light, _)| light.shadow_map_size)
            .max()
            .unwrap_or(1)
            .max(1);

        let mut faces = Vec::new();
        let lights = lights
            .iter()
            .zip(slots)
            .take(MAX_LIGHTS)
            .map(|(light, slot)| {
                if slot.is_some() {
                    faces.extend(light.shadow_faces());
                }
                LightUniform {
                    shadow_texel: 1.0 / map_size as f32,
                    ..light.to_uniform(slot)
                }
            })
            .collect();

        Self {
            lights,
            faces,
            map_size,
        }
    }

    pub fn casters(&self) -> usize {
        self.faces.len() / SHADOW_FACES
    }
}

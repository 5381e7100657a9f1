//! Randomized batch construction of scene objects and lights.

use glam::Vec3;
use std::f32::consts::PI;

use super::{Material, PointLight, SceneObject, Transform};
use crate::geometry::GeometryKind;
use crate::math::Color;
use crate::traits::RandomSource;

const SPAWN_EXTENT: Vec3 = Vec3::new(400.0, 200.0, 400.0);
const MAX_ANGULAR_SPEED: f32 = 0.02;
const COLOR_RANGE: f32 = 0xffffff as f32;
const EMISSIVE_RANGE: f32 = 0x333333 as f32;

const LIGHT_EXTENT_XZ: f32 = 300.0;
const LIGHT_HEIGHT_MIN: f32 = 50.0;
const LIGHT_HEIGHT_SPAN: f32 = 100.0;

fn random_color(rng: &mut dyn RandomSource, range: f32) -> Color {
    Color::from_hex((rng.next_unit() * range) as u32)
}

fn centered_vec3(rng: &mut dyn RandomSource, extent: Vec3) -> Vec3 {
    let x = rng.next_centered() * extent.x;
    let y = rng.next_centered() * extent.y;
    let z = rng.next_centered() * extent.z;
    Vec3::new(x, y, z)
}

/// Build one object. Draw order: kind, color, emissive, position, rotation, velocity.
pub fn generate_object(rng: &mut dyn RandomSource) -> SceneObject {
    let kind = GeometryKind::ALL[rng.next_index(GeometryKind::ALL.len())];
    let color = random_color(rng, COLOR_RANGE);
    let emissive = random_color(rng, EMISSIVE_RANGE);
    let position = centered_vec3(rng, SPAWN_EXTENT);
    let rotation = Vec3::new(
        rng.next_unit() * PI,
        rng.next_unit() * PI,
        rng.next_unit() * PI,
    );
    let velocity = centered_vec3(rng, Vec3::splat(MAX_ANGULAR_SPEED));

    SceneObject {
        transform: Transform { position, rotation },
        velocity,
        kind,
        material: Material::new(color, emissive),
        cast_shadow: true,
        receive_shadow: true,
    }
}

/// Fresh batch of exactly `count` objects
pub fn generate_objects(count: usize, rng: &mut dyn RandomSource) -> Vec<SceneObject> {
    (0..count).map(|_| generate_object(rng)).collect()
}

/// Build one light. Draw order: color, x, y, z.
pub fn generate_light(rng: &mut dyn RandomSource) -> PointLight {
    let color = random_color(rng, COLOR_RANGE);
    let x = rng.next_centered() * LIGHT_EXTENT_XZ;
    let y = rng.next_unit() * LIGHT_HEIGHT_SPAN + LIGHT_HEIGHT_MIN;
    let z = rng.next_centered() * LIGHT_EXTENT_XZ;
    PointLight::new(Vec3::new(x, y, z), color)
}

/// Fresh batch of exactly `count` lights
pub fn generate_lights(count: usize, rng: &mut dyn RandomSource) -> Vec<PointLight> {
    (0..count).map(|_| generate_light(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SequenceSource;

    #[test]
    fn test_object_from_midpoint_draws() {
        let mut rng = SequenceSource::constant(0.5);
        let object = generate_object(&mut rng);

        assert_eq!(object.kind, GeometryKind::Torus);
        assert_eq!(object.transform.position, Vec3::ZERO);
        assert_eq!(object.velocity, Vec3::ZERO);
        assert!((object.transform.rotation.x - PI * 0.5).abs() < 1e-6);
        assert_eq!(object.material.roughness, 0.7);
        assert_eq!(object.material.metalness, 0.3);
        assert!(object.cast_shadow && object.receive_shadow);
    }

    #[test]
    fn test_object_extremes_stay_in_spawn_box() {
        let mut low = SequenceSource::constant(0.0);
        let object = generate_object(&mut low);
        assert_eq!(object.kind, GeometryKind::Box);
        assert_eq!(object.transform.position, Vec3::new(-200.0, -100.0, -200.0));
        assert_eq!(object.velocity, Vec3::splat(-0.01));
        assert_eq!(object.material.color.to_hex(), 0x000000);
    }

    #[test]
    fn test_emissive_hex_never_exceeds_0x333333() {
        let mut rng = SequenceSource::new(vec![0.2, 0.9, 0.999_99, 0.4]);
        for _ in 0..50 {
            let emissive = generate_object(&mut rng).material.emissive.to_hex();
            assert!(emissive <= 0x333333);
        }
    }

    #[test]
    fn test_light_ranges() {
        let mut rng = SequenceSource::constant(0.0);
        let light = generate_light(&mut rng);
        assert_eq!(light.position, Vec3::new(-150.0, 50.0, -150.0));
        assert_eq!(light.intensity, 1.0);
        assert_eq!(light.range, 200.0);
        assert_eq!(light.shadow_map_size, 1024);
    }
}

use glam::Vec3;
use stress_scene::camera::OrbitCamera;
use stress_scene::core::{advance, light_orbit, tick, update_object, BOUNDS, DRIFT_STEP};
use stress_scene::geometry::Complexity;
use stress_scene::scene::{generate_lights, generate_object, SequenceSource, SimulationState};
use stress_scene::SceneObject;

const FRAME: f32 = 1.0 / 60.0;

fn object_at(position: Vec3, velocity: Vec3) -> SceneObject {
    let mut object = generate_object(&mut SequenceSource::constant(0.5));
    object.transform.position = position;
    object.velocity = velocity;
    object
}

/// Objects parked just inside every face of the bounding box
fn near_bound_objects() -> Vec<SceneObject> {
    let edge = BOUNDS - Vec3::splat(0.05);
    let velocity = Vec3::new(0.01, -0.015, 0.02);
    vec![
        object_at(Vec3::new(edge.x, 0.0, 0.0), velocity),
        object_at(Vec3::new(-edge.x, 0.0, 0.0), velocity),
        object_at(Vec3::new(0.0, edge.y, 0.0), velocity),
        object_at(Vec3::new(edge.x, -edge.y, 0.0), velocity),
        object_at(Vec3::new(0.0, 0.0, edge.z), velocity),
        object_at(Vec3::new(-edge.x, edge.y, -edge.z), velocity),
    ]
}

#[cfg(test)]
mod updater_tests {
    use super::*;

    #[test]
    fn test_flips_match_bound_crossings() {
        let mut total_crossings = 0;

        for mut object in near_bound_objects() {
            let mut crossings = [0u32; 3];
            let mut flips = [0u32; 3];

            for frame in 0..2000 {
                let t = frame as f32 * FRAME;
                let before = object.transform.position;
                let translated = Vec3::new(
                    before.x + (t + before.z * 0.01).sin() * 0.1,
                    before.y + (t + before.x * 0.01).cos() * 0.1,
                    before.z,
                );
                let velocity_before = object.velocity;

                update_object(&mut object, t);

                for axis in 0..3 {
                    if translated[axis].abs() > BOUNDS[axis] {
                        crossings[axis] += 1;
                    }
                    if velocity_before[axis].signum() != object.velocity[axis].signum() {
                        flips[axis] += 1;
                    }
                }
            }

            assert_eq!(flips, crossings, "Velocity flips should equal bound crossings");
            total_crossings += crossings.iter().sum::<u32>();
        }

        assert!(total_crossings > 0, "Near-bound starts should cross at least once");
    }

    #[test]
    fn test_velocity_never_zeroed_by_reflection() {
        for mut object in near_bound_objects() {
            for frame in 0..2000 {
                update_object(&mut object, frame as f32 * FRAME);
                assert!(
                    object.velocity.cmpne(Vec3::ZERO).all(),
                    "Reflection should only flip signs"
                );
            }
        }
    }

    #[test]
    fn test_positions_stay_bounded() {
        let limit = BOUNDS + Vec3::splat(DRIFT_STEP);
        let mut state = SimulationState::new(OrbitCamera::default(), Complexity::LOW);
        state.objects = near_bound_objects();

        for frame in 0..20_000 {
            advance(&mut state, frame as f32 * FRAME);
            for object in &state.objects {
                let p = object.transform.position.abs();
                assert!(p.cmple(limit).all(), "Position {:?} escaped bounds", p);
                assert!(p.cmple(BOUNDS).all(), "Fold should keep {:?} inside", p);
            }
        }
    }

    #[test]
    fn test_light_orbit_closed_form_at_zero() {
        let position = light_orbit(0.0);
        assert_eq!(position, Vec3::new(0.0, 70.0, 100.0));
    }

    #[test]
    fn test_light_orbit_at_fixed_time() {
        let t = 2.5_f32;
        let expected = Vec3::new(
            (t * 0.7).sin() * 100.0,
            (t * 0.3).sin() * 50.0 + 70.0,
            (t * 0.5).cos() * 100.0,
        );
        assert_eq!(light_orbit(t), expected);
    }

    #[test]
    fn test_tick_sets_every_light_to_orbit() {
        let mut state = SimulationState::new(OrbitCamera::default(), Complexity::MEDIUM);
        state.lights = generate_lights(4, &mut SequenceSource::new(vec![0.1, 0.7, 0.3]));

        let state = tick(state, 1.25);

        assert_eq!(state.lights.len(), 4);
        for light in &state.lights {
            assert_eq!(light.position, light_orbit(1.25));
        }
    }

    #[test]
    fn test_tick_moves_camera_on_orbit() {
        let state = SimulationState::new(OrbitCamera::default(), Complexity::MEDIUM);
        let state = tick(state, 0.0);
        assert_eq!(state.camera.position, Vec3::new(0.0, 50.0, 220.0));
        assert_eq!(state.camera.target, Vec3::ZERO);
    }

    #[test]
    fn test_rotation_is_not_wrapped() {
        let mut object = object_at(Vec3::ZERO, Vec3::splat(0.02));
        object.transform.rotation = Vec3::ZERO;
        for frame in 0..1000 {
            update_object(&mut object, frame as f32 * FRAME);
        }
        assert!((object.transform.rotation.x - 20.0).abs() < 1e-3);
    }
}

//! Per-frame animation step.
//!
//! Each object spins by its angular velocity and drifts along a slow sin/cos
//! field. Positions are reflected at the scene bounds and the offending
//! velocity component flips sign, so motion stays inside the box.

use glam::{BVec3, Vec3};

use crate::scene::{SceneObject, SimulationState};

/// Half extents of the box objects are kept in
pub const BOUNDS: Vec3 = Vec3::new(200.0, 100.0, 200.0);

/// Largest per-frame translation on any axis
pub const DRIFT_STEP: f32 = 0.1;

const PHASE_SCALE: f32 = 0.01;

/// Advance the whole scene to elapsed time `t` (seconds)
pub fn tick(mut state: SimulationState, t: f32) -> SimulationState {
    advance(&mut state, t);
    state
}

/// In-place form of [`tick`]
pub fn advance(state: &mut SimulationState, t: f32) {
    for object in &mut state.objects {
        update_object(object, t);
    }

    let light_position = light_orbit(t);
    for light in &mut state.lights {
        light.position = light_position;
    }

    state.camera.orbit(t);
}

/// Step one object; returns the axes whose velocity flipped this frame.
///
/// Both drift offsets read the position from before this frame, so the
/// y offset uses the old x.
pub fn update_object(object: &mut SceneObject, t: f32) -> BVec3 {
    object.transform.rotation += object.velocity;

    let before = object.transform.position;
    let mut position = before;
    position.x += (t + before.z * PHASE_SCALE).sin() * DRIFT_STEP;
    position.y += (t + before.x * PHASE_SCALE).cos() * DRIFT_STEP;

    let flipped = reflect(&mut position, &mut object.velocity);
    object.transform.position = position;
    flipped
}

/// Fold out-of-bounds axes back inside and negate their velocity
fn reflect(position: &mut Vec3, velocity: &mut Vec3) -> BVec3 {
    let mut flipped = [false; 3];
    for axis in 0..3 {
        let bound = BOUNDS[axis];
        if position[axis].abs() > bound {
            velocity[axis] = -velocity[axis];
            position[axis] = fold(position[axis], bound);
            flipped[axis] = true;
        }
    }
    BVec3::from(flipped)
}

fn fold(value: f32, bound: f32) -> f32 {
    let edge = bound.copysign(value);
    (2.0 * edge - value).clamp(-bound, bound)
}

/// Shared position of every light at time `t`
pub fn light_orbit(t: f32) -> Vec3 {
    Vec3::new(
        (t * 0.7).sin() * 100.0,
        (t * 0.3).sin() * 50.0 + 70.0,
        (t * 0.5).cos() * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryKind;
    use crate::math::Color;
    use crate::scene::{Material, Transform};

    fn object_at(position: Vec3, velocity: Vec3) -> SceneObject {
        SceneObject {
            transform: Transform {
                position,
                rotation: Vec3::ZERO,
            },
            velocity,
            kind: GeometryKind::Box,
            material: Material::new(Color::from_hex(0xffffff), Color::from_hex(0)),
            cast_shadow: true,
            receive_shadow: true,
        }
    }

    #[test]
    fn rotation_accumulates_velocity() {
        let mut object = object_at(Vec3::ZERO, Vec3::new(0.01, -0.02, 0.005));
        for _ in 0..10 {
            update_object(&mut object, 0.0);
        }
        let rotation = object.transform.rotation;
        assert!((rotation.x - 0.1).abs() < 1e-5);
        assert!((rotation.y + 0.2).abs() < 1e-5);
        assert!((rotation.z - 0.05).abs() < 1e-5);
    }

    #[test]
    fn drift_reads_pre_update_position() {
        let start = Vec3::new(50.0, 10.0, 30.0);
        let mut object = object_at(start, Vec3::ZERO);
        let t = 1.25;
        update_object(&mut object, t);

        let expected_x = start.x + (t + start.z * 0.01).sin() * 0.1;
        let expected_y = start.y + (t + start.x * 0.01).cos() * 0.1;
        assert_eq!(object.transform.position.x, expected_x);
        assert_eq!(object.transform.position.y, expected_y);
        assert_eq!(object.transform.position.z, start.z);
    }

    #[test]
    fn crossing_bound_flips_velocity_and_folds() {
        let mut object = object_at(Vec3::new(200.0, 0.0, 0.0), Vec3::splat(0.01));
        // sin(pi/2) = 1 pushes x to 200.1
        let flipped = update_object(&mut object, std::f32::consts::FRAC_PI_2);
        assert_eq!(flipped, BVec3::new(true, false, false));
        assert_eq!(object.velocity.x, -0.01);
        assert!(object.transform.position.x <= 200.0);
        assert!(object.transform.position.x > 199.8);
    }

    #[test]
    fn fold_mirrors_across_edge() {
        assert!((fold(201.0, 200.0) - 199.0).abs() < 1e-4);
        assert!((fold(-100.5, 100.0) + 99.5).abs() < 1e-4);
        assert_eq!(fold(900.0, 200.0), -200.0);
    }

    #[test]
    fn light_orbit_closed_form_at_zero() {
        assert_eq!(light_orbit(0.0), Vec3::new(0.0, 70.0, 100.0));
    }
}

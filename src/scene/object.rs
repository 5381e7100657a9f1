use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::geometry::GeometryKind;
use crate::math::Color;
use crate::types::{InstanceRaw, SHADOW_CAST, SHADOW_RECEIVE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order
    pub rotation: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

/// Metallic-roughness surface description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub roughness: f32,
    pub metalness: f32,
}

impl Material {
    pub const ROUGHNESS: f32 = 0.7;
    pub const METALNESS: f32 = 0.3;

    pub fn new(color: Color, emissive: Color) -> Self {
        Self {
            color,
            emissive,
            roughness: Self::ROUGHNESS,
            metalness: Self::METALNESS,
        }
    }
}

/// One animated mesh instance
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub transform: Transform,
    /// Per-axis angular velocity in radians per frame
    pub velocity: Vec3,
    pub kind: GeometryKind,
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl SceneObject {
    pub fn to_instance(&self) -> InstanceRaw {
        let [r, g, b] = self.material.color.to_linear();
        let [er, eg, eb] = self.material.emissive.to_linear();
        InstanceRaw {
            model: self.transform.matrix().to_cols_array_2d(),
            color_roughness: [r, g, b, self.material.roughness],
            emissive_metalness: [er, eg, eb, self.material.metalness],
            shadow_flags: [self.shadow_flags(), 0, 0, 0],
        }
    }

    pub fn shadow_flags(&self) -> u32 {
        let mut flags = 0;
        if self.cast_shadow {
            flags |= SHADOW_CAST;
        }
        if self.receive_shadow {
            flags |= SHADOW_RECEIVE;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_translation_column() {
        let transform = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::new(0.3, 0.2, 0.1),
        };
        let m = transform.matrix();
        assert_eq!(m.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_xyz_order_composes_x_first() {
        let transform = Transform {
            position: Vec3::ZERO,
            rotation: Vec3::new(0.4, 0.9, -0.2),
        };
        let expected = Mat4::from_rotation_x(0.4)
            * Mat4::from_rotation_y(0.9)
            * Mat4::from_rotation_z(-0.2);
        assert!(transform.matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_shadow_flags_reach_instance() {
        let mut rng = crate::scene::SequenceSource::constant(0.5);
        let mut object = crate::scene::generate_object(&mut rng);
        assert_eq!(object.to_instance().shadow_flags[0], SHADOW_CAST | SHADOW_RECEIVE);

        object.cast_shadow = false;
        assert_eq!(object.to_instance().shadow_flags[0], SHADOW_RECEIVE);

        object.receive_shadow = false;
        assert_eq!(object.to_instance().shadow_flags[0], 0);
    }
}

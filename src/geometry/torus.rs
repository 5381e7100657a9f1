use glam::Vec3;
use std::f32::consts::TAU;

use super::MeshData;
use crate::types::Vertex;

/// Ring torus in the XY plane around the Z axis
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial_segments = radial_segments.max(2);
    let tubular_segments = tubular_segments.max(3);
    let row = tubular_segments + 1;

    let mut mesh = MeshData::default();

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;

            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let normal = (position - center).normalize();

            mesh.vertices.push(Vertex::new(position, normal));
        }
    }

    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_on_tube_surface() {
        let mesh = torus(1.0, 0.4, 8, 16);
        for vertex in &mesh.vertices {
            let p = Vec3::from_array(vertex.position);
            let ring = Vec3::new(p.x, p.y, 0.0).normalize() * 1.0;
            assert!(((p - ring).length() - 0.4).abs() < 1e-4);
        }
    }
}

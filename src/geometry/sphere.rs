use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::MeshData;
use crate::types::Vertex;

/// UV sphere; pole rows emit a single triangle per cell
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);
    let row = width_segments + 1;

    let mut mesh = MeshData::default();

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let theta = v * PI;

        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let phi = u * TAU;

            let normal = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.vertices.push(Vertex::new(normal * radius, normal));
        }
    }

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices_at_radius() {
        let mesh = sphere(2.5, 12, 8);
        for vertex in &mesh.vertices {
            let length = Vec3::from_array(vertex.position).length();
            assert!((length - 2.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_pole_rows_skip_degenerate_triangles() {
        let mesh = sphere(1.0, 4, 2);
        // two rows of four cells, one triangle each
        assert_eq!(mesh.triangle_count(), 8);
    }
}

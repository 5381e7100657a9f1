use glam::Vec3;

use super::MeshData;
use crate::types::Vertex;

/// Face frame: outward normal plus in-plane axes with `u × v = normal`
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

/// Axis-aligned box centered on the origin with `segments` subdivisions per edge
pub fn cuboid(width: f32, height: f32, depth: f32, segments: u32) -> MeshData {
    let segments = segments.max(1);
    let dims = Vec3::new(width, height, depth);
    let row = segments + 1;

    let mut mesh = MeshData::default();

    for (normal, u, v) in FACES {
        let base = mesh.vertices.len() as u32;

        for iy in 0..=segments {
            let fy = iy as f32 / segments as f32 - 0.5;
            for ix in 0..=segments {
                let fx = ix as f32 / segments as f32 - 0.5;
                let position = (normal * 0.5 + u * fx + v * fy) * dims;
                mesh.vertices.push(Vertex::new(position, normal));
            }
        }

        for iy in 0..segments {
            for ix in 0..segments {
                let a = base + ix + row * iy;
                let b = base + ix + row * (iy + 1);
                let c = base + (ix + 1) + row * (iy + 1);
                let d = base + (ix + 1) + row * iy;
                mesh.indices.extend_from_slice(&[a, d, b, d, c, b]);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment_box() {
        let mesh = cuboid(2.0, 2.0, 2.0, 1);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_vertices_lie_on_surface() {
        let mesh = cuboid(2.0, 4.0, 6.0, 3);
        for vertex in &mesh.vertices {
            let p = Vec3::from_array(vertex.position);
            let on_face = (p.x.abs() - 1.0).abs() < 1e-5
                || (p.y.abs() - 2.0).abs() < 1e-5
                || (p.z.abs() - 3.0).abs() < 1e-5;
            assert!(on_face, "vertex {:?} is not on the box surface", p);
        }
    }

    #[test]
    fn test_winding_matches_normals() {
        let mesh = cuboid(2.0, 2.0, 2.0, 2);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| {
                Vec3::from_array(mesh.vertices[i as usize].position)
            });
            let face_normal = (b - a).cross(c - a);
            let normal = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
            assert!(face_normal.dot(normal) > 0.0);
        }
    }
}

use glam::Vec3;
use std::f32::consts::TAU;

use super::MeshData;
use crate::types::Vertex;

/// Cone standing on its base, apex up
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    cylinder(0.0, radius, height, radial_segments)
}

/// Capped frustum centered on the origin along Y.
///
/// A cap is emitted only for a non-zero radius, so a cone has a base but no
/// top cap.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> MeshData {
    let radial_segments = radial_segments.max(3);
    let half_height = height * 0.5;

    let mut mesh = torso(radius_top, radius_bottom, half_height, radial_segments);
    if radius_top > 0.0 {
        mesh.append(cap(radius_top, half_height, radial_segments, true));
    }
    if radius_bottom > 0.0 {
        mesh.append(cap(radius_bottom, half_height, radial_segments, false));
    }
    mesh
}

fn torso(radius_top: f32, radius_bottom: f32, half_height: f32, radial_segments: u32) -> MeshData {
    let slope = (radius_bottom - radius_top) / (half_height * 2.0);
    let row = radial_segments + 1;

    let mut mesh = MeshData::default();

    for (radius, y) in [(radius_top, half_height), (radius_bottom, -half_height)] {
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let position = Vec3::new(radius * sin, y, radius * cos);
            let normal = Vec3::new(sin, slope, cos).normalize();
            mesh.vertices.push(Vertex::new(position, normal));
        }
    }

    for x in 0..radial_segments {
        let a = x;
        let b = row + x;
        let c = row + x + 1;
        let d = x + 1;
        // a zero radius collapses a row to a point; skip the degenerate face
        if radius_top > 0.0 {
            mesh.indices.extend_from_slice(&[a, b, d]);
        }
        if radius_bottom > 0.0 {
            mesh.indices.extend_from_slice(&[b, c, d]);
        }
    }

    mesh
}

fn cap(radius: f32, half_height: f32, radial_segments: u32, top: bool) -> MeshData {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::Y * sign;
    let y = half_height * sign;

    let mut mesh = MeshData::default();

    // one center vertex per segment
    for _ in 0..radial_segments {
        mesh.vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), normal));
    }
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.vertices.push(Vertex::new(Vec3::new(radius * sin, y, radius * cos), normal));
    }

    let rim = radial_segments;
    for x in 0..radial_segments {
        let center = x;
        let i = rim + x;
        if top {
            mesh.indices.extend_from_slice(&[i, i + 1, center]);
        } else {
            mesh.indices.extend_from_slice(&[i + 1, i, center]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_has_base_only() {
        let mesh = cone(1.0, 2.0, 16);
        let top_normals = mesh
            .vertices
            .iter()
            .filter(|v| v.normal == [0.0, 1.0, 0.0])
            .count();
        assert_eq!(top_normals, 0);
    }

    #[test]
    fn test_cylinder_extent() {
        let mesh = cylinder(0.8, 0.8, 2.0, 16);
        for vertex in &mesh.vertices {
            let p = Vec3::from_array(vertex.position);
            assert!(p.y.abs() <= 1.0 + 1e-5);
            assert!(Vec3::new(p.x, 0.0, p.z).length() <= 0.8 + 1e-5);
        }
    }

    #[test]
    fn test_cone_has_no_zero_area_triangles() {
        let mesh = cone(1.0, 2.0, 12);
        assert_eq!(mesh.indices.len(), 6 * 12);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]]
                .map(|i| Vec3::from_array(mesh.vertices[i as usize].position));
            assert!((b - a).cross(c - a).length() > 1e-6);
        }
    }
}

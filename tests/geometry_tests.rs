use glam::Vec3;
use stress_scene::geometry::{build_palette, Complexity, GeometryKind, MeshData};

/// Expected (vertices, indices) for each kind at base segment count `s`
fn expected_counts(kind: GeometryKind, s: usize) -> (usize, usize) {
    match kind {
        GeometryKind::Box => (6 * (s + 1) * (s + 1), 36 * s * s),
        GeometryKind::Sphere => {
            let (w, h) = (2 * s, 2 * s);
            ((w + 1) * (h + 1), 6 * w * h - 6 * w)
        }
        GeometryKind::Torus => {
            let (r, t) = (s, 2 * s);
            ((r + 1) * (t + 1), 6 * r * t)
        }
        GeometryKind::Cone => {
            let r = 2 * s;
            (2 * (r + 1) + 2 * r + 1, 6 * r)
        }
        GeometryKind::Cylinder => {
            let r = 2 * s;
            (2 * (r + 1) + 2 * (2 * r + 1), 12 * r)
        }
    }
}

fn all_complexities() -> impl Iterator<Item = Complexity> {
    (Complexity::MIN..=Complexity::MAX).filter_map(Complexity::new)
}

#[cfg(test)]
mod geometry_tests {
    use super::*;

    #[test]
    fn test_counts_per_kind_and_level() {
        for complexity in all_complexities() {
            let s = complexity.segments() as usize;
            for kind in GeometryKind::ALL {
                let mesh = kind.build(complexity);
                assert_eq!(
                    (mesh.vertex_count(), mesh.index_count()),
                    expected_counts(kind, s),
                    "{:?} at {}",
                    kind,
                    complexity
                );
            }
        }
    }

    #[test]
    fn test_indices_reference_existing_vertices() {
        for complexity in all_complexities() {
            for mesh in build_palette(complexity) {
                let count = mesh.vertex_count() as u32;
                assert_eq!(mesh.index_count() % 3, 0);
                assert!(mesh.indices.iter().all(|&i| i < count));
            }
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        for mesh in build_palette(Complexity::HIGH) {
            for vertex in &mesh.vertices {
                let length = Vec3::from_array(vertex.normal).length();
                assert!((length - 1.0).abs() < 1e-4, "Normal length {}", length);
            }
        }
    }

    #[test]
    fn test_higher_complexity_adds_triangles() {
        for kind in GeometryKind::ALL {
            let low = kind.build(Complexity::LOW).triangle_count();
            let medium = kind.build(Complexity::MEDIUM).triangle_count();
            let high = kind.build(Complexity::HIGH).triangle_count();
            assert!(low < medium && medium < high, "{:?} should refine", kind);
        }
    }

    #[test]
    fn test_meshes_fit_unit_scale() {
        for mesh in build_palette(Complexity::MEDIUM) {
            for vertex in &mesh.vertices {
                let p = Vec3::from_array(vertex.position);
                assert!(p.abs().max_element() <= 1.4 + 1e-4);
            }
        }
    }

    #[test]
    fn test_palette_follows_kind_order() {
        let palette = build_palette(Complexity::LOW);
        assert_eq!(palette.len(), GeometryKind::ALL.len());
        for (kind, mesh) in GeometryKind::ALL.iter().zip(&palette) {
            let built: MeshData = kind.build(Complexity::LOW);
            assert_eq!(mesh.vertices, built.vertices);
        }
    }
}

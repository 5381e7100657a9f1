//! Indexed triangle meshes for the five primitive kinds.
//!
//! Every object of a given kind shares one mesh; meshes are rebuilt only when
//! the complexity level changes.

mod cuboid;
mod cylinder;
mod sphere;
mod torus;

pub use cuboid::cuboid;
pub use cylinder::{cone, cylinder};
pub use sphere::sphere;
pub use torus::torus;

use crate::types::Vertex;
use std::fmt;

/// Primitive shape an object is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Box,
    Sphere,
    Torus,
    Cone,
    Cylinder,
}

impl GeometryKind {
    /// Palette the scene generator picks from
    pub const ALL: [GeometryKind; 5] = [
        GeometryKind::Box,
        GeometryKind::Sphere,
        GeometryKind::Torus,
        GeometryKind::Cone,
        GeometryKind::Cylinder,
    ];

    /// Position in `ALL`, used to bucket instances per mesh
    pub fn index(self) -> usize {
        self as usize
    }

    /// Tessellate this kind at the given complexity
    pub fn build(self, complexity: Complexity) -> MeshData {
        let s = complexity.segments();
        match self {
            GeometryKind::Box => cuboid(2.0, 2.0, 2.0, s),
            GeometryKind::Sphere => sphere(1.0, s * 2, s * 2),
            GeometryKind::Torus => torus(1.0, 0.4, s, s * 2),
            GeometryKind::Cone => cone(1.0, 2.0, s * 2),
            GeometryKind::Cylinder => cylinder(0.8, 0.8, 2.0, s * 2),
        }
    }
}

/// Tessellation level selected by the complexity slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Complexity(u8);

impl Complexity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;
    pub const LOW: Complexity = Complexity(1);
    pub const MEDIUM: Complexity = Complexity(2);
    pub const HIGH: Complexity = Complexity(3);

    /// Returns `None` outside `1..=3`
    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Base segment count; each kind scales it
    pub fn segments(self) -> u32 {
        self.0 as u32 * 8
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Low",
            2 => "Medium",
            _ => "High",
        }
    }
}

impl Default for Complexity {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// CPU-side mesh ready for upload
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append another mesh, rebasing its indices
    pub fn append(&mut self, other: MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }
}

/// Build the meshes for every kind, in `GeometryKind::ALL` order
pub fn build_palette(complexity: Complexity) -> Vec<MeshData> {
    GeometryKind::ALL
        .iter()
        .map(|kind| kind.build(complexity))
        .collect()
}

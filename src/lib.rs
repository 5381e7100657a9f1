pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod geometry;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod traits;
pub mod types;
pub mod ui;

pub use crate::camera::{OrbitCamera, Viewport};
pub use crate::config::SceneConfig;
pub use crate::core::{advance, tick, Driver, FrameRateSampler};
pub use crate::geometry::{Complexity, GeometryKind, MeshData};
pub use crate::scene::{PointLight, SceneObject, SimulationState};

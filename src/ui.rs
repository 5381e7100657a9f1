//! Slider state and the mapping from slider edits to scene regeneration.

use crate::geometry::Complexity;

pub const MAX_OBJECTS: usize = 20_000;
pub const MAX_LIGHTS: usize = crate::types::MAX_LIGHTS;

/// Current slider values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub object_count: usize,
    pub light_count: usize,
    pub complexity: Complexity,
}

/// A single slider edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlChange {
    ObjectCount(usize),
    LightCount(usize),
    Complexity(Complexity),
}

/// What has to be rebuilt after a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regeneration {
    Objects,
    Lights,
    /// Meshes and objects both
    Geometry,
}

impl Controls {
    pub fn new(object_count: usize, light_count: usize, complexity: Complexity) -> Self {
        Self {
            object_count: object_count.min(MAX_OBJECTS),
            light_count: light_count.min(MAX_LIGHTS),
            complexity,
        }
    }

    /// Record the change and report what it invalidates
    pub fn apply(&mut self, change: ControlChange) -> Regeneration {
        match change {
            ControlChange::ObjectCount(count) => {
                self.object_count = count.min(MAX_OBJECTS);
                Regeneration::Objects
            }
            ControlChange::LightCount(count) => {
                self.light_count = count.min(MAX_LIGHTS);
                Regeneration::Lights
            }
            ControlChange::Complexity(complexity) => {
                self.complexity = complexity;
                Regeneration::Geometry
            }
        }
    }

    /// Changes that turn `self` into `edited`, in slider order
    pub fn diff(&self, edited: &Controls) -> Vec<ControlChange> {
        let mut changes = Vec::new();
        if edited.object_count != self.object_count {
            changes.push(ControlChange::ObjectCount(edited.object_count));
        }
        if edited.light_count != self.light_count {
            changes.push(ControlChange::LightCount(edited.light_count));
        }
        if edited.complexity != self.complexity {
            changes.push(ControlChange::Complexity(edited.complexity));
        }
        changes
    }
}

/// Heads-up display contents for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    /// Last reported rate; `None` until the first window closes
    pub fps: Option<u32>,
    pub controls: Controls,
    pub object_count: usize,
    pub light_count: usize,
}

/// Thousands-separated count for the object counter
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

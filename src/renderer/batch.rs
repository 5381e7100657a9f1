use std::ops::Range;

use crate::geometry::GeometryKind;
use crate::scene::SceneObject;
use crate::types::InstanceRaw;

/// Instance data for one frame, grouped so each mesh is drawn with a single call
#[derive(Debug, Default)]
pub struct InstanceBatches {
    instances: Vec<InstanceRaw>,
    ranges: [Range<u32>; GeometryKind::ALL.len()],
    casters: [u32; GeometryKind::ALL.len()],
    buckets: [Vec<InstanceRaw>; GeometryKind::ALL.len()],
    receivers_only: [Vec<InstanceRaw>; GeometryKind::ALL.len()],
}

impl InstanceBatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the current objects, reusing the previous allocations.
    ///
    /// Within each kind, shadow casters come first so the shadow pass can
    /// draw a prefix of the kind's range.
    pub fn fill(&mut self, objects: &[SceneObject]) {
        for bucket in self.buckets.iter_mut().chain(self.receivers_only.iter_mut()) {
            bucket.clear();
        }
        for object in objects {
            let bucket = if object.cast_shadow {
                &mut self.buckets[object.kind.index()]
            } else {
                &mut self.receivers_only[object.kind.index()]
            };
            bucket.push(object.to_instance());
        }

        self.instances.clear();
        for kind in 0..GeometryKind::ALL.len() {
            let start = self.instances.len() as u32;
            self.instances.extend_from_slice(&self.buckets[kind]);
            self.casters[kind] = self.buckets[kind].len() as u32;
            self.instances.extend_from_slice(&self.receivers_only[kind]);
            self.ranges[kind] = start..self.instances.len() as u32;
        }
    }

    pub fn instances(&self) -> &[InstanceRaw] {
        &self.instances
    }

    /// Slice of `instances()` holding objects of `kind`
    pub fn range(&self, kind: GeometryKind) -> Range<u32> {
        self.ranges[kind.index()].clone()
    }

    /// Prefix of `range(kind)` holding the shadow casters
    pub fn caster_range(&self, kind: GeometryKind) -> Range<u32> {
        let range = self.range(kind);
        range.start..range.start + self.casters[kind.index()]
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

//! Per-frame facing samples.
//!
//! [`FacingTrace`] collects one [`FrameSample`] per facing owner per frame
//! (see [`record_facing_trace`](crate::systems::trace::record_facing_trace))
//! and can be written out as JSON to plot how quickly owners converge.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// State of one facing owner at the end of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    pub frame: u64,
    pub elapsed: f32,
    /// `Entity::to_bits` of the owner.
    pub entity: u64,
    pub facing_degrees: f32,
    /// `None` when the owner had nothing to face this frame.
    pub desired_degrees: Option<f32>,
    /// Signed shortest turn still left, in degrees.
    pub error_degrees: Option<f32>,
}

#[derive(Resource, Clone, Debug, Default, Serialize, Deserialize)]
pub struct FacingTrace {
    pub samples: Vec<FrameSample>,
}

impl FacingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: FrameSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples recorded for one owner, in frame order.
    pub fn for_entity(&self, entity: u64) -> impl Iterator<Item = &FrameSample> {
        self.samples.iter().filter(move |s| s.entity == entity)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize trace: {e}"))
    }

    /// Write the trace as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), String> {
        let content = self.to_json()?;
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }
}

use bevy_ecs::prelude::Component;
use glam::Vec3;

use crate::facing::PositionProvider;

/// World-space position of an entity.
///
/// X and Y span the play plane; Z is depth and does not take part in facing.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vec3,
}

impl MapPosition {
    /// Position on the play plane at depth zero.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, 0.0),
        }
    }

    pub fn from_vec3(pos: Vec3) -> Self {
        Self { pos }
    }

    pub fn with_depth(mut self, z: f32) -> Self {
        self.pos.z = z;
        self
    }
}

impl PositionProvider for MapPosition {
    fn position(&self) -> Vec3 {
        self.pos
    }
}

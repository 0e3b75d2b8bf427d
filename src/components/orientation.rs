//! Orientation of an entity as a unit quaternion.
//!
//! Facing on the play plane is a rotation about +Z; the helpers here read and
//! write that angle in degrees for code that does not care about the other
//! two axes.

use bevy_ecs::prelude::Component;
use glam::Quat;

use crate::facing::{desired_orientation, facing_angle_degrees};

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub rotation: Quat,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
        }
    }
}

impl Orientation {
    pub fn new(rotation: Quat) -> Self {
        Self { rotation }
    }

    /// Pure rotation about the depth axis.
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            rotation: desired_orientation(degrees),
        }
    }

    /// Rotation about the depth axis in degrees, within `(-180, 180]`.
    pub fn degrees(&self) -> f32 {
        facing_angle_degrees(self.rotation)
    }
}

//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity of an entity. The
//! [`movement_system`](crate::systems::movement::movement_system) integrates it
//! into [`MapPosition`](super::mapposition::MapPosition) once per frame, which
//! is how facing targets move around in the world.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Velocity of an entity in world units per second.
///
/// A `frozen` body keeps its velocity but is skipped by the movement system.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vec3,
    pub frozen: bool,
}

impl RigidBody {
    /// A body at rest.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}

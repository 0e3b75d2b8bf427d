//! Integrate [`RigidBody`] velocities into [`MapPosition`] each frame.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Move every non-frozen body by `velocity * delta`.
pub fn movement_system(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        position.pos += rigidbody.velocity * time.delta;
    }
}

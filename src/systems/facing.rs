//! Facing system.
//!
//! Runs the [`FacingController`](crate::facing::FacingController) of every
//! entity carrying a [`FacingTarget`] once per frame.
//!
//! # System Flow
//!
//! For each owner with `FacingTarget`, `MapPosition` and `Orientation`:
//!
//! 1. Resolve the target entity's [`MapPosition`]. An unset target, a despawned
//!    target, or a target without a position all skip the owner untouched.
//! 2. Hand the owner's position and orientation plus the target position to
//!    the controller together with the scaled frame delta from
//!    [`WorldTime`](crate::resources::worldtime::WorldTime).
//!
//! Schedule this after anything that moves targets (e.g.
//! [`movement_system`](crate::systems::movement::movement_system)) so owners react to the
//! current frame's positions.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use log::trace;

use crate::components::facingtarget::FacingTarget;
use crate::components::mapposition::MapPosition;
use crate::components::orientation::Orientation;
use crate::facing::{OrientedEntity, PositionProvider};
use crate::resources::worldtime::WorldTime;

/// Owner view over the ECS components the controller needs.
struct FacingOwner<'a> {
    position: Vec3,
    orientation: &'a mut Orientation,
}

impl PositionProvider for FacingOwner<'_> {
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl OrientedEntity for FacingOwner<'_> {
    fn orientation(&self) -> Quat {
        self.orientation.rotation
    }

    fn set_orientation(&mut self, rotation: Quat) {
        self.orientation.rotation = rotation;
    }
}

/// Turn every [`FacingTarget`] owner a step toward its target.
pub fn facing_system(
    world_time: Res<WorldTime>,
    mut owners: Query<(Entity, &FacingTarget, &MapPosition, &mut Orientation)>,
    targets: Query<&MapPosition>,
) {
    let dt = world_time.delta;
    for (entity, facing, position, mut orientation) in owners.iter_mut() {
        let Some(target_entity) = facing.target else {
            trace!("{entity}: no facing target");
            continue;
        };
        // Resolve before touching Orientation so a lost target does not flag it as changed.
        let Ok(target_position) = targets.get(target_entity) else {
            trace!("{entity}: facing target {target_entity} has no position, skipping");
            continue;
        };
        let target_position = *target_position;

        let mut owner = FacingOwner {
            position: position.pos,
            orientation: &mut *orientation,
        };
        facing
            .controller
            .on_tick(&mut owner, Some(&target_position), dt);
    }
}

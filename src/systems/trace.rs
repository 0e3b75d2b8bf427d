//! Record a [`FrameSample`] for every facing owner.
//!
//! Runs after [`facing_system`](crate::systems::facing::facing_system) and
//! only when a [`FacingTrace`] resource is present.

use bevy_ecs::prelude::*;

use crate::components::facingtarget::FacingTarget;
use crate::components::mapposition::MapPosition;
use crate::components::orientation::Orientation;
use crate::facing::angle_delta_degrees;
use crate::resources::worldtime::WorldTime;
use crate::trace::{FacingTrace, FrameSample};

pub fn record_facing_trace(
    world_time: Res<WorldTime>,
    trace: Option<ResMut<FacingTrace>>,
    owners: Query<(Entity, &FacingTarget, &MapPosition, &Orientation)>,
    targets: Query<&MapPosition>,
) {
    let Some(mut trace) = trace else {
        return;
    };
    for (entity, facing, position, orientation) in owners.iter() {
        let facing_degrees = orientation.degrees();
        let desired_degrees = facing
            .target
            .and_then(|t| targets.get(t).ok())
            .map(|t| facing.controller.desired_angle_for(position.pos, t.pos));
        trace.push(FrameSample {
            frame: world_time.frame_count,
            elapsed: world_time.elapsed,
            entity: entity.to_bits(),
            facing_degrees,
            desired_degrees,
            error_degrees: desired_degrees.map(|d| angle_delta_degrees(facing_degrees, d)),
        });
    }
}

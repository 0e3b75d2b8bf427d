//! Component that keeps an entity turned toward another entity.
//!
//! [`FacingTarget`] pairs a [`FacingController`] with a handle to the entity to
//! look at. The handle is weak: if the target is despawned (or was never set)
//! the [`facing_system`](crate::systems::facing::facing_system) simply leaves
//! the owner's [`Orientation`](super::orientation::Orientation) alone.
//!
//! # Related
//!
//! - [`crate::facing`] – the controller math
//! - [`crate::systems::facing::facing_system`] – runs the controller each frame

use bevy_ecs::prelude::{Component, Entity};

use crate::facing::FacingController;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct FacingTarget {
    pub controller: FacingController,
    /// Entity whose [`MapPosition`](super::mapposition::MapPosition) to face.
    pub target: Option<Entity>,
}

impl FacingTarget {
    /// Face `target` with the default controller settings.
    pub fn new(target: Entity) -> Self {
        Self {
            controller: FacingController::default(),
            target: Some(target),
        }
    }

    /// A controller with nothing to face yet.
    pub fn untargeted() -> Self {
        Self::default()
    }

    pub fn with_controller(mut self, controller: FacingController) -> Self {
        self.controller = controller;
        self
    }

    pub fn set_target(&mut self, target: Entity) {
        self.target = Some(target);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untargeted_has_no_target() {
        let ft = FacingTarget::untargeted();
        assert!(ft.target.is_none());
        assert_eq!(ft.controller, FacingController::default());
    }

    #[test]
    fn test_set_and_clear_target() {
        let mut world = bevy_ecs::world::World::new();
        let e = world.spawn_empty().id();
        let mut ft = FacingTarget::untargeted();
        ft.set_target(e);
        assert_eq!(ft.target, Some(e));
        ft.clear_target();
        assert!(ft.target.is_none());
    }

    #[test]
    fn test_with_controller() {
        let c = FacingController::new(2.5, 90.0);
        let ft = FacingTarget::untargeted().with_controller(c);
        assert_eq!(ft.controller, c);
    }
}

//! Facing engine library.
//!
//! This module exposes the host-independent facing controller together with
//! the ECS components, resources and systems that run it once per frame, for
//! use in integration tests and as a reusable library.

pub mod components;
pub mod facing;
pub mod resources;
pub mod systems;
pub mod trace;

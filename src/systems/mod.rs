//! Engine systems.
//!
//! Submodules overview
//! - [`facing`] – turn owners toward their targets each frame
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`time`] – update simulation time and delta
//! - [`trace`] – record per-frame facing samples

pub mod facing;
pub mod movement;
pub mod time;
pub mod trace;

//! ECS components for entities.
//!
//! Submodules overview:
//! - [`facingtarget`] – facing controller plus the weak handle of the entity to face
//! - [`mapposition`] – world-space position of an entity
//! - [`orientation`] – orientation quaternion, readable as a depth-axis angle
//! - [`rigidbody`] – simple kinematic body storing velocity

pub mod facingtarget;
pub mod mapposition;
pub mod orientation;
pub mod rigidbody;

//! ECS resources made available to systems.
//!
//! Overview
//! - `facingconfig` – INI-backed controller defaults and simulation settings
//! - `worldtime` – simulation time, delta and frame count
pub mod facingconfig;
pub mod worldtime;

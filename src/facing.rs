//! Smoothly turn an entity to face a point on the XY plane.
//!
//! [`FacingController`] is the host-independent core. Each tick it computes the
//! angle from the owner to the target using only the first two axes (the Z axis
//! is depth and is ignored), adds a fixed adjustment for the artwork's default
//! facing, and rotates the owner a fraction of the way there with a
//! shortest-arc spherical interpolation.
//!
//! The controller never owns either entity. It reads positions and the owner's
//! orientation through the [`PositionProvider`] and [`OrientedEntity`] traits,
//! so it works with the ECS components in [`crate::components`] as well as with
//! any other entity representation.
//!
//! # Example
//!
//! ```
//! use facingengine::facing::{FacingController, OrientedEntity, PositionProvider};
//! use glam::{Quat, Vec3};
//!
//! struct Ship { pos: Vec3, rot: Quat }
//!
//! impl PositionProvider for Ship {
//!     fn position(&self) -> Vec3 { self.pos }
//! }
//!
//! impl OrientedEntity for Ship {
//!     fn orientation(&self) -> Quat { self.rot }
//!     fn set_orientation(&mut self, rotation: Quat) { self.rot = rotation; }
//! }
//!
//! let controller = FacingController::default();
//! let mut ship = Ship { pos: Vec3::ZERO, rot: Quat::IDENTITY };
//! let beacon = Ship { pos: Vec3::new(0.0, 10.0, 0.0), rot: Quat::IDENTITY };
//!
//! // 0.2s at the default rate of 5.0 saturates the interpolation.
//! controller.on_tick(&mut ship, Some(&beacon), 0.2);
//! let angle = facingengine::facing::facing_angle_degrees(ship.orientation());
//! assert!((angle - 90.0).abs() < 1e-3);
//! ```

use glam::{Quat, Vec3};
use log::trace;

/// Default rotation speed factor.
pub const DEFAULT_SMOOTHING_RATE: f32 = 5.0;
/// Default artwork offset in degrees.
pub const DEFAULT_ADJUSTMENT_ANGLE_DEGREES: f32 = 0.0;

/// Anything with a world-space position.
pub trait PositionProvider {
    fn position(&self) -> Vec3;
}

/// An entity whose orientation can be read and replaced.
pub trait OrientedEntity: PositionProvider {
    fn orientation(&self) -> Quat;
    fn set_orientation(&mut self, rotation: Quat);
}

impl PositionProvider for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }
}

/// Rotates an owning entity toward a target point a little every tick.
///
/// The configuration is never modified by the controller itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FacingController {
    /// How fast the owner converges on the desired facing. Higher is faster.
    pub smoothing_rate: f32,
    /// Added to the computed facing angle to correct for asset orientation.
    pub adjustment_angle_degrees: f32,
    /// Clamp the interpolation factor to `[0, 1]`.
    ///
    /// When `false` the raw `delta * smoothing_rate` is handed to the slerp,
    /// which extrapolates past the target for factors above one.
    pub clamp_factor: bool,
}

impl Default for FacingController {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING_RATE, DEFAULT_ADJUSTMENT_ANGLE_DEGREES)
    }
}

impl FacingController {
    /// Create a clamped controller with the given rate and adjustment.
    pub fn new(smoothing_rate: f32, adjustment_angle_degrees: f32) -> Self {
        Self {
            smoothing_rate,
            adjustment_angle_degrees,
            clamp_factor: true,
        }
    }

    pub fn with_smoothing_rate(mut self, smoothing_rate: f32) -> Self {
        self.smoothing_rate = smoothing_rate;
        self
    }

    pub fn with_adjustment_angle(mut self, degrees: f32) -> Self {
        self.adjustment_angle_degrees = degrees;
        self
    }

    /// Pass the raw interpolation factor through without clamping.
    pub fn unclamped(mut self) -> Self {
        self.clamp_factor = false;
        self
    }

    /// Advance the owner's orientation by one tick.
    ///
    /// A missing target leaves the owner untouched.
    pub fn on_tick<O, T>(&self, owner: &mut O, target: Option<&T>, delta_seconds: f32)
    where
        O: OrientedEntity + ?Sized,
        T: PositionProvider + ?Sized,
    {
        let Some(target) = target else {
            trace!("facing: no target, orientation unchanged");
            return;
        };

        let current = owner.orientation();
        let desired = self.desired_orientation_for(owner.position(), target.position());
        let t = interpolation_factor(delta_seconds, self.smoothing_rate, self.clamp_factor);
        owner.set_orientation(current.slerp(desired, t));
    }

    /// Desired facing angle in degrees from `owner` toward `target`, adjustment included.
    pub fn desired_angle_for(&self, owner: Vec3, target: Vec3) -> f32 {
        desired_angle_degrees(owner, target, self.adjustment_angle_degrees)
    }

    /// Orientation the owner would have once fully turned toward `target`.
    pub fn desired_orientation_for(&self, owner: Vec3, target: Vec3) -> Quat {
        desired_orientation(self.desired_angle_for(owner, target))
    }
}

/// Angle in degrees of the planar vector from `owner` to `target`, plus `adjustment`.
///
/// Only X and Y take part. Coincident points give `atan2(0, 0) = 0`.
pub fn desired_angle_degrees(owner: Vec3, target: Vec3, adjustment: f32) -> f32 {
    let d = target.truncate() - owner.truncate();
    d.y.atan2(d.x).to_degrees() + adjustment
}

/// Pure rotation about the Z (depth) axis.
pub fn desired_orientation(angle_degrees: f32) -> Quat {
    Quat::from_rotation_z(angle_degrees.to_radians())
}

/// Fraction of the remaining turn to cover this tick.
///
/// Negative deltas count as zero.
pub fn interpolation_factor(delta_seconds: f32, smoothing_rate: f32, clamp: bool) -> f32 {
    let t = delta_seconds.max(0.0) * smoothing_rate;
    if clamp { t.clamp(0.0, 1.0) } else { t }
}

/// Rotation about the Z axis carried by `rotation`, in degrees within `(-180, 180]`.
pub fn facing_angle_degrees(rotation: Quat) -> f32 {
    let q = rotation.normalize();
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);
    let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
    wrap_degrees(yaw.to_degrees())
}

/// Signed shortest difference `to - from` in degrees, within `(-180, 180]`.
pub fn angle_delta_degrees(from: f32, to: f32) -> f32 {
    wrap_degrees(to - from)
}

/// Wrap an angle into `(-180, 180]`.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let mut a = degrees % 360.0;
    if a <= -180.0 {
        a += 360.0;
    } else if a > 180.0 {
        a -= 360.0;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn same_rotation(a: Quat, b: Quat) -> bool {
        a.dot(b).abs() > 1.0 - 1e-5
    }

    struct Body {
        pos: Vec3,
        rot: Quat,
    }

    impl PositionProvider for Body {
        fn position(&self) -> Vec3 {
            self.pos
        }
    }

    impl OrientedEntity for Body {
        fn orientation(&self) -> Quat {
            self.rot
        }

        fn set_orientation(&mut self, rotation: Quat) {
            self.rot = rotation;
        }
    }

    fn body_at(x: f32, y: f32) -> Body {
        Body {
            pos: Vec3::new(x, y, 0.0),
            rot: Quat::IDENTITY,
        }
    }

    // ==================== ANGLE TESTS ====================

    #[test]
    fn test_desired_angle_east_is_zero() {
        let a = desired_angle_degrees(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 0.0);
        assert!(approx_eq(a, 0.0));
    }

    #[test]
    fn test_desired_angle_north_is_ninety() {
        let a = desired_angle_degrees(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), 0.0);
        assert!(approx_eq(a, 90.0));
    }

    #[test]
    fn test_desired_angle_includes_adjustment() {
        let a = desired_angle_degrees(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 90.0);
        assert!(approx_eq(a, 90.0));
    }

    #[test]
    fn test_desired_angle_ignores_depth() {
        let flat = desired_angle_degrees(Vec3::ZERO, Vec3::new(-1.0, 1.0, 0.0), 0.0);
        let deep = desired_angle_degrees(Vec3::new(0.0, 0.0, -7.0), Vec3::new(-1.0, 1.0, 42.0), 0.0);
        assert!(approx_eq(flat, 135.0));
        assert!(approx_eq(flat, deep));
    }

    #[test]
    fn test_desired_angle_coincident_points() {
        let p = Vec3::new(3.0, -2.0, 1.0);
        assert!(approx_eq(desired_angle_degrees(p, p, 0.0), 0.0));
        assert!(approx_eq(desired_angle_degrees(p, p, 30.0), 30.0));
    }

    #[test]
    fn test_desired_orientation_is_pure_z_rotation() {
        let q = desired_orientation(90.0);
        assert!(approx_eq(q.x, 0.0));
        assert!(approx_eq(q.y, 0.0));
        assert!(approx_eq(facing_angle_degrees(q), 90.0));
        let forward = q * Vec3::X;
        assert!(approx_eq(forward.x, 0.0));
        assert!(approx_eq(forward.y, 1.0));
        assert!(approx_eq(forward.z, 0.0));
    }

    #[test]
    fn test_wrap_degrees() {
        assert!(approx_eq(wrap_degrees(190.0), -170.0));
        assert!(approx_eq(wrap_degrees(-190.0), 170.0));
        assert!(approx_eq(wrap_degrees(180.0), 180.0));
        assert!(approx_eq(wrap_degrees(-180.0), 180.0));
        assert!(approx_eq(wrap_degrees(720.0), 0.0));
    }

    #[test]
    fn test_angle_delta_takes_short_way() {
        assert!(approx_eq(angle_delta_degrees(170.0, -170.0), 20.0));
        assert!(approx_eq(angle_delta_degrees(-170.0, 170.0), -20.0));
    }

    // ==================== FACTOR TESTS ====================

    #[test]
    fn test_factor_clamped() {
        assert!(approx_eq(interpolation_factor(0.1, 5.0, true), 0.5));
        assert!(approx_eq(interpolation_factor(1.0, 5.0, true), 1.0));
        assert!(approx_eq(interpolation_factor(-1.0, 5.0, true), 0.0));
    }

    #[test]
    fn test_factor_unclamped_passes_through() {
        assert!(approx_eq(interpolation_factor(1.0, 5.0, false), 5.0));
        assert!(approx_eq(interpolation_factor(-1.0, 5.0, false), 0.0));
    }

    // ==================== TICK TESTS ====================

    #[test]
    fn test_default_controller() {
        let c = FacingController::default();
        assert!(approx_eq(c.smoothing_rate, 5.0));
        assert!(approx_eq(c.adjustment_angle_degrees, 0.0));
        assert!(c.clamp_factor);
    }

    #[test]
    fn test_builder_chaining() {
        let c = FacingController::default()
            .with_smoothing_rate(2.0)
            .with_adjustment_angle(-90.0)
            .unclamped();
        assert!(approx_eq(c.smoothing_rate, 2.0));
        assert!(approx_eq(c.adjustment_angle_degrees, -90.0));
        assert!(!c.clamp_factor);
    }

    #[test]
    fn test_no_target_is_noop() {
        let c = FacingController::default();
        let mut owner = body_at(0.0, 0.0);
        owner.rot = Quat::from_rotation_z(0.3);
        let before = owner.rot;
        c.on_tick(&mut owner, None::<&Vec3>, 1.0);
        assert_eq!(owner.rot, before);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let c = FacingController::default();
        let mut owner = body_at(0.0, 0.0);
        owner.rot = Quat::from_rotation_z(0.3);
        c.on_tick(&mut owner, Some(&Vec3::new(-4.0, 9.0, 0.0)), 0.0);
        assert!(same_rotation(owner.rot, Quat::from_rotation_z(0.3)));
    }

    #[test]
    fn test_saturated_factor_snaps_to_desired() {
        let c = FacingController::default();
        let mut owner = body_at(0.0, 0.0);
        let target = Vec3::new(0.0, 1.0, 0.0);
        c.on_tick(&mut owner, Some(&target), 0.5);
        assert!(same_rotation(owner.rot, desired_orientation(90.0)));
    }

    #[test]
    fn test_partial_step_moves_fraction_of_the_way() {
        let c = FacingController::new(1.0, 0.0);
        let mut owner = body_at(0.0, 0.0);
        c.on_tick(&mut owner, Some(&Vec3::new(0.0, 1.0, 0.0)), 0.5);
        assert!(approx_eq(facing_angle_degrees(owner.rot), 45.0));
    }

    #[test]
    fn test_unclamped_factor_extrapolates_past_target() {
        let c = FacingController::default().unclamped();
        let mut owner = body_at(0.0, 0.0);
        // 0.5 * 5.0 = 2.5 times the 90 degree turn: 225 degrees, read back as -135
        c.on_tick(&mut owner, Some(&Vec3::new(0.0, 1.0, 0.0)), 0.5);
        let facing = facing_angle_degrees(owner.rot);
        assert!(angle_delta_degrees(facing, -135.0).abs() < 0.05);
        assert!((owner.rot.length() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_unclamped_matches_clamped_below_one() {
        let target = Vec3::new(-1.0, 1.0, 0.0);
        let mut clamped = body_at(0.0, 0.0);
        let mut raw = body_at(0.0, 0.0);
        FacingController::default().on_tick(&mut clamped, Some(&target), 0.1);
        FacingController::default()
            .unclamped()
            .on_tick(&mut raw, Some(&target), 0.1);
        assert!(same_rotation(clamped.rot, raw.rot));
    }

    #[test]
    fn test_takes_shortest_arc_across_180() {
        let c = FacingController::new(1.0, 0.0);
        let mut owner = body_at(0.0, 0.0);
        owner.rot = desired_orientation(170.0);
        // desired is -170, 20 degrees away through 180
        c.on_tick(&mut owner, Some(&Vec3::new(-1.0, -(10.0f32.to_radians().tan()), 0.0)), 0.5);
        let facing = facing_angle_degrees(owner.rot);
        assert!(approx_eq(angle_delta_degrees(facing, 180.0), 0.0));
    }

    #[test]
    fn test_converges_without_overshoot() {
        let c = FacingController::new(3.0, 0.0);
        let mut owner = body_at(0.0, 0.0);
        let target = Vec3::new(-1.0, 1.0, 0.0);
        let goal = c.desired_angle_for(owner.pos, target);
        let mut last_error = angle_delta_degrees(facing_angle_degrees(owner.rot), goal);
        for _ in 0..60 {
            c.on_tick(&mut owner, Some(&target), 1.0 / 60.0);
            let error = angle_delta_degrees(facing_angle_degrees(owner.rot), goal);
            assert!(error.abs() <= last_error.abs() + EPSILON);
            assert!(error.signum() == last_error.signum() || error.abs() < EPSILON);
            last_error = error;
        }
        assert!(last_error.abs() < 10.0);
    }

    #[test]
    fn test_owner_can_be_trait_object() {
        let c = FacingController::default();
        let mut owner = body_at(0.0, 0.0);
        let target = body_at(1.0, 1.0);
        let dyn_owner: &mut dyn OrientedEntity = &mut owner;
        c.on_tick(dyn_owner, Some(&target as &dyn PositionProvider), 1.0);
        assert!(approx_eq(facing_angle_degrees(owner.rot), 45.0));
    }
}

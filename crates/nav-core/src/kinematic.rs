//! Point-mass / point-rotator kinematic state and its integration step.
//!
//! Steering behaviors only produce accelerations.  Turning an acceleration into
//! motion is [`Kinematic::integrate`], applied by whoever owns the agent once
//! per tick:
//!
//! ```text
//! velocity    += linear  · dt
//! position    += velocity · dt
//! rotation    += angular · dt
//! orientation += rotation · dt      (then wrapped into (−π, π])
//! ```

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::{NavError, NavResult};

/// Wrap an angle in radians into the half-open interval (−π, π].
///
/// ```
/// use nav_core::map_to_range;
/// use std::f32::consts::PI;
///
/// assert!((map_to_range(1.5 * PI) + 0.5 * PI).abs() < 1e-5);
/// assert_eq!(map_to_range(-PI), PI);
/// ```
pub fn map_to_range(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

// ── SteeringOutput ────────────────────────────────────────────────────────────

/// Linear and angular acceleration requested by a steering behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringOutput {
    pub linear:  Vec2,
    pub angular: f32,
}

impl SteeringOutput {
    pub const ZERO: SteeringOutput = SteeringOutput { linear: Vec2::ZERO, angular: 0.0 };

    #[inline]
    pub fn new(linear: Vec2, angular: f32) -> Self {
        Self { linear, angular }
    }

    /// Take the linear part of `linear_src` and the angular part of
    /// `angular_src` (Arrive drives position while Align drives facing).
    #[inline]
    pub fn combine(linear_src: SteeringOutput, angular_src: SteeringOutput) -> Self {
        Self { linear: linear_src.linear, angular: angular_src.angular }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.linear == Vec2::ZERO && self.angular == 0.0
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

/// Positions before and after one integration step.
///
/// The core never resolves collisions itself; callers compare `current`
/// against their obstacle query and roll back to `previous` on penetration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub previous: Vec2,
    pub current:  Vec2,
}

impl Step {
    /// Distance travelled during the step.
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.current.distance(self.previous)
    }
}

// ── Kinematic ─────────────────────────────────────────────────────────────────

/// Position, velocity, facing angle, and angular velocity of one agent.
///
/// Velocity and rotation magnitudes are unbounded here; steering behaviors cap
/// them.  `orientation` is re-wrapped into (−π, π] after every update.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematic {
    pub position:    Vec2,
    pub velocity:    Vec2,
    /// Facing angle in radians.
    pub orientation: f32,
    /// Angular velocity in radians per second.
    pub rotation:    f32,
}

impl Kinematic {
    /// An agent at rest at `position`, facing along +x.
    #[inline]
    pub fn at(position: Vec2) -> Self {
        Self { position, ..Self::default() }
    }

    /// A stationary target at `position` facing `orientation`.
    #[inline]
    pub fn facing(position: Vec2, orientation: f32) -> Self {
        Self { position, orientation: map_to_range(orientation), ..Self::default() }
    }

    /// Unit vector along the current orientation.
    #[inline]
    pub fn heading(&self) -> Vec2 {
        Vec2::new(self.orientation.cos(), self.orientation.sin())
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    #[inline]
    pub fn distance_to(&self, other: &Kinematic) -> f32 {
        self.position.distance(other.position)
    }

    /// Advance by one tick under `steering`.
    pub fn integrate(&mut self, steering: &SteeringOutput, dt: f32) -> Step {
        let previous = self.position;
        self.velocity    += steering.linear * dt;
        self.position    += self.velocity * dt;
        self.rotation    += steering.angular * dt;
        self.orientation  = map_to_range(self.orientation + self.rotation * dt);
        Step { previous, current: self.position }
    }

    /// Teleport to `position` and come to a complete stop facing +x.
    pub fn reset_to(&mut self, position: Vec2) {
        *self = Kinematic::at(position);
    }

    /// Undo a step whose end position was rejected by the caller.
    pub fn roll_back(&mut self, step: &Step) {
        self.position = step.previous;
        self.velocity = Vec2::ZERO;
    }

    /// Reject NaN / infinite state before it propagates through a session.
    pub fn validate(&self) -> NavResult<()> {
        if !self.position.is_finite() {
            return Err(NavError::NonFinite { what: "position" });
        }
        if !self.velocity.is_finite() {
            return Err(NavError::NonFinite { what: "velocity" });
        }
        if !self.orientation.is_finite() || !self.rotation.is_finite() {
            return Err(NavError::NonFinite { what: "orientation" });
        }
        Ok(())
    }
}

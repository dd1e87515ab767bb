//! Align: turn to match a target orientation.

use std::f32::consts::PI;

use nav_core::{Kinematic, SteeringOutput, Vec2, map_to_range};

/// Align tuning.  Radii are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlignConfig {
    pub max_angular_acceleration: f32,
    pub max_rotation:             f32,
    /// Satisfaction radius: no steering inside it.
    pub target_radius:            f32,
    /// Deceleration radius.
    pub slow_radius:              f32,
    pub time_to_target:           f32,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            max_angular_acceleration: 200.0,
            max_rotation:             3.0 * PI,
            target_radius:            0.02,
            slow_radius:              2.0,
            time_to_target:           0.1,
        }
    }
}

/// Align steering law.  Produces angular acceleration only.
#[derive(Clone, Debug, Default)]
pub struct Align {
    pub config: AlignConfig,
}

impl Align {
    pub fn new(config: AlignConfig) -> Self {
        Self { config }
    }

    /// Shortest signed turn from `character` to `target`, in (−π, π].
    #[inline]
    pub fn rotation_error(character: &Kinematic, target: &Kinematic) -> f32 {
        map_to_range(target.orientation - character.orientation)
    }

    pub fn steering(&self, character: &Kinematic, target: &Kinematic) -> SteeringOutput {
        let c = &self.config;
        let error = Self::rotation_error(character, target);
        let size = error.abs();
        if size < c.target_radius {
            return SteeringOutput::ZERO;
        }

        let target_rotation = if size > c.slow_radius {
            c.max_rotation
        } else {
            c.max_rotation * size / c.slow_radius
        } * error.signum();

        let angular = ((target_rotation - character.rotation) / c.time_to_target)
            .clamp(-c.max_angular_acceleration, c.max_angular_acceleration);
        SteeringOutput::new(Vec2::ZERO, angular)
    }
}

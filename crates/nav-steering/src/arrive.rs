//! Arrive: decelerating approach to a target position.

use nav_core::{Kinematic, SteeringOutput, Vec2};

/// Arrive tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArriveConfig {
    pub max_acceleration: f32,
    pub max_speed:        f32,
    /// Inside this distance the agent counts as arrived.
    pub target_radius:    f32,
    /// Inside this distance the desired speed scales down linearly.
    pub slow_radius:      f32,
    /// Seconds over which to reach the desired velocity.
    pub time_to_target:   f32,
}

impl Default for ArriveConfig {
    fn default() -> Self {
        Self {
            max_acceleration: 250.0,
            max_speed:        300.0,
            target_radius:    15.0,
            slow_radius:      300.0,
            time_to_target:   0.3,
        }
    }
}

/// Arrive steering law.  Produces linear acceleration only.
#[derive(Clone, Debug, Default)]
pub struct Arrive {
    pub config: ArriveConfig,
}

impl Arrive {
    pub fn new(config: ArriveConfig) -> Self {
        Self { config }
    }

    /// Acceleration that carries `character` to `target.position`, slowing
    /// inside the slow radius.  Zero once inside the target radius.
    pub fn steering(&self, character: &Kinematic, target: &Kinematic) -> SteeringOutput {
        let c = &self.config;
        let offset = target.position - character.position;
        let distance = offset.length();
        if distance < c.target_radius {
            return SteeringOutput::ZERO;
        }

        let target_speed = if distance > c.slow_radius {
            c.max_speed
        } else {
            c.max_speed * distance / c.slow_radius
        };
        let target_velocity = offset / distance * target_speed;

        let linear = ((target_velocity - character.velocity) / c.time_to_target)
            .clamp_length_max(c.max_acceleration);
        SteeringOutput::new(linear, 0.0)
    }
}

/// A stationary target at `goal`, oriented along the direction of travel
/// from `character`.  Feeds Arrive and Align together.
pub fn target_at(character: &Kinematic, goal: Vec2) -> Kinematic {
    let d = goal - character.position;
    Kinematic::facing(goal, d.y.atan2(d.x))
}

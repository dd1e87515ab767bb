//! Wander: forward-biased ambient motion with a jittering facing.
//!
//! A target point is projected `wander_offset` units ahead of the agent and
//! displaced by `wander_radius` along an internal wander angle.  Each call the
//! wander angle takes a small random step; the agent turns to face the target
//! point (via an inner [`Align`]) while accelerating along its heading.

use nav_core::{AgentRng, Kinematic, SteeringOutput, Vec2, map_to_range};

use crate::align::{Align, AlignConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderConfig {
    pub max_acceleration: f32,
    pub max_speed:        f32,
    /// Distance of the wander circle ahead of the agent.
    pub wander_offset:    f32,
    pub wander_radius:    f32,
    /// Largest change of the wander angle per second, radians.
    pub wander_rate:      f32,
    pub time_to_target:   f32,
    /// Facing control toward the wander target.
    pub align:            AlignConfig,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            max_acceleration: 150.0,
            max_speed:        150.0,
            wander_offset:    50.0,
            wander_radius:    30.0,
            wander_rate:      10.0,
            time_to_target:   0.4,
            align:            AlignConfig::default(),
        }
    }
}

/// Wander steering.  Carries the wander angle between calls.
#[derive(Clone, Debug)]
pub struct Wander {
    pub config: WanderConfig,
    align: Align,
    /// Offset of the wander target from the agent's heading, radians.
    wander_orientation: f32,
}

impl Wander {
    pub fn new(config: WanderConfig) -> Self {
        Self { align: Align::new(config.align), config, wander_orientation: 0.0 }
    }

    pub fn wander_orientation(&self) -> f32 {
        self.wander_orientation
    }

    /// World-space point the agent is currently drifting toward.
    pub fn target_point(&self, character: &Kinematic) -> Vec2 {
        let c = &self.config;
        let angle = character.orientation + self.wander_orientation;
        character.position
            + c.wander_offset * character.heading()
            + c.wander_radius * Vec2::new(angle.cos(), angle.sin())
    }

    pub fn steering(&mut self, character: &Kinematic, rng: &mut AgentRng, dt: f32) -> SteeringOutput {
        let c = &self.config;
        self.wander_orientation =
            map_to_range(self.wander_orientation + rng.binomial() * c.wander_rate * dt);

        let point = self.target_point(character);
        let d = point - character.position;
        let face = Kinematic::facing(point, d.y.atan2(d.x));
        let angular = self.align.steering(character, &face).angular;

        let desired = character.heading() * c.max_speed;
        let linear = ((desired - character.velocity) / c.time_to_target)
            .clamp_length_max(c.max_acceleration);
        SteeringOutput::new(linear, angular)
    }
}

impl Default for Wander {
    fn default() -> Self {
        Self::new(WanderConfig::default())
    }
}

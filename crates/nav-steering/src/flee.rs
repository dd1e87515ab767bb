//! Flee: accelerate directly away from a threat point.

use nav_core::{Kinematic, SteeringOutput, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleeConfig {
    pub max_acceleration: f32,
    pub max_speed:        f32,
}

impl Default for FleeConfig {
    fn default() -> Self {
        Self { max_acceleration: 250.0, max_speed: 300.0 }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Flee {
    pub config: FleeConfig,
}

impl Flee {
    pub fn new(config: FleeConfig) -> Self {
        Self { config }
    }

    /// Steer toward moving away from `threat` at full speed.  When standing
    /// exactly on the threat point the agent flees backwards along its
    /// heading.
    pub fn steering(&self, character: &Kinematic, threat: Vec2) -> SteeringOutput {
        let c = &self.config;
        let away = (character.position - threat).try_normalize().unwrap_or(-character.heading());
        let linear = (away * c.max_speed - character.velocity).clamp_length_max(c.max_acceleration);
        SteeringOutput::new(linear, 0.0)
    }
}

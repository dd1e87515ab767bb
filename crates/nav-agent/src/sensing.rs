//! Sensor readings derived from kinematics, the graph and the walls.
//!
//! Everything here is recomputed from scratch every tick; nothing is cached.

use nav_core::{Kinematic, Vec2};
use nav_decision::{Features, SensedState};
use nav_spatial::Obstacles;

// ── RoomLayout ────────────────────────────────────────────────────────────────

/// Four-quadrant room classifier around a split point.
///
/// ```text
///   0 | 1
///  ---+---   x grows right, y grows down
///   2 | 3
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoomLayout {
    /// Points with `x >= split.x` are on the right, `y >= split.y` below.
    pub split: Vec2,
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self { split: Vec2::new(320.0, 240.0) }
    }
}

impl RoomLayout {
    pub fn room(&self, p: Vec2) -> i32 {
        let right = p.x >= self.split.x;
        let down = p.y >= self.split.y;
        match (right, down) {
            (false, false) => 0,
            (true, false)  => 1,
            (false, true)  => 2,
            (true, true)   => 3,
        }
    }
}

/// `true` if the point `probe` units ahead along the agent's heading is
/// inside a wall.
pub fn wall_ahead(kin: &Kinematic, walls: &dyn Obstacles, probe: f32) -> bool {
    walls.is_blocked(kin.position + kin.heading() * probe)
}

/// Readings for the waypoint-following decision tree.  `goal` is the current
/// waypoint goal; without one the agent is never "at target".
pub fn sense_waypoint(
    character:        &Kinematic,
    goal:             Option<Vec2>,
    time_in_behavior: f32,
    walls:            &dyn Obstacles,
) -> SensedState {
    SensedState {
        distance_to_target: goal.map_or(f32::INFINITY, |g| character.position.distance(g)),
        time_in_behavior,
        min_wall_dist: walls.min_distance(character.position),
        speed: character.speed(),
    }
}

// ── FeatureConfig ─────────────────────────────────────────────────────────────

/// How the JSON-tree features are derived from the two agents.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeatureConfig {
    /// `aggro` holds while the agents are strictly closer than this.
    pub aggro_range: f32,
    /// Look-ahead distance of the `wall` probe.
    pub wall_probe:  f32,
    pub rooms:       RoomLayout,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { aggro_range: 400.0, wall_probe: 10.0, rooms: RoomLayout::default() }
    }
}

impl FeatureConfig {
    /// Features as seen from the monster.
    pub fn features(&self, monster: &Kinematic, player: &Kinematic, walls: &dyn Obstacles) -> Features {
        let dist = monster.distance_to(player);
        Features {
            room:  self.rooms.room(monster.position),
            dist,
            aggro: dist < self.aggro_range,
            wall:  wall_ahead(monster, walls, self.wall_probe),
        }
    }
}

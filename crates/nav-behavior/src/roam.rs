//! Ambient leaves: graph wandering and idling.

use tracing::{debug, warn};

use nav_core::{SteeringOutput, Vec2};
use nav_steering::{Align, AlignConfig, Arrive, ArriveConfig, PathFollower};

use crate::{BtNode, LastAction, Status, WorldState};

// ── GraphWanderTask ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphWanderConfig {
    pub arrival_tolerance: f32,
    /// Report `Success` after this many completed routes; `None` wanders
    /// forever (always `Running`).
    pub legs:              Option<u32>,
    pub arrive:            ArriveConfig,
    pub align:             AlignConfig,
}

impl Default for GraphWanderConfig {
    fn default() -> Self {
        Self {
            arrival_tolerance: 10.0,
            legs:              Some(1),
            arrive: ArriveConfig {
                max_acceleration: 150.0,
                max_speed:        120.0,
                target_radius:    5.0,
                slow_radius:      60.0,
                time_to_target:   0.2,
            },
            align: AlignConfig::default(),
        }
    }
}

/// Walk A* routes to uniformly random graph nodes.
///
/// A new goal is drawn when the current route is used up, was never found, or
/// was invalidated by a reset.  `Failure` means the graph is empty or the
/// drawn goal is unreachable; the next tick draws again.
pub struct GraphWanderTask {
    config:     GraphWanderConfig,
    arrive:     Arrive,
    align:      Align,
    follower:   PathFollower,
    legs_done:  u32,
    seen_epoch: u64,
}

impl GraphWanderTask {
    pub fn new(config: GraphWanderConfig) -> Self {
        Self {
            arrive:     Arrive::new(config.arrive),
            align:      Align::new(config.align),
            follower:   PathFollower::new(config.arrival_tolerance),
            legs_done:  0,
            seen_epoch: 0,
            config,
        }
    }

    pub fn follower(&self) -> &PathFollower {
        &self.follower
    }

    pub fn legs_done(&self) -> u32 {
        self.legs_done
    }

    /// Draw a goal and route to it.  Returns `false` if nothing was routed.
    fn pick_route(&mut self, world: &mut WorldState<'_>) -> bool {
        let Some(goal) = world.rng.node(world.graph.node_count()) else {
            return false;
        };
        let Some(start) = world.graph.closest_node(world.monster.position) else {
            return false;
        };
        match world.pathfinder.find_path(world.graph, start, goal) {
            Ok(path) if !path.is_empty() => {
                debug!(%start, %goal, len = path.len(), "wander route");
                self.follower.set_path(path);
                self.follower.skip_behind(world.monster.position, world.graph);
                true
            }
            Ok(_) => {
                debug!(%start, %goal, "wander goal unreachable");
                false
            }
            Err(e) => {
                warn!(error = %e, "wander path query rejected");
                false
            }
        }
    }
}

impl BtNode for GraphWanderTask {
    fn tick(&mut self, world: &mut WorldState<'_>, dt: f32) -> Status {
        world.last_action = LastAction::Wander;
        if self.seen_epoch != world.reset_epoch {
            self.seen_epoch = world.reset_epoch;
            self.follower.clear();
        }

        if self.follower.is_exhausted() {
            if !self.follower.is_empty() {
                self.follower.clear();
                self.legs_done += 1;
                if self.config.legs.is_some_and(|n| self.legs_done >= n) {
                    self.legs_done = 0;
                    return Status::Success;
                }
            }
            if !self.pick_route(world) {
                return Status::Failure;
            }
        }

        let steering = self
            .follower
            .steer(world.monster, world.graph, &self.arrive, &self.align)
            .unwrap_or(SteeringOutput::ZERO);
        world.monster.integrate(&steering, dt);
        Status::Running
    }

    fn name(&self) -> &'static str {
        "graph_wander"
    }
}

// ── IdleTask ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IdleConfig {
    /// Seconds to idle before reporting `Success`.
    pub duration:         f32,
    /// Braking limit, linear and angular.
    pub max_deceleration: f32,
    pub time_to_stop:     f32,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self { duration: 1.5, max_deceleration: 200.0, time_to_stop: 0.25 }
    }
}

/// Brake to a standstill and wait.
pub struct IdleTask {
    config:  IdleConfig,
    elapsed: f32,
}

impl IdleTask {
    pub fn new(config: IdleConfig) -> Self {
        Self { config, elapsed: 0.0 }
    }
}

impl BtNode for IdleTask {
    fn tick(&mut self, world: &mut WorldState<'_>, dt: f32) -> Status {
        world.last_action = LastAction::Idle;
        let c = &self.config;
        let m = &mut *world.monster;
        let brake = SteeringOutput::new(
            (-m.velocity / c.time_to_stop).clamp_length_max(c.max_deceleration),
            (-m.rotation / c.time_to_stop).clamp(-c.max_deceleration, c.max_deceleration),
        );
        m.integrate(&brake, dt);
        if m.velocity.length_squared() < 1e-4 {
            m.velocity = Vec2::ZERO;
        }

        self.elapsed += dt;
        if self.elapsed >= c.duration {
            self.elapsed = 0.0;
            Status::Success
        } else {
            Status::Running
        }
    }

    fn name(&self) -> &'static str {
        "idle"
    }
}

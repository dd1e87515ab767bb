//! Chase leaf: follow an A* route to the player and catch them.

use tracing::{debug, warn};

use nav_core::{NodeId, SteeringOutput};
use nav_steering::{Align, AlignConfig, Arrive, ArriveConfig, PathFollower, target_at};

use crate::{BtNode, LastAction, Status, WorldState};

/// Chase tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChaseConfig {
    /// Beyond this separation the chase gives up.
    pub aggro_range:       f32,
    /// Path-follow only while closer than this.
    pub path_range:        f32,
    /// Waypoint reached within this distance.
    pub arrival_tolerance: f32,
    pub arrive:            ArriveConfig,
    pub align:             AlignConfig,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            aggro_range:       600.0,
            path_range:        400.0,
            arrival_tolerance: 5.0,
            arrive: ArriveConfig {
                max_acceleration: 200.0,
                max_speed:        200.0,
                target_radius:    5.0,
                slow_radius:      50.0,
                time_to_target:   0.1,
            },
            align: AlignConfig {
                max_angular_acceleration: 300.0,
                max_rotation:             3.1415,
                target_radius:            0.05,
                slow_radius:              0.1,
                time_to_target:           0.05,
            },
        }
    }
}

/// Per tick, with `d` the monster–player separation:
///
/// | Condition            | Effect                                   | Status    |
/// |----------------------|------------------------------------------|-----------|
/// | `d > aggro_range`    | drop path                                | `Failure` |
/// | `d < eat_radius`     | none                                     | `Success` |
/// | `d < path_range`     | follow (cached) route, integrate monster | `Running` |
/// | no route             | drop path                                | `Failure` |
/// | otherwise            | drop path                                | `Failure` |
///
/// The route is recomputed only when there is none, it is used up, a reset
/// happened, or the player's closest node changed.
pub struct ChasePlayerTask {
    config:     ChaseConfig,
    arrive:     Arrive,
    align:      Align,
    follower:   PathFollower,
    /// Node the cached route leads to.
    goal:       Option<NodeId>,
    seen_epoch: u64,
}

impl ChasePlayerTask {
    pub fn new(config: ChaseConfig) -> Self {
        Self {
            arrive:     Arrive::new(config.arrive),
            align:      Align::new(config.align),
            follower:   PathFollower::new(config.arrival_tolerance),
            goal:       None,
            seen_epoch: 0,
            config,
        }
    }

    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }

    pub fn follower(&self) -> &PathFollower {
        &self.follower
    }

    fn drop_path(&mut self) {
        self.follower.clear();
        self.goal = None;
    }

    /// Make sure the cached route still leads to `goal`; returns `false` if
    /// no route exists.
    fn ensure_route(&mut self, world: &WorldState<'_>, goal: NodeId) -> bool {
        if self.goal == Some(goal) && !self.follower.is_exhausted() {
            return true;
        }
        let Some(start) = world.graph.closest_node(world.monster.position) else {
            return false;
        };
        match world.pathfinder.find_path(world.graph, start, goal) {
            Ok(path) if !path.is_empty() => {
                debug!(%start, %goal, len = path.len(), "chase route");
                self.follower.set_path(path);
                self.follower.skip_behind(world.monster.position, world.graph);
                self.goal = Some(goal);
                true
            }
            Ok(_) => {
                debug!(%start, %goal, "no chase route");
                false
            }
            Err(e) => {
                warn!(error = %e, "chase path query rejected");
                false
            }
        }
    }
}

impl BtNode for ChasePlayerTask {
    fn tick(&mut self, world: &mut WorldState<'_>, dt: f32) -> Status {
        world.last_action = LastAction::Chase;
        if self.seen_epoch != world.reset_epoch {
            self.seen_epoch = world.reset_epoch;
            self.drop_path();
        }

        let d = world.separation();
        if d > self.config.aggro_range {
            self.drop_path();
            return Status::Failure;
        }
        if d < world.eat_radius {
            return Status::Success;
        }
        if d >= self.config.path_range {
            self.drop_path();
            return Status::Failure;
        }

        let Some(goal) = world.graph.closest_node(world.player.position) else {
            return Status::Failure;
        };
        if !self.ensure_route(world, goal) {
            self.drop_path();
            return Status::Failure;
        }

        let steering = match self.follower.steer(world.monster, world.graph, &self.arrive, &self.align) {
            Some(s) => s,
            // Route used up next to the player's node: close the last gap directly.
            None => {
                let target = target_at(world.monster, world.player.position);
                SteeringOutput::combine(
                    self.arrive.steering(world.monster, &target),
                    self.align.steering(world.monster, &target),
                )
            }
        };
        world.monster.integrate(&steering, dt);
        Status::Running
    }

    fn name(&self) -> &'static str {
        "chase"
    }
}

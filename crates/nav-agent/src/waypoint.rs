//! Decision-tree driven waypoint follower (the player).
//!
//! # Per-tick pipeline
//!
//! ```text
//! sense  →  tree.decide  →  hysteresis  →  dispatch  →  SteeringOutput
//!                                              │
//!            PickNewWaypoint: random goal + A*, no steering this tick
//!            Pathfind:        Arrive + Align toward the next waypoint
//!            Wander / Flee:   ambient steering
//! ```
//!
//! [`WaypointController::tick`] additionally integrates and rolls back wall
//! penetration; [`WaypointController::update`] only produces the steering.

use tracing::{debug, trace, warn};

use nav_core::{AgentRng, Kinematic, NodeId, Step, SteeringOutput};
use nav_decision::{BehaviorKind, DecisionThresholds, DecisionTree, patrol_tree, waypoint_tree};
use nav_spatial::{NavGraph, Obstacles, Pathfinder, resolve_wall_collision};
use nav_steering::{
    Align, AlignConfig, Arrive, ArriveConfig, Flee, FleeConfig, PathFollower, Wander,
    WanderConfig,
};

use crate::sensing::sense_waypoint;

/// Read-only navigation collaborators shared by every controller.
#[derive(Clone, Copy)]
pub struct NavContext<'a> {
    pub graph:      &'a NavGraph,
    pub walls:      &'a dyn Obstacles,
    pub pathfinder: &'a dyn Pathfinder,
}

// ── PlayerConfig ──────────────────────────────────────────────────────────────

/// Which built-in decision tree drives the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlayerTree {
    /// `AtTarget ? PickNewWaypoint : Pathfind`.
    #[default]
    Waypoint,
    /// Waypoint tree plus wall flee and timeout.
    Patrol,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    pub tree:       PlayerTree,
    pub thresholds: DecisionThresholds,
    pub arrive:     ArriveConfig,
    pub align:      AlignConfig,
    pub wander:     WanderConfig,
    pub flee:       FleeConfig,
}

impl PlayerConfig {
    pub fn build_tree(&self) -> DecisionTree {
        match self.tree {
            PlayerTree::Waypoint => waypoint_tree(self.thresholds),
            PlayerTree::Patrol   => patrol_tree(self.thresholds),
        }
    }
}

// ── WaypointController ────────────────────────────────────────────────────────

pub struct WaypointController {
    tree:             DecisionTree,
    arrive:           Arrive,
    align:            Align,
    wander:           Wander,
    flee:             Flee,
    follower:         PathFollower,
    /// Goal node of the current route, kept even if no route was found.
    waypoint:         Option<NodeId>,
    behavior:         BehaviorKind,
    time_in_behavior: f32,
    rng:              AgentRng,
}

impl WaypointController {
    pub fn new(config: &PlayerConfig, rng: AgentRng) -> Self {
        Self::with_tree(config.build_tree(), config, rng)
    }

    /// Use a custom decision tree.  Waypoints count as reached within the
    /// tree's `target_epsilon`.
    pub fn with_tree(tree: DecisionTree, config: &PlayerConfig, rng: AgentRng) -> Self {
        Self {
            follower:         PathFollower::new(tree.thresholds().target_epsilon),
            tree,
            arrive:           Arrive::new(config.arrive),
            align:            Align::new(config.align),
            wander:           Wander::new(config.wander),
            flee:             Flee::new(config.flee),
            waypoint:         None,
            behavior:         BehaviorKind::PickNewWaypoint,
            time_in_behavior: 0.0,
            rng,
        }
    }

    pub fn behavior(&self) -> BehaviorKind {
        self.behavior
    }

    pub fn time_in_behavior(&self) -> f32 {
        self.time_in_behavior
    }

    pub fn waypoint(&self) -> Option<NodeId> {
        self.waypoint
    }

    pub fn follower(&self) -> &PathFollower {
        &self.follower
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    /// Pick the first waypoint so there is a route before the first tick.
    pub fn initialize(&mut self, character: &Kinematic, nav: NavContext<'_>) {
        self.pick_new_waypoint(character, nav);
    }

    /// Forget the current route, e.g. after the agent was teleported.  The
    /// next `Pathfind` tick computes a fresh one.
    pub fn invalidate_path(&mut self) {
        self.follower.clear();
        self.waypoint = None;
    }

    /// Sense, decide and steer for one tick.  Does not move `character`.
    pub fn update(&mut self, character: &Kinematic, nav: NavContext<'_>, dt: f32) -> SteeringOutput {
        let goal = self.waypoint.and_then(|n| nav.graph.try_position(n));
        let state = sense_waypoint(character, goal, self.time_in_behavior, nav.walls);
        let behavior = self.tree.decide(&state);

        if behavior != self.behavior {
            debug!(from = %self.behavior, to = %behavior, "player behavior switch");
            self.behavior = behavior;
            self.time_in_behavior = 0.0;
        } else {
            self.time_in_behavior += dt;
        }

        let steering = match behavior {
            BehaviorKind::PickNewWaypoint => {
                self.pick_new_waypoint(character, nav);
                SteeringOutput::ZERO
            }
            BehaviorKind::Pathfind => self.pathfind(character, nav, dt),
            BehaviorKind::Wander => self.wander.steering(character, &mut self.rng, dt),
            BehaviorKind::Flee => match nav.walls.nearest_point(character.position) {
                Some(wall) => self.flee.steering(character, wall),
                None => self.wander.steering(character, &mut self.rng, dt),
            },
        };
        trace!(%behavior, linear = ?steering.linear, angular = steering.angular, "player steering");
        steering
    }

    /// [`update`](Self::update), integrate, and undo the move if it ended
    /// inside a wall.
    pub fn tick(&mut self, character: &mut Kinematic, nav: NavContext<'_>, dt: f32) -> Step {
        let steering = self.update(character, nav, dt);
        let step = character.integrate(&steering, dt);
        if resolve_wall_collision(character, &step, nav.walls) {
            trace!(at = ?step.previous, "player rolled back out of wall");
        }
        step
    }

    fn pathfind(&mut self, character: &Kinematic, nav: NavContext<'_>, dt: f32) -> SteeringOutput {
        if self.follower.is_empty() {
            // No route to follow: keep moving and try another goal.
            self.pick_new_waypoint(character, nav);
            return self.wander.steering(character, &mut self.rng, dt);
        }
        match self.follower.steer(character, nav.graph, &self.arrive, &self.align) {
            Some(steering) => steering,
            None => {
                // Route used up; the switch to a new waypoint keeps the timer.
                self.behavior = BehaviorKind::PickNewWaypoint;
                SteeringOutput::ZERO
            }
        }
    }

    /// Draw a random goal node and route to it from the closest node.
    /// Returns `false` if no route was found.
    fn pick_new_waypoint(&mut self, character: &Kinematic, nav: NavContext<'_>) -> bool {
        let Some(goal) = self.rng.node(nav.graph.node_count()) else {
            return false;
        };
        self.waypoint = Some(goal);
        let Some(start) = nav.graph.closest_node(character.position) else {
            return false;
        };
        match nav.pathfinder.find_path(nav.graph, start, goal) {
            Ok(path) => {
                let found = !path.is_empty();
                if found {
                    debug!(%start, %goal, len = path.len(), cost = path.cost, "player route");
                } else {
                    warn!(%start, %goal, "player goal unreachable");
                }
                self.follower.set_path(path);
                self.follower.skip_behind(character.position, nav.graph);
                found
            }
            Err(e) => {
                warn!(error = %e, "player path query rejected");
                self.follower.clear();
                false
            }
        }
    }
}

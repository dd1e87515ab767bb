//! The mutable world view handed to every node on each tick.

use nav_core::{AgentRng, Kinematic};
use nav_spatial::{NavGraph, Obstacles, Pathfinder};

use crate::LastAction;

/// Everything a behavior tree may read or write during one tick.
///
/// Built by the owning controller right before ticking the root and torn down
/// right after, so the borrows never outlive the tick.  Any leaf may write to
/// either agent's kinematic state; a reset leaf moves both in a single tick.
///
/// # Reset signalling
///
/// `reset_epoch` counts reset events.  Leaves that cache paths remember the
/// epoch they last saw and drop their path when it changes, so every consumer
/// observes each reset exactly once.
pub struct WorldState<'a> {
    pub monster:     &'a mut Kinematic,
    pub player:      &'a mut Kinematic,
    pub graph:       &'a NavGraph,
    pub walls:       &'a dyn Obstacles,
    pub pathfinder:  &'a dyn Pathfinder,
    pub rng:         &'a mut AgentRng,
    /// Catch distance for the chase leaf.
    pub eat_radius:  f32,
    pub last_action: LastAction,
    pub reset_epoch: u64,
}

impl WorldState<'_> {
    /// Distance between the two agents.
    #[inline]
    pub fn separation(&self) -> f32 {
        self.monster.distance_to(&*self.player)
    }
}

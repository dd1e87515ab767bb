//! Waypoint path following.
//!
//! A [`PathFollower`] owns a [`Path`] and a cursor to the next waypoint.  Each
//! tick it advances the cursor once if the agent is within the arrival
//! tolerance of the current waypoint, then steers toward whatever waypoint the
//! cursor points at.  An empty or exhausted path yields no steering; the
//! owner decides what to do next (pick a new goal, fall back to wander).

use tracing::trace;

use nav_core::{Kinematic, NodeId, SteeringOutput, Vec2};
use nav_spatial::{NavGraph, Path};

use crate::arrive::{Arrive, target_at};
use crate::align::Align;

#[derive(Clone, Debug)]
pub struct PathFollower {
    path:   Path,
    cursor: usize,
    /// Distance at which a waypoint counts as reached.
    pub arrival_tolerance: f32,
}

impl PathFollower {
    pub fn new(arrival_tolerance: f32) -> Self {
        Self { path: Path::empty(), cursor: 0, arrival_tolerance }
    }

    /// Replace the path and rewind the cursor.
    pub fn set_path(&mut self, path: Path) {
        self.path = path;
        self.cursor = 0;
    }

    /// Skip the first waypoint when it lies behind `position`, i.e. the agent
    /// is already closer to the second waypoint than the first one is.
    /// Only acts on a freshly set path.
    pub fn skip_behind(&mut self, position: Vec2, graph: &NavGraph) {
        if self.cursor != 0 || self.path.len() < 2 {
            return;
        }
        let (Some(first), Some(second)) = (self.path.get(0), self.path.get(1)) else {
            return;
        };
        let next = graph.position(second);
        if position.distance(next) < graph.position(first).distance(next) {
            self.cursor = 1;
            trace!(skipped = %first, "first waypoint behind agent");
        }
    }

    pub fn clear(&mut self) {
        self.set_path(Path::empty());
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// `true` once every waypoint has been reached (or there never were any).
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.path.len()
    }

    pub fn current_waypoint(&self) -> Option<NodeId> {
        self.path.get(self.cursor)
    }

    /// Final node of the path.
    pub fn goal(&self) -> Option<NodeId> {
        self.path.last()
    }

    /// Advance past the current waypoint if `position` is within tolerance and
    /// return the position to head for, or `None` when the path is done.
    pub fn advance(&mut self, position: Vec2, graph: &NavGraph) -> Option<Vec2> {
        let wp = graph.position(self.current_waypoint()?);
        if wp.distance(position) >= self.arrival_tolerance {
            return Some(wp);
        }
        self.cursor += 1;
        trace!(cursor = self.cursor, len = self.path.len(), "waypoint reached");
        self.current_waypoint().map(|n| graph.position(n))
    }

    /// Arrive + Align toward the next waypoint.
    pub fn steer(
        &mut self,
        character: &Kinematic,
        graph:     &NavGraph,
        arrive:    &Arrive,
        align:     &Align,
    ) -> Option<SteeringOutput> {
        let goal = self.advance(character.position, graph)?;
        let target = target_at(character, goal);
        Some(SteeringOutput::combine(
            arrive.steering(character, &target),
            align.steering(character, &target),
        ))
    }
}

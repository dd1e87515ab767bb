//! Sensed state and the predicates evaluated over it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-tick sensor readings for one agent.  Recomputed every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SensedState {
    /// Distance to the current waypoint goal.
    pub distance_to_target: f32,
    /// Seconds since the last behavior switch.
    pub time_in_behavior:   f32,
    /// Distance to the nearest wall.
    pub min_wall_dist:      f32,
    pub speed:              f32,
}

/// Thresholds behind the built-in predicates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    /// "At target" when strictly closer than this.
    pub target_epsilon:      f32,
    /// "Near wall" when strictly closer than this.
    pub wall_threshold:      f32,
    /// "Timed out" when strictly longer than this, in seconds.
    pub behavior_timeout:    f32,
    /// "Too fast" when strictly faster than this.
    pub max_speed_threshold: f32,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            target_epsilon:      10.0,
            wall_threshold:      30.0,
            behavior_timeout:    4.0,
            max_speed_threshold: 150.0,
        }
    }
}

impl SensedState {
    #[inline]
    pub fn at_target(&self, t: &DecisionThresholds) -> bool {
        self.distance_to_target < t.target_epsilon
    }

    #[inline]
    pub fn near_wall(&self, t: &DecisionThresholds) -> bool {
        self.min_wall_dist < t.wall_threshold
    }

    #[inline]
    pub fn timed_out(&self, t: &DecisionThresholds) -> bool {
        self.time_in_behavior > t.behavior_timeout
    }

    #[inline]
    pub fn too_fast(&self, t: &DecisionThresholds) -> bool {
        self.speed > t.max_speed_threshold
    }
}

// ── Predicate ─────────────────────────────────────────────────────────────────

type CustomPredicate = Box<dyn Fn(&SensedState) -> bool + Send + Sync>;

/// Boolean test carried by a condition node.
pub enum Predicate {
    AtTarget,
    NearWall,
    TimedOut,
    TooFast,
    /// True when every inner predicate is true.
    All(Vec<Predicate>),
    Not(Box<Predicate>),
    Custom(CustomPredicate),
}

impl Predicate {
    pub fn custom(f: impl Fn(&SensedState) -> bool + Send + Sync + 'static) -> Self {
        Predicate::Custom(Box::new(f))
    }

    pub fn test(&self, s: &SensedState, t: &DecisionThresholds) -> bool {
        match self {
            Predicate::AtTarget => s.at_target(t),
            Predicate::NearWall => s.near_wall(t),
            Predicate::TimedOut => s.timed_out(t),
            Predicate::TooFast  => s.too_fast(t),
            Predicate::All(ps)  => ps.iter().all(|p| p.test(s, t)),
            Predicate::Not(p)   => !p.test(s, t),
            Predicate::Custom(f) => f(s),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::AtTarget => f.write_str("AtTarget"),
            Predicate::NearWall => f.write_str("NearWall"),
            Predicate::TimedOut => f.write_str("TimedOut"),
            Predicate::TooFast  => f.write_str("TooFast"),
            Predicate::All(ps)  => f.debug_tuple("All").field(ps).finish(),
            Predicate::Not(p)   => f.debug_tuple("Not").field(p).finish(),
            Predicate::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

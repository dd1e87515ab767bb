//! The two-agent [`Session`] and its frame loop.

use tracing::{debug, info};

use nav_behavior::{LastAction, WorldState};
use nav_core::{AgentId, AgentRng, Frame, FrameClock, Kinematic, Step, Vec2};
use nav_spatial::{AStar, NavGraph, Pathfinder, WallSet, resolve_wall_collision};

use crate::monster::{MonsterBrain, MonsterConfig};
use crate::waypoint::{NavContext, PlayerConfig, WaypointController};
use crate::{AgentResult, SessionObserver};

/// RNG stream of the player.
pub const PLAYER: AgentId = AgentId(0);
/// RNG stream of the monster.
pub const MONSTER: AgentId = AgentId(1);

// ── SessionConfig ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Master seed; every agent's RNG is derived from it.
    pub seed:         u64,
    /// Fixed timestep in seconds.
    pub dt:           f32,
    /// Frames played by [`Session::run`].
    pub total_frames: u64,
    /// The monster catches the player when strictly closer than this.
    pub eat_radius:   f32,
    pub player:       PlayerConfig,
    pub monster:      MonsterConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed:         42,
            dt:           1.0 / 60.0,
            total_frames: 3600,
            eat_radius:   30.0,
            player:       PlayerConfig::default(),
            monster:      MonsterConfig::default(),
        }
    }
}

// ── Sample / SessionSummary ───────────────────────────────────────────────────

/// One frame of monster telemetry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub frame:   Frame,
    /// Quadrant the monster is in.
    pub room:    i32,
    /// Monster–player distance.
    pub dist:    f32,
    pub aggro:   bool,
    /// A wall is right ahead of the monster.
    pub wall:    bool,
    pub action:  LastAction,
    pub player:  Vec2,
    pub monster: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSummary {
    pub frames:       u64,
    pub elapsed_secs: f64,
    /// Number of catch-and-reset cycles.
    pub resets:       u64,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// A player and a monster sharing one static level.
///
/// Each frame:
///
/// 1. the player's [`WaypointController`] steers, integrates and is rolled
///    back out of walls;
/// 2. the monster brain ticks against a [`WorldState`] over both agents; the
///    monster is rolled back out of walls unless it was just reset;
/// 3. a new reset epoch invalidates the player's route;
/// 4. both kinematics are checked for non-finite values and a [`Sample`] is
///    reported.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session<P: Pathfinder = AStar> {
    pub(crate) config:      SessionConfig,
    pub(crate) clock:       FrameClock,
    pub(crate) graph:       NavGraph,
    pub(crate) walls:       WallSet,
    pub(crate) pathfinder:  P,
    pub(crate) player:      Kinematic,
    pub(crate) monster:     Kinematic,
    pub(crate) player_ctrl: WaypointController,
    pub(crate) brain:       Box<dyn MonsterBrain>,
    pub(crate) monster_rng: AgentRng,
    pub(crate) reset_epoch: u64,
    pub(crate) last_action: LastAction,
}

impl<P: Pathfinder> Session<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Play frames until `config.total_frames` is reached.
    pub fn run<O: SessionObserver>(&mut self, observer: &mut O) -> AgentResult<SessionSummary> {
        while self.clock.current.0 < self.config.total_frames {
            self.step(observer)?;
        }
        let summary = self.summary();
        info!(
            frames = summary.frames,
            secs = summary.elapsed_secs,
            resets = summary.resets,
            "session finished"
        );
        observer.on_session_end(&summary);
        Ok(summary)
    }

    /// Play exactly `n` frames, ignoring `total_frames`.
    pub fn run_frames<O: SessionObserver>(&mut self, n: u64, observer: &mut O) -> AgentResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Play one frame and return its sample.
    pub fn step<O: SessionObserver>(&mut self, observer: &mut O) -> AgentResult<Sample> {
        let frame = self.clock.current;
        let dt = self.clock.dt();
        observer.on_frame_start(frame);

        // ── Player ────────────────────────────────────────────────────────
        let nav = NavContext { graph: &self.graph, walls: &self.walls, pathfinder: &self.pathfinder };
        self.player_ctrl.tick(&mut self.player, nav, dt);

        // ── Monster ───────────────────────────────────────────────────────
        let previous = self.monster.position;
        let mut world = WorldState {
            monster:     &mut self.monster,
            player:      &mut self.player,
            graph:       &self.graph,
            walls:       &self.walls,
            pathfinder:  &self.pathfinder,
            rng:         &mut self.monster_rng,
            eat_radius:  self.config.eat_radius,
            last_action: LastAction::None,
            reset_epoch: self.reset_epoch,
        };
        self.brain.tick(&mut world, dt);
        let (action, epoch) = (world.last_action, world.reset_epoch);
        self.last_action = action;

        if epoch != self.reset_epoch {
            self.reset_epoch = epoch;
            self.player_ctrl.invalidate_path();
            debug!(%frame, resets = epoch, "reset observed");
            observer.on_reset(frame, epoch);
        } else {
            let step = Step { previous, current: self.monster.position };
            resolve_wall_collision(&mut self.monster, &step, &self.walls);
        }

        self.player.validate()?;
        self.monster.validate()?;

        let f = self.config.monster.json.features.features(&self.monster, &self.player, &self.walls);
        let sample = Sample {
            frame,
            room:    f.room,
            dist:    f.dist,
            aggro:   f.aggro,
            wall:    f.wall,
            action,
            player:  self.player.position,
            monster: self.monster.position,
        };
        observer.on_sample(&sample);

        self.clock.advance();
        Ok(sample)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn player(&self) -> &Kinematic {
        &self.player
    }

    pub fn monster(&self) -> &Kinematic {
        &self.monster
    }

    pub fn player_controller(&self) -> &WaypointController {
        &self.player_ctrl
    }

    pub fn brain_name(&self) -> &'static str {
        self.brain.name()
    }

    /// Action the monster took on the latest frame.
    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    /// Resets observed so far.
    pub fn reset_count(&self) -> u64 {
        self.reset_epoch
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            frames:       self.clock.current.0,
            elapsed_secs: self.clock.elapsed_secs(),
            resets:       self.reset_epoch,
        }
    }
}

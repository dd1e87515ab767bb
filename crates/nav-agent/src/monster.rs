//! Monster controllers.
//!
//! Both variants act through a [`WorldState`] assembled by the session, so
//! they can move either agent and signal resets the same way:
//!
//! | Controller           | Decision layer                          |
//! |----------------------|-----------------------------------------|
//! | [`MonsterController`]  | behavior tree (`monster_tree` and co.) |
//! | [`JsonTreeController`] | data-driven JSON tree over features    |

use tracing::{debug, trace};

use nav_behavior::{
    BtNode, GraphWanderConfig, GraphWanderTask, LastAction, MonsterTreeConfig, Status,
    WorldState, monster_tree, roaming_monster_tree,
};
use nav_core::SteeringOutput;
use nav_decision::JsonTree;
use nav_steering::{Align, AlignConfig, Arrive, ArriveConfig, target_at};

use crate::sensing::FeatureConfig;
use crate::{AgentError, AgentResult};

/// Per-frame monster logic.
pub trait MonsterBrain: Send {
    /// Advance one frame.  Implementations set `world.last_action` and may
    /// move either agent.
    fn tick(&mut self, world: &mut WorldState<'_>, dt: f32) -> Status;

    fn name(&self) -> &'static str;
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BrainKind {
    /// `Selector[Sequence[Chase, Reset], Wander]`.
    #[default]
    BehaviorTree,
    /// Behavior tree that alternates wandering and idling.
    Roaming,
    /// Data-driven tree; the tree itself is handed to the session builder.
    JsonTree,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JsonControllerConfig {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub features: FeatureConfig,
    /// Steering for the `chase` label.
    pub chase:    ArriveConfig,
    pub align:    AlignConfig,
    /// Graph wandering for the `wander` label.
    pub wander:   GraphWanderConfig,
}

impl Default for JsonControllerConfig {
    fn default() -> Self {
        Self {
            features: FeatureConfig::default(),
            chase: ArriveConfig {
                max_acceleration: 200.0,
                max_speed:        200.0,
                target_radius:    10.0,
                slow_radius:      400.0,
                time_to_target:   0.2,
            },
            align:  AlignConfig::default(),
            wander: GraphWanderConfig { legs: None, ..GraphWanderConfig::default() },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonsterConfig {
    pub brain: BrainKind,
    /// Behavior-tree tuning.  The reset positions are overwritten with the
    /// agents' starting positions when a session is built.
    pub tree:  MonsterTreeConfig,
    pub json:  JsonControllerConfig,
}

// ── MonsterController ─────────────────────────────────────────────────────────

/// Ticks a behavior tree once per frame.
pub struct MonsterController {
    root:        Box<dyn BtNode>,
    last_status: Option<Status>,
}

impl MonsterController {
    pub fn new(root: Box<dyn BtNode>) -> Self {
        Self { root, last_status: None }
    }

    /// Build the tree selected by `kind`.  `BrainKind::JsonTree` is rejected;
    /// use [`JsonTreeController`] for it.
    pub fn from_config(kind: BrainKind, config: &MonsterTreeConfig) -> AgentResult<Self> {
        let root = match kind {
            BrainKind::BehaviorTree => monster_tree(config)?,
            BrainKind::Roaming      => roaming_monster_tree(config)?,
            BrainKind::JsonTree => {
                return Err(AgentError::Config("a JSON brain needs a JsonTreeController".into()));
            }
        };
        Ok(Self::new(root))
    }

    /// Status returned by the root on the latest tick.
    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }
}

impl MonsterBrain for MonsterController {
    fn tick(&mut self, world: &mut WorldState<'_>, dt: f32) -> Status {
        let status = self.root.tick(world, dt);
        if self.last_status != Some(status) {
            trace!(root = self.root.name(), ?status, action = %world.last_action, "monster tree");
        }
        self.last_status = Some(status);
        status
    }

    fn name(&self) -> &'static str {
        "behavior_tree"
    }
}

// ── JsonTreeController ────────────────────────────────────────────────────────

/// Evaluates a [`JsonTree`] over the sensed features every frame and runs the
/// action named by the leaf it reaches.
///
/// | Label                          | Effect                               | Status    |
/// |--------------------------------|--------------------------------------|-----------|
/// | `chase`                        | Arrive + Align toward the player     | `Running` |
/// | `wander`                       | graph wander (routes to random nodes)| wander's  |
/// | `reset`                        | no steering                          | `Success` |
/// | anything else, missing branch  | no steering                          | `Failure` |
///
/// "No steering" still integrates, so the monster coasts on its velocity.
pub struct JsonTreeController {
    tree:       JsonTree,
    features:   FeatureConfig,
    chase:      Arrive,
    align:      Align,
    wander:     GraphWanderTask,
    last_label: Option<String>,
}

impl JsonTreeController {
    pub fn new(tree: JsonTree, config: &JsonControllerConfig) -> Self {
        Self {
            tree,
            features:   config.features,
            chase:      Arrive::new(config.chase),
            align:      Align::new(config.align),
            wander:     GraphWanderTask::new(config.wander.clone()),
            last_label: None,
        }
    }

    /// Leaf label reached on the latest tick, if any.
    pub fn last_label(&self) -> Option<&str> {
        self.last_label.as_deref()
    }

    fn coast(world: &mut WorldState<'_>, dt: f32) {
        world.monster.integrate(&SteeringOutput::ZERO, dt);
    }
}

impl MonsterBrain for JsonTreeController {
    fn tick(&mut self, world: &mut WorldState<'_>, dt: f32) -> Status {
        let f = self.features.features(world.monster, world.player, world.walls);
        let label = self.tree.evaluate(&f);
        if label != self.last_label.as_deref() {
            debug!(?label, room = f.room, dist = f.dist, aggro = f.aggro, wall = f.wall, "json tree decision");
            self.last_label = label.map(str::to_owned);
        }

        match label {
            Some("chase") => {
                world.last_action = LastAction::Chase;
                let target = target_at(world.monster, world.player.position);
                let steering = SteeringOutput::combine(
                    self.chase.steering(world.monster, &target),
                    self.align.steering(world.monster, &target),
                );
                world.monster.integrate(&steering, dt);
                Status::Running
            }
            Some("wander") => self.wander.tick(world, dt),
            Some("reset") => {
                world.last_action = LastAction::Reset;
                Self::coast(world, dt);
                Status::Success
            }
            _ => {
                world.last_action = LastAction::None;
                Self::coast(world, dt);
                Status::Failure
            }
        }
    }

    fn name(&self) -> &'static str {
        "json_tree"
    }
}

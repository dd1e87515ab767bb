//! Fluent builder for constructing a [`Session`].

use tracing::{debug, warn};

use nav_core::{AgentRng, FrameClock, Kinematic, NodeId, Vec2};
use nav_decision::{DecisionTree, JsonTree};
use nav_spatial::{AStar, NavGraph, Obstacles, Pathfinder, WallSet};
use nav_behavior::LastAction;

use crate::monster::{BrainKind, JsonTreeController, MonsterBrain, MonsterController};
use crate::session::{MONSTER, PLAYER};
use crate::waypoint::{NavContext, WaypointController};
use crate::{AgentError, AgentResult, Session, SessionConfig};

/// Fluent builder for [`Session<P>`].
///
/// # Required inputs
///
/// - [`SessionConfig`]: seed, timestep, frame count, controller tuning
/// - [`NavGraph`]: must have at least one node
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                  |
/// |------------------------|------------------------------------------|
/// | `.walls(w)`            | `WallSet::empty()`                       |
/// | `.pathfinder(p)`       | [`AStar`]                                |
/// | `.player_start(p)`     | position of the first graph node         |
/// | `.monster_start(p)`    | position of the last graph node          |
/// | `.player_tree(t)`      | tree selected by `config.player.tree`    |
/// | `.json_tree(t)`        | none; required when the brain is `json_tree` |
/// | `.monster_brain(b)`    | brain selected by `config.monster.brain` |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(config, graph)
///     .walls(walls)
///     .build()?;
/// session.run(&mut NoopObserver)?;
/// ```
pub struct SessionBuilder<P: Pathfinder = AStar> {
    config:        SessionConfig,
    graph:         NavGraph,
    walls:         Option<WallSet>,
    pathfinder:    P,
    player_start:  Option<Vec2>,
    monster_start: Option<Vec2>,
    player_tree:   Option<DecisionTree>,
    json_tree:     Option<JsonTree>,
    brain:         Option<Box<dyn MonsterBrain>>,
}

impl SessionBuilder<AStar> {
    pub fn new(config: SessionConfig, graph: NavGraph) -> Self {
        Self {
            config,
            graph,
            walls:         None,
            pathfinder:    AStar,
            player_start:  None,
            monster_start: None,
            player_tree:   None,
            json_tree:     None,
            brain:         None,
        }
    }
}

impl<P: Pathfinder> SessionBuilder<P> {
    pub fn walls(mut self, walls: WallSet) -> Self {
        self.walls = Some(walls);
        self
    }

    /// Swap the path search used by both agents.
    pub fn pathfinder<Q: Pathfinder>(self, pathfinder: Q) -> SessionBuilder<Q> {
        SessionBuilder {
            config:        self.config,
            graph:         self.graph,
            walls:         self.walls,
            pathfinder,
            player_start:  self.player_start,
            monster_start: self.monster_start,
            player_tree:   self.player_tree,
            json_tree:     self.json_tree,
            brain:         self.brain,
        }
    }

    pub fn player_start(mut self, position: Vec2) -> Self {
        self.player_start = Some(position);
        self
    }

    pub fn monster_start(mut self, position: Vec2) -> Self {
        self.monster_start = Some(position);
        self
    }

    /// Drive the player with a custom decision tree.
    pub fn player_tree(mut self, tree: DecisionTree) -> Self {
        self.player_tree = Some(tree);
        self
    }

    /// Tree for the `json_tree` monster brain.
    pub fn json_tree(mut self, tree: JsonTree) -> Self {
        self.json_tree = Some(tree);
        self
    }

    /// Use a custom monster brain instead of `config.monster.brain`.
    pub fn monster_brain(mut self, brain: Box<dyn MonsterBrain>) -> Self {
        self.brain = Some(brain);
        self
    }

    /// Validate inputs, build both controllers, pick the player's first
    /// waypoint and return a ready-to-run [`Session`].
    pub fn build(self) -> AgentResult<Session<P>> {
        let mut config = self.config;
        if self.graph.is_empty() {
            return Err(AgentError::EmptyGraph);
        }
        let clock = FrameClock::new(config.dt)?;
        if !(config.eat_radius.is_finite() && config.eat_radius > 0.0) {
            return Err(AgentError::Config(format!(
                "eat_radius must be finite and positive, got {}",
                config.eat_radius
            )));
        }

        // ── Start positions ───────────────────────────────────────────────
        let last = NodeId((self.graph.node_count() - 1) as u32);
        let player_start = self.player_start.unwrap_or_else(|| self.graph.position(NodeId(0)));
        let monster_start = self.monster_start.unwrap_or_else(|| self.graph.position(last));
        let walls = self.walls.unwrap_or_else(WallSet::empty);
        for (who, p) in [("player", player_start), ("monster", monster_start)] {
            if !p.is_finite() {
                return Err(AgentError::Config(format!("{who} start {p} is not finite")));
            }
            if walls.is_blocked(p) {
                return Err(AgentError::Config(format!("{who} start {p} is inside a wall")));
            }
        }
        config.monster.tree.monster_start = monster_start;
        config.monster.tree.player_start = player_start;

        // ── Monster brain ─────────────────────────────────────────────────
        let brain: Box<dyn MonsterBrain> = match (self.brain, config.monster.brain) {
            (Some(custom), _) => custom,
            (None, BrainKind::JsonTree) => {
                let tree = self.json_tree.ok_or_else(|| {
                    AgentError::Config("monster brain `json_tree` needs a JSON decision tree".into())
                })?;
                Box::new(JsonTreeController::new(tree, &config.monster.json))
            }
            (None, kind) => {
                if self.json_tree.is_some() {
                    warn!(?kind, "JSON decision tree ignored by this monster brain");
                }
                Box::new(MonsterController::from_config(kind, &config.monster.tree)?)
            }
        };

        // ── Player controller ─────────────────────────────────────────────
        let player = Kinematic::at(player_start);
        let rng = AgentRng::new(config.seed, PLAYER);
        let mut player_ctrl = match self.player_tree {
            Some(tree) => WaypointController::with_tree(tree, &config.player, rng),
            None => WaypointController::new(&config.player, rng),
        };
        let nav = NavContext { graph: &self.graph, walls: &walls, pathfinder: &self.pathfinder };
        player_ctrl.initialize(&player, nav);

        debug!(
            nodes = self.graph.node_count(),
            links = self.graph.link_count(),
            walls = walls.len(),
            brain = brain.name(),
            seed = config.seed,
            "session built"
        );

        Ok(Session {
            monster_rng: AgentRng::new(config.seed, MONSTER),
            config,
            clock,
            graph:       self.graph,
            walls,
            pathfinder:  self.pathfinder,
            player,
            monster:     Kinematic::at(monster_start),
            player_ctrl,
            brain,
            reset_epoch: 0,
            last_action: LastAction::None,
        })
    }
}

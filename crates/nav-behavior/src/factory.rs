//! Ready-made monster trees.

use nav_core::Vec2;

use crate::{
    BehaviorError, BehaviorResult, BtNode, ChaseConfig, ChasePlayerTask, GraphWanderConfig,
    GraphWanderTask, IdleConfig, IdleTask, RandomSelector, ResetTask, Selector, Sequence,
};

/// Everything the monster trees are parameterised by.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonsterTreeConfig {
    /// Where a reset puts the monster.  Sessions fill this in from the
    /// monster's initial position.
    pub monster_start: Vec2,
    /// Where a reset puts the player.
    pub player_start:  Vec2,
    pub chase:         ChaseConfig,
    pub wander:        GraphWanderConfig,
    pub idle:          IdleConfig,
}

impl Default for MonsterTreeConfig {
    fn default() -> Self {
        Self {
            monster_start: Vec2::ZERO,
            player_start:  Vec2::ZERO,
            chase:         ChaseConfig::default(),
            wander:        GraphWanderConfig::default(),
            idle:          IdleConfig::default(),
        }
    }
}

impl MonsterTreeConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        let c = &self.chase;
        if !(c.path_range > 0.0 && c.aggro_range > 0.0) {
            return Err(BehaviorError::Config("chase ranges must be positive".into()));
        }
        if c.path_range > c.aggro_range {
            return Err(BehaviorError::Config(format!(
                "path_range ({}) exceeds aggro_range ({})",
                c.path_range, c.aggro_range
            )));
        }
        if self.wander.legs == Some(0) {
            return Err(BehaviorError::Config("wander legs must be at least 1".into()));
        }
        if !(self.idle.time_to_stop > 0.0) {
            return Err(BehaviorError::Config("idle time_to_stop must be positive".into()));
        }
        Ok(())
    }

    fn catch_and_reset(&self) -> Box<dyn BtNode> {
        Box::new(Sequence::new(vec![
            Box::new(ChasePlayerTask::new(self.chase.clone())),
            Box::new(ResetTask::new(self.monster_start, self.player_start)),
        ]))
    }
}

/// `Selector[Sequence[Chase, Reset], GraphWander]`.
pub fn monster_tree(config: &MonsterTreeConfig) -> BehaviorResult<Box<dyn BtNode>> {
    config.validate()?;
    Ok(Box::new(Selector::new(vec![
        config.catch_and_reset(),
        Box::new(GraphWanderTask::new(config.wander.clone())),
    ])))
}

/// `Selector[Sequence[Chase, Reset], RandomSelector[GraphWander(1 leg), Idle]]`.
pub fn roaming_monster_tree(config: &MonsterTreeConfig) -> BehaviorResult<Box<dyn BtNode>> {
    config.validate()?;
    let one_leg = GraphWanderConfig { legs: Some(1), ..config.wander.clone() };
    Ok(Box::new(Selector::new(vec![
        config.catch_and_reset(),
        Box::new(RandomSelector::new(vec![
            Box::new(GraphWanderTask::new(one_leg)),
            Box::new(IdleTask::new(config.idle)),
        ])),
    ])))
}

//! Reset leaf: put both agents back at their start positions.

use tracing::debug;

use nav_core::Vec2;

use crate::{BtNode, LastAction, Status, WorldState};

/// Two-tick state machine:
///
/// ```text
/// Idle ──tick: teleport both agents, bump reset_epoch──▶ Done   (Running)
/// Done ──tick──────────────────────────────────────────▶ Idle   (Success)
/// ```
///
/// Both agents are moved within the same tick, so no half-reset state is
/// ever observed between frames.
pub struct ResetTask {
    monster_start: Vec2,
    player_start:  Vec2,
    done:          bool,
}

impl ResetTask {
    pub fn new(monster_start: Vec2, player_start: Vec2) -> Self {
        Self { monster_start, player_start, done: false }
    }
}

impl BtNode for ResetTask {
    fn tick(&mut self, world: &mut WorldState<'_>, _dt: f32) -> Status {
        world.last_action = LastAction::Reset;
        if self.done {
            self.done = false;
            return Status::Success;
        }
        world.monster.reset_to(self.monster_start);
        world.player.reset_to(self.player_start);
        world.reset_epoch += 1;
        self.done = true;
        debug!(epoch = world.reset_epoch, "agents reset to start positions");
        Status::Running
    }

    fn name(&self) -> &'static str {
        "reset"
    }
}

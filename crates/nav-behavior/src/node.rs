//! The `BtNode` trait: one tick of one node.

use crate::{Status, WorldState};

/// A behavior-tree node.
///
/// Nodes keep their own progress state between ticks (composite cursors,
/// cached paths, done flags), hence `&mut self`.  A tree is owned by exactly
/// one controller and ticked at most once per frame.
pub trait BtNode: Send {
    fn tick(&mut self, world: &mut WorldState<'_>, dt: f32) -> Status;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

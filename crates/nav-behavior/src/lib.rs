//! `nav-behavior` — behavior-tree engine and monster leaf tasks.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`status`]    | `Status` (Success / Failure / Running), `LastAction` label    |
//! | [`world`]     | `WorldState<'a>` — per-tick mutable view of both agents        |
//! | [`node`]      | `BtNode` trait                                                 |
//! | [`composite`] | `Sequence`, `Selector` (resumable cursors), `RandomSelector`  |
//! | [`chase`]     | `ChasePlayerTask`, `ChaseConfig`                               |
//! | [`reset`]     | `ResetTask`                                                    |
//! | [`roam`]      | `GraphWanderTask`, `IdleTask` and their configs                |
//! | [`factory`]   | `monster_tree`, `roaming_monster_tree`, `MonsterTreeConfig`   |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Tick model
//!
//! The owning controller builds a [`WorldState`] and ticks the root once per
//! frame.  Leaves act by mutating the kinematic state in the world directly
//! (integrating steering, teleporting on reset); `Failure` is a logical
//! outcome and never an error.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the task configs.       |

pub mod chase;
pub mod composite;
pub mod error;
pub mod factory;
pub mod node;
pub mod reset;
pub mod roam;
pub mod status;
pub mod world;

#[cfg(test)]
mod tests;

pub use chase::{ChaseConfig, ChasePlayerTask};
pub use composite::{Children, RandomSelector, Selector, Sequence};
pub use error::{BehaviorError, BehaviorResult};
pub use factory::{MonsterTreeConfig, monster_tree, roaming_monster_tree};
pub use node::BtNode;
pub use reset::ResetTask;
pub use roam::{GraphWanderConfig, GraphWanderTask, IdleConfig, IdleTask};
pub use status::{LastAction, Status};
pub use world::WorldState;

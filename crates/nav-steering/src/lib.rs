//! `nav-steering` — steering control laws and path following.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`arrive`] | `Arrive`, `ArriveConfig`, `target_at`                        |
//! | [`align`]  | `Align`, `AlignConfig`                                       |
//! | [`wander`] | `Wander`, `WanderConfig`                                     |
//! | [`flee`]   | `Flee`, `FleeConfig`                                         |
//! | [`follow`] | `PathFollower` — path + cursor, waypoint advancement         |
//!
//! # Contract
//!
//! Every law maps the agent's own [`Kinematic`][nav_core::Kinematic] (and a
//! target) to a bounded [`SteeringOutput`][nav_core::SteeringOutput].  None of
//! them move the agent: the owner integrates once per tick after choosing or
//! combining outputs.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the config structs.     |

pub mod align;
pub mod arrive;
pub mod flee;
pub mod follow;
pub mod wander;


pub use align::{Align, AlignConfig};
pub use arrive::{Arrive, ArriveConfig, target_at};
pub use flee::{Flee, FleeConfig};
pub use follow::PathFollower;
pub use wander::{Wander, WanderConfig};

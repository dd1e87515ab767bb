//! `nav-agent` — controllers and the two-agent session loop.
//!
//! # Controllers
//!
//! | Type                     | Drives   | Decision layer                         |
//! |--------------------------|----------|----------------------------------------|
//! | [`WaypointController`]   | player   | binary decision tree + hysteresis      |
//! | [`MonsterController`]    | monster  | behavior tree (chase / reset / wander) |
//! | [`JsonTreeController`]   | monster  | JSON N-way tree over sensed features   |
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.total_frames:
//!   ① Player   — sense → decide → steer → integrate → wall rollback
//!   ② Monster  — brain ticks a WorldState over both agents
//!                (wall rollback unless the tick reset the agents)
//!   ③ Reset    — a new reset epoch invalidates the player's route
//!   ④ Sample   — room / dist / aggro / wall / action → SessionObserver
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | `SessionConfig` and every nested config become (de)serializable. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_agent::{NoopObserver, SessionBuilder, SessionConfig};
//!
//! let mut session = SessionBuilder::new(SessionConfig::default(), graph)
//!     .walls(walls)
//!     .build()?;
//! let summary = session.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod monster;
pub mod observer;
pub mod sensing;
pub mod session;
pub mod waypoint;


pub use builder::SessionBuilder;
pub use error::{AgentError, AgentResult};
pub use monster::{
    BrainKind, JsonControllerConfig, JsonTreeController, MonsterBrain, MonsterConfig,
    MonsterController,
};
pub use observer::{NoopObserver, SessionObserver};
pub use sensing::{FeatureConfig, RoomLayout, sense_waypoint, wall_ahead};
pub use session::{MONSTER, PLAYER, Sample, Session, SessionConfig, SessionSummary};
pub use waypoint::{NavContext, PlayerConfig, PlayerTree, WaypointController};

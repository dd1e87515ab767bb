//! Deterministic per-agent RNG.
//!
//! # Determinism strategy
//!
//! Every stochastic choice in the engine (random patrol waypoint, wander
//! jitter, random-selector pick) draws from an explicitly passed `AgentRng`.
//! Each agent's generator is a `SmallRng` seeded by:
//!
//!   seed = session_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.  Two
//! sessions built with the same seed make identical choices.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, NodeId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-agent deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the session seed and an agent ID.
    pub fn new(session_seed: u64, agent: AgentId) -> Self {
        let seed = session_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Difference of two uniform samples in `[0, 1)`: a value in (−1, 1) that
    /// is more likely to be near zero.  Drives wander jitter.
    #[inline]
    pub fn binomial(&mut self) -> f32 {
        self.0.r#gen::<f32>() - self.0.r#gen::<f32>()
    }

    /// Uniform index in `0..len`; `None` when `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }

    /// Uniform node of a graph with `node_count` nodes.
    #[inline]
    pub fn node(&mut self, node_count: usize) -> Option<NodeId> {
        self.index(node_count).map(|i| NodeId(i as u32))
    }
}

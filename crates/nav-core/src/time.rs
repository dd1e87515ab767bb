//! Frame counting.
//!
//! # Design
//!
//! The engine is cooperative-by-frame: one `tick(dt)` per agent per frame.
//! `Frame` is the monotonically increasing frame counter and `FrameClock`
//! pairs it with the (fixed) timestep so a session can report elapsed time:
//!
//!   elapsed_secs = frame * dt
//!
//! Controllers never read the clock; they only receive `dt`.

use std::fmt;

use crate::{NavError, NavResult};

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Return the frame `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Frame {
        Frame(self.0 + n)
    }
}

impl std::ops::Sub for Frame {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Frame) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Fixed-timestep frame clock.
#[derive(Clone, Debug)]
pub struct FrameClock {
    /// Seconds per frame.
    dt: f32,
    /// The current frame, advanced by [`FrameClock::advance`].
    pub current: Frame,
}

impl FrameClock {
    /// Create a clock at frame 0.  `dt` must be finite and positive.
    pub fn new(dt: f32) -> NavResult<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(NavError::InvalidTimestep(dt));
        }
        Ok(Self { dt, current: Frame::ZERO })
    }

    #[inline]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Advance the clock by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current.offset(1);
    }

    /// Elapsed simulated seconds since frame 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current.0 as f64 * self.dt as f64
    }

    /// How many frames span `secs` seconds (rounded up).
    #[inline]
    pub fn frames_for_secs(&self, secs: f32) -> u64 {
        (secs / self.dt).ceil().max(0.0) as u64
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} s)", self.current, self.elapsed_secs())
    }
}

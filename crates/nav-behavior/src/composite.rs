//! Composite nodes: [`Sequence`], [`Selector`], [`RandomSelector`].
//!
//! # Resumable cursors
//!
//! Sequence and Selector are incremental state machines.  Each keeps the index
//! of the child currently in progress; a child that reports `Running` is
//! ticked again first on the next frame instead of restarting from child 0.
//! A multi-tick leaf (steering toward a waypoint) therefore keeps its
//! progress across frames.

use tracing::trace;

use crate::{BtNode, Status, WorldState};

pub type Children = Vec<Box<dyn BtNode>>;

// ── Sequence ──────────────────────────────────────────────────────────────────

/// Runs children left to right while they succeed.
///
/// | Child result | Cursor            | Reported  |
/// |--------------|-------------------|-----------|
/// | `Running`    | kept              | `Running` |
/// | `Failure`    | reset to 0        | `Failure` |
/// | `Success`    | advanced (next child ticked now); reset to 0 past the end | `Success` after the last child |
pub struct Sequence {
    children: Children,
    cursor:   usize,
}

impl Sequence {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Children) -> Self {
        assert!(!children.is_empty(), "Sequence must have at least one child");
        Self { children, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl BtNode for Sequence {
    fn tick(&mut self, world: &mut WorldState<'_>, dt: f32) -> Status {
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(world, dt) {
                Status::Running => return Status::Running,
                Status::Failure => {
                    self.cursor = 0;
                    return Status::Failure;
                }
                Status::Success => self.cursor += 1,
            }
        }
        self.cursor = 0;
        Status::Success
    }

    fn name(&self) -> &'static str {
        "sequence"
    }
}

// ── Selector ──────────────────────────────────────────────────────────────────

/// Tries children left to right until one does not fail.
///
/// | Child result | Cursor            | Reported  |
/// |--------------|-------------------|-----------|
/// | `Running`    | kept              | `Running` |
/// | `Success`    | reset to 0        | `Success` |
/// | `Failure`    | advanced (next child ticked now); reset to 0 past the end | `Failure` after the last child |
pub struct Selector {
    children: Children,
    cursor:   usize,
}

impl Selector {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Children) -> Self {
        assert!(!children.is_empty(), "Selector must have at least one child");
        Self { children, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl BtNode for Selector {
    fn tick(&mut self, world: &mut WorldState<'_>, dt: f32) -> Status {
        while self.cursor < self.children.len() {
            match self.children[self.cursor].tick(world, dt) {
                Status::Running => return Status::Running,
                Status::Success => {
                    self.cursor = 0;
                    return Status::Success;
                }
                Status::Failure => self.cursor += 1,
            }
        }
        self.cursor = 0;
        Status::Failure
    }

    fn name(&self) -> &'static str {
        "selector"
    }
}

// ── RandomSelector ────────────────────────────────────────────────────────────

/// Picks one child uniformly (from the world's RNG) and sticks with it while
/// it reports `Running`.  Reports whatever the chosen child reports; the
/// choice is cleared once that is not `Running`.
pub struct RandomSelector {
    children: Children,
    chosen:   Option<usize>,
}

impl RandomSelector {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Children) -> Self {
        assert!(!children.is_empty(), "RandomSelector must have at least one child");
        Self { children, chosen: None }
    }

    pub fn chosen(&self) -> Option<usize> {
        self.chosen
    }
}

impl BtNode for RandomSelector {
    fn tick(&mut self, world: &mut WorldState<'_>, dt: f32) -> Status {
        let index = match self.chosen {
            Some(i) => i,
            None => {
                let i = world.rng.gen_range(0..self.children.len());
                trace!(child = self.children[i].name(), "random selector picked");
                self.chosen = Some(i);
                i
            }
        };
        let status = self.children[index].tick(world, dt);
        if status.is_done() {
            self.chosen = None;
        }
        status
    }

    fn name(&self) -> &'static str {
        "random_selector"
    }
}

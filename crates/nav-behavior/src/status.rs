//! Tick results and the diagnostic last-action label.

use std::fmt;

/// The result of ticking a behavior-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    /// This branch cannot make progress right now.  Never a fault.
    Failure,
    /// Multi-tick work in progress; tick the same node again next frame.
    Running,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// `true` for `Success` or `Failure`.
    #[inline]
    pub fn is_done(self) -> bool {
        !self.is_running()
    }
}

/// Which leaf (or controller action) ran most recently.  Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LastAction {
    #[default]
    None,
    Chase,
    Wander,
    Reset,
    Idle,
    Flee,
    Pathfind,
    PickNewWaypoint,
}

impl LastAction {
    pub fn as_str(self) -> &'static str {
        match self {
            LastAction::None            => "",
            LastAction::Chase           => "chase",
            LastAction::Wander          => "wander",
            LastAction::Reset           => "reset",
            LastAction::Idle            => "idle",
            LastAction::Flee            => "flee",
            LastAction::Pathfind        => "pathfind",
            LastAction::PickNewWaypoint => "pickNewWaypoint",
        }
    }
}

impl fmt::Display for LastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Session observer trait for telemetry and progress reporting.

use nav_core::Frame;

use crate::{Sample, SessionSummary};

/// Callbacks invoked by [`Session::run`][crate::Session::run] at key points of
/// the frame loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — reset counter
///
/// ```rust
/// use nav_agent::SessionObserver;
/// use nav_core::Frame;
///
/// #[derive(Default)]
/// struct Resets(Vec<Frame>);
///
/// impl SessionObserver for Resets {
///     fn on_reset(&mut self, frame: Frame, _resets: u64) {
///         self.0.push(frame);
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called at the very start of each frame, before either agent moves.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called once per frame with the monster's features and the action it
    /// took.  This is the training-data row for the JSON decision tree.
    fn on_sample(&mut self, _sample: &Sample) {}

    /// Called on the frame a reset was observed; `resets` is the running total.
    fn on_reset(&mut self, _frame: Frame, _resets: u64) {}

    /// Called once after the final frame.
    fn on_session_end(&mut self, _summary: &SessionSummary) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Collects every sample in memory.
impl SessionObserver for Vec<Sample> {
    fn on_sample(&mut self, sample: &Sample) {
        self.push(*sample);
    }
}

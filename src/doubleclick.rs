//! Double-click detection for a single control.
//!
//! Clicks are buffered into a group until a quiet period passes with no
//! further click. When the group closes it is evaluated against a threshold
//! (two clicks by default) and cleared for the next round.
//!
//! Each click restarts the quiet timer. A restart is a new tag: the quiet
//! message of the previous timer still arrives, but carries an old tag and
//! is ignored.
//!
//! ```rust
//! use bubbles_stopwatch::doubleclick;
//! use std::time::Duration;
//!
//! let mut detector = doubleclick::new();
//! assert_eq!(detector.quiet_period(), Duration::from_millis(300));
//!
//! let _cmd = detector.click();
//! let _cmd = detector.click();
//! assert_eq!(detector.pending(), 2);
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Quiet period closing a click group.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Clicks a closed group needs to count as a double-click.
pub const DEFAULT_THRESHOLD: usize = 2;

/// Message fired one quiet period after a click.
#[derive(Debug, Clone)]
pub struct QuietMsg {
    /// The identifier of the detector that scheduled this message.
    pub id: i64,
    tag: u64,
}

/// Message emitted by [`Model::update`] when a closed group qualifies.
#[derive(Debug, Clone)]
pub struct DoubleClickMsg {
    /// The identifier of the detector that saw the double-click.
    pub id: i64,
    /// How many clicks the closed group held.
    pub clicks: usize,
}

/// Double-click detector model.
#[derive(Debug, Clone)]
pub struct Model {
    quiet_period: Duration,
    threshold: usize,
    id: i64,
    tag: u64,
    pending: usize,
}

/// Creates a detector with a 300ms quiet period and a threshold of two clicks.
pub fn new() -> Model {
    new_with(DEFAULT_QUIET_PERIOD, DEFAULT_THRESHOLD)
}

/// Creates a detector with a custom quiet period and click threshold.
///
/// A threshold below two is raised to two; a single click is never a
/// double-click.
pub fn new_with(quiet_period: Duration, threshold: usize) -> Model {
    Model {
        quiet_period,
        threshold: threshold.max(DEFAULT_THRESHOLD),
        id: next_id(),
        tag: 0,
        pending: 0,
    }
}

impl Model {
    /// Returns the unique identifier of this detector.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Clicks buffered in the currently open group.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Registers a click and (re)starts the quiet timer.
    pub fn click(&mut self) -> Cmd {
        self.tag += 1;
        self.pending += 1;
        log::trace!("detector {} click {} (tag {})", self.id, self.pending, self.tag);

        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.quiet_period, move |_| Box::new(QuietMsg { id, tag }) as Msg)
    }

    /// Closes the open group if `quiet` belongs to the live quiet timer.
    ///
    /// Returns the group size when it reached the threshold. Quiet messages
    /// from another detector or from a restarted timer change nothing.
    pub fn settle(&mut self, quiet: &QuietMsg) -> Option<usize> {
        if quiet.id != self.id || quiet.tag != self.tag {
            return None;
        }

        let clicks = std::mem::take(&mut self.pending);
        if clicks >= self.threshold {
            log::debug!("detector {} double-click ({} clicks)", self.id, clicks);
            Some(clicks)
        } else {
            None
        }
    }

    /// Drops the open group and invalidates the pending quiet timer.
    pub fn teardown(&mut self) {
        self.tag += 1;
        self.pending = 0;
        log::debug!("detector {} torn down", self.id);
    }

    /// Handles quiet messages, answering a qualifying group with a
    /// [`DoubleClickMsg`] command.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let quiet = msg.downcast_ref::<QuietMsg>()?;
        let clicks = self.settle(quiet)?;

        let id = self.id;
        Some(bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(DoubleClickMsg { id, clicks }) as Msg
        }))
    }

    #[cfg(test)]
    pub(crate) fn live_quiet(&self) -> QuietMsg {
        QuietMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(&msg)
    }

    fn view(&self) -> String {
        format!("{} click(s) pending", self.pending)
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_for(detector: &Model) -> QuietMsg {
        detector.live_quiet()
    }

    #[test]
    fn test_defaults() {
        let detector = new();
        assert_eq!(detector.quiet_period(), Duration::from_millis(300));
        assert_eq!(detector.threshold(), 2);
        assert_eq!(detector.pending(), 0);
    }

    #[test]
    fn test_threshold_floor() {
        let detector = new_with(Duration::from_millis(10), 1);
        assert_eq!(detector.threshold(), 2);
        let detector = new_with(Duration::from_millis(10), 3);
        assert_eq!(detector.threshold(), 3);
    }

    #[test]
    fn test_two_clicks_in_one_window() {
        let mut detector = new();
        let _first = detector.click();
        let stale = quiet_for(&detector);
        let _second = detector.click();

        // The first click's timer was restarted by the second click.
        assert_eq!(detector.settle(&stale), None);
        assert_eq!(detector.pending(), 2);

        assert_eq!(detector.settle(&quiet_for(&detector)), Some(2));
        assert_eq!(detector.pending(), 0);
    }

    #[test]
    fn test_single_click_clears_without_signal() {
        let mut detector = new();
        let _cmd = detector.click();
        assert_eq!(detector.settle(&quiet_for(&detector)), None);
        assert_eq!(detector.pending(), 0);
    }

    #[test]
    fn test_clicks_in_separate_windows() {
        let mut detector = new();

        let _cmd = detector.click();
        assert_eq!(detector.settle(&quiet_for(&detector)), None);

        let _cmd = detector.click();
        assert_eq!(detector.settle(&quiet_for(&detector)), None);
    }

    #[test]
    fn test_group_does_not_retrigger() {
        let mut detector = new();
        let _a = detector.click();
        let _b = detector.click();
        let quiet = quiet_for(&detector);
        assert_eq!(detector.settle(&quiet), Some(2));

        // Same quiet message delivered again: group already closed.
        assert_eq!(detector.settle(&quiet), None);

        // A lone click afterwards forms its own group.
        let _c = detector.click();
        assert_eq!(detector.settle(&quiet_for(&detector)), None);
    }

    #[test]
    fn test_triple_click_counts_once() {
        let mut detector = new();
        for _ in 0..3 {
            let _cmd = detector.click();
        }
        assert_eq!(detector.settle(&quiet_for(&detector)), Some(3));
    }

    #[test]
    fn test_foreign_quiet_is_ignored() {
        let mut detector = new();
        let _a = detector.click();
        let _b = detector.click();
        let foreign = QuietMsg {
            id: detector.id() + 999,
            tag: detector.tag,
        };
        assert_eq!(detector.settle(&foreign), None);
        assert_eq!(detector.pending(), 2);
    }

    #[test]
    fn test_teardown_drops_pending_group() {
        let mut detector = new();
        let _a = detector.click();
        let _b = detector.click();
        let quiet = quiet_for(&detector);

        detector.teardown();
        assert_eq!(detector.pending(), 0);
        assert_eq!(detector.settle(&quiet), None);
    }

    #[test]
    fn test_update_answers_with_command() {
        let mut detector = new();
        let _a = detector.click();
        let _b = detector.click();
        let msg = Box::new(quiet_for(&detector)) as Msg;
        assert!(detector.update(&msg).is_some());

        let _c = detector.click();
        let msg = Box::new(quiet_for(&detector)) as Msg;
        assert!(detector.update(&msg).is_none());
    }

    #[test]
    fn test_standalone_model_view() {
        let (mut detector, cmd) = <Model as BubbleTeaModel>::init();
        assert!(cmd.is_none());
        assert_eq!(BubbleTeaModel::view(&detector), "0 click(s) pending");

        let _a = detector.click();
        let _b = detector.click();
        assert_eq!(BubbleTeaModel::view(&detector), "2 click(s) pending");

        let msg = Box::new(quiet_for(&detector)) as Msg;
        assert!(BubbleTeaModel::update(&mut detector, msg).is_some());
        assert_eq!(BubbleTeaModel::view(&detector), "0 click(s) pending");
    }
}

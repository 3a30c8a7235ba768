//! Elapsed-time engine for the stopwatch component.
//!
//! The clock counts whole seconds while running and renders them as a
//! `HH:mm:ss` string. Every running period is identified by a tag that is
//! captured into the tick command scheduling it; stopping, restarting or
//! tearing the clock down bumps the tag so ticks from a superseded period
//! are rejected when they arrive.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbles_stopwatch::clock;
//!
//! let mut clock = clock::new();
//! assert_eq!(clock.view(), "00:00:00");
//!
//! // Starting returns the first tick command
//! let cmd = clock.toggle();
//! assert!(cmd.is_some());
//! assert!(clock.running());
//!
//! clock.reset();
//! assert!(!clock.running());
//! assert_eq!(clock.view(), "00:00:00");
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for clock instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// The default tick interval: one real-time second.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Formats a number of seconds as a zero-padded `HH:mm:ss` string.
///
/// The value is read as a time of day in UTC, so it wraps around after
/// 24 hours instead of growing a day field.
///
/// ```rust
/// use bubbles_stopwatch::clock::format_hms;
///
/// assert_eq!(format_hms(0), "00:00:00");
/// assert_eq!(format_hms(5), "00:00:05");
/// assert_eq!(format_hms(3_723), "01:02:03");
/// assert_eq!(format_hms(86_401), "00:00:01");
/// ```
pub fn format_hms(secs: u64) -> String {
    let secs = secs % SECONDS_PER_DAY;
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Message delivered once per interval while a clock is running.
///
/// Ticks are only accepted by the clock that scheduled them, and only for
/// the running period they were scheduled in.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The identifier of the clock that scheduled this tick.
    pub id: i64,
    tag: u64,
}

/// Stopwatch clock model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between two ticks. Each accepted tick adds one second to the
    /// elapsed counter regardless of this value.
    pub interval: Duration,

    id: i64,
    tag: u64,
    running: bool,
    elapsed_secs: u64,
    display: String,
}

/// Creates a stopped clock ticking once per second.
pub fn new() -> Model {
    new_with_interval(DEFAULT_INTERVAL)
}

/// Creates a stopped clock with a custom tick interval.
pub fn new_with_interval(interval: Duration) -> Model {
    Model {
        interval,
        id: next_id(),
        tag: 0,
        running: false,
        elapsed_secs: 0,
        display: format_hms(0),
    }
}

impl Model {
    /// Returns the unique identifier of this clock.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether a running period is active.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Whole seconds counted so far.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Whole seconds counted so far, as a `Duration`.
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs(self.elapsed_secs)
    }

    /// Flips the running state.
    ///
    /// Starting returns the tick command of the new period. Stopping cancels
    /// the current period and returns `None`.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.running {
            self.cancel();
            None
        } else {
            Some(self.begin())
        }
    }

    /// Starts the clock if it is stopped.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.running {
            return None;
        }
        Some(self.begin())
    }

    /// Stops the clock if it is running. Returns whether anything was stopped.
    pub fn stop(&mut self) -> bool {
        self.cancel()
    }

    /// Stops the clock and zeroes the elapsed time and display.
    pub fn reset(&mut self) {
        self.cancel();
        self.elapsed_secs = 0;
        self.display = format_hms(0);
        log::debug!("clock {} reset", self.id);
    }

    /// Cancels any active period. No tick scheduled before this call is
    /// accepted afterwards.
    pub fn teardown(&mut self) -> bool {
        let cancelled = self.cancel();
        // Invalidate the current tag even when already stopped.
        self.tag += 1;
        log::debug!("clock {} torn down", self.id);
        cancelled
    }

    fn begin(&mut self) -> Cmd {
        self.tag += 1;
        self.running = true;
        log::debug!("clock {} started, period {}", self.id, self.tag);
        self.tick()
    }

    // Returns false when there was no active period to cancel.
    fn cancel(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.tag += 1;
        self.running = false;
        log::debug!("clock {} stopped at {}s", self.id, self.elapsed_secs);
        true
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;

        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Handles tick messages addressed to this clock.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;

        if tick_msg.id != self.id {
            return None;
        }

        // A tick from a stopped or superseded period.
        if !self.running || tick_msg.tag != self.tag {
            log::trace!(
                "clock {} dropped stale tick (tag {}, live {})",
                self.id,
                tick_msg.tag,
                self.tag
            );
            return None;
        }

        self.elapsed_secs += 1;
        self.display = format_hms(self.elapsed_secs);

        Some(self.tick())
    }

    /// Renders the elapsed time as `HH:mm:ss`.
    pub fn view(&self) -> String {
        self.display.clone()
    }

    #[cfg(test)]
    pub(crate) fn live_tick(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = new();
        let cmd = model.start();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(&msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

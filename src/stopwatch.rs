//! Stopwatch component for Bubble Tea applications.
//!
//! The stopwatch combines a [`clock`](crate::clock) counting elapsed seconds
//! with a [`doubleclick`](crate::doubleclick) detector watching the "wait"
//! control. It exposes three controls:
//!
//! - **toggle** starts or stops timing,
//! - **wait** registers a click; two clicks within the quiet period pause a
//!   running stopwatch (they never start a stopped one),
//! - **reset** stops timing and zeroes the display.
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use bubbles_stopwatch::stopwatch::{self, Model as Stopwatch};
//!
//! struct App {
//!     stopwatch: Stopwatch,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { stopwatch: stopwatch::new(&[]) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Key presses, ticks and quiet-period messages are all handled here
//!         self.stopwatch.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.stopwatch.view()
//!     }
//! }
//! ```
//!
//! # Programmatic control
//!
//! ```rust
//! use bubbles_stopwatch::stopwatch;
//!
//! let mut sw = stopwatch::new(&[]);
//! let _tick = sw.toggle();
//! assert!(sw.running());
//!
//! sw.reset();
//! assert!(!sw.running());
//! assert_eq!(sw.time(), "00:00:00");
//! ```

use crate::clock::{self, TickMsg};
use crate::doubleclick::{self, QuietMsg};
use crate::options::{Config, StopwatchOption};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// Stopwatch widget model.
#[derive(Debug)]
pub struct Model {
    /// Style of the elapsed time.
    pub time_style: Style,
    /// Style of the help line.
    pub help_style: Style,
    /// Whether `view` renders the help line.
    pub show_help: bool,

    config: Config,
    clock: clock::Model,
    detector: doubleclick::Model,
    torn_down: bool,
}

/// Creates a stopped stopwatch configured by `opts`.
pub fn new(opts: &[StopwatchOption]) -> Model {
    Model::new_with_config(Config::from_options(opts))
}

impl Model {
    /// Creates a stopped stopwatch from an already resolved [`Config`].
    pub fn new_with_config(config: Config) -> Self {
        let clock = clock::new_with_interval(config.tick_interval);
        let detector = doubleclick::new_with(config.quiet_period, config.click_threshold);

        Self {
            time_style: Style::new().bold(true),
            help_style: Style::new().faint(true),
            show_help: true,
            config,
            clock,
            detector,
            torn_down: false,
        }
    }

    /// The settings this stopwatch was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the clock is currently counting.
    pub fn running(&self) -> bool {
        self.clock.running()
    }

    /// Whole seconds counted so far.
    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    /// Whole seconds counted so far, as a `Duration`.
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// The elapsed time as plain `HH:mm:ss`, without styling.
    pub fn time(&self) -> String {
        self.clock.view()
    }

    /// Identifier of the clock whose [`TickMsg`]s this stopwatch accepts.
    pub fn clock_id(&self) -> i64 {
        self.clock.id()
    }

    /// Identifier of the detector whose [`QuietMsg`]s this stopwatch accepts.
    pub fn detector_id(&self) -> i64 {
        self.detector.id()
    }

    /// Whether [`Model::teardown`] has run.
    pub fn torn_down(&self) -> bool {
        self.torn_down
    }

    /// Starts or stops timing. Starting returns the first tick command.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.torn_down {
            return None;
        }
        self.clock.toggle()
    }

    /// Registers a click on the wait control and returns its quiet-period command.
    pub fn wait_click(&mut self) -> Option<Cmd> {
        if self.torn_down {
            return None;
        }
        Some(self.detector.click())
    }

    /// Stops timing if running, then zeroes the elapsed time.
    pub fn reset(&mut self) {
        self.clock.reset();
    }

    /// Cancels the tick and quiet timers. Every message delivered afterwards,
    /// including ones scheduled before this call, is ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.clock.teardown();
        self.detector.teardown();
    }

    fn pause_on_double_click(&mut self, clicks: usize) {
        if !self.clock.running() {
            log::debug!("double-click ({} clicks) while stopped, ignored", clicks);
            return;
        }
        self.clock.stop();
        log::debug!(
            "double-click ({} clicks) paused at {}",
            clicks,
            self.clock.view()
        );
    }

    /// Handles key presses, ticks and quiet-period messages.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if self.torn_down {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let keys = &self.config.keys;
            if keys.toggle.matches(key_msg) {
                return self.toggle();
            }
            if keys.wait.matches(key_msg) {
                return self.wait_click();
            }
            if keys.reset.matches(key_msg) {
                self.reset();
            }
            return None;
        }

        if msg.downcast_ref::<TickMsg>().is_some() {
            return self.clock.update(&msg);
        }

        if let Some(quiet) = msg.downcast_ref::<QuietMsg>() {
            if let Some(clicks) = self.detector.settle(quiet) {
                self.pause_on_double_click(clicks);
            }
        }

        None
    }

    /// Renders the time, a status marker and, optionally, the help line.
    pub fn view(&self) -> String {
        let status = if self.clock.running() {
            "running"
        } else {
            "stopped"
        };
        let mut out = format!(
            "{} {}",
            self.time_style.clone().inline(true).render(&self.clock.view()),
            status
        );

        if self.show_help {
            out.push('\n');
            out.push_str(
                &self
                    .help_style
                    .clone()
                    .inline(true)
                    .render(&self.config.keys.help_line()),
            );
        }

        out
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(&[]), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

//! # bubbles-stopwatch
//!
//! A stopwatch component for [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs)
//! applications: start/stop timing, an `HH:mm:ss` elapsed-time display, a reset
//! control, and a "wait" control whose double-click pauses a running stopwatch.
//!
//! ## Overview
//!
//! The component follows the Elm Architecture used throughout bubbletea-rs,
//! with `update()` and `view()` methods and commands for everything that
//! happens later in time. It is built from two smaller models:
//!
//! - [`clock`]: counts elapsed seconds on a 1 second tick and formats them.
//! - [`doubleclick`]: groups clicks with a 300ms quiet period and reports
//!   groups of two or more clicks.
//!
//! [`stopwatch`] wires them together and maps key presses onto the controls.
//!
//! ## Cancellation
//!
//! A command handed to the runtime cannot be withdrawn. Each model instead
//! tags every scheduled message with the id of the instance and the tag of
//! the period it belongs to. Stopping, restarting or tearing down bumps the
//! tag, and messages with an outdated tag are dropped on arrival.
//!
//! ## Example
//!
//! ```rust
//! use bubbles_stopwatch::prelude::*;
//! use std::time::Duration;
//!
//! let mut sw = stopwatch_new(&[with_quiet_period(Duration::from_millis(250))]);
//! let _first_tick = sw.toggle();
//! assert!(sw.running());
//! assert_eq!(sw.time(), "00:00:00");
//!
//! sw.reset();
//! assert!(!sw.running());
//! ```

pub mod clock;
pub mod doubleclick;
pub mod key;
pub mod options;
pub mod stopwatch;

pub use clock::{format_hms, Model as Clock, TickMsg as ClockTickMsg};
pub use doubleclick::{DoubleClickMsg, Model as DoubleClick, QuietMsg};
pub use key::{Binding, KeyMap};
pub use options::{
    with_click_threshold, with_key_map, with_quiet_period, with_tick_interval, Config,
    StopwatchOption,
};
pub use stopwatch::{new as stopwatch_new, Model as Stopwatch};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbles_stopwatch::prelude::*;
///
/// let sw: Stopwatch = stopwatch_new(&[]);
/// assert_eq!(format_hms(sw.elapsed_secs()), "00:00:00");
/// ```
pub mod prelude {
    pub use crate::clock::{format_hms, Model as Clock, TickMsg as ClockTickMsg};
    pub use crate::doubleclick::{DoubleClickMsg, Model as DoubleClick, QuietMsg};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::options::{
        with_click_threshold, with_key_map, with_quiet_period, with_tick_interval, Config,
        StopwatchOption,
    };
    pub use crate::stopwatch::{new as stopwatch_new, Model as Stopwatch};
}

//! Configuration options for a stopwatch instance.
//!
//! Options follow the functional-option style: build a slice of
//! [`StopwatchOption`] values and pass it to [`crate::stopwatch::new`].
//!
//! ```rust
//! use bubbles_stopwatch::options::{with_quiet_period, with_tick_interval};
//! use bubbles_stopwatch::stopwatch;
//! use std::time::Duration;
//!
//! let sw = stopwatch::new(&[
//!     with_tick_interval(Duration::from_millis(100)),
//!     with_quiet_period(Duration::from_millis(250)),
//! ]);
//! assert_eq!(sw.config().quiet_period, Duration::from_millis(250));
//! ```

use crate::clock::DEFAULT_INTERVAL;
use crate::doubleclick::{DEFAULT_QUIET_PERIOD, DEFAULT_THRESHOLD};
use crate::key::KeyMap;
use std::time::Duration;

/// Resolved settings of a stopwatch.
#[derive(Debug, Clone)]
pub struct Config {
    /// Real time between two ticks of the clock.
    pub tick_interval: Duration,
    /// Quiet period closing a group of wait clicks.
    pub quiet_period: Duration,
    /// Clicks a closed group needs to pause the clock.
    pub click_threshold: usize,
    pub keys: KeyMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_INTERVAL,
            quiet_period: DEFAULT_QUIET_PERIOD,
            click_threshold: DEFAULT_THRESHOLD,
            keys: KeyMap::default(),
        }
    }
}

/// A single configuration change applied when building a stopwatch.
#[derive(Debug, Clone)]
pub enum StopwatchOption {
    TickInterval(Duration),
    QuietPeriod(Duration),
    ClickThreshold(usize),
    Keys(Box<KeyMap>),
}

impl StopwatchOption {
    pub(crate) fn apply(&self, config: &mut Config) {
        match self {
            StopwatchOption::TickInterval(d) => config.tick_interval = *d,
            StopwatchOption::QuietPeriod(d) => config.quiet_period = *d,
            StopwatchOption::ClickThreshold(n) => config.click_threshold = *n,
            StopwatchOption::Keys(keys) => config.keys = keys.as_ref().clone(),
        }
    }
}

impl Config {
    /// Builds a config from defaults and the given options, later options winning.
    pub fn from_options(opts: &[StopwatchOption]) -> Self {
        let mut config = Self::default();
        for opt in opts {
            opt.apply(&mut config);
        }
        config
    }
}

pub fn with_tick_interval(interval: Duration) -> StopwatchOption {
    StopwatchOption::TickInterval(interval)
}

pub fn with_quiet_period(period: Duration) -> StopwatchOption {
    StopwatchOption::QuietPeriod(period)
}

pub fn with_click_threshold(threshold: usize) -> StopwatchOption {
    StopwatchOption::ClickThreshold(threshold)
}

pub fn with_key_map(keys: KeyMap) -> StopwatchOption {
    StopwatchOption::Keys(Box::new(keys))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_options(&[]);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.quiet_period, Duration::from_millis(300));
        assert_eq!(config.click_threshold, 2);
    }

    #[test]
    fn test_later_option_wins() {
        let config = Config::from_options(&[
            with_quiet_period(Duration::from_millis(100)),
            with_click_threshold(3),
            with_quiet_period(Duration::from_millis(200)),
        ]);
        assert_eq!(config.quiet_period, Duration::from_millis(200));
        assert_eq!(config.click_threshold, 3);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }
}

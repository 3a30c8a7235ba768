//! Key bindings for the stopwatch controls.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A set of keys bound to one action, with the text shown in help.
#[derive(Debug, Clone)]
pub struct Binding {
    pub keys: Vec<KeyCode>,
    pub help: String,
    pub description: String,
}

impl Binding {
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Reports whether `key_msg` triggers this binding. Presses held with
    /// Ctrl or Alt belong to the host application and never match.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        if key_msg
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        self.keys.contains(&key_msg.key)
    }
}

/// Keys driving the three stopwatch controls.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub toggle: Binding,
    pub wait: Binding,
    pub reset: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            toggle: Binding::new(vec![KeyCode::Char(' '), KeyCode::Char('s')])
                .with_help("space")
                .with_description("start/stop"),
            wait: Binding::new(vec![KeyCode::Char('w')])
                .with_help("w")
                .with_description("wait (double to pause)"),
            reset: Binding::new(vec![KeyCode::Char('r')])
                .with_help("r")
                .with_description("reset"),
        }
    }
}

impl KeyMap {
    pub fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle, &self.wait, &self.reset]
    }

    /// Renders the bindings as a single help line, e.g. `space start/stop • r reset`.
    pub fn help_line(&self) -> String {
        self.short_help()
            .iter()
            .filter(|b| !b.help.is_empty())
            .map(|b| format!("{} {}", b.help, b.description))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(c: char) -> KeyMsg {
        KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_default_bindings() {
        let keys = KeyMap::default();
        assert!(keys.toggle.matches(&press(' ')));
        assert!(keys.toggle.matches(&press('s')));
        assert!(keys.wait.matches(&press('w')));
        assert!(keys.reset.matches(&press('r')));
        assert!(!keys.reset.matches(&press('w')));
    }

    #[test]
    fn test_modified_presses_do_not_match() {
        let keys = KeyMap::default();
        let ctrl_r = KeyMsg {
            key: KeyCode::Char('r'),
            modifiers: KeyModifiers::CONTROL,
        };
        let alt_w = KeyMsg {
            key: KeyCode::Char('w'),
            modifiers: KeyModifiers::ALT,
        };
        let shift_r = KeyMsg {
            key: KeyCode::Char('r'),
            modifiers: KeyModifiers::SHIFT,
        };
        assert!(!keys.reset.matches(&ctrl_r));
        assert!(!keys.wait.matches(&alt_w));
        assert!(keys.reset.matches(&shift_r));
    }

    #[test]
    fn test_help_line() {
        let keys = KeyMap::default();
        assert_eq!(
            keys.help_line(),
            "space start/stop • w wait (double to pause) • r reset"
        );
    }

    #[test]
    fn test_help_line_skips_unlabelled() {
        let mut keys = KeyMap::default();
        keys.wait = Binding::new(vec![KeyCode::Char('w')]);
        assert_eq!(keys.help_line(), "space start/stop • r reset");
    }
}

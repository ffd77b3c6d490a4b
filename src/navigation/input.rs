// Key mapping from terminal key events to navigation inputs

use anyhow::{Result, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Input understood by the focus navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavInput {
    Up,
    Down,
    Left,
    Right,
    Activate,
    Cancel,
}

/// Movement along the region list.
///
/// Up/Left and Down/Right collapse onto the same list axis; regions are
/// not navigated spatially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl NavInput {
    pub fn step(self) -> Option<Step> {
        match self {
            NavInput::Up | NavInput::Left => Some(Step::Previous),
            NavInput::Down | NavInput::Right => Some(Step::Next),
            NavInput::Activate | NavInput::Cancel => None,
        }
    }

    pub fn is_directional(self) -> bool {
        self.step().is_some()
    }

    pub fn label(self) -> &'static str {
        match self {
            NavInput::Up => "Up",
            NavInput::Down => "Down",
            NavInput::Left => "Left",
            NavInput::Right => "Right",
            NavInput::Activate => "Activate",
            NavInput::Cancel => "Cancel",
        }
    }
}

/// Key bindings for the navigator
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<KeyCode, NavInput>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(KeyCode::Up, NavInput::Up);
        bindings.insert(KeyCode::Left, NavInput::Left);
        bindings.insert(KeyCode::Down, NavInput::Down);
        bindings.insert(KeyCode::Right, NavInput::Right);
        bindings.insert(KeyCode::Enter, NavInput::Activate);
        bindings.insert(KeyCode::Esc, NavInput::Cancel);
        Self { bindings }
    }
}

impl KeyMap {
    /// Key map with nothing bound
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: KeyCode, input: NavInput) {
        self.bindings.insert(key, input);
    }

    /// Bind every key name in `names` to `input`
    pub fn bind_names<S: AsRef<str>>(&mut self, names: &[S], input: NavInput) -> Result<()> {
        for name in names {
            let key = parse_key(name.as_ref())?;
            self.bind(key, input);
        }
        Ok(())
    }

    pub fn lookup(&self, key: KeyCode) -> Option<NavInput> {
        self.bindings.get(&key).copied()
    }

    /// Map a terminal key event. Only presses count.
    pub fn map_event(&self, event: &KeyEvent) -> Option<NavInput> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        self.lookup(event.code)
    }

    /// Keys bound to `input`, named, sorted for stable help output
    pub fn keys_for(&self, input: NavInput) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == input)
            .map(|(key, _)| key_name(*key))
            .collect();
        keys.sort();
        keys
    }
}

/// Parse a key name as written in the config file
pub fn parse_key(name: &str) -> Result<KeyCode> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let key = match trimmed.to_ascii_lowercase().as_str() {
        "up" | "arrowup" => KeyCode::Up,
        "down" | "arrowdown" => KeyCode::Down,
        "left" | "arrowleft" => KeyCode::Left,
        "right" | "arrowright" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        other => match other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n) if (1..=12).contains(&n) => KeyCode::F(n),
            _ => bail!("Unknown key name: {:?}", name),
        },
    };
    Ok(key)
}

/// Human-readable key name, the inverse of [`parse_key`]
pub fn key_name(key: KeyCode) -> String {
    match key {
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    #[test]
    fn test_default_arrow_mapping() {
        let keys = KeyMap::default();
        assert_eq!(keys.lookup(KeyCode::Up), Some(NavInput::Up));
        assert_eq!(keys.lookup(KeyCode::Left), Some(NavInput::Left));
        assert_eq!(keys.lookup(KeyCode::Down), Some(NavInput::Down));
        assert_eq!(keys.lookup(KeyCode::Right), Some(NavInput::Right));
    }

    #[test]
    fn test_enter_and_escape() {
        let keys = KeyMap::default();
        assert_eq!(keys.lookup(KeyCode::Enter), Some(NavInput::Activate));
        assert_eq!(keys.lookup(KeyCode::Esc), Some(NavInput::Cancel));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let keys = KeyMap::default();
        assert_eq!(keys.lookup(KeyCode::Char('x')), None);
        assert_eq!(keys.lookup(KeyCode::Tab), None);
    }

    #[test]
    fn test_axes_collapse_onto_list_steps() {
        assert_eq!(NavInput::Up.step(), Some(Step::Previous));
        assert_eq!(NavInput::Left.step(), Some(Step::Previous));
        assert_eq!(NavInput::Down.step(), Some(Step::Next));
        assert_eq!(NavInput::Right.step(), Some(Step::Next));
        assert_eq!(NavInput::Activate.step(), None);
        assert_eq!(NavInput::Cancel.step(), None);
    }

    #[test]
    fn test_only_presses_are_mapped() {
        let keys = KeyMap::default();
        let mut event = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(keys.map_event(&event), Some(NavInput::Down));

        event.kind = KeyEventKind::Release;
        assert_eq!(keys.map_event(&event), None);
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("k").unwrap(), KeyCode::Char('k'));
        assert_eq!(parse_key("K").unwrap(), KeyCode::Char('K'));
        assert_eq!(parse_key("Tab").unwrap(), KeyCode::Tab);
        assert_eq!(parse_key("ESCAPE").unwrap(), KeyCode::Esc);
        assert_eq!(parse_key("space").unwrap(), KeyCode::Char(' '));
        assert_eq!(parse_key("ArrowUp").unwrap(), KeyCode::Up);
        assert_eq!(parse_key("F5").unwrap(), KeyCode::F(5));
        assert!(parse_key("F13").is_err());
        assert!(parse_key("Hyper").is_err());
    }

    #[test]
    fn test_extra_bindings() {
        let mut keys = KeyMap::default();
        keys.bind_names(&["k", "BackTab"], NavInput::Up).unwrap();
        assert_eq!(keys.lookup(KeyCode::Char('k')), Some(NavInput::Up));
        assert_eq!(keys.lookup(KeyCode::BackTab), Some(NavInput::Up));
        assert_eq!(keys.keys_for(NavInput::Up), vec!["BackTab", "Up", "k"]);
    }
}

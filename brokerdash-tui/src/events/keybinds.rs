use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brokerdash_core::config::get_config_dir;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::handler::Action;

pub const KEYBINDS_FILE: &str = "keybinds.toml";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    pub code: SerializableKeyCode,
    #[serde(default)]
    pub modifiers: SerializableKeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code: SerializableKeyCode(code),
            modifiers: SerializableKeyModifiers::default(),
        }
    }

    pub fn with_ctrl(code: KeyCode) -> Self {
        Self {
            code: SerializableKeyCode(code),
            modifiers: SerializableKeyModifiers(KeyModifiers::CONTROL),
        }
    }

    pub fn with_shift(code: KeyCode) -> Self {
        Self {
            code: SerializableKeyCode(code),
            modifiers: SerializableKeyModifiers(KeyModifiers::SHIFT),
        }
    }

    fn key(&self) -> (KeyCode, KeyModifiers) {
        (self.code.0, self.modifiers.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerializableKeyCode(pub KeyCode);

impl Serialize for SerializableKeyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let s = match self.0 {
            KeyCode::Char(c) => format!("Char({})", c),
            KeyCode::F(n) => format!("F{}", n),
            other => format!("{:?}", other),
        };
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for SerializableKeyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_key_code(&s)
            .map(SerializableKeyCode)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid key code '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerializableKeyModifiers(pub KeyModifiers);

impl Default for SerializableKeyModifiers {
    fn default() -> Self {
        Self(KeyModifiers::NONE)
    }
}

impl Serialize for SerializableKeyModifiers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut parts = Vec::new();
        if self.0.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.0.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.0.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if parts.is_empty() {
            parts.push("None");
        }
        serializer.serialize_str(&parts.join("+"))
    }
}

impl<'de> Deserialize<'de> for SerializableKeyModifiers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SerializableKeyModifiers(parse_modifiers(&s)))
    }
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix("Char(").and_then(|r| r.strip_suffix(')')) {
        let mut chars = inner.chars();
        let c = chars.next()?;
        return chars.next().is_none().then_some(KeyCode::Char(c));
    }
    if let Some(n) = s.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
        return Some(KeyCode::F(n));
    }
    match s {
        "Tab" => Some(KeyCode::Tab),
        "BackTab" => Some(KeyCode::BackTab),
        "Enter" => Some(KeyCode::Enter),
        "Esc" | "Escape" => Some(KeyCode::Esc),
        "Up" => Some(KeyCode::Up),
        "Down" => Some(KeyCode::Down),
        "Left" => Some(KeyCode::Left),
        "Right" => Some(KeyCode::Right),
        "PageUp" => Some(KeyCode::PageUp),
        "PageDown" => Some(KeyCode::PageDown),
        "Home" => Some(KeyCode::Home),
        "End" => Some(KeyCode::End),
        _ => None,
    }
}

fn parse_modifiers(s: &str) -> KeyModifiers {
    s.split('+')
        .fold(KeyModifiers::NONE, |acc, part| match part.trim() {
            "Ctrl" | "Control" => acc | KeyModifiers::CONTROL,
            "Alt" => acc | KeyModifiers::ALT,
            "Shift" => acc | KeyModifiers::SHIFT,
            _ => acc,
        })
}

/// Keys per action. Actions missing from a user file keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub quit: Vec<KeyBinding>,
    pub next_view: Vec<KeyBinding>,
    pub prev_view: Vec<KeyBinding>,
    pub up: Vec<KeyBinding>,
    pub down: Vec<KeyBinding>,
    pub top: Vec<KeyBinding>,
    pub bottom: Vec<KeyBinding>,
    pub page_up: Vec<KeyBinding>,
    pub page_down: Vec<KeyBinding>,
    pub select: Vec<KeyBinding>,
    pub back: Vec<KeyBinding>,
    pub toggle_theme: Vec<KeyBinding>,
    pub help: Vec<KeyBinding>,
    pub view_performance: Vec<KeyBinding>,
    pub view_analytics: Vec<KeyBinding>,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            quit: vec![
                KeyBinding::new(KeyCode::Char('q')),
                KeyBinding::with_ctrl(KeyCode::Char('c')),
            ],
            next_view: vec![KeyBinding::new(KeyCode::Tab)],
            prev_view: vec![KeyBinding::with_shift(KeyCode::BackTab)],
            up: vec![
                KeyBinding::new(KeyCode::Char('k')),
                KeyBinding::new(KeyCode::Up),
            ],
            down: vec![
                KeyBinding::new(KeyCode::Char('j')),
                KeyBinding::new(KeyCode::Down),
            ],
            top: vec![
                KeyBinding::new(KeyCode::Char('g')),
                KeyBinding::new(KeyCode::Home),
            ],
            bottom: vec![
                KeyBinding::with_shift(KeyCode::Char('G')),
                KeyBinding::new(KeyCode::End),
            ],
            page_up: vec![
                KeyBinding::new(KeyCode::PageUp),
                KeyBinding::with_ctrl(KeyCode::Char('u')),
            ],
            page_down: vec![
                KeyBinding::new(KeyCode::PageDown),
                KeyBinding::with_ctrl(KeyCode::Char('d')),
            ],
            select: vec![KeyBinding::new(KeyCode::Enter)],
            back: vec![KeyBinding::new(KeyCode::Esc)],
            toggle_theme: vec![KeyBinding::new(KeyCode::Char('t'))],
            help: vec![KeyBinding::new(KeyCode::Char('?'))],
            view_performance: vec![KeyBinding::new(KeyCode::Char('1'))],
            view_analytics: vec![KeyBinding::new(KeyCode::Char('2'))],
        }
    }
}

impl KeybindConfig {
    fn entries(&self) -> [(&[KeyBinding], Action, &'static str); 15] {
        [
            (self.quit.as_slice(), Action::Quit, "Quit"),
            (self.next_view.as_slice(), Action::NextView, "Next view"),
            (self.prev_view.as_slice(), Action::PrevView, "Previous view"),
            (self.up.as_slice(), Action::Up, "Move up"),
            (self.down.as_slice(), Action::Down, "Move down"),
            (self.top.as_slice(), Action::Top, "First agent"),
            (self.bottom.as_slice(), Action::Bottom, "Last agent"),
            (self.page_up.as_slice(), Action::PageUp, "Page up"),
            (self.page_down.as_slice(), Action::PageDown, "Page down"),
            (self.select.as_slice(), Action::Select, "Open agent detail"),
            (self.back.as_slice(), Action::Back, "Close detail / back"),
            (self.toggle_theme.as_slice(), Action::ToggleTheme, "Cycle theme"),
            (self.help.as_slice(), Action::Help, "Help"),
            (self.view_performance.as_slice(), Action::GoToView(0), "Agent performance"),
            (self.view_analytics.as_slice(), Action::GoToView(1), "Executive analytics"),
        ]
    }
}

/// Read-only key map. The file is never written back.
pub struct Keybinds {
    config: KeybindConfig,
    bindings: HashMap<(KeyCode, KeyModifiers), Action>,
}

impl Default for Keybinds {
    fn default() -> Self {
        Self::new()
    }
}

impl Keybinds {
    pub fn new() -> Self {
        Self::from_config(KeybindConfig::default())
    }

    pub fn from_config(config: KeybindConfig) -> Self {
        let mut keybinds = Self {
            config,
            bindings: HashMap::new(),
        };
        keybinds.rebuild_bindings();
        keybinds
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: KeybindConfig =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Self::from_config(config))
    }

    /// Loads `path` if it exists. A broken file is logged and ignored.
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }
        match Self::load_from_file(path) {
            Ok(keybinds) => {
                debug!(path = %path.display(), "Loaded keybinds");
                keybinds
            }
            Err(e) => {
                warn!("Failed to load keybinds: {:#}. Using defaults.", e);
                Self::new()
            }
        }
    }

    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_or_default_from(&path),
            None => Self::new(),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        get_config_dir().map(|dir| dir.join(KEYBINDS_FILE))
    }

    fn rebuild_bindings(&mut self) {
        self.bindings.clear();
        for (keys, action, _) in self.config.entries() {
            for kb in keys {
                self.bindings.insert(kb.key(), action.clone());
            }
        }
    }

    pub fn get(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<&Action> {
        self.bindings.get(&(code, modifiers)).or_else(|| {
            // Terminals disagree on whether these carry SHIFT.
            match code {
                KeyCode::Char(c) if c.is_ascii_uppercase() => self
                    .bindings
                    .get(&(code, modifiers ^ KeyModifiers::SHIFT)),
                KeyCode::BackTab => self.bindings.get(&(code, modifiers ^ KeyModifiers::SHIFT)),
                _ => None,
            }
        })
    }

    pub fn config(&self) -> &KeybindConfig {
        &self.config
    }

    /// `(keys, description, action)` for the help screen.
    pub fn all_bindings(&self) -> Vec<(String, String, Action)> {
        self.config
            .entries()
            .into_iter()
            .filter(|(keys, _, _)| !keys.is_empty())
            .map(|(keys, action, desc)| {
                (Self::keybindings_to_string(keys), desc.to_string(), action)
            })
            .collect()
    }

    /// The first key bound to `action`, for footer hints.
    pub fn primary_key(&self, action: &Action) -> Option<String> {
        self.config
            .entries()
            .into_iter()
            .find(|(_, a, _)| a == action)
            .and_then(|(keys, _, _)| keys.first().map(Self::keybinding_to_string))
    }

    fn keybinding_to_string(kb: &KeyBinding) -> String {
        let mut parts = Vec::new();
        if kb.modifiers.0.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if kb.modifiers.0.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        // Shift is implied by an uppercase letter or BackTab.
        let shift_implied = matches!(kb.code.0, KeyCode::Char(c) if c.is_ascii_uppercase())
            || kb.code.0 == KeyCode::BackTab;
        if kb.modifiers.0.contains(KeyModifiers::SHIFT) && !shift_implied {
            parts.push("Shift".to_string());
        }
        parts.push(Self::keycode_to_string(&kb.code.0));
        parts.join("+")
    }

    fn keybindings_to_string(bindings: &[KeyBinding]) -> String {
        bindings
            .iter()
            .map(Self::keybinding_to_string)
            .collect::<Vec<_>>()
            .join(" / ")
    }

    fn keycode_to_string(key: &KeyCode) -> String {
        match key {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            other => format!("{:?}", other),
        }
    }
}

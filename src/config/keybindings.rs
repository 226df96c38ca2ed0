//! Keybinding configuration for the page.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

/// Key lists for every page action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub pet: Vec<String>,
    pub request_fact: Vec<String>,
    pub request_image: Vec<String>,
    pub next_tab: Vec<String>,
    pub prev_tab: Vec<String>,
    pub carousel_next: Vec<String>,
    pub carousel_prev: Vec<String>,
    pub open_image: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c", "Esc"]),
            pet: keys(&["l", "Space"]),
            request_fact: keys(&["f"]),
            request_image: keys(&["i"]),
            next_tab: keys(&["Tab"]),
            prev_tab: keys(&["BackTab", "Shift+Tab"]),
            carousel_next: keys(&["Right", "n"]),
            carousel_prev: keys(&["Left", "p"]),
            open_image: keys(&["o"]),
        }
    }
}

impl KeybindingConfig {
    /// Get the action for a key event.
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        let table: [(&[String], Action); 9] = [
            (self.quit.as_slice(), Action::Quit),
            (self.pet.as_slice(), Action::Pet),
            (self.request_fact.as_slice(), Action::RequestFact),
            (self.request_image.as_slice(), Action::RequestImage),
            (self.next_tab.as_slice(), Action::NextTab),
            (self.prev_tab.as_slice(), Action::PrevTab),
            (self.carousel_next.as_slice(), Action::CarouselNext),
            (self.carousel_prev.as_slice(), Action::CarouselPrev),
            (self.open_image.as_slice(), Action::OpenImage),
        ];

        table
            .iter()
            .find(|(bindings, _)| matches_key(key, bindings))
            .map(|(_, action)| *action)
            .unwrap_or(Action::None)
    }

    /// Report every binding that does not parse.
    pub fn invalid_bindings(&self) -> Vec<String> {
        [
            &self.quit,
            &self.pet,
            &self.request_fact,
            &self.request_image,
            &self.next_tab,
            &self.prev_tab,
            &self.carousel_next,
            &self.carousel_prev,
            &self.open_image,
        ]
        .into_iter()
        .flatten()
        .filter_map(|binding| parse_key_string(binding).err())
        .collect()
    }

    /// The first binding of an action, for the help line.
    pub fn hint(bindings: &[String]) -> &str {
        bindings.first().map(String::as_str).unwrap_or("?")
    }
}

fn matches_key(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings
        .iter()
        .filter_map(|binding| parse_key_string(binding).ok())
        .any(|parsed| parsed.matches(key))
}

/// A parsed key binding with code and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Check if this binding matches a key event.
    ///
    /// Shift is ignored on the event side so "R" matches a shifted 'R'.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == (key.modifiers & !KeyModifiers::SHIFT))
    }
}

/// Parse a key string into a KeyBinding.
///
/// Supported formats:
/// - Single characters: "a", "A", "1", "/"
/// - Special keys: "Enter", "Tab", "BackTab", "Backspace", "Delete", "Home", "End",
///   "PageUp", "PageDown", "Up", "Down", "Left", "Right", "Esc", "Space", "F1"-"F12"
/// - With modifiers: "Ctrl+c", "Shift+Tab", "Alt+Enter", "Ctrl+Shift+a"
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Empty key binding".to_string());
    }

    // A lone "+" is the plus key, not a separator.
    let (modifier_parts, key_part) = match s.rsplit_once('+') {
        Some((mods, key)) if !key.is_empty() => (Some(mods), key),
        _ => (None, s),
    };

    let mut modifiers = KeyModifiers::NONE;
    if let Some(mods) = modifier_parts {
        for part in mods.split('+') {
            match part.trim().to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                "alt" => modifiers |= KeyModifiers::ALT,
                _ => return Err(format!("Unknown modifier: {}", part)),
            }
        }
    }

    let code = parse_key_code(key_part.trim())?;

    Ok(KeyBinding { code, modifiers })
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = s.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    match lower.as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "backspace" | "bs" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "space" => Ok(KeyCode::Char(' ')),
        _ => Err(format!("Unknown key: {}", s)),
    }
}

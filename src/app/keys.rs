use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    // Global
    pub quit: String,
    pub quit_alt: String,
    pub toggle_keyhints: String,
    pub toggle_lock: String,

    // Paging
    pub scroll_up: String,
    pub scroll_up_alt: String,
    pub scroll_down: String,
    pub scroll_down_alt: String,

    // Songs
    pub prev_song: String,
    pub prev_song_alt: String,
    pub next_song: String,
    pub next_song_alt: String,

    // Text scale
    pub font_up: String,
    pub font_down: String,

    // Directory
    pub toggle_directory: String,
    pub select: String,
    pub filter: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            quit_alt: "Esc".to_string(),
            toggle_keyhints: "?".to_string(),
            toggle_lock: "L".to_string(),

            scroll_up: "k".to_string(),
            scroll_up_alt: "Up".to_string(),
            scroll_down: "j".to_string(),
            scroll_down_alt: "Down".to_string(),

            prev_song: "h".to_string(),
            prev_song_alt: "Left".to_string(),
            next_song: "l".to_string(),
            next_song_alt: "Right".to_string(),

            font_up: "+".to_string(),
            font_down: "-".to_string(),

            toggle_directory: "Tab".to_string(),
            select: "Enter".to_string(),
            filter: "/".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            "PageUp" => event.code == KeyCode::PageUp,
            "PageDown" => event.code == KeyCode::PageDown,
            s if s.chars().count() == 1 => match s.chars().next() {
                // Terminals report Shift+l as either 'L' or 'l'+SHIFT
                Some(ch) if ch.is_uppercase() => {
                    event.code == KeyCode::Char(ch)
                        || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                            && event.modifiers.contains(KeyModifiers::SHIFT))
                }
                Some(ch) => event.code == KeyCode::Char(ch),
                None => false,
            },
            _ => false,
        }
    }

    /// Either binding of a primary/alt pair.
    pub fn matches_any<S: AsRef<str>>(&self, event: KeyEvent, keys: &[S]) -> bool {
        keys.iter().any(|k| self.matches(event, k.as_ref()))
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            "PageUp" => "PgUp".to_string(),
            "PageDown" => "PgDn".to_string(),
            _ => key_str.to_string(),
        }
    }

    /// "k/↑" style label for a primary/alt pair.
    pub fn display_pair(&self, primary: &str, alt: &str) -> String {
        format!("{}/{}", self.display(primary), self.display(alt))
    }
}

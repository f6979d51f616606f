use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::app::keys::KeyConfig;
use crate::lyrics::DEFAULT_PAGE_SIZE;
use crate::ui::theme::Theme;

pub const DEFAULT_FONT_SIZE: u16 = 14;

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Lyric file used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics_file: Option<PathBuf>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_font_size")]
    pub font_size: u16,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub theme: Theme,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_font_size() -> u16 {
    DEFAULT_FONT_SIZE
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            lyrics_file: None,
            page_size: default_page_size(),
            font_size: default_font_size(),
            keys: KeyConfig::default(),
            theme: Theme::default(),
        }
    }
}

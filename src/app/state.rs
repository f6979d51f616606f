use super::config::UserConfig;
use super::directory::filter_titles;
use super::keys::KeyConfig;
use crate::lyrics::PagingCursor;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

mod ui;
mod view;

pub use ui::Toast;
pub use view::{DragGrab, ViewState, FONT_MAX, FONT_MIN};

pub struct App {
    pub theme: Theme,
    pub keys: KeyConfig,

    pub is_running: bool,

    /// Lyric navigation (owns the document)
    pub cursor: PagingCursor,
    /// Lock, text scale, directory, position
    pub view: ViewState,

    pub toast: Option<Toast>,

    /// File name shown in the overlay border
    pub source_name: String,
    /// Terminal area of the last draw, for mouse hit-testing
    pub last_area: Rect,
}

impl App {
    pub fn new(cursor: PagingCursor, config: &UserConfig, source_name: &str) -> Self {
        Self {
            theme: config.theme.clone(),
            keys: config.keys.clone(),
            is_running: true,
            cursor,
            view: ViewState::new(config.font_size),
            toast: None,
            source_name: source_name.to_string(),
            last_area: Rect::default(),
        }
    }

    pub fn show_toast(&mut self, message: &str) {
        let now = Instant::now();
        let deadline = now + Duration::from_millis(1500);

        if let Some(ref mut current) = self.toast {
            // Keep start_time so a rapid update does not replay the entrance
            current.message = message.to_string();
            current.deadline = deadline;
        } else {
            self.toast = Some(Toast {
                message: message.to_string(),
                start_time: now,
                deadline,
            });
        }
    }

    /// Called every tick to update state
    pub fn on_tick(&mut self) {
        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.deadline {
                self.toast = None;
            }
        }
    }

    /// Song indices currently listed in the directory.
    pub fn directory_entries(&self) -> Vec<usize> {
        let titles = self.cursor.document().titles();
        filter_titles(&titles, &self.view.directory_filter)
    }

    pub fn directory_next(&mut self) {
        let len = self.directory_entries().len();
        if self.view.directory_selected + 1 < len {
            self.view.directory_selected += 1;
        }
    }

    pub fn directory_prev(&mut self) {
        self.view.directory_selected = self.view.directory_selected.saturating_sub(1);
    }

    /// Jump to the song at `row` of the directory list, then close it.
    pub fn open_directory_entry(&mut self, row: usize) {
        if let Some(&song) = self.directory_entries().get(row) {
            self.cursor.jump_to(song);
            self.view.hide_directory();
        }
    }

    pub fn open_selected_entry(&mut self) {
        self.open_directory_entry(self.view.directory_selected);
    }

    pub fn toggle_directory(&mut self) {
        self.view.toggle_directory(self.cursor.song_index());
    }

    pub fn toggle_lock(&mut self) {
        if self.view.toggle_lock() {
            self.show_toast("🔒 Locked");
        } else {
            self.show_toast("🔓 Unlocked");
        }
        tracing::debug!(locked = self.view.locked, "lock toggled");
    }

    pub fn increase_font(&mut self) {
        if self.view.increase_font() {
            self.show_toast(&format!("A+ {}", self.view.font_size));
        }
    }

    pub fn decrease_font(&mut self) {
        if self.view.decrease_font() {
            self.show_toast(&format!("A- {}", self.view.font_size));
        }
    }

    pub fn quit(&mut self) {
        self.is_running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::LyricDocument;

    fn test_app() -> App {
        let doc = LyricDocument::parse("Moon River\na\n\n\nYesterday\nb\n\n\nBlue Moon\nc").unwrap();
        App::new(PagingCursor::new(doc, 10), &UserConfig::default(), "songs.txt")
    }

    #[test]
    fn test_directory_open_entry_jumps_and_hides() {
        let mut app = test_app();
        app.toggle_directory();
        app.directory_next();
        app.directory_next();
        app.directory_next();
        assert_eq!(app.view.directory_selected, 2);

        app.open_selected_entry();
        assert_eq!(app.cursor.song_index(), 2);
        assert!(!app.view.directory_visible);
    }

    #[test]
    fn test_filtered_directory_maps_rows_to_songs() {
        let mut app = test_app();
        app.toggle_directory();
        app.view.directory_filter = "yesterday".to_string();
        assert_eq!(app.directory_entries(), vec![1]);

        app.open_directory_entry(0);
        assert_eq!(app.cursor.song_index(), 1);

        // past the end of the list is ignored
        app.toggle_directory();
        app.open_directory_entry(9);
        assert!(app.view.directory_visible);
    }

    #[test]
    fn test_font_and_lock_raise_toasts() {
        let mut app = test_app();
        app.increase_font();
        assert_eq!(app.view.font_size, 15);
        assert!(app.toast.as_ref().is_some_and(|t| t.message.contains("15")));

        app.toggle_lock();
        assert!(app.view.locked);
        assert!(app.toast.as_ref().is_some_and(|t| t.message.contains("Locked")));
    }
}

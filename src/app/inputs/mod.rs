use crate::app::App;
use crossterm::event::{Event, KeyEvent, KeyEventKind};

pub mod common;
pub mod directory;
pub mod lyrics;
pub mod mouse;

/// Route one terminal event to the handler that owns it.
pub fn handle_event(event: Event, app: &mut App) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, app),
        Event::Mouse(mouse) => {
            mouse::handle_mouse_events(mouse, app);
        }
        // Resize needs nothing: every event is followed by a redraw
        _ => {}
    }
}

pub fn handle_key(key: KeyEvent, app: &mut App) {
    // 1. Priority: filter input captures every key while typing
    if directory::handle_filter_input(key, app) {
        return;
    }

    // 2. Common/Global Keys (Quit, Help, Lock)
    if common::handle_common_events(key, app) {
        return;
    }

    // 3. Locked overlay ignores everything else
    if app.view.locked {
        return;
    }

    // 4. Song list
    if directory::handle_directory_events(key, app) {
        return;
    }

    // 5. Paging, songs, text size
    lyrics::handle_lyrics_events(key, app);
}

use crossterm::event::{KeyCode, KeyEvent};
use crate::app::App;

/// While the filter is being typed every key lands here.
pub fn handle_filter_input(key: KeyEvent, app: &mut App) -> bool {
    if !app.view.filter_active {
        return false;
    }

    match key.code {
        KeyCode::Esc => {
            app.view.filter_active = false;
            app.view.directory_filter.clear();
            app.view.directory_selected = app.cursor.song_index();
        }
        KeyCode::Enter => {
            app.view.filter_active = false;
            app.open_selected_entry();
        }
        KeyCode::Backspace => {
            app.view.directory_filter.pop();
            app.view.directory_selected = 0;
        }
        KeyCode::Up => app.directory_prev(),
        KeyCode::Down => app.directory_next(),
        KeyCode::Char(c) => {
            app.view.directory_filter.push(c);
            app.view.directory_selected = 0;
        }
        _ => {}
    }
    true
}

pub fn handle_directory_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = &app.keys;

    if keys.matches(key, &keys.toggle_directory) {
        app.toggle_directory();
        return true;
    }

    if !app.view.directory_visible {
        return false;
    }

    if keys.matches(key, &keys.filter) {
        app.view.filter_active = true;
        app.view.directory_selected = 0;
        return true;
    }

    if keys.matches_any(key, &[&keys.scroll_down, &keys.scroll_down_alt]) {
        app.directory_next();
        return true;
    }

    if keys.matches_any(key, &[&keys.scroll_up, &keys.scroll_up_alt]) {
        app.directory_prev();
        return true;
    }

    if keys.matches(key, &keys.select) {
        app.open_selected_entry();
        return true;
    }

    false
}

use crossterm::event::KeyEvent;
use crate::app::App;

pub fn handle_common_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = &app.keys;

    // Quit ('q' / Esc): close popups first, then quit (Neovim-style)
    if keys.matches_any(key, &[&keys.quit, &keys.quit_alt]) {
        if app.view.show_keyhints {
            app.view.show_keyhints = false;
        } else if app.view.directory_visible {
            app.view.hide_directory();
        } else {
            app.quit();
        }
        return true;
    }

    if keys.matches(key, &keys.toggle_keyhints) {
        app.view.show_keyhints = !app.view.show_keyhints;
        return true;
    }

    // Checked before paging so Shift+l is never read as "next song"
    if keys.matches(key, &keys.toggle_lock) {
        app.toggle_lock();
        return true;
    }

    false
}

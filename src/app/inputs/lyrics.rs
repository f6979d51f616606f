use crossterm::event::KeyEvent;
use crate::app::App;

pub fn handle_lyrics_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = &app.keys;

    if keys.matches_any(key, &[&keys.scroll_down, &keys.scroll_down_alt]) {
        app.cursor.scroll_down();
        return true;
    }

    if keys.matches_any(key, &[&keys.scroll_up, &keys.scroll_up_alt]) {
        app.cursor.scroll_up();
        return true;
    }

    if keys.matches_any(key, &[&keys.next_song, &keys.next_song_alt]) {
        app.cursor.next_song();
        return true;
    }

    if keys.matches_any(key, &[&keys.prev_song, &keys.prev_song_alt]) {
        app.cursor.prev_song();
        return true;
    }

    if keys.matches(key, &keys.font_up) {
        app.increase_font();
        return true;
    }

    if keys.matches(key, &keys.font_down) {
        app.decrease_font();
        return true;
    }

    false
}

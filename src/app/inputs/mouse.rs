use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::app::App;
use crate::ui::layout::{directory_window_start, overlay_layout, Button};

/// Same action as clicking `button` in the bar.
pub fn press_button(button: Button, app: &mut App) {
    match button {
        Button::Menu => app.toggle_directory(),
        Button::Prev => app.cursor.prev_song(),
        Button::Next => app.cursor.next_song(),
        Button::Lock => app.toggle_lock(),
        Button::FontUp => app.increase_font(),
        Button::FontDown => app.decrease_font(),
        Button::Exit => app.quit(),
    }
}

/// Wheel scrolls, clicks press buttons or pick songs, anything else on the
/// overlay drags it. A locked overlay lets every mouse event through.
pub fn handle_mouse_events(mouse: MouseEvent, app: &mut App) -> bool {
    if app.view.locked {
        return false;
    }

    let area = app.last_area;
    let layout = overlay_layout(area, &app.view, app.cursor.page_size());
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollDown if layout.directory_row_at(pos).is_some() => {
            app.directory_next();
            true
        }
        MouseEventKind::ScrollUp if layout.directory_row_at(pos).is_some() => {
            app.directory_prev();
            true
        }
        MouseEventKind::ScrollDown if layout.contains(pos) => {
            app.cursor.scroll_down();
            true
        }
        MouseEventKind::ScrollUp if layout.contains(pos) => {
            app.cursor.scroll_up();
            true
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(button) = layout.button_at(pos) {
                press_button(button, app);
                return true;
            }
            if let Some(row) = layout.directory_row_at(pos) {
                let height = layout.directory_list.map_or(0, |r| r.height as usize);
                let len = app.directory_entries().len();
                let start = directory_window_start(app.view.directory_selected, len, height);
                app.open_directory_entry(start + row);
                return true;
            }
            if layout.filter_row.is_some_and(|r| r.contains(pos)) {
                app.view.filter_active = true;
                return true;
            }
            if layout.contains(pos) {
                let origin = Position::new(layout.group.x, layout.group.y);
                app.view.begin_drag(pos, origin);
                return true;
            }
            false
        }
        MouseEventKind::Drag(MouseButton::Left) if app.view.is_dragging() => {
            app.view.drag_to(pos, area, layout.group.width, layout.group.height);
            true
        }
        MouseEventKind::Up(MouseButton::Left) if app.view.is_dragging() => {
            app.view.end_drag();
            true
        }
        _ => false,
    }
}

use ratatui::layout::{Position, Rect};

pub const FONT_MIN: u16 = 8;
pub const FONT_MAX: u16 = 48;

/// Offset between the mouse and the overlay's top-left corner, taken on
/// mouse-down and kept until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGrab {
    pub dx: u16,
    pub dy: u16,
}

/// Everything about the overlay that is not lyric navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Click-through mode: mouse ignored, paging keys ignored
    pub locked: bool,
    pub font_size: u16,

    pub directory_visible: bool,
    /// Index into the (possibly filtered) directory entries
    pub directory_selected: usize,
    pub directory_filter: String,
    pub filter_active: bool,

    /// Top-left of the overlay; `None` keeps it centered
    pub position: Option<Position>,
    pub drag: Option<DragGrab>,

    pub show_keyhints: bool,
}

impl ViewState {
    pub fn new(font_size: u16) -> Self {
        Self {
            locked: false,
            font_size: font_size.clamp(FONT_MIN, FONT_MAX),
            directory_visible: false,
            directory_selected: 0,
            directory_filter: String::new(),
            filter_active: false,
            position: None,
            drag: None,
            show_keyhints: false,
        }
    }

    /// Returns the new lock state.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        if self.locked {
            self.drag = None;
        }
        self.locked
    }

    /// Returns `false` when already at the maximum.
    pub fn increase_font(&mut self) -> bool {
        if self.font_size < FONT_MAX {
            self.font_size += 1;
            true
        } else {
            false
        }
    }

    /// Returns `false` when already at the minimum.
    pub fn decrease_font(&mut self) -> bool {
        if self.font_size > FONT_MIN {
            self.font_size -= 1;
            true
        } else {
            false
        }
    }

    /// Opening the directory highlights `current_song`.
    pub fn toggle_directory(&mut self, current_song: usize) {
        if self.directory_visible {
            self.hide_directory();
        } else {
            self.directory_visible = true;
            self.directory_selected = current_song;
        }
    }

    pub fn hide_directory(&mut self) {
        self.directory_visible = false;
        self.filter_active = false;
        self.directory_filter.clear();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn begin_drag(&mut self, mouse: Position, origin: Position) {
        if self.locked {
            return;
        }
        self.drag = Some(DragGrab {
            dx: mouse.x.saturating_sub(origin.x),
            dy: mouse.y.saturating_sub(origin.y),
        });
    }

    /// Move the overlay so the grab point follows the mouse, keeping a box of
    /// `width` x `height` inside `bounds`.
    pub fn drag_to(&mut self, mouse: Position, bounds: Rect, width: u16, height: u16) {
        if self.locked {
            return;
        }
        let Some(grab) = self.drag else {
            return;
        };
        let max_x = bounds.right().saturating_sub(width).max(bounds.x);
        let max_y = bounds.bottom().saturating_sub(height).max(bounds.y);
        self.position = Some(Position {
            x: mouse.x.saturating_sub(grab.dx).clamp(bounds.x, max_x),
            y: mouse.y.saturating_sub(grab.dy).clamp(bounds.y, max_y),
        });
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(crate::app::config::user::DEFAULT_FONT_SIZE)
    }
}

use crate::app::ViewState;
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

/// Width of the title directory beside the lyric box.
pub const DIRECTORY_WIDTH: u16 = 26;
/// Columns of lyric box per point of font size (42 at the default 14).
pub const COLUMNS_PER_FONT_POINT: u16 = 3;
pub const MIN_FRAME_WIDTH: u16 = 20;
/// Border top and bottom plus the button bar.
const FRAME_CHROME_HEIGHT: u16 = 3;

/// Buttons in the bar above the lyrics, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Menu,
    Prev,
    Next,
    Lock,
    FontUp,
    FontDown,
    Exit,
}

impl Button {
    pub const ALL: [Button; 7] = [
        Button::Menu,
        Button::Prev,
        Button::Next,
        Button::Lock,
        Button::FontUp,
        Button::FontDown,
        Button::Exit,
    ];

    pub fn label(self, locked: bool) -> &'static str {
        match self {
            Button::Menu => "≡",
            Button::Prev => "◀",
            Button::Next => "▶",
            Button::Lock if locked => "🔒",
            Button::Lock => "🔓",
            Button::FontUp => "A+",
            Button::FontDown => "A-",
            Button::Exit => "✕",
        }
    }

    /// Cell width including one column of padding either side.
    pub fn width(self, locked: bool) -> u16 {
        self.label(locked).width() as u16 + 2
    }
}

/// Where every piece of the overlay lands for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
    /// Directory and lyric box together; this is what gets dragged
    pub group: Rect,
    /// Lyric box including its border
    pub frame: Rect,
    pub buttons: Vec<(Button, Rect)>,
    /// Rows the page of lyrics is drawn into
    pub page: Rect,
    /// Directory box including its border
    pub directory: Option<Rect>,
    /// Filter input row, when a filter is being typed or applied
    pub filter_row: Option<Rect>,
    /// Rows listing titles
    pub directory_list: Option<Rect>,
}

impl OverlayLayout {
    pub fn contains(&self, pos: Position) -> bool {
        self.group.contains(pos)
    }

    pub fn button_at(&self, pos: Position) -> Option<Button> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(button, _)| *button)
    }

    /// Visible row of the directory list under `pos`.
    pub fn directory_row_at(&self, pos: Position) -> Option<usize> {
        let list = self.directory_list?;
        list.contains(pos).then(|| (pos.y - list.y) as usize)
    }
}

fn inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

/// Lay the overlay out inside `area` for the current view state.
pub fn overlay_layout(area: Rect, view: &ViewState, page_size: usize) -> OverlayLayout {
    let page_rows = u16::try_from(page_size).unwrap_or(u16::MAX);
    let height = page_rows.saturating_add(FRAME_CHROME_HEIGHT).min(area.height);

    let dir_width = if view.directory_visible {
        DIRECTORY_WIDTH.min(area.width / 2)
    } else {
        0
    };
    let frame_width = view
        .font_size
        .saturating_mul(COLUMNS_PER_FONT_POINT)
        .max(MIN_FRAME_WIDTH)
        .min(area.width - dir_width);
    let group_width = dir_width + frame_width;

    let origin = clamp_origin(
        view.position.unwrap_or(Position {
            x: area.x + (area.width - group_width) / 2,
            y: area.y + (area.height - height) / 2,
        }),
        area,
        group_width,
        height,
    );

    let group = Rect::new(origin.x, origin.y, group_width, height);
    let frame = Rect::new(origin.x + dir_width, origin.y, frame_width, height);

    let frame_inner = inner(frame);
    let bar = Rect::new(frame_inner.x, frame_inner.y, frame_inner.width, frame_inner.height.min(1));
    let page = Rect::new(
        frame_inner.x,
        frame_inner.y.saturating_add(bar.height),
        frame_inner.width,
        frame_inner.height.saturating_sub(bar.height),
    );

    let (directory, filter_row, directory_list) = if dir_width > 0 {
        let dir = Rect::new(origin.x, origin.y, dir_width, height);
        let dir_inner = inner(dir);
        let show_filter = view.filter_active || !view.directory_filter.is_empty();
        if show_filter && dir_inner.height > 0 {
            let row = Rect::new(dir_inner.x, dir_inner.y, dir_inner.width, 1);
            let list = Rect::new(dir_inner.x, dir_inner.y + 1, dir_inner.width, dir_inner.height - 1);
            (Some(dir), Some(row), Some(list))
        } else {
            (Some(dir), None, Some(dir_inner))
        }
    } else {
        (None, None, None)
    };

    OverlayLayout {
        group,
        frame,
        buttons: button_bar(bar, view.locked),
        page,
        directory,
        filter_row,
        directory_list,
    }
}

/// Keep a `width` x `height` box starting at `origin` inside `area`.
pub fn clamp_origin(origin: Position, area: Rect, width: u16, height: u16) -> Position {
    let max_x = area.right().saturating_sub(width).max(area.x);
    let max_y = area.bottom().saturating_sub(height).max(area.y);
    Position {
        x: origin.x.clamp(area.x, max_x),
        y: origin.y.clamp(area.y, max_y),
    }
}

/// Buttons centered in `bar`, one column apart. Buttons that do not fit are dropped.
pub fn button_bar(bar: Rect, locked: bool) -> Vec<(Button, Rect)> {
    if bar.height == 0 {
        return Vec::new();
    }
    let gap = 1;
    let total: u16 = Button::ALL.iter().map(|b| b.width(locked)).sum::<u16>()
        + gap * (Button::ALL.len() as u16 - 1);

    let mut x = bar.x + bar.width.saturating_sub(total) / 2;
    let mut buttons = Vec::with_capacity(Button::ALL.len());
    for button in Button::ALL {
        let w = button.width(locked);
        if x + w > bar.right() {
            break;
        }
        buttons.push((button, Rect::new(x, bar.y, w, 1)));
        x += w + gap;
    }
    buttons
}

/// First list index to show so `selected` stays roughly centered.
pub fn directory_window_start(selected: usize, len: usize, height: usize) -> usize {
    selected
        .saturating_sub(height / 2)
        .min(len.saturating_sub(height))
}

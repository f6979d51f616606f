pub mod components;
pub mod layout;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;

use crate::app::App;
use ratatui::Frame;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.last_area = area;

    // 1. Geometry (shared with mouse hit-testing)
    let overlay = layout::overlay_layout(area, &app.view, app.cursor.page_size());

    // 2. Title directory (left), then the lyric box
    widgets::directory::render(f, &overlay, app);
    components::lyrics::render(f, &overlay, app);

    // 3. Popups (Overlays)
    widgets::popups::render(f, app);
}

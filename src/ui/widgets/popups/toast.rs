use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Horizontal slide offset for a toast `width` wide: slides in during the
/// first 300ms and out during the last 300ms.
pub fn slide_offset(width: u16, elapsed_ms: u128, remaining_ms: u128) -> u16 {
    if elapsed_ms < 300 {
        let t = elapsed_ms as f32 / 300.0;
        let ease = 1.0 - (1.0 - t).powi(3); // Cubic Out
        (width as f32 * (1.0 - ease)) as u16
    } else if remaining_ms < 300 {
        let t = (300 - remaining_ms) as f32 / 300.0;
        let ease = t.powi(3); // Cubic In
        (width as f32 * ease) as u16
    } else {
        0
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let Some(ref toast) = app.toast else {
        return;
    };
    let theme = &app.theme;
    let now = std::time::Instant::now();
    let area = f.area();

    // Auto-dismiss handled in App::on_tick()
    let message = &toast.message;
    let width = (message.width() as u16 + 6).min(area.width.saturating_sub(4));
    let height = 3;

    let elapsed = now.duration_since(toast.start_time).as_millis();
    let remaining = toast.deadline.saturating_duration_since(now).as_millis();
    let x = area
        .width
        .saturating_sub(width + 1)
        .saturating_add(slide_offset(width, elapsed, remaining));

    if x >= area.width {
        return;
    }

    let full_area = Rect::new(x, 1, width, height);
    let visible_area = full_area.intersection(area);
    if visible_area.is_empty() {
        return;
    }

    f.render_widget(Clear, visible_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));

    let style = Style::default().fg(theme.blue).add_modifier(Modifier::BOLD);
    let text = Paragraph::new(Line::from(vec![Span::styled(message.as_str(), style)]))
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(text, visible_area);
}

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// (key, icon, description) rows for the popup.
pub fn key_rows(app: &App) -> Vec<(String, &'static str, &'static str)> {
    let k = &app.keys;
    vec![
        (k.display_pair(&k.scroll_down, &k.scroll_up), "📜", "Scroll lyrics"),
        (k.display_pair(&k.prev_song, &k.next_song), "🎵", "Previous/next song"),
        (k.display(&k.toggle_directory), "📚", "Song list"),
        (k.display(&k.filter), "🔍", "Filter song list"),
        (k.display(&k.select), "▶️", "Open song"),
        (k.display_pair(&k.font_up, &k.font_down), "🔠", "Text size"),
        (k.display(&k.toggle_lock), "🔒", "Lock/unlock"),
        (k.display_pair(&k.quit, &k.quit_alt), "🚪", "Quit"),
    ]
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;

    let rows = key_rows(app);
    let mut lines: Vec<Line> = Vec::new();
    for (key, icon, desc) in &rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<7} ", key),
                Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   ", Style::default().fg(theme.overlay)),
            Span::styled(format!("{} ", icon), Style::default()),
            Span::styled(*desc, Style::default().fg(theme.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Mouse: drag to move, wheel to scroll",
        Style::default().fg(theme.overlay),
    )));

    // Size to content 📏
    let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(20).max(22);
    let title = " Keys ";

    let area = f.area();
    let popup_height = (lines.len() as u16 + 2).min(area.height);
    let popup_width = (content_width as u16 + 4)
        .max(title.width() as u16 + 4)
        .min(area.width);

    // Centered over the overlay
    let popup_area = Rect::new(
        area.x + (area.width - popup_width) / 2,
        area.y + (area.height - popup_height) / 2,
        popup_width,
        popup_height,
    );

    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .title(title)
            .title_alignment(Alignment::Left)
            .style(Style::default().bg(Color::Reset)),
    );
    f.render_widget(popup, popup_area);
}

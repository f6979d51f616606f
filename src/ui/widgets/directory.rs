use crate::app::App;
use crate::ui::layout::{directory_window_start, OverlayLayout};
use crate::ui::utils::truncate;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Title list shown left of the lyric box.
pub fn render(f: &mut Frame, layout: &OverlayLayout, app: &App) {
    let (Some(area), Some(list_area)) = (layout.directory, layout.directory_list) else {
        return;
    };
    let theme = &app.theme;

    let entries = app.directory_entries();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(Span::styled(
            format!(" Songs · {} ", entries.len()),
            Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
        )))
        .border_style(Style::default().fg(theme.magenta))
        .style(Style::default().bg(theme.base));

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    if let Some(row) = layout.filter_row {
        let cursor = if app.view.filter_active { "▏" } else { "" };
        let filter = Paragraph::new(Line::from(vec![
            Span::styled(" / ", Style::default().fg(theme.yellow)),
            Span::styled(
                format!("{}{}", app.view.directory_filter, cursor),
                Style::default().fg(theme.cyan),
            ),
        ]));
        f.render_widget(filter, row);
    }

    let titles = app.cursor.document().titles();
    let height = list_area.height as usize;
    let width = list_area.width as usize;
    let mut lines = Vec::with_capacity(height);

    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No match",
            Style::default().fg(theme.overlay),
        )));
    } else {
        let start = directory_window_start(app.view.directory_selected, entries.len(), height);
        for (row, &song) in entries.iter().enumerate().skip(start).take(height) {
            let is_sel = row == app.view.directory_selected;
            let is_current = song == app.cursor.song_index();

            let (marker, marker_color) = match (is_sel, is_current) {
                (true, _) => ("●", theme.yellow),
                (false, true) => ("♪", theme.green),
                _ => ("○", theme.surface),
            };
            let name_style = if is_sel {
                Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default().fg(theme.green)
            } else {
                Style::default().fg(theme.text)
            };

            let num = format!("{:>2} ", song + 1);
            let name_max = width.saturating_sub(num.len() + 3);
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(marker_color)),
                Span::styled(num, Style::default().fg(theme.overlay)),
                Span::styled(truncate(titles[song], name_max), name_style),
            ]));
        }
    }

    let list = Paragraph::new(lines).style(Style::default().bg(theme.base));
    f.render_widget(list, list_area);
}

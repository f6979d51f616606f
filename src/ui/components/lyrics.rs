use crate::app::App;
use crate::ui::layout::OverlayLayout;
use crate::ui::utils::{fit_rows, truncate};
use crate::ui::widgets::buttons;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, layout: &OverlayLayout, app: &mut App) {
    let theme = app.theme.clone();
    let locked = app.view.locked;

    // Unlocked: tinted panel. Locked: bare text with a faint outline.
    let (panel_bg, border_color) = if locked {
        (Color::Reset, theme.surface)
    } else {
        (theme.surface, theme.magenta)
    };

    let width = layout.page.width as usize;
    let lyric_style = Style::default().fg(theme.lyric).bg(panel_bg);
    let (rows, hidden) = fit_rows(&app.cursor.visible_lines(), layout.page.height as usize);
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|text| Line::from(Span::styled(truncate(text, width), lyric_style)))
        .collect();

    let song = app.cursor.current_song();
    let title_width = (layout.frame.width as usize).saturating_sub(12);
    let title = Line::from(vec![Span::styled(
        format!(" {} ", truncate(&song.title, title_width)),
        Style::default().fg(border_color).add_modifier(Modifier::BOLD),
    )]);

    let position = Line::from(vec![Span::styled(
        format!(
            " {}/{} · {}/{}{} ",
            app.cursor.song_index() + 1,
            app.cursor.song_count(),
            app.cursor.start_line() + 1,
            song.lines.len(),
            // Terminal shorter than the page
            if hidden > 0 { format!(" ▾{}", hidden) } else { String::new() }
        ),
        Style::default().fg(theme.overlay),
    )])
    .alignment(Alignment::Right);

    let source = Line::from(Span::styled(
        format!(" {} ", truncate(&app.source_name, title_width / 2)),
        Style::default().fg(theme.overlay),
    ))
    .alignment(Alignment::Left);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Left)
        .title_bottom(source)
        .title_bottom(position)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(panel_bg));

    f.render_widget(Clear, layout.frame);
    f.render_widget(block, layout.frame);

    buttons::render(f, layout, app);

    let page = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(panel_bg));
    f.render_widget(page, layout.page);
}

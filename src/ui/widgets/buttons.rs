use crate::app::App;
use crate::ui::layout::{Button, OverlayLayout};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, layout: &OverlayLayout, app: &App) {
    let theme = &app.theme;
    let locked = app.view.locked;

    for &(button, rect) in &layout.buttons {
        let style = match button {
            _ if locked && button != Button::Lock => Style::default().fg(theme.overlay),
            Button::Lock if locked => Style::default()
                .fg(theme.base)
                .bg(theme.yellow)
                .add_modifier(Modifier::BOLD),
            Button::Exit => Style::default().fg(theme.base).bg(theme.red),
            Button::Menu if app.view.directory_visible => Style::default()
                .fg(theme.base)
                .bg(theme.green)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(theme.base).bg(theme.text),
        };

        let widget = Paragraph::new(button.label(locked))
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(widget, rect);
    }
}

use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Current page
    parts.push(Span::styled(
        format!(" [{}] ", state.page_title(state.page())),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = match state.page() {
        Page::Assess(_) => "Tab next  ←/→ adjust  Ctrl+S submit",
        Page::Reports => "↑/↓ select  f filter  e export",
        Page::Dashboard | Page::Resources => "Tab next page  q quit",
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hints.width() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", hints),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    frame.render_widget(Paragraph::new(line), area);
}

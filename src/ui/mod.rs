mod dashboard;
mod form;
mod layout;
mod nav;
mod reports;
mod resources;
mod status_bar;
mod text_field;
mod theme;

use crate::app::state::{percent, AppState, Page};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    nav::render(frame, app_layout.nav, state);
    render_session_panel(frame, app_layout.session_panel, state);

    match state.page() {
        Page::Dashboard => dashboard::render(frame, app_layout.content, state),
        Page::Assess(index) => form::render(frame, app_layout.content, state, index),
        Page::Reports => reports::render(frame, app_layout.content, state),
        Page::Resources => resources::render(frame, app_layout.content, state),
    }

    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_session_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Session ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let store = &state.store;
    let row = |label: &'static str, value: String| {
        ListItem::new(Line::from(vec![
            Span::styled(format!(" {:<12}", label), Theme::label()),
            Span::styled(value, Theme::metric_value()),
        ]))
    };
    let items = vec![
        row("Total", store.count().to_string()),
        row("Completed", store.count_completed().to_string()),
        row("Average", percent(store.average_score())),
    ];

    frame.render_widget(List::new(items).block(block), area);
}

/// Horizontal bar of `width` cells filled in proportion to `score` (0-100).
pub(crate) fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bar_fills_proportionally() {
        assert_eq!(score_bar(0.0, 4), "░░░░");
        assert_eq!(score_bar(50.0, 4), "██░░");
        assert_eq!(score_bar(100.0, 4), "████");
        assert_eq!(score_bar(140.0, 4), "████");
    }
}

use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Ethical AI Framework ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused());

    let mut items: Vec<ListItem> = Vec::new();

    for (i, page) in state.pages.iter().enumerate() {
        let is_active = i == state.page_index;
        let icon = match page {
            Page::Dashboard => "◆",
            Page::Assess(_) => "◇",
            Page::Reports => "▤",
            Page::Resources => "?",
        };
        let style = if is_active {
            Theme::nav_active()
        } else {
            Theme::nav_normal()
        };

        // Only F1-F12 exist
        let key = if i < 12 {
            format!("F{:<2}", i + 1)
        } else {
            "   ".to_string()
        };

        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!(" {} ", key), Theme::muted()),
            Span::styled(format!("{} ", icon), style),
            Span::styled(state.page_title(*page), style),
        ])));
    }

    items.push(ListItem::new(""));
    items.push(ListItem::new(Span::styled(
        " Ctrl+←/→ switch page",
        Theme::muted(),
    )));
    items.push(ListItem::new(Span::styled(" Ctrl+Q quit", Theme::muted())));

    frame.render_widget(List::new(items).block(block), area);
}

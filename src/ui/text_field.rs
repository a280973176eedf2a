use crate::app::state::TextField;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Bordered single-line input. Places the terminal cursor when focused.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    placeholder: &str,
    field: &TextField,
    focused: bool,
) {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if field.text.is_empty() && !focused {
        frame.render_widget(Paragraph::new(placeholder).style(Theme::muted()), inner);
        return;
    }

    let line = if focused {
        // Prompt chevron + input text
        Line::from(vec![
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
            Span::styled(field.text.as_str(), Theme::input_text()),
        ])
    } else {
        Line::from(Span::styled(field.text.as_str(), Theme::input_text()))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused {
        // Chevron "❯ " is 2 columns
        let prompt_offset = 2u16;
        let column = u16::try_from(field.cursor_column()).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(prompt_offset).saturating_add(column);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

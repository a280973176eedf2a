use crate::app::state::*;
use crate::assessment::{Assessment, MaturityBand, Score};
use crate::ui::theme::Theme;
use crate::ui::{layout, score_bar};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = layout::rows(area, &[1, 1]);
    let (header, filter_bar, body) = (chunks[0], chunks[1], chunks[2]);

    frame.render_widget(
        Paragraph::new("Assessment Reports")
            .style(Theme::header())
            .alignment(Alignment::Center),
        header,
    );

    if state.store.is_empty() {
        frame.render_widget(
            Paragraph::new("No assessments available yet. Complete an assessment first!")
                .style(Theme::info())
                .block(Block::default().borders(Borders::ALL).border_style(Theme::border())),
            body,
        );
        return;
    }

    let mut filter_spans = vec![Span::styled(" Filter by Framework: ", Theme::label())];
    for filter in state.report_filters() {
        let style = if filter == state.reports.filter {
            Theme::nav_active()
        } else {
            Theme::muted()
        };
        filter_spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(filter_spans)), filter_bar);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body);

    let records = state.filtered_reports();
    let date_format = state.config.ui.date_format.as_str();

    let items: Vec<ListItem> = records
        .iter()
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::styled(a.name().to_string(), Theme::nav_normal()),
                Span::styled(
                    format!(
                        " - {} ({})",
                        a.framework(),
                        a.timestamp().format(date_format)
                    ),
                    Theme::muted(),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Assessments ({}) ", records.len()))
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_style(Theme::border_focused())
                .border_type(Theme::border_type_focused()),
        )
        .highlight_style(Theme::selected())
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if !records.is_empty() {
        list_state.select(Some(state.reports.selected.min(records.len() - 1)));
    }
    frame.render_stateful_widget(list, cols[0], &mut list_state);

    render_detail(frame, cols[1], state.selected_report(), date_format);
}

fn render_detail(frame: &mut Frame, area: Rect, record: Option<&Assessment>, date_format: &str) {
    let block = Block::default()
        .title(" Details ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let Some(a) = record else {
        frame.render_widget(
            Paragraph::new("No assessments for this framework.")
                .style(Theme::muted())
                .block(block),
            area,
        );
        return;
    };

    let field = |label: &str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Theme::label().add_modifier(Modifier::BOLD)),
            Span::styled(value, style),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(a.name().to_string(), Theme::header())),
        field("Framework", a.framework().to_string(), Theme::nav_normal()),
        field(
            "Date",
            a.timestamp().format(date_format).to_string(),
            Theme::nav_normal(),
        ),
        field("Assessor", a.assessor().to_string(), Theme::nav_normal()),
        field(
            "Overall Score",
            format!("{:.1}% ({})", a.overall_score(), a.band()),
            Theme::band(a.band()),
        ),
        field("Status", a.status().to_string(), Theme::success()),
        Line::from(""),
        Line::from(Span::styled(
            "Category Scores:",
            Theme::label().add_modifier(Modifier::BOLD),
        )),
    ];

    let width = a
        .category_scores()
        .keys()
        .map(|k| k.len())
        .max()
        .unwrap_or(0);
    for (category, score) in a.category_scores() {
        lines.push(category_line(category, *score, width));
    }

    if let Some(notes) = a.notes() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Notes:",
            Theme::label().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(notes.to_string(), Theme::info())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press e to download this report as JSON",
        Theme::muted(),
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

/// Bar coloured by the category's own band, not the record's overall one.
fn category_line(category: &str, score: Score, width: usize) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!(" • {:<w$} ", category, w = width)),
        Span::styled(
            score_bar(score.as_f64(), 16),
            Theme::band(MaturityBand::from_score(score.as_f64())),
        ),
        Span::raw(format!(" {}", score)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_bars_use_their_own_band() {
        let high = category_line("Govern", Score::new(80), 8);
        let low = category_line("Map", Score::new(20), 8);

        assert_eq!(high.spans[1].style, Theme::band(MaturityBand::Excellent));
        assert_eq!(low.spans[1].style, Theme::band(MaturityBand::Minimal));
        assert_eq!(high.spans[2].content, " 80%");
    }
}

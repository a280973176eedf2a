use crate::app::state::*;
use crate::assessment::MaturityBand;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = layout::rows(area, &[1, 5]);
    let (header, metrics, body) = (chunks[0], chunks[1], chunks[2]);

    frame.render_widget(
        Paragraph::new("Ethical AI Framework Dashboard")
            .style(Theme::header())
            .alignment(Alignment::Center),
        header,
    );

    render_metrics(frame, metrics, state);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(body);

    render_quick_stats(frame, cols[0], state);
    render_overview(frame, cols[1], state);
}

fn render_metrics(frame: &mut Frame, area: Rect, state: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let store = &state.store;
    let average = store.average_score();
    let metrics = [
        ("Total Assessments", store.count().to_string(), Theme::metric_value()),
        ("Completed", store.count_completed().to_string(), Theme::metric_value()),
        (
            "Average Score",
            percent(average),
            average
                .map(|a| Theme::band(MaturityBand::from_score(a)))
                .unwrap_or_else(Theme::muted),
        ),
    ];

    for ((label, value, style), col) in metrics.into_iter().zip(cols.iter()) {
        let block = Block::default()
            .title(format!(" {} ", label))
            .title_style(Theme::label())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::ACCENT_BLUE));
        let text = vec![Line::from(""), Line::from(Span::styled(value, style))];
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(block),
            *col,
        );
    }
}

fn render_quick_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Quick Stats ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    if state.store.is_empty() {
        frame.render_widget(
            Paragraph::new("No assessments yet. Start with NIST or ISO 42001 assessment!")
                .style(Theme::info())
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
        return;
    }

    let date_format = state.config.ui.date_format.as_str();
    let rows: Vec<Row> = state
        .store
        .list_all()
        .iter()
        .map(|a| {
            Row::new(vec![
                Cell::from(a.name().to_string()),
                Cell::from(a.framework().to_string()),
                Cell::from(Span::styled(
                    format!("{:.1}%", a.overall_score()),
                    Theme::band(a.band()),
                )),
                Cell::from(a.timestamp().format(date_format).to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(32),
            Constraint::Percentage(22),
            Constraint::Percentage(14),
            Constraint::Percentage(32),
        ],
    )
    .header(
        Row::new(vec!["Name", "Framework", "Score", "Date"])
            .style(Theme::label().add_modifier(Modifier::BOLD)),
    )
    .block(block);

    frame.render_widget(table, area);
}

fn render_overview(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Compliance Overview ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut lines: Vec<Line> = Vec::new();
    for def in state.catalog.frameworks() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", def.framework), Theme::info().add_modifier(Modifier::BOLD)),
            Span::raw(def.summary.clone()),
        ]));
    }

    let summary = state.store.summary_by_framework();
    if !summary.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("By framework", Theme::label())));
        for s in summary {
            lines.push(Line::from(vec![
                Span::raw(format!(" {} ", s.framework)),
                Span::styled(format!("x{} ", s.count), Theme::muted()),
                Span::styled(
                    format!("avg {:.1}%", s.average_score),
                    Theme::band(MaturityBand::from_score(s.average_score)),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Start your assessment from the sidebar!",
        Theme::success(),
    )));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const BEST_PRACTICES: &[&str] = &[
    "Identify your AI systems and use cases",
    "Assess current governance maturity",
    "Choose the framework that fits (NIST, ISO, or both)",
    "Conduct regular assessments",
    "Document findings and track improvements",
];

const PRINCIPLES: &[&str] = &[
    "Transparency and explainability",
    "Fairness and bias mitigation",
    "Privacy and data protection",
    "Security and robustness",
    "Human oversight and accountability",
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for def in state.catalog.frameworks() {
        lines.push(Line::from(Span::styled(def.framework.to_string(), Theme::header())));
        if !def.summary.is_empty() {
            lines.push(Line::from(Span::styled(def.summary.clone(), Theme::muted())));
        }
        for cat in &def.categories {
            lines.push(Line::from(vec![
                Span::styled(" • ", Style::default().fg(Theme::ACCENT_TEAL)),
                Span::styled(cat.name.clone(), Theme::title()),
            ]));
            for criterion in &cat.criteria {
                lines.push(Line::from(Span::styled(
                    format!("     {}", criterion),
                    Theme::label(),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Frameworks ")
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        ),
        cols[0],
    );

    let mut tips: Vec<Line> = vec![Line::from(Span::styled("Getting Started", Theme::header()))];
    tips.extend(
        BEST_PRACTICES
            .iter()
            .enumerate()
            .map(|(i, p)| Line::from(format!(" {}. {}", i + 1, p))),
    );
    tips.push(Line::from(""));
    tips.push(Line::from(Span::styled("Key Principles", Theme::header())));
    tips.extend(
        PRINCIPLES
            .iter()
            .map(|p| Line::from(Span::styled(format!(" ✓ {}", p), Theme::success()))),
    );

    frame.render_widget(
        Paragraph::new(tips).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Best Practices ")
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        ),
        cols[1],
    );
}

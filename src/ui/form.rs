use crate::app::state::*;
use crate::assessment::{FrameworkDef, MaturityBand};
use crate::ui::theme::Theme;
use crate::ui::{layout, score_bar, text_field};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const BAR_WIDTH: usize = 24;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, index: usize) {
    let (Some(form), Some(def)) = (state.forms.get(index), state.catalog.frameworks().get(index))
    else {
        return;
    };

    let slider_height = form.scores.len() as u16 + 2;
    let chunks = layout::rows(area, &[2, 3, 3, slider_height, 6, 3, 2]);

    render_header(frame, chunks[0], def);

    text_field::render(
        frame,
        chunks[1],
        "Project/AI System Name",
        "e.g., Customer Service Chatbot",
        &form.name,
        form.focus == FormField::Name,
    );
    text_field::render(
        frame,
        chunks[2],
        "Assessor Name",
        "Your name",
        &form.assessor,
        form.focus == FormField::Assessor,
    );

    render_sliders(frame, chunks[3], form);
    render_criteria(frame, chunks[4], form, def);

    text_field::render(
        frame,
        chunks[5],
        "Additional Notes",
        "Any observations, specific gaps, or planned improvements...",
        &form.notes,
        form.focus == FormField::Notes,
    );

    render_submit(frame, chunks[6], form);
}

fn render_header(frame: &mut Frame, area: Rect, def: &FrameworkDef) {
    let lines = vec![
        Line::from(Span::styled(def.framework.to_string(), Theme::header())),
        Line::from(Span::styled(
            "0-25 Minimal · 26-50 Partial · 51-75 Good · 76-100 Excellent. Rate the current state, not goals.",
            Theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_sliders(frame: &mut Frame, area: Rect, form: &FormState) {
    let focused = matches!(form.focus, FormField::Category(_));
    let block = Block::default()
        .title(" Rate each category (0-100) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let name_width = form
        .scores
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = form
        .scores
        .iter()
        .enumerate()
        .map(|(i, (name, score))| {
            let is_focused = form.focus == FormField::Category(i);
            let band = MaturityBand::from_score(score.as_f64());
            let marker = if is_focused { "▸ " } else { "  " };
            let name_style = if is_focused {
                Theme::selected()
            } else {
                Theme::label()
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Theme::ACCENT_TEAL)),
                Span::styled(format!("{:<w$} ", name, w = name_width), name_style),
                Span::styled(score_bar(score.as_f64(), BAR_WIDTH), Theme::band(band)),
                Span::styled(format!(" {:>3}% ", score.value()), Theme::metric_value()),
                Span::styled(band.label(), Theme::band(band)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_criteria(frame: &mut Frame, area: Rect, form: &FormState, def: &FrameworkDef) {
    let block = Block::default()
        .title(" What to assess ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let category = match form.focus {
        FormField::Category(i) => def.categories.get(i),
        _ => None,
    };

    let lines: Vec<Line> = match category {
        Some(cat) => {
            let mut lines = vec![Line::from(Span::styled(cat.prompt.clone(), Theme::info()))];
            lines.extend(
                cat.criteria
                    .iter()
                    .map(|c| Line::from(Span::raw(format!("• {}", c)))),
            );
            lines
        }
        None => vec![Line::from(Span::styled(
            "Move to a category to see its criteria. ←/→ adjust by step, PgUp/PgDn by 10.",
            Theme::muted(),
        ))],
    };

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn render_submit(frame: &mut Frame, area: Rect, form: &FormState) {
    let focused = form.focus == FormField::Submit;
    let button_style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Theme::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    } else {
        Theme::label()
    };

    let mut spans = vec![Span::styled(" [ Submit Assessment ] ", button_style)];
    match &form.feedback {
        Some(Feedback::Saved { score }) => spans.push(Span::styled(
            format!("  Assessment saved successfully! Overall score: {:.1}%", score),
            Theme::success(),
        )),
        Some(Feedback::Rejected(msg)) => {
            spans.push(Span::styled(format!("  {}", msg), Theme::error()))
        }
        None => spans.push(Span::styled("  Ctrl+S submits from any field", Theme::muted())),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

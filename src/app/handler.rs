use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::assessment::Score;
use chrono::Local;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global keybindings
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return vec![Action::Quit];
    }

    // F1..Fn jump straight to a page
    if let KeyCode::F(n) = key.code {
        if n >= 1 {
            state.set_page(usize::from(n) - 1);
        }
        return vec![];
    }

    if ctrl && key.code == KeyCode::Right {
        state.next_page();
        return vec![];
    }
    if ctrl && key.code == KeyCode::Left {
        state.prev_page();
        return vec![];
    }

    match state.page() {
        Page::Assess(index) => handle_form_key(state, index, key),
        Page::Reports => handle_reports_key(state, key),
        Page::Dashboard | Page::Resources => handle_browse_key(state, key),
    }
}

fn handle_browse_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Tab | KeyCode::Right => {
            state.next_page();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Left => {
            state.prev_page();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_reports_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev_report();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next_report();
            vec![]
        }
        KeyCode::Right | KeyCode::Char('f') => {
            state.cycle_report_filter(true);
            vec![]
        }
        KeyCode::Left => {
            state.cycle_report_filter(false);
            vec![]
        }
        KeyCode::Enter | KeyCode::Char('e') => match state.selected_report() {
            Some(record) => vec![Action::ExportReport(Box::new(record.clone()))],
            None => {
                state.set_status("Nothing to export".to_string());
                vec![]
            }
        },
        KeyCode::Tab => {
            state.next_page();
            vec![]
        }
        KeyCode::BackTab => {
            state.prev_page();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_form_key(state: &mut AppState, index: usize, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('s') {
        submit(state, index);
        return vec![];
    }

    let step = state.config.ui.score_step;
    let Some(form) = state.forms.get_mut(index) else {
        return vec![];
    };

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            return vec![];
        }
        KeyCode::Esc => {
            form.feedback = None;
            return vec![];
        }
        KeyCode::Enter => {
            if form.focus == FormField::Submit {
                submit(state, index);
            } else {
                form.next_field();
            }
            return vec![];
        }
        _ => {}
    }

    if let FormField::Category(_) = form.focus {
        match key.code {
            KeyCode::Left | KeyCode::Char('-') => form.update_focused_score(|s| s.lower(step)),
            KeyCode::Right | KeyCode::Char('+') => form.update_focused_score(|s| s.raise(step)),
            KeyCode::PageDown => form.update_focused_score(|s| s.lower(10)),
            KeyCode::PageUp => form.update_focused_score(|s| s.raise(10)),
            KeyCode::Home => form.update_focused_score(|_| Score::MIN),
            KeyCode::End => form.update_focused_score(|_| Score::MAX),
            _ => {}
        }
        return vec![];
    }

    if let Some(field) = form.focused_text_mut() {
        edit_text(field, key);
    }
    vec![]
}

fn edit_text(field: &mut TextField, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                field.delete_word_back();
            } else {
                field.delete_back();
            }
        }
        KeyCode::Delete => field.delete_forward(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => field.move_home(),
                    'e' => field.move_end(),
                    'w' => field.delete_word_back(),
                    'u' => field.clear(),
                    _ => {}
                }
            } else {
                field.insert_char(c);
            }
        }
        _ => {}
    }
}

fn submit(state: &mut AppState, index: usize) {
    if let Ok(score) = state.submit_form(index, Local::now()) {
        state.set_status(format!(
            "Assessment saved successfully! Overall score: {:.1}%",
            score
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{FrameworkCatalog, FrameworkFilter};
    use crate::config::AppConfig;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), FrameworkCatalog::builtin())
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn ctrl(state: &mut AppState, c: char) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn ctrl_c_quits_from_any_page() {
        let mut state = state();
        state.set_page(1);
        assert!(matches!(ctrl(&mut state, 'c').as_slice(), [Action::Quit]));
    }

    #[test]
    fn function_keys_select_pages() {
        let mut state = state();
        press(&mut state, KeyCode::F(4));
        assert_eq!(state.page(), Page::Reports);
        press(&mut state, KeyCode::F(2));
        assert_eq!(state.page(), Page::Assess(0));
        press(&mut state, KeyCode::F(12));
        assert_eq!(state.page(), Page::Assess(0));
    }

    #[test]
    fn keyboard_submission_records_assessment() {
        let mut state = state();
        press(&mut state, KeyCode::F(2));
        type_text(&mut state, "Chatbot");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "Alice");
        press(&mut state, KeyCode::Tab);

        // Govern 50 -> 80, Map 50 -> 60, Measure 50 -> 70, Manage 50 -> 90
        for _ in 0..6 {
            press(&mut state, KeyCode::Right);
        }
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::PageUp);
        press(&mut state, KeyCode::PageUp);
        press(&mut state, KeyCode::Tab);
        for _ in 0..8 {
            press(&mut state, KeyCode::Right);
        }

        ctrl(&mut state, 's');

        assert_eq!(state.store.count(), 1);
        let record = &state.store.list_all()[0];
        assert_eq!(record.name(), "Chatbot");
        assert_eq!(record.overall_score(), 75.0);
        assert!(state.status_line().contains("75.0%"));
    }

    #[test]
    fn enter_on_submit_button_submits() {
        let mut state = state();
        press(&mut state, KeyCode::F(3));
        type_text(&mut state, "Recommender");
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "Bob");
        state.forms[1].focus = FormField::Submit;
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.store.count(), 1);
        assert_eq!(state.store.list_all()[0].assessor(), "Bob");
    }

    #[test]
    fn blank_assessor_is_reported_in_place() {
        let mut state = state();
        press(&mut state, KeyCode::F(2));
        type_text(&mut state, "Chatbot");
        ctrl(&mut state, 's');

        assert_eq!(state.store.count(), 0);
        assert_eq!(
            state.forms[0].feedback,
            Some(Feedback::Rejected("Please fill in the assessor name".into()))
        );
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.forms[0].feedback, None);
    }

    #[test]
    fn q_types_into_forms_but_quits_elsewhere() {
        let mut state = state();
        press(&mut state, KeyCode::F(2));
        assert!(press(&mut state, KeyCode::Char('q')).is_empty());
        assert_eq!(state.forms[0].name.text, "q");

        press(&mut state, KeyCode::F(1));
        assert!(matches!(
            press(&mut state, KeyCode::Char('q')).as_slice(),
            [Action::Quit]
        ));
    }

    #[test]
    fn reports_export_selected_record() {
        let mut state = state();
        press(&mut state, KeyCode::F(4));
        assert!(press(&mut state, KeyCode::Char('e')).is_empty());
        assert_eq!(state.status_message.as_deref(), Some("Nothing to export"));

        press(&mut state, KeyCode::F(2));
        type_text(&mut state, "Chatbot");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "Alice");
        ctrl(&mut state, 's');

        press(&mut state, KeyCode::F(4));
        let actions = press(&mut state, KeyCode::Char('e'));
        match actions.as_slice() {
            [Action::ExportReport(record)] => assert_eq!(record.name(), "Chatbot"),
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn reports_filter_keys_cycle() {
        let mut state = state();
        press(&mut state, KeyCode::F(4));
        press(&mut state, KeyCode::Char('f'));
        assert_eq!(
            state.reports.filter,
            FrameworkFilter::Only(crate::assessment::Framework::NistAiRmf)
        );
        press(&mut state, KeyCode::Left);
        assert_eq!(state.reports.filter, FrameworkFilter::All);
    }
}

use crate::assessment::{
    Assessment, AssessmentStore, Framework, FrameworkCatalog, FrameworkDef, FrameworkFilter,
    Score, Submission, ValidationError,
};
use crate::config::AppConfig;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const STATUS_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    /// Assessment form for the catalog framework at this index.
    Assess(usize),
    Reports,
    Resources,
}

/// Single-line editable text with a byte-offset cursor.
#[derive(Debug, Default)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Assessor,
    Category(usize),
    Notes,
    Submit,
}

/// Outcome of the last submit, shown in place on the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Saved { score: f64 },
    Rejected(String),
}

#[derive(Debug)]
pub struct FormState {
    pub framework: Framework,
    pub name: TextField,
    pub assessor: TextField,
    pub scores: Vec<(String, Score)>,
    pub notes: TextField,
    pub focus: FormField,
    pub feedback: Option<Feedback>,
}

impl FormState {
    pub fn new(def: &FrameworkDef, initial: Score) -> Self {
        Self {
            framework: def.framework.clone(),
            name: TextField::new(),
            assessor: TextField::new(),
            scores: def
                .category_names()
                .map(|c| (c.to_string(), initial))
                .collect(),
            notes: TextField::new(),
            focus: FormField::Name,
            feedback: None,
        }
    }

    fn field_order(&self) -> Vec<FormField> {
        let mut order = vec![FormField::Name, FormField::Assessor];
        order.extend((0..self.scores.len()).map(FormField::Category));
        order.push(FormField::Notes);
        order.push(FormField::Submit);
        order
    }

    pub fn next_field(&mut self) {
        let order = self.field_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn prev_field(&mut self) {
        let order = self.field_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }

    /// The text field under focus, if the focus is on one.
    pub fn focused_text_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Assessor => Some(&mut self.assessor),
            FormField::Notes => Some(&mut self.notes),
            FormField::Category(_) | FormField::Submit => None,
        }
    }

    /// Applies `f` to the score under focus.
    pub fn update_focused_score(&mut self, f: impl FnOnce(Score) -> Score) {
        if let FormField::Category(i) = self.focus {
            if let Some((_, score)) = self.scores.get_mut(i) {
                *score = f(*score);
            }
        }
    }

    pub fn to_submission(&self) -> Submission {
        let mut submission = Submission::new(self.framework.clone());
        submission.name = self.name.text.clone();
        submission.assessor = self.assessor.text.clone();
        submission.notes = self.notes.text.clone();
        submission.scores = self
            .scores
            .iter()
            .map(|(c, s)| (c.clone(), s.value()))
            .collect();
        submission
    }

    pub fn reset(&mut self, initial: Score) {
        self.name.clear();
        self.assessor.clear();
        self.notes.clear();
        for (_, score) in &mut self.scores {
            *score = initial;
        }
        self.focus = FormField::Name;
    }
}

#[derive(Debug, Default)]
pub struct ReportsState {
    pub filter: FrameworkFilter,
    pub selected: usize,
}

/// Formats an optional score as `75.0%`, or `N/A` when absent.
pub fn percent(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.1}%", s),
        None => "N/A".to_string(),
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub catalog: FrameworkCatalog,
    pub store: AssessmentStore,
    pub pages: Vec<Page>,
    pub page_index: usize,
    pub forms: Vec<FormState>,
    pub reports: ReportsState,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    status_expires_at: Option<Instant>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: FrameworkCatalog) -> Self {
        let initial = Score::new(config.ui.default_score);
        let forms = catalog
            .frameworks()
            .iter()
            .map(|def| FormState::new(def, initial))
            .collect();

        let mut pages = vec![Page::Dashboard];
        pages.extend((0..catalog.len()).map(Page::Assess));
        pages.push(Page::Reports);
        pages.push(Page::Resources);

        Self {
            config,
            catalog,
            store: AssessmentStore::new(),
            pages,
            page_index: 0,
            forms,
            reports: ReportsState::default(),
            should_quit: false,
            dirty: true,
            status_message: None,
            status_expires_at: None,
        }
    }

    pub fn page(&self) -> Page {
        self.pages[self.page_index]
    }

    pub fn page_title(&self, page: Page) -> String {
        match page {
            Page::Dashboard => "Dashboard".to_string(),
            Page::Assess(i) => match self.catalog.frameworks().get(i) {
                Some(def) => format!("{} Assessment", def.framework),
                None => "Assessment".to_string(),
            },
            Page::Reports => "Reports".to_string(),
            Page::Resources => "Resources".to_string(),
        }
    }

    pub fn set_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.page_index = index;
            self.dirty = true;
            tracing::debug!(page = %self.page_title(self.page()), "navigate");
        }
    }

    pub fn next_page(&mut self) {
        self.set_page((self.page_index + 1) % self.pages.len());
    }

    pub fn prev_page(&mut self) {
        self.set_page((self.page_index + self.pages.len() - 1) % self.pages.len());
    }

    pub fn initial_score(&self) -> Score {
        Score::new(self.config.ui.default_score)
    }

    /// Submits the form at `index` into the store. The form is cleared on
    /// success and keeps its contents on rejection.
    pub fn submit_form(
        &mut self,
        index: usize,
        now: DateTime<Local>,
    ) -> Result<f64, ValidationError> {
        let Some(form) = self.forms.get(index) else {
            return Err(ValidationError::UnknownFramework(format!("form #{}", index)));
        };
        let submission = form.to_submission();
        let framework = submission.framework.clone();

        match self.store.submit(&self.catalog, submission, now) {
            Ok(record) => {
                let score = record.overall_score();
                tracing::info!(
                    name = record.name(),
                    assessor = record.assessor(),
                    framework = %framework,
                    score,
                    "assessment submitted"
                );
                let initial = self.initial_score();
                let form = &mut self.forms[index];
                form.reset(initial);
                form.feedback = Some(Feedback::Saved { score });
                self.dirty = true;
                Ok(score)
            }
            Err(e) => {
                if e.is_missing_field() {
                    tracing::info!(framework = %framework, error = %e, "submission incomplete");
                } else {
                    tracing::warn!(framework = %framework, error = %e, "submission rejected");
                }
                self.forms[index].feedback = Some(Feedback::Rejected(e.to_string()));
                self.dirty = true;
                Err(e)
            }
        }
    }

    /// Filters offered on the reports page: all, then each framework.
    pub fn report_filters(&self) -> Vec<FrameworkFilter> {
        let mut filters = vec![FrameworkFilter::All];
        filters.extend(
            self.catalog
                .frameworks()
                .iter()
                .map(|d| FrameworkFilter::Only(d.framework.clone())),
        );
        filters
    }

    pub fn cycle_report_filter(&mut self, forward: bool) {
        let filters = self.report_filters();
        let idx = filters
            .iter()
            .position(|f| *f == self.reports.filter)
            .unwrap_or(0);
        let next = if forward {
            (idx + 1) % filters.len()
        } else {
            (idx + filters.len() - 1) % filters.len()
        };
        self.reports.filter = filters[next].clone();
        self.reports.selected = 0;
        self.dirty = true;
    }

    pub fn filtered_reports(&self) -> Vec<&Assessment> {
        self.store.list_by_framework(&self.reports.filter)
    }

    pub fn selected_report(&self) -> Option<&Assessment> {
        self.filtered_reports().get(self.reports.selected).copied()
    }

    pub fn select_next_report(&mut self) {
        let len = self.filtered_reports().len();
        if len > 0 && self.reports.selected + 1 < len {
            self.reports.selected += 1;
        }
    }

    pub fn select_prev_report(&mut self) {
        self.reports.selected = self.reports.selected.saturating_sub(1);
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_expires_at = Some(Instant::now() + STATUS_TTL);
        self.dirty = true;
    }

    /// Drops the status message once its time is up.
    pub fn expire_status(&mut self, now: Instant) {
        if self.status_expires_at.is_some_and(|t| now >= t) {
            self.status_message = None;
            self.status_expires_at = None;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        format!(
            "Assessments: {} | Completed: {} | Average: {}",
            self.store.count(),
            self.store.count_completed(),
            percent(self.store.average_score())
        )
    }
}

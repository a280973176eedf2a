use crate::assessment::Assessment;

/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug)]
pub enum Action {
    ExportReport(Box<Assessment>),
    Quit,
}

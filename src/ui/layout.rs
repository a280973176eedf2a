use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub nav: Rect,
    pub session_panel: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let body = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: sidebar | gap | page content
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(30), // Sidebar
            Constraint::Min(40),    // Page
        ])
        .split(body);

    let sidebar = h_chunks[0];
    let content = h_chunks[1];

    // Sidebar: page list | session summary
    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Navigation
            Constraint::Length(6), // Session panel
        ])
        .split(sidebar);

    AppLayout {
        nav: side_chunks[0],
        session_panel: side_chunks[1],
        content,
        status_bar,
    }
}

/// Splits `area` into a stack of fixed-height rows followed by a filler.
pub fn rows(area: Rect, heights: &[u16]) -> Vec<Rect> {
    let mut constraints: Vec<Constraint> = heights.iter().map(|h| Constraint::Length(*h)).collect();
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

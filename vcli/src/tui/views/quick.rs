use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::tui::state::App;
use crate::tui::ui::{render_error, render_message, render_progress, render_toolbar};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let quick = &app.quick;
    let label = quick
        .action
        .as_ref()
        .map(|a| a.message())
        .unwrap_or_else(|| "No action requested".to_string());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_toolbar(f, chunks[0], "🚀 Quick Action", &[("esc", "Home"), ("ctrl+q", "Quit")]);
    render_progress(f, chunks[1], &label, quick.progress.unwrap_or(0.0));

    if let Some(error) = &quick.error {
        render_error(f, chunks[2], error);
    } else if let Some(outcome) = &quick.outcome {
        render_message(
            f,
            chunks[2],
            "Result",
            &format!("{} ({})", outcome.message, outcome.code),
        );
    }
}

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Cell, Row},
    Frame,
};

use vcli_core::types::ProgramEntry;

use super::render_list;
use crate::tui::state::App;
use crate::tui::ui::{render_busy, render_toolbar, screen_chunks, TEXT_COLOR, WARNING_COLOR};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let screen = &app.programs;
    let (toolbar, busy, body) = screen_chunks(area, screen.busy.is_some());

    render_toolbar(
        f,
        toolbar,
        "📦 Programs",
        &[
            ("n", "New"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("c", "Create Room"),
            ("esc", "Back"),
        ],
    );
    if let (Some(area), Some(b)) = (busy, &screen.busy) {
        render_busy(f, area, &b.message);
    }

    render_list(
        f,
        body,
        screen,
        "📦 Program Library",
        "No programs loaded. Press n to upload one.",
        &["ID", "Name", "Program", "Type", "App File", "Compiled"],
        &[
            Constraint::Length(5),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Length(10),
            Constraint::Percentage(25),
            Constraint::Min(19),
        ],
        program_row,
    );
}

fn program_row(program: &ProgramEntry) -> Row<'static> {
    // Entries without an app file cannot be edited
    let style = if program.has_app_file() {
        Style::default().fg(TEXT_COLOR)
    } else {
        Style::default().fg(WARNING_COLOR)
    };

    Row::new(vec![
        Cell::from(program.program_id.to_string()),
        Cell::from(program.friendly_name.clone()),
        Cell::from(program.program_name.clone()),
        Cell::from(program.program_type.clone()),
        Cell::from(program.app_file.clone()),
        Cell::from(program.compile_date_time.clone()),
    ])
    .style(style)
}

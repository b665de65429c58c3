use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Cell, Row},
    Frame,
};

use vcli_core::types::ApiToken;

use super::render_list;
use crate::tui::state::App;
use crate::tui::ui::{
    render_busy, render_toolbar, screen_chunks, INFO_COLOR, TEXT_COLOR, WARNING_COLOR,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let screen = &app.tokens;
    let (toolbar, busy, body) = screen_chunks(area, screen.busy.is_some());

    render_toolbar(
        f,
        toolbar,
        "🔑 Authorization",
        &[("n", "New"), ("e", "Edit"), ("d", "Delete"), ("esc", "Back")],
    );
    if let (Some(area), Some(b)) = (busy, &screen.busy) {
        render_busy(f, area, &b.message);
    }

    render_list(
        f,
        body,
        screen,
        "🔑 API Tokens",
        "No API tokens. Press n to create one.",
        &["Token", "Access", "Description"],
        &[
            Constraint::Percentage(45),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
        token_row,
    );
}

fn token_row(token: &ApiToken) -> Row<'static> {
    let access = if token.status.is_readonly() {
        INFO_COLOR
    } else {
        WARNING_COLOR
    };

    Row::new(vec![
        Cell::from(token.token.clone()).style(Style::default().fg(TEXT_COLOR)),
        Cell::from(token.status.to_string()).style(Style::default().fg(access)),
        Cell::from(token.description.clone()),
    ])
}

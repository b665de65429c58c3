use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Style},
    widgets::{Cell, Row},
    Frame,
};

use vcli_core::types::{Room, RoomStatus};

use super::render_list;
use crate::tui::state::App;
use crate::tui::ui::{
    render_busy, render_toolbar, screen_chunks, ERROR_COLOR, INFO_COLOR, SUCCESS_COLOR,
    TEXT_COLOR, WARNING_COLOR,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let screen = &app.rooms;
    let (toolbar, busy, body) = screen_chunks(area, screen.busy.is_some());

    render_toolbar(
        f,
        toolbar,
        "🏢 Rooms",
        &[
            ("s", "Start/Stop"),
            ("r", "Restart"),
            ("d", "Debug"),
            ("n", "New"),
            ("e", "Edit"),
            ("x", "Delete"),
            ("i", "IP Table"),
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
        "🏢 Rooms",
        "No rooms configured. Press n to create one.",
        &["ID", "Name", "Status", "Debug", "Program", "Type", "Location"],
        &[
            Constraint::Percentage(12),
            Constraint::Percentage(18),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Percentage(20),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
        room_row,
    );
}

fn status_color(status: &RoomStatus) -> Color {
    match status {
        RoomStatus::Running => SUCCESS_COLOR,
        RoomStatus::Starting | RoomStatus::Stopping => WARNING_COLOR,
        // Unknown statuses render like Stopped
        _ => ERROR_COLOR,
    }
}

fn room_row(room: &Room) -> Row<'static> {
    let debug = if room.debugging { "on" } else { "off" };

    Row::new(vec![
        Cell::from(room.id.clone()),
        Cell::from(room.name.clone()),
        Cell::from(room.status.to_string()).style(Style::default().fg(status_color(&room.status))),
        Cell::from(debug).style(Style::default().fg(INFO_COLOR)),
        Cell::from(room.program_friendly.clone()),
        Cell::from(room.program_type.clone()),
        Cell::from(room.location.clone()),
    ])
    .style(Style::default().fg(TEXT_COLOR))
}

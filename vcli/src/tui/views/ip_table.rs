use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Cell, Row},
    Frame,
};

use vcli_core::types::IpTableEntry;

use super::render_list;
use crate::tui::state::App;
use crate::tui::ui::{render_toolbar, screen_chunks, ERROR_COLOR, SUCCESS_COLOR};

pub fn render(f: &mut Frame, area: Rect, app: &App, room: &str) {
    let (toolbar, _, body) = screen_chunks(area, false);

    render_toolbar(
        f,
        toolbar,
        &format!("🌐 IP Table {}", room),
        &[("j/k", "Scroll"), ("esc", "Back to Rooms")],
    );

    render_list(
        f,
        body,
        &app.ip_table,
        "🌐 Devices",
        "No devices in this room's IP table.",
        &["IP ID", "Model", "Description", "Remote IP", "Status", "Hostname"],
        &[
            Constraint::Length(6),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
        entry_row,
    );
}

fn entry_row(entry: &IpTableEntry) -> Row<'static> {
    let status_color = if entry.is_online() {
        SUCCESS_COLOR
    } else {
        ERROR_COLOR
    };

    Row::new(vec![
        Cell::from(entry.ip_id_hex()),
        Cell::from(entry.model.clone()),
        Cell::from(entry.description.clone()),
        Cell::from(entry.remote_ip.clone()),
        Cell::from(entry.status.clone()).style(Style::default().fg(status_color)),
        Cell::from(entry.hostname.clone()),
    ])
}

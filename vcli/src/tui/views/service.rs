use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

use crate::tui::state::App;
use crate::tui::types::ServiceAction;
use crate::tui::ui::{
    header_row, render_error, render_message, render_progress, render_toolbar, titled_block,
    SUCCESS_COLOR, TEXT_COLOR,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let service = &app.service;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(ServiceAction::ALL.len() as u16 + 3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_toolbar(
        f,
        chunks[0],
        "⚙️  virtualcontrol.service",
        &[
            ("enter", "Run"),
            ("ctrl+s", "Stop"),
            ("ctrl+n", "Start"),
            ("ctrl+r", "Restart"),
            ("l", "Logs"),
            ("esc", "Back"),
        ],
    );

    let rows: Vec<Row> = ServiceAction::ALL
        .iter()
        .map(|action| {
            Row::new(vec![
                Cell::from(action.verb()).style(Style::default().fg(SUCCESS_COLOR)),
                Cell::from(action.description()).style(Style::default().fg(TEXT_COLOR)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(10), Constraint::Min(20)])
        .header(header_row(&["Action", "Description"]))
        .block(titled_block("Actions".to_string()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");
    f.render_stateful_widget(table, chunks[1], &mut service.table_state.clone());

    match (service.running, service.progress) {
        (Some(action), Some(ratio)) => {
            render_progress(f, chunks[2], &format!("systemctl {}", action.verb()), ratio)
        }
        _ => render_progress(f, chunks[2], "idle", 0.0),
    }

    if let Some(error) = &service.error {
        render_error(f, chunks[3], error);
    } else if let Some(output) = &service.output {
        render_message(f, chunks[3], "Output", output);
    }
}

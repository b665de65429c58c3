use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

use crate::tui::state::{device_info_rows, App};
use crate::tui::ui::{
    header_row, render_error, render_message, titled_block, INFO_COLOR, TEXT_COLOR,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    render_device_table(f, area, app);
}

/// Identity table shared by the home and device screens.
pub(crate) fn render_device_table(f: &mut Frame, area: Rect, app: &App) {
    if let Some(error) = &app.device.error {
        render_error(f, area, error);
        return;
    }
    let Some(info) = &app.device.info else {
        render_message(f, area, "🖥  Device", "Loading...");
        return;
    };

    let rows: Vec<Row> = device_info_rows(info)
        .into_iter()
        .map(|(label, value)| {
            Row::new(vec![
                Cell::from(label).style(Style::default().fg(INFO_COLOR)),
                Cell::from(value).style(Style::default().fg(TEXT_COLOR)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(20)])
        .header(header_row(&["Property", "Value"]))
        .block(titled_block(format!("🖥  Device {}", info.name)))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(table, area, &mut app.device.table_state.clone());
}

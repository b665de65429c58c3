use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

use crate::tui::state::App;
use crate::tui::types::HELP_ROWS;
use crate::tui::ui::{header_row, titled_block, INFO_COLOR, SUCCESS_COLOR, TEXT_COLOR};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = HELP_ROWS
        .iter()
        .map(|(screen, keys, action)| {
            Row::new(vec![
                Cell::from(*screen).style(Style::default().fg(INFO_COLOR)),
                Cell::from(*keys).style(Style::default().fg(SUCCESS_COLOR)),
                Cell::from(*action).style(Style::default().fg(TEXT_COLOR)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(24),
            Constraint::Min(20),
        ],
    )
    .header(header_row(&["Screen", "Keys", "Action"]))
    .block(titled_block("❓ Keybindings (esc to go back)".to_string()))
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(table, area, &mut app.ui.help_state.clone());
}

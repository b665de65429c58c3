//! Per-screen renderers

pub mod device;
pub mod forms;
pub mod help;
pub mod home;
pub mod ip_table;
pub mod programs;
pub mod quick;
pub mod rooms;
pub mod service;
pub mod tokens;

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Row, Table},
    Frame,
};

use super::state::ListScreen;
use super::ui::{header_row, render_error, render_message, titled_block};

/// Render a fetched list: its error box, a loading or empty message, or the
/// table itself.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_list<T>(
    f: &mut Frame,
    area: Rect,
    screen: &ListScreen<T>,
    title: &str,
    empty: &str,
    headers: &[&str],
    widths: &[Constraint],
    to_row: impl Fn(&T) -> Row<'static>,
) {
    if let Some(error) = &screen.error {
        render_error(f, area, error);
        return;
    }
    if !screen.loaded {
        render_message(f, area, title, "Loading...");
        return;
    }
    if screen.items.is_empty() {
        render_message(f, area, title, empty);
        return;
    }

    let rows: Vec<Row> = screen.items.iter().map(to_row).collect();
    let table = Table::new(rows, widths.to_vec())
        .header(header_row(headers))
        .block(titled_block(format!(
            "{} ({} total)",
            title,
            screen.items.len()
        )))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut screen.table_state.clone());
}

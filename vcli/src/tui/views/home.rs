use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{List, ListItem},
    Frame,
};

use super::device::render_device_table;
use crate::tui::state::App;
use crate::tui::types::MenuItem;
use crate::tui::ui::{titled_block, PRIMARY_COLOR, SUCCESS_COLOR, TEXT_COLOR};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_menu(f, chunks[0], app);
    render_device_table(f, chunks[1], app);
}

fn render_menu(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .map(|item| {
            let hotkey = item.hotkey();
            let label = if hotkey.is_empty() {
                format!("    {}", item.label())
            } else {
                format!("[{}] {}", hotkey, item.label())
            };
            ListItem::new(label).style(Style::default().fg(TEXT_COLOR))
        })
        .collect();

    let menu = List::new(items)
        .block(titled_block("🏠 Menu".to_string()))
        .highlight_style(
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::REVERSED),
        )
        .highlight_symbol(">> ")
        .style(Style::default().fg(PRIMARY_COLOR));

    f.render_stateful_widget(menu, area, &mut app.ui.menu_state.clone());
}

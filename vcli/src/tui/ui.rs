//! TUI rendering
//!
//! Frame layout (header, screen body, status bar), overlays, and the widgets
//! the per-screen views in [`views`](super::views) share.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

use vcli_core::VcliError;

use super::state::App;
use super::types::AppMode;
use super::views;

// Color scheme
pub(crate) const PRIMARY_COLOR: Color = Color::Cyan;
pub(crate) const SECONDARY_COLOR: Color = Color::Blue;
pub(crate) const SUCCESS_COLOR: Color = Color::Green;
pub(crate) const WARNING_COLOR: Color = Color::Yellow;
pub(crate) const ERROR_COLOR: Color = Color::Red;
pub(crate) const INFO_COLOR: Color = Color::Magenta;
pub(crate) const TEXT_COLOR: Color = Color::White;

pub fn render(f: &mut Frame, app: &App) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_header(f, chunks[0], app);

    match &app.ui.mode {
        AppMode::Home => views::home::render(f, chunks[1], app),
        AppMode::Programs | AppMode::DeleteProgramConfirm => {
            views::programs::render(f, chunks[1], app)
        }
        AppMode::Rooms | AppMode::DeleteRoomConfirm => views::rooms::render(f, chunks[1], app),
        AppMode::IpTable(room) => views::ip_table::render(f, chunks[1], app, room),
        AppMode::Tokens | AppMode::DeleteTokenConfirm => views::tokens::render(f, chunks[1], app),
        AppMode::DeviceInfo => views::device::render(f, chunks[1], app),
        AppMode::ServiceControl => views::service::render(f, chunks[1], app),
        AppMode::Help => views::help::render(f, chunks[1], app),
        AppMode::QuickAction => views::quick::render(f, chunks[1], app),
        AppMode::NewProgramForm | AppMode::EditProgramForm => {
            views::forms::render_program_form(f, chunks[1], app)
        }
        AppMode::NewRoomForm | AppMode::EditRoomForm => {
            views::forms::render_room_form(f, chunks[1], app)
        }
        AppMode::NewTokenForm | AppMode::EditTokenForm => {
            views::forms::render_token_form(f, chunks[1], app)
        }
    }

    render_status_bar(f, chunks[2], app);

    if app.ui.mode.is_confirm() {
        render_confirm_dialog(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let target = app
        .ui
        .remote_host
        .clone()
        .unwrap_or_else(|| "localhost".to_string());
    let status = app.ui.connection_status;

    let content = Line::from(vec![
        Span::styled(
            "VIRTUAL CONTROL",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(TEXT_COLOR)),
        Span::styled(app.ui.mode.title(), Style::default().fg(TEXT_COLOR)),
        Span::styled(" | ", Style::default().fg(TEXT_COLOR)),
        Span::styled(
            format!("{} {}", status.icon(), target),
            Style::default().fg(status.color()),
        ),
    ]);

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SECONDARY_COLOR)),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let updated = match app.ui.last_updated {
        Some(at) => format!("Updated {}", at.format("%H:%M:%S")),
        None => "Waiting for appliance".to_string(),
    };

    let (text, style) = match &app.ui.status_message {
        Some(msg) => (format!("✅ {} | {}", msg, updated), Style::default().fg(SUCCESS_COLOR)),
        None => (
            format!("{} | ctrl+c quit", updated),
            Style::default().fg(TEXT_COLOR),
        ),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

/// One line of `key action` hints above a table.
pub(crate) fn render_toolbar(f: &mut Frame, area: Rect, title: &str, keys: &[(&str, &str)]) {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
    )];
    for (key, action) in keys {
        spans.push(Span::styled(" | ", Style::default().fg(TEXT_COLOR)));
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(TEXT_COLOR),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

pub(crate) fn header_row(titles: &[&str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|t| {
                Cell::from(t.to_string()).style(
                    Style::default()
                        .fg(PRIMARY_COLOR)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    )
}

pub(crate) fn titled_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(PRIMARY_COLOR))
}

/// Split `area` into a toolbar line, an optional busy line and the body.
pub(crate) fn screen_chunks(area: Rect, busy: bool) -> (Rect, Option<Rect>, Rect) {
    let busy_height = if busy { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(busy_height),
            Constraint::Min(0),
        ])
        .split(area);

    (chunks[0], busy.then_some(chunks[1]), chunks[2])
}

pub(crate) fn render_busy(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(format!("⏳ {}", message))
        .style(Style::default().fg(WARNING_COLOR))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Rows of the error table.
pub(crate) fn error_rows(error: &VcliError) -> Vec<(&'static str, String)> {
    let mut rows = vec![("ERROR", error.to_string())];
    if matches!(
        error,
        VcliError::Transport { .. } | VcliError::Status { .. } | VcliError::Decode { .. }
    ) {
        rows.push((
            "MESSAGE",
            "There was an error connecting to the VC4 service".to_string(),
        ));
        rows.push(("MESSAGE", "Please verify your IP address and token".to_string()));
        rows.push((
            "MESSAGE",
            "Please verify the virtualcontrol service is enabled and running.".to_string(),
        ));
    }
    rows
}

pub(crate) fn render_error(f: &mut Frame, area: Rect, error: &VcliError) {
    let rows: Vec<Row> = error_rows(error)
        .into_iter()
        .map(|(label, text)| {
            Row::new(vec![
                Cell::from(label).style(Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD)),
                Cell::from(text),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(10), Constraint::Min(20)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title("❌ Error")
            .border_style(Style::default().fg(ERROR_COLOR)),
    );

    f.render_widget(table, area);
}

pub(crate) fn render_progress(f: &mut Frame, area: Rect, label: &str, ratio: f64) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(label.to_string()))
        .gauge_style(Style::default().fg(INFO_COLOR))
        .ratio(ratio.clamp(0.0, 1.0));
    f.render_widget(gauge, area);
}

pub(crate) fn render_message(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(message.to_string())
        .block(titled_block(title.to_string()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_confirm_dialog(f: &mut Frame, app: &App) {
    if let Some(dialog) = &app.ui.confirm_dialog {
        let area = centered_rect(50, 30, f.size());
        f.render_widget(Clear, area);

        let border = if dialog.is_dangerous {
            ERROR_COLOR
        } else {
            WARNING_COLOR
        };
        let block = Block::default()
            .title(dialog.title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        f.render_widget(block, area);

        let inner_area = area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(inner_area);

        let message = Paragraph::new(dialog.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(message, chunks[0]);

        let button_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let no_style = if !dialog.selected {
            Style::default()
                .bg(WARNING_COLOR)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(WARNING_COLOR)
        };

        let yes_style = if dialog.selected {
            Style::default()
                .bg(ERROR_COLOR)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ERROR_COLOR)
        };

        let no_button = Paragraph::new(dialog.cancel_text.as_str())
            .style(no_style)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);

        let yes_button = Paragraph::new(dialog.confirm_text.as_str())
            .style(yes_style)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);

        f.render_widget(no_button, button_chunks[0]);
        f.render_widget(yes_button, button_chunks[1]);
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

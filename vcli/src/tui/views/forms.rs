//! Form rendering
//!
//! All forms share one layout: key hints, an optional note, one row per field
//! with its inline validation message, the submission progress bar and any
//! error that is not tied to a field.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::forms::{Form, Submission};
use crate::tui::state::App;
use crate::tui::ui::{
    header_row, render_error, render_progress, render_toolbar, titled_block, ERROR_COLOR,
    INFO_COLOR, PRIMARY_COLOR, TEXT_COLOR,
};

struct FieldLine {
    label: &'static str,
    value: String,
    placeholder: &'static str,
    error: Option<String>,
}

pub fn render_program_form(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.program_form;
    let fields = form
        .fields()
        .iter()
        .map(|field| FieldLine {
            label: field.label(),
            value: form.value(*field),
            placeholder: field.placeholder(),
            error: form.submission.field_error(field.key()).map(str::to_string),
        })
        .collect();

    let note = form
        .is_editing()
        .then(|| format!("Editing program {}", form.options.program_id));

    render_form(f, area, &app.ui.mode.title(), note, fields, form.focus(), &form.submission);
}

pub fn render_room_form(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.room_form;
    let fields = form
        .fields()
        .iter()
        .map(|field| FieldLine {
            label: field.label(),
            value: form.value(*field),
            placeholder: field.placeholder(),
            error: form.submission.field_error(field.key()).map(str::to_string),
        })
        .collect();

    let note = match (&form.programs_error, form.original_id()) {
        (Some(e), _) => Some(format!("Could not load programs: {}", e)),
        (None, Some(id)) => Some(format!("Editing room {}", id)),
        (None, None) => None,
    };

    render_form(f, area, &app.ui.mode.title(), note, fields, form.focus(), &form.submission);
}

pub fn render_token_form(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.token_form;
    let fields = form
        .fields()
        .iter()
        .map(|field| FieldLine {
            label: field.label(),
            value: form.value(*field),
            placeholder: "",
            error: form.submission.field_error(field.key()).map(str::to_string),
        })
        .collect();

    let note = form.token.as_ref().map(|t| format!("Token {}", t));

    render_form(f, area, &app.ui.mode.title(), note, fields, form.focus(), &form.submission);
}

fn render_form(
    f: &mut Frame,
    area: Rect,
    title: &str,
    note: Option<String>,
    fields: Vec<FieldLine>,
    focus: usize,
    submission: &Submission,
) {
    let general = submission.general_error();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if note.is_some() { 1 } else { 0 }),
            Constraint::Min(fields.len() as u16 + 3),
            Constraint::Length(3),
            Constraint::Length(if general.is_some() { 7 } else { 0 }),
        ])
        .split(area);

    render_toolbar(
        f,
        chunks[0],
        title,
        &[
            ("tab", "Next"),
            ("shift+tab", "Previous"),
            ("ctrl+s", "Submit"),
            ("ctrl+n", "Reset"),
            ("esc", "Cancel"),
        ],
    );

    if let Some(note) = note {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            note,
            Style::default().fg(INFO_COLOR),
        )));
        f.render_widget(paragraph, chunks[1]);
    }

    let rows: Vec<Row> = fields
        .into_iter()
        .map(|field| {
            let value = if field.value.is_empty() {
                Cell::from(field.placeholder).style(
                    Style::default()
                        .fg(TEXT_COLOR)
                        .add_modifier(Modifier::DIM),
                )
            } else {
                Cell::from(field.value).style(Style::default().fg(TEXT_COLOR))
            };
            Row::new(vec![
                Cell::from(field.label).style(Style::default().fg(PRIMARY_COLOR)),
                value,
                Cell::from(field.error.unwrap_or_default()).style(Style::default().fg(ERROR_COLOR)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Percentage(45),
            Constraint::Min(20),
        ],
    )
    .header(header_row(&["Field", "Value", ""]))
    .block(titled_block(title.to_string()))
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(focus));
    f.render_stateful_widget(table, chunks[2], &mut state);

    match submission.progress {
        Some(ratio) => render_progress(f, chunks[3], "Submitting", ratio),
        None => render_progress(f, chunks[3], "ctrl+s to submit", 0.0),
    }

    if let Some(error) = general {
        render_error(f, chunks[4], error);
    }
}

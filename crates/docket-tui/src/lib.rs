// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use docket_app::{
    AppCommand, AppMode, AppState, CaseStatus, CaseSummary, CaseType, Clock, CommitOutcome, Draft,
    EmptyState, FieldKind, FormView, ListView, ManagerView, Office, Presentable, Record,
    RecordKind, RecordManager, SubmitError, TabKind,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

const SUMMARY_WIDTH: u16 = 30;

pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormUiState {
    kind: RecordKind,
    field_index: usize,
    /// Raw text of the focused field; applied to the draft when focus leaves it.
    input: String,
}

#[derive(Debug, Default)]
struct ViewData {
    selected_row: usize,
    form: Option<FormUiState>,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<C: Clock>(state: &mut AppState, office: &mut Office<C>) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();
    info!(tab = state.active_tab.label(), "session started");

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, office, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, office, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    info!(
        cases = office.cases.store().len(),
        clients = office.clients.store().len(),
        "session ended"
    );
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<C: Clock>(
    state: &mut AppState,
    office: &mut Office<C>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    match (state.mode, state.active_tab) {
        (AppMode::Form(_), TabKind::Cases) => {
            handle_form_key(state, &mut office.cases, view_data, internal_tx, key);
        }
        (AppMode::Form(_), TabKind::Clients) => {
            handle_form_key(state, &mut office.clients, view_data, internal_tx, key);
        }
        (AppMode::Search, TabKind::Cases) => {
            handle_search_key(state, &mut office.cases, view_data, key);
        }
        (AppMode::Search, TabKind::Clients) => {
            handle_search_key(state, &mut office.clients, view_data, key);
        }
        (AppMode::Nav, _) => handle_nav_key(state, office, view_data, internal_tx, key),
    }
    false
}

fn handle_nav_key<C: Clock>(
    state: &mut AppState,
    office: &mut Office<C>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) | (KeyCode::Char('f'), KeyModifiers::NONE) => {
            switch_tab(state, view_data, AppCommand::NextTab);
        }
        (KeyCode::BackTab, _) | (KeyCode::Char('b'), KeyModifiers::NONE) => {
            switch_tab(state, view_data, AppCommand::PrevTab);
        }
        (KeyCode::Char('?'), _) => view_data.help_visible = true,
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            if state.active_tab != TabKind::Cases {
                emit_status(state, view_data, internal_tx, "clients have no status filter");
                return;
            }
            let mut criteria = *office.cases.criteria();
            criteria.status = criteria.status.cycle(&CaseStatus::ALL);
            office.cases.set_criteria(criteria);
            view_data.selected_row = 0;
            emit_status(state, view_data, internal_tx, criteria.status.label());
        }
        (KeyCode::Char('t'), KeyModifiers::NONE) => {
            if state.active_tab != TabKind::Cases {
                emit_status(state, view_data, internal_tx, "clients have no type filter");
                return;
            }
            let mut criteria = *office.cases.criteria();
            criteria.case_type = criteria.case_type.cycle(&CaseType::ALL);
            office.cases.set_criteria(criteria);
            view_data.selected_row = 0;
            emit_status(state, view_data, internal_tx, criteria.case_type.label());
        }
        _ => match state.active_tab {
            TabKind::Cases => {
                handle_list_key(state, &mut office.cases, view_data, internal_tx, key);
            }
            TabKind::Clients => {
                handle_list_key(state, &mut office.clients, view_data, internal_tx, key);
            }
        },
    }
}

fn switch_tab(state: &mut AppState, view_data: &mut ViewData, command: AppCommand) {
    state.dispatch(command);
    view_data.selected_row = 0;
    debug!(tab = state.active_tab.label(), "tab changed");
}

fn handle_list_key<R: Presentable, C: Clock>(
    state: &mut AppState,
    manager: &mut RecordManager<R, C>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let visible = manager.visible().len();
    match (key.code, key.modifiers) {
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
            view_data.selected_row = (view_data.selected_row + 1).min(visible.saturating_sub(1));
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
            view_data.selected_row = view_data.selected_row.saturating_sub(1);
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => view_data.selected_row = 0,
        (KeyCode::Char('G'), _) => view_data.selected_row = visible.saturating_sub(1),
        (KeyCode::Char('/'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::EnterSearch);
        }
        (KeyCode::Char('x'), KeyModifiers::NONE) => {
            manager.set_query("");
            manager.set_criteria(R::Criteria::default());
            view_data.selected_row = 0;
            emit_status(state, view_data, internal_tx, "filters cleared");
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            manager.open_create();
            enter_form(state, manager, view_data);
        }
        (KeyCode::Char('e'), KeyModifiers::NONE) | (KeyCode::Enter, _) => {
            let Some(id) = selected_id(manager, view_data) else {
                emit_status(state, view_data, internal_tx, "nothing to edit");
                return;
            };
            if manager.open_edit(id) {
                enter_form(state, manager, view_data);
            }
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            let Some(id) = selected_id(manager, view_data) else {
                emit_status(state, view_data, internal_tx, "nothing to delete");
                return;
            };
            manager.remove(id);
            let remaining = manager.visible().len();
            view_data.selected_row = view_data.selected_row.min(remaining.saturating_sub(1));
            let message = format!("{} removed", R::KIND.as_str());
            emit_status(state, view_data, internal_tx, message);
        }
        _ => {}
    }
}

fn selected_id<R: Record, C: Clock>(
    manager: &RecordManager<R, C>,
    view_data: &ViewData,
) -> Option<R::Id> {
    manager
        .visible()
        .get(view_data.selected_row)
        .map(|record| record.id())
}

fn handle_search_key<R: Record, C: Clock>(
    state: &mut AppState,
    manager: &mut RecordManager<R, C>,
    view_data: &mut ViewData,
    key: KeyEvent,
) {
    let mut query = manager.query().to_owned();
    match key.code {
        KeyCode::Enter => {
            state.dispatch(AppCommand::ExitToNav);
            return;
        }
        KeyCode::Esc => {
            query.clear();
            state.dispatch(AppCommand::ExitToNav);
        }
        KeyCode::Backspace => {
            query.pop();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => query.push(ch),
        _ => return,
    }
    manager.set_query(query);
    view_data.selected_row = 0;
}

fn enter_form<R: Presentable, C: Clock>(
    state: &mut AppState,
    manager: &RecordManager<R, C>,
    view_data: &mut ViewData,
) {
    state.dispatch(AppCommand::OpenForm(R::KIND));
    view_data.form = Some(FormUiState {
        kind: R::KIND,
        field_index: 0,
        input: String::new(),
    });
    load_focused_input(manager, view_data);
}

fn load_focused_input<R: Record, C: Clock>(
    manager: &RecordManager<R, C>,
    view_data: &mut ViewData,
) {
    let fields = <R::Draft as Draft>::FIELDS;
    let (Some(form), Some(draft)) = (view_data.form.as_mut(), manager.draft()) else {
        return;
    };
    form.field_index = form.field_index.min(fields.len().saturating_sub(1));
    form.input = fields
        .get(form.field_index)
        .map(|spec| draft.display_value(spec.key))
        .unwrap_or_default();
}

/// Applies the focused field's buffer to the draft.
fn apply_focused_input<R: Record, C: Clock>(
    manager: &mut RecordManager<R, C>,
    view_data: &ViewData,
) -> Result<(), String> {
    let Some(form) = &view_data.form else {
        return Ok(());
    };
    let Some(spec) = <R::Draft as Draft>::FIELDS.get(form.field_index) else {
        return Ok(());
    };
    let Some(draft) = manager.draft_mut() else {
        return Ok(());
    };
    draft
        .set_input(spec.key, &form.input)
        .map_err(|error| error.to_string())
}

fn handle_form_key<R: Presentable, C: Clock>(
    state: &mut AppState,
    manager: &mut RecordManager<R, C>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            manager.cancel();
            leave_form(state, view_data);
            emit_status(state, view_data, internal_tx, "form canceled");
        }
        (KeyCode::Enter, _) | (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            submit_form(state, manager, view_data, internal_tx);
        }
        (KeyCode::Tab, _) | (KeyCode::Down, _) => {
            move_form_focus(state, manager, view_data, internal_tx, 1);
        }
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
            move_form_focus(state, manager, view_data, internal_tx, -1);
        }
        (KeyCode::Left, _) => cycle_form_choice(state, manager, view_data, internal_tx, -1),
        (KeyCode::Right, _) => cycle_form_choice(state, manager, view_data, internal_tx, 1),
        (KeyCode::Backspace, _) => {
            if let Some(form) = view_data.form.as_mut() {
                form.input.pop();
            }
        }
        (KeyCode::Char(ch), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
            let focused_kind = focused_field_kind::<R>(view_data);
            if matches!(focused_kind, Some(FieldKind::Choice(_))) {
                return;
            }
            if let Some(form) = view_data.form.as_mut() {
                form.input.push(ch);
            }
        }
        _ => {}
    }
}

fn focused_field_kind<R: Record>(view_data: &ViewData) -> Option<FieldKind> {
    let form = view_data.form.as_ref()?;
    <R::Draft as Draft>::FIELDS
        .get(form.field_index)
        .map(|spec| spec.kind)
}

fn move_form_focus<R: Presentable, C: Clock>(
    state: &mut AppState,
    manager: &mut RecordManager<R, C>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    delta: isize,
) {
    if let Err(message) = apply_focused_input(manager, view_data) {
        emit_status(state, view_data, internal_tx, message);
        return;
    }
    let len = <R::Draft as Draft>::FIELDS.len() as isize;
    if let Some(form) = view_data.form.as_mut()
        && len > 0
    {
        form.field_index = (form.field_index as isize + delta).rem_euclid(len) as usize;
    }
    load_focused_input(manager, view_data);
}

fn cycle_form_choice<R: Record, C: Clock>(
    state: &mut AppState,
    manager: &mut RecordManager<R, C>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    delta: isize,
) {
    let Some(FieldKind::Choice(options)) = focused_field_kind::<R>(view_data) else {
        return;
    };
    if options.is_empty() {
        return;
    }
    let Some(form) = view_data.form.as_mut() else {
        return;
    };
    let len = options.len() as isize;
    let next = match options.iter().position(|option| *option == form.input.trim()) {
        Some(index) => (index as isize + delta).rem_euclid(len) as usize,
        None if delta > 0 => 0,
        None => options.len() - 1,
    };
    form.input = options[next].to_owned();
    if let Err(message) = apply_focused_input(manager, view_data) {
        emit_status(state, view_data, internal_tx, message);
    }
}

fn submit_form<R: Presentable, C: Clock>(
    state: &mut AppState,
    manager: &mut RecordManager<R, C>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    if let Err(message) = apply_focused_input(manager, view_data) {
        emit_status(state, view_data, internal_tx, message);
        return;
    }

    let kind = R::KIND.as_str();
    match manager.submit() {
        Ok(CommitOutcome::Created(_)) => {
            leave_form(state, view_data);
            view_data.selected_row = manager.visible().len().saturating_sub(1);
            emit_status(state, view_data, internal_tx, format!("{kind} saved"));
        }
        Ok(CommitOutcome::Updated(_)) => {
            leave_form(state, view_data);
            emit_status(state, view_data, internal_tx, format!("{kind} updated"));
        }
        Ok(CommitOutcome::Missing(id)) => {
            leave_form(state, view_data);
            let message = format!("{kind} {id} no longer exists; nothing saved");
            emit_status(state, view_data, internal_tx, message);
        }
        Err(SubmitError::Validation(failure)) => {
            let first_missing = failure.missing.first().and_then(|key| {
                <R::Draft as Draft>::FIELDS
                    .iter()
                    .position(|spec| spec.key == *key)
            });
            if let (Some(form), Some(index)) = (view_data.form.as_mut(), first_missing) {
                form.field_index = index;
            }
            load_focused_input(manager, view_data);
            emit_status(state, view_data, internal_tx, failure.to_string());
        }
        Err(error @ SubmitError::NoOpenForm) => {
            leave_form(state, view_data);
            emit_status(state, view_data, internal_tx, error.to_string());
        }
    }
}

fn leave_form(state: &mut AppState, view_data: &mut ViewData) {
    view_data.form = None;
    state.dispatch(AppCommand::ExitToNav);
}

fn render<C: Clock>(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    office: &Office<C>,
    view_data: &ViewData,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let selected = TabKind::ALL
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);
    let tab_titles = TabKind::ALL
        .iter()
        .map(|tab| format!(" {} ", tab.label()))
        .collect::<Vec<String>>();
    let tabs = Tabs::new(tab_titles)
        .block(Block::default().title("docket").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    match state.active_tab {
        TabKind::Cases => {
            let view = office.cases.view();
            if matches!(view, ManagerView::List(_)) {
                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(1), Constraint::Length(SUMMARY_WIDTH)])
                    .split(layout[1]);
                render_manager_view(frame, body[0], &view, view_data);
                let summary = Paragraph::new(render_summary_text(&office.case_summary()))
                    .block(Block::default().title("summary").borders(Borders::ALL));
                frame.render_widget(summary, body[1]);
            } else {
                render_manager_view(frame, layout[1], &view, view_data);
            }
        }
        TabKind::Clients => {
            render_manager_view(frame, layout[1], &office.clients.view(), view_data);
        }
    }

    let status_widget = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[2]);

    if view_data.help_visible {
        let area = centered_rect(72, 50, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_manager_view<Id>(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    view: &ManagerView<Id>,
    view_data: &ViewData,
) {
    match view {
        ManagerView::GetStarted(empty) => {
            let inner = centered_rect(60, 40, area);
            let body = Paragraph::new(render_empty_state_text(empty))
                .style(Style::default().fg(Color::Cyan))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(body, inner);
        }
        ManagerView::Form(form) => {
            let body = Paragraph::new(render_form_text(form, view_data.form.as_ref()))
                .block(Block::default().title(form.title).borders(Borders::ALL));
            frame.render_widget(body, area);
        }
        ManagerView::List(list) => render_list(frame, area, list, view_data),
    }
}

fn render_list<Id>(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    list: &ListView<Id>,
    view_data: &ViewData,
) {
    let widths = vec![Constraint::Min(8); list.columns.len().max(1)];
    let header = Row::new(list.columns.iter().map(|label| {
        Cell::from(*label).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows = list.rows.iter().enumerate().map(|(index, row)| {
        let style = if index == view_data.selected_row {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Row::new(row.cells.iter().cloned().map(Cell::from)).style(style)
    });

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().title(list_title(list)).borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn list_title<Id>(list: &ListView<Id>) -> String {
    let mut parts = vec![format!("{} {}/{}", list.title, list.rows.len(), list.total)];
    parts.extend(list.criteria.iter().cloned());
    if !list.query.is_empty() {
        parts.push(format!("search: {}", list.query));
    }
    format!(" {} ", parts.join(" | "))
}

fn render_empty_state_text(empty: &EmptyState) -> String {
    [
        empty.heading.to_owned(),
        String::new(),
        empty.prompt.to_owned(),
        String::new(),
        format!("[a] {}", empty.action),
    ]
    .join("\n")
}

fn render_form_text(form: &FormView, ui: Option<&FormUiState>) -> String {
    let mut lines = Vec::with_capacity(form.fields.len() + 2);
    for (index, field) in form.fields.iter().enumerate() {
        let focused = ui.is_some_and(|ui| ui.field_index == index);
        let value = match ui {
            Some(ui) if focused => ui.input.as_str(),
            _ => field.value.as_str(),
        };
        let marker = if focused { ">" } else { " " };
        let required = if field.required { "*" } else { "" };
        let value = match field.kind {
            FieldKind::Choice(_) if focused => format!("< {value} >"),
            FieldKind::Date if value.is_empty() => "YYYY-MM-DD".to_owned(),
            _ => value.to_owned(),
        };
        lines.push(format!("{marker} {}{required}: {value}", field.label));
    }
    lines.push(String::new());
    lines.push(format!("[enter] {}  [esc] cancel", form.submit_label));
    lines.join("\n")
}

fn render_summary_text(summary: &CaseSummary) -> String {
    [
        format!("cases: {}", summary.total),
        format!("in view: {}", summary.visible),
        format!("open in view: {}", summary.open_in_view),
        format!(
            "upcoming sessions: {}",
            if summary.has_upcoming_sessions {
                "yes"
            } else {
                "no"
            }
        ),
    ]
    .join("\n")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    let (mode, default) = match state.mode {
        AppMode::Nav => (
            "NAV",
            "j/k move | a add | e edit | d del | / search | s/t filter | x clear | tab switch | ? help | ctrl+q",
        ),
        AppMode::Search => ("SEARCH", "type to filter | enter keep | esc clear"),
        AppMode::Form(_) => (
            "FORM",
            "tab/shift+tab field | left/right choose | enter save | esc cancel",
        ),
    };
    let mut default = default.to_owned();
    if let Some(form) = &view_data.form
        && matches!(state.mode, AppMode::Form(_))
    {
        default = format!(
            "{} field {} | {default}",
            form.kind.as_str(),
            form.field_index + 1
        );
    }
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {default}"),
        None => format!("{mode} | {default}"),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ? help\n\
nav: j/k or up/down move | g/G first/last | tab/shift+tab or f/b switch tab\n\
nav: a add | e or enter edit | d delete | / search | x clear filters\n\
cases: s cycle status filter | t cycle type filter\n\
search: type to filter | backspace erase | enter keep | esc clear\n\
form: tab/shift+tab field | left/right choose | enter or ctrl+s save | esc cancel"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{AppMode, RecordKind, TabKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub active_tab: TabKind,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Nav,
            active_tab: TabKind::Cases,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextTab,
    PrevTab,
    EnterSearch,
    ExitToNav,
    OpenForm(RecordKind),
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    TabChanged(TabKind),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextTab => self.step_tab(true),
            AppCommand::PrevTab => self.step_tab(false),
            AppCommand::EnterSearch => self.enter(AppMode::Search),
            AppCommand::ExitToNav => self.enter(AppMode::Nav),
            AppCommand::OpenForm(kind) => self.enter(AppMode::Form(kind)),
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => match self.status_line.take() {
                Some(_) => vec![AppEvent::StatusCleared],
                None => Vec::new(),
            },
        }
    }

    fn enter(&mut self, mode: AppMode) -> Vec<AppEvent> {
        self.mode = mode;
        vec![AppEvent::ModeChanged(mode)]
    }

    /// Cases and clients wrap around in both directions.
    fn step_tab(&mut self, forward: bool) -> Vec<AppEvent> {
        let tabs = TabKind::ALL;
        let index = tabs
            .iter()
            .position(|tab| *tab == self.active_tab)
            .unwrap_or_default();
        let step = if forward { 1 } else { tabs.len() - 1 };
        self.active_tab = tabs[(index + step) % tabs.len()];
        vec![AppEvent::TabChanged(self.active_tab)]
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::rc::Rc;

use crate::clock::Clock;
use crate::manager::{CaseManager, ClientManager};
use crate::{CaseNumbering, CaseStatus};

/// Case-screen side panel, computed over the currently visible cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseSummary {
    pub total: usize,
    pub visible: usize,
    pub open_in_view: usize,
    pub has_upcoming_sessions: bool,
}

/// The case and client managers of one session, sharing a clock.
#[derive(Debug)]
pub struct Office<C: Clock> {
    pub cases: CaseManager<Rc<C>>,
    pub clients: ClientManager<Rc<C>>,
}

impl<C: Clock> Office<C> {
    pub fn new(clock: C, numbering: CaseNumbering) -> Self {
        let clock = Rc::new(clock);
        Self {
            cases: CaseManager::with_policy(Rc::clone(&clock), numbering),
            clients: ClientManager::new(clock),
        }
    }

    /// `has_upcoming_sessions` is set whenever any case is in view; session
    /// dates are not consulted.
    pub fn case_summary(&self) -> CaseSummary {
        let visible = self.cases.visible();
        CaseSummary {
            total: self.cases.store().len(),
            visible: visible.len(),
            open_in_view: visible
                .iter()
                .filter(|case| case.status == CaseStatus::Open)
                .count(),
            has_upcoming_sessions: !visible.is_empty(),
        }
    }
}

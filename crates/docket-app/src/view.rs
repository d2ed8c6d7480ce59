// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::clock::Clock;
use crate::draft::{Draft, FieldKind};
use crate::manager::{EditTarget, FormState, RecordManager};
use crate::store::{NoCriteria, Record};
use crate::{Case, CaseCriteria, Client};

/// Call to action shown when a manager has no records and no open form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub heading: &'static str,
    pub prompt: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub fields: Vec<FormFieldView>,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<Id> {
    pub id: Id,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<Id> {
    pub title: &'static str,
    pub query: String,
    pub criteria: Vec<String>,
    pub columns: &'static [&'static str],
    pub rows: Vec<RowView<Id>>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerView<Id> {
    GetStarted(EmptyState),
    Form(FormView),
    List(ListView<Id>),
}

/// Display text for one record type.
pub trait Presentable: Record {
    const LIST_TITLE: &'static str;
    const EMPTY_STATE: EmptyState;
    const CREATE_TITLE: &'static str;
    const EDIT_TITLE: &'static str;
    const SUBMIT_LABEL: &'static str;
    const COLUMNS: &'static [&'static str];

    /// One display string per entry in [`Self::COLUMNS`].
    fn cells(&self) -> Vec<String>;

    fn criteria_labels(criteria: &Self::Criteria) -> Vec<String>;
}

impl Presentable for Case {
    const LIST_TITLE: &'static str = "Case management";
    const EMPTY_STATE: EmptyState = EmptyState {
        heading: "No cases yet",
        prompt: "Add your first case to start managing your legal files.",
        action: "Add a new case",
    };
    const CREATE_TITLE: &'static str = "Add a new case";
    const EDIT_TITLE: &'static str = "Edit case";
    const SUBMIT_LABEL: &'static str = "Save case";
    const COLUMNS: &'static [&'static str] = &[
        "number",
        "title",
        "type",
        "status",
        "client",
        "court",
        "next session",
        "lawyer",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.number.clone(),
            self.title.clone(),
            self.case_type.label().to_owned(),
            self.status.label().to_owned(),
            self.client.clone(),
            self.court.clone(),
            self.next_session.to_string(),
            self.lawyer.clone(),
        ]
    }

    fn criteria_labels(criteria: &CaseCriteria) -> Vec<String> {
        criteria.labels()
    }
}

impl Presentable for Client {
    const LIST_TITLE: &'static str = "Clients";
    const EMPTY_STATE: EmptyState = EmptyState {
        heading: "No clients yet",
        prompt: "Add your first client to start managing their cases.",
        action: "Add a new client",
    };
    const CREATE_TITLE: &'static str = "Add a new client";
    const EDIT_TITLE: &'static str = "Edit client";
    const SUBMIT_LABEL: &'static str = "Save client";
    const COLUMNS: &'static [&'static str] =
        &["name", "phone", "email", "address", "registered", "notes"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.address.clone(),
            self.created_at.date().to_string(),
            self.notes.clone(),
        ]
    }

    fn criteria_labels(_criteria: &NoCriteria) -> Vec<String> {
        Vec::new()
    }
}

impl<R: Presentable, C: Clock> RecordManager<R, C> {
    /// Maps the manager's state to what the screen should show.
    pub fn view(&self) -> ManagerView<R::Id> {
        match self.form() {
            FormState::Editing { draft, target } => ManagerView::Form(form_view::<R>(draft, *target)),
            FormState::Idle if self.store().is_empty() => ManagerView::GetStarted(R::EMPTY_STATE),
            FormState::Idle => ManagerView::List(ListView {
                title: R::LIST_TITLE,
                query: self.query().to_owned(),
                criteria: R::criteria_labels(self.criteria()),
                columns: R::COLUMNS,
                rows: self
                    .visible()
                    .into_iter()
                    .map(|record| RowView {
                        id: record.id(),
                        cells: record.cells(),
                    })
                    .collect(),
                total: self.store().len(),
            }),
        }
    }
}

fn form_view<R: Presentable>(draft: &R::Draft, target: EditTarget<R::Id>) -> FormView {
    let title = match target {
        EditTarget::Create => R::CREATE_TITLE,
        EditTarget::Edit(_) => R::EDIT_TITLE,
    };
    FormView {
        title,
        fields: <R::Draft as Draft>::FIELDS
            .iter()
            .map(|spec| FormFieldView {
                key: spec.key,
                label: spec.label,
                value: draft.display_value(spec.key),
                required: spec.required,
                kind: spec.kind,
            })
            .collect(),
        submit_label: R::SUBMIT_LABEL,
    }
}

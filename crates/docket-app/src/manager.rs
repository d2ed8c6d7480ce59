// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::draft::{Draft, RecordSeed, ValidationFailure};
use crate::filter::filter_records;
use crate::ids::IdSequence;
use crate::store::{Record, RecordStore};
use crate::{Case, Client};

pub type CaseManager<C> = RecordManager<Case, C>;
pub type ClientManager<C> = RecordManager<Client, C>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget<Id> {
    Create,
    Edit(Id),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState<R: Record> {
    Idle,
    Editing {
        draft: R::Draft,
        target: EditTarget<R::Id>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome<Id> {
    Created(Id),
    Updated(Id),
    /// The record under edit was removed while the form was open; nothing was written.
    Missing(Id),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no form is open")]
    NoOpenForm,
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

/// Store, filter state and draft form for one record type.
#[derive(Debug)]
pub struct RecordManager<R: Record, C: Clock> {
    store: RecordStore<R>,
    query: String,
    criteria: R::Criteria,
    form: FormState<R>,
    ids: IdSequence,
    policy: R::Policy,
    clock: C,
}

impl<R: Record, C: Clock> RecordManager<R, C> {
    pub fn new(clock: C) -> Self {
        Self::with_policy(clock, R::Policy::default())
    }

    pub fn with_policy(clock: C, policy: R::Policy) -> Self {
        Self {
            store: RecordStore::new(),
            query: String::new(),
            criteria: R::Criteria::default(),
            form: FormState::Idle,
            ids: IdSequence::new(),
            policy,
            clock,
        }
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn records(&self) -> &[R] {
        self.store.records()
    }

    pub fn policy(&self) -> R::Policy {
        self.policy
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn criteria(&self) -> &R::Criteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: R::Criteria) {
        self.criteria = criteria;
    }

    pub fn form(&self) -> &FormState<R> {
        &self.form
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self.form, FormState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        match &self.form {
            FormState::Editing { draft, .. } => Some(draft),
            FormState::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        match &mut self.form {
            FormState::Editing { draft, .. } => Some(draft),
            FormState::Idle => None,
        }
    }

    /// Records matching the current query and criteria, in store order.
    pub fn visible(&self) -> Vec<&R> {
        filter_records(self.store.records(), &self.query, &self.criteria)
    }

    pub fn open_create(&mut self) {
        debug!(kind = R::KIND.as_str(), "open create form");
        self.form = FormState::Editing {
            draft: R::Draft::default(),
            target: EditTarget::Create,
        };
    }

    /// Opens the form seeded from the record with `id`. Returns `false` if it
    /// does not exist.
    pub fn open_edit(&mut self, id: R::Id) -> bool {
        let Some(record) = self.store.get(id) else {
            return false;
        };
        debug!(kind = R::KIND.as_str(), %id, "open edit form");
        self.form = FormState::Editing {
            draft: R::Draft::from_record(record),
            target: EditTarget::Edit(id),
        };
        true
    }

    /// Discards the open draft. The store is untouched.
    pub fn cancel(&mut self) {
        if self.is_form_open() {
            debug!(kind = R::KIND.as_str(), "form canceled");
        }
        self.form = FormState::Idle;
    }

    /// Validates the open draft and commits it. On validation failure the form
    /// stays open and the store is unchanged.
    pub fn submit(&mut self) -> Result<CommitOutcome<R::Id>, SubmitError> {
        let FormState::Editing { draft, target } = &self.form else {
            return Err(SubmitError::NoOpenForm);
        };

        if let Err(failure) = draft.validate() {
            warn!(kind = R::KIND.as_str(), missing = ?failure.missing, "submit rejected");
            return Err(failure.into());
        }

        let now = self.clock.now();
        let outcome = match *target {
            EditTarget::Create => {
                let id = R::Id::from(self.ids.next_value());
                let record = draft.build(RecordSeed {
                    id,
                    issued: self.ids.issued(),
                    now,
                    store: self.store.records(),
                    existing: None,
                    policy: self.policy,
                })?;
                let missing = record.missing_fields();
                if !self.store.add(record) {
                    return Err(ValidationFailure {
                        kind: R::KIND,
                        missing,
                    }
                    .into());
                }
                info!(kind = R::KIND.as_str(), %id, "record created");
                CommitOutcome::Created(id)
            }
            EditTarget::Edit(id) => match self.store.get(id) {
                Some(existing) => {
                    let record = draft.build(RecordSeed {
                        id,
                        issued: self.ids.issued(),
                        now,
                        store: self.store.records(),
                        existing: Some(existing),
                        policy: self.policy,
                    })?;
                    self.store.replace(id, record);
                    info!(kind = R::KIND.as_str(), %id, "record updated");
                    CommitOutcome::Updated(id)
                }
                None => {
                    warn!(kind = R::KIND.as_str(), %id, "edit target vanished; nothing written");
                    CommitOutcome::Missing(id)
                }
            },
        };

        self.form = FormState::Idle;
        Ok(outcome)
    }

    /// Removes the record with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: R::Id) -> bool {
        let removed = self.store.remove(id);
        if removed {
            info!(kind = R::KIND.as_str(), %id, "record removed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::{CaseManager, ClientManager, CommitOutcome, EditTarget, FormState, SubmitError};
    use crate::{
        CaseCriteria, CaseId, CaseNumbering, CaseStatus, CaseType, Choice, ClientId, FixedClock,
    };
    use time::macros::datetime;

    fn clock() -> FixedClock {
        FixedClock::new(datetime!(2026-04-20 08:15 UTC))
    }

    fn add_case(manager: &mut CaseManager<FixedClock>, title: &str) -> anyhow::Result<CaseId> {
        manager.open_create();
        if let Some(draft) = manager.draft_mut() {
            draft
                .set_title(title)
                .set_case_type(CaseType::Commercial)
                .set_client("Sara Khalil")
                .set_court("Commercial Court");
        }
        match manager.submit()? {
            CommitOutcome::Created(id) => Ok(id),
            other => anyhow::bail!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn submit_without_form_is_an_error() {
        let mut manager = ClientManager::new(clock());
        assert_eq!(manager.submit(), Err(SubmitError::NoOpenForm));
    }

    #[test]
    fn invalid_submit_keeps_form_open_and_store_unchanged() {
        let mut manager = ClientManager::new(clock());
        manager.open_create();
        if let Some(draft) = manager.draft_mut() {
            draft.set_name("Sara");
        }
        let error = manager.submit().expect_err("missing phone should fail");
        match error {
            SubmitError::Validation(failure) => assert_eq!(failure.missing, vec!["phone"]),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(manager.is_form_open());
        assert!(manager.store().is_empty());
    }

    #[test]
    fn create_appends_and_returns_to_idle() -> anyhow::Result<()> {
        let mut manager = CaseManager::new(clock());
        let id = add_case(&mut manager, "Supply contract")?;
        assert_eq!(manager.store().len(), 1);
        assert_eq!(manager.form(), &FormState::Idle);
        assert_eq!(manager.records()[0].id, id);
        assert_eq!(manager.records()[0].number, "C-2026-001");
        Ok(())
    }

    #[test]
    fn edit_replaces_in_place() -> anyhow::Result<()> {
        let mut manager = CaseManager::new(clock());
        let first = add_case(&mut manager, "First")?;
        add_case(&mut manager, "Second")?;

        assert!(manager.open_edit(first));
        assert!(matches!(
            manager.form(),
            FormState::Editing {
                target: EditTarget::Edit(_),
                ..
            }
        ));
        if let Some(draft) = manager.draft_mut() {
            draft.set_status(CaseStatus::Pending);
        }
        manager
            .clock()
            .set(datetime!(2026-04-21 09:00 UTC));
        assert_eq!(manager.submit()?, CommitOutcome::Updated(first));

        assert_eq!(manager.store().len(), 2);
        let edited = &manager.records()[0];
        assert_eq!(edited.id, first);
        assert_eq!(edited.number, "C-2026-001");
        assert_eq!(edited.status, CaseStatus::Pending);
        assert_eq!(edited.last_updated, datetime!(2026-04-21 09:00 UTC));
        Ok(())
    }

    #[test]
    fn edit_of_removed_record_writes_nothing() -> anyhow::Result<()> {
        let mut manager = CaseManager::new(clock());
        let id = add_case(&mut manager, "Short lived")?;
        assert!(manager.open_edit(id));
        assert!(manager.remove(id));
        assert_eq!(manager.submit()?, CommitOutcome::Missing(id));
        assert!(manager.store().is_empty());
        assert!(!manager.is_form_open());
        Ok(())
    }

    #[test]
    fn open_edit_rejects_unknown_id() {
        let mut manager = ClientManager::new(clock());
        assert!(!manager.open_edit(ClientId::new(42)));
        assert!(!manager.is_form_open());
    }

    #[test]
    fn cancel_discards_draft() -> anyhow::Result<()> {
        let mut manager = CaseManager::new(clock());
        add_case(&mut manager, "Kept")?;
        let before = manager.store().clone();

        manager.open_create();
        if let Some(draft) = manager.draft_mut() {
            draft.set_title("Discarded");
        }
        manager.cancel();
        assert_eq!(manager.store(), &before);
        assert!(manager.draft().is_none());

        manager.open_create();
        assert_eq!(manager.draft().and_then(|d| d.title.clone()), None);
        Ok(())
    }

    #[test]
    fn visible_tracks_query_and_criteria() -> anyhow::Result<()> {
        let mut manager = CaseManager::new(clock());
        add_case(&mut manager, "Supply contract")?;
        add_case(&mut manager, "Trademark claim")?;

        manager.set_query("trademark");
        assert_eq!(manager.visible().len(), 1);

        manager.set_query("");
        manager.set_criteria(CaseCriteria {
            status: Choice::Only(CaseStatus::Closed),
            ..CaseCriteria::default()
        });
        assert!(manager.visible().is_empty());
        Ok(())
    }

    #[test]
    fn monotonic_policy_never_reuses_numbers() -> anyhow::Result<()> {
        let mut manager = CaseManager::with_policy(clock(), CaseNumbering::Monotonic);
        let first = add_case(&mut manager, "One")?;
        add_case(&mut manager, "Two")?;
        assert!(manager.remove(first));
        add_case(&mut manager, "Three")?;
        let numbers: Vec<&str> = manager.records().iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, vec!["C-2026-002", "C-2026-003"]);
        Ok(())
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;

use crate::draft::{
    Draft, FieldError, FieldKind, FieldSpec, RecordSeed, ValidationFailure, choice_input,
    is_blank, parse_date_input, text_input,
};
use crate::store::Record;
use crate::{
    Case, CaseId, CaseNumbering, CaseStatus, CaseType, Choice, RecordKind, UNSPECIFIED_LAWYER,
    format_case_number,
};

const CASE_TYPE_TOKENS: &[&str] = &["personal", "criminal", "commercial", "civil", "family"];
const CASE_STATUS_TOKENS: &[&str] = &["open", "pending", "closed"];

const CASE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "title",
        label: "Case title",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "type",
        label: "Case type",
        required: true,
        kind: FieldKind::Choice(CASE_TYPE_TOKENS),
    },
    FieldSpec {
        key: "status",
        label: "Status",
        required: false,
        kind: FieldKind::Choice(CASE_STATUS_TOKENS),
    },
    FieldSpec {
        key: "client",
        label: "Client name",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "court",
        label: "Court",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "next_session",
        label: "Next session",
        required: false,
        kind: FieldKind::Date,
    },
    FieldSpec {
        key: "lawyer",
        label: "Responsible lawyer",
        required: false,
        kind: FieldKind::Text,
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseCriteria {
    pub status: Choice<CaseStatus>,
    pub case_type: Choice<CaseType>,
}

impl CaseCriteria {
    pub fn labels(&self) -> Vec<String> {
        vec![
            self.status.label().to_owned(),
            self.case_type.label().to_owned(),
        ]
    }
}

impl Record for Case {
    type Id = CaseId;
    type Draft = CaseDraft;
    type Criteria = CaseCriteria;
    type Policy = CaseNumbering;

    const KIND: RecordKind = RecordKind::Case;

    fn id(&self) -> CaseId {
        self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.client.as_str(), self.number.as_str()]
    }

    fn matches_criteria(&self, criteria: &CaseCriteria) -> bool {
        criteria.status.admits(self.status) && criteria.case_type.admits(self.case_type)
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", self.title.as_str()),
            ("client", self.client.as_str()),
            ("court", self.court.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// In-progress case form. A fresh draft starts out `open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDraft {
    pub title: Option<String>,
    pub case_type: Option<CaseType>,
    pub status: Option<CaseStatus>,
    pub client: Option<String>,
    pub court: Option<String>,
    pub next_session: Option<Date>,
    pub lawyer: Option<String>,
}

impl Default for CaseDraft {
    fn default() -> Self {
        Self {
            title: None,
            case_type: None,
            status: Some(CaseStatus::Open),
            client: None,
            court: None,
            next_session: None,
            lawyer: None,
        }
    }
}

impl CaseDraft {
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_case_type(&mut self, case_type: CaseType) -> &mut Self {
        self.case_type = Some(case_type);
        self
    }

    pub fn set_status(&mut self, status: CaseStatus) -> &mut Self {
        self.status = Some(status);
        self
    }

    pub fn set_client(&mut self, client: impl Into<String>) -> &mut Self {
        self.client = Some(client.into());
        self
    }

    pub fn set_court(&mut self, court: impl Into<String>) -> &mut Self {
        self.court = Some(court.into());
        self
    }

    pub fn set_next_session(&mut self, date: Date) -> &mut Self {
        self.next_session = Some(date);
        self
    }

    pub fn set_lawyer(&mut self, lawyer: impl Into<String>) -> &mut Self {
        self.lawyer = Some(lawyer.into());
        self
    }

    fn case_number(seed: &RecordSeed<'_, Case>) -> String {
        if let Some(existing) = seed.existing {
            return existing.number.clone();
        }
        let seq = match seed.policy {
            CaseNumbering::StoreLength => i64::try_from(seed.store.len())
                .unwrap_or(i64::MAX)
                .saturating_add(1),
            CaseNumbering::Monotonic => seed.issued,
        };
        format_case_number(seed.now.year(), seq)
    }
}

impl Draft for CaseDraft {
    type Record = Case;

    const FIELDS: &'static [FieldSpec] = CASE_FIELDS;

    fn from_record(record: &Case) -> Self {
        Self {
            title: Some(record.title.clone()),
            case_type: Some(record.case_type),
            status: Some(record.status),
            client: Some(record.client.clone()),
            court: Some(record.court.clone()),
            next_session: Some(record.next_session),
            lawyer: Some(record.lawyer.clone()),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(self.title.as_deref()) {
            missing.push("title");
        }
        if self.case_type.is_none() {
            missing.push("type");
        }
        if is_blank(self.client.as_deref()) {
            missing.push("client");
        }
        if is_blank(self.court.as_deref()) {
            missing.push("court");
        }
        missing
    }

    fn build(&self, seed: RecordSeed<'_, Case>) -> Result<Case, ValidationFailure> {
        self.validate()?;
        let Some(case_type) = self.case_type else {
            return Err(ValidationFailure {
                kind: RecordKind::Case,
                missing: vec!["type"],
            });
        };

        let lawyer = self
            .lawyer
            .as_deref()
            .filter(|lawyer| !lawyer.is_empty())
            .unwrap_or(UNSPECIFIED_LAWYER)
            .to_owned();

        Ok(Case {
            id: seed.id,
            number: Self::case_number(&seed),
            title: self.title.clone().unwrap_or_default(),
            case_type,
            status: self.status.unwrap_or(CaseStatus::Open),
            client: self.client.clone().unwrap_or_default(),
            court: self.court.clone().unwrap_or_default(),
            next_session: self.next_session.unwrap_or_else(|| seed.today()),
            lawyer,
            last_updated: seed.now,
        })
    }

    fn display_value(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone().unwrap_or_default(),
            "type" => self
                .case_type
                .map(|case_type| case_type.as_str().to_owned())
                .unwrap_or_default(),
            "status" => self
                .status
                .map(|status| status.as_str().to_owned())
                .unwrap_or_default(),
            "client" => self.client.clone().unwrap_or_default(),
            "court" => self.court.clone().unwrap_or_default(),
            "next_session" => self
                .next_session
                .map(|date| date.to_string())
                .unwrap_or_default(),
            "lawyer" => self.lawyer.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn set_input(&mut self, key: &str, raw: &str) -> Result<(), FieldError> {
        match key {
            "title" => self.title = text_input(raw),
            "type" => {
                self.case_type = choice_input("type", raw, CASE_TYPE_TOKENS, CaseType::parse)?;
            }
            "status" => {
                self.status = choice_input("status", raw, CASE_STATUS_TOKENS, CaseStatus::parse)?;
            }
            "client" => self.client = text_input(raw),
            "court" => self.court = text_input(raw),
            "next_session" => self.next_session = parse_date_input(raw)?,
            "lawyer" => self.lawyer = text_input(raw),
            other => return Err(FieldError::UnknownField(other.to_owned())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CaseCriteria, CaseDraft};
    use crate::draft::{Draft, FieldError, RecordSeed};
    use crate::store::Record;
    use crate::{Case, CaseId, CaseNumbering, CaseStatus, CaseType, Choice, UNSPECIFIED_LAWYER};
    use time::OffsetDateTime;
    use time::macros::{date, datetime};

    const NOW: OffsetDateTime = datetime!(2026-04-20 08:15 UTC);

    fn complete_draft() -> CaseDraft {
        let mut draft = CaseDraft::default();
        draft
            .set_title("Lease dispute")
            .set_case_type(CaseType::Civil)
            .set_client("Sara Khalil")
            .set_court("District Court");
        draft
    }

    fn seed<'a>(store: &'a [Case], existing: Option<&'a Case>, issued: i64) -> RecordSeed<'a, Case> {
        RecordSeed {
            id: existing.map_or(CaseId::new(issued), |case| case.id),
            issued,
            now: NOW,
            store,
            existing,
            policy: CaseNumbering::StoreLength,
        }
    }

    #[test]
    fn fresh_draft_defaults_to_open() {
        assert_eq!(CaseDraft::default().status, Some(CaseStatus::Open));
    }

    #[test]
    fn missing_fields_are_reported_in_form_order() {
        let mut draft = CaseDraft::default();
        draft.set_title("");
        assert_eq!(
            draft.missing_fields(),
            vec!["title", "type", "client", "court"]
        );

        draft.set_title("   ");
        assert_eq!(draft.missing_fields(), vec!["type", "client", "court"]);
    }

    #[test]
    fn build_applies_defaults() -> anyhow::Result<()> {
        let case = complete_draft().build(seed(&[], None, 1))?;
        assert_eq!(case.number, "C-2026-001");
        assert_eq!(case.next_session, date!(2026 - 04 - 20));
        assert_eq!(case.lawyer, UNSPECIFIED_LAWYER);
        assert_eq!(case.status, CaseStatus::Open);
        assert_eq!(case.last_updated, NOW);
        Ok(())
    }

    #[test]
    fn blank_lawyer_falls_back_to_unspecified() -> anyhow::Result<()> {
        let mut draft = complete_draft();
        draft.set_lawyer("");
        let case = draft.build(seed(&[], None, 1))?;
        assert_eq!(case.lawyer, UNSPECIFIED_LAWYER);
        Ok(())
    }

    #[test]
    fn build_rejects_incomplete_draft() {
        let mut draft = complete_draft();
        draft.court = None;
        let failure = draft
            .build(seed(&[], None, 1))
            .expect_err("missing court should fail");
        assert_eq!(failure.missing, vec!["court"]);
    }

    #[test]
    fn edit_keeps_number_and_id() -> anyhow::Result<()> {
        let original = complete_draft().build(seed(&[], None, 1))?;
        let mut draft = CaseDraft::from_record(&original);
        draft.set_status(CaseStatus::Closed);
        let store = [original.clone()];
        let edited = draft.build(seed(&store, Some(&original), 5))?;
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.number, original.number);
        assert_eq!(edited.status, CaseStatus::Closed);
        Ok(())
    }

    #[test]
    fn monotonic_numbering_uses_issued_count() -> anyhow::Result<()> {
        let mut seed = seed(&[], None, 7);
        seed.policy = CaseNumbering::Monotonic;
        let case = complete_draft().build(seed)?;
        assert_eq!(case.number, "C-2026-007");
        Ok(())
    }

    #[test]
    fn set_input_parses_choices_and_dates() -> anyhow::Result<()> {
        let mut draft = CaseDraft::default();
        draft.set_input("type", "family")?;
        draft.set_input("next_session", "2026-06-01")?;
        assert_eq!(draft.case_type, Some(CaseType::Family));
        assert_eq!(draft.display_value("next_session"), "2026-06-01");

        draft.set_input("type", "")?;
        assert_eq!(draft.case_type, None);

        let error = draft
            .set_input("status", "archived")
            .expect_err("unknown status should fail");
        assert!(matches!(error, FieldError::InvalidChoice { field: "status", .. }));
        assert!(draft.set_input("judge", "x").is_err());
        Ok(())
    }

    #[test]
    fn criteria_require_every_concrete_choice() -> anyhow::Result<()> {
        let case = complete_draft().build(seed(&[], None, 1))?;
        assert!(case.matches_criteria(&CaseCriteria::default()));
        assert!(case.matches_criteria(&CaseCriteria {
            status: Choice::Only(CaseStatus::Open),
            case_type: Choice::Only(CaseType::Civil),
        }));
        assert!(!case.matches_criteria(&CaseCriteria {
            status: Choice::Only(CaseStatus::Open),
            case_type: Choice::Only(CaseType::Criminal),
        }));
        Ok(())
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::draft::{
    Draft, FieldError, FieldKind, FieldSpec, RecordSeed, ValidationFailure, is_blank, text_input,
};
use crate::store::{NoCriteria, Record};
use crate::{Client, ClientId, RecordKind};

const CLIENT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "name",
        label: "Full name",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "phone",
        label: "Phone",
        required: true,
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "email",
        label: "Email",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "address",
        label: "Address",
        required: false,
        kind: FieldKind::Text,
    },
    FieldSpec {
        key: "notes",
        label: "Notes",
        required: false,
        kind: FieldKind::Text,
    },
];

impl Record for Client {
    type Id = ClientId;
    type Draft = ClientDraft;
    type Criteria = NoCriteria;
    type Policy = ();

    const KIND: RecordKind = RecordKind::Client;

    fn id(&self) -> ClientId {
        self.id
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.phone.as_str(), self.email.as_str()]
    }

    fn matches_criteria(&self, _criteria: &NoCriteria) -> bool {
        true
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.phone.is_empty() {
            missing.push("phone");
        }
        missing
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl ClientDraft {
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> &mut Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.email = Some(email.into());
        self
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.address = Some(address.into());
        self
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> &mut Self {
        self.notes = Some(notes.into());
        self
    }
}

impl Draft for ClientDraft {
    type Record = Client;

    const FIELDS: &'static [FieldSpec] = CLIENT_FIELDS;

    fn from_record(record: &Client) -> Self {
        Self {
            name: Some(record.name.clone()),
            phone: Some(record.phone.clone()),
            email: Some(record.email.clone()),
            address: Some(record.address.clone()),
            notes: Some(record.notes.clone()),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(self.name.as_deref()) {
            missing.push("name");
        }
        if is_blank(self.phone.as_deref()) {
            missing.push("phone");
        }
        missing
    }

    fn build(&self, seed: RecordSeed<'_, Client>) -> Result<Client, ValidationFailure> {
        self.validate()?;
        Ok(Client {
            id: seed.id,
            name: self.name.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
            created_at: seed.existing.map_or(seed.now, |client| client.created_at),
        })
    }

    fn display_value(&self, key: &str) -> String {
        let value = match key {
            "name" => &self.name,
            "phone" => &self.phone,
            "email" => &self.email,
            "address" => &self.address,
            "notes" => &self.notes,
            _ => return String::new(),
        };
        value.clone().unwrap_or_default()
    }

    fn set_input(&mut self, key: &str, raw: &str) -> Result<(), FieldError> {
        let slot = match key {
            "name" => &mut self.name,
            "phone" => &mut self.phone,
            "email" => &mut self.email,
            "address" => &mut self.address,
            "notes" => &mut self.notes,
            other => return Err(FieldError::UnknownField(other.to_owned())),
        };
        *slot = text_input(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ClientDraft;
    use crate::draft::{Draft, RecordSeed};
    use crate::{Client, ClientId};
    use time::macros::datetime;

    #[test]
    fn name_and_phone_are_required() {
        let mut draft = ClientDraft::default();
        assert_eq!(draft.missing_fields(), vec!["name", "phone"]);
        draft.set_name("Sara");
        assert_eq!(draft.missing_fields(), vec!["phone"]);
        draft.set_phone("0500000000");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn optional_fields_default_to_empty() -> anyhow::Result<()> {
        let mut draft = ClientDraft::default();
        draft.set_name("Sara").set_phone("0500000000");
        let now = datetime!(2026-02-01 12:00 UTC);
        let client = draft.build(RecordSeed {
            id: ClientId::new(1),
            issued: 1,
            now,
            store: &[],
            existing: None,
            policy: (),
        })?;
        assert_eq!(client.email, "");
        assert_eq!(client.address, "");
        assert_eq!(client.notes, "");
        assert_eq!(client.created_at, now);
        Ok(())
    }

    #[test]
    fn edit_preserves_creation_time() -> anyhow::Result<()> {
        let original = Client {
            id: ClientId::new(3),
            name: "Omar".to_owned(),
            phone: "0511111111".to_owned(),
            email: String::new(),
            address: String::new(),
            notes: String::new(),
            created_at: datetime!(2026-01-01 09:00 UTC),
        };
        let mut draft = ClientDraft::from_record(&original);
        draft.set_email("omar@example.com");
        let store = [original.clone()];
        let edited = draft.build(RecordSeed {
            id: original.id,
            issued: 3,
            now: datetime!(2026-03-01 09:00 UTC),
            store: &store,
            existing: Some(&original),
            policy: (),
        })?;
        assert_eq!(edited.created_at, original.created_at);
        assert_eq!(edited.email, "omar@example.com");
        Ok(())
    }

    #[test]
    fn blank_input_clears_the_field() -> anyhow::Result<()> {
        let mut draft = ClientDraft::default();
        draft.set_input("notes", "prefers email")?;
        assert_eq!(draft.display_value("notes"), "prefers email");
        draft.set_input("notes", "")?;
        assert_eq!(draft.notes, None);

        draft.set_input("notes", "  ")?;
        assert_eq!(draft.notes.as_deref(), Some("  "));
        Ok(())
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt::Debug;

use thiserror::Error;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::RecordKind;
use crate::store::Record;

pub const DATE_LAYOUT: &str = "YYYY-MM-DD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    /// Closed set of machine tokens.
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

/// A commit was attempted with required fields left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{record} not saved: missing {fields}", record = .kind.as_str(), fields = .missing.join(", "))]
pub struct ValidationFailure {
    pub kind: RecordKind,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field {0:?}")]
    UnknownField(String),
    #[error("invalid date {value:?}; use YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("{field} must be one of: {allowed}")]
    InvalidChoice {
        field: &'static str,
        allowed: String,
    },
}

/// Everything a draft needs, beyond its own fields, to become a record.
#[derive(Debug)]
pub struct RecordSeed<'a, R: Record> {
    pub id: R::Id,
    /// Ids handed out by the owning manager so far, this one included.
    pub issued: i64,
    pub now: OffsetDateTime,
    pub store: &'a [R],
    /// The record being edited; `None` on create.
    pub existing: Option<&'a R>,
    pub policy: R::Policy,
}

impl<R: Record> RecordSeed<'_, R> {
    pub fn today(&self) -> Date {
        self.now.date()
    }
}

/// An uncommitted, partially-filled record.
pub trait Draft: Clone + Debug + Default + PartialEq {
    type Record: Record<Draft = Self>;

    /// Form fields in display order.
    const FIELDS: &'static [FieldSpec];

    fn from_record(record: &Self::Record) -> Self;

    fn missing_fields(&self) -> Vec<&'static str>;

    /// Builds the final record, applying defaults. Fails when required fields are empty.
    fn build(&self, seed: RecordSeed<'_, Self::Record>)
    -> Result<Self::Record, ValidationFailure>;

    /// Current value of `key` as the form shows it; empty when unset.
    fn display_value(&self, key: &str) -> String;

    /// Sets `key` from raw user input. Blank input clears the field.
    fn set_input(&mut self, key: &str, raw: &str) -> Result<(), FieldError>;

    fn validate(&self) -> Result<(), ValidationFailure> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure {
                kind: <Self::Record as Record>::KIND,
                missing,
            })
        }
    }

    fn field(key: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.key == key)
    }
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

pub(crate) fn text_input(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_owned())
    }
}

pub fn parse_date_input(raw: &str) -> Result<Option<Date>, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Date::parse(trimmed, &format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|_| FieldError::InvalidDate {
            value: trimmed.to_owned(),
        })
}

pub(crate) fn choice_input<T>(
    field: &'static str,
    raw: &str,
    options: &[&str],
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse(trimmed).map(Some).ok_or_else(|| FieldError::InvalidChoice {
        field,
        allowed: options.join(", "),
    })
}

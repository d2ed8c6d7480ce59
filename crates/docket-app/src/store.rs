// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt::{Debug, Display};

use crate::RecordKind;
use crate::draft::Draft;

/// An entity a [`RecordStore`] can hold and a [`crate::RecordManager`] can edit.
pub trait Record: Clone + Debug + PartialEq {
    type Id: Copy + Eq + Debug + Display + From<i64>;
    type Draft: Draft<Record = Self>;
    type Criteria: Clone + Debug + Default + PartialEq;
    /// Knobs that shape how new records are built (case numbering, for example).
    type Policy: Copy + Debug + Default + PartialEq;

    const KIND: RecordKind;

    fn id(&self) -> Self::Id;

    /// Fields the free-text query is matched against, in display order.
    fn searchable_fields(&self) -> Vec<&str>;

    fn matches_criteria(&self, criteria: &Self::Criteria) -> bool;

    /// Names of required fields that are empty.
    fn missing_fields(&self) -> Vec<&'static str>;
}

/// Criteria type for records with no categorical filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCriteria;

/// Ordered, insertion-preserving collection of committed records.
///
/// Mutations build the next collection and swap it in whole, so a reader
/// holding `&RecordStore` never sees a half-applied change.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn position(&self, id: R::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Appends `record`. Records with empty required fields are ignored.
    pub fn add(&mut self, record: R) -> bool {
        if !record.missing_fields().is_empty() {
            return false;
        }
        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.extend(self.records.iter().cloned());
        next.push(record);
        self.records = next;
        true
    }

    /// Drops the record with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: R::Id) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.records = self
            .records
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect();
        true
    }

    /// Substitutes the record with `id`, keeping its position. Absent ids are a no-op.
    pub fn replace(&mut self, id: R::Id, record: R) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        self.records = self
            .records
            .iter()
            .map(|existing| {
                if existing.id() == id {
                    record.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        true
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::ids::*;

pub const UNSPECIFIED_LAWYER: &str = "unspecified";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseType {
    Personal,
    Criminal,
    Commercial,
    Civil,
    Family,
}

impl CaseType {
    pub const ALL: [Self; 5] = [
        Self::Personal,
        Self::Criminal,
        Self::Commercial,
        Self::Civil,
        Self::Family,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Criminal => "criminal",
            Self::Commercial => "commercial",
            Self::Civil => "civil",
            Self::Family => "family",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "personal" => Some(Self::Personal),
            "criminal" => Some(Self::Criminal),
            "commercial" => Some(Self::Commercial),
            "civil" => Some(Self::Civil),
            "family" => Some(Self::Family),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Criminal => "Criminal",
            Self::Commercial => "Commercial",
            Self::Civil => "Civil",
            Self::Family => "Family",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    Open,
    Closed,
    Pending,
}

impl CaseStatus {
    /// Order used by the status filter picker.
    pub const ALL: [Self; 3] = [Self::Open, Self::Pending, Self::Closed];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Pending => "pending",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Pending => "Pending",
        }
    }
}

/// How the `<seq>` part of a case number is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CaseNumbering {
    /// `store length + 1` at creation time. Deleting a case and adding another
    /// can repeat an existing number.
    #[default]
    StoreLength,
    /// Session-wide creation counter; numbers are never reused.
    Monotonic,
}

impl CaseNumbering {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StoreLength => "store_length",
            Self::Monotonic => "monotonic",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "store_length" => Some(Self::StoreLength),
            "monotonic" => Some(Self::Monotonic),
            _ => None,
        }
    }
}

/// Categorical filter value. `All` is the "no constraint" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq + Copy> Choice<T> {
    pub fn admits(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == value,
        }
    }

    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Steps through `All`, then each option in order, then back to `All`.
    pub fn cycle(self, options: &[T]) -> Self {
        match self {
            Self::All => options.first().copied().map_or(Self::All, Self::Only),
            Self::Only(current) => options
                .iter()
                .position(|option| *option == current)
                .and_then(|index| options.get(index + 1))
                .copied()
                .map_or(Self::All, Self::Only),
        }
    }
}

impl Choice<CaseStatus> {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            other => CaseStatus::parse(other).map(Self::Only),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all statuses",
            Self::Only(status) => status.label(),
        }
    }
}

impl Choice<CaseType> {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            other => CaseType::parse(other).map(Self::Only),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all types",
            Self::Only(case_type) => case_type.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Case,
    Client,
}

impl RecordKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Case => "case",
            Self::Client => "client",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Cases,
    Clients,
}

impl TabKind {
    pub const ALL: [Self; 2] = [Self::Cases, Self::Clients];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cases => "cases",
            Self::Clients => "clients",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cases" => Some(Self::Cases),
            "clients" => Some(Self::Clients),
            _ => None,
        }
    }

    pub const fn record_kind(self) -> RecordKind {
        match self {
            Self::Cases => RecordKind::Case,
            Self::Clients => RecordKind::Client,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppMode {
    Nav,
    Search,
    Form(RecordKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub number: String,
    pub title: String,
    pub case_type: CaseType,
    pub status: CaseStatus,
    pub client: String,
    pub court: String,
    pub next_session: Date,
    pub lawyer: String,
    pub last_updated: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub notes: String,
    pub created_at: OffsetDateTime,
}

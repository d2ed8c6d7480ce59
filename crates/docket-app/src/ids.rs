// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(CaseId);
entity_id!(ClientId);

/// Session-local id source. Values start at 1 and are never handed out twice,
/// even after the record that used them is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    last: i64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence {
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    pub fn next_value(&mut self) -> i64 {
        self.last = self.last.saturating_add(1);
        self.last
    }

    /// Number of ids handed out so far.
    pub const fn issued(&self) -> i64 {
        self.last
    }
}

/// Human-readable case number, `C-<year>-<seq>` with `seq` padded to three digits.
pub fn format_case_number(year: i32, seq: i64) -> String {
    format!("C-{year}-{seq:03}")
}

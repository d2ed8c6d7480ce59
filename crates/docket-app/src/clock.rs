// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::{Date, OffsetDateTime};

/// Source of "now" for defaults and case numbers.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;

    fn today(&self) -> Date {
        self.now().date()
    }

    fn year(&self) -> i32 {
        self.now().year()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock pinned to a single instant; `set` moves it.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: std::cell::Cell<OffsetDateTime>,
}

impl FixedClock {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            now: std::cell::Cell::new(now),
        }
    }

    pub fn set(&self, now: OffsetDateTime) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

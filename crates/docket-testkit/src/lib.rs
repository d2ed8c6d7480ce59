// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use docket_app::{
    CaseDraft, CaseStatus, CaseType, ClientDraft, Clock, CommitOutcome, Office, RecordManager,
};
use time::{Date, Duration, OffsetDateTime, macros::datetime};

pub use docket_app::FixedClock;

const FIRST_NAMES: [&str; 16] = [
    "Sara", "Omar", "Lina", "Khalid", "Noura", "Faisal", "Huda", "Yousef", "Reem", "Tariq",
    "Maha", "Ziad", "Dana", "Samir", "Rana", "Adel",
];
const LAST_NAMES: [&str; 14] = [
    "Khalil", "Haddad", "Saleh", "Mansour", "Nasser", "Qasim", "Farouk", "Aziz", "Hamdan",
    "Rashid", "Barakat", "Issa", "Suleiman", "Darwish",
];

const CITIES: [&str; 8] = [
    "Riyadh", "Jeddah", "Dammam", "Amman", "Doha", "Muscat", "Kuwait City", "Manama",
];
const STREET_NAMES: [&str; 8] = [
    "King Fahd Rd",
    "Olaya St",
    "Tahlia St",
    "Prince Sultan Rd",
    "Corniche Rd",
    "Airport Rd",
    "Al Malqa St",
    "University Ave",
];

const COURTS: [&str; 7] = [
    "General Court",
    "Criminal Court",
    "Commercial Court",
    "Personal Status Court",
    "Labor Court",
    "Court of Appeal",
    "Administrative Court",
];

const LAWYERS: [&str; 6] = [
    "Adv. Maha Aziz",
    "Adv. Tariq Hamdan",
    "Adv. Reem Nasser",
    "Adv. Samir Issa",
    "Adv. Dana Farouk",
    "",
];

const CLIENT_NOTES: [&str; 6] = [
    "prefers phone calls in the morning",
    "referred by a previous client",
    "needs documents translated",
    "corporate account",
    "",
    "",
];

/// Timestamp every fixture clock starts at.
pub fn fixture_now() -> OffsetDateTime {
    datetime!(2026-02-19 12:34:56 UTC)
}

pub fn fixture_clock() -> FixedClock {
    FixedClock::new(fixture_now())
}

/// Case draft with every required field filled.
pub fn case_draft(title: &str, case_type: CaseType, client: &str, court: &str) -> CaseDraft {
    let mut draft = CaseDraft::default();
    draft
        .set_title(title)
        .set_case_type(case_type)
        .set_client(client)
        .set_court(court);
    draft
}

/// Client draft with only the required fields filled.
pub fn client_draft(name: &str, phone: &str) -> ClientDraft {
    let mut draft = ClientDraft::default();
    draft.set_name(name).set_phone(phone);
    draft
}

/// Opens a create form, installs `draft`, and submits it.
pub fn create_with<R, C>(
    manager: &mut RecordManager<R, C>,
    draft: R::Draft,
) -> Result<CommitOutcome<R::Id>>
where
    R: docket_app::Record,
    C: Clock,
{
    manager.open_create();
    if let Some(slot) = manager.draft_mut() {
        *slot = draft;
    }
    manager.submit().context("submit fixture draft")
}

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Deterministic generator of plausible law-office records.
#[derive(Debug, Clone)]
pub struct OfficeFaker {
    rng: DeterministicRng,
    reference: Date,
}

impl OfficeFaker {
    pub fn new(seed: u64, reference: Date) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            reference,
        }
    }

    pub fn person_name(&mut self) -> String {
        format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
    }

    pub fn phone(&mut self) -> String {
        format!(
            "05{}{:07}",
            self.rng.int_n(10),
            self.rng.int_n(10_000_000)
        )
    }

    pub fn client(&mut self) -> ClientDraft {
        let name = self.person_name();
        let mut draft = ClientDraft::default();
        draft.set_name(name.clone()).set_phone(self.phone());
        if self.rng.int_n(3) > 0 {
            let handle = name.to_ascii_lowercase().replace(' ', ".");
            draft.set_email(format!("{handle}@example.com"));
        }
        if self.rng.int_n(2) == 0 {
            let number = 100 + self.rng.int_n(9_000);
            draft.set_address(format!(
                "{number} {}, {}",
                self.pick(&STREET_NAMES),
                self.pick(&CITIES)
            ));
        }
        let note = self.pick(&CLIENT_NOTES);
        if !note.is_empty() {
            draft.set_notes(note);
        }
        draft
    }

    pub fn case_for(&mut self, client: &str) -> CaseDraft {
        let case_type = CaseType::ALL[self.rng.int_n(CaseType::ALL.len())];
        let status = CaseStatus::ALL[self.rng.int_n(CaseStatus::ALL.len())];
        let offset = i64::try_from(self.rng.int_n(120)).unwrap_or(0) - 30;
        let court = match case_type {
            CaseType::Criminal => COURTS[1],
            CaseType::Commercial => COURTS[2],
            CaseType::Family => COURTS[3],
            CaseType::Personal | CaseType::Civil => self.pick(&COURTS),
        };

        let mut draft = CaseDraft::default();
        draft
            .set_title(self.case_title(case_type))
            .set_case_type(case_type)
            .set_status(status)
            .set_client(client)
            .set_court(court)
            .set_next_session(self.reference + Duration::days(offset));
        let lawyer = self.pick(&LAWYERS);
        if !lawyer.is_empty() {
            draft.set_lawyer(lawyer);
        }
        draft
    }

    fn case_title(&mut self, case_type: CaseType) -> String {
        let titles: &[&str] = match case_type {
            CaseType::Personal => &["Defamation claim", "Personal injury", "Privacy complaint"],
            CaseType::Criminal => &["Fraud defense", "Theft appeal", "Assault charge"],
            CaseType::Commercial => &[
                "Supply contract breach",
                "Partnership dissolution",
                "Unpaid invoices",
            ],
            CaseType::Civil => &["Lease dispute", "Property boundary", "Construction defect"],
            CaseType::Family => &["Custody review", "Inheritance division", "Alimony adjustment"],
        };
        self.pick(titles).to_owned()
    }

    fn pick<'a>(&mut self, values: &[&'a str]) -> &'a str {
        values[self.rng.int_n(values.len())]
    }
}

/// Fills `office` with `clients` fake clients and about two cases per client.
pub fn seed_demo_office<C: Clock>(office: &mut Office<C>, seed: u64, clients: usize) -> Result<()> {
    let today = office.cases.clock().today();
    let mut faker = OfficeFaker::new(seed, today);
    for _ in 0..clients {
        let client = faker.client();
        let name = client.name.clone().unwrap_or_default();
        create_with(&mut office.clients, client).context("seed demo client")?;
        for _ in 0..=faker.rng.int_n(3) {
            create_with(&mut office.cases, faker.case_for(&name)).context("seed demo case")?;
        }
    }
    Ok(())
}

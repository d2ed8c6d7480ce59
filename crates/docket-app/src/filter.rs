// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::store::Record;

/// Lower-cased free-text query. Only the empty string matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if self.is_empty() {
            return true;
        }
        record
            .searchable_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Visible subset of `records`: every record whose searchable fields contain
/// `query` and whose categorical fields satisfy `criteria`, in store order.
pub fn filter_records<'a, R, I>(records: I, query: &str, criteria: &R::Criteria) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let query = Query::new(query);
    records
        .into_iter()
        .filter(|record| query.matches(*record) && record.matches_criteria(criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Query, filter_records};
    use crate::{Case, CaseCriteria, CaseId, CaseStatus, CaseType, Choice, Client, ClientId};
    use crate::store::NoCriteria;
    use time::macros::{date, datetime};

    fn case(id: i64, title: &str, client: &str, status: CaseStatus, case_type: CaseType) -> Case {
        Case {
            id: CaseId::new(id),
            number: format!("C-2026-{id:03}"),
            title: title.to_owned(),
            case_type,
            status,
            client: client.to_owned(),
            court: "Central Court".to_owned(),
            next_session: date!(2026 - 05 - 01),
            lawyer: "unspecified".to_owned(),
            last_updated: datetime!(2026-04-01 10:00 UTC),
        }
    }

    fn sample_cases() -> Vec<Case> {
        vec![
            case(1, "Lease dispute", "Sara Khalil", CaseStatus::Open, CaseType::Civil),
            case(2, "Fraud appeal", "Omar Haddad", CaseStatus::Closed, CaseType::Criminal),
            case(3, "Custody review", "Lina Saleh", CaseStatus::Open, CaseType::Family),
        ]
    }

    fn ids(cases: &[&Case]) -> Vec<i64> {
        cases.iter().map(|case| case.id.get()).collect()
    }

    #[test]
    fn empty_query_and_all_filters_is_identity() {
        let cases = sample_cases();
        let visible = filter_records(&cases, "", &CaseCriteria::default());
        assert_eq!(ids(&visible), vec![1, 2, 3]);
    }

    #[test]
    fn query_is_case_insensitive_across_searchable_fields() {
        let cases = sample_cases();
        assert_eq!(
            ids(&filter_records(&cases, "LEASE", &CaseCriteria::default())),
            vec![1]
        );
        assert_eq!(
            ids(&filter_records(&cases, "haddad", &CaseCriteria::default())),
            vec![2]
        );
        assert_eq!(
            ids(&filter_records(&cases, "c-2026-003", &CaseCriteria::default())),
            vec![3]
        );
        assert!(filter_records(&cases, "Central", &CaseCriteria::default()).is_empty());
    }

    #[test]
    fn status_filter_keeps_relative_order() {
        let cases = sample_cases();
        let criteria = CaseCriteria {
            status: Choice::Only(CaseStatus::Open),
            ..CaseCriteria::default()
        };
        assert_eq!(ids(&filter_records(&cases, "", &criteria)), vec![1, 3]);
    }

    #[test]
    fn query_and_criteria_combine() {
        let cases = sample_cases();
        let criteria = CaseCriteria {
            status: Choice::Only(CaseStatus::Open),
            case_type: Choice::Only(CaseType::Family),
        };
        assert_eq!(ids(&filter_records(&cases, "saleh", &criteria)), vec![3]);
        assert!(filter_records(&cases, "khalil", &criteria).is_empty());
    }

    #[test]
    fn filtering_is_repeatable() {
        let cases = sample_cases();
        let criteria = CaseCriteria {
            case_type: Choice::Only(CaseType::Civil),
            ..CaseCriteria::default()
        };
        let first = filter_records(&cases, "sara", &criteria);
        let second = filter_records(&cases, "sara", &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn client_query_matches_phone_and_email() {
        let clients = vec![Client {
            id: ClientId::new(1),
            name: "Sara".to_owned(),
            phone: "0500000000".to_owned(),
            email: "Sara@Example.com".to_owned(),
            address: "Riyadh".to_owned(),
            notes: String::new(),
            created_at: datetime!(2026-01-01 00:00 UTC),
        }];
        assert_eq!(filter_records(&clients, "0500", &NoCriteria).len(), 1);
        assert_eq!(filter_records(&clients, "example.COM", &NoCriteria).len(), 1);
        assert!(filter_records(&clients, "riyadh", &NoCriteria).is_empty());
    }

    #[test]
    fn only_the_empty_query_counts_as_empty() {
        assert!(Query::new("").is_empty());
        assert!(!Query::new("   ").is_empty());
    }

    #[test]
    fn whitespace_is_part_of_the_needle() {
        let client = |id: i64, name: &str| Client {
            id: ClientId::new(id),
            name: name.to_owned(),
            phone: "0500000000".to_owned(),
            email: String::new(),
            address: String::new(),
            notes: String::new(),
            created_at: datetime!(2026-01-01 00:00 UTC),
        };
        let clients = vec![client(1, "Sara"), client(2, "Omar Haddad")];

        let spaced: Vec<&str> = filter_records(&clients, " ", &NoCriteria)
            .iter()
            .map(|client| client.name.as_str())
            .collect();
        assert_eq!(spaced, vec!["Omar Haddad"]);
        assert!(filter_records(&clients, "sara ", &NoCriteria).is_empty());
        assert_eq!(filter_records(&clients, "SARA", &NoCriteria).len(), 1);
    }
}

//! Property-based tests for the validator and generator.
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p secret-santa --test property_tests
//! ```

use std::collections::HashSet;

use fastrand::Rng;
use proptest::prelude::*;

use secret_santa::{
    AssignmentGenerator, Participant, PreviousPairing, Record, SantaError, normalize_email,
    validate,
};

const FIELDS: &[&str] = &["Employee_Name", "Employee_EmailID"];

/// Distinct participants with mixed-case emails.
fn participants(max: usize) -> impl Strategy<Value = Vec<Participant>> {
    prop::collection::hash_set("[a-z]{1,8}", 2..max).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, n)| {
                let email = if i % 2 == 0 {
                    format!("{n}@Example.com")
                } else {
                    format!(" {}@example.COM ", n.to_uppercase())
                };
                Participant::new(n, email)
            })
            .collect()
    })
}

fn record(name: &str, email: &str) -> Record {
    let mut r = Record::new();
    r.insert("Employee_Name".into(), name.into());
    r.insert("Employee_EmailID".into(), email.into());
    r
}

proptest! {
    /// Every accepted draw is a permutation with no self or forbidden pair.
    #[test]
    fn generated_assignments_respect_constraints(
        people in participants(12),
        seed in any::<u64>(),
        history_seed in any::<u64>(),
    ) {
        // Forbid a sparse random set of pairs
        let mut h = Rng::with_seed(history_seed);
        let mut previous = Vec::new();
        for giver in &people {
            if h.bool() {
                let receiver = &people[h.usize(..people.len())];
                previous.push(PreviousPairing::new(giver.email.clone(), receiver.email.clone()));
            }
        }
        let forbidden: HashSet<_> = previous.iter().map(PreviousPairing::key).collect();

        match AssignmentGenerator::new().generate_with_rng(&people, &previous, &mut Rng::with_seed(seed)) {
            Ok(assignments) => {
                let keys: HashSet<_> = people.iter().map(Participant::key).collect();
                let givers: HashSet<_> = assignments.iter().map(|a| a.key().0).collect();
                let receivers: HashSet<_> = assignments.iter().map(|a| a.key().1).collect();

                prop_assert_eq!(assignments.len(), people.len());
                prop_assert_eq!(&givers, &keys);
                prop_assert_eq!(&receivers, &keys);
                for a in &assignments {
                    let (g, r) = a.key();
                    prop_assert_ne!(&g, &r);
                    prop_assert!(!forbidden.contains(&(g, r)));
                }
            }
            Err(SantaError::ExhaustedAttempts { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// The validator never panics and a report is valid iff it has no errors.
    #[test]
    fn validator_verdict_matches_errors(
        rows in prop::collection::vec(("[ a-zA-Z]{0,6}", "[ a-z@.]{0,12}"), 0..8),
    ) {
        let records: Vec<Record> = rows.iter().map(|(n, e)| record(n, e)).collect();
        let report = validate(&records, FIELDS);

        prop_assert_eq!(report.valid, report.errors.is_empty());
        if records.is_empty() {
            prop_assert_eq!(report.messages(), vec!["Data is empty.".to_string()]);
        }
        if records.len() == 1 {
            let too_few = "At least 2 participants are required for Secret Santa.".to_string();
            prop_assert!(report.messages().contains(&too_few));
        }
    }

    /// Emails that differ only in case or surrounding space are duplicates.
    #[test]
    fn duplicate_detection_uses_normalized_email(local in "[a-z]{1,10}") {
        let a = format!("{local}@x.com");
        let b = format!("  {}@X.COM", local.to_uppercase());
        prop_assert_eq!(normalize_email(&a), normalize_email(&b));

        let report = validate(&[record("A", &a), record("B", &b)], FIELDS);
        prop_assert_eq!(report.errors.len(), 1);
        prop_assert!(report.messages()[0].starts_with("Duplicate email"));
    }
}

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::*;
use crate::models::ClockTime;

fn make_record(major: &str, minor: &str, cost: i64) -> ExpenseRecord {
    ExpenseRecord::new(
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        ClockTime::new(12, 0),
        major,
        minor,
        cost,
    )
}

// ── classify ──────────────────────────────────────────────────

#[test]
fn test_classify_full_table() {
    let expected = [
        ("Food", "Delivery", Tag::Laziness),
        ("Food", "Cafe/Snack", Tag::Impulse),
        ("Food", "Alcohol/Entertainment", Tag::Impulse),
        ("Housing/Comm", "Rent", Tag::Breath),
        ("Housing/Comm", "Utilities", Tag::Breath),
        ("Housing/Comm", "Telecom", Tag::Breath),
        ("Housing/Comm", "Subscriptions", Tag::Breath),
        ("Living/Shopping", "Fashion/Beauty", Tag::Impulse),
        ("Living/Shopping", "Appliances/Furniture", Tag::Impulse),
        ("Living/Shopping", "Pets", Tag::Breath),
        ("Transport", "Public Transit", Tag::Breath),
        ("Transport", "Fuel/Own Car", Tag::Breath),
        ("Transport", "Taxi/Rideshare", Tag::Laziness),
        ("Health/Exercise", "Fitness", Tag::Growth),
        ("Education", "Books/Supplies", Tag::Growth),
        ("Education", "Courses", Tag::Growth),
        ("Relationships", "Dating/Meetups", Tag::Impulse),
        ("Culture/Hobby", "Movies/Shows", Tag::Impulse),
        ("Culture/Hobby", "Travel", Tag::Impulse),
        ("Finance", "Insurance/Tax", Tag::Breath),
        ("Finance", "Savings/Investment", Tag::Growth),
    ];
    for (major, minor, tag) in expected {
        assert_eq!(classify(major, minor), tag, "{major} / {minor}");
    }
}

#[test]
fn test_classify_unknown_pairs_are_neutral() {
    assert_eq!(classify("Food", "Groceries"), Tag::Neutral);
    assert_eq!(classify("Other", "Other"), Tag::Neutral);
    assert_eq!(classify("", ""), Tag::Neutral);
    // Minor under the wrong major is not a match
    assert_eq!(classify("Transport", "Delivery"), Tag::Neutral);
}

#[test]
fn test_classify_is_case_sensitive_but_trims() {
    assert_eq!(classify(" Food ", "Delivery "), Tag::Laziness);
    assert_eq!(classify("food", "delivery"), Tag::Neutral);
}

// ── reinterpret ───────────────────────────────────────────────

#[test]
fn test_reinterpret_preserves_order_and_records() {
    let records = vec![
        make_record("Food", "Delivery", 10_000),
        make_record("Finance", "Savings/Investment", 300_000),
        make_record("Mystery", "Box", 1),
    ];
    let tagged = reinterpret(records.clone());
    let tags: Vec<Tag> = tagged.iter().map(|r| r.tag).collect();
    assert_eq!(tags, vec![Tag::Laziness, Tag::Growth, Tag::Neutral]);
    for (t, r) in tagged.iter().zip(&records) {
        assert_eq!(&t.record, r);
    }
}

#[test]
fn test_reinterpret_empty() {
    assert!(reinterpret(Vec::new()).is_empty());
}

// ── taxonomy ──────────────────────────────────────────────────

#[test]
fn test_majors_in_table_order_with_catch_all() {
    let majors = majors();
    assert_eq!(majors.first(), Some(&"Food"));
    assert_eq!(majors.last(), Some(&OTHER));
    assert_eq!(majors.len(), 10);
}

#[test]
fn test_minors_of() {
    assert_eq!(
        minors_of("Housing/Comm"),
        vec!["Rent", "Utilities", "Telecom", "Subscriptions"]
    );
    assert_eq!(minors_of("Other"), vec!["Other"]);
    assert!(minors_of("Nonsense").is_empty());
}

// ── validate_entry ────────────────────────────────────────────

#[test]
fn test_validate_accepts_table_pairs_and_other() {
    assert!(validate_entry(&make_record("Food", "Delivery", 0)).is_ok());
    assert!(validate_entry(&make_record("Other", "Other", 500)).is_ok());
}

#[test]
fn test_validate_rejects_unknown_pair() {
    let err = validate_entry(&make_record("Food", "Rent", 1000)).unwrap_err();
    assert!(matches!(err, LedgerError::UnknownCategory { .. }));
}

#[test]
fn test_validate_rejects_negative_cost() {
    let err = validate_entry(&make_record("Food", "Delivery", -1)).unwrap_err();
    assert!(matches!(err, LedgerError::NegativeCost(-1)));
}

#[test]
fn test_validate_memo_limit_counts_chars() {
    let ok = make_record("Food", "Delivery", 1).with_memo("가".repeat(50));
    assert!(validate_entry(&ok).is_ok());
    let long = make_record("Food", "Delivery", 1).with_memo("x".repeat(51));
    let err = validate_entry(&long).unwrap_err();
    assert!(matches!(err, LedgerError::MemoTooLong { len: 51, max: 50 }));
}

// ── taxonomy ──────────────────────────────────────────────────

#[test]
fn test_taxonomy_pairs_all_validate() {
    let taxonomy = taxonomy();
    assert_eq!(taxonomy.len(), 10);
    assert_eq!(taxonomy[0].0, "Food");
    assert_eq!(taxonomy.last().unwrap(), &("Other", vec!["Other"]));
    let pairs: usize = taxonomy.iter().map(|(_, minors)| minors.len()).sum();
    assert_eq!(pairs, 22);
    for (major, minors) in &taxonomy {
        for minor in minors {
            assert!(validate_entry(&make_record(major, minor, 1)).is_ok());
        }
    }
}

//! The reinterpretation table: which spending is waste, which is breath, which is growth.

use crate::errors::LedgerError;
use crate::models::{ExpenseRecord, ReinterpretedExpense, Tag, MEMO_MAX_CHARS};

/// Catch-all major and minor category. Not in the table, so always Neutral.
pub(crate) const OTHER: &str = "Other";

const RULES: &[(&str, &str, Tag)] = &[
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

/// Total over all inputs: pairs outside the table are Neutral.
pub(crate) fn classify(major: &str, minor: &str) -> Tag {
    let (major, minor) = (major.trim(), minor.trim());
    RULES
        .iter()
        .find(|(m, n, _)| *m == major && *n == minor)
        .map_or(Tag::Neutral, |&(_, _, tag)| tag)
}

pub(crate) fn reinterpret(records: Vec<ExpenseRecord>) -> Vec<ReinterpretedExpense> {
    records
        .into_iter()
        .map(|record| {
            let tag = classify(&record.major, &record.minor);
            ReinterpretedExpense { record, tag }
        })
        .collect()
}

/// Major categories in table order, followed by the catch-all.
pub(crate) fn majors() -> Vec<&'static str> {
    let mut majors: Vec<&'static str> = Vec::new();
    for &(major, _, _) in RULES {
        if !majors.contains(&major) {
            majors.push(major);
        }
    }
    majors.push(OTHER);
    majors
}

pub(crate) fn minors_of(major: &str) -> Vec<&'static str> {
    let major = major.trim();
    if major == OTHER {
        return vec![OTHER];
    }
    RULES
        .iter()
        .filter(|(m, _, _)| *m == major)
        .map(|&(_, n, _)| n)
        .collect()
}

/// Every major with its minors, in the order entry forms list them.
pub(crate) fn taxonomy() -> Vec<(&'static str, Vec<&'static str>)> {
    majors()
        .into_iter()
        .map(|major| (major, minors_of(major)))
        .collect()
}

/// Check a record typed in by the user. Rows already in the store are never rejected.
pub(crate) fn validate_entry(record: &ExpenseRecord) -> Result<(), LedgerError> {
    if !minors_of(&record.major).contains(&record.minor.trim()) {
        return Err(LedgerError::UnknownCategory {
            major: record.major.clone(),
            minor: record.minor.clone(),
        });
    }
    validate_fields(record)
}

/// Cost and memo checks alone, for edits that keep a stored category pair.
pub(crate) fn validate_fields(record: &ExpenseRecord) -> Result<(), LedgerError> {
    if record.cost < 0 {
        return Err(LedgerError::NegativeCost(record.cost));
    }
    let len = record.memo.chars().count();
    if len > MEMO_MAX_CHARS {
        return Err(LedgerError::MemoTooLong {
            len,
            max: MEMO_MAX_CHARS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;

#![allow(clippy::unwrap_used)]

use super::*;
use crate::status::Tier;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn spend(date: NaiveDate, cost: i64) -> ExpenseRecord {
    ExpenseRecord::new(date, None, "Food", "Delivery", cost)
}

// ── Persistence ───────────────────────────────────────────────

#[test]
fn test_load_missing_file_is_unset() {
    let dir = tempfile::tempdir().unwrap();
    let setting = BudgetSetting::load(&dir.path().join(BUDGET_FILE));
    assert_eq!(setting.budget, 0);
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(BUDGET_FILE);
    BudgetSetting::new(300_000).unwrap().save(&path).unwrap();
    assert_eq!(BudgetSetting::load(&path).budget, 300_000);

    BudgetSetting::new(50_000).unwrap().save(&path).unwrap();
    assert_eq!(BudgetSetting::load(&path).budget, 50_000);
}

#[test]
fn test_file_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(BUDGET_FILE);
    BudgetSetting::new(12_345).unwrap().save(&path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({ "budget": 12_345 }));
}

#[test]
fn test_load_garbage_or_negative_is_unset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(BUDGET_FILE);
    std::fs::write(&path, "not json").unwrap();
    assert_eq!(BudgetSetting::load(&path).budget, 0);
    std::fs::write(&path, r#"{"budget": -5}"#).unwrap();
    assert_eq!(BudgetSetting::load(&path).budget, 0);
    std::fs::write(&path, "{}").unwrap();
    assert_eq!(BudgetSetting::load(&path).budget, 0);
}

#[test]
fn test_negative_budget_rejected() {
    assert!(matches!(
        BudgetSetting::new(-1),
        Err(LedgerError::NegativeBudget(-1))
    ));
}

// ── Period arithmetic ─────────────────────────────────────────

#[test]
fn test_remaining_days() {
    assert_eq!(remaining_days(d(2024, 5, 31)), 0);
    assert_eq!(remaining_days(d(2024, 5, 1)), 30);
    assert_eq!(remaining_days(d(2024, 2, 10)), 19);
    assert_eq!(days_in_month(d(2023, 2, 10)), 28);
}

#[test]
fn test_daily_allowance() {
    assert_eq!(daily_allowance(100_000, 40_000, 0), 0);
    assert_eq!(daily_allowance(100_000, 40_000, 10), 6_000);
    assert_eq!(daily_allowance(100_000, 40_000, 7), 8_571);
    assert_eq!(daily_allowance(100_000, 130_000, 10), -3_000);
}

#[test]
fn test_used_this_month() {
    let records = vec![
        spend(d(2024, 4, 30), 999),
        spend(d(2024, 5, 1), 100),
        spend(d(2024, 5, 31), 200),
        spend(d(2024, 6, 1), 999),
    ];
    assert_eq!(used_this_month(&records, d(2024, 5, 15)), 300);
    assert_eq!(used_this_month(&[], d(2024, 5, 15)), 0);
}

// ── Outlook ───────────────────────────────────────────────────

#[test]
fn test_outlook_active() {
    let records = vec![spend(d(2024, 5, 2), 40_000)];
    let outlook =
        BudgetOutlook::compute(BudgetSetting::new(100_000).unwrap(), &records, d(2024, 5, 21));
    assert_eq!(outlook.used, 40_000);
    assert!((outlook.usage_pct - 40.0).abs() < 1e-9);
    assert_eq!(outlook.remaining_days, 10);
    assert_eq!(outlook.daily_allowance, 6_000);
    assert_eq!(outlook.state, BudgetState::Active(Tier::Concerned));
}

#[test]
fn test_outlook_unset_and_degenerate() {
    let records = vec![spend(d(2024, 5, 2), 40_000)];
    let unset = BudgetOutlook::compute(BudgetSetting::default(), &records, d(2024, 5, 21));
    assert_eq!(unset.state, BudgetState::Unset);
    assert!((unset.usage_pct - 0.0).abs() < 1e-9);

    let tiny = BudgetOutlook::compute(BudgetSetting::new(5_000).unwrap(), &records, d(2024, 5, 21));
    assert_eq!(tiny.state, BudgetState::Degenerate);
}

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::render::*;
use super::session::Session;
use crate::aggregate::{
    daily_breakdown, forecast_summary, month_summary, pattern_analysis, waste_summary,
    DEFAULT_PATTERN_TAGS,
};
use crate::budget::{BudgetOutlook, BudgetSetting};
use crate::classify::reinterpret;
use crate::models::{ClockTime, ExpenseRecord, ReinterpretedExpense, YearMonth};
use crate::narrative::Feedback;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample() -> Vec<ReinterpretedExpense> {
    reinterpret(vec![
        ExpenseRecord::new(d(2024, 5, 1), ClockTime::new(12, 30), "Food", "Delivery", 15_000)
            .with_memo("late night"),
        ExpenseRecord::new(d(2024, 5, 1), ClockTime::new(9, 0), "Housing/Comm", "Rent", 500_000),
        ExpenseRecord::new(d(2024, 4, 10), None, "Food", "Groceries", 40_000),
    ])
}

// ── Dashboard ─────────────────────────────────────────────────

#[test]
fn test_dashboard_calm() {
    let summary = waste_summary(&sample(), d(2024, 4, 21));
    let text = render_dashboard(&summary);
    assert!(text.contains("Since 2024-04-21"));
    assert!(text.contains("₩515,000"));
    assert!(text.contains("₩15,000"));
    assert!(text.contains("2.9%"));
    assert!(text.contains("Calm (#D4EDDA)"));
    assert!(text.contains("A very healthy spending life"));
}

#[test]
fn test_dashboard_angry_names_culprits() {
    let records = reinterpret(vec![
        ExpenseRecord::new(d(2024, 5, 2), None, "Food", "Delivery", 90_000),
        ExpenseRecord::new(d(2024, 5, 3), None, "Food", "Groceries", 10_000),
    ]);
    let text = render_dashboard(&waste_summary(&records, d(2024, 4, 21)));
    assert!(text.contains("Angry"));
    assert!(text.contains("spend on Delivery?"));
}

// ── Calendar ──────────────────────────────────────────────────

#[test]
fn test_calendar_lists_days_and_selection() {
    let mut session = Session::new(d(2024, 5, 21));
    session.select_day(d(2024, 5, 1));
    let calendar = daily_breakdown(&sample(), session.month);
    let text = render_calendar(&calendar, &session);
    assert!(text.contains("2024-04   2024-05   2024-06"));
    assert!(text.contains("> 2024-05-01 Wed"));
    assert!(text.contains("(2 items)"));
    assert!(text.contains("Spending days    1"));
    // Day detail in time order.
    let rent = text.find("Rent").unwrap();
    let delivery = text.find("Delivery").unwrap();
    assert!(rent < delivery);
    assert!(text.contains("late night"));
}

#[test]
fn test_calendar_empty_month() {
    let session = Session::new(d(2024, 7, 1));
    let calendar = daily_breakdown(&sample(), session.month);
    assert!(render_calendar(&calendar, &session).contains("No spending recorded this month."));
}

#[test]
fn test_day_without_records() {
    let text = render_day(d(2024, 5, 9), None, None);
    assert_eq!(text, "No spending recorded on 2024-05-09.\n");
}

#[test]
fn test_day_missing_time_and_memo_show_dash() {
    let calendar = daily_breakdown(&sample(), YearMonth::new(2024, 4).unwrap());
    let text = render_day(d(2024, 4, 10), calendar.day(d(2024, 4, 10)), None);
    let line = text.lines().find(|l| l.contains("Groceries")).unwrap();
    assert!(line.starts_with("-     "));
    assert!(line.trim_end().ends_with('-'));
}

#[test]
fn test_day_flags_edited_record() {
    let mut records = sample();
    records[0].record.id = Some(1);
    records[1].record.id = Some(2);
    let calendar = daily_breakdown(&records, YearMonth::new(2024, 5).unwrap());
    let text = render_day(d(2024, 5, 1), calendar.day(d(2024, 5, 1)), Some(2));
    let rent = text.lines().find(|l| l.contains("Rent")).unwrap();
    let delivery = text.lines().find(|l| l.contains("Delivery")).unwrap();
    assert!(rent.ends_with("(edited)"));
    assert!(!delivery.contains("(edited)"));
}

// ── Report ────────────────────────────────────────────────────

#[test]
fn test_report_sections() {
    let records = sample();
    let month = YearMonth::new(2024, 5).unwrap();
    let text = render_report(
        &[month, YearMonth::new(2024, 4).unwrap()],
        &month_summary(&records, month),
    );
    assert!(text.contains("Months: 2024-05, 2024-04"));
    assert!(text.contains("Report for 2024-05"));
    assert!(text.contains("(2.9% to cut)"));
    assert!(text.contains("Top 2 categories"));
    assert!(text.contains("Housing/Comm"));
    assert!(!text.contains("Groceries"));
}

#[test]
fn test_records_empty() {
    assert_eq!(render_records(&[]), "  (no records)\n");
}

#[test]
fn test_period_totals() {
    let text = render_period_totals(&[("2024-04".into(), 40_000), ("2024-05".into(), 515_000)]);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("  2024-04           ₩40,000  #"));
    assert!(lines[1].ends_with(&"#".repeat(24)));
    assert_eq!(render_period_totals(&[]), "  (no records)\n");
}

// ── Patterns ──────────────────────────────────────────────────

#[test]
fn test_patterns_insufficient_data() {
    let records = reinterpret(vec![ExpenseRecord::new(
        d(2024, 5, 1),
        ClockTime::new(21, 0),
        "Food",
        "Delivery",
        10_000,
    )]);
    let text = render_patterns(&pattern_analysis(&records, &DEFAULT_PATTERN_TAGS));
    assert!(text.contains("Insufficient data"));
    assert!(text.contains("two months"));
    assert!(text.contains("Wed"));
    assert!(text.contains("1. 2024-05-01  Food / Delivery  ₩10,000"));
}

#[test]
fn test_patterns_empty_filter_warns() {
    let text = render_patterns(&pattern_analysis(&sample(), &[crate::models::Tag::Growth]));
    assert!(text.contains("no spending matches the selected tags"));

    let text = render_patterns(&pattern_analysis(&sample(), &[]));
    assert!(text.contains("pick at least one tag"));
}

#[test]
fn test_heatmap_rows() {
    let mut grid = [[0_i64; 24]; 7];
    grid[0][0] = 100;
    grid[6][23] = 25;
    let text = render_heatmap(&grid);
    assert!(text.contains("  Mon █......................."));
    assert!(text.contains("  Sun .......................░"));
}

// ── Forecast ──────────────────────────────────────────────────

#[test]
fn test_forecast_with_feedback() {
    let forecast = forecast_summary(&sample());
    let sim = forecast.simulate_cut(10, 3);
    let feedback = Feedback::Text("Stop it.".to_string());
    let text = render_forecast(&forecast, 3, &sim, Some(&feedback));
    assert!(text.contains("Cut 10% and succeed:"));
    assert!(text.contains("Instructor's assessment"));
    assert!(text.contains("Stop it."));
}

#[test]
fn test_forecast_feedback_unavailable() {
    let forecast = forecast_summary(&[]);
    let sim = forecast.simulate_cut(0, 1);
    let feedback = Feedback::Unavailable("no key".to_string());
    let text = render_forecast(&forecast, 1, &sim, Some(&feedback));
    assert!(text.contains("₩0"));
    assert!(text.contains("Feedback unavailable: no key"));

    let text = render_forecast(&forecast, 1, &sim, None);
    assert!(!text.contains("Feedback"));
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_budget_unset_hides_figures() {
    let outlook = BudgetOutlook::compute(BudgetSetting::default(), &[], d(2024, 5, 21));
    let text = render_budget(&outlook);
    assert!(text.contains("Unset"));
    assert!(!text.contains("Daily allowance"));
    assert!(text.contains("budget set"));
}

#[test]
fn test_budget_active() {
    let records = vec![ExpenseRecord::new(d(2024, 5, 2), None, "Food", "Delivery", 40_000)];
    let setting = BudgetSetting::new(100_000).unwrap();
    let text = render_budget(&BudgetOutlook::compute(setting, &records, d(2024, 5, 21)));
    assert!(text.contains("Active (Concerned)"));
    assert!(text.contains("Used this month  ₩40,000  (40.0%)"));
    assert!(text.contains("Days remaining   10"));
}

// ── Categories ────────────────────────────────────────────────

#[test]
fn test_categories_table() {
    let text = render_categories();
    assert!(text.contains("Delivery"));
    assert!(text.contains("→ Laziness"));
    assert!(text.contains("Neutral   everything else"));
}

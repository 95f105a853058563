use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use super::stats::{
    daily_average, distinct_days, largest, linear_trend, pearson, percent_of, sum_by_tag,
    sum_by_weekday_hour, tag_sum, top_n, total, waste_sum, Heatmap,
};
use crate::models::{ReinterpretedExpense, Tag, YearMonth};

pub(crate) const TOP_MAJORS: usize = 5;
pub(crate) const TOP_WASTE_MINORS: usize = 2;
pub(crate) const LARGEST_EXPENSES: usize = 3;

// ── Monthly aggregates ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthlyAggregate {
    pub(crate) month: YearMonth,
    pub(crate) total: i64,
    pub(crate) by_tag: BTreeMap<Tag, i64>,
    pub(crate) waste: i64,
    pub(crate) days: usize,
}

/// One entry per month that has records, ascending.
pub(crate) fn monthly_aggregates(records: &[ReinterpretedExpense]) -> Vec<MonthlyAggregate> {
    let mut grouped: BTreeMap<YearMonth, Vec<ReinterpretedExpense>> = BTreeMap::new();
    for r in records {
        grouped
            .entry(YearMonth::of(r.record.date))
            .or_default()
            .push(r.clone());
    }
    grouped
        .into_iter()
        .map(|(month, rows)| {
            let by_tag = sum_by_tag(&rows);
            MonthlyAggregate {
                month,
                total: total(&rows),
                waste: waste_sum(&by_tag),
                by_tag,
                days: distinct_days(&rows),
            }
        })
        .collect()
}

/// Months with at least one record, newest first.
pub(crate) fn available_months(records: &[ReinterpretedExpense]) -> Vec<YearMonth> {
    records
        .iter()
        .map(|r| YearMonth::of(r.record.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

// ── Month summary ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthSummary {
    pub(crate) month: YearMonth,
    pub(crate) total: i64,
    pub(crate) by_tag: BTreeMap<Tag, i64>,
    pub(crate) waste: i64,
    pub(crate) breath: i64,
    pub(crate) growth: i64,
    pub(crate) waste_pct: f64,
    pub(crate) breath_pct: f64,
    pub(crate) growth_pct: f64,
    pub(crate) days: usize,
    pub(crate) daily_average: f64,
    pub(crate) top_majors: Vec<(String, i64)>,
    /// The month's records, newest date first.
    pub(crate) details: Vec<ReinterpretedExpense>,
}

pub(crate) fn month_summary(records: &[ReinterpretedExpense], month: YearMonth) -> MonthSummary {
    let mut rows: Vec<ReinterpretedExpense> = records
        .iter()
        .filter(|r| month.contains(r.record.date))
        .cloned()
        .collect();

    let by_tag = sum_by_tag(&rows);
    let total = total(&rows);
    let waste = waste_sum(&by_tag);
    let breath = tag_sum(&by_tag, Tag::Breath);
    let growth = tag_sum(&by_tag, Tag::Growth);
    let top_majors = top_n(&rows, |r| r.record.major.clone(), TOP_MAJORS);
    let days = distinct_days(&rows);
    let daily_average = daily_average(&rows);

    rows.sort_by(|a, b| b.record.date.cmp(&a.record.date));

    MonthSummary {
        month,
        total,
        waste_pct: percent_of(waste, total),
        breath_pct: percent_of(breath, total),
        growth_pct: percent_of(growth, total),
        by_tag,
        waste,
        breath,
        growth,
        days,
        daily_average,
        top_majors,
        details: rows,
    }
}

// ── Waste window (dashboard) ──────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WasteSummary {
    pub(crate) since: NaiveDate,
    pub(crate) total: i64,
    pub(crate) waste: i64,
    pub(crate) waste_pct: f64,
    /// Minor categories carrying the most waste, at most two.
    pub(crate) top_waste_minors: Vec<String>,
}

/// Waste share of every record dated on or after `since`.
pub(crate) fn waste_summary(records: &[ReinterpretedExpense], since: NaiveDate) -> WasteSummary {
    let window: Vec<ReinterpretedExpense> = records
        .iter()
        .filter(|r| r.record.date >= since)
        .cloned()
        .collect();
    let wasted: Vec<ReinterpretedExpense> =
        window.iter().filter(|r| r.tag.is_waste()).cloned().collect();

    let waste = total(&wasted);
    let total = total(&window);
    WasteSummary {
        since,
        total,
        waste,
        waste_pct: percent_of(waste, total),
        top_waste_minors: top_n(&wasted, |r| r.record.minor.clone(), TOP_WASTE_MINORS)
            .into_iter()
            .map(|(minor, _)| minor)
            .collect(),
    }
}

// ── Calendar ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DayStats {
    pub(crate) date: NaiveDate,
    pub(crate) total: i64,
    /// In time order.
    pub(crate) items: Vec<ReinterpretedExpense>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthCalendar {
    pub(crate) month: YearMonth,
    pub(crate) days: Vec<DayStats>,
    pub(crate) total: i64,
    pub(crate) daily_average: f64,
}

impl MonthCalendar {
    pub(crate) fn spending_days(&self) -> usize {
        self.days.len()
    }

    pub(crate) fn day(&self, date: NaiveDate) -> Option<&DayStats> {
        self.days.iter().find(|d| d.date == date)
    }
}

pub(crate) fn daily_breakdown(records: &[ReinterpretedExpense], month: YearMonth) -> MonthCalendar {
    let mut grouped: BTreeMap<NaiveDate, Vec<ReinterpretedExpense>> = BTreeMap::new();
    for r in records.iter().filter(|r| month.contains(r.record.date)) {
        grouped.entry(r.record.date).or_default().push(r.clone());
    }

    let days: Vec<DayStats> = grouped
        .into_iter()
        .map(|(date, mut items)| {
            items.sort_by_key(|r| r.record.clock());
            DayStats {
                date,
                total: total(&items),
                items,
            }
        })
        .collect();

    let month_total: i64 = days.iter().map(|d| d.total).sum();
    let daily_average = if days.is_empty() {
        0.0
    } else {
        month_total as f64 / days.len() as f64
    };
    MonthCalendar {
        month,
        days,
        total: month_total,
        daily_average,
    }
}

// ── Pattern analysis ──────────────────────────────────────────

/// The tags the heatmap filter starts with.
pub(crate) const DEFAULT_PATTERN_TAGS: [Tag; 4] =
    [Tag::Impulse, Tag::Laziness, Tag::Breath, Tag::Growth];

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PatternAnalysis {
    pub(crate) monthly: Vec<MonthlyAggregate>,
    /// Waste against total, month by month.
    pub(crate) correlation: Option<f64>,
    /// `(slope, intercept)` of total as a function of waste.
    pub(crate) trend: Option<(f64, f64)>,
    pub(crate) tags: Vec<Tag>,
    pub(crate) heatmap: Heatmap,
    pub(crate) largest: Vec<ReinterpretedExpense>,
    /// Records left after the tag filter.
    pub(crate) filtered: usize,
}

pub(crate) fn pattern_analysis(records: &[ReinterpretedExpense], tags: &[Tag]) -> PatternAnalysis {
    let monthly = monthly_aggregates(records);
    let waste: Vec<f64> = monthly.iter().map(|m| m.waste as f64).collect();
    let totals: Vec<f64> = monthly.iter().map(|m| m.total as f64).collect();

    let filtered: Vec<ReinterpretedExpense> = records
        .iter()
        .filter(|r| tags.contains(&r.tag))
        .cloned()
        .collect();

    PatternAnalysis {
        correlation: pearson(&waste, &totals),
        trend: linear_trend(&waste, &totals),
        monthly,
        tags: tags.to_vec(),
        heatmap: sum_by_weekday_hour(&filtered),
        largest: largest(&filtered, LARGEST_EXPENSES),
        filtered: filtered.len(),
    }
}

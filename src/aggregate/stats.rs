use chrono::Datelike;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{ReinterpretedExpense, Tag};

pub(crate) type Heatmap = [[i64; 24]; 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Period {
    Day,
    Month,
}

pub(crate) fn total(records: &[ReinterpretedExpense]) -> i64 {
    records.iter().map(ReinterpretedExpense::cost).sum()
}

/// Tags with no records have no entry.
pub(crate) fn sum_by_tag(records: &[ReinterpretedExpense]) -> BTreeMap<Tag, i64> {
    let mut sums = BTreeMap::new();
    for r in records {
        *sums.entry(r.tag).or_insert(0) += r.cost();
    }
    sums
}

pub(crate) fn tag_sum(sums: &BTreeMap<Tag, i64>, tag: Tag) -> i64 {
    sums.get(&tag).copied().unwrap_or(0)
}

/// Impulse plus Laziness.
pub(crate) fn waste_sum(sums: &BTreeMap<Tag, i64>) -> i64 {
    sums.iter()
        .filter(|(tag, _)| tag.is_waste())
        .map(|(_, amount)| amount)
        .sum()
}

/// Totals keyed "YYYY-MM-DD" or "YYYY-MM", ascending.
pub(crate) fn sum_by_period(records: &[ReinterpretedExpense], period: Period) -> Vec<(String, i64)> {
    let mut sums: BTreeMap<String, i64> = BTreeMap::new();
    for r in records {
        let key = match period {
            Period::Day => r.record.day_key(),
            Period::Month => r.record.month_key(),
        };
        *sums.entry(key).or_insert(0) += r.cost();
    }
    sums.into_iter().collect()
}

/// Largest sums first. Equal sums keep the order their keys were first seen in.
pub(crate) fn top_n<K, F>(records: &[ReinterpretedExpense], key: F, n: usize) -> Vec<(K, i64)>
where
    K: PartialEq,
    F: Fn(&ReinterpretedExpense) -> K,
{
    let mut sums: Vec<(K, i64)> = Vec::new();
    for r in records {
        let k = key(r);
        match sums.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, sum)) => *sum += r.cost(),
            None => sums.push((k, r.cost())),
        }
    }
    // sort_by is stable, so first-seen order survives among ties
    sums.sort_by(|a, b| b.1.cmp(&a.1));
    sums.truncate(n);
    sums
}

/// The `n` most expensive single records; ties keep input order.
pub(crate) fn largest(records: &[ReinterpretedExpense], n: usize) -> Vec<ReinterpretedExpense> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.cost().cmp(&a.cost()));
    sorted.truncate(n);
    sorted
}

pub(crate) fn distinct_days(records: &[ReinterpretedExpense]) -> usize {
    records
        .iter()
        .map(|r| r.record.date)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Total divided by the number of distinct spending days; 0 with no days.
pub(crate) fn daily_average(records: &[ReinterpretedExpense]) -> f64 {
    match distinct_days(records) {
        0 => 0.0,
        days => total(records) as f64 / days as f64,
    }
}

pub(crate) fn percent_of(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson correlation. `None` when it is undefined: fewer than two points,
/// mismatched lengths, or a constant series.
pub(crate) fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return None;
    }
    let (mx, my) = (mean(xs), mean(ys));
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Least-squares line `y = slope * x + intercept`, as `(slope, intercept)`.
pub(crate) fn linear_trend(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return None;
    }
    let (mx, my) = (mean(xs), mean(ys));
    let mut cov = 0.0;
    let mut var_x = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mx) * (y - my);
        var_x += (x - mx) * (x - mx);
    }
    if var_x == 0.0 {
        return None;
    }
    let slope = cov / var_x;
    Some((slope, my - slope * mx))
}

/// Row 0 is Monday, column is the hour. Always 7 x 24, zeros included.
pub(crate) fn sum_by_weekday_hour(records: &[ReinterpretedExpense]) -> Heatmap {
    let mut grid = [[0i64; 24]; 7];
    for r in records {
        let weekday = r.record.date.weekday().num_days_from_monday() as usize;
        let hour = r.record.clock().hour as usize;
        grid[weekday][hour % 24] += r.cost();
    }
    grid
}

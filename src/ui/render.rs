//! Plain-text views. Every renderer returns the full text so callers decide where it goes.

use chrono::{Datelike, NaiveDate};

use super::session::Session;
use super::util::{bar, format_delta, format_pct, format_won, format_won_f, pad, shade, truncate};
use crate::aggregate::{
    CutSimulation, DayStats, ForecastSummary, MonthCalendar, MonthSummary, PatternAnalysis,
    WasteSummary,
};
use crate::budget::BudgetOutlook;
use crate::classify::{classify, taxonomy};
use crate::models::{ReinterpretedExpense, Tag, YearMonth};
use crate::narrative::Feedback;
use crate::status::{correlation_tier, waste_message, waste_tier, BudgetState};

const BAR_WIDTH: usize = 24;
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn heading(out: &mut String, title: &str) {
    out.push_str(&format!("{title}\n"));
    out.push_str(&format!("{}\n", "─".repeat(title.chars().count().max(20))));
}

fn time_or_dash(r: &ReinterpretedExpense) -> String {
    r.record
        .time
        .map_or_else(|| "-".to_string(), |t| t.to_string())
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() {
        "-"
    } else {
        s
    }
}

// ── Dashboard ─────────────────────────────────────────────────

pub(crate) fn render_dashboard(summary: &WasteSummary) -> String {
    let tier = waste_tier(summary.waste_pct);
    let mut out = String::new();
    heading(&mut out, &format!("Since {}", summary.since));
    out.push_str(&format!("Total spending   {}\n", format_won(summary.total)));
    out.push_str(&format!("Waste spending   {}\n", format_won(summary.waste)));
    out.push_str(&format!("Waste rate       {}\n", format_pct(summary.waste_pct)));
    out.push('\n');
    out.push_str(&format!("Status           {tier} ({})\n", tier.accent()));
    out.push_str(&format!("Instructor: {}\n", waste_message(tier, &summary.top_waste_minors)));
    out
}

// ── Calendar ──────────────────────────────────────────────────

pub(crate) fn render_calendar(calendar: &MonthCalendar, session: &Session) -> String {
    let mut out = String::new();
    heading(
        &mut out,
        &format!("◀ {}   {}   {} ▶", calendar.month.prev(), calendar.month, calendar.month.next()),
    );
    out.push_str(&format!("Month total      {}\n", format_won(calendar.total)));
    out.push_str(&format!("Spending days    {}\n", calendar.spending_days()));
    out.push_str(&format!("Daily average    {}\n", format_won_f(calendar.daily_average)));
    out.push('\n');

    if calendar.days.is_empty() {
        out.push_str("No spending recorded this month.\n");
    }
    for day in &calendar.days {
        let marker = if session.selected == Some(day.date) { '>' } else { ' ' };
        let weekday = WEEKDAYS[day.date.weekday().num_days_from_monday() as usize];
        out.push_str(&format!(
            "{marker} {} {weekday}  {:>14}  ({} items)\n",
            day.date,
            format_won(day.total),
            day.items.len()
        ));
    }

    if let Some(date) = session.selected {
        out.push('\n');
        out.push_str(&render_day(date, calendar.day(date), session.editing));
    }
    out
}

/// The record whose id is `edited` gets flagged at the end of its line.
pub(crate) fn render_day(date: NaiveDate, day: Option<&DayStats>, edited: Option<i64>) -> String {
    let mut out = String::new();
    let Some(day) = day else {
        out.push_str(&format!("No spending recorded on {date}.\n"));
        return out;
    };
    heading(&mut out, &format!("{date}: {}", format_won(day.total)));
    out.push_str(&format!(
        "{} {} {} {:>12}  Memo\n",
        pad("Time", 6),
        pad("Category", 16),
        pad("Reason", 22),
        "Cost"
    ));
    for item in &day.items {
        let flag = if edited.is_some() && item.record.id == edited {
            "  (edited)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{} {} {} {:>12}  {}{flag}\n",
            pad(&time_or_dash(item), 6),
            pad(or_dash(&item.record.major), 16),
            pad(or_dash(&item.record.minor), 22),
            format_won(item.cost()),
            or_dash(&item.record.memo)
        ));
    }
    out
}

// ── Report ────────────────────────────────────────────────────

pub(crate) fn render_report(available: &[YearMonth], summary: &MonthSummary) -> String {
    let mut out = String::new();
    let months: Vec<String> = available.iter().map(ToString::to_string).collect();
    out.push_str(&format!("Months: {}\n", months.join(", ")));
    out.push('\n');
    heading(&mut out, &format!("Report for {}", summary.month));
    out.push_str(&format!("Total            {}\n", format_won(summary.total)));
    out.push_str(&format!(
        "Waste            {}  ({} to cut)\n",
        format_won(summary.waste),
        format_pct(summary.waste_pct)
    ));
    out.push_str(&format!(
        "Breath           {}  ({})\n",
        format_won(summary.breath),
        format_pct(summary.breath_pct)
    ));
    out.push_str(&format!(
        "Growth           {}  ({})\n",
        format_won(summary.growth),
        format_pct(summary.growth_pct)
    ));
    out.push('\n');

    out.push_str("By tag\n");
    for (tag, amount) in &summary.by_tag {
        out.push_str(&format!(
            "  {} {:>14}  {}\n",
            pad(tag.as_str(), 9),
            format_won(*amount),
            format_pct(crate::aggregate::percent_of(*amount, summary.total))
        ));
    }
    out.push('\n');

    out.push_str(&format!("Top {} categories\n", summary.top_majors.len()));
    let max = summary.top_majors.first().map_or(0, |(_, v)| *v);
    for (major, amount) in &summary.top_majors {
        out.push_str(&format!(
            "  {} {:>14}  {}\n",
            pad(major, 16),
            format_won(*amount),
            bar(*amount, max, BAR_WIDTH)
        ));
    }
    out.push('\n');

    out.push_str("Details\n");
    out.push_str(&render_records(&summary.details));
    out
}

/// One line per record: id, date, time, pair, cost, tag, memo.
pub(crate) fn render_records(records: &[ReinterpretedExpense]) -> String {
    let mut out = String::new();
    if records.is_empty() {
        out.push_str("  (no records)\n");
        return out;
    }
    for r in records {
        let id = r.record.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        out.push_str(&format!(
            "  {:>5}  {} {}  {} {} {:>12}  {} {}\n",
            id,
            r.record.date,
            pad(&time_or_dash(r), 5),
            pad(&r.record.major, 16),
            pad(&r.record.minor, 22),
            format_won(r.cost()),
            pad(r.tag.as_str(), 8),
            truncate(or_dash(&r.record.memo), 30)
        ));
    }
    out
}

pub(crate) fn render_period_totals(totals: &[(String, i64)]) -> String {
    let mut out = String::new();
    if totals.is_empty() {
        out.push_str("  (no records)\n");
        return out;
    }
    let max = totals.iter().map(|(_, v)| *v).max().unwrap_or(0);
    for (period, amount) in totals {
        out.push_str(&format!(
            "  {} {:>14}  {}\n",
            pad(period, 10),
            format_won(*amount),
            bar(*amount, max, BAR_WIDTH)
        ));
    }
    out
}

// ── Patterns ──────────────────────────────────────────────────

pub(crate) fn render_patterns(analysis: &PatternAnalysis) -> String {
    let mut out = String::new();
    heading(&mut out, "Waste vs total, by month");
    for m in &analysis.monthly {
        out.push_str(&format!(
            "  {}  waste {:>14}  total {:>14}\n",
            m.month,
            format_won(m.waste),
            format_won(m.total)
        ));
    }
    let tier = correlation_tier(analysis.correlation);
    out.push('\n');
    out.push_str(&format!("Correlation: {tier} ({})\n", tier.accent()));
    out.push_str(&format!("Instructor: {}\n", tier.message(analysis.correlation, analysis.monthly.len())));
    if let Some((slope, intercept)) = analysis.trend {
        out.push_str(&format!(
            "Trend line: total ≈ {slope:.2} × waste + {}\n",
            format_won_f(intercept)
        ));
    }
    out.push('\n');

    let tags: Vec<&str> = analysis.tags.iter().map(Tag::as_str).collect();
    if tags.is_empty() {
        out.push_str("Warning: pick at least one tag to analyse.\n");
        return out;
    }
    heading(&mut out, &format!("When the money goes ({})", tags.join(", ")));
    if analysis.filtered == 0 {
        out.push_str("Warning: no spending matches the selected tags.\n");
        return out;
    }
    out.push_str(&render_heatmap(&analysis.heatmap));
    out.push('\n');
    out.push_str(&format!("Top {} single expenses\n", analysis.largest.len()));
    for (rank, r) in analysis.largest.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {}  {} / {}  {}  {}\n",
            rank + 1,
            r.record.date,
            r.record.major,
            r.record.minor,
            format_won(r.cost()),
            or_dash(&r.record.memo)
        ));
    }
    out
}

pub(crate) fn render_heatmap(grid: &crate::aggregate::Heatmap) -> String {
    let max = grid.iter().flatten().copied().max().unwrap_or(0);
    let mut out = String::new();
    let hours: String = (0..24).map(|h| if h % 6 == 0 { '|' } else { ' ' }).collect();
    out.push_str(&format!("      {hours}\n"));
    for (weekday, row) in WEEKDAYS.iter().zip(grid) {
        let cells: String = row.iter().map(|v| shade(*v, max)).collect();
        out.push_str(&format!("  {weekday} {cells}\n"));
    }
    out.push_str(&format!("  hours 0-23 left to right; darker is more, peak {}\n", format_won(max)));
    out
}

// ── Forecast ──────────────────────────────────────────────────

pub(crate) fn render_forecast(
    forecast: &ForecastSummary,
    months: u32,
    simulation: &CutSimulation,
    feedback: Option<&Feedback>,
) -> String {
    let mut out = String::new();
    heading(&mut out, "Current trend");
    let label = format!("{}-month average", forecast.recent_months());
    out.push_str(&format!("{} {}\n", pad(&label, 16), format_won_f(forecast.average)));
    out.push_str(&format!(
        "Last month       {}  ({} vs average)\n",
        format_won(forecast.last_month),
        format_delta(forecast.trend)
    ));
    out.push('\n');
    out.push_str("Top categories\n");
    for (major, amount) in &forecast.top_majors {
        out.push_str(&format!("  {} {:>14}\n", pad(major, 16), format_won(*amount)));
    }
    out.push('\n');

    heading(&mut out, "If nothing changes");
    out.push_str(&format!(
        "Keep these habits and you spend about {} in {months} months.\n",
        format_won_f(forecast.projection(months))
    ));
    out.push('\n');

    heading(&mut out, "Control simulator");
    out.push_str(&format!("Cut {}% and succeed:\n", simulation.cut_percent));
    out.push_str(&format!("  Monthly spending   {}\n", format_won_f(simulation.reduced_monthly)));
    out.push_str(&format!(
        "  Saved in {} months {}\n",
        simulation.months,
        format_won_f(simulation.saved)
    ));
    out.push_str("Promises mean nothing. Prove it with numbers.\n");

    match feedback {
        Some(Feedback::Text(text)) => {
            out.push('\n');
            heading(&mut out, "Instructor's assessment");
            out.push_str(&format!("{text}\n"));
        }
        Some(Feedback::Unavailable(reason)) => {
            out.push('\n');
            out.push_str(&format!("Feedback unavailable: {reason}\n"));
        }
        None => {}
    }
    out
}

// ── Budget ────────────────────────────────────────────────────

pub(crate) fn render_budget(outlook: &BudgetOutlook) -> String {
    let mut out = String::new();
    heading(&mut out, "Monthly budget");
    out.push_str(&format!("State            {} ({})\n", outlook.state, outlook.state.accent()));
    if outlook.state != BudgetState::Unset {
        out.push_str(&format!("Budget           {}\n", format_won(outlook.budget)));
        out.push_str(&format!(
            "Used this month  {}  ({})\n",
            format_won(outlook.used),
            format_pct(outlook.usage_pct)
        ));
        out.push_str(&format!("Days remaining   {}\n", outlook.remaining_days));
        out.push_str(&format!("Daily allowance  {}\n", format_won(outlook.daily_allowance)));
    }
    out.push('\n');
    out.push_str(&format!("Instructor: {}\n", outlook.state.message()));
    out
}

// ── Categories ────────────────────────────────────────────────

fn tag_meaning(tag: Tag) -> &'static str {
    match tag {
        Tag::Laziness => "the price of giving in to convenience (waste)",
        Tag::Impulse => "unplanned emotional spending (waste)",
        Tag::Breath => "the fixed cost of staying alive (essential)",
        Tag::Growth => "an investment in the future (growth)",
        Tag::Neutral => "everything else",
    }
}

pub(crate) fn render_categories() -> String {
    let mut out = String::new();
    heading(&mut out, "Categories");
    for (major, minors) in taxonomy() {
        out.push_str(&format!("{major}\n"));
        for minor in minors {
            out.push_str(&format!("  {} → {}\n", pad(minor, 22), classify(major, minor)));
        }
    }
    out.push('\n');
    heading(&mut out, "Tags");
    for tag in Tag::all() {
        out.push_str(&format!("  {} {}\n", pad(tag.as_str(), 9), tag_meaning(*tag)));
    }
    out
}

//! Rollups over reinterpreted expenses. Everything here is pure and recomputed per command.

mod forecast;
mod report;
mod stats;

pub(crate) use forecast::{
    forecast_summary, CutSimulation, ForecastSummary, MAX_CUT_PERCENT, MAX_PROJECTION_MONTHS,
};
pub(crate) use report::{
    available_months, daily_breakdown, month_summary, pattern_analysis, waste_summary, DayStats,
    MonthCalendar, MonthSummary, PatternAnalysis, WasteSummary, DEFAULT_PATTERN_TAGS,
};
pub(crate) use stats::{percent_of, sum_by_period, Heatmap, Period};

use super::report::TOP_MAJORS;
use super::stats::top_n;
use crate::models::{ReinterpretedExpense, YearMonth};

/// How many of the latest months the average spans.
pub(crate) const RECENT_MONTHS: usize = 3;
pub(crate) const MAX_PROJECTION_MONTHS: u32 = 12;
pub(crate) const MAX_CUT_PERCENT: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ForecastSummary {
    /// Monthly totals, ascending. Months without records are absent.
    pub(crate) monthly: Vec<(YearMonth, i64)>,
    pub(crate) average: f64,
    pub(crate) last_month: i64,
    /// Last month minus the recent average; positive means spending is rising.
    pub(crate) trend: f64,
    pub(crate) top_majors: Vec<(String, i64)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CutSimulation {
    pub(crate) cut_percent: u32,
    pub(crate) months: u32,
    pub(crate) reduced_monthly: f64,
    pub(crate) saved: f64,
}

pub(crate) fn forecast_summary(records: &[ReinterpretedExpense]) -> ForecastSummary {
    let monthly: Vec<(YearMonth, i64)> = super::report::monthly_aggregates(records)
        .into_iter()
        .map(|m| (m.month, m.total))
        .collect();

    let recent = &monthly[monthly.len().saturating_sub(RECENT_MONTHS)..];
    let (average, last_month) = match recent.last() {
        Some(&(_, last)) => {
            let sum: i64 = recent.iter().map(|(_, total)| total).sum();
            (sum as f64 / recent.len() as f64, last)
        }
        None => (0.0, 0),
    };

    ForecastSummary {
        trend: last_month as f64 - average,
        top_majors: top_n(records, |r| r.record.major.clone(), TOP_MAJORS),
        monthly,
        average,
        last_month,
    }
}

impl ForecastSummary {
    /// Months the average actually covers, at most [`RECENT_MONTHS`].
    pub(crate) fn recent_months(&self) -> usize {
        self.monthly.len().min(RECENT_MONTHS)
    }

    /// Total spend over `months` if the recent average holds. Months clamp to 1..=12.
    pub(crate) fn projection(&self, months: u32) -> f64 {
        self.average * f64::from(clamp_months(months))
    }

    /// Cuts clamp to 0..=50 percent.
    pub(crate) fn simulate_cut(&self, cut_percent: u32, months: u32) -> CutSimulation {
        let cut_percent = cut_percent.min(MAX_CUT_PERCENT);
        let months = clamp_months(months);
        let reduced_monthly = self.average * (1.0 - f64::from(cut_percent) / 100.0);
        CutSimulation {
            cut_percent,
            months,
            reduced_monthly,
            saved: (self.average - reduced_monthly) * f64::from(months),
        }
    }
}

fn clamp_months(months: u32) -> u32 {
    months.clamp(1, MAX_PROJECTION_MONTHS)
}

//! The single monthly budget and what is left of it.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::aggregate::percent_of;
use crate::errors::LedgerError;
use crate::models::{ExpenseRecord, YearMonth};
use crate::status::{budget_state, BudgetState};

pub(crate) const BUDGET_FILE: &str = "budget.json";

/// One value for every month; there is no per-month history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) struct BudgetSetting {
    #[serde(default)]
    pub(crate) budget: i64,
}

impl BudgetSetting {
    pub(crate) fn new(budget: i64) -> Result<Self, LedgerError> {
        if budget < 0 {
            return Err(LedgerError::NegativeBudget(budget));
        }
        Ok(Self { budget })
    }

    /// A missing, unreadable or negative file loads as unset.
    pub(crate) fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no budget file, budget unset");
                return Self::default();
            }
        };
        match serde_json::from_str::<Self>(&contents) {
            Ok(setting) if setting.budget >= 0 => setting,
            Ok(setting) => {
                tracing::warn!(budget = setting.budget, "negative budget in file, treating as unset");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable budget file, treating as unset");
                Self::default()
            }
        }
    }

    /// Overwrites whatever is there. Last write wins.
    pub(crate) fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize budget")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write budget file: {}", path.display()))?;
        tracing::info!(budget = self.budget, path = %path.display(), "budget saved");
        Ok(())
    }
}

// ── Period arithmetic ─────────────────────────────────────────

pub(crate) fn days_in_month(now: NaiveDate) -> u32 {
    YearMonth::of(now).days()
}

/// Days after today in the current month. Zero on the last day.
pub(crate) fn remaining_days(now: NaiveDate) -> u32 {
    days_in_month(now) - now.day()
}

/// Money left divided evenly over the remaining days; negative once over budget,
/// zero when no days remain.
pub(crate) fn daily_allowance(budget: i64, used: i64, remaining: u32) -> i64 {
    if remaining == 0 {
        0
    } else {
        (budget - used) / i64::from(remaining)
    }
}

pub(crate) fn used_this_month(records: &[ExpenseRecord], now: NaiveDate) -> i64 {
    let month = YearMonth::of(now);
    records
        .iter()
        .filter(|r| month.contains(r.date))
        .map(|r| r.cost)
        .sum()
}

// ── Outlook ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BudgetOutlook {
    pub(crate) budget: i64,
    pub(crate) used: i64,
    pub(crate) usage_pct: f64,
    pub(crate) remaining_days: u32,
    pub(crate) daily_allowance: i64,
    pub(crate) state: BudgetState,
}

impl BudgetOutlook {
    pub(crate) fn compute(setting: BudgetSetting, records: &[ExpenseRecord], now: NaiveDate) -> Self {
        let used = used_this_month(records, now);
        let usage_pct = percent_of(used, setting.budget);
        let remaining = remaining_days(now);
        Self {
            budget: setting.budget,
            used,
            usage_pct,
            remaining_days: remaining,
            daily_allowance: daily_allowance(setting.budget, used, remaining),
            state: budget_state(setting.budget, usage_pct),
        }
    }
}

#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const MEMO_MAX_CHARS: usize = 50;

const SECONDS_PER_DAY: i64 = 86_400;

/// Accepts `H:MM`, `HH:MM:SS(.fff)` and the `N days HH:MM:SS` form durations print as.
static TIME_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:([0-9]+)\s+days?,?\s+)?([0-9]{1,3}):([0-9]{1,2})(?::([0-9]{1,2})(?:\.[0-9]+)?)?\s*$")
        .ok()
});

/// A wall-clock `HH:MM` as typed on the command line.
static CLOCK_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]{1,2}):([0-9]{2})\s*$").ok());

/// Time of day normalized to hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub(crate) struct ClockTime {
    pub(crate) hour: u32,
    pub(crate) minute: u32,
}

impl ClockTime {
    pub(crate) fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Elapsed time since midnight. Durations past one day wrap around.
    pub(crate) fn from_seconds(seconds: i64) -> Self {
        let seconds = seconds.rem_euclid(SECONDS_PER_DAY);
        Self {
            hour: (seconds / 3600) as u32,
            minute: ((seconds % 3600) / 60) as u32,
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        let caps = TIME_PATTERN.as_ref()?.captures(s)?;
        let hours: i64 = caps.get(2)?.as_str().parse().ok()?;
        let minutes: i64 = caps.get(3)?.as_str().parse().ok()?;
        let seconds: i64 = match caps.get(4) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        if minutes >= 60 || seconds >= 60 {
            return None;
        }
        // Day counts only shift the duration by whole days, which wrap away.
        Some(Self::from_seconds(hours * 3600 + minutes * 60 + seconds))
    }

    /// Strict `HH:MM`. Hours past 23 are an error here, not a wrap.
    pub(crate) fn parse_clock(s: &str) -> Option<Self> {
        let caps = CLOCK_PATTERN.as_ref()?.captures(s)?;
        let hour = caps.get(1)?.as_str().parse().ok()?;
        let minute = caps.get(2)?.as_str().parse().ok()?;
        Self::new(hour, minute)
    }

    /// Canonical form written to the store.
    pub(crate) fn to_sql(self) -> String {
        format!("{:02}:{:02}:00", self.hour, self.minute)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_clock(s).ok_or_else(|| format!("invalid time '{s}', expected HH:MM (00:00 to 23:59)"))
    }
}

/// Which expense table a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub(crate) enum Source {
    /// Expenses entered by hand
    Manual,
    /// Expenses from the card statement
    Card,
}

impl Source {
    pub(crate) fn table(&self) -> &'static str {
        match self {
            Self::Manual => "sample",
            Self::Card => "card",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Card => write!(f, "card"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseRecord {
    pub(crate) id: Option<i64>,
    pub(crate) date: NaiveDate,
    /// `None` when the store had no usable time; treated as 00:00.
    pub(crate) time: Option<ClockTime>,
    pub(crate) major: String,
    pub(crate) minor: String,
    pub(crate) cost: i64,
    pub(crate) memo: String,
}

impl ExpenseRecord {
    pub(crate) fn new(
        date: NaiveDate,
        time: Option<ClockTime>,
        major: impl Into<String>,
        minor: impl Into<String>,
        cost: i64,
    ) -> Self {
        Self {
            id: None,
            date,
            time,
            major: major.into(),
            minor: minor.into(),
            cost,
            memo: String::new(),
        }
    }

    pub(crate) fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub(crate) fn clock(&self) -> ClockTime {
        self.time.unwrap_or_default()
    }

    /// Format: "YYYY-MM-DD"
    pub(crate) fn day_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Format: "YYYY-MM"
    pub(crate) fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    pub(crate) fn key(&self) -> ExpenseKey {
        ExpenseKey {
            date: self.date,
            time: self.time,
            major: self.major.clone(),
            minor: self.minor.clone(),
            cost: Some(self.cost),
        }
    }
}

/// The natural key of a record. Several rows can share one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseKey {
    pub(crate) date: NaiveDate,
    pub(crate) time: Option<ClockTime>,
    pub(crate) major: String,
    pub(crate) minor: String,
    pub(crate) cost: Option<i64>,
}

impl std::fmt::Display for ExpenseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} {} {} / {}",
            self.date,
            self.time.unwrap_or_default(),
            self.major,
            self.minor
        )?;
        if let Some(cost) = self.cost {
            write!(f, " {cost}")?;
        }
        write!(f, ")")
    }
}

use chrono::{Datelike, Months, NaiveDate};

/// A calendar month, written "YYYY-MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub(crate) fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub(crate) fn of(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub(crate) fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// First day of the following month; the exclusive end of this one.
    pub(crate) fn end(&self) -> NaiveDate {
        self.first
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX)
    }

    pub(crate) fn next(&self) -> Self {
        Self::of(self.end())
    }

    pub(crate) fn prev(&self) -> Self {
        Self::of(
            self.first
                .checked_sub_months(Months::new(1))
                .unwrap_or(NaiveDate::MIN),
        )
    }

    pub(crate) fn shift(&self, delta: i32) -> Self {
        let mut month = *self;
        for _ in 0..delta.unsigned_abs() {
            month = if delta > 0 { month.next() } else { month.prev() };
        }
        month
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date < self.end()
    }

    pub(crate) fn days(&self) -> u32 {
        (self.end() - self.first).num_days() as u32
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

impl std::str::FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map(|first| Self { first })
            .map_err(|_| format!("invalid month '{s}', expected YYYY-MM"))
    }
}

use chrono::NaiveDate;

use crate::models::YearMonth;

/// What the calendar view is looking at, and which record (if any) is being edited.
/// Passed into every render; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Session {
    pub(crate) month: YearMonth,
    pub(crate) selected: Option<NaiveDate>,
    pub(crate) editing: Option<i64>,
}

impl Session {
    pub(crate) fn new(today: NaiveDate) -> Self {
        Self {
            month: YearMonth::of(today),
            selected: None,
            editing: None,
        }
    }

    // ── Month navigation ──────────────────────────────────────

    /// Changing month drops a selection that no longer lies in view.
    fn show(&mut self, month: YearMonth) {
        self.month = month;
        if self.selected.is_some_and(|d| !month.contains(d)) {
            self.selected = None;
        }
    }

    pub(crate) fn prev_month(&mut self) {
        self.show(self.month.prev());
    }

    pub(crate) fn next_month(&mut self) {
        self.show(self.month.next());
    }

    pub(crate) fn shift(&mut self, delta: i32) {
        self.show(self.month.shift(delta));
    }

    pub(crate) fn jump(&mut self, month: YearMonth) {
        self.show(month);
    }

    /// Selecting a day also brings its month into view.
    pub(crate) fn select_day(&mut self, date: NaiveDate) {
        self.month = YearMonth::of(date);
        self.selected = Some(date);
    }

    // ── Editing ───────────────────────────────────────────────

    pub(crate) fn begin_edit(&mut self, id: i64) {
        self.editing = Some(id);
    }

    /// Returns the id that was being edited.
    pub(crate) fn finish_edit(&mut self) -> Option<i64> {
        self.editing.take()
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

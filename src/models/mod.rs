mod expense;
mod period;
mod tag;

pub(crate) use expense::{ClockTime, ExpenseKey, ExpenseRecord, Source, MEMO_MAX_CHARS};
pub(crate) use period::YearMonth;
pub(crate) use tag::{ReinterpretedExpense, Tag};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::{Cell, Row, Store};
use crate::classify::{validate_entry, validate_fields};
use crate::errors::LedgerError;
use crate::models::{ClockTime, ExpenseKey, ExpenseRecord, Source};

const COLUMNS: &str = "id, date, time, category, reason, cost, memo";

/// Expense records of one source table, read and written through a [`Store`].
pub(crate) struct Ledger<'a, S: Store + ?Sized> {
    store: &'a S,
    source: Source,
}

impl<'a, S: Store + ?Sized> Ledger<'a, S> {
    pub(crate) fn new(store: &'a S, source: Source) -> Self {
        Self { store, source }
    }

    fn table(&self) -> &'static str {
        self.source.table()
    }

    // ── Reads ─────────────────────────────────────────────────

    pub(crate) fn load_all(&self) -> Result<Vec<ExpenseRecord>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY date, time, id",
            self.table()
        );
        self.load(&sql, &[])
    }

    /// Records dated in `[from, until)`.
    pub(crate) fn load_range(&self, from: NaiveDate, until: NaiveDate) -> Result<Vec<ExpenseRecord>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} WHERE date >= ?1 AND date < ?2 ORDER BY date, time, id",
            self.table()
        );
        self.load(&sql, &[date_cell(from), date_cell(until)])
    }

    /// Records dated on or after `from`, with no upper bound.
    pub(crate) fn load_since(&self, from: NaiveDate) -> Result<Vec<ExpenseRecord>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {} WHERE date >= ?1 ORDER BY date, time, id",
            self.table()
        );
        self.load(&sql, &[date_cell(from)])
    }

    pub(crate) fn get(&self, id: i64) -> Result<Option<ExpenseRecord>> {
        let sql = format!("SELECT {COLUMNS} FROM {} WHERE id = ?1", self.table());
        Ok(self.load(&sql, &[Cell::Integer(id)])?.into_iter().next())
    }

    fn load(&self, sql: &str, params: &[Cell]) -> Result<Vec<ExpenseRecord>> {
        let rows = self
            .store
            .query(sql, params)
            .with_context(|| format!("Failed to read expenses from '{}'", self.table()))?;
        let total = rows.len();
        let records: Vec<ExpenseRecord> = rows.iter().filter_map(parse_row).collect();
        let dropped = total - records.len();
        if dropped > 0 {
            tracing::warn!(
                table = self.table(),
                dropped,
                "skipped rows with an unreadable date or cost"
            );
        }
        tracing::debug!(table = self.table(), loaded = records.len(), "expenses loaded");
        Ok(records)
    }

    // ── Writes ────────────────────────────────────────────────

    pub(crate) fn insert(&self, record: &ExpenseRecord) -> Result<i64> {
        validate_entry(record)?;
        let sql = format!(
            "INSERT INTO {} (date, time, category, reason, cost, memo) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            self.table()
        );
        self.store.execute(&sql, &record_cells(record))?;
        let id = self
            .store
            .query("SELECT last_insert_rowid() AS id", &[])?
            .first()
            .and_then(|row| row.get("id").as_i64())
            .context("Store did not report the inserted id")?;
        tracing::info!(table = self.table(), id, cost = record.cost, "expense recorded");
        Ok(id)
    }

    /// Rows loaded with a pair outside the taxonomy stay editable; the pair is only
    /// checked when the edit changes it.
    pub(crate) fn update(&self, id: i64, record: &ExpenseRecord) -> Result<()> {
        let stored = self
            .get(id)?
            .ok_or_else(|| self.no_match(format!("id {id}")))?;
        if same_pair(&stored, record) {
            validate_fields(record)?;
        } else {
            validate_entry(record)?;
        }
        let sql = format!(
            "UPDATE {} SET date = ?1, time = ?2, category = ?3, reason = ?4, cost = ?5, memo = ?6 WHERE id = ?7",
            self.table()
        );
        let mut params = record_cells(record).to_vec();
        params.push(Cell::Integer(id));
        if self.store.execute(&sql, &params)? == 0 {
            return Err(self.no_match(format!("id {id}")).into());
        }
        tracing::info!(table = self.table(), id, key = %record.key(), "expense updated");
        Ok(())
    }

    pub(crate) fn delete(&self, id: i64) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", self.table());
        if self.store.execute(&sql, &[Cell::Integer(id)])? == 0 {
            return Err(self.no_match(format!("id {id}")).into());
        }
        tracing::info!(table = self.table(), id, "expense deleted");
        Ok(())
    }

    // ── Natural key ───────────────────────────────────────────

    /// Find the single row matching a natural key. Zero or several matches are errors;
    /// the caller never gets to pick one of several.
    pub(crate) fn resolve(&self, key: &ExpenseKey) -> Result<i64> {
        let mut sql = format!(
            "SELECT id, time FROM {} WHERE substr(date, 1, 10) = ?1 AND category = ?2 AND reason = ?3",
            self.table()
        );
        let mut params = vec![
            date_cell(key.date),
            Cell::from(key.major.as_str()),
            Cell::from(key.minor.as_str()),
        ];
        if let Some(cost) = key.cost {
            sql.push_str(" AND cost = ?4");
            params.push(Cell::Integer(cost));
        }

        let wanted = key.time.unwrap_or_default();
        let ids: Vec<i64> = self
            .store
            .query(&sql, &params)?
            .iter()
            .filter(|row| normalize_time(row.get("time")).unwrap_or_default() == wanted)
            .filter_map(|row| row.get("id").as_i64())
            .collect();

        match ids.as_slice() {
            [id] => Ok(*id),
            [] => Err(self.no_match(key.to_string()).into()),
            many => {
                tracing::warn!(table = self.table(), %key, count = many.len(), "ambiguous natural key");
                Err(LedgerError::Ambiguous {
                    table: self.table(),
                    key: key.to_string(),
                    count: many.len(),
                }
                .into())
            }
        }
    }

    pub(crate) fn delete_by_key(&self, key: &ExpenseKey) -> Result<i64> {
        let id = self.resolve(key)?;
        self.delete(id)?;
        Ok(id)
    }

    fn no_match(&self, key: String) -> LedgerError {
        LedgerError::NoMatch {
            table: self.table(),
            key,
        }
    }
}

fn same_pair(a: &ExpenseRecord, b: &ExpenseRecord) -> bool {
    a.major.trim() == b.major.trim() && a.minor.trim() == b.minor.trim()
}

fn date_cell(date: NaiveDate) -> Cell {
    Cell::Text(date.format("%Y-%m-%d").to_string())
}

fn record_cells(record: &ExpenseRecord) -> [Cell; 6] {
    [
        date_cell(record.date),
        Cell::from(record.time.map(ClockTime::to_sql)),
        Cell::from(record.major.trim()),
        Cell::from(record.minor.trim()),
        Cell::Integer(record.cost),
        Cell::from((!record.memo.is_empty()).then(|| record.memo.clone())),
    ]
}

/// Rows without a readable date or a non-negative cost are dropped. A bad time is not
/// a reason to drop: it becomes `None`.
pub(crate) fn parse_row(row: &Row) -> Option<ExpenseRecord> {
    let date = parse_date(row.get("date"))?;
    let cost = parse_cost(row.get("cost")).filter(|c| *c >= 0)?;
    Some(ExpenseRecord {
        id: row.get("id").as_i64(),
        date,
        time: normalize_time(row.get("time")),
        major: row.get("category").text_or_empty(),
        minor: row.get("reason").text_or_empty(),
        cost,
        memo: row.get("memo").text_or_empty(),
    })
}

fn parse_date(cell: &Cell) -> Option<NaiveDate> {
    let text = cell.as_text()?.trim();
    // Accept datetimes by their date part
    let day = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_cost(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Integer(i) => Some(*i),
        Cell::Real(f) if f.is_finite() => Some(f.round() as i64),
        Cell::Text(s) => {
            let cleaned = s.trim().replace(',', "");
            cleaned.parse::<i64>().ok().or_else(|| {
                cleaned
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
            })
        }
        _ => None,
    }
}

/// Times arrive as seconds since midnight or as text; anything else is `None`.
/// A TEXT column turns stored seconds into digit strings, so those count as seconds too.
pub(crate) fn normalize_time(cell: &Cell) -> Option<ClockTime> {
    match cell {
        Cell::Integer(secs) => Some(ClockTime::from_seconds(*secs)),
        Cell::Real(secs) => seconds_from_real(*secs),
        Cell::Text(s) => {
            let s = s.trim();
            if let Ok(secs) = s.parse::<i64>() {
                return Some(ClockTime::from_seconds(secs));
            }
            match s.parse::<f64>() {
                Ok(secs) => seconds_from_real(secs),
                Err(_) => ClockTime::parse(s),
            }
        }
        Cell::Null => None,
    }
}

fn seconds_from_real(secs: f64) -> Option<ClockTime> {
    secs.is_finite()
        .then(|| ClockTime::from_seconds(secs.trunc() as i64))
}

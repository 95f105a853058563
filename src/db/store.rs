use anyhow::Result;
use rusqlite::types::{ToSqlOutput, Value, ValueRef};
use rusqlite::ToSql;

/// A dynamically typed value crossing the store boundary.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Cell {
    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Text content, or empty for anything else.
    pub(crate) fn text_or_empty(&self) -> String {
        self.as_text().unwrap_or_default().to_string()
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<ValueRef<'_>> for Cell {
    fn from(v: ValueRef<'_>) -> Self {
        match v {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(i) => Self::Integer(i),
            ValueRef::Real(f) => Self::Real(f),
            ValueRef::Text(t) | ValueRef::Blob(t) => {
                Self::Text(String::from_utf8_lossy(t).into_owned())
            }
        }
    }
}

impl ToSql for Cell {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Null => ToSqlOutput::Owned(Value::Null),
            Self::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            Self::Real(f) => ToSqlOutput::Owned(Value::Real(*f)),
            Self::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

static NULL: Cell = Cell::Null;

/// One result row with named columns.
#[derive(Debug, Clone)]
pub(crate) struct Row {
    columns: Vec<String>,
    cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn new(columns: Vec<String>, cells: Vec<Cell>) -> Self {
        Self { columns, cells }
    }

    /// Missing columns read as NULL.
    pub(crate) fn get(&self, column: &str) -> &Cell {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))
            .and_then(|i| self.cells.get(i))
            .unwrap_or(&NULL)
    }
}

/// The thin query/execute interface the ledger is written against.
pub(crate) trait Store {
    fn query(&self, sql: &str, params: &[Cell]) -> Result<Vec<Row>>;

    /// Returns the number of affected rows.
    fn execute(&self, sql: &str, params: &[Cell]) -> Result<usize>;
}

// Table rendering - column descriptors resolved against rows
use chrono::{DateTime, Utc};

use crate::application::formatting::{date_time, plain_number};
use crate::domain::status::StatusToken;
use crate::domain::widgets::{Cell, Table};

/// A field value before formatting
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
    Count(u64),
    Timestamp(DateTime<Utc>),
    OptionalTimestamp(Option<DateTime<Utc>>),
    Status(StatusToken),
}

impl RawValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Count(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            Self::OptionalTimestamp(ts) => *ts,
            _ => None,
        }
    }

    /// Rendering used when a column has no formatter.
    pub fn plain(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(n) => plain_number(*n),
            Self::Count(n) => n.to_string(),
            Self::Timestamp(ts) => date_time(ts),
            Self::OptionalTimestamp(Some(ts)) => date_time(ts),
            Self::OptionalTimestamp(None) => "None".to_string(),
            Self::Status(token) => token.as_str().to_string(),
        }
    }
}

pub type Accessor<'a, R> = Box<dyn Fn(&R) -> RawValue + 'a>;
pub type Formatter<'a> = Box<dyn Fn(&RawValue) -> Cell + 'a>;

pub struct Column<'a, R> {
    pub header: &'static str,
    accessor: Accessor<'a, R>,
    formatter: Option<Formatter<'a>>,
}

impl<'a, R> Column<'a, R> {
    pub fn new(header: &'static str, accessor: impl Fn(&R) -> RawValue + 'a) -> Self {
        Self {
            header,
            accessor: Box::new(accessor),
            formatter: None,
        }
    }

    pub fn formatted(mut self, formatter: impl Fn(&RawValue) -> Cell + 'a) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    pub fn render(&self, row: &R) -> Cell {
        let raw = (self.accessor)(row);
        match &self.formatter {
            Some(format) => format(&raw),
            None => Cell::text(raw.plain()),
        }
    }
}

pub fn render_table<R>(title: &str, columns: &[Column<'_, R>], rows: &[R]) -> Table {
    Table {
        title: title.to_string(),
        columns: columns.iter().map(|c| c.header.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| columns.iter().map(|column| column.render(row)).collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::formatting::suffixed;

    struct Reading {
        name: &'static str,
        watts: f64,
    }

    #[test]
    fn test_columns_resolve_accessor_then_formatter() {
        let columns = vec![
            Column::new("Name", |r: &Reading| RawValue::Text(r.name.to_string())),
            Column::new("Power", |r: &Reading| RawValue::Number(r.watts)).formatted(suffixed(" W")),
        ];
        let rows = vec![
            Reading { name: "North", watts: 1200.0 },
            Reading { name: "South", watts: 980.5 },
        ];

        let table = render_table("Readings", &columns, &rows);

        assert_eq!(table.columns, vec!["Name", "Power"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], Cell::text("North"));
        assert_eq!(table.rows[0][1], Cell::text("1200 W"));
        assert_eq!(table.rows[1][1], Cell::text("980.5 W"));
    }

    #[test]
    fn test_plain_rendering_of_absent_timestamp() {
        assert_eq!(RawValue::OptionalTimestamp(None).plain(), "None");
        assert_eq!(RawValue::Count(42).plain(), "42");
        assert_eq!(RawValue::Status(StatusToken::Standby).plain(), "standby");
    }

    #[test]
    fn test_empty_rows_render_headers_only() {
        let columns = vec![Column::new("Name", |r: &Reading| RawValue::Text(r.name.to_string()))];
        let table = render_table("Readings", &columns, &[]);
        assert_eq!(table.columns, vec!["Name"]);
        assert!(table.rows.is_empty());
    }
}

//! Flat domain values read from and written to database cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Number, Value};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// The decoded value of a single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// the cell holds nothing, e.g. an empty rich text
    Empty,
    Bool(bool),
    /// kept as a json number so integers survive untouched
    Number(Number),
    Text(String),
    Date(NaiveDateTime),
    /// arrays and objects of property kinds without a dedicated decoder
    Json(Value),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::Json(_) => "json",
        }
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::Text(s),
            other => Self::Json(other),
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

/// NaN and infinities have no json representation and become [CellValue::Empty]
impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Empty, Self::Number)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value.and_time(NaiveTime::MIN))
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Parse the date strings the service (and people) produce.
///
/// RFC 3339 timestamps keep their local wall-clock time, plain dates land on midnight.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// A value destined for the named column of a new page.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue {
    pub name: String,
    pub value: CellValue,
}

impl PropertyValue {
    pub fn new(name: impl Into<String>, value: impl Into<CellValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

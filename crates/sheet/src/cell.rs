use chrono::NaiveDateTime;
use std::fmt;

/// Textual form of an absent cell value.
pub const MISSING_VALUE: &str = "nan";

/// Format used when a date-time cell is turned into text.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents a cell value in a sheet
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(NaiveDateTime),
    /// Spreadsheet error value such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Check if the value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Get the textual representation used when the value is typeset.
    ///
    /// Null and NaN become [`MISSING_VALUE`]. Floats holding a whole number
    /// drop their fractional part, date-times use [`DATETIME_FORMAT`].
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Null => MISSING_VALUE.to_string(),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => float_to_text(*f),
            CellValue::String(s) | CellValue::Error(s) => s.clone(),
            CellValue::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
        }
    }
}

fn float_to_text(f: f64) -> String {
    if f.is_nan() {
        return MISSING_VALUE.to_string();
    }
    // i64::MAX as f64 rounds up to 2^63, so the bound is exclusive
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        return (f as i64).to_string();
    }
    f.to_string()
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

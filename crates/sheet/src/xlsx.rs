use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Options for reading Excel files
#[derive(Debug, Clone, Default)]
pub struct XlsxReadOptions {
    /// Drop rows in which every cell is empty
    pub skip_empty_rows: bool,
}

impl XlsxReadOptions {
    /// Set whether fully empty rows are dropped
    #[must_use]
    pub fn with_skip_empty_rows(mut self, skip_empty_rows: bool) -> Self {
        self.skip_empty_rows = skip_empty_rows;
        self
    }
}

fn xlsx_error(e: XlsxError) -> SheetError {
    SheetError::Xlsx(e.to_string())
}

/// Convert an Excel serial date (days since 1899-12-30) to a date-time.
///
/// Fractions of a day are rounded to the nearest millisecond.
pub(crate) fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    epoch.checked_add_signed(Duration::try_milliseconds(millis)?)
}

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            excel_serial_to_datetime(serial).map_or(CellValue::Float(serial), CellValue::DateTime)
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

fn range_to_sheet(name: &str, range: &Range<Data>, options: &XlsxReadOptions) -> Sheet {
    let mut sheet = Sheet::with_name(name);
    *sheet.data_mut() = range
        .rows()
        .map(|row| row.iter().map(data_to_cell_value).collect())
        .collect();

    if options.skip_empty_rows {
        sheet.remove_empty_rows();
    }

    sheet
}

/// An open xlsx workbook.
///
/// The archive is parsed once; sheets are then read from the same handle.
pub struct XlsxWorkbook {
    inner: Xlsx<BufReader<File>>,
    options: XlsxReadOptions,
}

impl XlsxWorkbook {
    /// Open a workbook with default read options
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or is not an xlsx archive.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, XlsxReadOptions::default())
    }

    /// Open a workbook with the given read options
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or is not an xlsx archive.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: XlsxReadOptions) -> Result<Self> {
        let inner = open_workbook(path.as_ref()).map_err(xlsx_error)?;
        Ok(Self { inner, options })
    }

    /// Sheet names in workbook order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    /// Read one sheet by name.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::SheetNotFound`] for an unknown name, or an xlsx
    /// error when the worksheet cannot be decoded.
    pub fn read_sheet(&mut self, sheet_name: &str) -> Result<Sheet> {
        if !self.inner.sheet_names().iter().any(|n| n == sheet_name) {
            return Err(SheetError::SheetNotFound {
                name: sheet_name.to_string(),
            });
        }

        let range = self.inner.worksheet_range(sheet_name).map_err(xlsx_error)?;
        tracing::debug!(
            sheet = sheet_name,
            rows = range.height(),
            cols = range.width(),
            "read worksheet"
        );

        Ok(range_to_sheet(sheet_name, &range, &self.options))
    }

    /// Read every sheet into a [`Book`], keeping workbook order.
    ///
    /// # Errors
    ///
    /// Returns error if any worksheet cannot be decoded.
    pub fn read_book(&mut self) -> Result<Book> {
        let mut book = Book::new();
        for sheet_name in self.sheet_names() {
            let sheet = self.read_sheet(&sheet_name)?;
            book.add_sheet(&sheet_name, sheet)?;
        }
        Ok(book)
    }
}

impl Sheet {
    /// Load a specific sheet from an Excel file by name
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened, sheet not found, or read fails.
    pub fn from_xlsx_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Self> {
        Self::from_xlsx_sheet_with_options(path, sheet_name, &XlsxReadOptions::default())
    }

    /// Load a specific sheet from an Excel file with options
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened, sheet not found, or read fails.
    pub fn from_xlsx_sheet_with_options<P: AsRef<Path>>(
        path: P,
        sheet_name: &str,
        options: &XlsxReadOptions,
    ) -> Result<Self> {
        XlsxWorkbook::open_with_options(path, options.clone())?.read_sheet(sheet_name)
    }
}

impl Book {
    /// Load a book from an Excel file (all sheets)
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened or read.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_xlsx_with_options(path, &XlsxReadOptions::default())
    }

    /// Load a book from an Excel file with options
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened or read.
    pub fn from_xlsx_with_options<P: AsRef<Path>>(
        path: P,
        options: &XlsxReadOptions,
    ) -> Result<Self> {
        XlsxWorkbook::open_with_options(path, options.clone())?.read_book()
    }

    /// Get sheet names from an Excel file without loading data
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened.
    pub fn xlsx_sheet_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        Ok(XlsxWorkbook::open(path)?.sheet_names())
    }
}

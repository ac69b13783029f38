//! Sheet/Book model for xlsx2tex
//!
//! Holds the tabular data read from a workbook: ordered sheets made of rows of
//! [`CellValue`]s. Every value has a deterministic textual form, with absent
//! values rendered as the [`MISSING_VALUE`] sentinel.
//!
//! # Examples
//!
//! ## Creating a sheet from data
//!
//! ```
//! use xlsx2tex_sheet::{Sheet, CellValue};
//!
//! let sheet = Sheet::from_data(vec![
//!     vec!["Name", "Age", "City"],
//!     vec!["Alice", "30", "NYC"],
//!     vec!["Bob", "25", "LA"],
//! ]);
//!
//! assert_eq!(sheet.row_count(), 3);
//! assert_eq!(sheet.col_count(), 3);
//! assert_eq!(sheet.header_names().unwrap(), vec!["Name", "Age", "City"]);
//! assert_eq!(CellValue::Null.to_text(), "nan");
//! ```
//!
//! ## Loading a workbook
//!
//! ```no_run
//! use xlsx2tex_sheet::Book;
//!
//! let book = Book::from_xlsx("data.xlsx").unwrap();
//! for (name, sheet) in book.sheets() {
//!     println!("{name}: {} rows", sheet.row_count());
//! }
//! ```

mod book;
mod cell;
mod error;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type and its text constants.
pub use cell::{CellValue, DATETIME_FORMAT, MISSING_VALUE};
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet type.
pub use sheet::Sheet;
/// Re-export the xlsx reader and its options.
pub use xlsx::{XlsxReadOptions, XlsxWorkbook};

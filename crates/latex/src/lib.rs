//! booktabs LaTeX tables from spreadsheet sheets
//!
//! Cell text is wrapped at a fixed width on word boundaries; cells that end up
//! on several lines are stacked with `\makecell`, taking their column's
//! alignment.
//!
//! ```
//! use xlsx2tex_latex::{sheet_to_latex, TableOptions};
//! use xlsx2tex_sheet::Sheet;
//!
//! let sheet = Sheet::from_data(vec![
//!     vec!["Id", "Description"],
//!     vec!["1", "hello world"],
//! ]);
//!
//! let latex = sheet_to_latex(&sheet, &TableOptions::default().with_wrap_width(5)).unwrap();
//! assert!(latex.contains("\\begin{tabular}{@{}rl@{}}"));
//! assert!(latex.contains("1&\\makecell[l]{hello\\\\world}\\\\"));
//! ```

pub mod align;
pub mod cell;
pub mod error;
pub mod render;
pub mod table;
pub mod wrap;

use xlsx2tex_sheet::Sheet;

pub use align::{Alignment, AlignmentSpec};
pub use cell::{CellFormatter, RenderedCell};
pub use error::{LatexError, Result};
pub use render::TableRenderer;
pub use table::{Row, RowFormatter, TableModel, TableOptions, DEFAULT_WRAP_WIDTH};
pub use wrap::WordWrapper;

/// Convert a sheet (first row = column names) into a LaTeX document.
pub fn sheet_to_latex(sheet: &Sheet, options: &TableOptions) -> Result<String> {
    let table = TableModel::from_sheet(sheet, options)?;
    Ok(TableRenderer::new(&table).render())
}

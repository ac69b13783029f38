//! Cell formatting: wrapping, missing values and stacked multi-line cells.

use std::fmt::{self, Display, Write};

use xlsx2tex_sheet::{CellValue, MISSING_VALUE};

use crate::align::Alignment;
use crate::error::Result;
use crate::wrap::WordWrapper;

/// Name of the construct used for stacked cells.
pub const STACK_COMMAND: &str = "\\makecell";

/// Separator placed between the lines of a stacked cell.
pub const STACK_SEPARATOR: &str = "\\\\";

/// A formatted table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedCell {
    /// Single-line text, written as is
    Plain(String),
    /// Two or more lines stacked inside one cell
    Stacked(Vec<String>),
}

impl RenderedCell {
    /// An empty plain cell
    #[must_use]
    pub fn empty() -> Self {
        RenderedCell::Plain(String::new())
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        matches!(self, RenderedCell::Stacked(_))
    }

    /// Write the cell's LaTeX, stacked cells taking the column alignment.
    pub fn write_latex<W: Write>(&self, out: &mut W, align: Alignment) -> fmt::Result {
        match self {
            RenderedCell::Plain(text) => out.write_str(text),
            RenderedCell::Stacked(lines) => {
                write!(out, "{STACK_COMMAND}[{align}]{{")?;
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        out.write_str(STACK_SEPARATOR)?;
                    }
                    out.write_str(line)?;
                }
                out.write_char('}')
            }
        }
    }

    /// The cell's LaTeX as a string
    #[must_use]
    pub fn to_latex(&self, align: Alignment) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_latex(&mut out, align);
        out
    }
}

/// Turns raw cell values into [`RenderedCell`]s.
#[derive(Debug, Clone, Copy)]
pub struct CellFormatter {
    wrapper: WordWrapper,
}

impl CellFormatter {
    /// Create a formatter wrapping at `wrap_width` chars.
    pub fn new(wrap_width: usize) -> Result<Self> {
        Ok(Self {
            wrapper: WordWrapper::new(wrap_width)?,
        })
    }

    #[must_use]
    pub fn with_wrapper(wrapper: WordWrapper) -> Self {
        Self { wrapper }
    }

    #[must_use]
    pub fn wrapper(&self) -> &WordWrapper {
        &self.wrapper
    }

    /// Format a sheet cell through its textual form.
    #[must_use]
    pub fn format(&self, value: &CellValue) -> RenderedCell {
        self.format_text(&value.to_text())
    }

    /// Format any displayable value.
    #[must_use]
    pub fn format_display<T: Display + ?Sized>(&self, value: &T) -> RenderedCell {
        self.format_text(&value.to_string())
    }

    /// Wrap `text` and classify the result.
    ///
    /// Text equal to the missing-value sentinel (ignoring case) becomes an
    /// empty cell.
    #[must_use]
    pub fn format_text(&self, text: &str) -> RenderedCell {
        let wrapped = self.wrapper.wrap(text);

        if wrapped.eq_ignore_ascii_case(MISSING_VALUE) {
            return RenderedCell::empty();
        }
        if !wrapped.contains('\n') {
            return RenderedCell::Plain(wrapped);
        }
        RenderedCell::Stacked(wrapped.split('\n').map(str::to_string).collect())
    }
}

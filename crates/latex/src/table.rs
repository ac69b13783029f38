use xlsx2tex_sheet::{CellValue, Sheet};

use crate::align::{Alignment, AlignmentSpec};
use crate::cell::{CellFormatter, RenderedCell};
use crate::error::{LatexError, Result};
use crate::wrap::WordWrapper;

/// Wrap width used when none is configured.
pub const DEFAULT_WRAP_WIDTH: usize = 50;

/// Per-table configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Maximum chars per line inside a cell
    pub wrap_width: usize,
    /// Alignment override such as `rcl`; the default is `r` then `l`s
    pub alignment: Option<String>,
    /// Draw a `\midrule` after every body row
    pub midrule: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            alignment: None,
            midrule: false,
        }
    }
}

impl TableOptions {
    #[must_use]
    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.alignment = Some(alignment.into());
        self
    }

    #[must_use]
    pub fn with_midrule(mut self, midrule: bool) -> Self {
        self.midrule = midrule;
        self
    }

    /// Resolve the alignment for a table with `columns` columns.
    pub fn alignment_for(&self, columns: usize) -> Result<AlignmentSpec> {
        match &self.alignment {
            Some(spec) => AlignmentSpec::parse_for(spec, columns),
            None => Ok(AlignmentSpec::default_for(columns)),
        }
    }
}

/// One formatted body row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<RenderedCell>,
}

impl Row {
    #[must_use]
    pub fn new(cells: Vec<RenderedCell>) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn cells(&self) -> &[RenderedCell] {
        &self.cells
    }

    /// Pair each cell with its column's alignment.
    pub fn aligned<'a>(
        &'a self,
        alignment: &'a AlignmentSpec,
    ) -> impl Iterator<Item = (&'a RenderedCell, Alignment)> + 'a {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell, alignment.get(i).unwrap_or(Alignment::Left)))
    }
}

/// Formats whole rows, one [`RenderedCell`] per column.
#[derive(Debug, Clone, Copy)]
pub struct RowFormatter {
    cell_formatter: CellFormatter,
    columns: usize,
}

impl RowFormatter {
    #[must_use]
    pub fn new(cell_formatter: CellFormatter, columns: usize) -> Self {
        Self {
            cell_formatter,
            columns,
        }
    }

    /// Format `values` in column order.
    ///
    /// Short rows are padded with empty cells; cells past the last column are
    /// dropped.
    #[must_use]
    pub fn format_row(&self, values: &[CellValue]) -> Row {
        if values.len() > self.columns {
            tracing::warn!(
                cells = values.len(),
                columns = self.columns,
                "row wider than header, extra cells dropped"
            );
        }

        let mut cells: Vec<RenderedCell> = values
            .iter()
            .take(self.columns)
            .map(|value| self.cell_formatter.format(value))
            .collect();
        cells.resize(self.columns, RenderedCell::empty());
        Row::new(cells)
    }
}

/// A table ready to be rendered: columns, alignment, body rows and the
/// rule-line toggle.
#[derive(Debug, Clone)]
pub struct TableModel {
    columns: Vec<String>,
    alignment: AlignmentSpec,
    rows: Vec<Row>,
    midrule: bool,
    row_formatter: RowFormatter,
}

impl TableModel {
    /// Create an empty table, validating `options` against the columns.
    ///
    /// # Errors
    ///
    /// Fails on an empty column set, a zero wrap width, or an alignment
    /// override that is malformed or does not match the column count.
    pub fn new(columns: Vec<String>, options: &TableOptions) -> Result<Self> {
        if columns.is_empty() {
            return Err(LatexError::NoColumns);
        }

        let wrapper = WordWrapper::new(options.wrap_width)?;
        let alignment = options.alignment_for(columns.len())?;
        let row_formatter = RowFormatter::new(CellFormatter::with_wrapper(wrapper), columns.len());

        Ok(Self {
            columns,
            alignment,
            rows: Vec::new(),
            midrule: options.midrule,
            row_formatter,
        })
    }

    /// Build a table from a sheet whose first row holds the column names.
    pub fn from_sheet(sheet: &Sheet, options: &TableOptions) -> Result<Self> {
        if sheet.is_empty() {
            return Err(LatexError::NoColumns);
        }

        let mut table = Self::new(sheet.header_names()?, options)?;
        for row in sheet.body_rows() {
            table.push_row(row);
        }

        tracing::debug!(
            sheet = sheet.name(),
            columns = table.columns.len(),
            rows = table.rows.len(),
            alignment = %table.alignment,
            "built table"
        );
        Ok(table)
    }

    /// Format and append one body row.
    pub fn push_row(&mut self, values: &[CellValue]) {
        let row = self.row_formatter.format_row(values);
        self.rows.push(row);
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn alignment(&self) -> &AlignmentSpec {
        &self.alignment
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn midrule(&self) -> bool {
        self.midrule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_options() {
        let options = TableOptions::default();
        assert_eq!(options.wrap_width, 50);
        assert!(options.alignment.is_none());
        assert!(!options.midrule);
    }

    #[test]
    fn test_default_alignment_for_four_columns() {
        let table = TableModel::new(names(&["a", "b", "c", "d"]), &TableOptions::default()).unwrap();
        assert_eq!(table.alignment().to_string(), "rlll");
    }

    #[test]
    fn test_alignment_override() {
        let options = TableOptions::default().with_alignment("ccr");
        let table = TableModel::new(names(&["a", "b", "c"]), &options).unwrap();
        assert_eq!(table.alignment().to_string(), "ccr");
    }

    #[test]
    fn test_alignment_mismatch_rejected() {
        let options = TableOptions::default().with_alignment("rl");
        let err = TableModel::new(names(&["a", "b", "c"]), &options).unwrap_err();
        assert!(matches!(err, LatexError::AlignmentLengthMismatch { .. }));
    }

    #[test]
    fn test_zero_width_rejected() {
        let options = TableOptions::default().with_wrap_width(0);
        let err = TableModel::new(names(&["a"]), &options).unwrap_err();
        assert!(matches!(err, LatexError::InvalidWrapWidth { width: 0 }));
    }

    #[test]
    fn test_no_columns_rejected() {
        let err = TableModel::new(Vec::new(), &TableOptions::default()).unwrap_err();
        assert!(matches!(err, LatexError::NoColumns));
    }

    #[test]
    fn test_rows_keep_order_and_width() {
        let mut table = TableModel::new(names(&["a", "b"]), &TableOptions::default()).unwrap();
        table.push_row(&[CellValue::from("r1")]);
        table.push_row(&[
            CellValue::from("r2"),
            CellValue::from("x"),
            CellValue::from("dropped"),
        ]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows()[0].cells(),
            &[RenderedCell::Plain("r1".into()), RenderedCell::empty()]
        );
        assert_eq!(
            table.rows()[1].cells(),
            &[RenderedCell::Plain("r2".into()), RenderedCell::Plain("x".into())]
        );
    }

    #[test]
    fn test_each_table_owns_its_rows() {
        let options = TableOptions::default();
        let mut first = TableModel::new(names(&["a"]), &options).unwrap();
        let second = TableModel::new(names(&["a"]), &options).unwrap();
        first.push_row(&[CellValue::Int(1)]);

        assert_eq!(first.row_count(), 1);
        assert_eq!(second.row_count(), 0);
    }

    #[test]
    fn test_from_sheet() {
        let sheet = Sheet::from_data(vec![
            vec![CellValue::from("Name"), CellValue::from("Score")],
            vec![CellValue::from("Alice"), CellValue::Float(9.0)],
            vec![CellValue::from("Bob"), CellValue::Null],
        ]);
        let table = TableModel::from_sheet(&sheet, &TableOptions::default()).unwrap();

        assert_eq!(table.columns(), &["Name".to_string(), "Score".to_string()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0].cells()[1], RenderedCell::Plain("9".into()));
        assert_eq!(table.rows()[1].cells()[1], RenderedCell::empty());
    }

    #[test]
    fn test_from_empty_sheet() {
        let err = TableModel::from_sheet(&Sheet::new(), &TableOptions::default()).unwrap_err();
        assert!(matches!(err, LatexError::NoColumns));
    }

    #[test]
    fn test_aligned_cells() {
        let spec = AlignmentSpec::default_for(2);
        let row = Row::new(vec![RenderedCell::empty(), RenderedCell::empty()]);
        let aligns: Vec<Alignment> = row.aligned(&spec).map(|(_, a)| a).collect();
        assert_eq!(aligns, vec![Alignment::Right, Alignment::Left]);
    }
}

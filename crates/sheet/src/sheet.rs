use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use std::collections::HashMap;

/// A 2D grid of cell values, the first row usually holding column names
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns (width of the widest row)
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the sheet is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Result<&Vec<CellValue>> {
        self.data.get(index).ok_or(SheetError::RowIndexOutOfBounds {
            index,
            count: self.data.len(),
        })
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = &Vec<CellValue>> {
        self.data.iter()
    }

    /// Rows after the header row
    pub fn body_rows(&self) -> impl Iterator<Item = &Vec<CellValue>> {
        self.data.iter().skip(1)
    }

    /// Get a reference to the underlying data
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Get a mutable reference to the underlying data
    pub fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }

    /// Append a row
    pub fn row_append<T: Into<CellValue>>(&mut self, data: Vec<T>) {
        self.data.push(data.into_iter().map(Into::into).collect());
    }

    /// Drop rows in which every cell is null
    ///
    /// Returns the number of rows removed.
    pub fn remove_empty_rows(&mut self) -> usize {
        let before = self.data.len();
        self.data.retain(|row| !row.iter().all(CellValue::is_null));
        before - self.data.len()
    }

    /// Column names taken from the first row.
    ///
    /// Blank header cells are named `Unnamed: <index>` and repeated names get a
    /// `.1`, `.2`, ... suffix, so every name is unique. The list spans
    /// [`Sheet::col_count`] columns.
    pub fn header_names(&self) -> Result<Vec<String>> {
        let header_row = self.row(0)?;
        let width = self.col_count();
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut names = Vec::with_capacity(width);

        for index in 0..width {
            let base = match header_row.get(index) {
                None | Some(CellValue::Null) => format!("Unnamed: {index}"),
                Some(cell) => {
                    let text = cell.to_text();
                    if text.trim().is_empty() {
                        format!("Unnamed: {index}")
                    } else {
                        text
                    }
                }
            };

            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}.{count}")
            };
            *count += 1;
            names.push(name);
        }

        Ok(names)
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

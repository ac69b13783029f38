use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// The sheets of a workbook, keyed by name in workbook order
#[derive(Debug, Clone, Default)]
pub struct Book {
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Sheet names in workbook order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Look a sheet up by its workbook name.
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets.get(name).ok_or_else(|| SheetError::SheetNotFound {
            name: name.to_string(),
        })
    }

    /// Look a sheet up by its 0-based workbook position.
    pub fn get_sheet_by_index(&self, index: usize) -> Result<&Sheet> {
        match self.sheets.get_index(index) {
            Some((_, sheet)) => Ok(sheet),
            None => Err(SheetError::SheetIndexOutOfBounds {
                index,
                count: self.sheet_count(),
            }),
        }
    }

    /// Append `sheet` under `name`, renaming the sheet to match.
    ///
    /// Workbook sheet names are unique, so a second sheet with the same name
    /// is rejected.
    pub fn add_sheet(&mut self, name: &str, mut sheet: Sheet) -> Result<()> {
        if self.has_sheet(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        Ok(())
    }

    /// `(name, sheet)` pairs in workbook order
    pub fn sheets(&self) -> impl Iterator<Item = (&str, &Sheet)> {
        self.sheets
            .iter()
            .map(|(name, sheet)| (name.as_str(), sheet))
    }
}

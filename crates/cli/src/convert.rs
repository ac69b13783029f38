//! Workbook to `.tex` batch conversion.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use xlsx2tex_latex::{TableModel, TableOptions, TableRenderer, WordWrapper};
use xlsx2tex_sheet::{Sheet, XlsxReadOptions, XlsxWorkbook};

/// Everything needed to convert one workbook.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub xlsx: PathBuf,
    pub out_dir: PathBuf,
    pub wrap_width: usize,
    /// `&`-separated alignment overrides, one per selected sheet
    pub alignment: Option<String>,
    pub midrule: bool,
    /// 1-based sheet numbers; `None` converts every sheet
    pub sheets: Option<Vec<usize>>,
    /// Drop rows whose cells are all empty before building tables
    pub skip_empty_rows: bool,
}

/// One sheet to convert and the options it gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetJob {
    pub name: String,
    pub options: TableOptions,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub written: Vec<(String, PathBuf)>,
    pub failed: Vec<(String, anyhow::Error)>,
}

impl ConversionReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Turn a sheet name into a `.tex` file name.
///
/// Spaces become underscores, alphanumerics and `-().` are kept, anything
/// else is dropped.
pub fn friendly_file_name(name: &str) -> String {
    let mut file_name: String = name
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            c if c.is_alphanumeric() || "-().".contains(c) => Some(c),
            _ => None,
        })
        .collect();
    file_name.push_str(".tex");
    file_name
}

/// Resolve the selected sheets and give each its table options.
///
/// Fails before any sheet is read when a sheet number is out of range or
/// there are more alignment overrides than selected sheets.
pub fn plan_jobs(sheet_names: &[String], config: &ConvertConfig) -> Result<Vec<SheetJob>> {
    let indexes: Vec<usize> = match &config.sheets {
        None => (0..sheet_names.len()).collect(),
        Some(numbers) => numbers
            .iter()
            .map(|&n| {
                if n == 0 || n > sheet_names.len() {
                    bail!(
                        "Sheet number {n} is out of range (workbook has {} sheets)",
                        sheet_names.len()
                    );
                }
                Ok(n - 1)
            })
            .collect::<Result<_>>()?,
    };

    let overrides: Vec<&str> = config
        .alignment
        .as_deref()
        .map(|spec| spec.split('&').collect())
        .unwrap_or_default();
    if overrides.len() > indexes.len() {
        bail!(
            "{} alignment overrides given for {} selected sheets",
            overrides.len(),
            indexes.len()
        );
    }

    let base = TableOptions::default()
        .with_wrap_width(config.wrap_width)
        .with_midrule(config.midrule);

    Ok(indexes
        .into_iter()
        .enumerate()
        .map(|(i, index)| {
            let options = match overrides.get(i) {
                Some(spec) if !spec.is_empty() => base.clone().with_alignment(*spec),
                _ => base.clone(),
            };
            SheetJob {
                name: sheet_names[index].clone(),
                options,
            }
        })
        .collect())
}

/// Render one sheet into `out_dir`, returning the written path.
pub fn convert_sheet(sheet: &Sheet, options: &TableOptions, out_dir: &Path) -> Result<PathBuf> {
    let table = TableModel::from_sheet(sheet, options)
        .with_context(|| format!("Failed to build table for sheet '{}'", sheet.name()))?;
    let latex = TableRenderer::new(&table).render();

    let path = out_dir.join(friendly_file_name(sheet.name()));
    fs::write(&path, latex).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Convert every selected sheet of the workbook.
///
/// Configuration problems abort the run. A failing sheet is recorded in the
/// report and the remaining sheets are still converted.
pub fn run(config: &ConvertConfig) -> Result<ConversionReport> {
    WordWrapper::new(config.wrap_width)?;

    let read_options = XlsxReadOptions::default().with_skip_empty_rows(config.skip_empty_rows);
    let mut workbook = XlsxWorkbook::open_with_options(&config.xlsx, read_options)
        .with_context(|| format!("Failed to open workbook: {}", config.xlsx.display()))?;
    let jobs = plan_jobs(&workbook.sheet_names(), config)?;

    fs::create_dir_all(&config.out_dir).with_context(|| {
        format!("Failed to create output directory: {}", config.out_dir.display())
    })?;

    let mut report = ConversionReport::default();
    let mut seen_files = HashSet::new();

    for job in jobs {
        tracing::info!(sheet = %job.name, "converting sheet");

        let result = workbook
            .read_sheet(&job.name)
            .with_context(|| format!("Failed to read sheet '{}'", job.name))
            .and_then(|sheet| convert_sheet(&sheet, &job.options, &config.out_dir));

        match result {
            Ok(path) => {
                if !seen_files.insert(path.clone()) {
                    tracing::warn!(
                        sheet = %job.name,
                        path = %path.display(),
                        "output file overwritten by a sheet with a similar name"
                    );
                }
                report.written.push((job.name, path));
            }
            Err(e) => {
                tracing::error!(sheet = %job.name, "conversion failed: {e:#}");
                report.failed.push((job.name, e));
            }
        }
    }

    Ok(report)
}

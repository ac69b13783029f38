//! booktabs document rendering
//!
//! The document is assembled from four sections written in order:
//!
//! ```text
//! preamble (package comment) -> header (environment + column names) -> body -> footer
//! ```

use std::fmt::{self, Write};

use crate::table::TableModel;

/// Packages the generated document relies on.
pub const REQUIRED_PACKAGES: [&str; 4] = ["booktabs", "makecell", "multirow", "graphicx"];

const COLUMN_SEPARATOR: &str = "&";
const ROW_END: &str = "\\\\";
const MIDRULE: &str = "\\midrule";

/// Serializes a [`TableModel`] into a complete LaTeX table.
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer<'a> {
    table: &'a TableModel,
}

impl<'a> TableRenderer<'a> {
    #[must_use]
    pub fn new(table: &'a TableModel) -> Self {
        Self { table }
    }

    /// Render the whole document.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write every section in order.
    pub fn write_document<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_preamble(out)?;
        self.write_header(out)?;
        self.write_body(out)?;
        self.write_footer(out)
    }

    /// Comment block naming the required packages.
    pub fn write_preamble<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(
            out,
            "% This is an auto-generated table. The following packages should be included:"
        )?;
        for package in REQUIRED_PACKAGES {
            writeln!(out, "% \t\\usepackage{{{package}}}")?;
        }
        Ok(())
    }

    /// Table environment opening, tabular spec and the bold column names.
    pub fn write_header<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("%\n")?;
        out.write_str("\\begin{table*}[!th]\n")?;
        out.write_str("\\centering\n")?;
        out.write_str("\\caption{}\n")?;
        out.write_str("\\label{tab:}\n")?;
        out.write_str("\\resizebox{\\textwidth}{!}{%\n")?;
        writeln!(
            out,
            "\\begin{{tabular}}{{@{{}}{}@{{}}}}\\toprule",
            self.table.alignment()
        )?;
        out.write_str("%\n")?;

        for (i, name) in self.table.columns().iter().enumerate() {
            if i > 0 {
                out.write_str(COLUMN_SEPARATOR)?;
            }
            write!(out, "\\textbf{{{name}}}")?;
        }
        write!(out, "{ROW_END}{MIDRULE}")
    }

    /// One `% Row <n>` comment and cell line per body row.
    pub fn write_body<W: Write>(&self, out: &mut W) -> fmt::Result {
        let alignment = self.table.alignment();

        for (n, row) in self.table.rows().iter().enumerate() {
            write!(out, "\n% Row {n}\n")?;
            for (i, (cell, align)) in row.aligned(alignment).enumerate() {
                if i > 0 {
                    out.write_str(COLUMN_SEPARATOR)?;
                }
                cell.write_latex(out, align)?;
            }
            out.write_str(ROW_END)?;
            if self.table.midrule() {
                out.write_str(MIDRULE)?;
            }
        }
        Ok(())
    }

    /// Closing rules and environments, ending with a bare `%`.
    pub fn write_footer<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("\n%\n")?;
        out.write_str("\\bottomrule\n")?;
        out.write_str("\\end{tabular}%\n")?;
        out.write_str("}\n")?;
        out.write_str("\\end{table*}\n")?;
        out.write_str("%")
    }
}

impl fmt::Display for TableRenderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_document(f)
    }
}

impl fmt::Display for TableModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TableRenderer::new(self).write_document(f)
    }
}

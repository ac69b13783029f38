use chrono::NaiveDate;
use xlsx2tex_latex::{sheet_to_latex, LatexError, TableModel, TableOptions, TableRenderer};
use xlsx2tex_sheet::{CellValue, Sheet};

fn sheet(rows: Vec<Vec<CellValue>>) -> Sheet {
    Sheet::from_data(rows)
}

fn text(s: &str) -> CellValue {
    CellValue::from(s)
}

// ===== Full Document =====

#[test]
fn test_full_document() {
    let input = sheet(vec![
        vec![text("Name"), text("Notes")],
        vec![text("Alice"), text("short")],
        vec![text("Bob"), text("hello world")],
    ]);

    let latex = sheet_to_latex(&input, &TableOptions::default().with_wrap_width(5)).unwrap();

    let expected = concat!(
        "% This is an auto-generated table. The following packages should be included:\n",
        "% \t\\usepackage{booktabs}\n",
        "% \t\\usepackage{makecell}\n",
        "% \t\\usepackage{multirow}\n",
        "% \t\\usepackage{graphicx}\n",
        "%\n",
        "\\begin{table*}[!th]\n",
        "\\centering\n",
        "\\caption{}\n",
        "\\label{tab:}\n",
        "\\resizebox{\\textwidth}{!}{%\n",
        "\\begin{tabular}{@{}rl@{}}\\toprule\n",
        "%\n",
        "\\textbf{Name}&\\textbf{Notes}\\\\\\midrule\n",
        "% Row 0\n",
        "Alice&short\\\\\n",
        "% Row 1\n",
        "Bob&\\makecell[l]{hello\\\\world}\\\\\n",
        "%\n",
        "\\bottomrule\n",
        "\\end{tabular}%\n",
        "}\n",
        "\\end{table*}\n",
        "%",
    );
    assert_eq!(latex, expected);
}

#[test]
fn test_table_without_rows() {
    let input = sheet(vec![vec![text("Only")]]);
    let latex = sheet_to_latex(&input, &TableOptions::default()).unwrap();

    assert!(latex.contains("\\textbf{Only}\\\\\\midrule\n%\n\\bottomrule"));
    assert!(!latex.contains("% Row"));
}

#[test]
fn test_output_is_deterministic() {
    let input = sheet(vec![
        vec![text("a"), text("b")],
        vec![CellValue::Float(1.5), CellValue::Bool(true)],
        vec![CellValue::Null, text("some longer text that needs wrapping here")],
    ]);
    let options = TableOptions::default().with_wrap_width(10);

    let first = TableModel::from_sheet(&input, &options).unwrap();
    let second = TableModel::from_sheet(&input, &options).unwrap();
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.to_string(), first.to_string());
}

// ===== Rows =====

#[test]
fn test_row_comments_in_order() {
    let input = sheet(vec![
        vec![text("k"), text("v")],
        vec![text("R1"), text("x")],
        vec![text("R2"), text("y")],
        vec![text("R3"), text("z")],
    ]);
    let latex = sheet_to_latex(&input, &TableOptions::default()).unwrap();

    let row0 = latex.find("% Row 0\nR1&x\\\\").unwrap();
    let row1 = latex.find("% Row 1\nR2&y\\\\").unwrap();
    let row2 = latex.find("% Row 2\nR3&z\\\\").unwrap();
    assert!(row0 < row1 && row1 < row2);
    assert!(!latex.contains("% Row 3"));
}

#[test]
fn test_missing_cells_are_empty() {
    let input = sheet(vec![
        vec![text("a"), text("b"), text("c")],
        vec![CellValue::Null, text("NaN"), CellValue::Float(f64::NAN)],
    ]);
    let latex = sheet_to_latex(&input, &TableOptions::default()).unwrap();
    assert!(latex.contains("% Row 0\n&&\\\\"));
}

#[test]
fn test_numbers_and_dates() {
    let date = NaiveDate::from_ymd_opt(2020, 1, 31)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let input = sheet(vec![
        vec![text("n"), text("f"), text("d"), text("b")],
        vec![
            CellValue::Int(7),
            CellValue::Float(2.0),
            CellValue::DateTime(date),
            CellValue::Bool(false),
        ],
    ]);
    let latex = sheet_to_latex(&input, &TableOptions::default()).unwrap();
    assert!(latex.contains("% Row 0\n7&2&2020-01-31 00:00:00&False\\\\"));
}

// ===== Rule Lines =====

#[test]
fn test_midrule_toggle() {
    let input = sheet(vec![
        vec![text("a")],
        vec![text("1")],
        vec![text("2")],
        vec![text("3")],
    ]);

    let off = sheet_to_latex(&input, &TableOptions::default()).unwrap();
    // The only \midrule is the one under the header
    assert_eq!(off.matches("\\midrule").count(), 1);

    let on = sheet_to_latex(&input, &TableOptions::default().with_midrule(true)).unwrap();
    assert_eq!(on.matches("\\midrule").count(), 4);
    assert!(on.contains("% Row 2\n3\\\\\\midrule\n%\n\\bottomrule"));
}

// ===== Alignment =====

#[test]
fn test_default_alignment_four_columns() {
    let input = sheet(vec![vec![text("a"), text("b"), text("c"), text("d")]]);
    let latex = sheet_to_latex(&input, &TableOptions::default()).unwrap();
    assert!(latex.contains("\\begin{tabular}{@{}rlll@{}}\\toprule"));
}

#[test]
fn test_alignment_override_reaches_stacked_cells() {
    let input = sheet(vec![
        vec![text("a"), text("b")],
        vec![text("one two"), text("three four")],
    ]);
    let options = TableOptions::default()
        .with_wrap_width(3)
        .with_alignment("cr");
    let table = TableModel::from_sheet(&input, &options).unwrap();
    let latex = TableRenderer::new(&table).render();

    assert!(latex.contains("{@{}cr@{}}"));
    assert!(latex.contains("\\makecell[c]{one\\\\two}&\\makecell[r]{three \\\\four}\\\\"));
}

#[test]
fn test_alignment_mismatch_is_error() {
    let input = sheet(vec![vec![text("a"), text("b")]]);
    let err = sheet_to_latex(&input, &TableOptions::default().with_alignment("rll")).unwrap_err();
    assert!(matches!(
        err,
        LatexError::AlignmentLengthMismatch {
            expected: 2,
            actual: 3,
            ..
        }
    ));
}

#[test]
fn test_empty_sheet_is_error() {
    let err = sheet_to_latex(&Sheet::new(), &TableOptions::default()).unwrap_err();
    assert!(matches!(err, LatexError::NoColumns));
}

// ===== Wrapping Through Cells =====

#[test]
fn test_explicit_breaks_in_cells() {
    let input = sheet(vec![vec![text("a"), text("b")], vec![text("x"), text("line1\nline2")]]);
    let latex = sheet_to_latex(&input, &TableOptions::default()).unwrap();
    assert!(latex.contains("x&\\makecell[l]{line1\\\\line2}\\\\"));
}

#[test]
fn test_header_names_are_not_wrapped() {
    let input = sheet(vec![vec![text("a very long column heading")], vec![text("v")]]);
    let latex = sheet_to_latex(&input, &TableOptions::default().with_wrap_width(4)).unwrap();
    assert!(latex.contains("\\textbf{a very long column heading}\\\\\\midrule"));
}
